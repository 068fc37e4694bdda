//! Book handlers

use axum::{
    extract::{Path, State},
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::Form;
use maud::Markup;
use validator::Validate;

use crate::{
    error::AppResult,
    models::book::{BookForm, NewBook},
    services::books::BookDelete,
    views, AppState,
};

use super::{parse_reference, validation_messages};

/// Display list of all books
pub async fn list(State(state): State<AppState>) -> AppResult<Markup> {
    let books = state.services.books.list().await?;
    Ok(views::books::list(&books))
}

/// Display detail page for a specific book
pub async fn detail(State(state): State<AppState>, Path(id): Path<i32>) -> AppResult<Markup> {
    let details = state.services.books.detail(id).await?;
    Ok(views::books::detail(&details))
}

/// Display book create form on GET, with selectable authors and genres
pub async fn create_get(State(state): State<AppState>) -> AppResult<Markup> {
    let context = state.services.books.form_context().await?;
    Ok(views::books::form(
        "Create Book",
        &BookForm::default(),
        &context,
        &[],
    ))
}

/// Handle book create on POST
pub async fn create_post(
    State(state): State<AppState>,
    Form(form): Form<BookForm>,
) -> AppResult<Response> {
    match parse_form(&form) {
        Ok(book) => {
            let created = state.services.books.create(&book).await?;
            Ok(Redirect::to(&created.url()).into_response())
        }
        Err(messages) => {
            let context = state.services.books.form_context().await?;
            Ok(views::books::form("Create Book", &form, &context, &messages).into_response())
        }
    }
}

/// Display book delete confirmation on GET
pub async fn delete_get(State(state): State<AppState>, Path(id): Path<i32>) -> AppResult<Markup> {
    let details = state.services.books.detail(id).await?;
    Ok(views::books::delete(&details))
}

/// Handle book delete on POST. Re-renders the confirmation page when copies
/// of the book still exist.
pub async fn delete_post(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Response> {
    match state.services.books.delete(id).await? {
        BookDelete::Deleted => Ok(Redirect::to("/catalog/books").into_response()),
        BookDelete::HasCopies(details) => Ok(views::books::delete(&details).into_response()),
    }
}

/// Display book update form on GET, pre-populated from the record
pub async fn update_get(State(state): State<AppState>, Path(id): Path<i32>) -> AppResult<Markup> {
    let (book, genres) = state.services.books.get_with_genres(id).await?;
    let context = state.services.books.form_context().await?;
    let genre_ids: Vec<i32> = genres.iter().map(|g| g.id).collect();

    Ok(views::books::form(
        "Update Book",
        &BookForm::from_book(&book, &genre_ids),
        &context,
        &[],
    ))
}

/// Handle book update on POST
pub async fn update_post(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Form(form): Form<BookForm>,
) -> AppResult<Response> {
    match parse_form(&form) {
        Ok(book) => {
            let updated = state.services.books.update(id, &book).await?;
            Ok(Redirect::to(&updated.url()).into_response())
        }
        Err(messages) => {
            let context = state.services.books.form_context().await?;
            Ok(views::books::form("Update Book", &form, &context, &messages).into_response())
        }
    }
}

/// Validate and parse the raw form into persistable fields. Trimming comes
/// first, so a whitespace-only field fails its required check.
fn parse_form(form: &BookForm) -> Result<NewBook, Vec<String>> {
    let form = form.trimmed();
    let mut messages = match form.validate() {
        Ok(()) => Vec::new(),
        Err(errors) => validation_messages(&errors, &["title", "author", "summary", "isbn"]),
    };

    // The author select submits an id; a non-empty but unparseable value is
    // its own error, distinct from the blank case caught above.
    let author_id = if form.author.is_empty() {
        0
    } else {
        parse_reference(&form.author, "Invalid author").unwrap_or_else(|message| {
            messages.push(message);
            0
        })
    };

    if !messages.is_empty() {
        return Err(messages);
    }

    Ok(NewBook {
        title: form.title,
        author_id,
        summary: form.summary,
        isbn: form.isbn,
        genre_ids: form.genre,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_form_blank_title() {
        let form = BookForm {
            title: String::new(),
            author: "1".to_string(),
            summary: "A book.".to_string(),
            isbn: "9780756404741".to_string(),
            genre: vec![],
        };
        let messages = parse_form(&form).unwrap_err();
        assert_eq!(messages, vec!["Title must not be empty.".to_string()]);
    }

    #[test]
    fn test_parse_form_whitespace_only_fields() {
        let form = BookForm {
            title: "   ".to_string(),
            author: " ".to_string(),
            summary: "\t".to_string(),
            isbn: "  ".to_string(),
            genre: vec![],
        };
        let messages = parse_form(&form).unwrap_err();
        assert_eq!(
            messages,
            vec![
                "Title must not be empty.".to_string(),
                "Author must not be empty.".to_string(),
                "Summary must not be empty.".to_string(),
                "ISBN must not be empty.".to_string(),
            ]
        );
    }

    #[test]
    fn test_parse_form_whitespace_author_rejected() {
        let form = BookForm {
            title: "T".to_string(),
            author: " ".to_string(),
            summary: "S".to_string(),
            isbn: "I".to_string(),
            genre: vec![],
        };
        let messages = parse_form(&form).unwrap_err();
        assert_eq!(messages, vec!["Author must not be empty.".to_string()]);
    }

    #[test]
    fn test_parse_form_bad_author_reference() {
        let form = BookForm {
            title: "T".to_string(),
            author: "seven".to_string(),
            summary: "S".to_string(),
            isbn: "I".to_string(),
            genre: vec![],
        };
        let messages = parse_form(&form).unwrap_err();
        assert_eq!(messages, vec!["Invalid author".to_string()]);
    }

    #[test]
    fn test_parse_form_keeps_genres() {
        let form = BookForm {
            title: "T".to_string(),
            author: "7".to_string(),
            summary: "S".to_string(),
            isbn: "I".to_string(),
            genre: vec![1, 3],
        };
        let book = parse_form(&form).unwrap();
        assert_eq!(book.author_id, 7);
        assert_eq!(book.genre_ids, vec![1, 3]);
    }
}
