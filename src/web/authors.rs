//! Author handlers

use axum::{
    extract::{Path, State},
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::Form;
use maud::Markup;
use validator::Validate;

use crate::{
    error::AppResult,
    models::author::{AuthorForm, NewAuthor},
    services::authors::AuthorDelete,
    views, AppState,
};

use super::{parse_optional_date, validation_messages};

/// Display list of all authors
pub async fn list(State(state): State<AppState>) -> AppResult<Markup> {
    let authors = state.services.authors.list().await?;
    Ok(views::authors::list(&authors))
}

/// Display detail page for a specific author
pub async fn detail(State(state): State<AppState>, Path(id): Path<i32>) -> AppResult<Markup> {
    let (author, books) = state.services.authors.detail(id).await?;
    Ok(views::authors::detail(&author, &books))
}

/// Display author create form on GET
pub async fn create_get() -> Markup {
    views::authors::form("Create Author", &AuthorForm::default(), &[])
}

/// Handle author create on POST
pub async fn create_post(
    State(state): State<AppState>,
    Form(form): Form<AuthorForm>,
) -> AppResult<Response> {
    match parse_form(&form) {
        Ok(author) => {
            let created = state.services.authors.create(&author).await?;
            Ok(Redirect::to(&created.url()).into_response())
        }
        Err(messages) => {
            Ok(views::authors::form("Create Author", &form, &messages).into_response())
        }
    }
}

/// Display author delete confirmation on GET
pub async fn delete_get(State(state): State<AppState>, Path(id): Path<i32>) -> AppResult<Markup> {
    let (author, books) = state.services.authors.detail(id).await?;
    Ok(views::authors::delete(&author, &books))
}

/// Handle author delete on POST. Re-renders the confirmation page when
/// books still reference the author.
pub async fn delete_post(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Response> {
    match state.services.authors.delete(id).await? {
        AuthorDelete::Deleted => Ok(Redirect::to("/catalog/authors").into_response()),
        AuthorDelete::HasBooks(author, books) => {
            Ok(views::authors::delete(&author, &books).into_response())
        }
    }
}

/// Display author update form on GET
pub async fn update_get(State(state): State<AppState>, Path(id): Path<i32>) -> AppResult<Markup> {
    let author = state.services.authors.get(id).await?;
    Ok(views::authors::form(
        "Update Author",
        &AuthorForm::from_author(&author),
        &[],
    ))
}

/// Handle author update on POST
pub async fn update_post(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Form(form): Form<AuthorForm>,
) -> AppResult<Response> {
    match parse_form(&form) {
        Ok(author) => {
            let updated = state.services.authors.update(id, &author).await?;
            Ok(Redirect::to(&updated.url()).into_response())
        }
        Err(messages) => {
            Ok(views::authors::form("Update Author", &form, &messages).into_response())
        }
    }
}

/// Validate and parse the raw form into persistable fields, collecting every
/// error message for the re-rendered form. Trimming comes first, so a
/// whitespace-only name fails its required check.
fn parse_form(form: &AuthorForm) -> Result<NewAuthor, Vec<String>> {
    let form = form.trimmed();
    let mut messages = match form.validate() {
        Ok(()) => Vec::new(),
        Err(errors) => validation_messages(&errors, &["first_name", "family_name"]),
    };

    let date_of_birth = parse_optional_date(&form.date_of_birth, "Invalid date of birth")
        .unwrap_or_else(|message| {
            messages.push(message);
            None
        });
    let date_of_death = parse_optional_date(&form.date_of_death, "Invalid date of death")
        .unwrap_or_else(|message| {
            messages.push(message);
            None
        });

    if !messages.is_empty() {
        return Err(messages);
    }

    Ok(NewAuthor {
        first_name: form.first_name,
        family_name: form.family_name,
        date_of_birth,
        date_of_death,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_form_collects_all_errors() {
        let form = AuthorForm {
            first_name: String::new(),
            family_name: String::new(),
            date_of_birth: "not-a-date".to_string(),
            date_of_death: String::new(),
        };
        let messages = parse_form(&form).unwrap_err();
        assert_eq!(
            messages,
            vec![
                "First name must be specified.".to_string(),
                "Family name must be specified.".to_string(),
                "Invalid date of birth".to_string(),
            ]
        );
    }

    #[test]
    fn test_parse_form_whitespace_only_names() {
        let form = AuthorForm {
            first_name: "   ".to_string(),
            family_name: " \t ".to_string(),
            ..Default::default()
        };
        let messages = parse_form(&form).unwrap_err();
        assert_eq!(
            messages,
            vec![
                "First name must be specified.".to_string(),
                "Family name must be specified.".to_string(),
            ]
        );
    }

    #[test]
    fn test_parse_form_trims_names() {
        let form = AuthorForm {
            first_name: " Patrick ".to_string(),
            family_name: " Rothfuss ".to_string(),
            date_of_birth: "1973-06-06".to_string(),
            date_of_death: String::new(),
        };
        let author = parse_form(&form).unwrap();
        assert_eq!(author.first_name, "Patrick");
        assert_eq!(author.family_name, "Rothfuss");
        assert!(author.date_of_birth.is_some());
        assert!(author.date_of_death.is_none());
    }
}
