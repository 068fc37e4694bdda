//! Book pages: list, detail, form, delete confirmation

use maud::{html, Markup};

use super::layout;
use crate::{
    models::book::{BookForm, BookListRow},
    services::books::{BookDetails, BookFormContext},
};

pub fn list(books: &[BookListRow]) -> Markup {
    layout::page(
        "Book List",
        html! {
            h1 { "Book List" }
            @if books.is_empty() {
                p { "There are no books." }
            } @else {
                ul {
                    @for book in books {
                        li {
                            a href=(book.url()) { (book.title) }
                            " (" (book.author_name) ")"
                        }
                    }
                }
            }
        },
    )
}

pub fn detail(details: &BookDetails) -> Markup {
    let book = &details.book;
    layout::page(
        &book.title,
        html! {
            h1 { "Title: " (book.title) }
            p {
                strong { "Author: " }
                @if let Some(author) = &details.author {
                    a href=(author.url()) { (author.name()) }
                } @else {
                    "Unknown"
                }
            }
            p { strong { "Summary: " } (book.summary) }
            p { strong { "ISBN: " } (book.isbn) }
            p {
                strong { "Genre: " }
                @for (i, genre) in details.genres.iter().enumerate() {
                    @if i > 0 { ", " }
                    a href=(genre.url()) { (genre.name) }
                }
            }
            div {
                h4 { "Copies" }
                @if details.copies.is_empty() {
                    p { "There are no copies of this book in the library." }
                } @else {
                    @for copy in &details.copies {
                        hr;
                        p class=(copy.status.css_class()) { (copy.status.as_str()) }
                        p { strong { "Imprint: " } (copy.imprint) }
                        @if copy.due_back.is_some() {
                            p { strong { "Due back: " } (copy.due_back_formatted()) }
                        }
                        p {
                            strong { "Id: " }
                            a href=(copy.url()) { (copy.id) }
                        }
                    }
                }
            }
            p {
                a href=(format!("{}/update", book.url())) { "Update book" }
                " | "
                a href=(format!("{}/delete", book.url())) { "Delete book" }
            }
        },
    )
}

pub fn form(
    title: &str,
    form: &BookForm,
    context: &BookFormContext,
    errors: &[String],
) -> Markup {
    layout::page(
        title,
        html! {
            h1 { (title) }
            form method="post" {
                div .form-group {
                    label for="title" { "Title:" }
                    input #title type="text" name="title"
                        placeholder="Name of book" value=(form.title);
                }
                div .form-group {
                    label for="author" { "Author:" }
                    select #author name="author" {
                        option value="" disabled selected[form.author.is_empty()] {
                            "Please select an author"
                        }
                        @for author in &context.authors {
                            option value=(author.id)
                                selected[form.author == author.id.to_string()] {
                                (author.name())
                            }
                        }
                    }
                }
                div .form-group {
                    label for="summary" { "Summary:" }
                    textarea #summary name="summary" placeholder="Summary" {
                        (form.summary)
                    }
                }
                div .form-group {
                    label for="isbn" { "ISBN:" }
                    input #isbn type="text" name="isbn"
                        placeholder="ISBN13" value=(form.isbn);
                }
                div .form-group {
                    label { "Genre:" }
                    div {
                        @for genre in &context.genres {
                            div .checkbox {
                                label {
                                    input type="checkbox" name="genre" value=(genre.id)
                                        checked[form.genre.contains(&genre.id)];
                                    (genre.name)
                                }
                            }
                        }
                    }
                }
                button type="submit" { "Submit" }
            }
            (layout::validation_errors(errors))
        },
    )
}

pub fn delete(details: &BookDetails) -> Markup {
    let book = &details.book;
    layout::page(
        "Delete Book",
        html! {
            h1 { "Delete Book: " (book.title) }
            @if details.copies.is_empty() {
                p { "Do you really want to delete this book?" }
                form method="post" {
                    button type="submit" { "Delete" }
                }
            } @else {
                p {
                    "Delete the following copies before attempting to delete this book."
                }
                h4 { "Copies" }
                @for copy in &details.copies {
                    hr;
                    p class=(copy.status.css_class()) { (copy.status.as_str()) }
                    p { strong { "Imprint: " } (copy.imprint) }
                    p {
                        strong { "Id: " }
                        a href=(copy.url()) { (copy.id) }
                    }
                }
            }
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{
        author::Author,
        book::Book,
        book_instance::{BookInstance, CopyStatus},
        genre::Genre,
    };

    fn details() -> BookDetails {
        BookDetails {
            book: Book {
                id: 4,
                title: "The Name of the Wind".to_string(),
                author_id: 7,
                summary: "A story told in a frame.".to_string(),
                isbn: "9780756404741".to_string(),
            },
            author: Some(Author {
                id: 7,
                first_name: "Patrick".to_string(),
                family_name: "Rothfuss".to_string(),
                date_of_birth: None,
                date_of_death: None,
            }),
            genres: vec![Genre {
                id: 3,
                name: "Fantasy".to_string(),
            }],
            copies: vec![BookInstance {
                id: 11,
                book_id: 4,
                imprint: "Gollancz, 2011".to_string(),
                status: CopyStatus::Available,
                due_back: None,
                book_title: None,
            }],
        }
    }

    #[test]
    fn test_detail_resolves_references() {
        let markup = detail(&details()).into_string();
        assert!(markup.contains("Rothfuss, Patrick"));
        assert!(markup.contains("href=\"/catalog/genre/3\""));
        assert!(markup.contains("text-success"));
    }

    #[test]
    fn test_form_marks_selected_genre() {
        let d = details();
        let context = BookFormContext {
            authors: vec![d.author.clone().unwrap()],
            genres: d.genres.clone(),
        };
        let form_data = BookForm::from_book(&d.book, &[3]);
        let markup = form("Update Book", &form_data, &context, &[]).into_string();
        assert!(markup.contains("checked"));
        assert!(markup.contains("value=\"7\" selected"));
    }

    #[test]
    fn test_delete_blocked_by_copies() {
        let markup = delete(&details()).into_string();
        assert!(markup.contains("Delete the following copies"));
        assert!(!markup.contains("<button"));
    }
}
