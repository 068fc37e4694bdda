//! Author pages: list, detail, form, delete confirmation

use maud::{html, Markup};

use super::layout;
use crate::models::{
    author::{Author, AuthorForm},
    book::BookSummaryRow,
};

pub fn list(authors: &[Author]) -> Markup {
    layout::page(
        "Author List",
        html! {
            h1 { "Author List" }
            @if authors.is_empty() {
                p { "There are no authors." }
            } @else {
                ul {
                    @for author in authors {
                        li {
                            a href=(author.url()) { (author.name()) }
                            " (" (author.lifespan()) ")"
                        }
                    }
                }
            }
        },
    )
}

pub fn detail(author: &Author, books: &[BookSummaryRow]) -> Markup {
    layout::page(
        "Author Detail",
        html! {
            h1 { "Author: " (author.name()) }
            p { (author.lifespan()) }
            div {
                h4 { "Books" }
                @if books.is_empty() {
                    p { "This author has no books." }
                } @else {
                    dl {
                        @for book in books {
                            dt { a href=(book.url()) { (book.title) } }
                            dd { (book.summary) }
                        }
                    }
                }
            }
            p {
                a href=(format!("{}/update", author.url())) { "Update author" }
                " | "
                a href=(format!("{}/delete", author.url())) { "Delete author" }
            }
        },
    )
}

pub fn form(title: &str, form: &AuthorForm, errors: &[String]) -> Markup {
    layout::page(
        title,
        html! {
            h1 { (title) }
            form method="post" {
                div .form-group {
                    label for="first_name" { "First Name:" }
                    input #first_name type="text" name="first_name"
                        placeholder="First name (Christian)" value=(form.first_name);
                }
                div .form-group {
                    label for="family_name" { "Family Name:" }
                    input #family_name type="text" name="family_name"
                        placeholder="Family name (Surname)" value=(form.family_name);
                }
                div .form-group {
                    label for="date_of_birth" { "Date of birth:" }
                    input #date_of_birth type="date" name="date_of_birth"
                        value=(form.date_of_birth);
                }
                div .form-group {
                    label for="date_of_death" { "Date of death:" }
                    input #date_of_death type="date" name="date_of_death"
                        value=(form.date_of_death);
                }
                button type="submit" { "Submit" }
            }
            (layout::validation_errors(errors))
        },
    )
}

pub fn delete(author: &Author, books: &[BookSummaryRow]) -> Markup {
    layout::page(
        "Delete Author",
        html! {
            h1 { "Delete Author: " (author.name()) }
            p { (author.lifespan()) }
            @if books.is_empty() {
                p { "Do you really want to delete this author?" }
                form method="post" {
                    button type="submit" { "Delete" }
                }
            } @else {
                p {
                    "Delete the following books before attempting to delete this author."
                }
                h4 { "Books" }
                dl {
                    @for book in books {
                        dt { a href=(book.url()) { (book.title) } }
                        dd { (book.summary) }
                    }
                }
            }
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn author() -> Author {
        Author {
            id: 7,
            first_name: "Patrick".to_string(),
            family_name: "Rothfuss".to_string(),
            date_of_birth: NaiveDate::from_ymd_opt(1973, 6, 6),
            date_of_death: None,
        }
    }

    #[test]
    fn test_list_links_to_detail() {
        let markup = list(&[author()]).into_string();
        assert!(markup.contains("href=\"/catalog/author/7\""));
        assert!(markup.contains("Rothfuss, Patrick"));
    }

    #[test]
    fn test_list_empty() {
        assert!(list(&[]).into_string().contains("There are no authors."));
    }

    #[test]
    fn test_form_re_renders_values_and_errors() {
        let form_data = AuthorForm {
            first_name: String::new(),
            family_name: "Rothfuss".to_string(),
            ..Default::default()
        };
        let errors = vec!["First name must be specified.".to_string()];
        let markup = form("Create Author", &form_data, &errors).into_string();
        assert!(markup.contains("First name must be specified."));
        assert!(markup.contains("value=\"Rothfuss\""));
    }

    #[test]
    fn test_delete_blocked_lists_books() {
        let books = vec![BookSummaryRow {
            id: 1,
            title: "The Name of the Wind".to_string(),
            summary: "A story.".to_string(),
        }];
        let markup = delete(&author(), &books).into_string();
        assert!(markup.contains("Delete the following books"));
        assert!(!markup.contains("<button"));
    }
}
