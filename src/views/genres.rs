//! Genre pages: list, detail, form, delete confirmation

use maud::{html, Markup};

use super::layout;
use crate::models::{
    book::BookSummaryRow,
    genre::{Genre, GenreForm},
};

pub fn list(genres: &[Genre]) -> Markup {
    layout::page(
        "Genre List",
        html! {
            h1 { "Genre List" }
            @if genres.is_empty() {
                p { "There are no genres." }
            } @else {
                ul {
                    @for genre in genres {
                        li { a href=(genre.url()) { (genre.name) } }
                    }
                }
            }
        },
    )
}

pub fn detail(genre: &Genre, books: &[BookSummaryRow]) -> Markup {
    layout::page(
        "Genre Detail",
        html! {
            h1 { "Genre: " (genre.name) }
            div {
                h4 { "Books" }
                @if books.is_empty() {
                    p { "This genre has no books." }
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
                a href=(format!("{}/update", genre.url())) { "Update genre" }
                " | "
                a href=(format!("{}/delete", genre.url())) { "Delete genre" }
            }
        },
    )
}

pub fn form(title: &str, form: &GenreForm, errors: &[String]) -> Markup {
    layout::page(
        title,
        html! {
            h1 { (title) }
            form method="post" {
                div .form-group {
                    label for="name" { "Genre:" }
                    input #name type="text" name="name"
                        placeholder="Fantasy, Poetry etc." value=(form.name);
                }
                button type="submit" { "Submit" }
            }
            (layout::validation_errors(errors))
        },
    )
}

pub fn delete(genre: &Genre, books: &[BookSummaryRow]) -> Markup {
    layout::page(
        "Delete Genre",
        html! {
            h1 { "Delete Genre: " (genre.name) }
            @if books.is_empty() {
                p { "Do you really want to delete this genre?" }
                form method="post" {
                    button type="submit" { "Delete" }
                }
            } @else {
                p {
                    "Delete the following books before attempting to delete this genre."
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

    fn genre() -> Genre {
        Genre {
            id: 3,
            name: "Fantasy".to_string(),
        }
    }

    #[test]
    fn test_list_links_to_detail() {
        let markup = list(&[genre()]).into_string();
        assert!(markup.contains("href=\"/catalog/genre/3\""));
        assert!(markup.contains("Fantasy"));
    }

    #[test]
    fn test_form_shows_error() {
        let errors = vec!["Genre name required".to_string()];
        let markup = form("Create Genre", &GenreForm::default(), &errors).into_string();
        assert!(markup.contains("Genre name required"));
    }

    #[test]
    fn test_delete_allowed_shows_button() {
        let markup = delete(&genre(), &[]).into_string();
        assert!(markup.contains("Do you really want to delete this genre?"));
        assert!(markup.contains("<button"));
    }
}
