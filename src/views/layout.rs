//! Shared page layout: document shell, sidebar navigation, error page

use axum::http::StatusCode;
use maud::{html, Markup, DOCTYPE};

/// Wrap page content in the document shell with the sidebar navigation
pub fn page(title: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (title) }
                link rel="stylesheet" href="/static/style.css";
            }
            body {
                div .container {
                    nav .sidebar {
                        ul {
                            li { a href="/catalog" { "Home" } }
                            li { a href="/catalog/books" { "All books" } }
                            li { a href="/catalog/authors" { "All authors" } }
                            li { a href="/catalog/genres" { "All genres" } }
                            li { a href="/catalog/bookinstances" { "All book-instances" } }
                            li { hr; }
                            li { a href="/catalog/author/create" { "Create new author" } }
                            li { a href="/catalog/genre/create" { "Create new genre" } }
                            li { a href="/catalog/book/create" { "Create new book" } }
                            li { a href="/catalog/bookinstance/create" { "Create new book instance (copy)" } }
                        }
                    }
                    main .content { (content) }
                }
            }
        }
    }
}

/// Bullet list of validation messages shown above a re-rendered form
pub fn validation_errors(errors: &[String]) -> Markup {
    html! {
        @if !errors.is_empty() {
            ul .errors {
                @for message in errors {
                    li { (message) }
                }
            }
        }
    }
}

/// Rendered for every error that escapes a handler
pub fn error_page(status: StatusCode, message: &str) -> Markup {
    page(
        "Error",
        html! {
            h1 { (message) }
            p { "Status: " (status.as_u16()) }
            p { a href="/catalog" { "Back to the catalog" } }
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_contains_navigation() {
        let markup = page("Test Page", html! { p { "hello" } }).into_string();
        assert!(markup.contains("<title>Test Page</title>"));
        assert!(markup.contains("All books"));
        assert!(markup.contains("hello"));
    }

    #[test]
    fn test_validation_errors_empty() {
        assert_eq!(validation_errors(&[]).into_string(), "");
    }

    #[test]
    fn test_error_page() {
        let markup = error_page(StatusCode::NOT_FOUND, "Book not found").into_string();
        assert!(markup.contains("Book not found"));
        assert!(markup.contains("404"));
    }
}
