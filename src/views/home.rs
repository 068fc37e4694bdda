//! Home page view

use maud::{html, Markup};

use super::layout;
use crate::services::catalog::CatalogSummary;

pub fn index(summary: &CatalogSummary) -> Markup {
    layout::page(
        "Local Library Home",
        html! {
            h1 { "Local Library Home" }
            p {
                "Welcome to "
                em { "LocalLibrary" }
                ", a very basic website for browsing the catalog of a small local library."
            }
            h2 { "Dynamic content" }
            p { "The library has the following record counts:" }
            ul {
                li { strong { "Books: " } (summary.book_count) }
                li { strong { "Copies: " } (summary.book_instance_count) }
                li { strong { "Copies available: " } (summary.book_instance_available_count) }
                li { strong { "Authors: " } (summary.author_count) }
                li { strong { "Genres: " } (summary.genre_count) }
            }
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_shows_counts() {
        let summary = CatalogSummary {
            book_count: 5,
            book_instance_count: 12,
            book_instance_available_count: 7,
            author_count: 3,
            genre_count: 4,
        };
        let markup = index(&summary).into_string();
        assert!(markup.contains("Local Library Home"));
        assert!(markup.contains("<strong>Copies available: </strong>7"));
    }
}
