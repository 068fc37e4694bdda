//! Genre model and related types

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use unicode_normalization::UnicodeNormalization;
use validator::Validate;

/// Full genre model from database
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Genre {
    pub id: i32,
    pub name: String,
}

impl Genre {
    pub fn url(&self) -> String {
        format!("/catalog/genre/{}", self.id)
    }
}

/// Normalization key used by the lookup-before-insert duplicate check.
/// Uniqueness is by convention only; there is no database constraint.
pub fn normalized_name(name: &str) -> String {
    name.nfc()
        .collect::<String>()
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Genre form submission
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(default)]
pub struct GenreForm {
    #[validate(length(min = 1, message = "Genre name required"))]
    pub name: String,
}

impl GenreForm {
    /// Copy with surrounding whitespace removed. Validation runs on the
    /// trimmed value, so a whitespace-only name fails the required check.
    pub fn trimmed(&self) -> Self {
        Self {
            name: self.name.trim().to_string(),
        }
    }

    pub fn from_genre(genre: &Genre) -> Self {
        Self {
            name: genre.name.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalized_name_case_and_whitespace() {
        assert_eq!(normalized_name("  Science   Fiction "), "science fiction");
    }

    #[test]
    fn test_whitespace_only_name_fails_after_trim() {
        let form = GenreForm {
            name: "   ".to_string(),
        };
        assert!(form.trimmed().validate().is_err());
    }

    #[test]
    fn test_normalized_name_composed_forms() {
        // "é" as a combining sequence vs. a single code point
        assert_eq!(normalized_name("Poe\u{0301}sie"), normalized_name("Po\u{00e9}sie"));
    }
}
