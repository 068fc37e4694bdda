//! Book instance (physical copy) model and related types

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use super::format_date;

/// Availability status of a copy, stored as the `copy_status` enum type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "copy_status")]
pub enum CopyStatus {
    Available,
    Maintenance,
    Loaned,
    Reserved,
}

impl CopyStatus {
    pub const ALL: [CopyStatus; 4] = [
        CopyStatus::Available,
        CopyStatus::Maintenance,
        CopyStatus::Loaned,
        CopyStatus::Reserved,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CopyStatus::Available => "Available",
            CopyStatus::Maintenance => "Maintenance",
            CopyStatus::Loaned => "Loaned",
            CopyStatus::Reserved => "Reserved",
        }
    }

    /// CSS class used to color-code the status on list and detail pages
    pub fn css_class(&self) -> &'static str {
        match self {
            CopyStatus::Available => "text-success",
            CopyStatus::Maintenance => "text-danger",
            CopyStatus::Loaned => "text-warning",
            CopyStatus::Reserved => "text-muted",
        }
    }
}

impl fmt::Display for CopyStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CopyStatus {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Available" => Ok(CopyStatus::Available),
            "Maintenance" => Ok(CopyStatus::Maintenance),
            "Loaned" => Ok(CopyStatus::Loaned),
            "Reserved" => Ok(CopyStatus::Reserved),
            _ => Err(()),
        }
    }
}

impl Default for CopyStatus {
    fn default() -> Self {
        CopyStatus::Maintenance
    }
}

/// Full book instance model from database, with the book title resolved
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct BookInstance {
    pub id: i32,
    pub book_id: i32,
    pub imprint: String,
    pub status: CopyStatus,
    pub due_back: Option<NaiveDate>,
    #[sqlx(default)]
    #[serde(default)]
    pub book_title: Option<String>,
}

impl BookInstance {
    pub fn url(&self) -> String {
        format!("/catalog/bookinstance/{}", self.id)
    }

    /// Due date formatted for display, empty when the copy has none
    pub fn due_back_formatted(&self) -> String {
        format_date(self.due_back)
    }
}

/// Validated book instance fields ready to persist
#[derive(Debug, Clone)]
pub struct NewBookInstance {
    pub book_id: i32,
    pub imprint: String,
    pub status: CopyStatus,
    pub due_back: Option<NaiveDate>,
}

/// Raw book instance form submission
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(default)]
pub struct BookInstanceForm {
    #[validate(length(min = 1, message = "Book must be specified"))]
    pub book: String,
    #[validate(length(min = 1, message = "Imprint must be specified"))]
    pub imprint: String,
    pub status: String,
    pub due_back: String,
}

impl Default for BookInstanceForm {
    fn default() -> Self {
        Self {
            book: String::new(),
            imprint: String::new(),
            status: CopyStatus::default().as_str().to_string(),
            due_back: String::new(),
        }
    }
}

impl BookInstanceForm {
    /// Copy with surrounding whitespace removed. Validation runs on the
    /// trimmed values, so whitespace-only input fails the required checks.
    pub fn trimmed(&self) -> Self {
        Self {
            book: self.book.trim().to_string(),
            imprint: self.imprint.trim().to_string(),
            status: self.status.trim().to_string(),
            due_back: self.due_back.trim().to_string(),
        }
    }

    pub fn from_instance(instance: &BookInstance) -> Self {
        Self {
            book: instance.book_id.to_string(),
            imprint: instance.imprint.clone(),
            status: instance.status.as_str().to_string(),
            due_back: instance
                .due_back
                .map(|d| d.to_string())
                .unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_round_trip() {
        for status in CopyStatus::ALL {
            assert_eq!(CopyStatus::from_str(status.as_str()), Ok(status));
        }
    }

    #[test]
    fn test_status_unknown() {
        assert!(CopyStatus::from_str("Lost").is_err());
    }

    #[test]
    fn test_status_colors() {
        assert_eq!(CopyStatus::Available.css_class(), "text-success");
        assert_eq!(CopyStatus::Loaned.css_class(), "text-warning");
    }

    #[test]
    fn test_due_back_formatted() {
        let instance = BookInstance {
            id: 1,
            book_id: 1,
            imprint: "Gollancz, 2011".to_string(),
            status: CopyStatus::Loaned,
            due_back: NaiveDate::from_ymd_opt(2026, 1, 3),
            book_title: None,
        };
        assert_eq!(instance.due_back_formatted(), "Jan 3, 2026");
    }
}
