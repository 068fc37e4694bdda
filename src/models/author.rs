//! Author model and related types

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use super::format_date;

/// Full author model from database
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Author {
    pub id: i32,
    pub first_name: String,
    pub family_name: String,
    pub date_of_birth: Option<NaiveDate>,
    pub date_of_death: Option<NaiveDate>,
}

impl Author {
    /// Display name, `"Family, First"`. Empty when either part is missing.
    pub fn name(&self) -> String {
        if self.first_name.is_empty() || self.family_name.is_empty() {
            return String::new();
        }
        format!("{}, {}", self.family_name, self.first_name)
    }

    /// Lifespan line for list and detail pages, e.g. `Oct 6, 1914 - Apr 1, 1999`.
    pub fn lifespan(&self) -> String {
        if self.date_of_birth.is_none() && self.date_of_death.is_none() {
            return String::new();
        }
        format!(
            "{} - {}",
            format_date(self.date_of_birth),
            format_date(self.date_of_death)
        )
    }

    pub fn url(&self) -> String {
        format!("/catalog/author/{}", self.id)
    }
}

/// Validated author fields ready to persist
#[derive(Debug, Clone)]
pub struct NewAuthor {
    pub first_name: String,
    pub family_name: String,
    pub date_of_birth: Option<NaiveDate>,
    pub date_of_death: Option<NaiveDate>,
}

/// Raw author form submission. Dates arrive as strings from `<input
/// type="date">` and are parsed separately so a bad value becomes a form
/// error rather than a rejected request.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(default)]
pub struct AuthorForm {
    #[validate(length(min = 1, max = 100, message = "First name must be specified."))]
    pub first_name: String,
    #[validate(length(min = 1, max = 100, message = "Family name must be specified."))]
    pub family_name: String,
    pub date_of_birth: String,
    pub date_of_death: String,
}

impl AuthorForm {
    /// Copy with surrounding whitespace removed. Validation runs on the
    /// trimmed values, so whitespace-only input fails the required checks.
    pub fn trimmed(&self) -> Self {
        Self {
            first_name: self.first_name.trim().to_string(),
            family_name: self.family_name.trim().to_string(),
            date_of_birth: self.date_of_birth.trim().to_string(),
            date_of_death: self.date_of_death.trim().to_string(),
        }
    }

    /// Pre-populate the form from an existing record, for the update page.
    pub fn from_author(author: &Author) -> Self {
        Self {
            first_name: author.first_name.clone(),
            family_name: author.family_name.clone(),
            date_of_birth: author
                .date_of_birth
                .map(|d| d.to_string())
                .unwrap_or_default(),
            date_of_death: author
                .date_of_death
                .map(|d| d.to_string())
                .unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn author(first: &str, family: &str) -> Author {
        Author {
            id: 1,
            first_name: first.to_string(),
            family_name: family.to_string(),
            date_of_birth: NaiveDate::from_ymd_opt(1914, 10, 6),
            date_of_death: NaiveDate::from_ymd_opt(1999, 4, 1),
        }
    }

    #[test]
    fn test_name() {
        assert_eq!(author("Patrick", "Rothfuss").name(), "Rothfuss, Patrick");
    }

    #[test]
    fn test_name_missing_part() {
        assert_eq!(author("", "Rothfuss").name(), "");
    }

    #[test]
    fn test_lifespan() {
        assert_eq!(
            author("P", "R").lifespan(),
            "Oct 6, 1914 - Apr 1, 1999"
        );
    }

    #[test]
    fn test_lifespan_unknown_dates() {
        let mut a = author("P", "R");
        a.date_of_birth = None;
        a.date_of_death = None;
        assert_eq!(a.lifespan(), "");
    }

    #[test]
    fn test_lifespan_still_alive() {
        let mut a = author("P", "R");
        a.date_of_death = None;
        assert_eq!(a.lifespan(), "Oct 6, 1914 - ");
    }

    #[test]
    fn test_whitespace_only_name_fails_after_trim() {
        let form = AuthorForm {
            first_name: "   ".to_string(),
            family_name: "\t".to_string(),
            ..Default::default()
        };
        assert!(form.validate().is_ok());
        let errors = form.trimmed().validate().unwrap_err();
        assert!(errors.field_errors().contains_key("first_name"));
        assert!(errors.field_errors().contains_key("family_name"));
    }

    #[test]
    fn test_form_validation() {
        let form = AuthorForm {
            first_name: String::new(),
            family_name: "Rothfuss".to_string(),
            ..Default::default()
        };
        let errors = form.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("first_name"));
        assert!(!errors.field_errors().contains_key("family_name"));
    }
}
