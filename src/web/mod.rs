//! Request handlers: the controller layer between routes and services

pub mod authors;
pub mod book_instances;
pub mod books;
pub mod genres;
pub mod home;

use chrono::NaiveDate;
use validator::ValidationErrors;

/// Flatten validation errors into display messages, in form field order.
/// `ValidationErrors` hands back a map, so the caller supplies the order in
/// which its form lays the fields out.
pub fn validation_messages(errors: &ValidationErrors, field_order: &[&str]) -> Vec<String> {
    let by_field = errors.field_errors();
    let mut messages = Vec::new();

    for field in field_order {
        if let Some(list) = by_field.get(field) {
            for error in list.iter() {
                let message = error
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| error.code.to_string());
                messages.push(message);
            }
        }
    }

    messages
}

/// Parse an optional `<input type="date">` value. Empty means absent; an
/// unparseable value becomes a form error message.
pub fn parse_optional_date(value: &str, message: &str) -> Result<Option<NaiveDate>, String> {
    let value = value.trim();
    if value.is_empty() {
        return Ok(None);
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map(Some)
        .map_err(|_| message.to_string())
}

/// Parse a reference id submitted by a `<select>` input
pub fn parse_reference(value: &str, message: &str) -> Result<i32, String> {
    value.trim().parse().map_err(|_| message.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    use crate::models::author::AuthorForm;

    #[test]
    fn test_validation_messages_follow_field_order() {
        let form = AuthorForm::default();
        let errors = form.validate().unwrap_err();
        let messages = validation_messages(&errors, &["first_name", "family_name"]);
        assert_eq!(
            messages,
            vec![
                "First name must be specified.".to_string(),
                "Family name must be specified.".to_string(),
            ]
        );
    }

    #[test]
    fn test_parse_optional_date_empty() {
        assert_eq!(parse_optional_date("  ", "Invalid date"), Ok(None));
    }

    #[test]
    fn test_parse_optional_date_valid() {
        assert_eq!(
            parse_optional_date("2014-10-06", "Invalid date"),
            Ok(NaiveDate::from_ymd_opt(2014, 10, 6))
        );
    }

    #[test]
    fn test_parse_optional_date_garbage() {
        assert_eq!(
            parse_optional_date("06/10/2014", "Invalid date of birth"),
            Err("Invalid date of birth".to_string())
        );
    }

    #[test]
    fn test_parse_reference() {
        assert_eq!(parse_reference(" 7 ", "Invalid author"), Ok(7));
        assert_eq!(
            parse_reference("", "Invalid author"),
            Err("Invalid author".to_string())
        );
    }
}
