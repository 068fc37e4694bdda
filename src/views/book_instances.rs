//! Book instance (copy) pages: list, detail, form, delete confirmation

use maud::{html, Markup};

use super::layout;
use crate::models::{
    book::BookListRow,
    book_instance::{BookInstance, BookInstanceForm, CopyStatus},
};

fn book_title(instance: &BookInstance) -> &str {
    instance.book_title.as_deref().unwrap_or("Unknown book")
}

pub fn list(instances: &[BookInstance]) -> Markup {
    layout::page(
        "Book Instance List",
        html! {
            h1 { "Book Instance List" }
            @if instances.is_empty() {
                p { "There are no book copies in this library." }
            } @else {
                ul {
                    @for instance in instances {
                        li {
                            a href=(instance.url()) {
                                (book_title(instance)) " : " (instance.imprint)
                            }
                            " - "
                            span class=(instance.status.css_class()) { (instance.status.as_str()) }
                            @if instance.status != CopyStatus::Available {
                                @if instance.due_back.is_some() {
                                    " (Due: " (instance.due_back_formatted()) ")"
                                }
                            }
                        }
                    }
                }
            }
        },
    )
}

pub fn detail(instance: &BookInstance) -> Markup {
    layout::page(
        &format!("Copy: {}", book_title(instance)),
        html! {
            h1 { "Id: " (instance.id) }
            p {
                strong { "Title: " }
                a href=(format!("/catalog/book/{}", instance.book_id)) {
                    (book_title(instance))
                }
            }
            p { strong { "Imprint: " } (instance.imprint) }
            p {
                strong { "Status: " }
                span class=(instance.status.css_class()) { (instance.status.as_str()) }
            }
            @if instance.due_back.is_some() {
                p { strong { "Due back: " } (instance.due_back_formatted()) }
            }
            p {
                a href=(format!("{}/update", instance.url())) { "Update book instance" }
                " | "
                a href=(format!("{}/delete", instance.url())) { "Delete book instance" }
            }
        },
    )
}

pub fn form(
    title: &str,
    form: &BookInstanceForm,
    books: &[BookListRow],
    errors: &[String],
) -> Markup {
    layout::page(
        title,
        html! {
            h1 { (title) }
            form method="post" {
                div .form-group {
                    label for="book" { "Book:" }
                    select #book name="book" {
                        option value="" disabled selected[form.book.is_empty()] {
                            "Please select a book"
                        }
                        @for book in books {
                            option value=(book.id)
                                selected[form.book == book.id.to_string()] {
                                (book.title)
                            }
                        }
                    }
                }
                div .form-group {
                    label for="imprint" { "Imprint:" }
                    input #imprint type="text" name="imprint"
                        placeholder="Publisher and date information" value=(form.imprint);
                }
                div .form-group {
                    label for="due_back" { "Date when book available:" }
                    input #due_back type="date" name="due_back" value=(form.due_back);
                }
                div .form-group {
                    label for="status" { "Status:" }
                    select #status name="status" {
                        @for status in CopyStatus::ALL {
                            option value=(status.as_str())
                                selected[form.status == status.as_str()] {
                                (status.as_str())
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

pub fn delete(instance: &BookInstance) -> Markup {
    layout::page(
        "Delete BookInstance",
        html! {
            h1 { "Delete Copy " (instance.id) ": " (book_title(instance)) }
            p { strong { "Imprint: " } (instance.imprint) }
            p { "Do you really want to delete this copy?" }
            form method="post" {
                button type="submit" { "Delete" }
            }
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn instance() -> BookInstance {
        BookInstance {
            id: 11,
            book_id: 4,
            imprint: "Gollancz, 2011".to_string(),
            status: CopyStatus::Loaned,
            due_back: NaiveDate::from_ymd_opt(2026, 1, 3),
            book_title: Some("The Name of the Wind".to_string()),
        }
    }

    #[test]
    fn test_list_shows_due_date_for_loaned_copy() {
        let markup = list(&[instance()]).into_string();
        assert!(markup.contains("text-warning"));
        assert!(markup.contains("(Due: Jan 3, 2026)"));
    }

    #[test]
    fn test_detail_links_back_to_book() {
        let markup = detail(&instance()).into_string();
        assert!(markup.contains("href=\"/catalog/book/4\""));
        assert!(markup.contains("The Name of the Wind"));
    }

    #[test]
    fn test_form_selects_current_status() {
        let form_data = BookInstanceForm::from_instance(&instance());
        let markup = form("Update BookInstance", &form_data, &[], &[]).into_string();
        assert!(markup.contains("value=\"Loaned\" selected"));
    }
}
