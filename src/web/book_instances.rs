//! Book instance (copy) handlers

use std::str::FromStr;

use axum::{
    extract::{Path, State},
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::Form;
use maud::Markup;
use validator::Validate;

use crate::{
    error::AppResult,
    models::book_instance::{BookInstanceForm, CopyStatus, NewBookInstance},
    views, AppState,
};

use super::{parse_optional_date, parse_reference, validation_messages};

/// Display list of all book copies
pub async fn list(State(state): State<AppState>) -> AppResult<Markup> {
    let instances = state.services.book_instances.list().await?;
    Ok(views::book_instances::list(&instances))
}

/// Display detail page for a specific copy
pub async fn detail(State(state): State<AppState>, Path(id): Path<i32>) -> AppResult<Markup> {
    let instance = state.services.book_instances.detail(id).await?;
    Ok(views::book_instances::detail(&instance))
}

/// Display copy create form on GET, with the selectable books
pub async fn create_get(State(state): State<AppState>) -> AppResult<Markup> {
    let books = state.services.book_instances.form_books().await?;
    Ok(views::book_instances::form(
        "Create BookInstance",
        &BookInstanceForm::default(),
        &books,
        &[],
    ))
}

/// Handle copy create on POST
pub async fn create_post(
    State(state): State<AppState>,
    Form(form): Form<BookInstanceForm>,
) -> AppResult<Response> {
    match parse_form(&form) {
        Ok(instance) => {
            let created = state.services.book_instances.create(&instance).await?;
            Ok(Redirect::to(&created.url()).into_response())
        }
        Err(messages) => {
            let books = state.services.book_instances.form_books().await?;
            Ok(
                views::book_instances::form("Create BookInstance", &form, &books, &messages)
                    .into_response(),
            )
        }
    }
}

/// Display copy delete confirmation on GET
pub async fn delete_get(State(state): State<AppState>, Path(id): Path<i32>) -> AppResult<Markup> {
    let instance = state.services.book_instances.detail(id).await?;
    Ok(views::book_instances::delete(&instance))
}

/// Handle copy delete on POST. Copies have no dependents, so this always
/// deletes and redirects to the list.
pub async fn delete_post(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Redirect> {
    state.services.book_instances.delete(id).await?;
    Ok(Redirect::to("/catalog/bookinstances"))
}

/// Display copy update form on GET
pub async fn update_get(State(state): State<AppState>, Path(id): Path<i32>) -> AppResult<Markup> {
    let instance = state.services.book_instances.detail(id).await?;
    let books = state.services.book_instances.form_books().await?;
    Ok(views::book_instances::form(
        "Update BookInstance",
        &BookInstanceForm::from_instance(&instance),
        &books,
        &[],
    ))
}

/// Handle copy update on POST
pub async fn update_post(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Form(form): Form<BookInstanceForm>,
) -> AppResult<Response> {
    match parse_form(&form) {
        Ok(instance) => {
            let updated = state.services.book_instances.update(id, &instance).await?;
            Ok(Redirect::to(&updated.url()).into_response())
        }
        Err(messages) => {
            let books = state.services.book_instances.form_books().await?;
            Ok(
                views::book_instances::form("Update BookInstance", &form, &books, &messages)
                    .into_response(),
            )
        }
    }
}

/// Validate and parse the raw form into persistable fields. Trimming comes
/// first, so a whitespace-only field fails its required check.
fn parse_form(form: &BookInstanceForm) -> Result<NewBookInstance, Vec<String>> {
    let form = form.trimmed();
    let mut messages = match form.validate() {
        Ok(()) => Vec::new(),
        Err(errors) => validation_messages(&errors, &["book", "imprint"]),
    };

    let book_id = if form.book.is_empty() {
        0
    } else {
        parse_reference(&form.book, "Book must be specified").unwrap_or_else(|message| {
            messages.push(message);
            0
        })
    };

    let status = CopyStatus::from_str(&form.status).unwrap_or_else(|()| {
        messages.push("Invalid status".to_string());
        CopyStatus::default()
    });

    let due_back = parse_optional_date(&form.due_back, "Invalid date").unwrap_or_else(|message| {
        messages.push(message);
        None
    });

    if !messages.is_empty() {
        return Err(messages);
    }

    Ok(NewBookInstance {
        book_id,
        imprint: form.imprint,
        status,
        due_back,
    })
}
