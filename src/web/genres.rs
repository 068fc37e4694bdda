//! Genre handlers

use axum::{
    extract::{Path, State},
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::Form;
use maud::Markup;
use validator::Validate;

use crate::{
    error::AppResult,
    models::genre::GenreForm,
    services::genres::{GenreCreate, GenreDelete},
    views, AppState,
};

use super::validation_messages;

/// Display list of all genres
pub async fn list(State(state): State<AppState>) -> AppResult<Markup> {
    let genres = state.services.genres.list().await?;
    Ok(views::genres::list(&genres))
}

/// Display detail page for a specific genre
pub async fn detail(State(state): State<AppState>, Path(id): Path<i32>) -> AppResult<Markup> {
    let (genre, books) = state.services.genres.detail(id).await?;
    Ok(views::genres::detail(&genre, &books))
}

/// Display genre create form on GET
pub async fn create_get() -> Markup {
    views::genres::form("Create Genre", &GenreForm::default(), &[])
}

/// Handle genre create on POST. An existing genre with the same name wins:
/// the response redirects to it instead of inserting a duplicate.
pub async fn create_post(
    State(state): State<AppState>,
    Form(form): Form<GenreForm>,
) -> AppResult<Response> {
    let form = form.trimmed();
    if let Err(errors) = form.validate() {
        let messages = validation_messages(&errors, &["name"]);
        return Ok(views::genres::form("Create Genre", &form, &messages).into_response());
    }

    let genre = match state.services.genres.create(&form.name).await? {
        GenreCreate::Created(genre) => genre,
        GenreCreate::AlreadyExists(genre) => genre,
    };

    Ok(Redirect::to(&genre.url()).into_response())
}

/// Display genre delete confirmation on GET
pub async fn delete_get(State(state): State<AppState>, Path(id): Path<i32>) -> AppResult<Markup> {
    let (genre, books) = state.services.genres.detail(id).await?;
    Ok(views::genres::delete(&genre, &books))
}

/// Handle genre delete on POST. Re-renders the confirmation page when books
/// still carry the genre.
pub async fn delete_post(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Response> {
    match state.services.genres.delete(id).await? {
        GenreDelete::Deleted => Ok(Redirect::to("/catalog/genres").into_response()),
        GenreDelete::HasBooks(genre, books) => {
            Ok(views::genres::delete(&genre, &books).into_response())
        }
    }
}

/// Display genre update form on GET
pub async fn update_get(State(state): State<AppState>, Path(id): Path<i32>) -> AppResult<Markup> {
    let genre = state.services.genres.get(id).await?;
    Ok(views::genres::form(
        "Update Genre",
        &GenreForm::from_genre(&genre),
        &[],
    ))
}

/// Handle genre update on POST
pub async fn update_post(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Form(form): Form<GenreForm>,
) -> AppResult<Response> {
    let form = form.trimmed();
    if let Err(errors) = form.validate() {
        let messages = validation_messages(&errors, &["name"]);
        return Ok(views::genres::form("Update Genre", &form, &messages).into_response());
    }

    let updated = state.services.genres.update(id, &form.name).await?;
    Ok(Redirect::to(&updated.url()).into_response())
}
