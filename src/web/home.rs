//! Home page handlers

use axum::{
    extract::State,
    response::Redirect,
};
use maud::Markup;

use crate::{error::AppResult, views, AppState};

/// The site root just forwards to the catalog home page
pub async fn root() -> Redirect {
    Redirect::to("/catalog")
}

/// Home page with the record counts
pub async fn index(State(state): State<AppState>) -> AppResult<Markup> {
    let summary = state.services.catalog.summary().await?;
    Ok(views::home::index(&summary))
}
