//! Search route handlers.
//!
//! The query is stored verbatim (no trimming) so that filtering sees exactly
//! what the visitor typed.

use axum::{Form, response::Redirect};
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use crate::error::{AppError, Result};
use crate::models::session::update_shop_state;

/// Longest query accepted, in characters.
pub const MAX_QUERY_CHARS: usize = 200;

/// Search form data.
#[derive(Debug, Deserialize)]
pub struct SearchForm {
    #[serde(default)]
    pub q: String,
}

/// Set the search query.
#[instrument(skip(session))]
pub async fn set_query(session: Session, Form(form): Form<SearchForm>) -> Result<Redirect> {
    if form.q.chars().count() > MAX_QUERY_CHARS {
        return Err(AppError::BadRequest(format!(
            "search query longer than {MAX_QUERY_CHARS} characters"
        )));
    }

    update_shop_state(&session, |shop| shop.set_query(form.q)).await?;
    Ok(Redirect::to("/"))
}

/// Clear the search query.
#[instrument(skip(session))]
pub async fn clear_query(session: Session) -> Result<Redirect> {
    update_shop_state(&session, shirt_store_core::ShopState::clear_query).await?;
    Ok(Redirect::to("/"))
}
