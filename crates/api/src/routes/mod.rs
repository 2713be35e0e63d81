pub mod health;
pub mod movie;

use axum::Router;

use crate::state::AppState;

/// Prefix under which every API route is nested.
pub const API_PREFIX: &str = "/api";

/// Mount point of the movie resource, relative to [`API_PREFIX`].
pub const MOVIES_PATH: &str = "/movies";

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /movies                  list, create
/// /movies/{id}             get, update, partial update, delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().nest(MOVIES_PATH, movie::router())
}
