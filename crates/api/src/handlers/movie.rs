//! Handlers for the `/movies` resource.

use axum::extract::{Path, State};
use axum::http::header::LOCATION;
use axum::http::{HeaderMap, HeaderValue, StatusCode};
use axum::Json;
use movies_core::error::CoreError;
use movies_core::identity;
use movies_core::types::DbId;
use movies_db::models::movie::Movie;
use movies_db::repositories::MovieRepo;
use sqlx::PgConnection;

use crate::alert::{self, EntityAction};
use crate::error::{AppError, AppResult};
use crate::routes::{API_PREFIX, MOVIES_PATH};
use crate::state::AppState;

/// Entity name reported in alert headers and identity rejections.
const ENTITY_NAME: &str = "movies";

fn alert_headers(state: &AppState, action: EntityAction, id: DbId) -> HeaderMap {
    alert::entity_alert(&state.config.app_name, ENTITY_NAME, action, &id.to_string())
}

/// POST /api/movies
///
/// The body must not carry an id. Responds 201 with a `Location` header
/// pointing at the new row.
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<Movie>,
) -> AppResult<(StatusCode, HeaderMap, Json<Movie>)> {
    tracing::debug!(movie = %input, "REST request to save Movie");
    identity::ensure_transient(ENTITY_NAME, input.id)?;

    let movie = MovieRepo::save(&state.pool, &input).await?;
    let id = movie
        .id
        .ok_or_else(|| AppError::InternalError("Inserted movie has no id".into()))?;

    let mut headers = alert_headers(&state, EntityAction::Created, id);
    let location = HeaderValue::try_from(format!("{API_PREFIX}{MOVIES_PATH}/{id}"))
        .map_err(|e| AppError::InternalError(e.to_string()))?;
    headers.insert(LOCATION, location);

    Ok((StatusCode::CREATED, headers, Json(movie)))
}

/// PUT /api/movies/{id}
///
/// Full replacement: fields absent from the body are stored as null.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<Movie>,
) -> AppResult<(HeaderMap, Json<Movie>)> {
    tracing::debug!(id, movie = %input, "REST request to update Movie");
    let id = identity::ensure_matches_path(ENTITY_NAME, id, input.id)?;

    let mut tx = state.pool.begin().await?;
    identity::ensure_exists(ENTITY_NAME, MovieRepo::exists_by_id(&mut *tx, id).await?)?;
    let movie = MovieRepo::save(&mut *tx, &input).await?;
    tx.commit().await?;

    Ok((alert_headers(&state, EntityAction::Updated, id), Json(movie)))
}

/// PATCH /api/movies/{id}
///
/// Merge-patch: only non-null body fields overwrite the stored row. Accepts
/// `application/json` and `application/merge-patch+json`.
pub async fn partial_update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<Movie>,
) -> AppResult<(HeaderMap, Json<Movie>)> {
    tracing::debug!(id, movie = %input, "REST request to partial update Movie");
    let id = identity::ensure_matches_path(ENTITY_NAME, id, input.id)?;

    let mut tx = state.pool.begin().await?;
    identity::ensure_exists(ENTITY_NAME, MovieRepo::exists_by_id(&mut *tx, id).await?)?;
    let movie = merge_into_stored(&mut *tx, id, &input).await?;
    tx.commit().await?;

    Ok((alert_headers(&state, EntityAction::Updated, id), Json(movie)))
}

/// Fetch the stored row, apply `patch` over it and save the result.
///
/// Under READ COMMITTED a concurrent delete can commit after the caller's
/// existence check, so a missing row here is reported as not found.
pub async fn merge_into_stored(
    conn: &mut PgConnection,
    id: DbId,
    patch: &Movie,
) -> AppResult<Movie> {
    let mut existing = MovieRepo::find_by_id(&mut *conn, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: ENTITY_NAME,
            id,
        }))?;
    existing.merge_from(patch);
    Ok(MovieRepo::save(&mut *conn, &existing).await?)
}

/// GET /api/movies
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Movie>>> {
    tracing::debug!("REST request to get all Movies");
    let movies = MovieRepo::find_all(&state.pool).await?;
    Ok(Json(movies))
}

/// GET /api/movies/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Movie>> {
    tracing::debug!(id, "REST request to get Movie");
    let movie = MovieRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: ENTITY_NAME,
            id,
        }))?;
    Ok(Json(movie))
}

/// DELETE /api/movies/{id}
///
/// Always 204, whether or not the row existed.
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<(StatusCode, HeaderMap)> {
    tracing::debug!(id, "REST request to delete Movie");
    MovieRepo::delete_by_id(&state.pool, id).await?;
    Ok((
        StatusCode::NO_CONTENT,
        alert_headers(&state, EntityAction::Deleted, id),
    ))
}
