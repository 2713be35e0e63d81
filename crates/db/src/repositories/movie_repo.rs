//! Repository for the `movies` table.

use movies_core::types::DbId;
use sqlx::PgExecutor;

use crate::models::movie::Movie;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, description, directed_by";

/// Provides CRUD operations for movies.
pub struct MovieRepo;

impl MovieRepo {
    /// List every movie, ordered by id.
    pub async fn find_all<'e>(executor: impl PgExecutor<'e>) -> Result<Vec<Movie>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM movies ORDER BY id");
        sqlx::query_as::<_, Movie>(&query).fetch_all(executor).await
    }

    /// Find a movie by its ID.
    pub async fn find_by_id<'e>(
        executor: impl PgExecutor<'e>,
        id: DbId,
    ) -> Result<Option<Movie>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM movies WHERE id = $1");
        sqlx::query_as::<_, Movie>(&query)
            .bind(id)
            .fetch_optional(executor)
            .await
    }

    pub async fn exists_by_id<'e>(
        executor: impl PgExecutor<'e>,
        id: DbId,
    ) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM movies WHERE id = $1)")
            .bind(id)
            .fetch_one(executor)
            .await
    }

    /// Insert the movie when it has no id, otherwise overwrite the row with
    /// that id. Returns the stored row with its id populated.
    ///
    /// Overwriting a row that does not exist fails with
    /// [`sqlx::Error::RowNotFound`].
    pub async fn save<'e>(
        executor: impl PgExecutor<'e>,
        movie: &Movie,
    ) -> Result<Movie, sqlx::Error> {
        match movie.id {
            None => {
                let query = format!(
                    "INSERT INTO movies (title, description, directed_by)
                     VALUES ($1, $2, $3)
                     RETURNING {COLUMNS}"
                );
                sqlx::query_as::<_, Movie>(&query)
                    .bind(&movie.title)
                    .bind(&movie.description)
                    .bind(&movie.directed_by)
                    .fetch_one(executor)
                    .await
            }
            Some(id) => {
                let query = format!(
                    "UPDATE movies SET
                        title = $2,
                        description = $3,
                        directed_by = $4
                     WHERE id = $1
                     RETURNING {COLUMNS}"
                );
                sqlx::query_as::<_, Movie>(&query)
                    .bind(id)
                    .bind(&movie.title)
                    .bind(&movie.description)
                    .bind(&movie.directed_by)
                    .fetch_one(executor)
                    .await
            }
        }
    }

    /// Permanently delete a movie by ID. Returns `true` if a row was removed.
    pub async fn delete_by_id<'e>(
        executor: impl PgExecutor<'e>,
        id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM movies WHERE id = $1")
            .bind(id)
            .execute(executor)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Number of stored movies.
    pub async fn count<'e>(executor: impl PgExecutor<'e>) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM movies")
            .fetch_one(executor)
            .await
    }
}
