//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept any Postgres executor (`&PgPool` or `&mut *tx`) as the
//! first argument, so handlers can group calls into one transaction.

pub mod movie_repo;

pub use movie_repo::MovieRepo;
