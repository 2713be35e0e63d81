//! Shared domain types for the movies service.
//!
//! This crate performs no I/O. It holds the identifier type used across the
//! workspace, the domain error type, and the identifier-consistency checks
//! applied before any write reaches the store.

pub mod error;
pub mod identity;
pub mod types;
