//! Domain model structs.
//!
//! Each submodule contains a `FromRow` + `Serialize` + `Deserialize` entity
//! struct matching the database row. The same struct doubles as the request
//! body, so every field is optional.

pub mod movie;
