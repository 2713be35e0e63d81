use crate::identity::IdentityViolation;
use crate::types::DbId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    /// The request body's identifier is inconsistent with the operation.
    #[error("{}", .violation.message())]
    InvalidIdentity {
        entity: &'static str,
        violation: IdentityViolation,
    },
}
