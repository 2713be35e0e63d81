//! Identifier-consistency checks for write requests.
//!
//! Every write path runs these before touching the store, so a malformed
//! request never produces a partial write. Each failure carries a stable,
//! machine-readable reason code that clients can branch on.

use serde::Serialize;

use crate::error::CoreError;
use crate::types::DbId;

/// Why a request body's identifier was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum IdentityViolation {
    /// A create request carried an id.
    IdExists,
    /// An update request carried no id.
    IdNull,
    /// The body id differs from the path id.
    IdInvalid,
    /// The referenced id is not in the store.
    IdNotFound,
}

impl IdentityViolation {
    /// Reason code sent to clients (`idexists`, `idnull`, ...).
    pub fn code(self) -> &'static str {
        match self {
            Self::IdExists => "idexists",
            Self::IdNull => "idnull",
            Self::IdInvalid => "idinvalid",
            Self::IdNotFound => "idnotfound",
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            Self::IdExists => "A new entity cannot already have an ID",
            Self::IdNull => "Invalid id",
            Self::IdInvalid => "Invalid ID",
            Self::IdNotFound => "Entity not found",
        }
    }

    fn into_error(self, entity: &'static str) -> CoreError {
        CoreError::InvalidIdentity {
            entity,
            violation: self,
        }
    }
}

/// Reject a create request whose body already carries an id.
pub fn ensure_transient(entity: &'static str, body_id: Option<DbId>) -> Result<(), CoreError> {
    match body_id {
        Some(_) => Err(IdentityViolation::IdExists.into_error(entity)),
        None => Ok(()),
    }
}

/// Check that an update body names the same row as the request path.
///
/// A missing body id is reported before a mismatch. Returns the agreed id.
pub fn ensure_matches_path(
    entity: &'static str,
    path_id: DbId,
    body_id: Option<DbId>,
) -> Result<DbId, CoreError> {
    let body_id = body_id.ok_or_else(|| IdentityViolation::IdNull.into_error(entity))?;
    if body_id != path_id {
        return Err(IdentityViolation::IdInvalid.into_error(entity));
    }
    Ok(body_id)
}

/// Turn a failed existence lookup into an `idnotfound` rejection.
pub fn ensure_exists(entity: &'static str, exists: bool) -> Result<(), CoreError> {
    if exists {
        Ok(())
    } else {
        Err(IdentityViolation::IdNotFound.into_error(entity))
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    fn violation(err: CoreError) -> IdentityViolation {
        match err {
            CoreError::InvalidIdentity { violation, .. } => violation,
            other => panic!("expected InvalidIdentity, got {other:?}"),
        }
    }

    #[test]
    fn transient_accepts_missing_id() {
        assert_matches!(ensure_transient("movies", None), Ok(()));
    }

    #[test]
    fn transient_rejects_preset_id() {
        let err = ensure_transient("movies", Some(1)).unwrap_err();
        assert_eq!(violation(err), IdentityViolation::IdExists);
    }

    #[test]
    fn matching_ids_pass() {
        assert_eq!(ensure_matches_path("movies", 7, Some(7)).unwrap(), 7);
    }

    #[test]
    fn null_body_id_reported_first() {
        let err = ensure_matches_path("movies", 7, None).unwrap_err();
        assert_eq!(violation(err), IdentityViolation::IdNull);
    }

    #[test]
    fn mismatched_ids_rejected() {
        let err = ensure_matches_path("movies", 7, Some(8)).unwrap_err();
        assert_eq!(violation(err), IdentityViolation::IdInvalid);
    }

    #[test]
    fn missing_row_rejected() {
        assert_matches!(ensure_exists("movies", true), Ok(()));
        let err = ensure_exists("movies", false).unwrap_err();
        assert_eq!(violation(err), IdentityViolation::IdNotFound);
    }

    #[test]
    fn error_carries_entity_and_message() {
        let err = ensure_transient("movies", Some(3)).unwrap_err();
        assert_eq!(err.to_string(), "A new entity cannot already have an ID");
        assert_matches!(err, CoreError::InvalidIdentity { entity: "movies", .. });
    }

    #[test]
    fn serialized_reason_matches_code() {
        for v in [
            IdentityViolation::IdExists,
            IdentityViolation::IdNull,
            IdentityViolation::IdInvalid,
            IdentityViolation::IdNotFound,
        ] {
            assert_eq!(serde_json::to_value(v).unwrap(), v.code());
        }
    }
}
