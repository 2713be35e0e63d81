//! Movie entity model.

use std::fmt;

use movies_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `movies` table, and the JSON body of every movie request.
///
/// `id` is `None` until the row is first saved. Equality is by id only: two
/// movies are equal when both have an id and the ids match, whatever their
/// other fields hold. A movie without an id equals nothing but itself.
#[derive(Debug, Clone, Default, FromRow, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Movie {
    pub id: Option<DbId>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub directed_by: Option<String>,
}

impl Movie {
    pub fn with_id(mut self, id: DbId) -> Self {
        self.id = Some(id);
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_directed_by(mut self, directed_by: impl Into<String>) -> Self {
        self.directed_by = Some(directed_by.into());
        self
    }

    /// Apply merge-patch semantics from `patch` onto `self`.
    ///
    /// Only fields that are `Some` in `patch` overwrite stored values. A
    /// `None` means "leave unchanged", so a field cannot be cleared this way.
    /// The id is never touched.
    pub fn merge_from(&mut self, patch: &Movie) {
        if let Some(title) = &patch.title {
            self.title = Some(title.clone());
        }
        if let Some(description) = &patch.description {
            self.description = Some(description.clone());
        }
        if let Some(directed_by) = &patch.directed_by {
            self.directed_by = Some(directed_by.clone());
        }
    }
}

impl PartialEq for Movie {
    fn eq(&self, other: &Self) -> bool {
        if std::ptr::eq(self, other) {
            return true;
        }
        matches!((self.id, other.id), (Some(a), Some(b)) if a == b)
    }
}

impl fmt::Display for Movie {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn text(value: &Option<String>) -> String {
            value
                .as_deref()
                .map_or_else(|| "null".to_string(), |v| format!("'{v}'"))
        }

        let id = self
            .id
            .map_or_else(|| "null".to_string(), |id| id.to_string());
        write!(
            f,
            "Movie{{id={id}, title={}, description={}, directedBy={}}}",
            text(&self.title),
            text(&self.description),
            text(&self.directed_by),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equal_ids_are_equal_regardless_of_fields() {
        let a = Movie::default().with_id(1).with_title("Alien");
        let b = Movie::default().with_id(1).with_title("Aliens");
        assert_eq!(a, b);
    }

    #[test]
    fn different_ids_are_not_equal() {
        let a = Movie::default().with_id(1);
        let b = Movie::default().with_id(2);
        assert_ne!(a, b);
    }

    #[test]
    fn missing_id_equals_only_itself() {
        let a = Movie::default().with_title("Same");
        let b = Movie::default().with_title("Same");
        assert_eq!(a, a);
        assert_ne!(a, b);

        let c = Movie::default().with_id(2);
        assert_ne!(a, c);
        assert_ne!(c, a);
    }

    #[test]
    fn merge_applies_only_present_fields() {
        let mut stored = Movie::default()
            .with_id(5)
            .with_title("T0")
            .with_description("D0")
            .with_directed_by("B0");
        let patch = Movie::default().with_id(5).with_description("D1");

        stored.merge_from(&patch);

        assert_eq!(stored.id, Some(5));
        assert_eq!(stored.title.as_deref(), Some("T0"));
        assert_eq!(stored.description.as_deref(), Some("D1"));
        assert_eq!(stored.directed_by.as_deref(), Some("B0"));
    }

    #[test]
    fn merge_never_clears_fields() {
        let mut stored = Movie::default().with_id(5).with_title("T0");
        stored.merge_from(&Movie::default().with_id(5));
        assert_eq!(stored.title.as_deref(), Some("T0"));
    }

    #[test]
    fn display_lists_all_fields() {
        let movie = Movie::default()
            .with_id(3)
            .with_title("Heat")
            .with_directed_by("Michael Mann");
        assert_eq!(
            movie.to_string(),
            "Movie{id=3, title='Heat', description=null, directedBy='Michael Mann'}"
        );
    }

    #[test]
    fn json_uses_camel_case_and_tolerates_missing_fields() {
        let movie: Movie =
            serde_json::from_value(serde_json::json!({"id": 9, "directedBy": "Varda"})).unwrap();
        assert_eq!(movie.id, Some(9));
        assert_eq!(movie.title, None);
        assert_eq!(movie.directed_by.as_deref(), Some("Varda"));

        let json = serde_json::to_value(&movie).unwrap();
        assert_eq!(json["directedBy"], "Varda");
        assert!(json["title"].is_null());
    }
}
