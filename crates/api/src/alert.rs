//! Notification headers attached to successful writes.
//!
//! Clients read `X-{app}-alert` for a translatable message key such as
//! `moviesApp.movies.created` and `X-{app}-params` for the affected id.

use axum::http::{HeaderMap, HeaderName, HeaderValue};

#[derive(Debug, Clone, Copy)]
pub enum EntityAction {
    Created,
    Updated,
    Deleted,
}

impl EntityAction {
    fn as_str(self) -> &'static str {
        match self {
            Self::Created => "created",
            Self::Updated => "updated",
            Self::Deleted => "deleted",
        }
    }
}

/// The `x-{app}-alert` and `x-{app}-params` header names.
///
/// `None` when `app_name` cannot form a valid header name.
pub fn alert_header_names(app_name: &str) -> Option<(HeaderName, HeaderName)> {
    let alert = HeaderName::try_from(format!("x-{app_name}-alert")).ok()?;
    let params = HeaderName::try_from(format!("x-{app_name}-params")).ok()?;
    Some((alert, params))
}

/// Build the alert headers for a write to `entity` identified by `param`.
///
/// Returns an empty map (and logs a warning) when `app_name` cannot form a
/// valid header name.
pub fn entity_alert(
    app_name: &str,
    entity: &str,
    action: EntityAction,
    param: &str,
) -> HeaderMap {
    let mut headers = HeaderMap::new();

    let Some((alert_name, params_name)) = alert_header_names(app_name) else {
        tracing::warn!(
            app_name,
            "Application name is not a valid header token, skipping alert headers"
        );
        return headers;
    };

    let message = format!("{app_name}.{entity}.{}", action.as_str());
    match (HeaderValue::try_from(message), HeaderValue::try_from(param)) {
        (Ok(message), Ok(param)) => {
            headers.insert(alert_name, message);
            headers.insert(params_name, param);
        }
        _ => tracing::warn!(app_name, entity, "Alert header value is not valid, skipping"),
    }

    headers
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn creation_alert_names_entity_and_id() {
        let headers = entity_alert("moviesApp", "movies", EntityAction::Created, "12");
        assert_eq!(headers["x-moviesapp-alert"], "moviesApp.movies.created");
        assert_eq!(headers["x-moviesapp-params"], "12");
    }

    #[test]
    fn deletion_alert_uses_deleted_key() {
        let headers = entity_alert("moviesApp", "movies", EntityAction::Deleted, "3");
        assert_eq!(headers["x-moviesapp-alert"], "moviesApp.movies.deleted");
    }

    #[test]
    fn header_names_are_lowercased() {
        let (alert, params) = alert_header_names("moviesApp").unwrap();
        assert_eq!(alert.as_str(), "x-moviesapp-alert");
        assert_eq!(params.as_str(), "x-moviesapp-params");
        assert!(alert_header_names("bad name").is_none());
    }

    #[test]
    fn invalid_app_name_yields_no_headers() {
        let headers = entity_alert("bad name", "movies", EntityAction::Updated, "1");
        assert!(headers.is_empty());
    }
}
