//! Entity alert headers.
//!
//! Successful writes carry `X-{app}-alert` (a human-readable message) and
//! `X-{app}-params` (the entity id). Rejected writes carry `X-{app}-error`
//! (`error.{key}`) and `X-{app}-params` (the entity name).

use axum::http::header::InvalidHeaderName;
use axum::http::{HeaderMap, HeaderName, HeaderValue};

use moviedb_core::{Entity, ErrorKey};

#[derive(Debug, Clone)]
pub struct AlertHeaders {
    alert: HeaderName,
    error: HeaderName,
    params: HeaderName,
}

impl AlertHeaders {
    pub fn new(application_name: &str) -> Result<Self, InvalidHeaderName> {
        let app = application_name.to_ascii_lowercase();
        Ok(Self {
            alert: HeaderName::from_bytes(format!("x-{app}-alert").as_bytes())?,
            error: HeaderName::from_bytes(format!("x-{app}-error").as_bytes())?,
            params: HeaderName::from_bytes(format!("x-{app}-params").as_bytes())?,
        })
    }

    pub fn alert_name(&self) -> &HeaderName {
        &self.alert
    }

    pub fn error_name(&self) -> &HeaderName {
        &self.error
    }

    pub fn params_name(&self) -> &HeaderName {
        &self.params
    }

    pub fn entity_creation<E: Entity>(&self, id: &E::Id) -> HeaderMap {
        self.alert(
            format!("A new {} is created with identifier {}", E::NAME, id),
            id.to_string(),
        )
    }

    pub fn entity_update<E: Entity>(&self, id: &E::Id) -> HeaderMap {
        self.alert(
            format!("A {} is updated with identifier {}", E::NAME, id),
            id.to_string(),
        )
    }

    pub fn entity_deletion<E: Entity>(&self, id: &E::Id) -> HeaderMap {
        self.alert(
            format!("A {} is deleted with identifier {}", E::NAME, id),
            id.to_string(),
        )
    }

    pub fn failure(&self, entity: &str, key: ErrorKey) -> HeaderMap {
        self.pair(&self.error, format!("error.{key}"), entity.to_string())
    }

    fn alert(&self, message: String, param: String) -> HeaderMap {
        self.pair(&self.alert, message, param)
    }

    /// Both headers or neither; a value that is not a legal header value
    /// (e.g. an id with control characters) drops the alert.
    fn pair(&self, name: &HeaderName, message: String, param: String) -> HeaderMap {
        let mut headers = HeaderMap::new();
        match (HeaderValue::try_from(message), HeaderValue::try_from(param)) {
            (Ok(message), Ok(param)) => {
                headers.insert(name.clone(), message);
                headers.insert(self.params.clone(), param);
            }
            _ => tracing::warn!(header = %name, "alert header value not encodable; omitted"),
        }
        headers
    }
}
