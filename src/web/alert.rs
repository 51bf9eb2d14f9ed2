//! Alert headers attached to mutation responses for client-side
//! notifications. They carry no protocol meaning.

use axum::http::{HeaderMap, HeaderName, HeaderValue, header::InvalidHeaderName};
use std::sync::Arc;
use tracing::warn;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operation {
    Created,
    Updated,
    Deleted,
}

impl Operation {
    fn key(self) -> &'static str {
        match self {
            Operation::Created => "created",
            Operation::Updated => "updated",
            Operation::Deleted => "deleted",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AlertKind {
    Success(Operation),
    Failure { reason: &'static str },
}

/// What happened to which entity, independent of how it is transported.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Alert {
    pub entity_name: &'static str,
    pub kind: AlertKind,
    pub message: String,
    pub param: String,
}

impl Alert {
    pub fn created(entity_name: &'static str, id: &str) -> Self {
        Self {
            entity_name,
            kind: AlertKind::Success(Operation::Created),
            message: format!("A new {entity_name} is created with identifier {id}"),
            param: id.to_string(),
        }
    }

    pub fn updated(entity_name: &'static str, id: &str) -> Self {
        Self {
            entity_name,
            kind: AlertKind::Success(Operation::Updated),
            message: format!("A {entity_name} is updated with identifier {id}"),
            param: id.to_string(),
        }
    }

    pub fn deleted(entity_name: &'static str, id: &str) -> Self {
        Self {
            entity_name,
            kind: AlertKind::Success(Operation::Deleted),
            message: format!("A {entity_name} is deleted with identifier {id}"),
            param: id.to_string(),
        }
    }

    pub fn failure(entity_name: &'static str, reason: &'static str, message: impl Into<String>) -> Self {
        Self {
            entity_name,
            kind: AlertKind::Failure { reason },
            message: message.into(),
            param: entity_name.to_string(),
        }
    }
}

/// Renders [`Alert`]s as `X-<application>-*` headers.
#[derive(Clone, Debug)]
pub struct AlertHeaders {
    application: Arc<str>,
    alert: HeaderName,
    error: HeaderName,
    params: HeaderName,
    message: HeaderName,
}

impl AlertHeaders {
    pub fn new(application: &str) -> Result<Self, InvalidHeaderName> {
        let name = |suffix: &str| {
            HeaderName::from_bytes(format!("x-{application}-{suffix}").to_ascii_lowercase().as_bytes())
        };
        Ok(Self {
            application: Arc::from(application),
            alert: name("alert")?,
            error: name("error")?,
            params: name("params")?,
            message: name("message")?,
        })
    }

    pub fn render(&self, alert: &Alert) -> HeaderMap {
        let mut headers = HeaderMap::new();
        match alert.kind {
            AlertKind::Success(operation) => {
                let key = format!("{}.{}.{}", self.application, alert.entity_name, operation.key());
                insert(&mut headers, &self.alert, &key);
            }
            AlertKind::Failure { reason } => {
                insert(&mut headers, &self.error, &format!("error.{reason}"));
            }
        }
        insert(&mut headers, &self.params, &alert.param);
        insert(&mut headers, &self.message, &alert.message);
        headers
    }
}

fn insert(headers: &mut HeaderMap, name: &HeaderName, value: &str) {
    match HeaderValue::from_str(value) {
        Ok(value) => {
            headers.insert(name.clone(), value);
        }
        // Ids come from request bodies and may hold bytes a header cannot carry.
        Err(_) => warn!(header = %name, "Dropping alert header with unrepresentable value."),
    }
}
