//! Asynchronous submission contract.

use std::collections::BTreeSet;
use std::time::Duration;

use async_trait::async_trait;
use serde::Serialize;
use thiserror::Error;

use super::value::{FieldErrors, Fields};

/// Kind of object a form creates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ObjectType {
    Project,
    Task,
    ScratchOrg,
}

/// Payload handed to a [`Submitter`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubmitRequest {
    pub object_type: ObjectType,
    pub fields: Fields,
}

impl SubmitRequest {
    /// JSON rendering of the payload, used for logging.
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|err| format!("<unserializable: {err}>"))
    }
}

/// Errors returned by a submission attempt.
///
/// Neither variant is fatal: the user can correct fields and retry, or cancel.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SubmitError {
    /// The server rejected one or more fields.
    #[error("Validation failed for {} field(s)", .0.len())]
    Validation(FieldErrors),

    /// The request never produced a usable answer.
    #[error("Submission failed: {message}")]
    Transport { message: String },
}

impl SubmitError {
    pub fn field_errors(&self) -> Option<&FieldErrors> {
        match self {
            SubmitError::Validation(errors) => Some(errors),
            SubmitError::Transport { .. } => None,
        }
    }
}

/// Backend that accepts a completed form.
///
/// Requests cannot be aborted once issued; callers may only ignore a late
/// answer.
#[async_trait]
pub trait Submitter: Send + Sync {
    async fn submit(&self, request: SubmitRequest) -> Result<(), SubmitError>;
}

/// Local stand-in for the project API.
///
/// Waits for a fixed latency, then rejects names that are already taken and
/// accepts everything else.
#[derive(Debug, Clone, Default)]
pub struct SimulatedSubmitter {
    latency: Duration,
    taken_names: BTreeSet<String>,
    offline: bool,
}

impl SimulatedSubmitter {
    pub fn new(latency: Duration) -> Self {
        Self {
            latency,
            ..Self::default()
        }
    }

    pub fn with_taken_names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.taken_names = names.into_iter().map(Into::into).collect();
        self
    }

    /// Fail every request with a transport error.
    pub fn offline(mut self, offline: bool) -> Self {
        self.offline = offline;
        self
    }
}

#[async_trait]
impl Submitter for SimulatedSubmitter {
    async fn submit(&self, request: SubmitRequest) -> Result<(), SubmitError> {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }

        if self.offline {
            return Err(SubmitError::Transport {
                message: "service unavailable".to_string(),
            });
        }

        let name = request
            .fields
            .get("name")
            .and_then(|value| value.as_text())
            .unwrap_or("");
        if self.taken_names.contains(name) {
            let mut errors = FieldErrors::new();
            errors.insert("name".to_string(), "already exists".to_string());
            return Err(SubmitError::Validation(errors));
        }

        tracing::debug!(payload = %request.to_json(), "Simulated submit accepted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::FieldValue;

    fn request(name: &str) -> SubmitRequest {
        let mut fields = Fields::new();
        fields.insert("name".into(), FieldValue::text(name));
        SubmitRequest {
            object_type: ObjectType::Project,
            fields,
        }
    }

    #[tokio::test]
    async fn accepts_free_name() {
        let submitter = SimulatedSubmitter::default().with_taken_names(["taken"]);
        assert_eq!(submitter.submit(request("fresh")).await, Ok(()));
    }

    #[tokio::test]
    async fn rejects_taken_name_with_field_error() {
        let submitter = SimulatedSubmitter::default().with_taken_names(["taken"]);
        let err = submitter.submit(request("taken")).await.unwrap_err();
        assert_eq!(
            err.field_errors().and_then(|e| e.get("name")).map(String::as_str),
            Some("already exists")
        );
    }

    #[tokio::test]
    async fn offline_reports_transport_error() {
        let submitter = SimulatedSubmitter::default().offline(true);
        let err = submitter.submit(request("x")).await.unwrap_err();
        assert!(matches!(err, SubmitError::Transport { .. }));
        assert!(err.field_errors().is_none());
    }

    #[test]
    fn payload_json_includes_object_type() {
        let json = request("demo").to_json();
        assert!(json.contains("\"object_type\":\"project\""));
        assert!(json.contains("\"name\":\"demo\""));
    }
}
