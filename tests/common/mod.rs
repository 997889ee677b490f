//! Shared test utilities.

#![allow(dead_code, unused_imports)]

use std::collections::VecDeque;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::Mutex;
use stepform::form::{
    FieldErrors, FieldValue, Fields, FormState, FormStore, MemoryFormStore, SubmitError,
    SubmitRequest, Submitter,
};
use stepform::i18n::Passthrough;
use stepform::wizard::project::FIELD_NAME;
use stepform::wizard::{create_project_wizard, StepFormWizard};
use tempfile::TempDir;

/// Submitter that records every request and replays scripted answers.
/// Answers default to success once the script runs out.
#[derive(Default)]
pub struct RecordingSubmitter {
    requests: Mutex<Vec<SubmitRequest>>,
    responses: Mutex<VecDeque<Result<(), SubmitError>>>,
}

impl RecordingSubmitter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond_with(self, result: Result<(), SubmitError>) -> Self {
        self.responses.lock().push_back(result);
        self
    }

    pub fn requests(&self) -> Vec<SubmitRequest> {
        self.requests.lock().clone()
    }
}

#[async_trait]
impl Submitter for RecordingSubmitter {
    async fn submit(&self, request: SubmitRequest) -> Result<(), SubmitError> {
        self.requests.lock().push(request);
        self.responses.lock().pop_front().unwrap_or(Ok(()))
    }
}

/// Store wrapper counting bulk writes.
pub struct CountingStore {
    inner: MemoryFormStore,
    pub bulk_writes: usize,
    pub single_writes: usize,
}

impl CountingStore {
    pub fn new(initial: Fields) -> Self {
        Self {
            inner: MemoryFormStore::new(initial),
            bulk_writes: 0,
            single_writes: 0,
        }
    }
}

impl FormStore for CountingStore {
    fn state(&self) -> &FormState {
        self.inner.state()
    }

    fn set_field(&mut self, name: &str, value: FieldValue) {
        self.single_writes += 1;
        self.inner.set_field(name, value);
    }

    fn set_fields(&mut self, values: Fields) {
        self.bulk_writes += 1;
        self.inner.set_fields(values);
    }

    fn set_errors(&mut self, errors: FieldErrors) {
        self.inner.set_errors(errors);
    }

    fn reset(&mut self) {
        self.inner.reset();
    }
}

/// Project wizard with a close counter, already open.
pub fn open_project_wizard(organizations: &[&str]) -> (StepFormWizard, Arc<AtomicUsize>) {
    let closes = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&closes);
    let mut wizard = create_project_wizard(
        organizations.iter().map(|org| org.to_string()).collect(),
        Arc::new(Passthrough),
    )
    .expect("project wizard has steps")
    .on_close(move || {
        counter.fetch_add(1, Ordering::SeqCst);
    });
    wizard.open();
    (wizard, closes)
}

pub fn set_name(wizard: &mut StepFormWizard, name: &str) {
    assert!(wizard.set_field(FIELD_NAME, FieldValue::text(name)));
}

pub fn close_count(closes: &Arc<AtomicUsize>) -> usize {
    closes.load(Ordering::SeqCst)
}

pub fn name_taken() -> SubmitError {
    let mut errors = FieldErrors::new();
    errors.insert(FIELD_NAME.to_string(), "already exists".to_string());
    SubmitError::Validation(errors)
}

/// Write `content` to a config file inside a fresh temp dir.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}
