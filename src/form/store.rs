//! Synchronous form state storage.

use super::value::{FieldErrors, FieldValue, Fields};

/// Snapshot of everything a step needs to render itself.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FormState {
    pub fields: Fields,
    pub errors: FieldErrors,
}

impl FormState {
    pub fn field(&self, name: &str) -> Option<&FieldValue> {
        self.fields.get(name)
    }

    /// Text value of a field, empty when unset or not a text field.
    pub fn text(&self, name: &str) -> &str {
        self.fields
            .get(name)
            .and_then(FieldValue::as_text)
            .unwrap_or("")
    }

    pub fn list(&self, name: &str) -> &[String] {
        self.fields
            .get(name)
            .and_then(FieldValue::as_list)
            .unwrap_or(&[])
    }

    pub fn error(&self, name: &str) -> Option<&str> {
        self.errors
            .get(name)
            .map(String::as_str)
            .filter(|message| !message.is_empty())
    }

    /// True when the named field exists and holds a non-blank value.
    pub fn is_present(&self, name: &str) -> bool {
        self.fields.get(name).is_some_and(|value| !value.is_blank())
    }
}

/// Field storage consumed by the wizard.
///
/// Implementations decide where values live; the wizard only needs these
/// synchronous operations. Submission is handled separately by
/// [`Submitter`](super::Submitter).
pub trait FormStore: Send {
    fn state(&self) -> &FormState;

    fn fields(&self) -> &Fields {
        &self.state().fields
    }

    fn errors(&self) -> &FieldErrors {
        &self.state().errors
    }

    /// Set a single field. Unknown field names are ignored.
    fn set_field(&mut self, name: &str, value: FieldValue);

    /// Set several fields in one write.
    fn set_fields(&mut self, values: Fields);

    /// Replace the error mapping (typically after a rejected submission).
    fn set_errors(&mut self, errors: FieldErrors);

    /// Restore initial values and clear all errors.
    fn reset(&mut self);
}

/// In-memory [`FormStore`] with a field set fixed at construction.
#[derive(Debug, Clone)]
pub struct MemoryFormStore {
    initial: Fields,
    state: FormState,
}

impl MemoryFormStore {
    pub fn new(initial: Fields) -> Self {
        Self {
            state: FormState {
                fields: initial.clone(),
                errors: FieldErrors::new(),
            },
            initial,
        }
    }

    pub fn initial(&self) -> &Fields {
        &self.initial
    }

    fn write(&mut self, name: &str, value: FieldValue) -> bool {
        let Some(slot) = self.state.fields.get_mut(name) else {
            tracing::trace!(field = %name, "Ignoring write to unknown field");
            return false;
        };
        *slot = value;
        // An edited field no longer shows the error from the last attempt.
        self.state.errors.remove(name);
        true
    }
}

impl FormStore for MemoryFormStore {
    fn state(&self) -> &FormState {
        &self.state
    }

    fn set_field(&mut self, name: &str, value: FieldValue) {
        self.write(name, value);
    }

    fn set_fields(&mut self, values: Fields) {
        for (name, value) in values {
            self.write(&name, value);
        }
    }

    fn set_errors(&mut self, errors: FieldErrors) {
        self.state.errors = errors;
    }

    fn reset(&mut self) {
        self.state = FormState {
            fields: self.initial.clone(),
            errors: FieldErrors::new(),
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> MemoryFormStore {
        let mut initial = Fields::new();
        initial.insert("name".into(), FieldValue::empty_text());
        initial.insert("github_users".into(), FieldValue::empty_list());
        MemoryFormStore::new(initial)
    }

    #[test]
    fn set_field_updates_known_fields_only() {
        let mut store = store();
        store.set_field("name", "demo".into());
        store.set_field("unknown", "x".into());
        assert_eq!(store.state().text("name"), "demo");
        assert!(store.fields().get("unknown").is_none());
    }

    #[test]
    fn editing_clears_that_fields_error() {
        let mut store = store();
        let mut errors = FieldErrors::new();
        errors.insert("name".into(), "already exists".into());
        store.set_errors(errors);
        assert_eq!(store.state().error("name"), Some("already exists"));

        store.set_field("name", "other".into());
        assert_eq!(store.state().error("name"), None);
    }

    #[test]
    fn reset_restores_initial_values() {
        let mut store = store();
        store.set_field("name", "demo".into());
        store.set_errors(FieldErrors::from([("name".to_string(), "bad".to_string())]));
        store.reset();
        assert_eq!(store.state().text("name"), "");
        assert!(store.errors().is_empty());
    }

    #[test]
    fn empty_error_message_is_not_an_error() {
        let mut store = store();
        store.set_errors(FieldErrors::from([("name".to_string(), String::new())]));
        assert_eq!(store.state().error("name"), None);
    }
}
