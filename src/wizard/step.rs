//! Step definitions and gate predicates.

use std::fmt;
use std::sync::Arc;

use crate::form::FormState;

/// Predicate that must hold before leaving a step.
#[derive(Clone)]
pub struct Gate {
    predicate: Arc<dyn Fn(&FormState) -> bool + Send + Sync>,
}

impl Gate {
    pub fn new<F>(predicate: F) -> Self
    where
        F: Fn(&FormState) -> bool + Send + Sync + 'static,
    {
        Self {
            predicate: Arc::new(predicate),
        }
    }

    /// Gate satisfied when every named field holds a non-blank value.
    pub fn required(fields: &[&str]) -> Self {
        let fields: Vec<String> = fields.iter().map(|name| name.to_string()).collect();
        Self::new(move |form| fields.iter().all(|name| form.is_present(name)))
    }

    pub fn allows(&self, form: &FormState) -> bool {
        (self.predicate)(form)
    }
}

impl fmt::Debug for Gate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Gate(..)")
    }
}

/// How a data-entry field is edited.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    /// Pick one value from a list supplied as a synchronizer input.
    Select { options_input: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: String,
    pub label: String,
    pub kind: FieldKind,
    pub required: bool,
}

impl FieldSpec {
    pub fn text(name: &str, label: &str) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            kind: FieldKind::Text,
            required: false,
        }
    }

    pub fn select(name: &str, label: &str, options_input: &str) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            kind: FieldKind::Select {
                options_input: options_input.to_string(),
            },
            required: false,
        }
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }
}

/// What a step shows. Hosts render it against the current `FormState`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepContent {
    Details { fields: Vec<FieldSpec> },
    /// Collaborator picker writing a list field.
    Collaborators { field: String },
    Placeholder { message: String },
    /// Final review step; its footer carries the submit control.
    Confirm,
}

#[derive(Debug, Clone)]
pub struct StepDefinition {
    pub id: usize,
    pub label: String,
    pub heading: String,
    pub content: StepContent,
    gate: Option<Gate>,
}

impl StepDefinition {
    pub fn new(id: usize, label: &str, content: StepContent) -> Self {
        Self {
            id,
            label: label.to_string(),
            heading: label.to_string(),
            content,
            gate: None,
        }
    }

    pub fn with_heading(mut self, heading: &str) -> Self {
        self.heading = heading.to_string();
        self
    }

    pub fn with_gate(mut self, gate: Gate) -> Self {
        self.gate = Some(gate);
        self
    }

    pub fn is_gated(&self) -> bool {
        self.gate.is_some()
    }

    /// Ungated steps always allow leaving.
    pub fn gate_allows(&self, form: &FormState) -> bool {
        self.gate.as_ref().map_or(true, |gate| gate.allows(form))
    }
}
