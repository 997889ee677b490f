//! Multi-step form wizard.
//!
//! # Architecture
//!
//! ```text
//! StepFormWizard
//!   ├── WizardState      (Closed | Open { step_index, submitting }, MVI reducer)
//!   ├── StepDefinition   (label, content, optional gate predicate)
//!   ├── FormStore        (field values and errors)
//!   └── DefaultValueSynchronizer (derived defaults such as repo_name)
//! ```
//!
//! Every step except the first may be a placeholder; the first step's gate
//! also decides whether later steps show as disabled in the progress
//! indicator. Submission is only possible from the last step and freezes
//! navigation until the answer arrives.

mod controller;
mod controls;
mod intent;
pub mod project;
mod reducer;
mod state;
mod step;
mod sync;

pub use controller::{
    BlockReason, Navigation, StepFormWizard, SubmitOutcome, SubmitTicket, WizardError,
};
pub use controls::{
    ButtonOptions, ButtonOverrides, ButtonVariant, Footer, FooterAction, ProgressIndicator,
    ProgressStep, StepStatus,
};
pub use intent::WizardIntent;
pub use project::create_project_wizard;
pub use reducer::WizardReducer;
pub use state::WizardState;
pub use step::{FieldKind, FieldSpec, Gate, StepContent, StepDefinition};
pub use sync::{first_entry, DefaultValueSynchronizer, DerivedFieldRule, SyncInputs};
