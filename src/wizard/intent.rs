use crate::mvi::Intent;

/// Transitions of the wizard navigation state.
///
/// Intents that need facts the state does not hold (step count, gate result)
/// carry them, keeping the reducer pure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WizardIntent {
    Open,
    /// "Save & Next". Ignored unless `gate_open`.
    Advance { step_count: usize, gate_open: bool },
    /// "Go Back".
    Retreat,
    /// Submit pressed; only legal on the last step.
    SubmitStarted { step_count: usize },
    SubmitSucceeded,
    SubmitFailed,
    /// User cancel; ignored while a submission is in flight.
    Cancel,
    /// Host closed the wizard. Always honored.
    Close,
}

impl Intent for WizardIntent {}
