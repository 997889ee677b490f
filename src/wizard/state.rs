use crate::mvi::UiState;

/// Navigation state of a wizard.
///
/// `Closed` doubles as the reset state: its step index is 0 and nothing is
/// in flight.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum WizardState {
    #[default]
    Closed,
    Open {
        step_index: usize,
        /// A submission has been issued and not yet resolved.
        submitting: bool,
    },
}

impl UiState for WizardState {}

impl WizardState {
    pub fn is_open(&self) -> bool {
        matches!(self, Self::Open { .. })
    }

    pub fn step_index(&self) -> usize {
        match self {
            Self::Open { step_index, .. } => *step_index,
            Self::Closed => 0,
        }
    }

    pub fn is_submitting(&self) -> bool {
        matches!(
            self,
            Self::Open {
                submitting: true,
                ..
            }
        )
    }
}
