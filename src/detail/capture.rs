//! Modals opened by the "Capture Task Changes" button.

use crate::i18n::Translator;
use crate::mvi::{Intent, Reducer, UiState};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CaptureState {
    pub capturing: bool,
    pub connect_open: bool,
    pub info_open: bool,
    pub capture_open: bool,
}

impl UiState for CaptureState {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaptureButton {
    pub label: String,
    pub busy: bool,
    pub disabled: bool,
}

impl CaptureState {
    pub fn button(&self, t: &dyn Translator) -> CaptureButton {
        let label = if self.capturing {
            t.translate("Loading…")
        } else {
            t.translate("Capture Task Changes")
        };
        CaptureButton {
            label,
            busy: self.capturing,
            disabled: self.capturing,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CaptureIntent {
    /// Button pressed by a signed-in user.
    Requested {
        has_valid_token: bool,
        devhub_enabled: bool,
    },
    /// The capture request finished, whatever the result.
    Finished,
    CloseConnect,
    CloseInfo,
    CloseCapture,
}

impl Intent for CaptureIntent {}

pub struct CaptureReducer;

impl Reducer for CaptureReducer {
    type State = CaptureState;
    type Intent = CaptureIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            CaptureIntent::Requested {
                has_valid_token,
                devhub_enabled,
            } => {
                if !has_valid_token {
                    // Must connect a GitHub/Salesforce account first.
                    CaptureState {
                        capturing: false,
                        connect_open: true,
                        capture_open: true,
                        ..state
                    }
                } else if !devhub_enabled {
                    CaptureState {
                        capturing: false,
                        info_open: true,
                        capture_open: true,
                        ..state
                    }
                } else {
                    CaptureState {
                        capturing: true,
                        capture_open: true,
                        ..state
                    }
                }
            }
            CaptureIntent::Finished => CaptureState {
                capturing: false,
                ..state
            },
            CaptureIntent::CloseConnect => CaptureState {
                connect_open: false,
                ..state
            },
            CaptureIntent::CloseInfo => CaptureState {
                info_open: false,
                ..state
            },
            CaptureIntent::CloseCapture => CaptureState {
                capture_open: false,
                ..state
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::Passthrough;

    fn request(has_valid_token: bool, devhub_enabled: bool) -> CaptureIntent {
        CaptureIntent::Requested {
            has_valid_token,
            devhub_enabled,
        }
    }

    #[test]
    fn missing_token_opens_connect_modal() {
        let state = CaptureReducer::reduce(CaptureState::default(), request(false, false));
        assert!(state.connect_open);
        assert!(!state.info_open);
        assert!(!state.capturing);
        assert!(state.capture_open);
    }

    #[test]
    fn missing_devhub_opens_info_modal() {
        let state = CaptureReducer::reduce(CaptureState::default(), request(true, false));
        assert!(state.info_open);
        assert!(!state.connect_open);
        assert!(!state.capturing);
    }

    #[test]
    fn ready_user_starts_capturing() {
        let state = CaptureReducer::reduce(CaptureState::default(), request(true, true));
        assert!(state.capturing);
        assert!(state.capture_open);
        let button = state.button(&Passthrough);
        assert_eq!(button.label, "Loading…");
        assert!(button.disabled);
    }

    #[test]
    fn finished_clears_capturing() {
        let state = CaptureReducer::reduce(CaptureState::default(), request(true, true));
        let state = CaptureReducer::reduce(state, CaptureIntent::Finished);
        assert!(!state.capturing);
        assert_eq!(state.button(&Passthrough).label, "Capture Task Changes");
    }
}
