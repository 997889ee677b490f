use crate::mvi::Reducer;

use super::intent::WizardIntent;
use super::state::WizardState;

pub struct WizardReducer;

impl Reducer for WizardReducer {
    type State = WizardState;
    type Intent = WizardIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            WizardIntent::Open => match state {
                WizardState::Closed => WizardState::Open {
                    step_index: 0,
                    submitting: false,
                },
                open => open,
            },

            WizardIntent::Advance {
                step_count,
                gate_open,
            } => match state {
                WizardState::Open {
                    step_index,
                    submitting: false,
                } if gate_open && step_count > 0 => WizardState::Open {
                    step_index: (step_index + 1).min(step_count - 1),
                    submitting: false,
                },
                other => other,
            },

            WizardIntent::Retreat => match state {
                WizardState::Open {
                    step_index,
                    submitting: false,
                } => WizardState::Open {
                    step_index: step_index.saturating_sub(1),
                    submitting: false,
                },
                other => other,
            },

            WizardIntent::SubmitStarted { step_count } => match state {
                WizardState::Open {
                    step_index,
                    submitting: false,
                } if step_index + 1 == step_count => WizardState::Open {
                    step_index,
                    submitting: true,
                },
                other => other,
            },

            WizardIntent::SubmitSucceeded => match state {
                WizardState::Open {
                    submitting: true, ..
                } => WizardState::Closed,
                other => other,
            },

            WizardIntent::SubmitFailed => match state {
                WizardState::Open {
                    step_index,
                    submitting: true,
                } => WizardState::Open {
                    step_index,
                    submitting: false,
                },
                other => other,
            },

            WizardIntent::Cancel => match state {
                WizardState::Open {
                    submitting: true, ..
                } => state,
                _ => WizardState::Closed,
            },

            WizardIntent::Close => WizardState::Closed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open(step_index: usize, submitting: bool) -> WizardState {
        WizardState::Open {
            step_index,
            submitting,
        }
    }

    fn advance(gate_open: bool) -> WizardIntent {
        WizardIntent::Advance {
            step_count: 4,
            gate_open,
        }
    }

    #[test]
    fn open_starts_at_first_step() {
        let state = WizardReducer::reduce(WizardState::Closed, WizardIntent::Open);
        assert_eq!(state, open(0, false));
    }

    #[test]
    fn open_while_open_keeps_position() {
        let state = WizardReducer::reduce(open(2, false), WizardIntent::Open);
        assert_eq!(state, open(2, false));
    }

    #[test]
    fn advance_blocked_by_closed_gate() {
        let state = WizardReducer::reduce(open(0, false), advance(false));
        assert_eq!(state, open(0, false));
    }

    #[test]
    fn advance_clamps_at_last_step() {
        let state = WizardReducer::reduce(open(3, false), advance(true));
        assert_eq!(state, open(3, false));
    }

    #[test]
    fn retreat_clamps_at_first_step() {
        let state = WizardReducer::reduce(open(0, false), WizardIntent::Retreat);
        assert_eq!(state, open(0, false));
        let state = WizardReducer::reduce(open(2, false), WizardIntent::Retreat);
        assert_eq!(state, open(1, false));
    }

    #[test]
    fn navigation_frozen_while_submitting() {
        let state = WizardReducer::reduce(open(3, true), WizardIntent::Retreat);
        assert_eq!(state, open(3, true));
        let state = WizardReducer::reduce(open(3, true), advance(true));
        assert_eq!(state, open(3, true));
        let state = WizardReducer::reduce(open(3, true), WizardIntent::Cancel);
        assert_eq!(state, open(3, true));
    }

    #[test]
    fn submit_only_from_last_step() {
        let state =
            WizardReducer::reduce(open(2, false), WizardIntent::SubmitStarted { step_count: 4 });
        assert_eq!(state, open(2, false));
        let state =
            WizardReducer::reduce(open(3, false), WizardIntent::SubmitStarted { step_count: 4 });
        assert_eq!(state, open(3, true));
    }

    #[test]
    fn second_submit_is_ignored() {
        let state =
            WizardReducer::reduce(open(3, true), WizardIntent::SubmitStarted { step_count: 4 });
        assert_eq!(state, open(3, true));
    }

    #[test]
    fn success_closes_failure_stays() {
        assert_eq!(
            WizardReducer::reduce(open(3, true), WizardIntent::SubmitSucceeded),
            WizardState::Closed
        );
        assert_eq!(
            WizardReducer::reduce(open(3, true), WizardIntent::SubmitFailed),
            open(3, false)
        );
    }

    #[test]
    fn host_close_always_wins() {
        assert_eq!(
            WizardReducer::reduce(open(3, true), WizardIntent::Close),
            WizardState::Closed
        );
    }
}
