use std::collections::BTreeSet;

use crate::mvi::Reducer;

use super::intent::CollaboratorsIntent;
use super::state::CollaboratorsDialogState;

pub struct CollaboratorsReducer;

impl Reducer for CollaboratorsReducer {
    type State = CollaboratorsDialogState;
    type Intent = CollaboratorsIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            CollaboratorsIntent::Load { users, selected } => {
                let selected = users
                    .iter()
                    .filter(|user| selected.contains(&user.login))
                    .map(|user| user.id.clone())
                    .collect();
                CollaboratorsDialogState::Visible {
                    users,
                    selected,
                    focused: 0,
                    refreshing: false,
                }
            }
            CollaboratorsIntent::Close => CollaboratorsDialogState::Hidden,
            CollaboratorsIntent::MoveUp => match state {
                CollaboratorsDialogState::Visible {
                    users,
                    selected,
                    focused,
                    refreshing,
                } => {
                    let focused = if focused == 0 {
                        users.len().saturating_sub(1)
                    } else {
                        focused - 1
                    };
                    CollaboratorsDialogState::Visible {
                        users,
                        selected,
                        focused,
                        refreshing,
                    }
                }
                other => other,
            },
            CollaboratorsIntent::MoveDown => match state {
                CollaboratorsDialogState::Visible {
                    users,
                    selected,
                    focused,
                    refreshing,
                } => {
                    let focused = if focused + 1 >= users.len() {
                        0
                    } else {
                        focused + 1
                    };
                    CollaboratorsDialogState::Visible {
                        users,
                        selected,
                        focused,
                        refreshing,
                    }
                }
                other => other,
            },
            CollaboratorsIntent::Toggle => match state {
                CollaboratorsDialogState::Visible {
                    users,
                    mut selected,
                    focused,
                    refreshing: false,
                } => {
                    if let Some(user) = users.get(focused) {
                        if !selected.remove(&user.id) {
                            selected.insert(user.id.clone());
                        }
                    }
                    CollaboratorsDialogState::Visible {
                        users,
                        selected,
                        focused,
                        refreshing: false,
                    }
                }
                other => other,
            },
            CollaboratorsIntent::ToggleAll => {
                let all_selected = state.all_selected();
                match state {
                    CollaboratorsDialogState::Visible {
                        users,
                        focused,
                        refreshing: false,
                        ..
                    } => {
                        let selected = if all_selected {
                            BTreeSet::new()
                        } else {
                            users.iter().map(|user| user.id.clone()).collect()
                        };
                        CollaboratorsDialogState::Visible {
                            users,
                            selected,
                            focused,
                            refreshing: false,
                        }
                    }
                    other => other,
                }
            }
            CollaboratorsIntent::RefreshStarted => match state {
                CollaboratorsDialogState::Visible {
                    users,
                    selected,
                    focused,
                    ..
                } => CollaboratorsDialogState::Visible {
                    users,
                    selected,
                    focused,
                    refreshing: true,
                },
                other => other,
            },
            CollaboratorsIntent::RefreshFinished { users } => match state {
                CollaboratorsDialogState::Visible {
                    selected, focused, ..
                } => {
                    let selected = selected
                        .into_iter()
                        .filter(|id| users.iter().any(|user| &user.id == id))
                        .collect();
                    let focused = focused.min(users.len().saturating_sub(1));
                    CollaboratorsDialogState::Visible {
                        users,
                        selected,
                        focused,
                        refreshing: false,
                    }
                }
                other => other,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::collaborators::GitHubUser;

    fn users() -> Vec<GitHubUser> {
        vec![
            GitHubUser::new("1", "alice"),
            GitHubUser::new("2", "bob"),
            GitHubUser::new("3", "carol"),
        ]
    }

    fn loaded() -> CollaboratorsDialogState {
        CollaboratorsReducer::reduce(
            CollaboratorsDialogState::Hidden,
            CollaboratorsIntent::Load {
                users: users(),
                selected: vec!["bob".into()],
            },
        )
    }

    #[test]
    fn load_maps_logins_to_ids() {
        let state = loaded();
        assert_eq!(state.selected_logins(), vec!["bob"]);
    }

    #[test]
    fn move_up_wraps_to_last() {
        let state = CollaboratorsReducer::reduce(loaded(), CollaboratorsIntent::MoveUp);
        assert!(matches!(
            state,
            CollaboratorsDialogState::Visible { focused: 2, .. }
        ));
    }

    #[test]
    fn toggle_is_frozen_while_refreshing() {
        let state = CollaboratorsReducer::reduce(loaded(), CollaboratorsIntent::RefreshStarted);
        let state = CollaboratorsReducer::reduce(state, CollaboratorsIntent::Toggle);
        assert_eq!(state.selected_logins(), vec!["bob"]);
        assert!(state.is_refreshing());
    }

    #[test]
    fn intents_while_hidden_are_ignored() {
        let state =
            CollaboratorsReducer::reduce(CollaboratorsDialogState::Hidden, CollaboratorsIntent::Toggle);
        assert_eq!(state, CollaboratorsDialogState::Hidden);
    }
}
