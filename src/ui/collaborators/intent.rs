use crate::mvi::Intent;

use super::state::GitHubUser;

#[derive(Debug, Clone)]
pub enum CollaboratorsIntent {
    /// Show the dialog. `selected` holds logins already on the form.
    Load {
        users: Vec<GitHubUser>,
        selected: Vec<String>,
    },
    MoveUp,
    MoveDown,
    Toggle,
    /// Select everyone, or clear the selection when everyone is selected.
    ToggleAll,
    RefreshStarted,
    /// Replaces the user list. Selections of users that disappeared are
    /// dropped.
    RefreshFinished { users: Vec<GitHubUser> },
    Close,
}

impl Intent for CollaboratorsIntent {}
