use std::collections::BTreeSet;

use crate::config::Collaborator;
use crate::mvi::UiState;

/// A GitHub user that can be assigned to a project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GitHubUser {
    pub id: String,
    pub login: String,
}

impl GitHubUser {
    pub fn new(id: impl Into<String>, login: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            login: login.into(),
        }
    }
}

impl From<&Collaborator> for GitHubUser {
    fn from(collaborator: &Collaborator) -> Self {
        Self::new(collaborator.id.clone(), collaborator.login.clone())
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum CollaboratorsDialogState {
    #[default]
    Hidden,
    Visible {
        users: Vec<GitHubUser>,
        /// Selected user ids.
        selected: BTreeSet<String>,
        focused: usize,
        /// Collaborator list is being re-synced; selection is frozen.
        refreshing: bool,
    },
}

impl UiState for CollaboratorsDialogState {}

impl CollaboratorsDialogState {
    pub fn is_visible(&self) -> bool {
        !matches!(self, Self::Hidden)
    }

    pub fn is_refreshing(&self) -> bool {
        matches!(self, Self::Visible { refreshing: true, .. })
    }

    /// Logins of the selected users, in list order.
    pub fn selected_logins(&self) -> Vec<String> {
        match self {
            Self::Hidden => Vec::new(),
            Self::Visible {
                users, selected, ..
            } => users
                .iter()
                .filter(|user| selected.contains(&user.id))
                .map(|user| user.login.clone())
                .collect(),
        }
    }

    pub fn all_selected(&self) -> bool {
        match self {
            Self::Hidden => false,
            Self::Visible {
                users, selected, ..
            } => !users.is_empty() && users.iter().all(|user| selected.contains(&user.id)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn visible(selected: &[&str]) -> CollaboratorsDialogState {
        CollaboratorsDialogState::Visible {
            users: vec![GitHubUser::new("1", "alice"), GitHubUser::new("2", "bob")],
            selected: selected.iter().map(|s| s.to_string()).collect(),
            focused: 0,
            refreshing: false,
        }
    }

    #[test]
    fn selected_logins_follow_list_order() {
        let state = visible(&["2", "1"]);
        assert_eq!(state.selected_logins(), vec!["alice", "bob"]);
        assert!(state.all_selected());
    }

    #[test]
    fn hidden_has_no_selection() {
        let state = CollaboratorsDialogState::Hidden;
        assert!(state.selected_logins().is_empty());
        assert!(!state.all_selected());
        assert!(!state.is_refreshing());
    }
}
