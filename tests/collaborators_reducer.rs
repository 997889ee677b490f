use stepform::mvi::Reducer;
use stepform::ui::collaborators::{
    CollaboratorsDialogState, CollaboratorsIntent, CollaboratorsReducer, GitHubUser,
};

fn users() -> Vec<GitHubUser> {
    vec![
        GitHubUser::new("1", "alice"),
        GitHubUser::new("2", "bob"),
        GitHubUser::new("3", "carol"),
    ]
}

fn load(selected: &[&str]) -> CollaboratorsDialogState {
    CollaboratorsReducer::reduce(
        CollaboratorsDialogState::Hidden,
        CollaboratorsIntent::Load {
            users: users(),
            selected: selected.iter().map(|s| s.to_string()).collect(),
        },
    )
}

fn reduce_all(
    state: CollaboratorsDialogState,
    intents: Vec<CollaboratorsIntent>,
) -> CollaboratorsDialogState {
    intents
        .into_iter()
        .fold(state, |state, intent| CollaboratorsReducer::reduce(state, intent))
}

#[test]
fn load_shows_dialog_with_focus_on_first_row() {
    let state = load(&[]);
    assert!(state.is_visible());
    if let CollaboratorsDialogState::Visible {
        focused,
        refreshing,
        ..
    } = state
    {
        assert_eq!(focused, 0);
        assert!(!refreshing);
    } else {
        panic!("expected Visible");
    }
}

#[test]
fn unknown_logins_are_not_selected() {
    let state = load(&["bob", "nobody"]);
    assert_eq!(state.selected_logins(), vec!["bob"]);
}

#[test]
fn toggle_follows_focus() {
    let state = reduce_all(
        load(&[]),
        vec![
            CollaboratorsIntent::MoveDown,
            CollaboratorsIntent::Toggle,
            CollaboratorsIntent::MoveDown,
            CollaboratorsIntent::Toggle,
        ],
    );
    assert_eq!(state.selected_logins(), vec!["bob", "carol"]);

    let state = CollaboratorsReducer::reduce(state, CollaboratorsIntent::Toggle);
    assert_eq!(state.selected_logins(), vec!["bob"]);
}

#[test]
fn move_down_wraps_to_first() {
    let state = reduce_all(
        load(&[]),
        vec![
            CollaboratorsIntent::MoveDown,
            CollaboratorsIntent::MoveDown,
            CollaboratorsIntent::MoveDown,
        ],
    );
    assert!(matches!(
        state,
        CollaboratorsDialogState::Visible { focused: 0, .. }
    ));
}

#[test]
fn toggle_all_selects_then_clears() {
    let state = CollaboratorsReducer::reduce(load(&["alice"]), CollaboratorsIntent::ToggleAll);
    assert!(state.all_selected());
    assert_eq!(state.selected_logins().len(), 3);

    let state = CollaboratorsReducer::reduce(state, CollaboratorsIntent::ToggleAll);
    assert!(state.selected_logins().is_empty());
}

#[test]
fn refresh_drops_vanished_users_and_clamps_focus() {
    let state = reduce_all(
        load(&["alice", "carol"]),
        vec![
            CollaboratorsIntent::MoveUp,
            CollaboratorsIntent::RefreshStarted,
        ],
    );
    assert!(state.is_refreshing());

    let state = CollaboratorsReducer::reduce(
        state,
        CollaboratorsIntent::RefreshFinished {
            users: vec![GitHubUser::new("1", "alice")],
        },
    );
    assert!(!state.is_refreshing());
    assert_eq!(state.selected_logins(), vec!["alice"]);
    assert!(matches!(
        state,
        CollaboratorsDialogState::Visible { focused: 0, .. }
    ));
}

#[test]
fn refresh_with_empty_list_keeps_dialog_open() {
    let state = reduce_all(
        load(&["alice"]),
        vec![
            CollaboratorsIntent::RefreshStarted,
            CollaboratorsIntent::RefreshFinished { users: Vec::new() },
        ],
    );
    assert!(state.is_visible());
    assert!(state.selected_logins().is_empty());
    assert!(!state.all_selected());
}

#[test]
fn close_hides_dialog() {
    let state = CollaboratorsReducer::reduce(load(&["alice"]), CollaboratorsIntent::Close);
    assert_eq!(state, CollaboratorsDialogState::Hidden);
}

#[test]
fn finished_refresh_while_hidden_is_ignored() {
    let state = CollaboratorsReducer::reduce(
        CollaboratorsDialogState::Hidden,
        CollaboratorsIntent::RefreshFinished { users: users() },
    );
    assert_eq!(state, CollaboratorsDialogState::Hidden);
}
