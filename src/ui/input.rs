use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::ui::app::App;
use crate::ui::collaborators::CollaboratorsIntent;
use crate::wizard::SubmitTicket;

/// Work the event loop must do after a key press.
#[derive(Debug)]
pub enum InputAction {
    /// Handled internally.
    None,
    /// Send this submission to the submitter.
    Submit(SubmitTicket),
    /// Re-fetch the collaborator list.
    RefreshCollaborators,
}

pub fn handle_key(app: &mut App, key: KeyEvent) -> InputAction {
    if key.kind != KeyEventKind::Press {
        return InputAction::None;
    }

    if is_ctrl_char(key, 'q') || is_ctrl_char(key, 'c') {
        app.request_quit();
        return InputAction::None;
    }

    if !app.wizard().is_open() {
        match key.code {
            KeyCode::Char('n') | KeyCode::Enter => app.open_wizard(),
            KeyCode::Char('q') | KeyCode::Esc => app.request_quit(),
            _ => {}
        }
        return InputAction::None;
    }

    if app.collaborators_dialog().is_visible() {
        return handle_collaborators_key(app, key);
    }

    if is_ctrl_char(key, 'b') {
        app.go_back();
        return InputAction::None;
    }

    match key.code {
        KeyCode::Esc => app.cancel_wizard(),
        KeyCode::Enter => return app.primary_action(),
        KeyCode::Tab | KeyCode::Down => app.focus_next_field(),
        KeyCode::BackTab | KeyCode::Up => app.focus_previous_field(),
        KeyCode::Left => app.cycle_option(false),
        KeyCode::Right => app.cycle_option(true),
        KeyCode::Backspace => app.delete_char(),
        KeyCode::Char(' ') if app.collaborators_field().is_some() => app.open_collaborators(),
        KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.insert_char(ch)
        }
        _ => {}
    }
    InputAction::None
}

fn handle_collaborators_key(app: &mut App, key: KeyEvent) -> InputAction {
    match key.code {
        KeyCode::Esc => app.dispatch_collaborators(CollaboratorsIntent::Close),
        KeyCode::Enter => app.save_collaborators(),
        KeyCode::Up => app.dispatch_collaborators(CollaboratorsIntent::MoveUp),
        KeyCode::Down => app.dispatch_collaborators(CollaboratorsIntent::MoveDown),
        KeyCode::Char(' ') => app.dispatch_collaborators(CollaboratorsIntent::Toggle),
        KeyCode::Char('a') => app.dispatch_collaborators(CollaboratorsIntent::ToggleAll),
        KeyCode::Char('r') => return app.request_collaborators_refresh(),
        _ => {}
    }
    InputAction::None
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}
