use crate::dispatch_mvi;
use crate::form::{FieldValue, SubmitError};
use crate::ui::collaborators::{
    CollaboratorsDialogState, CollaboratorsIntent, CollaboratorsReducer, GitHubUser,
};
use crate::ui::input::InputAction;
use crate::wizard::project::FIELD_NAME;
use crate::wizard::{
    BlockReason, FieldKind, FieldSpec, Navigation, StepContent, StepFormWizard, SubmitOutcome,
    SubmitTicket,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusLine {
    Info(String),
    Error(String),
}

/// Host state around one wizard.
///
/// Side effects that need the runtime (submissions, collaborator refreshes)
/// are returned as [`InputAction`]s and carried out by the event loop.
pub struct App {
    should_quit: bool,
    wizard: StepFormWizard,
    /// Index into the current step's detail fields.
    focused_field: usize,
    collaborators: Vec<GitHubUser>,
    collaborators_dialog: CollaboratorsDialogState,
    status: Option<StatusLine>,
    animation_tick: u8,
    created: usize,
}

impl App {
    pub fn new(wizard: StepFormWizard, collaborators: Vec<GitHubUser>) -> Self {
        Self {
            should_quit: false,
            wizard,
            focused_field: 0,
            collaborators,
            collaborators_dialog: CollaboratorsDialogState::default(),
            status: None,
            animation_tick: 0,
            created: 0,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn wizard(&self) -> &StepFormWizard {
        &self.wizard
    }

    pub fn focused_field(&self) -> usize {
        self.focused_field
    }

    pub fn collaborators_dialog(&self) -> &CollaboratorsDialogState {
        &self.collaborators_dialog
    }

    pub fn status(&self) -> Option<&StatusLine> {
        self.status.as_ref()
    }

    pub fn animation_tick(&self) -> u8 {
        self.animation_tick
    }

    /// Projects created during this session.
    pub fn created(&self) -> usize {
        self.created
    }

    pub fn on_tick(&mut self) {
        if self.wizard.is_submitting() || self.collaborators_dialog.is_refreshing() {
            self.animation_tick = self.animation_tick.wrapping_add(1);
        }
    }

    // ------------------------------------------------------------------
    // Wizard lifecycle
    // ------------------------------------------------------------------

    pub fn open_wizard(&mut self) {
        self.wizard.open();
        self.focused_field = 0;
        self.status = None;
    }

    pub fn cancel_wizard(&mut self) {
        if let Err(err) = self.wizard.cancel() {
            self.status = Some(StatusLine::Error(err.to_string()));
        }
    }

    /// The wizard reported that it closed itself.
    pub fn on_wizard_closed(&mut self) {
        self.focused_field = 0;
        dispatch_mvi!(
            self,
            collaborators_dialog,
            CollaboratorsReducer,
            CollaboratorsIntent::Close
        );
    }

    /// Next on intermediate steps, submit on the last one.
    pub fn primary_action(&mut self) -> InputAction {
        if self.wizard.is_last_step() {
            return match self.wizard.begin_submit() {
                Ok(ticket) => {
                    self.status = None;
                    InputAction::Submit(ticket)
                }
                Err(err) => {
                    self.status = Some(StatusLine::Error(err.to_string()));
                    InputAction::None
                }
            };
        }

        match self.wizard.advance() {
            Navigation::Moved { .. } => {
                self.focused_field = 0;
                self.status = None;
            }
            Navigation::Blocked(BlockReason::GateClosed) => {
                self.status = Some(StatusLine::Error(
                    self.wizard
                        .translator()
                        .translate("Complete the required fields to continue"),
                ));
            }
            Navigation::Blocked(_) | Navigation::Stayed(_) => {}
        }
        InputAction::None
    }

    pub fn go_back(&mut self) {
        if let Navigation::Moved { .. } = self.wizard.retreat() {
            self.focused_field = 0;
            self.status = None;
        }
    }

    pub fn on_submit_finished(&mut self, ticket: &SubmitTicket, result: Result<(), SubmitError>) {
        let name = ticket
            .request()
            .fields
            .get(FIELD_NAME)
            .and_then(FieldValue::as_text)
            .unwrap_or_default()
            .to_string();

        match self.wizard.finish_submit(ticket, result) {
            SubmitOutcome::Completed => {
                self.created += 1;
                self.status = Some(StatusLine::Info(format!("Created project \"{}\"", name)));
            }
            SubmitOutcome::Rejected(SubmitError::Validation(_)) => {
                self.status = Some(StatusLine::Error(
                    self.wizard
                        .translator()
                        .translate("Fix the highlighted fields and try again"),
                ));
            }
            SubmitOutcome::Rejected(err) => {
                self.status = Some(StatusLine::Error(err.to_string()));
            }
            SubmitOutcome::Discarded => {}
        }
    }

    // ------------------------------------------------------------------
    // Detail fields
    // ------------------------------------------------------------------

    pub fn detail_fields(&self) -> &[FieldSpec] {
        if !self.wizard.is_open() {
            return &[];
        }
        match &self.wizard.current_step().content {
            StepContent::Details { fields } => fields,
            _ => &[],
        }
    }

    pub fn focus_next_field(&mut self) {
        let count = self.detail_fields().len();
        if count > 0 {
            self.focused_field = (self.focused_field + 1) % count;
        }
    }

    pub fn focus_previous_field(&mut self) {
        let count = self.detail_fields().len();
        if count > 0 {
            self.focused_field = (self.focused_field + count - 1) % count;
        }
    }

    pub fn insert_char(&mut self, ch: char) {
        let Some(spec) = self.focused_text_field() else {
            return;
        };
        let mut value = self.wizard.form().text(&spec.name).to_string();
        value.push(ch);
        self.wizard.set_field(&spec.name, FieldValue::Text(value));
    }

    pub fn delete_char(&mut self) {
        let Some(spec) = self.focused_text_field() else {
            return;
        };
        let mut value = self.wizard.form().text(&spec.name).to_string();
        if value.pop().is_some() {
            self.wizard.set_field(&spec.name, FieldValue::Text(value));
        }
    }

    /// Step the focused select field through its options.
    pub fn cycle_option(&mut self, forward: bool) {
        let Some(spec) = self.detail_fields().get(self.focused_field).cloned() else {
            return;
        };
        let FieldKind::Select { options_input } = &spec.kind else {
            return;
        };
        let options: Vec<String> = self
            .wizard
            .inputs()
            .get(options_input)
            .and_then(FieldValue::as_list)
            .map(<[String]>::to_vec)
            .unwrap_or_default();
        if options.is_empty() {
            return;
        }

        let current = self.wizard.form().text(&spec.name);
        let next = match options.iter().position(|option| option == current) {
            Some(index) if forward => (index + 1) % options.len(),
            Some(index) => (index + options.len() - 1) % options.len(),
            None => 0,
        };
        self.wizard
            .set_field(&spec.name, FieldValue::Text(options[next].clone()));
    }

    fn focused_text_field(&self) -> Option<FieldSpec> {
        self.detail_fields()
            .get(self.focused_field)
            .filter(|spec| spec.kind == FieldKind::Text)
            .cloned()
    }

    // ------------------------------------------------------------------
    // Collaborators
    // ------------------------------------------------------------------

    /// List field the current step edits through the collaborators dialog.
    pub fn collaborators_field(&self) -> Option<&str> {
        if !self.wizard.is_open() {
            return None;
        }
        match &self.wizard.current_step().content {
            StepContent::Collaborators { field } => Some(field.as_str()),
            _ => None,
        }
    }

    pub fn open_collaborators(&mut self) {
        let Some(field) = self.collaborators_field() else {
            return;
        };
        if self.wizard.is_submitting() {
            return;
        }
        let selected = self.wizard.form().list(field).to_vec();
        let users = self.collaborators.clone();
        self.dispatch_collaborators(CollaboratorsIntent::Load { users, selected });
    }

    pub fn dispatch_collaborators(&mut self, intent: CollaboratorsIntent) {
        dispatch_mvi!(self, collaborators_dialog, CollaboratorsReducer, intent);
    }

    pub fn save_collaborators(&mut self) {
        if self.collaborators_dialog.is_refreshing() {
            return;
        }
        if let Some(field) = self.collaborators_field().map(str::to_string) {
            let logins = self.collaborators_dialog.selected_logins();
            self.wizard.set_field(&field, FieldValue::List(logins));
        }
        self.dispatch_collaborators(CollaboratorsIntent::Close);
    }

    pub fn request_collaborators_refresh(&mut self) -> InputAction {
        if !self.collaborators_dialog.is_visible() || self.collaborators_dialog.is_refreshing() {
            return InputAction::None;
        }
        self.dispatch_collaborators(CollaboratorsIntent::RefreshStarted);
        InputAction::RefreshCollaborators
    }

    pub fn on_collaborators_refreshed(&mut self, users: Vec<GitHubUser>) {
        self.collaborators = users.clone();
        self.dispatch_collaborators(CollaboratorsIntent::RefreshFinished { users });
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::form::{FieldErrors, ObjectType};
    use crate::i18n::Passthrough;
    use crate::wizard::create_project_wizard;
    use crate::wizard::project::{FIELD_GITHUB_USERS, FIELD_ORGANIZATION, FIELD_REPO_NAME};

    fn make_app() -> App {
        let wizard = create_project_wizard(vec!["acme".into()], Arc::new(Passthrough))
            .expect("project wizard has steps");
        let users = vec![GitHubUser::new("1", "alice"), GitHubUser::new("2", "bob")];
        let mut app = App::new(wizard, users);
        app.open_wizard();
        app
    }

    fn type_text(app: &mut App, text: &str) {
        for ch in text.chars() {
            app.insert_char(ch);
        }
    }

    #[test]
    fn typing_name_fills_repo_name() {
        let mut app = make_app();
        type_text(&mut app, "My App");
        assert_eq!(app.wizard().form().text(FIELD_NAME), "My App");
        assert_eq!(app.wizard().form().text(FIELD_REPO_NAME), "My-App");
        assert_eq!(app.wizard().form().text(FIELD_ORGANIZATION), "acme");
    }

    #[test]
    fn blocked_advance_sets_error_status() {
        let mut app = make_app();
        let action = app.primary_action();
        assert!(matches!(action, InputAction::None));
        assert_eq!(app.wizard().step_index(), 0);
        assert!(matches!(app.status(), Some(StatusLine::Error(_))));
    }

    #[test]
    fn saving_collaborators_writes_list_field() {
        let mut app = make_app();
        type_text(&mut app, "Demo");
        app.primary_action();
        assert_eq!(app.collaborators_field(), Some(FIELD_GITHUB_USERS));

        app.open_collaborators();
        app.dispatch_collaborators(CollaboratorsIntent::ToggleAll);
        app.save_collaborators();

        assert!(!app.collaborators_dialog().is_visible());
        assert_eq!(
            app.wizard().form().list(FIELD_GITHUB_USERS),
            ["alice".to_string(), "bob".to_string()]
        );
    }

    #[test]
    fn submit_on_last_step_returns_ticket() {
        let mut app = make_app();
        type_text(&mut app, "Demo");
        for _ in 0..3 {
            app.primary_action();
        }
        let InputAction::Submit(ticket) = app.primary_action() else {
            panic!("expected a submit action");
        };
        assert_eq!(ticket.request().object_type, ObjectType::Project);
        assert!(app.wizard().is_submitting());

        let mut errors = FieldErrors::new();
        errors.insert(FIELD_NAME.into(), "already exists".into());
        app.on_submit_finished(&ticket, Err(SubmitError::Validation(errors)));
        assert!(!app.wizard().is_submitting());
        assert_eq!(app.wizard().step_index(), 3);
        assert_eq!(app.wizard().form().error(FIELD_NAME), Some("already exists"));
    }

    #[test]
    fn backspace_on_select_field_is_ignored() {
        let mut app = make_app();
        let org_index = app
            .detail_fields()
            .iter()
            .position(|spec| spec.name == FIELD_ORGANIZATION)
            .expect("organization field");
        for _ in 0..org_index {
            app.focus_next_field();
        }
        app.delete_char();
        assert_eq!(app.wizard().form().text(FIELD_ORGANIZATION), "acme");
    }
}
