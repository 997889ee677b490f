use std::io;
use std::sync::mpsc::{RecvTimeoutError, Sender};
use std::sync::Arc;
use std::time::Duration;

use tokio::runtime::Handle;

use crate::config::Config;
use crate::form::{SimulatedSubmitter, Submitter};
use crate::i18n::{Catalog, Passthrough, Translator};
use crate::ui::app::App;
use crate::ui::collaborators::GitHubUser;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::{handle_key, InputAction};
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use crate::wizard::{create_project_wizard, SubmitTicket, WizardError};

/// Build the host state from configuration. The wizard's close callback
/// reports back through `events`.
pub fn build_app(config: &Config, events: Sender<AppEvent>) -> Result<App, WizardError> {
    let translator: Arc<dyn Translator> = if config.translations.is_empty() {
        Arc::new(Passthrough)
    } else {
        Arc::new(Catalog::new(config.translations.clone()))
    };

    let wizard = create_project_wizard(config.wizard.organizations.clone(), translator)?
        .on_close(move || {
            let _ = events.send(AppEvent::WizardClosed);
        });
    let collaborators = config
        .wizard
        .collaborators
        .iter()
        .map(GitHubUser::from)
        .collect();

    Ok(App::new(wizard, collaborators))
}

pub fn run(config: Config, runtime: Handle) -> io::Result<()> {
    let tick_rate = Duration::from_millis(config.wizard.tick_rate_ms);
    let events = EventHandler::new(tick_rate);
    let mut app = build_app(&config, events.sender())
        .map_err(|err| io::Error::new(io::ErrorKind::InvalidInput, err.to_string()))?;
    let submitter: Arc<dyn Submitter> = Arc::new(
        SimulatedSubmitter::new(Duration::from_millis(config.submit.latency_ms))
            .with_taken_names(config.submit.taken_names.clone())
            .offline(config.submit.offline),
    );

    let (mut terminal, guard) = setup_terminal()?;
    app.open_wizard();

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => match handle_key(&mut app, key) {
                InputAction::None => {}
                InputAction::Submit(ticket) => {
                    spawn_submit(&runtime, Arc::clone(&submitter), ticket, events.sender());
                }
                InputAction::RefreshCollaborators => {
                    spawn_refresh(&runtime, &config, events.sender());
                }
            },
            Ok(AppEvent::Tick) => app.on_tick(),
            Ok(AppEvent::Resize(_, _)) => {}
            Ok(AppEvent::SubmitFinished { ticket, result }) => {
                app.on_submit_finished(&ticket, result);
            }
            Ok(AppEvent::CollaboratorsRefreshed(users)) => app.on_collaborators_refreshed(users),
            Ok(AppEvent::WizardClosed) => app.on_wizard_closed(),
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }

    drop(guard);
    Ok(())
}

fn spawn_submit(
    runtime: &Handle,
    submitter: Arc<dyn Submitter>,
    ticket: SubmitTicket,
    tx: Sender<AppEvent>,
) {
    tracing::debug!(
        generation = ticket.generation(),
        payload = %ticket.request().to_json(),
        "Submitting"
    );

    runtime.spawn(async move {
        let result = submitter.submit(ticket.request().clone()).await;
        if !ticket.is_live() {
            tracing::debug!(
                generation = ticket.generation(),
                "Wizard closed before submission finished"
            );
            return;
        }
        let _ = tx.send(AppEvent::SubmitFinished { ticket, result });
    });
}

fn spawn_refresh(runtime: &Handle, config: &Config, tx: Sender<AppEvent>) {
    let users: Vec<GitHubUser> = config
        .wizard
        .collaborators
        .iter()
        .map(GitHubUser::from)
        .collect();
    let latency = Duration::from_millis(config.submit.latency_ms);

    runtime.spawn(async move {
        tokio::time::sleep(latency).await;
        tracing::debug!(count = users.len(), "Collaborators refreshed");
        let _ = tx.send(AppEvent::CollaboratorsRefreshed(users));
    });
}
