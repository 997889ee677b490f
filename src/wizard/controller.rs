//! The wizard itself: steps, form store, synchronizer and navigation state
//! wired together.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use thiserror::Error;

use crate::form::{
    FieldValue, FormState, FormStore, MemoryFormStore, ObjectType, SubmitError, SubmitRequest,
    Submitter,
};
use crate::i18n::{Passthrough, Translator};

use super::controls::{ButtonOptions, ButtonOverrides, Footer, ProgressIndicator};
use super::intent::WizardIntent;
use super::reducer::WizardReducer;
use super::state::WizardState;
use super::step::StepDefinition;
use super::sync::{DefaultValueSynchronizer, DerivedFieldRule, SyncInputs};

/// Result of a navigation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    Moved { from: usize, to: usize },
    /// Request was legal but the index is already at its bound.
    Stayed(usize),
    Blocked(BlockReason),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockReason {
    Closed,
    GateClosed,
    Submitting,
}

/// Commands the wizard refuses.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WizardError {
    #[error("A wizard needs at least one step")]
    NoSteps,

    #[error("Wizard is closed")]
    Closed,

    #[error("Submit is only available on the last step (currently on step {step_index})")]
    NotOnFinalStep { step_index: usize },

    #[error("A submission is already in flight")]
    SubmitInFlight,
}

/// How a submission ended, from the wizard's point of view.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// Accepted; the wizard reset and closed.
    Completed,
    /// Refused; the wizard stays on the last step with its fields intact.
    Rejected(SubmitError),
    /// The answer arrived after the wizard was closed or dropped.
    Discarded,
}

/// Handle for one issued submission.
///
/// Clone it into the task that awaits the submitter, then hand it back to
/// [`StepFormWizard::finish_submit`]. `is_live` turns false once the wizard
/// closes or is dropped, so late answers can be dropped early.
#[derive(Debug, Clone)]
pub struct SubmitTicket {
    generation: u64,
    request: SubmitRequest,
    alive: Arc<AtomicBool>,
}

impl SubmitTicket {
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn request(&self) -> &SubmitRequest {
        &self.request
    }

    pub fn is_live(&self) -> bool {
        self.alive.load(Ordering::Acquire)
    }
}

struct InFlight {
    generation: u64,
    alive: Arc<AtomicBool>,
}

impl InFlight {
    fn abandon(&self) {
        self.alive.store(false, Ordering::Release);
    }
}

type CloseCallback = Box<dyn FnMut() + Send>;

pub struct StepFormWizard<S: FormStore = MemoryFormStore> {
    steps: Vec<StepDefinition>,
    store: S,
    sync: DefaultValueSynchronizer,
    inputs: SyncInputs,
    state: WizardState,
    object_type: ObjectType,
    translator: Arc<dyn Translator>,
    submit_label: String,
    submitting_label: String,
    on_close: Option<CloseCallback>,
    generation: u64,
    in_flight: Option<InFlight>,
}

impl<S: FormStore> StepFormWizard<S> {
    pub fn new(
        steps: Vec<StepDefinition>,
        store: S,
        object_type: ObjectType,
    ) -> Result<Self, WizardError> {
        if steps.is_empty() {
            return Err(WizardError::NoSteps);
        }
        Ok(Self {
            steps,
            store,
            sync: DefaultValueSynchronizer::default(),
            inputs: SyncInputs::new(),
            state: WizardState::default(),
            object_type,
            translator: Arc::new(Passthrough),
            submit_label: "Submit".to_string(),
            submitting_label: "Submitting…".to_string(),
            on_close: None,
            generation: 0,
            in_flight: None,
        })
    }

    pub fn with_rules(mut self, rules: Vec<DerivedFieldRule>) -> Self {
        self.sync = DefaultValueSynchronizer::new(rules);
        self
    }

    pub fn with_translator(mut self, translator: Arc<dyn Translator>) -> Self {
        self.translator = translator;
        self
    }

    /// Labels of the final button when idle and while the request is in flight.
    pub fn with_submit_labels(mut self, idle: &str, busy: &str) -> Self {
        self.submit_label = idle.to_string();
        self.submitting_label = busy.to_string();
        self
    }

    /// Called whenever the wizard closes itself (cancel or successful submit).
    pub fn on_close<F>(mut self, callback: F) -> Self
    where
        F: FnMut() + Send + 'static,
    {
        self.on_close = Some(Box::new(callback));
        self
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    pub fn state(&self) -> &WizardState {
        &self.state
    }

    pub fn is_open(&self) -> bool {
        self.state.is_open()
    }

    pub fn step_index(&self) -> usize {
        self.state.step_index()
    }

    pub fn is_submitting(&self) -> bool {
        self.state.is_submitting()
    }

    pub fn step_count(&self) -> usize {
        self.steps.len()
    }

    pub fn steps(&self) -> &[StepDefinition] {
        &self.steps
    }

    pub fn current_step(&self) -> &StepDefinition {
        &self.steps[self.step_index().min(self.steps.len() - 1)]
    }

    pub fn is_last_step(&self) -> bool {
        self.step_index() + 1 == self.steps.len()
    }

    pub fn form(&self) -> &FormState {
        self.store.state()
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn inputs(&self) -> &SyncInputs {
        &self.inputs
    }

    pub fn translator(&self) -> &dyn Translator {
        self.translator.as_ref()
    }

    pub fn heading(&self) -> String {
        self.translator.translate(&self.current_step().heading)
    }

    /// Whether the gate of step `index` currently holds.
    pub fn gate_open(&self, index: usize) -> bool {
        self.steps
            .get(index)
            .map_or(false, |step| step.gate_allows(self.store.state()))
    }

    pub fn can_advance(&self) -> bool {
        self.is_open() && !self.is_submitting() && self.gate_open(self.step_index())
    }

    // ------------------------------------------------------------------
    // Lifecycle
    // ------------------------------------------------------------------

    pub fn open(&mut self) {
        if self.is_open() {
            return;
        }
        self.dispatch(WizardIntent::Open);
        self.sync_defaults();
        tracing::info!(steps = self.steps.len(), "Wizard opened");
    }

    /// Host-initiated close. Any in-flight submission is abandoned and the
    /// close callback is not invoked.
    pub fn close(&mut self) {
        if !self.is_open() {
            return;
        }
        if let Some(in_flight) = self.in_flight.take() {
            in_flight.abandon();
            tracing::debug!(
                generation = in_flight.generation,
                "Closing with submission in flight, result will be ignored"
            );
        }
        self.dispatch(WizardIntent::Close);
        self.reset_form();
        tracing::info!("Wizard closed by host");
    }

    /// User cancel: reset everything and notify the host.
    pub fn cancel(&mut self) -> Result<(), WizardError> {
        if !self.is_open() {
            return Err(WizardError::Closed);
        }
        if self.is_submitting() {
            return Err(WizardError::SubmitInFlight);
        }
        self.dispatch(WizardIntent::Cancel);
        self.reset_form();
        tracing::info!("Wizard cancelled");
        self.notify_closed();
        Ok(())
    }

    // ------------------------------------------------------------------
    // Form edits
    // ------------------------------------------------------------------

    /// Edit a field and re-run the derived defaults. Ignored while closed or
    /// while a submission is in flight.
    pub fn set_field(&mut self, name: &str, value: FieldValue) -> bool {
        if !self.is_open() || self.is_submitting() {
            tracing::trace!(field = %name, "Ignoring edit");
            return false;
        }
        self.store.set_field(name, value);
        self.sync_defaults();
        true
    }

    /// Update an external synchronizer input, e.g. the organization list.
    pub fn set_input(&mut self, key: &str, value: FieldValue) {
        self.inputs.insert(key.to_string(), value);
        if self.is_open() && !self.is_submitting() {
            self.sync_defaults();
        }
    }

    pub fn sync_defaults(&mut self) -> usize {
        self.sync.sync(&mut self.store, &self.inputs)
    }

    // ------------------------------------------------------------------
    // Navigation
    // ------------------------------------------------------------------

    pub fn advance(&mut self) -> Navigation {
        if let Some(reason) = self.navigation_block() {
            return Navigation::Blocked(reason);
        }
        let from = self.step_index();
        let gate_open = self.gate_open(from);
        if !gate_open {
            tracing::debug!(step = from, "Advance blocked by gate");
            return Navigation::Blocked(BlockReason::GateClosed);
        }
        self.dispatch(WizardIntent::Advance {
            step_count: self.steps.len(),
            gate_open,
        });
        self.navigation_result(from)
    }

    pub fn retreat(&mut self) -> Navigation {
        if let Some(reason) = self.navigation_block() {
            return Navigation::Blocked(reason);
        }
        let from = self.step_index();
        self.dispatch(WizardIntent::Retreat);
        self.navigation_result(from)
    }

    fn navigation_block(&self) -> Option<BlockReason> {
        if !self.is_open() {
            Some(BlockReason::Closed)
        } else if self.is_submitting() {
            Some(BlockReason::Submitting)
        } else {
            None
        }
    }

    fn navigation_result(&self, from: usize) -> Navigation {
        let to = self.step_index();
        if to == from {
            Navigation::Stayed(to)
        } else {
            tracing::debug!(from, to, "Wizard step changed");
            Navigation::Moved { from, to }
        }
    }

    // ------------------------------------------------------------------
    // Submission
    // ------------------------------------------------------------------

    /// Mark a submission as in flight and snapshot the payload.
    pub fn begin_submit(&mut self) -> Result<SubmitTicket, WizardError> {
        if !self.is_open() {
            return Err(WizardError::Closed);
        }
        if self.is_submitting() {
            return Err(WizardError::SubmitInFlight);
        }
        if !self.is_last_step() {
            return Err(WizardError::NotOnFinalStep {
                step_index: self.step_index(),
            });
        }

        self.generation += 1;
        let alive = Arc::new(AtomicBool::new(true));
        self.in_flight = Some(InFlight {
            generation: self.generation,
            alive: Arc::clone(&alive),
        });
        self.dispatch(WizardIntent::SubmitStarted {
            step_count: self.steps.len(),
        });

        let request = SubmitRequest {
            object_type: self.object_type,
            fields: self.store.fields().clone(),
        };
        tracing::info!(generation = self.generation, "Submission started");
        Ok(SubmitTicket {
            generation: self.generation,
            request,
            alive,
        })
    }

    /// Apply the answer for `ticket`. Stale tickets change nothing.
    pub fn finish_submit(
        &mut self,
        ticket: &SubmitTicket,
        result: Result<(), SubmitError>,
    ) -> SubmitOutcome {
        let current = matches!(
            &self.in_flight,
            Some(in_flight) if in_flight.generation == ticket.generation
        );
        if !current || !ticket.is_live() {
            tracing::debug!(
                generation = ticket.generation,
                "Discarding submission result for closed wizard"
            );
            return SubmitOutcome::Discarded;
        }
        self.in_flight = None;

        match result {
            Ok(()) => {
                self.dispatch(WizardIntent::SubmitSucceeded);
                self.reset_form();
                tracing::info!(generation = ticket.generation, "Submission accepted");
                self.notify_closed();
                SubmitOutcome::Completed
            }
            Err(err) => {
                if let Some(errors) = err.field_errors() {
                    self.store.set_errors(errors.clone());
                }
                self.dispatch(WizardIntent::SubmitFailed);
                // Inputs may have changed while the request was in flight.
                self.sync_defaults();
                tracing::warn!(generation = ticket.generation, error = %err, "Submission rejected");
                SubmitOutcome::Rejected(err)
            }
        }
    }

    /// Issue a submission and wait for it. Equivalent to `begin_submit`,
    /// awaiting the submitter, then `finish_submit`.
    pub async fn submit(
        &mut self,
        submitter: &dyn Submitter,
    ) -> Result<SubmitOutcome, WizardError> {
        let ticket = self.begin_submit()?;
        let result = submitter.submit(ticket.request().clone()).await;
        Ok(self.finish_submit(&ticket, result))
    }

    // ------------------------------------------------------------------
    // View models
    // ------------------------------------------------------------------

    pub fn footer(&self) -> Footer {
        let t = self.translator.as_ref();
        let index = self.step_index();
        let submitting = self.is_submitting();

        let leading = if index == 0 {
            ButtonOptions::cancel(t)
        } else {
            ButtonOptions::back(t)
        }
        .merged(ButtonOverrides::disabled(submitting));

        let trailing = if self.is_last_step() {
            let submit = ButtonOptions::submit(t, &self.submit_label);
            if submitting {
                submit.merged(ButtonOverrides {
                    label: Some(t.translate(&self.submitting_label)),
                    disabled: Some(true),
                    busy: Some(true),
                    ..ButtonOverrides::default()
                })
            } else {
                submit
            }
        } else {
            ButtonOptions::next(t).merged(ButtonOverrides::disabled(!self.can_advance()))
        };

        Footer { leading, trailing }
    }

    pub fn progress(&self) -> ProgressIndicator {
        ProgressIndicator::build(
            &self.steps,
            self.step_index(),
            self.gate_open(0),
            self.translator.as_ref(),
        )
    }

    fn dispatch(&mut self, intent: WizardIntent) {
        crate::dispatch_mvi!(self, state, WizardReducer, intent);
    }

    fn reset_form(&mut self) {
        self.store.reset();
        self.sync.reset();
    }

    fn notify_closed(&mut self) {
        if let Some(callback) = self.on_close.as_mut() {
            callback();
        }
    }
}

impl<S: FormStore> Drop for StepFormWizard<S> {
    fn drop(&mut self) {
        if let Some(in_flight) = self.in_flight.take() {
            in_flight.abandon();
        }
    }
}
