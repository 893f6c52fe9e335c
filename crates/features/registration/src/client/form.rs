use super::gateway::{Acknowledgement, GatewayError, RegistrationGateway};
use super::submission::{LogScript, SubmissionOutcome, SubmissionState};
use crate::schema::{ValidationError, validate_draft, validate_step, validate_value};
use recruit_domain::config::FormConfig;
use recruit_domain::registration::{Field, RegistrationDraft};
use recruit_domain::steps::{STEPS, StepDefinition, step_of};
use std::borrow::Cow;
use std::collections::BTreeMap;
use std::time::Duration;
use tokio::sync::watch;

#[recruit_derive::recruit_error]
pub enum FormError {
    /// A submission is already in flight; the request was dropped.
    #[error("Submission already in progress{}", format_context(.context))]
    SubmissionInFlight { context: Option<Cow<'static, str>> },
    /// The draft still breaks its constraints.
    #[error("Draft is invalid{}: {} field error(s)", format_context(.context), error_count(.errors))]
    Invalid { errors: Vec<ValidationError>, context: Option<Cow<'static, str>> },
}

const fn error_count(errors: &[ValidationError]) -> usize {
    errors.len()
}

/// Result of pressing "next" (or "submit" on the last step).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Advance {
    /// The current step failed validation; nothing moved.
    Blocked { errors: Vec<ValidationError> },
    /// Moved to the step at `to`.
    Moved { to: usize },
    /// The last step was valid and the draft was submitted.
    Submitted(SubmissionOutcome),
}

/// Which input is being typed into, for the caret overlay.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CursorState {
    pub active: Option<Field>,
    /// Caret position in characters.
    pub position: usize,
}

/// The multi-step join form.
///
/// Holds the draft, the current step, per-field errors and the submission status. The
/// status is published on a watch channel so a view can redraw the scripted log as it
/// grows; everything else is read through accessors.
#[derive(Debug)]
pub struct JoinForm<G> {
    gateway: G,
    script: LogScript,
    reset_delay: Duration,
    draft: RegistrationDraft,
    step: usize,
    errors: BTreeMap<Field, ValidationError>,
    cursor: CursorState,
    status: watch::Sender<SubmissionState>,
}

impl<G: RegistrationGateway> JoinForm<G> {
    pub fn new(gateway: G) -> Self {
        Self::with_config(gateway, &FormConfig::default())
    }

    pub fn with_config(gateway: G, config: &FormConfig) -> Self {
        Self {
            gateway,
            script: LogScript::from_config(config),
            reset_delay: Duration::from_millis(config.reset_delay_ms),
            draft: RegistrationDraft::default(),
            step: 0,
            errors: BTreeMap::new(),
            cursor: CursorState::default(),
            status: watch::Sender::new(SubmissionState::Idle),
        }
    }

    /// Replaces the scripted progress log.
    #[must_use]
    pub fn script(mut self, script: LogScript) -> Self {
        self.script = script;
        self
    }

    #[must_use]
    pub const fn reset_delay(mut self, delay: Duration) -> Self {
        self.reset_delay = delay;
        self
    }

    #[must_use]
    pub const fn draft(&self) -> &RegistrationDraft {
        &self.draft
    }

    #[must_use]
    pub const fn current_step(&self) -> usize {
        self.step
    }

    #[must_use]
    pub fn step_definition(&self) -> &'static StepDefinition {
        &STEPS[self.step]
    }

    #[must_use]
    pub const fn is_last_step(&self) -> bool {
        self.step + 1 == STEPS.len()
    }

    #[must_use]
    pub fn error(&self, field: Field) -> Option<&ValidationError> {
        self.errors.get(&field)
    }

    pub fn errors(&self) -> impl Iterator<Item = &ValidationError> {
        self.errors.values()
    }

    #[must_use]
    pub const fn cursor(&self) -> CursorState {
        self.cursor
    }

    /// Snapshot of the submission status.
    #[must_use]
    pub fn submission(&self) -> SubmissionState {
        self.status.borrow().clone()
    }

    /// Follows status changes, including each new log line.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<SubmissionState> {
        self.status.subscribe()
    }

    /// Records typed input. A value that now satisfies its constraints clears that
    /// field's error; nothing is validated otherwise until blur or advance.
    pub fn set_field(&mut self, field: Field, value: impl Into<String>) {
        self.draft.set(field, value);
        self.cursor = CursorState { active: Some(field), position: self.draft.get(field).chars().count() };
        if self.errors.contains_key(&field) && validate_value(field, self.draft.get(field)).is_ok() {
            self.errors.remove(&field);
        }
    }

    /// Validates `field` when focus leaves it.
    pub fn blur(&mut self, field: Field) {
        if self.cursor.active == Some(field) {
            self.cursor = CursorState::default();
        }
        match validate_value(field, self.draft.get(field)) {
            Ok(()) => {
                self.errors.remove(&field);
            },
            Err(err) => {
                self.errors.insert(field, err);
            },
        }
    }

    /// Validates the current step and moves forward; on the last step, submits.
    ///
    /// # Errors
    /// Returns [`FormError::SubmissionInFlight`] while a submission is running.
    pub async fn advance(&mut self) -> Result<Advance, FormError> {
        self.ensure_idle()?;

        let errors = validate_step(&self.draft, self.step);
        self.replace_step_errors(&errors);
        if !errors.is_empty() {
            self.focus_first(&errors);
            return Ok(Advance::Blocked { errors });
        }

        if !self.is_last_step() {
            self.step += 1;
            self.cursor = CursorState::default();
            return Ok(Advance::Moved { to: self.step });
        }

        match self.submit().await {
            Ok(outcome) => Ok(Advance::Submitted(outcome)),
            Err(FormError::Invalid { errors, .. }) => Ok(Advance::Blocked { errors }),
            Err(err) => Err(err),
        }
    }

    /// Steps back; a no-op on the first step. Errors are kept.
    ///
    /// # Errors
    /// Returns [`FormError::SubmissionInFlight`] while a submission is running.
    pub fn retreat(&mut self) -> Result<usize, FormError> {
        self.ensure_idle()?;
        self.step = self.step.saturating_sub(1);
        self.cursor = CursorState::default();
        Ok(self.step)
    }

    /// Validates the whole draft and submits it once.
    ///
    /// The scripted log and the network request run concurrently; the outcome comes
    /// solely from the request. On success the form waits for the reset delay, then
    /// clears the draft and returns to the first step. On failure the draft is kept so
    /// the user can retry.
    ///
    /// # Errors
    /// * [`FormError::SubmissionInFlight`] while another submission is running.
    /// * [`FormError::Invalid`] when any field fails; the form jumps to the first step
    ///   with an error.
    pub async fn submit(&mut self) -> Result<SubmissionOutcome, FormError> {
        self.ensure_idle()?;

        if let Err(errors) = validate_draft(&self.draft) {
            self.errors = errors.iter().map(|err| (err.field, err.clone())).collect();
            if let Some(step) = errors.first().and_then(|err| step_of(err.field)) {
                self.step = step;
            }
            self.focus_first(&errors);
            return Err(FormError::Invalid { errors, context: None });
        }

        let outcome = {
            let _in_flight = InFlight::start(&self.status);
            tracing::debug!("Submitting registration draft");

            let (_, result) = tokio::join!(
                self.script.play(&self.status),
                self.gateway.register(&self.draft)
            );
            self.settle(result)
        };

        if matches!(outcome, SubmissionOutcome::Success { .. }) {
            tokio::time::sleep(self.reset_delay).await;
            self.clear_draft();
        }
        Ok(outcome)
    }

    fn settle(&self, result: Result<Acknowledgement, GatewayError>) -> SubmissionOutcome {
        match result {
            Ok(ack) => {
                tracing::info!("Registration accepted");
                let message = ack.message;
                self.status.send_modify(|state| {
                    let log = state.take_log();
                    *state = SubmissionState::Success { message: message.clone(), log };
                });
                SubmissionOutcome::Success { message }
            },
            Err(err) => {
                tracing::warn!(error = %err, "Registration submission failed");
                let message = err.user_message().into_owned();
                self.status.send_modify(|state| {
                    let mut log = state.take_log();
                    log.push(format!("[ERROR] {message}"));
                    *state = SubmissionState::Failed { message: message.clone(), log };
                });
                SubmissionOutcome::Failed { message }
            },
        }
    }

    /// Discards the draft and any result, back to an idle first step.
    ///
    /// # Errors
    /// Returns [`FormError::SubmissionInFlight`] while a submission is running.
    pub fn reset(&mut self) -> Result<(), FormError> {
        self.ensure_idle()?;
        self.clear_draft();
        self.status.send_replace(SubmissionState::Idle);
        Ok(())
    }

    fn ensure_idle(&self) -> Result<(), FormError> {
        if self.status.borrow().is_in_progress() {
            return Err(FormError::SubmissionInFlight { context: None });
        }
        Ok(())
    }

    fn clear_draft(&mut self) {
        self.draft = RegistrationDraft::default();
        self.errors.clear();
        self.step = 0;
        self.cursor = CursorState::default();
    }

    /// Errors of the current step are replaced wholesale; other steps keep theirs.
    fn replace_step_errors(&mut self, errors: &[ValidationError]) {
        let fields = STEPS[self.step].fields;
        self.errors.retain(|field, _| !fields.contains(field));
        self.errors.extend(errors.iter().map(|err| (err.field, err.clone())));
    }

    fn focus_first(&mut self, errors: &[ValidationError]) {
        if let Some(first) = errors.first() {
            self.cursor = CursorState {
                active: Some(first.field),
                position: self.draft.get(first.field).chars().count(),
            };
        }
    }
}

/// Marks a submission in flight; a submission dropped before it settles goes back to idle.
struct InFlight<'a>(&'a watch::Sender<SubmissionState>);

impl<'a> InFlight<'a> {
    fn start(status: &'a watch::Sender<SubmissionState>) -> Self {
        status.send_replace(SubmissionState::InProgress { log: Vec::new() });
        Self(status)
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.0.send_if_modified(|state| {
            if state.is_in_progress() {
                *state = SubmissionState::Idle;
                true
            } else {
                false
            }
        });
    }
}
