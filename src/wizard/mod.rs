//! The wizard step state machine and generation orchestration.
//!
//! All UI-visible state lives in one [`Wizard`] aggregate with pure
//! transition methods, decoupled from rendering. Execution is
//! single-threaded and event-driven; the only suspension point is the
//! network call to the solver, driven by [`generate`].
//!
//! Two guards close correctness gaps around that suspension point:
//! requests are serialized (a second generate while one is pending is
//! ignored), and each request carries a monotonically increasing token so a
//! late response is applied only while its token is still current.

use std::time::{Duration, Instant};

use tracing::{debug, error, info, warn};

use crate::models::input::{BreakPeriod, Course, Preferences};
use crate::services::carousel::ScheduleCarousel;
use crate::services::crn::{crn_entries, CrnEntry};
use crate::services::request_builder::{self, ValidationError};
use crate::services::response_parser::{self, MalformedResponse, SolverOutcome};
use crate::solver::{SolverClient, SolverError};
use crate::api::{ScheduleRequest, SolverResponse};

/// How long the "copied" indicator stays visible after a CRN copy.
pub const COPY_INDICATOR_TTL: Duration = Duration::from_secs(2);

/// The wizard's four steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardStep {
    Courses,
    Breaks,
    Preferences,
    Results,
}

/// Everything that can go wrong between pressing Generate and seeing
/// results. Every variant leaves the wizard on the Preferences step so the
/// inputs can be adjusted and retried.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GenerateError {
    /// Input problem, reported inline; blocks the send entirely.
    #[error(transparent)]
    Validation(#[from] ValidationError),
    /// Transport failure; generic and retryable.
    #[error(transparent)]
    Network(#[from] SolverError),
    /// The solver found zero feasible schedules.
    #[error("no feasible schedule; try removing a break or a course")]
    NoFeasible,
    /// The search space was too large to finish.
    #[error("the search took too long; try narrowing your courses or breaks")]
    Timeout,
    /// The solver broke the wire contract.
    #[error(transparent)]
    Malformed(#[from] MalformedResponse),
}

/// A request that has been frozen and tagged, ready to submit.
#[derive(Debug, Clone, PartialEq)]
pub struct PendingGeneration {
    pub token: u64,
    pub request: ScheduleRequest,
}

/// The whole wizard state: step, inputs, generated results, and the flags
/// around an in-flight generation.
#[derive(Debug)]
pub struct Wizard {
    step: WizardStep,
    pub courses: Vec<Course>,
    pub breaks: Vec<BreakPeriod>,
    pub preferences: Preferences,
    carousel: ScheduleCarousel,
    error: Option<GenerateError>,
    next_token: u64,
    pending: Option<u64>,
    copied_at: Option<Instant>,
}

impl Wizard {
    /// Fresh wizard on the Courses step with default preferences.
    pub fn new() -> Self {
        Self {
            step: WizardStep::Courses,
            courses: Vec::new(),
            breaks: Vec::new(),
            preferences: Preferences::default(),
            carousel: ScheduleCarousel::new(),
            error: None,
            next_token: 0,
            pending: None,
            copied_at: None,
        }
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    /// Whether a generation request is outstanding.
    pub fn is_loading(&self) -> bool {
        self.pending.is_some()
    }

    /// The failure from the last generation attempt, if any.
    pub fn error(&self) -> Option<&GenerateError> {
        self.error.as_ref()
    }

    pub fn carousel(&self) -> &ScheduleCarousel {
        &self.carousel
    }

    pub fn carousel_mut(&mut self) -> &mut ScheduleCarousel {
        &mut self.carousel
    }

    /// CRN listing for the displayed schedule.
    pub fn current_crns(&self) -> Vec<CrnEntry> {
        crn_entries(self.carousel.current())
    }

    /// Explicit Next. Only Courses -> Breaks -> Preferences; reaching
    /// Results requires a successful generation. Returns whether the step
    /// changed.
    pub fn advance(&mut self) -> bool {
        let next = match self.step {
            WizardStep::Courses => WizardStep::Breaks,
            WizardStep::Breaks => WizardStep::Preferences,
            WizardStep::Preferences | WizardStep::Results => return false,
        };
        self.cancel_pending("navigated forward");
        self.step = next;
        true
    }

    /// Explicit Previous. Only Preferences -> Breaks -> Courses; leaving
    /// Results goes through [`Wizard::restart`]. Returns whether the step
    /// changed.
    pub fn back(&mut self) -> bool {
        let previous = match self.step {
            WizardStep::Breaks => WizardStep::Courses,
            WizardStep::Preferences => WizardStep::Breaks,
            WizardStep::Courses | WizardStep::Results => return false,
        };
        self.cancel_pending("navigated back");
        self.step = previous;
        true
    }

    /// Restart from the Results step: discard generated schedules, reset
    /// the carousel, clear error flags, and return to Courses. Collected
    /// inputs are kept. Returns whether the restart happened.
    pub fn restart(&mut self) -> bool {
        if self.step != WizardStep::Results {
            return false;
        }
        self.carousel.clear();
        self.error = None;
        self.pending = None;
        self.copied_at = None;
        self.step = WizardStep::Courses;
        true
    }

    /// Freeze the inputs into a tagged request and mark it pending.
    ///
    /// Returns `Ok(None)` when the attempt is ignored: either a request is
    /// already outstanding (requests are serialized) or the wizard is not
    /// on the Preferences step. Validation failures are recorded on the
    /// wizard and returned.
    pub fn begin_generation(&mut self) -> Result<Option<PendingGeneration>, GenerateError> {
        if self.step != WizardStep::Preferences {
            debug!(step = ?self.step, "generate ignored outside the Preferences step");
            return Ok(None);
        }
        if self.pending.is_some() {
            debug!("generate ignored while a request is already pending");
            return Ok(None);
        }

        // Previous outcome flags are cleared before the call begins.
        self.error = None;

        let request = match request_builder::build(&self.courses, &self.breaks, &self.preferences)
        {
            Ok(request) => request,
            Err(validation) => {
                let failure = GenerateError::Validation(validation);
                self.error = Some(failure.clone());
                return Err(failure);
            }
        };

        let token = self.next_token;
        self.next_token += 1;
        self.pending = Some(token);
        info!(token, courses = request.courses.len(), "generation started");
        Ok(Some(PendingGeneration { token, request }))
    }

    /// Apply a solver result to the wizard.
    ///
    /// A result whose token is no longer current (superseded, cancelled by
    /// navigation, or applied after restart) is discarded. The three
    /// outcome classes map to mutually exclusive states: success lands on
    /// Results with fresh schedules, sentinels and failures stay on
    /// Preferences with exactly one error flag set.
    pub fn apply_result(&mut self, token: u64, result: Result<SolverResponse, SolverError>) {
        if self.pending != Some(token) {
            warn!(token, "discarding stale solver response");
            return;
        }
        self.pending = None;

        let outcome = result
            .map_err(GenerateError::from)
            .and_then(|response| response_parser::parse(&response).map_err(GenerateError::from));

        match outcome {
            Ok(SolverOutcome::Schedules(sets)) => {
                info!(token, count = sets.len(), "generation succeeded");
                self.carousel.set_schedules(sets);
                self.error = None;
                self.step = WizardStep::Results;
            }
            Ok(SolverOutcome::NoFeasible) => self.fail(token, GenerateError::NoFeasible),
            Ok(SolverOutcome::Timeout) => self.fail(token, GenerateError::Timeout),
            Err(failure) => {
                if matches!(failure, GenerateError::Malformed(_)) {
                    error!(token, %failure, "solver response violated the wire contract");
                }
                self.fail(token, failure);
            }
        }
    }

    fn fail(&mut self, token: u64, failure: GenerateError) {
        info!(token, %failure, "generation failed");
        self.error = Some(failure);
        self.step = WizardStep::Preferences;
    }

    fn cancel_pending(&mut self, reason: &str) {
        if self.pending.take().is_some() {
            debug!(reason, "cancelled in-flight generation");
        }
    }

    /// Record a CRN copy action at `now`. A second copy before the
    /// indicator expires resets the timer rather than stacking expirations.
    pub fn mark_crn_copied(&mut self, now: Instant) {
        self.copied_at = Some(now);
    }

    /// Whether the "copied" indicator is still visible at `now`.
    pub fn crn_copied_visible(&self, now: Instant) -> bool {
        self.copied_at
            .map(|at| now.duration_since(at) < COPY_INDICATOR_TTL)
            .unwrap_or(false)
    }
}

impl Default for Wizard {
    fn default() -> Self {
        Self::new()
    }
}

/// Run one generation attempt end to end: freeze the request, await the
/// solver, apply the outcome. Validation failures and ignored attempts
/// return without touching the network.
pub async fn generate(wizard: &mut Wizard, client: &dyn SolverClient) {
    let pending = match wizard.begin_generation() {
        Ok(Some(pending)) => pending,
        Ok(None) | Err(_) => return,
    };
    let result = client.submit(&pending.request).await;
    wizard.apply_result(pending.token, result);
}
