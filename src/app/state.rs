use crate::models::request::OptimizationRequest;
use crate::models::result::OptimizationResult;

/// The four mutually exclusive views. The machine is cyclic: reset is
/// always available and returns to `Hero`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AppStep {
    #[default]
    Hero,
    Upload,
    Processing,
    Results,
}

/// Holds the whole session: current step, the submission in flight, at
/// most one result, and the error banner for the Upload view.
///
/// Invariant: `Results` implies a stored result; a new submission fully
/// replaces any previous result.
#[derive(Debug, Default)]
pub struct App {
    step: AppStep,
    pending: Option<OptimizationRequest>,
    result: Option<OptimizationResult>,
    error: Option<String>,
}

impl App {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn step(&self) -> AppStep {
        self.step
    }

    pub fn result(&self) -> Option<&OptimizationResult> {
        self.result.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// `Hero -> Upload`, user-initiated.
    pub fn start(&mut self) {
        debug_assert_eq!(self.step, AppStep::Hero);
        self.step = AppStep::Upload;
    }

    /// `Upload -> Processing`. Only a valid `OptimizationRequest` can get
    /// here, so the submit gate lives in the type, not in this method.
    pub fn submit(&mut self, request: OptimizationRequest) {
        debug_assert_eq!(self.step, AppStep::Upload);
        self.pending = Some(request);
        self.result = None;
        self.error = None;
        self.step = AppStep::Processing;
    }

    /// Hands the in-flight submission to the gateway call.
    pub fn take_pending(&mut self) -> Option<OptimizationRequest> {
        debug_assert_eq!(self.step, AppStep::Processing);
        self.pending.take()
    }

    /// `Processing -> Results`, gateway success.
    pub fn complete(&mut self, result: OptimizationResult) {
        debug_assert_eq!(self.step, AppStep::Processing);
        self.result = Some(result);
        self.error = None;
        self.step = AppStep::Results;
    }

    /// `Processing -> Upload`, gateway failure. Any partial result is
    /// discarded; only the banner message survives.
    pub fn fail(&mut self, message: impl Into<String>) {
        debug_assert_eq!(self.step, AppStep::Processing);
        self.pending = None;
        self.result = None;
        self.error = Some(message.into());
        self.step = AppStep::Upload;
    }

    /// Any state `-> Hero`: clears the result and the error.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
