use lustre_shared::{BookingStep, STEP_ORDER};
use serde::{Deserialize, Serialize};

/// Wizard navigation state. `completed_steps` is always exactly the prefix
/// of the canonical order strictly before `current_step`; jumping forward
/// marks the skipped steps completed without validating their data.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WizardState {
    pub current_step: BookingStep,
    pub completed_steps: Vec<BookingStep>,
    pub errors: Vec<String>,
    pub is_loading: bool,
}

impl WizardState {
    pub fn new() -> Self {
        Self {
            current_step: BookingStep::VehicleSelection,
            completed_steps: Vec::new(),
            errors: Vec::new(),
            is_loading: false,
        }
    }

    /// Move to the next step; no-op at `payment`.
    pub fn advance(&mut self) {
        if let Some(next) = self.current_step.next() {
            self.transition_to(next);
        }
    }

    /// Move to the previous step; no-op at `vehicle-selection`.
    pub fn retreat(&mut self) {
        if let Some(prev) = self.current_step.prev() {
            self.transition_to(prev);
        }
    }

    /// Jump directly to any step.
    pub fn go_to(&mut self, step: BookingStep) {
        self.transition_to(step);
    }

    pub fn push_error(&mut self, message: impl Into<String>) {
        self.errors.push(message.into());
    }

    pub fn set_loading(&mut self, loading: bool) {
        self.is_loading = loading;
    }

    fn transition_to(&mut self, step: BookingStep) {
        self.current_step = step;
        self.completed_steps = STEP_ORDER[..step.index()].to_vec();
        self.errors.clear();
    }
}

impl Default for WizardState {
    fn default() -> Self {
        Self::new()
    }
}
