use serde::{Deserialize, Serialize};

/// The six wizard steps, in booking order
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum BookingStep {
    VehicleSelection,
    Location,
    ServiceTier,
    Addons,
    Schedule,
    Payment,
}

/// Canonical step order; `completed_steps` is always a prefix of this.
pub const STEP_ORDER: [BookingStep; 6] = [
    BookingStep::VehicleSelection,
    BookingStep::Location,
    BookingStep::ServiceTier,
    BookingStep::Addons,
    BookingStep::Schedule,
    BookingStep::Payment,
];

impl BookingStep {
    /// Position within the canonical order.
    pub fn index(&self) -> usize {
        STEP_ORDER
            .iter()
            .position(|s| s == self)
            .unwrap_or_default()
    }

    pub fn next(&self) -> Option<BookingStep> {
        STEP_ORDER.get(self.index() + 1).copied()
    }

    pub fn prev(&self) -> Option<BookingStep> {
        self.index().checked_sub(1).map(|i| STEP_ORDER[i])
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            BookingStep::VehicleSelection => "vehicle-selection",
            BookingStep::Location => "location",
            BookingStep::ServiceTier => "service-tier",
            BookingStep::Addons => "addons",
            BookingStep::Schedule => "schedule",
            BookingStep::Payment => "payment",
        }
    }
}

impl std::fmt::Display for BookingStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
