use chrono::{DateTime, Utc};
use lustre_shared::{Location, Schedule, VehicleDetails, VehicleType};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The in-progress booking. Created all-empty at wizard start, mutated only
/// through the named setters, discarded on exit or completion. Setters do a
/// shallow merge and never validate across fields: a `color` left over after
/// switching to a boat is tolerated.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BookingDraft {
    pub id: Uuid,
    pub vehicle: Option<VehicleType>,
    pub vehicle_details: VehicleDetails,
    pub location: Location,
    /// Selected service tier id.
    pub service_tier: Option<String>,
    /// At most one add-on id at any time. This mirrors the shipped
    /// single-select toggle; it is product behavior, not a capacity limit.
    pub addons: Vec<String>,
    pub schedule: Schedule,
    pub payment_method: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Bulk update shape; only present fields are applied.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DraftPatch {
    pub vehicle: Option<VehicleType>,
    pub vehicle_details: Option<VehicleDetails>,
    pub location: Option<Location>,
    pub service_tier: Option<String>,
    /// Replaces the selection outright; only the first id is kept and an
    /// empty list clears it.
    pub addons: Option<Vec<String>>,
    pub schedule: Option<Schedule>,
    pub payment_method: Option<String>,
}

impl BookingDraft {
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            vehicle: None,
            vehicle_details: VehicleDetails::default(),
            location: Location::default(),
            service_tier: None,
            addons: Vec::new(),
            schedule: Schedule::default(),
            payment_method: None,
            created_at: Utc::now(),
        }
    }

    pub fn set_vehicle(&mut self, vehicle: VehicleType) {
        self.vehicle = Some(vehicle);
    }

    pub fn set_vehicle_details(&mut self, patch: VehicleDetails) {
        self.vehicle_details.merge(patch);
    }

    pub fn set_location(&mut self, patch: Location) {
        self.location.merge(patch);
    }

    pub fn set_service_tier(&mut self, tier_id: impl Into<String>) {
        self.service_tier = Some(tier_id.into());
    }

    /// Single-slot toggle: a new id replaces the current selection;
    /// re-selecting the current id clears it.
    pub fn toggle_addon(&mut self, addon_id: &str) {
        if self.addons.first().map(String::as_str) == Some(addon_id) {
            self.addons.clear();
        } else {
            self.addons = vec![addon_id.to_string()];
        }
    }

    pub fn selected_addon(&self) -> Option<&str> {
        self.addons.first().map(String::as_str)
    }

    pub fn set_schedule(&mut self, patch: Schedule) {
        self.schedule.merge(patch);
    }

    pub fn set_payment_method(&mut self, method: impl Into<String>) {
        self.payment_method = Some(method.into());
    }

    pub fn apply(&mut self, patch: DraftPatch) {
        if let Some(vehicle) = patch.vehicle {
            self.vehicle = Some(vehicle);
        }
        if let Some(details) = patch.vehicle_details {
            self.vehicle_details.merge(details);
        }
        if let Some(location) = patch.location {
            self.location.merge(location);
        }
        if let Some(tier) = patch.service_tier {
            self.service_tier = Some(tier);
        }
        if let Some(addons) = patch.addons {
            self.addons = addons.into_iter().take(1).collect();
        }
        if let Some(schedule) = patch.schedule {
            self.schedule.merge(schedule);
        }
        if let Some(method) = patch.payment_method {
            self.payment_method = Some(method);
        }
    }
}

impl Default for BookingDraft {
    fn default() -> Self {
        Self::new()
    }
}
