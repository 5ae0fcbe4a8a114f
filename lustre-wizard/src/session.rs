use lustre_catalog::{CatalogEntry, CatalogSet, PricingEngine, Quote};
use lustre_shared::{BookingStep, Location, Schedule, VehicleDetails, VehicleType};
use serde::Serialize;
use tokio::sync::watch;

use crate::draft::{BookingDraft, DraftPatch};
use crate::sequencer::WizardState;

/// Immutable view of the session published to subscribers.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Snapshot {
    pub wizard: WizardState,
    pub draft: BookingDraft,
}

/// Owns the wizard state and the booking draft. There is one writer at a
/// time (the active step) and many readers; every mutation goes through the
/// session and publishes a fresh snapshot on the watch channel. Transitions
/// are synchronous, so no intermediate state is ever observable.
pub struct BookingSession {
    wizard: WizardState,
    draft: BookingDraft,
    tx: watch::Sender<Snapshot>,
}

impl BookingSession {
    pub fn new() -> Self {
        let wizard = WizardState::new();
        let draft = BookingDraft::new();
        let (tx, _) = watch::channel(Snapshot {
            wizard: wizard.clone(),
            draft: draft.clone(),
        });
        Self { wizard, draft, tx }
    }

    pub fn subscribe(&self) -> watch::Receiver<Snapshot> {
        self.tx.subscribe()
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            wizard: self.wizard.clone(),
            draft: self.draft.clone(),
        }
    }

    pub fn wizard(&self) -> &WizardState {
        &self.wizard
    }

    pub fn draft(&self) -> &BookingDraft {
        &self.draft
    }

    // Navigation

    pub fn advance(&mut self) {
        self.wizard.advance();
        self.publish();
    }

    pub fn retreat(&mut self) {
        self.wizard.retreat();
        self.publish();
    }

    pub fn go_to(&mut self, step: BookingStep) {
        self.wizard.go_to(step);
        self.publish();
    }

    pub fn set_loading(&mut self, loading: bool) {
        self.wizard.set_loading(loading);
        self.publish();
    }

    pub fn push_error(&mut self, message: impl Into<String>) {
        self.wizard.push_error(message);
        self.publish();
    }

    // Draft mutation

    pub fn set_vehicle(&mut self, vehicle: VehicleType) {
        self.draft.set_vehicle(vehicle);
        self.publish();
    }

    pub fn set_vehicle_details(&mut self, patch: VehicleDetails) {
        self.draft.set_vehicle_details(patch);
        self.publish();
    }

    pub fn set_location(&mut self, patch: Location) {
        self.draft.set_location(patch);
        self.publish();
    }

    pub fn set_service_tier(&mut self, tier_id: impl Into<String>) {
        self.draft.set_service_tier(tier_id);
        self.publish();
    }

    pub fn toggle_addon(&mut self, addon_id: &str) {
        self.draft.toggle_addon(addon_id);
        self.publish();
    }

    pub fn set_schedule(&mut self, patch: Schedule) {
        self.draft.set_schedule(patch);
        self.publish();
    }

    pub fn set_payment_method(&mut self, method: impl Into<String>) {
        self.draft.set_payment_method(method);
        self.publish();
    }

    pub fn apply(&mut self, patch: DraftPatch) {
        self.draft.apply(patch);
        self.publish();
    }

    /// Restore the all-empty draft and the initial wizard state.
    pub fn reset_booking(&mut self) {
        tracing::info!(draft = %self.draft.id, "resetting booking");
        self.draft = BookingDraft::new();
        self.wizard = WizardState::new();
        self.publish();
    }

    /// Price the current draft against resolved catalogs. Recomputed on
    /// every read; a tier or add-on id missing from the catalogs prices 0.
    pub fn quote(
        &self,
        engine: &PricingEngine,
        tiers: &[CatalogEntry],
        addons: &CatalogSet,
    ) -> Quote {
        let tier = self
            .draft
            .service_tier
            .as_deref()
            .and_then(|id| tiers.iter().find(|entry| entry.id == id));
        engine.quote(tier, self.draft.selected_addon(), addons)
    }

    fn publish(&self) {
        self.tx.send_replace(self.snapshot());
    }
}

impl Default for BookingSession {
    fn default() -> Self {
        Self::new()
    }
}
