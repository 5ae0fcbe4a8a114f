pub mod draft;
pub mod fetch;
pub mod sequencer;
pub mod session;

pub use draft::{BookingDraft, DraftPatch};
pub use fetch::{load_addon_catalog_set, CancelFlag};
pub use sequencer::WizardState;
pub use session::{BookingSession, Snapshot};
