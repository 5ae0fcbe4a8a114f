pub mod models;
pub mod money;
pub mod steps;
pub mod vehicle;

pub use models::{Backdrop, DayAvailability, GalleryImage, Location, LocationType, Schedule, TimeSlot};
pub use money::{dollars_to_cents, format_usd, Cents};
pub use steps::{BookingStep, STEP_ORDER};
pub use vehicle::{Partition, VehicleDetails, VehicleType};
