pub mod gallery;
pub mod location;
pub mod schedule;

pub use gallery::{Backdrop, GalleryImage};
pub use location::{Location, LocationType};
pub use schedule::{DayAvailability, Schedule, TimeSlot};
