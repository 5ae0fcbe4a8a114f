pub mod app_config;
pub mod availability;
pub mod file_source;
pub mod gallery;
pub mod memory_source;

pub use app_config::Config;
pub use availability::{AvailabilitySource, StubAvailabilitySource};
pub use file_source::FileCatalogSource;
pub use gallery::{load_backdrop, GalleryError, GallerySource, StaticGallerySource};
pub use memory_source::InMemoryCatalogSource;
