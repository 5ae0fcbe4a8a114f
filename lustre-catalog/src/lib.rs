pub mod cache;
pub mod derive;
pub mod entry;
pub mod pricing;
pub mod resolver;
pub mod service_area;
pub mod source;

pub use entry::{CatalogEntry, FeatureDetail};
pub use pricing::{AreaTerms, CatalogSet, PricingEngine, Quote, TAX_RATE};
pub use resolver::{CatalogError, CatalogResolver, ResolvedCatalog};
pub use service_area::{ServiceArea, ServiceAreaError, ServiceAreaPricingResolver};
pub use source::{
    AddonCategory, CatalogSource, FeatureInfo, FlatFeature, ItemDefinition, ResourceKind,
    SourceError,
};
