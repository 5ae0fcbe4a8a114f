use lustre_shared::Cents;
use serde::{Deserialize, Serialize};

/// One priced card in a resolved catalog — a service tier or an add-on.
/// Built per resolution call and never mutated, only replaced on refetch.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CatalogEntry {
    /// Slug derived from the display name; unique within one
    /// (vehicle type, category) resolution.
    pub id: String,
    pub name: String,
    pub price_cents: Cents,
    pub description: String,
    /// Resolved feature display names.
    pub features: Vec<String>,
    /// Raw feature ids, kept for lazy detail lookup.
    pub feature_ids: Vec<String>,
    pub popular: bool,
}

/// Expanded feature information shown in the detail panel. Loaded lazily;
/// a miss means the panel omits the extra sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FeatureDetail {
    pub name: String,
    pub description: Option<String>,
    pub explanation: Option<String>,
    pub features: Vec<String>,
    pub duration_minutes: Option<u32>,
}
