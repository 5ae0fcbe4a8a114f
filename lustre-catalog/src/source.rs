use async_trait::async_trait;
use lustre_shared::Partition;
use serde::{Deserialize, Serialize};

/// Add-on categories. Service tiers are category-less.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum AddonCategory {
    Windows,
    Wheels,
    Trim,
    Engine,
}

impl AddonCategory {
    pub const ALL: [AddonCategory; 4] = [
        AddonCategory::Windows,
        AddonCategory::Wheels,
        AddonCategory::Trim,
        AddonCategory::Engine,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AddonCategory::Windows => "windows",
            AddonCategory::Wheels => "wheels",
            AddonCategory::Trim => "trim",
            AddonCategory::Engine => "engine",
        }
    }
}

impl std::fmt::Display for AddonCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Resource kinds addressable behind a (partition, category) pair.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum ResourceKind {
    AddonDefinitions,
    FeatureDictionary,
    FlatFeatures,
}

impl ResourceKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceKind::AddonDefinitions => "addon-definitions",
            ResourceKind::FeatureDictionary => "feature-dictionary",
            ResourceKind::FlatFeatures => "flat-features",
        }
    }
}

/// One rich-shape definition, keyed by its display name in the source.
/// Used for both add-ons and service tiers.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ItemDefinition {
    /// Decimal dollars; absent means the item prices as free.
    pub cost: Option<f64>,
    #[serde(default)]
    pub features: Vec<String>,
    pub popular: Option<bool>,
    pub description: Option<String>,
}

/// A feature-dictionary record. `explanation`, `features` and `duration`
/// only matter to the expandable detail view; catalog cards read `name`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FeatureInfo {
    pub name: String,
    pub description: Option<String>,
    pub explanation: Option<String>,
    #[serde(default)]
    pub features: Vec<String>,
    pub duration: Option<u32>,
}

/// A flat-shape (fallback) record: no pricing, at most one feature name.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct FlatFeature {
    pub name: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("catalog resource missing: {partition}/{}/{}", .category.map(|c| c.as_str()).unwrap_or("tiers"), .kind.as_str())]
    Missing {
        partition: Partition,
        category: Option<AddonCategory>,
        kind: ResourceKind,
    },

    #[error("catalog resource unreadable: {0}")]
    Io(String),

    #[error("catalog resource malformed: {0}")]
    Malformed(String),
}

/// Data-access seam for catalog resources. Implementations return entries in
/// source order; the flat shape's "first key is popular" rule depends on it.
/// Fallback ordering (rich, then flat) is the resolver's job, not the source's.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    async fn addon_definitions(
        &self,
        partition: Partition,
        category: AddonCategory,
    ) -> Result<Vec<(String, ItemDefinition)>, SourceError>;

    async fn feature_dictionary(
        &self,
        partition: Partition,
        category: AddonCategory,
    ) -> Result<Vec<(String, FeatureInfo)>, SourceError>;

    async fn flat_features(
        &self,
        partition: Partition,
        category: AddonCategory,
    ) -> Result<Vec<(String, FlatFeature)>, SourceError>;

    async fn service_tiers(
        &self,
        partition: Partition,
    ) -> Result<Vec<(String, ItemDefinition)>, SourceError>;

    async fn tier_feature_dictionary(
        &self,
        partition: Partition,
    ) -> Result<Vec<(String, FeatureInfo)>, SourceError>;
}
