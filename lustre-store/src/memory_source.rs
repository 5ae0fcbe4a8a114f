use async_trait::async_trait;
use lustre_catalog::{
    AddonCategory, CatalogSource, FeatureInfo, FlatFeature, ItemDefinition, ResourceKind,
    SourceError,
};
use lustre_shared::Partition;
use std::collections::HashMap;

/// In-memory catalog source for tests and local development. Resources not
/// registered behave exactly like missing files.
#[derive(Default)]
pub struct InMemoryCatalogSource {
    definitions: HashMap<(Partition, AddonCategory), Vec<(String, ItemDefinition)>>,
    dictionaries: HashMap<(Partition, AddonCategory), Vec<(String, FeatureInfo)>>,
    flats: HashMap<(Partition, AddonCategory), Vec<(String, FlatFeature)>>,
    tiers: HashMap<Partition, Vec<(String, ItemDefinition)>>,
    tier_dictionaries: HashMap<Partition, Vec<(String, FeatureInfo)>>,
}

impl InMemoryCatalogSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_definitions(
        mut self,
        partition: Partition,
        category: AddonCategory,
        rows: Vec<(String, ItemDefinition)>,
    ) -> Self {
        self.definitions.insert((partition, category), rows);
        self
    }

    pub fn with_dictionary(
        mut self,
        partition: Partition,
        category: AddonCategory,
        rows: Vec<(String, FeatureInfo)>,
    ) -> Self {
        self.dictionaries.insert((partition, category), rows);
        self
    }

    pub fn with_flat(
        mut self,
        partition: Partition,
        category: AddonCategory,
        rows: Vec<(String, FlatFeature)>,
    ) -> Self {
        self.flats.insert((partition, category), rows);
        self
    }

    pub fn with_tiers(mut self, partition: Partition, rows: Vec<(String, ItemDefinition)>) -> Self {
        self.tiers.insert(partition, rows);
        self
    }

    pub fn with_tier_dictionary(
        mut self,
        partition: Partition,
        rows: Vec<(String, FeatureInfo)>,
    ) -> Self {
        self.tier_dictionaries.insert(partition, rows);
        self
    }

    /// A small roster covering the happy paths: priced car tiers, rich car
    /// window add-ons, and flat-only boat trim.
    pub fn seeded() -> Self {
        let feature = |name: &str| FeatureInfo {
            name: name.to_string(),
            description: None,
            explanation: None,
            features: vec![],
            duration: None,
        };

        Self::new()
            .with_tiers(
                Partition::Cars,
                vec![
                    (
                        "Express Wash".to_string(),
                        ItemDefinition {
                            cost: Some(49.99),
                            features: vec!["hand-wash".to_string(), "tire-shine".to_string()],
                            popular: None,
                            description: None,
                        },
                    ),
                    (
                        "Showroom Detail".to_string(),
                        ItemDefinition {
                            cost: Some(100.0),
                            features: vec![
                                "hand-wash".to_string(),
                                "clay-bar".to_string(),
                                "interior-deep-clean".to_string(),
                            ],
                            popular: Some(true),
                            description: None,
                        },
                    ),
                ],
            )
            .with_tier_dictionary(
                Partition::Cars,
                vec![
                    ("hand-wash".to_string(), feature("Hand Wash")),
                    ("tire-shine".to_string(), feature("Tire Shine")),
                    ("clay-bar".to_string(), feature("Clay Bar Treatment")),
                    (
                        "interior-deep-clean".to_string(),
                        feature("Interior Deep Clean"),
                    ),
                ],
            )
            .with_definitions(
                Partition::Cars,
                AddonCategory::Windows,
                vec![(
                    "Ceramic Tint".to_string(),
                    ItemDefinition {
                        cost: Some(20.0),
                        features: vec!["uv".to_string()],
                        popular: Some(true),
                        description: None,
                    },
                )],
            )
            .with_dictionary(
                Partition::Cars,
                AddonCategory::Windows,
                vec![("uv".to_string(), feature("UV Protection"))],
            )
            .with_flat(
                Partition::Boats,
                AddonCategory::Trim,
                vec![
                    (
                        "hull-polish".to_string(),
                        FlatFeature {
                            name: Some("Hull Polish".to_string()),
                            description: None,
                        },
                    ),
                    (
                        "teak-oil".to_string(),
                        FlatFeature {
                            name: Some("Teak Oil Treatment".to_string()),
                            description: None,
                        },
                    ),
                ],
            )
    }

    fn missing(
        partition: Partition,
        category: Option<AddonCategory>,
        kind: ResourceKind,
    ) -> SourceError {
        SourceError::Missing {
            partition,
            category,
            kind,
        }
    }
}

#[async_trait]
impl CatalogSource for InMemoryCatalogSource {
    async fn addon_definitions(
        &self,
        partition: Partition,
        category: AddonCategory,
    ) -> Result<Vec<(String, ItemDefinition)>, SourceError> {
        self.definitions
            .get(&(partition, category))
            .cloned()
            .ok_or_else(|| Self::missing(partition, Some(category), ResourceKind::AddonDefinitions))
    }

    async fn feature_dictionary(
        &self,
        partition: Partition,
        category: AddonCategory,
    ) -> Result<Vec<(String, FeatureInfo)>, SourceError> {
        self.dictionaries
            .get(&(partition, category))
            .cloned()
            .ok_or_else(|| Self::missing(partition, Some(category), ResourceKind::FeatureDictionary))
    }

    async fn flat_features(
        &self,
        partition: Partition,
        category: AddonCategory,
    ) -> Result<Vec<(String, FlatFeature)>, SourceError> {
        self.flats
            .get(&(partition, category))
            .cloned()
            .ok_or_else(|| Self::missing(partition, Some(category), ResourceKind::FlatFeatures))
    }

    async fn service_tiers(
        &self,
        partition: Partition,
    ) -> Result<Vec<(String, ItemDefinition)>, SourceError> {
        self.tiers
            .get(&partition)
            .cloned()
            .ok_or_else(|| Self::missing(partition, None, ResourceKind::AddonDefinitions))
    }

    async fn tier_feature_dictionary(
        &self,
        partition: Partition,
    ) -> Result<Vec<(String, FeatureInfo)>, SourceError> {
        self.tier_dictionaries
            .get(&partition)
            .cloned()
            .ok_or_else(|| Self::missing(partition, None, ResourceKind::FeatureDictionary))
    }
}
