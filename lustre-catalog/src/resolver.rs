use lustre_shared::{dollars_to_cents, Partition, VehicleType};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::cache::{CacheKey, CacheLookup, CatalogCache, CatalogKind};
use crate::derive::{card_description, feature_names, slug};
use crate::entry::{CatalogEntry, FeatureDetail};
use crate::source::{AddonCategory, CatalogSource, FeatureInfo, FlatFeature, ItemDefinition, SourceError};

/// Which shape a resolution landed on. The flat shape is the degraded
/// fallback: unpriced, one feature per entry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum ResolvedCatalog {
    Rich(Vec<CatalogEntry>),
    Flat(Vec<CatalogEntry>),
}

impl ResolvedCatalog {
    pub fn entries(&self) -> &[CatalogEntry] {
        match self {
            ResolvedCatalog::Rich(entries) | ResolvedCatalog::Flat(entries) => entries,
        }
    }

    pub fn into_entries(self) -> Vec<CatalogEntry> {
        match self {
            ResolvedCatalog::Rich(entries) | ResolvedCatalog::Flat(entries) => entries,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// Vehicle types with no catalog partition. Surfaced to the step as a
    /// call-us guidance message, not a fatal error.
    #[error("no catalog partition for vehicle type `{0}`")]
    UnsupportedVehicle(VehicleType),

    #[error("no add-ons available for `{category}` in `{vehicle}`")]
    NoAddons {
        category: AddonCategory,
        vehicle: VehicleType,
    },

    #[error(transparent)]
    Source(#[from] SourceError),
}

/// Resolves vehicle-type catalogs against a [`CatalogSource`], trying the
/// rich shape first and falling back to the flat shape for add-ons.
/// Resolutions are cached per (kind, vehicle, category) with a TTL.
pub struct CatalogResolver {
    source: Arc<dyn CatalogSource>,
    cache: CatalogCache,
}

impl CatalogResolver {
    pub fn new(source: Arc<dyn CatalogSource>) -> Self {
        Self {
            source,
            cache: CatalogCache::new(),
        }
    }

    /// Resolve the add-on catalog for a vehicle type and category.
    pub async fn resolve_addon_catalog(
        &self,
        vehicle: VehicleType,
        category: AddonCategory,
    ) -> Result<ResolvedCatalog, CatalogError> {
        let partition = vehicle
            .partition()
            .ok_or(CatalogError::UnsupportedVehicle(vehicle))?;

        let key = CacheKey {
            kind: CatalogKind::Addons(category),
            vehicle,
        };

        let stale = match self.cache.lookup(&key) {
            CacheLookup::Fresh(catalog) => {
                tracing::debug!(%vehicle, %category, "addon catalog cache hit");
                return Ok(catalog);
            }
            CacheLookup::Stale(catalog) => Some(catalog),
            CacheLookup::Miss => None,
        };

        match self.fetch_addons(partition, category, vehicle).await {
            Ok(catalog) => {
                self.cache.store(key, catalog.clone());
                Ok(catalog)
            }
            Err(err) => match stale {
                // A usable copy beats erroring while the source is flaky.
                Some(catalog) => {
                    tracing::warn!(%vehicle, %category, error = %err, "re-resolution failed, serving stale catalog");
                    Ok(catalog)
                }
                None => Err(err),
            },
        }
    }

    /// Resolve the service-tier catalog for a vehicle type. Rich shape only;
    /// there is no flat fallback for tiers.
    pub async fn resolve_service_tier_catalog(
        &self,
        vehicle: VehicleType,
    ) -> Result<ResolvedCatalog, CatalogError> {
        let partition = vehicle
            .partition()
            .ok_or(CatalogError::UnsupportedVehicle(vehicle))?;

        let key = CacheKey {
            kind: CatalogKind::ServiceTiers,
            vehicle,
        };

        let stale = match self.cache.lookup(&key) {
            CacheLookup::Fresh(catalog) => {
                tracing::debug!(%vehicle, "service tier cache hit");
                return Ok(catalog);
            }
            CacheLookup::Stale(catalog) => Some(catalog),
            CacheLookup::Miss => None,
        };

        match self.fetch_service_tiers(partition).await {
            Ok(catalog) => {
                self.cache.store(key, catalog.clone());
                Ok(catalog)
            }
            Err(err) => match stale {
                Some(catalog) => {
                    tracing::warn!(%vehicle, error = %err, "re-resolution failed, serving stale tiers");
                    Ok(catalog)
                }
                None => Err(err),
            },
        }
    }

    /// Expand a feature id against a loaded dictionary. A miss is non-fatal:
    /// the detail panel simply omits its extra sections.
    pub fn resolve_feature_detail(
        &self,
        feature_id: &str,
        dictionary: &[(String, FeatureInfo)],
    ) -> Option<FeatureDetail> {
        dictionary
            .iter()
            .find(|(key, _)| key == feature_id)
            .map(|(_, info)| FeatureDetail {
                name: info.name.clone(),
                description: info.description.clone(),
                explanation: info.explanation.clone(),
                features: info.features.clone(),
                duration_minutes: info.duration,
            })
    }

    /// Load the feature dictionary for a category, for lazy detail views.
    pub async fn feature_dictionary(
        &self,
        vehicle: VehicleType,
        category: AddonCategory,
    ) -> Result<Vec<(String, FeatureInfo)>, CatalogError> {
        let partition = vehicle
            .partition()
            .ok_or(CatalogError::UnsupportedVehicle(vehicle))?;
        Ok(self.source.feature_dictionary(partition, category).await?)
    }

    async fn fetch_addons(
        &self,
        partition: Partition,
        category: AddonCategory,
        vehicle: VehicleType,
    ) -> Result<ResolvedCatalog, CatalogError> {
        // Attempt A: rich shape, definitions plus feature dictionary.
        let rich = async {
            let definitions = self.source.addon_definitions(partition, category).await?;
            let dictionary = self.source.feature_dictionary(partition, category).await?;
            Ok::<_, SourceError>((definitions, dictionary))
        }
        .await;

        match rich {
            Ok((definitions, dictionary)) => {
                tracing::info!(%partition, %category, count = definitions.len(), "resolved rich addon catalog");
                Ok(ResolvedCatalog::Rich(build_rich_entries(
                    &definitions,
                    &dictionary,
                )))
            }
            Err(rich_err) => {
                tracing::debug!(%partition, %category, error = %rich_err, "rich shape unavailable, trying flat");
                match self.source.flat_features(partition, category).await {
                    Ok(flat) => {
                        tracing::info!(%partition, %category, count = flat.len(), "resolved flat addon catalog");
                        Ok(ResolvedCatalog::Flat(build_flat_entries(&flat)))
                    }
                    Err(_) => Err(CatalogError::NoAddons { category, vehicle }),
                }
            }
        }
    }

    async fn fetch_service_tiers(
        &self,
        partition: Partition,
    ) -> Result<ResolvedCatalog, CatalogError> {
        let definitions = self.source.service_tiers(partition).await?;
        let dictionary = self.source.tier_feature_dictionary(partition).await?;
        tracing::info!(%partition, count = definitions.len(), "resolved service tiers");
        Ok(ResolvedCatalog::Rich(build_rich_entries(
            &definitions,
            &dictionary,
        )))
    }
}

fn build_rich_entries(
    definitions: &[(String, ItemDefinition)],
    dictionary: &[(String, FeatureInfo)],
) -> Vec<CatalogEntry> {
    definitions
        .iter()
        .map(|(name, def)| {
            let features = feature_names(&def.features, dictionary);
            CatalogEntry {
                id: slug(name),
                name: name.clone(),
                price_cents: def.cost.map(dollars_to_cents).unwrap_or(0),
                description: def
                    .description
                    .clone()
                    .unwrap_or_else(|| card_description(&features)),
                features,
                feature_ids: def.features.clone(),
                popular: def.popular.unwrap_or(false),
            }
        })
        .collect()
}

fn build_flat_entries(flat: &[(String, FlatFeature)]) -> Vec<CatalogEntry> {
    flat.iter()
        .enumerate()
        .map(|(i, (key, feature))| {
            let name = feature.name.clone().unwrap_or_else(|| key.clone());
            let features: Vec<String> = feature.name.clone().into_iter().collect();
            CatalogEntry {
                id: slug(&name),
                name,
                price_cents: 0,
                description: feature
                    .description
                    .clone()
                    .unwrap_or_else(|| card_description(&features)),
                features,
                feature_ids: vec![key.clone()],
                // Only the first iterated key is highlighted.
                popular: i == 0,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::collections::HashMap;

    /// Test source with per-resource toggles for the failure paths.
    #[derive(Default)]
    struct FakeSource {
        definitions: HashMap<(Partition, AddonCategory), Vec<(String, ItemDefinition)>>,
        dictionaries: HashMap<(Partition, AddonCategory), Vec<(String, FeatureInfo)>>,
        flats: HashMap<(Partition, AddonCategory), Vec<(String, FlatFeature)>>,
        tiers: HashMap<Partition, Vec<(String, ItemDefinition)>>,
    }

    #[async_trait]
    impl CatalogSource for FakeSource {
        async fn addon_definitions(
            &self,
            partition: Partition,
            category: AddonCategory,
        ) -> Result<Vec<(String, ItemDefinition)>, SourceError> {
            self.definitions
                .get(&(partition, category))
                .cloned()
                .ok_or(SourceError::Missing {
                    partition,
                    category: Some(category),
                    kind: crate::source::ResourceKind::AddonDefinitions,
                })
        }

        async fn feature_dictionary(
            &self,
            partition: Partition,
            category: AddonCategory,
        ) -> Result<Vec<(String, FeatureInfo)>, SourceError> {
            self.dictionaries
                .get(&(partition, category))
                .cloned()
                .ok_or(SourceError::Missing {
                    partition,
                    category: Some(category),
                    kind: crate::source::ResourceKind::FeatureDictionary,
                })
        }

        async fn flat_features(
            &self,
            partition: Partition,
            category: AddonCategory,
        ) -> Result<Vec<(String, FlatFeature)>, SourceError> {
            self.flats
                .get(&(partition, category))
                .cloned()
                .ok_or(SourceError::Missing {
                    partition,
                    category: Some(category),
                    kind: crate::source::ResourceKind::FlatFeatures,
                })
        }

        async fn service_tiers(
            &self,
            partition: Partition,
        ) -> Result<Vec<(String, ItemDefinition)>, SourceError> {
            self.tiers.get(&partition).cloned().ok_or(SourceError::Missing {
                partition,
                category: None,
                kind: crate::source::ResourceKind::AddonDefinitions,
            })
        }

        async fn tier_feature_dictionary(
            &self,
            _partition: Partition,
        ) -> Result<Vec<(String, FeatureInfo)>, SourceError> {
            Ok(vec![])
        }
    }

    fn info(name: &str) -> FeatureInfo {
        FeatureInfo {
            name: name.to_string(),
            description: None,
            explanation: None,
            features: vec![],
            duration: None,
        }
    }

    fn rich_source() -> FakeSource {
        let mut source = FakeSource::default();
        source.definitions.insert(
            (Partition::Cars, AddonCategory::Windows),
            vec![(
                "Ceramic Tint".to_string(),
                ItemDefinition {
                    cost: Some(20.0),
                    features: vec!["uv".to_string(), "privacy".to_string()],
                    popular: Some(true),
                    description: None,
                },
            )],
        );
        source.dictionaries.insert(
            (Partition::Cars, AddonCategory::Windows),
            vec![
                ("uv".to_string(), info("UV Protection")),
                ("privacy".to_string(), info("Privacy Shade")),
            ],
        );
        source
    }

    #[tokio::test]
    async fn test_rich_resolution() {
        let resolver = CatalogResolver::new(Arc::new(rich_source()));
        let catalog = resolver
            .resolve_addon_catalog(VehicleType::Car, AddonCategory::Windows)
            .await
            .unwrap();

        let ResolvedCatalog::Rich(entries) = catalog else {
            panic!("expected rich catalog");
        };
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].id, "ceramic-tint");
        assert_eq!(entries[0].price_cents, 2000);
        assert_eq!(entries[0].features, vec!["UV Protection", "Privacy Shade"]);
        assert_eq!(entries[0].description, "UV Protection, Privacy Shade");
        assert!(entries[0].popular);
    }

    #[tokio::test]
    async fn test_flat_fallback_marks_first_key_popular() {
        let mut source = FakeSource::default();
        source.flats.insert(
            (Partition::Boats, AddonCategory::Trim),
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
                        name: Some("Teak Oil".to_string()),
                        description: None,
                    },
                ),
            ],
        );

        let resolver = CatalogResolver::new(Arc::new(source));
        let catalog = resolver
            .resolve_addon_catalog(VehicleType::Boat, AddonCategory::Trim)
            .await
            .unwrap();

        let ResolvedCatalog::Flat(entries) = catalog else {
            panic!("expected flat catalog");
        };
        assert_eq!(entries.len(), 2);
        assert!(entries[0].popular);
        assert!(!entries[1].popular);
        assert!(entries.iter().all(|e| e.price_cents == 0));
        assert_eq!(entries[0].description, "Hull Polish");
    }

    #[tokio::test]
    async fn test_unsupported_vehicle_fails_fast() {
        let resolver = CatalogResolver::new(Arc::new(FakeSource::default()));
        let err = resolver
            .resolve_addon_catalog(VehicleType::Airplane, AddonCategory::Windows)
            .await
            .unwrap_err();
        assert!(matches!(err, CatalogError::UnsupportedVehicle(VehicleType::Airplane)));
    }

    #[tokio::test]
    async fn test_both_shapes_missing_names_category_and_vehicle() {
        let resolver = CatalogResolver::new(Arc::new(FakeSource::default()));
        let err = resolver
            .resolve_addon_catalog(VehicleType::Suv, AddonCategory::Engine)
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "no add-ons available for `engine` in `suv`");
    }

    #[tokio::test]
    async fn test_rich_description_truncation_over_three_features() {
        let mut source = FakeSource::default();
        source.definitions.insert(
            (Partition::Trucks, AddonCategory::Wheels),
            vec![(
                "Wheel Works".to_string(),
                ItemDefinition {
                    cost: None,
                    features: (1..=5).map(|i| format!("f{}", i)).collect(),
                    popular: None,
                    description: None,
                },
            )],
        );
        source.dictionaries.insert(
            (Partition::Trucks, AddonCategory::Wheels),
            (1..=5)
                .map(|i| (format!("f{}", i), info(&format!("Feature {}", i))))
                .collect(),
        );

        let resolver = CatalogResolver::new(Arc::new(source));
        let catalog = resolver
            .resolve_addon_catalog(VehicleType::Truck, AddonCategory::Wheels)
            .await
            .unwrap();

        let entry = &catalog.entries()[0];
        assert_eq!(entry.description, "Feature 1, Feature 2, Feature 3...");
        assert_eq!(entry.price_cents, 0);
        assert!(!entry.popular);
    }

    fn cached_entry(id: &str) -> CatalogEntry {
        CatalogEntry {
            id: id.to_string(),
            name: id.to_string(),
            price_cents: 1500,
            description: String::new(),
            features: vec![],
            feature_ids: vec![],
            popular: false,
        }
    }

    fn windows_key() -> crate::cache::CacheKey {
        crate::cache::CacheKey {
            kind: crate::cache::CatalogKind::Addons(AddonCategory::Windows),
            vehicle: VehicleType::Car,
        }
    }

    #[tokio::test]
    async fn test_stale_catalog_served_when_refetch_fails() {
        use chrono::{Duration, Utc};

        // Source carries nothing, so the refetch inside the stale window fails.
        let resolver = CatalogResolver::new(Arc::new(FakeSource::default()));
        let stale = ResolvedCatalog::Rich(vec![cached_entry("old-tint")]);
        resolver
            .cache
            .store_at(windows_key(), stale.clone(), Utc::now() - Duration::minutes(7));

        let catalog = resolver
            .resolve_addon_catalog(VehicleType::Car, AddonCategory::Windows)
            .await
            .unwrap();
        assert_eq!(catalog, stale);
    }

    #[tokio::test]
    async fn test_stale_catalog_replaced_when_refetch_succeeds() {
        use chrono::{Duration, Utc};

        let resolver = CatalogResolver::new(Arc::new(rich_source()));
        let stale = ResolvedCatalog::Rich(vec![cached_entry("old-tint")]);
        resolver
            .cache
            .store_at(windows_key(), stale, Utc::now() - Duration::minutes(7));

        let catalog = resolver
            .resolve_addon_catalog(VehicleType::Car, AddonCategory::Windows)
            .await
            .unwrap();
        assert_eq!(catalog.entries()[0].id, "ceramic-tint");
    }

    #[tokio::test]
    async fn test_discarded_catalog_errors_when_source_dead() {
        use chrono::{Duration, Utc};

        // Past the discard window the old copy is gone; a dead source errors.
        let resolver = CatalogResolver::new(Arc::new(FakeSource::default()));
        let old = ResolvedCatalog::Rich(vec![cached_entry("old-tint")]);
        resolver
            .cache
            .store_at(windows_key(), old, Utc::now() - Duration::minutes(11));

        let err = resolver
            .resolve_addon_catalog(VehicleType::Car, AddonCategory::Windows)
            .await
            .unwrap_err();
        assert!(matches!(err, CatalogError::NoAddons { .. }));
    }

    #[tokio::test]
    async fn test_feature_detail_lookup() {
        let resolver = CatalogResolver::new(Arc::new(FakeSource::default()));
        let dict = vec![(
            "uv".to_string(),
            FeatureInfo {
                name: "UV Protection".to_string(),
                description: Some("Blocks 99% of UV".to_string()),
                explanation: None,
                features: vec!["Front".to_string(), "Rear".to_string()],
                duration: Some(45),
            },
        )];

        let detail = resolver.resolve_feature_detail("uv", &dict).unwrap();
        assert_eq!(detail.name, "UV Protection");
        assert_eq!(detail.duration_minutes, Some(45));

        assert!(resolver.resolve_feature_detail("missing", &dict).is_none());
    }
}
