use async_trait::async_trait;
use lustre_catalog::{
    AddonCategory, CatalogSource, FeatureInfo, FlatFeature, ItemDefinition, ResourceKind,
    SourceError,
};
use lustre_shared::Partition;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Catalog source backed by JSON files under a data directory, addressed by
/// the (partition, category, resource-kind) triple:
///
/// ```text
/// <root>/<partition>/<category>.addon-definitions.json
/// <root>/<partition>/<category>.feature-dictionary.json
/// <root>/<partition>/<category>.flat-features.json
/// <root>/<partition>/service-tiers.json
/// <root>/<partition>/tier-features.json
/// ```
///
/// Files hold ordered arrays, so flat-shape iteration order is stable.
pub struct FileCatalogSource {
    root: PathBuf,
}

#[derive(Deserialize)]
struct DefinitionRow {
    name: String,
    #[serde(flatten)]
    definition: ItemDefinition,
}

#[derive(Deserialize)]
struct FeatureRow {
    id: String,
    #[serde(flatten)]
    info: FeatureInfo,
}

#[derive(Deserialize)]
struct FlatRow {
    key: String,
    #[serde(flatten)]
    feature: FlatFeature,
}

impl FileCatalogSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn addon_path(&self, partition: Partition, category: AddonCategory, kind: ResourceKind) -> PathBuf {
        self.root
            .join(partition.as_str())
            .join(format!("{}.{}.json", category.as_str(), kind.as_str()))
    }

    fn tier_path(&self, partition: Partition, file: &str) -> PathBuf {
        self.root.join(partition.as_str()).join(file)
    }

    async fn read_json<T: DeserializeOwned>(
        &self,
        path: &Path,
        partition: Partition,
        category: Option<AddonCategory>,
        kind: ResourceKind,
    ) -> Result<T, SourceError> {
        let bytes = tokio::fs::read(path).await.map_err(|err| {
            if err.kind() == ErrorKind::NotFound {
                SourceError::Missing {
                    partition,
                    category,
                    kind,
                }
            } else {
                SourceError::Io(format!("{}: {}", path.display(), err))
            }
        })?;

        serde_json::from_slice(&bytes)
            .map_err(|err| SourceError::Malformed(format!("{}: {}", path.display(), err)))
    }
}

#[async_trait]
impl CatalogSource for FileCatalogSource {
    async fn addon_definitions(
        &self,
        partition: Partition,
        category: AddonCategory,
    ) -> Result<Vec<(String, ItemDefinition)>, SourceError> {
        let kind = ResourceKind::AddonDefinitions;
        let path = self.addon_path(partition, category, kind);
        let rows: Vec<DefinitionRow> = self.read_json(&path, partition, Some(category), kind).await?;
        Ok(rows.into_iter().map(|r| (r.name, r.definition)).collect())
    }

    async fn feature_dictionary(
        &self,
        partition: Partition,
        category: AddonCategory,
    ) -> Result<Vec<(String, FeatureInfo)>, SourceError> {
        let kind = ResourceKind::FeatureDictionary;
        let path = self.addon_path(partition, category, kind);
        let rows: Vec<FeatureRow> = self.read_json(&path, partition, Some(category), kind).await?;
        Ok(rows.into_iter().map(|r| (r.id, r.info)).collect())
    }

    async fn flat_features(
        &self,
        partition: Partition,
        category: AddonCategory,
    ) -> Result<Vec<(String, FlatFeature)>, SourceError> {
        let kind = ResourceKind::FlatFeatures;
        let path = self.addon_path(partition, category, kind);
        let rows: Vec<FlatRow> = self.read_json(&path, partition, Some(category), kind).await?;
        Ok(rows.into_iter().map(|r| (r.key, r.feature)).collect())
    }

    async fn service_tiers(
        &self,
        partition: Partition,
    ) -> Result<Vec<(String, ItemDefinition)>, SourceError> {
        let path = self.tier_path(partition, "service-tiers.json");
        let rows: Vec<DefinitionRow> = self
            .read_json(&path, partition, None, ResourceKind::AddonDefinitions)
            .await?;
        Ok(rows.into_iter().map(|r| (r.name, r.definition)).collect())
    }

    async fn tier_feature_dictionary(
        &self,
        partition: Partition,
    ) -> Result<Vec<(String, FeatureInfo)>, SourceError> {
        let path = self.tier_path(partition, "tier-features.json");
        let rows: Vec<FeatureRow> = self
            .read_json(&path, partition, None, ResourceKind::FeatureDictionary)
            .await?;
        Ok(rows.into_iter().map(|r| (r.id, r.info)).collect())
    }
}
