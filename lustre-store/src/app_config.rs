use lustre_catalog::{ServiceArea, ServiceAreaError, ServiceAreaPricingResolver};
use lustre_shared::dollars_to_cents;
use serde::Deserialize;
use std::env;
use std::path::Path;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub service_areas: Vec<ServiceAreaEntry>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct CatalogConfig {
    /// Root directory the file-backed catalog source reads from.
    pub data_dir: String,
}

/// Service-area roster as configured; `minimum` is decimal dollars.
#[derive(Debug, Deserialize, Clone)]
pub struct ServiceAreaEntry {
    pub city: String,
    pub state: String,
    pub zip: Option<String>,
    #[serde(default)]
    pub primary: bool,
    pub minimum: f64,
    #[serde(default = "default_multiplier")]
    pub multiplier: f64,
}

fn default_multiplier() -> f64 {
    1.0
}

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from("config")
    }

    pub fn load_from(dir: impl AsRef<Path>) -> Result<Self, config::ConfigError> {
        let dir = dir.as_ref();
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());
        let file = |name: &str| dir.join(name).to_string_lossy().into_owned();

        let s = config::Config::builder()
            .add_source(config::File::with_name(&file("default")))
            .add_source(config::File::with_name(&file(&run_mode)).required(false))
            // Local overrides, not checked in
            .add_source(config::File::with_name(&file("local")).required(false))
            .add_source(config::Environment::with_prefix("LUSTRE").separator("__"))
            .build()?;

        s.try_deserialize()
    }

    /// Build the pricing-side resolver from the configured roster.
    pub fn service_area_resolver(&self) -> Result<ServiceAreaPricingResolver, ServiceAreaError> {
        let areas = self
            .service_areas
            .iter()
            .map(|entry| ServiceArea {
                city: entry.city.clone(),
                state: entry.state.clone(),
                zip: entry.zip.clone(),
                primary: entry.primary,
                minimum_cents: dollars_to_cents(entry.minimum),
                multiplier: entry.multiplier,
            })
            .collect();
        ServiceAreaPricingResolver::new(areas)
    }
}
