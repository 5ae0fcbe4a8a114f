use chrono::{DateTime, Duration, Utc};
use lustre_shared::VehicleType;
use std::collections::HashMap;
use std::sync::Mutex;

use crate::resolver::ResolvedCatalog;
use crate::source::AddonCategory;

/// What a cached catalog resolves for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CatalogKind {
    Addons(AddonCategory),
    ServiceTiers,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CacheKey {
    pub kind: CatalogKind,
    pub vehicle: VehicleType,
}

#[derive(Debug)]
struct CachedCatalog {
    catalog: ResolvedCatalog,
    stored_at: DateTime<Utc>,
}

#[derive(Debug, PartialEq)]
pub enum CacheLookup {
    /// Under the freshness window; serve directly.
    Fresh(ResolvedCatalog),
    /// Past freshness but not yet discarded; re-resolve, keep as fallback.
    Stale(ResolvedCatalog),
    Miss,
}

/// TTL cache over resolved catalogs. The key space is a few dozen
/// (kind, vehicle, category) combinations, so there is no eviction beyond
/// the discard window.
pub struct CatalogCache {
    entries: Mutex<HashMap<CacheKey, CachedCatalog>>,
    fresh_for: Duration,
    discard_after: Duration,
}

impl CatalogCache {
    pub fn new() -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
            fresh_for: Duration::minutes(5),
            discard_after: Duration::minutes(10),
        }
    }

    pub fn lookup(&self, key: &CacheKey) -> CacheLookup {
        let mut entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        let Some(cached) = entries.get(key) else {
            return CacheLookup::Miss;
        };

        let age = Utc::now() - cached.stored_at;
        if age >= self.discard_after {
            entries.remove(key);
            CacheLookup::Miss
        } else if age >= self.fresh_for {
            CacheLookup::Stale(cached.catalog.clone())
        } else {
            CacheLookup::Fresh(cached.catalog.clone())
        }
    }

    pub fn store(&self, key: CacheKey, catalog: ResolvedCatalog) {
        self.store_at(key, catalog, Utc::now());
    }

    pub(crate) fn store_at(&self, key: CacheKey, catalog: ResolvedCatalog, stored_at: DateTime<Utc>) {
        let mut entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        entries.insert(key, CachedCatalog { catalog, stored_at });
    }
}

impl Default for CatalogCache {
    fn default() -> Self {
        Self::new()
    }
}
