use lustre_catalog::{AddonCategory, CatalogResolver, CatalogSet};
use lustre_shared::VehicleType;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Cooperative cancellation for in-flight catalog fetches. A step hands its
/// flag to each fetch it starts and cancels on unmount; a result that lands
/// after cancellation is discarded and never reaches session state.
#[derive(Debug, Clone, Default)]
pub struct CancelFlag {
    cancelled: Arc<AtomicBool>,
}

impl CancelFlag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }
}

/// Fan out the four category fetches concurrently and collect whatever
/// resolved. A failed category is priced as empty rather than failing the
/// set; `None` means the caller cancelled and the result must be dropped.
pub async fn load_addon_catalog_set(
    resolver: &CatalogResolver,
    vehicle: VehicleType,
    cancel: &CancelFlag,
) -> Option<CatalogSet> {
    let [windows, wheels, trim, engine] = AddonCategory::ALL;
    let results = tokio::join!(
        resolver.resolve_addon_catalog(vehicle, windows),
        resolver.resolve_addon_catalog(vehicle, wheels),
        resolver.resolve_addon_catalog(vehicle, trim),
        resolver.resolve_addon_catalog(vehicle, engine),
    );

    if cancel.is_cancelled() {
        tracing::debug!(%vehicle, "addon catalog fetch cancelled, discarding result");
        return None;
    }

    let mut set = CatalogSet::new();
    for (category, result) in AddonCategory::ALL
        .into_iter()
        .zip([results.0, results.1, results.2, results.3])
    {
        match result {
            Ok(catalog) => set.insert(category, catalog.into_entries()),
            Err(err) => {
                tracing::warn!(%vehicle, %category, error = %err, "category unresolved, pricing as empty");
            }
        }
    }
    Some(set)
}
