use lustre_shared::{format_usd, Cents};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::entry::CatalogEntry;
use crate::service_area::ServiceArea;
use crate::source::AddonCategory;

/// Fixed sales tax applied to the subtotal.
pub const TAX_RATE: f64 = 0.08;

/// Add-on catalogs grouped by category. Categories still in flight or that
/// failed to resolve are simply absent and price as empty.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CatalogSet {
    by_category: HashMap<AddonCategory, Vec<CatalogEntry>>,
}

impl CatalogSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, category: AddonCategory, entries: Vec<CatalogEntry>) {
        self.by_category.insert(category, entries);
    }

    pub fn entries(&self, category: AddonCategory) -> &[CatalogEntry] {
        self.by_category
            .get(&category)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Look an add-on id up across the union of every category. The draft can
    /// carry an id picked while a different category tab was active.
    pub fn find_addon(&self, id: &str) -> Option<&CatalogEntry> {
        self.by_category
            .values()
            .flatten()
            .find(|entry| entry.id == id)
    }

    pub fn resolved_categories(&self) -> usize {
        self.by_category.len()
    }
}

/// Terms of the matched service area, carried on the quote for display.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AreaTerms {
    pub minimum_cents: Cents,
    pub multiplier: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Quote {
    pub service_price: Cents,
    pub addon_price: Cents,
    pub subtotal: Cents,
    pub tax: Cents,
    pub total: Cents,
    pub service_area: Option<AreaTerms>,
}

impl Quote {
    /// Attach the matched area's terms. The minimum and multiplier are
    /// surfaced on the quote but do not change the total.
    pub fn with_service_area(mut self, area: &ServiceArea) -> Self {
        self.service_area = Some(AreaTerms {
            minimum_cents: area.minimum_cents,
            multiplier: area.multiplier,
        });
        self
    }

    pub fn display_total(&self) -> String {
        format_usd(self.total)
    }
}

/// Aggregates the selected tier, selected add-on, and tax into a quote.
/// Pure over its inputs; unresolved references never fail pricing, they
/// price as free.
pub struct PricingEngine {
    tax_rate: f64,
}

impl PricingEngine {
    pub fn new() -> Self {
        Self { tax_rate: TAX_RATE }
    }

    pub fn quote(
        &self,
        service_tier: Option<&CatalogEntry>,
        addon_id: Option<&str>,
        addons: &CatalogSet,
    ) -> Quote {
        let service_price = service_tier.map(|tier| tier.price_cents).unwrap_or(0);
        let addon_price = addon_id
            .and_then(|id| addons.find_addon(id))
            .map(|entry| entry.price_cents)
            .unwrap_or(0);

        let subtotal = service_price + addon_price;
        let tax = (subtotal as f64 * self.tax_rate).round() as Cents;

        Quote {
            service_price,
            addon_price,
            subtotal,
            tax,
            total: subtotal + tax,
            service_area: None,
        }
    }
}

impl Default for PricingEngine {
    fn default() -> Self {
        Self::new()
    }
}
