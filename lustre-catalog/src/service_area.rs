use lustre_shared::Cents;
use serde::{Deserialize, Serialize};

/// One coverage area, owned and edited by the dashboard; read-only here.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ServiceArea {
    pub city: String,
    pub state: String,
    pub zip: Option<String>,
    /// At most one area in a roster is primary.
    pub primary: bool,
    pub minimum_cents: Cents,
    pub multiplier: f64,
}

#[derive(Debug, thiserror::Error)]
pub enum ServiceAreaError {
    #[error("more than one service area marked primary: `{0}` and `{1}`")]
    MultiplePrimary(String, String),

    #[error("service area `{0}` has a negative multiplier")]
    NegativeMultiplier(String),
}

/// Supplies per-area minimum spend and price multiplier records to pricing.
#[derive(Debug)]
pub struct ServiceAreaPricingResolver {
    areas: Vec<ServiceArea>,
}

impl ServiceAreaPricingResolver {
    pub fn new(areas: Vec<ServiceArea>) -> Result<Self, ServiceAreaError> {
        let mut primary: Option<&ServiceArea> = None;
        for area in &areas {
            if area.multiplier < 0.0 {
                return Err(ServiceAreaError::NegativeMultiplier(area.city.clone()));
            }
            if area.primary {
                if let Some(existing) = primary {
                    return Err(ServiceAreaError::MultiplePrimary(
                        existing.city.clone(),
                        area.city.clone(),
                    ));
                }
                primary = Some(area);
            }
        }
        Ok(Self { areas })
    }

    pub fn areas(&self) -> &[ServiceArea] {
        &self.areas
    }

    pub fn primary(&self) -> Option<&ServiceArea> {
        self.areas.iter().find(|area| area.primary)
    }

    /// Match a booking location to an area. Zip wins over city/state when the
    /// area carries one; comparisons are case-insensitive.
    pub fn area_for(&self, city: &str, state: &str, zip: Option<&str>) -> Option<&ServiceArea> {
        if let Some(zip) = zip {
            if let Some(area) = self
                .areas
                .iter()
                .find(|area| area.zip.as_deref() == Some(zip))
            {
                return Some(area);
            }
        }
        self.areas.iter().find(|area| {
            area.city.eq_ignore_ascii_case(city) && area.state.eq_ignore_ascii_case(state)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn area(city: &str, primary: bool) -> ServiceArea {
        ServiceArea {
            city: city.to_string(),
            state: "TX".to_string(),
            zip: None,
            primary,
            minimum_cents: 10000,
            multiplier: 1.0,
        }
    }

    #[test]
    fn test_single_primary_enforced() {
        let err = ServiceAreaPricingResolver::new(vec![area("Austin", true), area("Waco", true)])
            .unwrap_err();
        assert!(matches!(err, ServiceAreaError::MultiplePrimary(_, _)));
    }

    #[test]
    fn test_primary_lookup() {
        let resolver =
            ServiceAreaPricingResolver::new(vec![area("Austin", true), area("Waco", false)])
                .unwrap();
        assert_eq!(resolver.primary().unwrap().city, "Austin");
    }

    #[test]
    fn test_area_for_matches_case_insensitively() {
        let resolver =
            ServiceAreaPricingResolver::new(vec![area("Austin", true), area("Waco", false)])
                .unwrap();
        let matched = resolver.area_for("austin", "tx", None).unwrap();
        assert_eq!(matched.city, "Austin");
        assert!(resolver.area_for("Dallas", "TX", None).is_none());
    }

    #[test]
    fn test_zip_match_wins() {
        let mut zoned = area("Austin", false);
        zoned.zip = Some("78701".to_string());
        let resolver =
            ServiceAreaPricingResolver::new(vec![area("Austin", true), zoned]).unwrap();

        let matched = resolver.area_for("Round Rock", "TX", Some("78701")).unwrap();
        assert_eq!(matched.zip.as_deref(), Some("78701"));
        assert!(!matched.primary);
    }

    #[test]
    fn test_negative_multiplier_rejected() {
        let mut bad = area("Austin", false);
        bad.multiplier = -0.5;
        let err = ServiceAreaPricingResolver::new(vec![bad]).unwrap_err();
        assert!(matches!(err, ServiceAreaError::NegativeMultiplier(_)));
    }
}
