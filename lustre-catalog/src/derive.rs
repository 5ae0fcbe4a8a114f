//! Pure derivation rules shared by both catalog shapes. Centralized here so
//! the defaulting behavior is testable without touching a source.

use crate::source::FeatureInfo;

/// Entry id: the display name lower-cased with whitespace collapsed to hyphens.
pub fn slug(name: &str) -> String {
    name.to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
}

/// Resolve feature ids to display names; an id missing from the dictionary
/// falls back to the raw id string.
pub fn feature_names(ids: &[String], dictionary: &[(String, FeatureInfo)]) -> Vec<String> {
    ids.iter()
        .map(|id| {
            dictionary
                .iter()
                .find(|(key, _)| key == id)
                .map(|(_, info)| info.name.clone())
                .unwrap_or_else(|| id.clone())
        })
        .collect()
}

/// Card description when the source carries none: the first three feature
/// names joined by ", ", with "..." appended when more exist, or the literal
/// placeholder when there are no features at all.
pub fn card_description(features: &[String]) -> String {
    if features.is_empty() {
        return "No features available".to_string();
    }
    let joined = features
        .iter()
        .take(3)
        .cloned()
        .collect::<Vec<_>>()
        .join(", ");
    if features.len() > 3 {
        format!("{}...", joined)
    } else {
        joined
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn info(name: &str) -> FeatureInfo {
        FeatureInfo {
            name: name.to_string(),
            description: None,
            explanation: None,
            features: vec![],
            duration: None,
        }
    }

    #[test]
    fn test_slug() {
        assert_eq!(slug("Ceramic Window Tint"), "ceramic-window-tint");
        assert_eq!(slug("  Full   Interior "), "full-interior");
    }

    #[test]
    fn test_feature_names_fall_back_to_raw_id() {
        let dict = vec![("deep-clean".to_string(), info("Deep Clean"))];
        let names = feature_names(
            &["deep-clean".to_string(), "unknown-id".to_string()],
            &dict,
        );
        assert_eq!(names, vec!["Deep Clean", "unknown-id"]);
    }

    #[test]
    fn test_card_description_truncates_past_three() {
        let features: Vec<String> = ["A", "B", "C", "D", "E"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        assert_eq!(card_description(&features), "A, B, C...");
    }

    #[test]
    fn test_card_description_exact_three() {
        let features: Vec<String> = ["A", "B", "C"].iter().map(|s| s.to_string()).collect();
        assert_eq!(card_description(&features), "A, B, C");
    }

    #[test]
    fn test_card_description_empty() {
        assert_eq!(card_description(&[]), "No features available");
    }
}
