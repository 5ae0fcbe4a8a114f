use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LocationType {
    Home,
    Office,
    Other,
}

/// Where the detailing crew shows up. Free-text fields, captured on the
/// location step; geocoding lives outside the core.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Location {
    pub address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip: Option<String>,
    pub notes: Option<String>,
    pub location_type: Option<LocationType>,
}

impl Location {
    /// Shallow merge: only fields present in the patch overwrite.
    pub fn merge(&mut self, patch: Location) {
        if patch.address.is_some() {
            self.address = patch.address;
        }
        if patch.city.is_some() {
            self.city = patch.city;
        }
        if patch.state.is_some() {
            self.state = patch.state;
        }
        if patch.zip.is_some() {
            self.zip = patch.zip;
        }
        if patch.notes.is_some() {
            self.notes = patch.notes;
        }
        if patch.location_type.is_some() {
            self.location_type = patch.location_type;
        }
    }
}
