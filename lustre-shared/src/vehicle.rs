use serde::{Deserialize, Serialize};

/// Vehicle types a customer can book detailing for
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum VehicleType {
    Car,
    Truck,
    Suv,
    Boat,
    Rv,
    Airplane,
    Motorcycle,
    Other,
}

/// Catalog namespace a vehicle type resolves into
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Partition {
    Cars,
    Trucks,
    Suvs,
    Boats,
    Rvs,
}

impl VehicleType {
    /// Map to the catalog partition. Airplane, motorcycle and "other" carry
    /// no catalog and route the customer to a call-us flow instead.
    pub fn partition(&self) -> Option<Partition> {
        match self {
            VehicleType::Car => Some(Partition::Cars),
            VehicleType::Truck => Some(Partition::Trucks),
            VehicleType::Suv => Some(Partition::Suvs),
            VehicleType::Boat => Some(Partition::Boats),
            VehicleType::Rv => Some(Partition::Rvs),
            VehicleType::Airplane | VehicleType::Motorcycle | VehicleType::Other => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            VehicleType::Car => "car",
            VehicleType::Truck => "truck",
            VehicleType::Suv => "suv",
            VehicleType::Boat => "boat",
            VehicleType::Rv => "rv",
            VehicleType::Airplane => "airplane",
            VehicleType::Motorcycle => "motorcycle",
            VehicleType::Other => "other",
        }
    }
}

impl std::fmt::Display for VehicleType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Partition {
    pub fn as_str(&self) -> &'static str {
        match self {
            Partition::Cars => "cars",
            Partition::Trucks => "trucks",
            Partition::Suvs => "suvs",
            Partition::Boats => "boats",
            Partition::Rvs => "rvs",
        }
    }
}

impl std::fmt::Display for Partition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Free-form detail fields captured on the vehicle step. Boats and RVs use
/// `length` where road vehicles use `color`; a stale value left over after a
/// vehicle-type switch is tolerated, not cleared.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct VehicleDetails {
    pub make: Option<String>,
    pub model: Option<String>,
    pub year: Option<i32>,
    pub color: Option<String>,
    pub length: Option<String>,
}

impl VehicleDetails {
    /// Shallow merge: only fields present in the patch overwrite.
    pub fn merge(&mut self, patch: VehicleDetails) {
        if patch.make.is_some() {
            self.make = patch.make;
        }
        if patch.model.is_some() {
            self.model = patch.model;
        }
        if patch.year.is_some() {
            self.year = patch.year;
        }
        if patch.color.is_some() {
            self.color = patch.color;
        }
        if patch.length.is_some() {
            self.length = patch.length;
        }
    }
}
