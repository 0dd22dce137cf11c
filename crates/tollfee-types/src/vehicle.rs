//! Vehicle categories

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::Error;

/// Category tag a toll gate identifies a vehicle by
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum VehicleCategory {
    Car,
    Motorbike,
    Tractor,
    Emergency,
    Diplomat,
    Foreign,
    Military,
}

impl VehicleCategory {
    pub const ALL: [VehicleCategory; 7] = [
        VehicleCategory::Car,
        VehicleCategory::Motorbike,
        VehicleCategory::Tractor,
        VehicleCategory::Emergency,
        VehicleCategory::Diplomat,
        VehicleCategory::Foreign,
        VehicleCategory::Military,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            VehicleCategory::Car => "Car",
            VehicleCategory::Motorbike => "Motorbike",
            VehicleCategory::Tractor => "Tractor",
            VehicleCategory::Emergency => "Emergency",
            VehicleCategory::Diplomat => "Diplomat",
            VehicleCategory::Foreign => "Foreign",
            VehicleCategory::Military => "Military",
        }
    }
}

impl std::fmt::Display for VehicleCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for VehicleCategory {
    type Err = Error;

    /// Case-insensitive parse of the category name
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        VehicleCategory::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| Error::UnknownVehicleCategory(trimmed.to_string()))
    }
}
