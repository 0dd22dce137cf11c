//! Toll-exempt vehicle categories

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use tollfee_types::VehicleCategory;

/// Vehicle categories that never pay a toll
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TollExemptions {
    categories: BTreeSet<VehicleCategory>,
}

impl TollExemptions {
    pub fn new(categories: impl IntoIterator<Item = VehicleCategory>) -> Self {
        Self {
            categories: categories.into_iter().collect(),
        }
    }

    /// Motorbike, Tractor, Emergency, Diplomat, Foreign and Military
    pub fn standard() -> Self {
        Self::new([
            VehicleCategory::Motorbike,
            VehicleCategory::Tractor,
            VehicleCategory::Emergency,
            VehicleCategory::Diplomat,
            VehicleCategory::Foreign,
            VehicleCategory::Military,
        ])
    }

    pub fn none() -> Self {
        Self::new([])
    }

    pub fn is_exempt(&self, category: VehicleCategory) -> bool {
        self.categories.contains(&category)
    }

    pub fn categories(&self) -> impl Iterator<Item = VehicleCategory> + '_ {
        self.categories.iter().copied()
    }
}

impl Default for TollExemptions {
    fn default() -> Self {
        Self::standard()
    }
}
