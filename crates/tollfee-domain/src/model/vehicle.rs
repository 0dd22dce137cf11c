//! Vehicle abstraction consumed by the toll engine

use tollfee_types::VehicleCategory;

/// Anything a toll gate can classify into a category
pub trait Vehicle {
    fn category(&self) -> VehicleCategory;
}

impl Vehicle for VehicleCategory {
    fn category(&self) -> VehicleCategory {
        *self
    }
}
