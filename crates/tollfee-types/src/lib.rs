//! Core types for toll fee calculation

mod error;
mod vehicle;

pub use error::*;
pub use vehicle::*;
