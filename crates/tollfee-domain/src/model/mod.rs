//! Domain model types

pub mod exemptions;
pub mod fee_schedule;
pub mod tariff;
pub mod time_band;
pub mod vehicle;

pub use exemptions::TollExemptions;
pub use fee_schedule::FeeSchedule;
pub use tariff::{FeeRules, Tariff};
pub use time_band::TimeBand;
pub use vehicle::Vehicle;
