//! Tariff: the full set of pricing rules injected into the engine

use chrono::Duration;
use serde::{Deserialize, Serialize};

use super::{FeeSchedule, TollExemptions};

pub const MAX_DAILY_FEE: u32 = 60;
pub const CHARGE_WINDOW_MINUTES: u32 = 60;

/// Aggregation rules for one day of passages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeeRules {
    /// Cap on the total charged for one day
    #[serde(default = "default_max_daily_fee")]
    pub max_daily_fee: u32,

    /// Passages this close to a window's first passage are billed once
    #[serde(default = "default_window_minutes")]
    pub window_minutes: u32,
}

fn default_max_daily_fee() -> u32 {
    MAX_DAILY_FEE
}

fn default_window_minutes() -> u32 {
    CHARGE_WINDOW_MINUTES
}

impl FeeRules {
    pub fn window(&self) -> Duration {
        Duration::minutes(i64::from(self.window_minutes))
    }
}

impl Default for FeeRules {
    fn default() -> Self {
        Self {
            max_daily_fee: MAX_DAILY_FEE,
            window_minutes: CHARGE_WINDOW_MINUTES,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Tariff {
    pub schedule: FeeSchedule,
    pub exemptions: TollExemptions,
    pub rules: FeeRules,
}

impl Tariff {
    pub fn new(schedule: FeeSchedule, exemptions: TollExemptions, rules: FeeRules) -> Self {
        Self {
            schedule,
            exemptions,
            rules,
        }
    }

    pub fn standard() -> Self {
        Self::default()
    }
}
