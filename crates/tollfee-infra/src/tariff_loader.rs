//! Tariff loader from TOML files
//!
//! ```toml
//! max_daily_fee = 60
//! window_minutes = 60
//! exempt = ["Motorbike", "Tractor"]
//! holidays = ["2025-05-02"]
//!
//! [[bands]]
//! start = "06:00"
//! end = "06:29"
//! fee = 8
//! ```
//!
//! Every key is optional; missing keys fall back to the reference tariff.
//! Unknown keys are rejected.

use chrono::NaiveDate;
use serde::Deserialize;
use std::fs;
use std::path::Path;
use tracing::debug;

use tollfee_domain::model::tariff::{CHARGE_WINDOW_MINUTES, MAX_DAILY_FEE};
use tollfee_domain::{FeeRules, FeeSchedule, Tariff, TimeBand, TollExemptions};
use tollfee_types::{ConfigError, Error, Result, VehicleCategory};

/// Container for parsing a tariff file
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct TariffFile {
    #[serde(default = "default_max_daily_fee")]
    max_daily_fee: u32,
    #[serde(default = "default_window_minutes")]
    window_minutes: u32,
    exempt: Option<Vec<String>>,
    #[serde(default)]
    holidays: Vec<String>,
    bands: Option<Vec<BandEntry>>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct BandEntry {
    start: String,
    end: String,
    fee: u32,
}

fn default_max_daily_fee() -> u32 {
    MAX_DAILY_FEE
}

fn default_window_minutes() -> u32 {
    CHARGE_WINDOW_MINUTES
}

/// Tariff and extra toll-free dates read from a tariff file
#[derive(Debug)]
pub struct TariffLoader {
    tariff: Tariff,
    extra_holidays: Vec<NaiveDate>,
}

impl TariffLoader {
    /// Load a tariff from a TOML file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(Error::FileNotFound(path.display().to_string()));
        }
        let content = fs::read_to_string(path).map_err(|e| {
            Error::Config(ConfigError::ParseError(format!(
                "Failed to read tariff file: {}",
                e
            )))
        })?;

        let loader = Self::load_from_str(&content)?;
        debug!(
            path = %path.display(),
            bands = loader.tariff.schedule.bands().len(),
            extra_holidays = loader.extra_holidays.len(),
            "loaded tariff"
        );
        Ok(loader)
    }

    /// Load a tariff from a TOML string
    pub fn load_from_str(toml_content: &str) -> Result<Self> {
        let file: TariffFile = toml::from_str(toml_content).map_err(|e| {
            Error::Config(ConfigError::ParseError(format!(
                "Failed to parse tariff TOML: {}",
                e
            )))
        })?;

        let schedule = match file.bands {
            Some(entries) => {
                let bands = entries
                    .iter()
                    .map(|b| TimeBand::parse(&b.start, &b.end, b.fee))
                    .collect::<std::result::Result<Vec<_>, _>>()?;
                FeeSchedule::new(bands)?
            }
            None => FeeSchedule::standard(),
        };

        let exemptions = match file.exempt {
            Some(names) => TollExemptions::new(
                names
                    .iter()
                    .map(|n| n.parse::<VehicleCategory>())
                    .collect::<Result<Vec<_>>>()?,
            ),
            None => TollExemptions::standard(),
        };

        let extra_holidays = file
            .holidays
            .iter()
            .map(|s| {
                NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").map_err(|_| {
                    Error::Config(ConfigError::ParseError(format!(
                        "Invalid holiday date '{}', expected YYYY-MM-DD",
                        s
                    )))
                })
            })
            .collect::<Result<Vec<_>>>()?;

        let rules = FeeRules {
            max_daily_fee: file.max_daily_fee,
            window_minutes: file.window_minutes,
        };

        Ok(Self {
            tariff: Tariff::new(schedule, exemptions, rules),
            extra_holidays,
        })
    }

    pub fn tariff(&self) -> &Tariff {
        &self.tariff
    }

    pub fn extra_holidays(&self) -> &[NaiveDate] {
        &self.extra_holidays
    }

    pub fn into_parts(self) -> (Tariff, Vec<NaiveDate>) {
        (self.tariff, self.extra_holidays)
    }
}
