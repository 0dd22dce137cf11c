//! Fee report rendering

use chrono::NaiveDate;
use serde::Serialize;
use tollfee_domain::FeeBreakdown;
use tollfee_types::{Result, VehicleCategory};

/// Priced day of passages for one vehicle
#[derive(Debug, Clone, Serialize)]
pub struct FeeReport {
    pub category: VehicleCategory,
    /// Date of the earliest passage
    pub date: Option<NaiveDate>,
    pub passages: usize,
    pub toll_free_vehicle: bool,
    pub breakdown: FeeBreakdown,
}

impl FeeReport {
    pub fn total(&self) -> u32 {
        self.breakdown.total
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl std::fmt::Display for FeeReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "==================================================")?;
        writeln!(f, "                  Toll Fee Report                 ")?;
        writeln!(f, "==================================================")?;
        writeln!(f)?;
        writeln!(f, "  Vehicle:    {}", self.category)?;
        match self.date {
            Some(date) => writeln!(f, "  Date:       {}", date)?,
            None => writeln!(f, "  Date:       -")?,
        }
        writeln!(f, "  Passages:   {}", self.passages)?;
        writeln!(f)?;

        if self.toll_free_vehicle {
            writeln!(f, "  Toll-free vehicle, no fee charged.")?;
        } else if !self.breakdown.windows.is_empty() {
            writeln!(f, "{}", "-".repeat(50))?;
            writeln!(f, "{:<22} {:>10} {:>10}", "Window start", "Passages", "Fee")?;
            writeln!(f, "{}", "-".repeat(50))?;
            for window in &self.breakdown.windows {
                writeln!(
                    f,
                    "{:<22} {:>10} {:>10}",
                    window.start.format("%Y-%m-%d %H:%M:%S").to_string(),
                    window.passages,
                    window.fee
                )?;
            }
            writeln!(f, "{}", "-".repeat(50))?;
            if self.breakdown.is_capped() {
                writeln!(
                    f,
                    "  Uncapped:   {} (daily cap applied)",
                    self.breakdown.uncapped_total
                )?;
            }
        }

        writeln!(f, "  Total:      {}", self.breakdown.total)?;
        writeln!(f, "==================================================")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDateTime;
    use tollfee_domain::ChargeWindow;

    fn at(s: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").unwrap()
    }

    fn capped_report() -> FeeReport {
        FeeReport {
            category: VehicleCategory::Car,
            date: NaiveDate::from_ymd_opt(2025, 7, 28),
            passages: 5,
            toll_free_vehicle: false,
            breakdown: FeeBreakdown {
                windows: vec![
                    ChargeWindow { start: at("2025-07-28 07:00:00"), passages: 2, fee: 18 },
                    ChargeWindow { start: at("2025-07-28 15:30:00"), passages: 1, fee: 18 },
                    ChargeWindow { start: at("2025-07-28 16:45:00"), passages: 1, fee: 18 },
                    ChargeWindow { start: at("2025-07-28 17:50:00"), passages: 1, fee: 13 },
                ],
                uncapped_total: 67,
                total: 60,
            },
        }
    }

    #[test]
    fn test_table_lists_windows() {
        let text = capped_report().to_string();
        assert!(text.contains("Toll Fee Report"));
        assert!(text.contains("2025-07-28 15:30:00"));
        assert!(text.contains("daily cap applied"));
        assert!(text.contains("Total:      60"));
    }

    #[test]
    fn test_toll_free_vehicle_table() {
        let report = FeeReport {
            category: VehicleCategory::Diplomat,
            date: None,
            passages: 0,
            toll_free_vehicle: true,
            breakdown: FeeBreakdown::default(),
        };
        let text = report.to_string();
        assert!(text.contains("Toll-free vehicle"));
        assert!(text.contains("Total:      0"));
    }

    #[test]
    fn test_json() {
        let json = capped_report().to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["category"], "Car");
        assert_eq!(value["date"], "2025-07-28");
        assert_eq!(value["breakdown"]["total"], 60);
        assert_eq!(value["breakdown"]["windows"].as_array().unwrap().len(), 4);
    }
}
