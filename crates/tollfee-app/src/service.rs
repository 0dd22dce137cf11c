//! Toll Service - wires configuration, tariff and calendar into the engine
//!
//! 1. Resolve the tariff (reference, or the configured tariff file)
//! 2. Build the Swedish holiday calendar with the tariff's extra dates
//! 3. Price passages through the domain `TollEngine`

use chrono::NaiveDateTime;
use tracing::info;

use crate::config::Config;
use crate::report::FeeReport;
use tollfee_domain::{FeeBreakdown, Tariff, TollEngine, Vehicle};
use tollfee_infra::{SwedishHolidayCalendar, TariffLoader};
use tollfee_types::Result;

pub struct TollService {
    engine: TollEngine<SwedishHolidayCalendar>,
}

impl TollService {
    pub fn new(tariff: Tariff, calendar: SwedishHolidayCalendar) -> Self {
        Self {
            engine: TollEngine::new(tariff, calendar),
        }
    }

    /// Reference tariff with Swedish holidays and toll-free weekends
    pub fn standard() -> Self {
        Self::new(Tariff::standard(), SwedishHolidayCalendar::new())
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        let (tariff, extra_holidays) = match &config.tariff_file {
            Some(path) => TariffLoader::load_from_file(path)?.into_parts(),
            None => (Tariff::standard(), Vec::new()),
        };

        let source = config
            .tariff_file
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "reference".to_string());
        info!(
            tariff = %source,
            bands = tariff.schedule.bands().len(),
            max_daily_fee = tariff.rules.max_daily_fee,
            weekends_toll_free = config.weekends_toll_free,
            "toll service ready"
        );

        let calendar = SwedishHolidayCalendar::new()
            .with_weekends(config.weekends_toll_free)
            .with_extra_dates(extra_holidays);
        Ok(Self::new(tariff, calendar))
    }

    pub fn total_fee<V: Vehicle + ?Sized>(&self, vehicle: &V, passages: &[NaiveDateTime]) -> u32 {
        self.engine.total_fee(vehicle, passages)
    }

    pub fn breakdown<V: Vehicle + ?Sized>(
        &self,
        vehicle: &V,
        passages: &[NaiveDateTime],
    ) -> FeeBreakdown {
        self.engine.breakdown(vehicle, passages)
    }

    pub fn report<V: Vehicle + ?Sized>(
        &self,
        vehicle: &V,
        passages: &[NaiveDateTime],
    ) -> FeeReport {
        FeeReport {
            category: vehicle.category(),
            date: passages.iter().min().map(|p| p.date()),
            passages: passages.len(),
            toll_free_vehicle: self.engine.is_toll_free_vehicle(vehicle),
            breakdown: self.engine.breakdown(vehicle, passages),
        }
    }
}

impl Default for TollService {
    fn default() -> Self {
        Self::standard()
    }
}
