//! Toll engine: prices one vehicle's passages for a day
//!
//! Passages are sorted, grouped into charge windows anchored at the first
//! passage of each window, billed once per window at the highest fee inside
//! it, and the sum is capped by the tariff's daily maximum.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::TollFreeCalendar;
use crate::model::{Tariff, Vehicle};

/// A cluster of passages billed as one charge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChargeWindow {
    /// First passage of the window; later passages are measured from here
    pub start: NaiveDateTime,
    pub passages: usize,
    pub fee: u32,
}

impl ChargeWindow {
    fn open(start: NaiveDateTime, fee: u32) -> Self {
        Self {
            start,
            passages: 1,
            fee,
        }
    }

    fn absorb(&mut self, fee: u32) {
        self.passages += 1;
        self.fee = self.fee.max(fee);
    }
}

/// Result of pricing one day of passages
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeeBreakdown {
    pub windows: Vec<ChargeWindow>,
    pub uncapped_total: u32,
    pub total: u32,
}

impl FeeBreakdown {
    pub fn is_capped(&self) -> bool {
        self.total < self.uncapped_total
    }
}

pub struct TollEngine<C> {
    tariff: Tariff,
    calendar: C,
}

impl<C: TollFreeCalendar> TollEngine<C> {
    pub fn new(tariff: Tariff, calendar: C) -> Self {
        Self { tariff, calendar }
    }

    /// Engine over the reference tariff
    pub fn standard(calendar: C) -> Self {
        Self::new(Tariff::standard(), calendar)
    }

    pub fn is_toll_free_vehicle<V: Vehicle + ?Sized>(&self, vehicle: &V) -> bool {
        self.tariff.exemptions.is_exempt(vehicle.category())
    }

    /// Fee for a single passage, ignoring any other passages that day
    pub fn fee_for_passage<V: Vehicle + ?Sized>(&self, vehicle: &V, passage: NaiveDateTime) -> u32 {
        if self.is_toll_free_vehicle(vehicle) {
            return 0;
        }
        self.passage_fee(passage)
    }

    /// Total fee owed for the passages, between 0 and the daily cap
    pub fn total_fee<V: Vehicle + ?Sized>(&self, vehicle: &V, passages: &[NaiveDateTime]) -> u32 {
        self.breakdown(vehicle, passages).total
    }

    /// Price the passages and keep the charge windows that produced the total
    pub fn breakdown<V: Vehicle + ?Sized>(
        &self,
        vehicle: &V,
        passages: &[NaiveDateTime],
    ) -> FeeBreakdown {
        if passages.is_empty() {
            return FeeBreakdown::default();
        }

        let category = vehicle.category();
        if self.tariff.exemptions.is_exempt(category) {
            debug!(%category, passages = passages.len(), "toll-free vehicle");
            return FeeBreakdown::default();
        }

        let mut sorted = passages.to_vec();
        sorted.sort();

        let (first, last) = (sorted[0], sorted[sorted.len() - 1]);
        if first.date() != last.date() {
            warn!(
                first = %first.date(),
                last = %last.date(),
                "passages span more than one day, pricing each by its own date"
            );
        }

        let window = self.tariff.rules.window();
        let mut windows = Vec::new();
        let mut current = ChargeWindow::open(first, self.passage_fee(first));

        for &passage in &sorted[1..] {
            let fee = self.passage_fee(passage);
            if passage - current.start <= window {
                current.absorb(fee);
            } else {
                debug!(
                    start = %current.start,
                    passages = current.passages,
                    fee = current.fee,
                    "charge window closed"
                );
                windows.push(current);
                current = ChargeWindow::open(passage, fee);
            }
        }
        debug!(
            start = %current.start,
            passages = current.passages,
            fee = current.fee,
            "charge window closed"
        );
        windows.push(current);

        let uncapped_total = windows
            .iter()
            .fold(0u32, |acc, w| acc.saturating_add(w.fee));
        let total = uncapped_total.min(self.tariff.rules.max_daily_fee);
        if total < uncapped_total {
            debug!(uncapped_total, total, "daily cap applied");
        }

        FeeBreakdown {
            windows,
            uncapped_total,
            total,
        }
    }

    fn passage_fee(&self, passage: NaiveDateTime) -> u32 {
        if self.calendar.is_toll_free(passage.date()) {
            return 0;
        }
        self.tariff.schedule.fee_for_time(passage.time())
    }
}
