use chrono::{Datelike, NaiveDate, Weekday};

const WEEKEND_UPLIFT: f64 = 1.2;
const FLOOR: f64 = 100.0;

/// Item-level demand curve used when a pair has no history.
///
/// A base level plus a sinusoid whose amplitude and frequency depend on the
/// item name, lifted by 20% on weekends and never below 100.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeasonalProfile {
    base: f64,
    amplitude: f64,
    frequency: f64,
}

impl SeasonalProfile {
    pub fn for_item(item: &str) -> Self {
        let upper = item.to_uppercase();
        let (base, amplitude, frequency) = if upper.contains("CHILAPI") {
            (1500.0, 300.0, 0.2)
        } else if upper.contains("MIX FISH") {
            (2000.0, 400.0, 0.15)
        } else if upper.contains("PRAWN") {
            (800.0, 200.0, 0.25)
        } else if upper.contains("MUNDI") {
            (600.0, 150.0, 0.3)
        } else {
            (1000.0, 200.0, 0.1)
        };
        Self {
            base,
            amplitude,
            frequency,
        }
    }

    /// Demand on `date`, the `step`-th day of the horizon (0-based).
    pub fn value(&self, step: usize, date: NaiveDate) -> f64 {
        let mut demand = self.base + (step as f64 * self.frequency).sin() * self.amplitude;
        if matches!(date.weekday(), Weekday::Sat | Weekday::Sun) {
            demand *= WEEKEND_UPLIFT;
        }
        demand.max(FLOOR)
    }
}
