use chrono::{Datelike, NaiveDate};
use common::ModelKind;
use tracing::trace;

use super::{DemandModel, SeasonalProfile};
use crate::dataset::DailyDemand;

/// Level-times-weekday model fitted on the fly from a pair's history.
///
/// The level is the mean daily demand, optionally weighted towards recent
/// days with an exponential half-life. Each weekday carries a factor equal to
/// its mean demand over the overall mean. Pairs without history fall back to
/// the item's [`SeasonalProfile`].
#[derive(Debug, Clone)]
pub struct ProfileModel {
    kind: ModelKind,
    half_life_days: Option<f64>,
}

impl ProfileModel {
    pub fn new(kind: ModelKind, half_life_days: Option<f64>) -> Self {
        Self {
            kind,
            half_life_days: half_life_days.filter(|h| *h > 0.0),
        }
    }

    fn level(&self, history: &[DailyDemand]) -> f64 {
        let Some(latest) = history.iter().map(|d| d.date).max() else {
            return 0.0;
        };

        let (weighted, total_weight) = history.iter().fold((0.0, 0.0), |(sum, weights), day| {
            let weight = match self.half_life_days {
                Some(half_life) => {
                    let age = (latest - day.date).num_days() as f64;
                    0.5f64.powf(age / half_life)
                }
                None => 1.0,
            };
            (sum + day.quantity * weight, weights + weight)
        });

        if total_weight > 0.0 {
            weighted / total_weight
        } else {
            0.0
        }
    }

    /// Factors indexed by `num_days_from_monday`. Weekdays never observed get 1.
    fn weekday_factors(history: &[DailyDemand]) -> [f64; 7] {
        let mut sums = [0.0; 7];
        let mut counts = [0usize; 7];
        for day in history {
            let idx = day.date.weekday().num_days_from_monday() as usize;
            sums[idx] += day.quantity;
            counts[idx] += 1;
        }

        let overall = history.iter().map(|d| d.quantity).sum::<f64>() / history.len().max(1) as f64;
        let mut factors = [1.0; 7];
        if overall > 0.0 {
            for idx in 0..7 {
                if counts[idx] > 0 {
                    factors[idx] = (sums[idx] / counts[idx] as f64) / overall;
                }
            }
        }
        factors
    }
}

impl DemandModel for ProfileModel {
    fn kind(&self) -> ModelKind {
        self.kind
    }

    fn predict(&self, item: &str, history: &[DailyDemand], dates: &[NaiveDate]) -> Vec<f64> {
        if history.is_empty() {
            trace!(item, "No history, using item profile");
            let profile = SeasonalProfile::for_item(item);
            return dates
                .iter()
                .enumerate()
                .map(|(step, date)| profile.value(step, *date))
                .collect();
        }

        let level = self.level(history);
        let factors = Self::weekday_factors(history);
        trace!(item, level, ?factors, "Fitted profile");

        dates
            .iter()
            .map(|date| {
                let factor = factors[date.weekday().num_days_from_monday() as usize];
                (level * factor).max(0.0)
            })
            .collect()
    }
}
