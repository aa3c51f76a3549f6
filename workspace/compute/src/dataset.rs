use chrono::NaiveDate;
use std::collections::BTreeMap;
use std::path::Path;
use tracing::{debug, info, instrument, warn};

use crate::error::{ComputeError, Result};
use crate::frame::{column_names, f64_values, read_csv_bytes, string_values};
use crate::settings::DatasetColumns;
use crate::utils::parse_date;

/// One row of historical demand.
#[derive(Debug, Clone, PartialEq)]
pub struct Observation {
    pub date: NaiveDate,
    pub center: String,
    pub item: String,
    pub quantity: f64,
}

/// Total demand of a (center, item) pair on one day.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DailyDemand {
    pub date: NaiveDate,
    pub quantity: f64,
}

/// Historical demand loaded once at start-up and read-only afterwards.
///
/// Observations are kept aggregated per (center, item) and per day,
/// sorted by date ascending.
#[derive(Debug, Clone, Default)]
pub struct HistoryDataset {
    daily: BTreeMap<(String, String), Vec<DailyDemand>>,
    observations: usize,
}

impl HistoryDataset {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn from_observations(observations: impl IntoIterator<Item = Observation>) -> Self {
        let mut per_day: BTreeMap<(String, String), BTreeMap<NaiveDate, f64>> = BTreeMap::new();
        let mut count = 0;

        for obs in observations {
            count += 1;
            *per_day
                .entry((obs.center, obs.item))
                .or_default()
                .entry(obs.date)
                .or_insert(0.0) += obs.quantity;
        }

        let daily = per_day
            .into_iter()
            .map(|(key, days)| {
                let series = days
                    .into_iter()
                    .map(|(date, quantity)| DailyDemand { date, quantity })
                    .collect();
                (key, series)
            })
            .collect();

        Self {
            daily,
            observations: count,
        }
    }

    /// Parses history from CSV bytes using the configured column names.
    ///
    /// Rows with an unparseable date, an empty center/item or a non-numeric
    /// quantity are skipped.
    #[instrument(skip(bytes, columns), fields(size = bytes.len()))]
    pub fn from_csv_bytes(bytes: Vec<u8>, columns: &DatasetColumns) -> Result<Self> {
        let df = read_csv_bytes(bytes)?;
        let names = column_names(&df);

        for required in [
            &columns.date_column,
            &columns.center_column,
            &columns.item_column,
            &columns.target_column,
        ] {
            if !names.iter().any(|n| n == required) {
                return Err(ComputeError::MissingColumn(format!(
                    "history dataset has no '{}' column",
                    required
                )));
            }
        }

        let dates = string_values(&df, &columns.date_column)?;
        let centers = string_values(&df, &columns.center_column)?;
        let items = string_values(&df, &columns.item_column)?;
        let quantities = f64_values(&df, &columns.target_column)?;

        let mut skipped = 0usize;
        let mut observations = Vec::with_capacity(df.height());

        let rows = dates.into_iter().zip(centers).zip(items).zip(quantities);
        for (((date, center), item), quantity) in rows {
            let parsed = (
                date.as_deref().and_then(parse_date),
                center.filter(|c| !c.is_empty()),
                item.filter(|i| !i.is_empty()),
                quantity,
            );
            match parsed {
                (Some(date), Some(center), Some(item), Some(quantity)) => {
                    observations.push(Observation {
                        date,
                        center,
                        item,
                        quantity,
                    })
                }
                _ => skipped += 1,
            }
        }

        if skipped > 0 {
            warn!("Skipped {} history rows with missing or invalid values", skipped);
        }
        debug!("Parsed {} history observations", observations.len());

        Ok(Self::from_observations(observations))
    }

    /// Loads the history file. A missing file yields an empty dataset.
    #[instrument(skip(columns))]
    pub fn load(path: &Path, columns: &DatasetColumns) -> Result<Self> {
        if !path.exists() {
            warn!("History dataset {} not found, starting without history", path.display());
            return Ok(Self::empty());
        }

        let bytes = std::fs::read(path)?;
        let dataset = Self::from_csv_bytes(bytes, columns)?;
        info!(
            "Loaded {} observations for {} center/item pairs from {}",
            dataset.len(),
            dataset.pair_count(),
            path.display()
        );
        Ok(dataset)
    }

    /// Number of raw observations that were loaded.
    pub fn len(&self) -> usize {
        self.observations
    }

    pub fn is_empty(&self) -> bool {
        self.observations == 0
    }

    pub fn pair_count(&self) -> usize {
        self.daily.len()
    }

    /// (center, item) pairs present in the history.
    pub fn pairs(&self) -> impl Iterator<Item = (&str, &str)> {
        self.daily.keys().map(|(c, i)| (c.as_str(), i.as_str()))
    }

    /// Daily demand of a pair, date ascending. Empty when unseen.
    pub fn daily_series(&self, center: &str, item: &str) -> &[DailyDemand] {
        self.daily
            .get(&(center.to_string(), item.to_string()))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn columns() -> DatasetColumns {
        DatasetColumns::default()
    }

    #[test]
    fn aggregates_rows_per_day() {
        let csv = "DATE,CENTER NAME,ITEM,PAY WEIGHT\n\
                   2024-01-01,VASAI,MUNDI,10\n\
                   2024-01-01,VASAI,MUNDI,5\n\
                   2024-01-02,VASAI,MUNDI,7\n\
                   2024-01-01,UTTAN,BOMBIL,3\n";
        let dataset = HistoryDataset::from_csv_bytes(csv.as_bytes().to_vec(), &columns()).unwrap();

        assert_eq!(dataset.len(), 4);
        assert_eq!(dataset.pair_count(), 2);

        let series = dataset.daily_series("VASAI", "MUNDI");
        assert_eq!(series.len(), 2);
        assert_eq!(series[0].quantity, 15.0);
        assert!(series[0].date < series[1].date);
    }

    #[test]
    fn skips_invalid_rows() {
        let csv = "DATE,CENTER NAME,ITEM,PAY WEIGHT\n\
                   not-a-date,VASAI,MUNDI,10\n\
                   2024-01-01,,MUNDI,5\n\
                   2024-01-02,VASAI,MUNDI,7\n";
        let dataset = HistoryDataset::from_csv_bytes(csv.as_bytes().to_vec(), &columns()).unwrap();
        assert_eq!(dataset.len(), 1);
    }

    #[test]
    fn missing_required_column_is_reported() {
        let csv = "DATE,ITEM,PAY WEIGHT\n2024-01-01,MUNDI,3\n";
        let err = HistoryDataset::from_csv_bytes(csv.as_bytes().to_vec(), &columns()).unwrap_err();
        assert!(matches!(err, ComputeError::MissingColumn(_)));
    }

    #[test]
    fn missing_file_gives_empty_dataset() {
        let dataset = HistoryDataset::load(Path::new("does/not/exist.csv"), &columns()).unwrap();
        assert!(dataset.is_empty());
        assert!(dataset.daily_series("VASAI", "MUNDI").is_empty());
    }
}
