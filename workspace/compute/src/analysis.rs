//! Analysis of demand histories uploaded by users.
//!
//! Uploaded files carry no fixed schema. Columns are found by keyword: the
//! demand column by `weight`, `quantity`, `qty` or `demand`, the date column by
//! `date` or `time`.

use chrono::{NaiveDate, NaiveDateTime};
use common::{AnalysisSummary, DatasetOverview, DateRange, MonthlyDemand};
use polars::prelude::DataFrame;
use std::collections::{BTreeMap, BTreeSet};
use tracing::{debug, info, instrument, warn};

use crate::error::{ComputeError, Result};
use crate::frame::{column_names, f64_values, read_csv_bytes, string_values};
use crate::settings::AnalysisSettings;
use crate::utils::{
    YearMonth, add_months, find_column, month_abbreviation, months_spanned, parse_date, round2,
    year_month,
};

const DEMAND_KEYWORDS: &[&str] = &["weight", "quantity", "qty", "demand"];
const DATE_KEYWORDS: &[&str] = &["date", "time"];
const CENTER_KEYWORDS: &[&str] = &["center", "centre"];
const PRODUCT_KEYWORDS: &[&str] = &["item", "product"];

/// Monthly demand totals of an upload, gaps filled with zero.
#[derive(Debug, Clone, PartialEq)]
struct MonthlySeries {
    /// `None` when the upload has no usable dates and forms a single period
    first: Option<YearMonth>,
    totals: Vec<f64>,
    /// Rows without a usable date whose demand was spread over the dated months
    undated_rows: usize,
}

impl MonthlySeries {
    fn build(dates: &[Option<NaiveDate>], demand: &[Option<f64>]) -> Self {
        let mut by_month: BTreeMap<YearMonth, f64> = BTreeMap::new();
        let mut undated = 0.0;
        let mut undated_rows = 0;

        for (date, value) in dates.iter().zip(demand) {
            let Some(value) = value else { continue };
            match date {
                Some(date) => *by_month.entry(year_month(*date)).or_insert(0.0) += value,
                None => {
                    undated += value;
                    undated_rows += 1;
                }
            }
        }

        let months = (by_month.keys().next(), by_month.keys().next_back());
        let (Some(&first), Some(&last)) = months else {
            return Self {
                first: None,
                totals: vec![undated],
                undated_rows: 0,
            };
        };

        let span = months_spanned(first, last);
        // Undated demand still counts, evenly over the dated span
        let share = undated / span as f64;
        let totals = (0..span)
            .map(|offset| by_month.get(&add_months(first, offset)).copied().unwrap_or(0.0) + share)
            .collect();
        Self {
            first: Some(first),
            totals,
            undated_rows,
        }
    }

    fn len(&self) -> usize {
        self.totals.len()
    }

    fn average(&self) -> f64 {
        self.totals.iter().sum::<f64>() / self.totals.len().max(1) as f64
    }

    fn last(&self) -> Option<YearMonth> {
        self.first.map(|first| add_months(first, self.totals.len() as u32 - 1))
    }

    fn months(&self) -> impl Iterator<Item = (YearMonth, f64)> + '_ {
        self.first.into_iter().flat_map(move |first| {
            self.totals
                .iter()
                .enumerate()
                .map(move |(offset, total)| (add_months(first, offset as u32), *total))
        })
    }

    /// Growth as a fraction plus the label describing what was compared.
    fn growth(&self) -> (f64, &'static str) {
        let n = self.totals.len();
        let ratio = |recent: f64, prior: f64| if prior > 0.0 { recent / prior - 1.0 } else { 0.0 };

        if n >= 24 {
            let recent: f64 = self.totals[n - 12..].iter().sum();
            let prior: f64 = self.totals[n - 24..n - 12].iter().sum();
            (ratio(recent, prior), "YoY")
        } else if n >= 2 {
            let half = n / 2;
            let prior: f64 = self.totals[..half].iter().sum();
            let recent: f64 = self.totals[n - half..].iter().sum();
            (ratio(recent, prior), "vs prior period")
        } else {
            (0.0, "(stable)")
        }
    }

    /// Average demand of each calendar month relative to the overall average,
    /// indexed by month number minus one. Months never observed get 1.
    fn seasonal_index(&self) -> [f64; 12] {
        let average = self.average();
        let mut sums = [0.0; 12];
        let mut counts = [0usize; 12];
        for ((_, month), total) in self.months() {
            sums[month as usize - 1] += total;
            counts[month as usize - 1] += 1;
        }

        let mut index = [1.0; 12];
        if average > 0.0 {
            for m in 0..12 {
                if counts[m] > 0 {
                    index[m] = sums[m] / counts[m] as f64 / average;
                }
            }
        }
        index
    }

    fn covered_months(&self) -> BTreeSet<u32> {
        self.months().map(|((_, month), _)| month).collect()
    }
}

/// Best three-month calendar window by seasonal index, or the best single
/// month when no window is fully covered.
fn peak_season(index: &[f64; 12], covered: &BTreeSet<u32>) -> String {
    let best_month = covered
        .iter()
        .copied()
        .fold(None, |best: Option<u32>, m| match best {
            Some(b) if index[b as usize - 1] >= index[m as usize - 1] => Some(b),
            _ => Some(m),
        });
    let Some(best_month) = best_month else {
        return "Unknown".to_string();
    };

    let window = |start: u32| [start, start % 12 + 1, (start + 1) % 12 + 1];
    let best_window = (1..=12u32)
        .filter(|start| window(*start).iter().all(|m| covered.contains(m)))
        .map(|start| (start, window(start).iter().map(|m| index[*m as usize - 1]).sum::<f64>()))
        .fold(None, |best: Option<(u32, f64)>, (start, score)| match best {
            Some((_, best_score)) if best_score >= score => best,
            _ => Some((start, score)),
        });

    match best_window {
        Some((start, _)) => {
            let [first, _, last] = window(start);
            format!("{}-{}", month_abbreviation(first), month_abbreviation(last))
        }
        None => month_abbreviation(best_month).to_string(),
    }
}

fn summary_message(months: u32, undated_rows: usize) -> String {
    let message = format!("Generated {}-month forecast from uploaded data", months);
    match undated_rows {
        0 => message,
        1 => format!("{message} (1 row had no usable date)"),
        n => format!("{message} ({n} rows had no usable date)"),
    }
}

/// Computes summaries and overviews of uploaded CSV files.
#[derive(Debug, Clone, Default)]
pub struct UploadAnalyzer {
    settings: AnalysisSettings,
}

impl UploadAnalyzer {
    pub fn new(settings: AnalysisSettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &AnalysisSettings {
        &self.settings
    }

    /// Projects demand `months` months past the last observed month.
    ///
    /// `now` is only used for the generation timestamp and as the origin of
    /// the projection when the upload has no dates.
    #[instrument(skip(self, bytes), fields(size = bytes.len()))]
    pub fn summarize(
        &self,
        bytes: Vec<u8>,
        months: u32,
        now: NaiveDateTime,
    ) -> Result<AnalysisSummary> {
        if months == 0 || months > self.settings.max_months {
            return Err(ComputeError::InvalidHorizon(format!(
                "forecast_months must be between 1 and {}, got {}",
                self.settings.max_months, months
            )));
        }

        let df = read_csv_bytes(bytes)?;
        if df.height() == 0 {
            return Err(ComputeError::EmptyDataset);
        }

        let columns = column_names(&df);
        let demand_column = find_column(&columns, DEMAND_KEYWORDS).ok_or_else(|| {
            ComputeError::MissingColumn(format!(
                "no demand column found (expected a name containing one of: {})",
                DEMAND_KEYWORDS.join(", ")
            ))
        })?;
        let demand = f64_values(&df, demand_column)?;
        let dates = match find_column(&columns, DATE_KEYWORDS) {
            Some(name) => parsed_dates(&df, name)?,
            None => vec![None; df.height()],
        };

        let series = MonthlySeries::build(&dates, &demand);
        let average = series.average();
        let (growth, growth_label) = series.growth();
        let index = series.seasonal_index();
        debug!(months = series.len(), average, growth, "Fitted monthly series");
        if series.undated_rows > 0 {
            warn!(
                "Spread demand of {} rows without a usable date over {} months",
                series.undated_rows,
                series.len()
            );
        }

        let origin = series.last().unwrap_or_else(|| year_month(now.date()));
        let monthly_forecast: Vec<MonthlyDemand> = (1..=months)
            .map(|k| {
                let (year, month) = add_months(origin, k);
                let trend = (1.0 + growth * k as f64 / 12.0).max(0.0);
                MonthlyDemand {
                    month: format!("{:04}-{:02}", year, month),
                    demand: round2((average * index[month as usize - 1] * trend).max(0.0)),
                }
            })
            .collect();

        let estimated_demand = round2(monthly_forecast.iter().map(|m| m.demand).sum());
        let peak_month = monthly_forecast.iter().map(|m| m.demand).fold(0.0, f64::max);
        let recommended_inventory = round2(peak_month * (1.0 + self.settings.safety_stock_ratio));

        info!(
            "Analyzed {} records over {} months: {} {} projected",
            df.height(),
            series.len(),
            estimated_demand,
            self.settings.unit
        );

        Ok(AnalysisSummary {
            status: "success".to_string(),
            message: summary_message(months, series.undated_rows),
            total_months: months,
            forecast_generated: now.format("%Y-%m-%d %H:%M:%S").to_string(),
            estimated_demand,
            recommended_inventory,
            unit: self.settings.unit.clone(),
            peak_season: peak_season(&index, &series.covered_months()),
            growth_trend: format!("{:+.1}% {}", growth * 100.0, growth_label),
            growth_rate: growth,
            records_analyzed: df.height(),
            monthly_forecast,
        })
    }

    /// Describes the structure of an upload: columns, date range, distinct
    /// centers and products, and total demand.
    #[instrument(skip(self, bytes), fields(size = bytes.len()))]
    pub fn overview(&self, bytes: Vec<u8>) -> Result<DatasetOverview> {
        let df = read_csv_bytes(bytes)?;
        let columns = column_names(&df);

        let date_range = match find_column(&columns, DATE_KEYWORDS) {
            Some(name) => {
                let dates: Vec<NaiveDate> =
                    parsed_dates(&df, name)?.into_iter().flatten().collect();
                match (dates.iter().min(), dates.iter().max()) {
                    (Some(start), Some(end)) => Some(DateRange {
                        start: *start,
                        end: *end,
                    }),
                    _ => None,
                }
            }
            None => None,
        };

        let total_demand = match find_column(&columns, DEMAND_KEYWORDS) {
            Some(name) => round2(f64_values(&df, name)?.into_iter().flatten().sum()),
            None => 0.0,
        };

        let overview = DatasetOverview {
            total_records: df.height(),
            date_range,
            centers: distinct_values(&df, &columns, CENTER_KEYWORDS)?,
            products: distinct_values(&df, &columns, PRODUCT_KEYWORDS)?,
            total_demand,
            recommendations: vec![
                "Data uploaded successfully for analysis".to_string(),
                format!("Found {} records for processing", df.height()),
                "Ready to generate next year forecasts".to_string(),
                "Seasonal patterns will be analyzed automatically".to_string(),
            ],
            columns,
        };
        Ok(overview)
    }
}

fn parsed_dates(df: &DataFrame, column: &str) -> Result<Vec<Option<NaiveDate>>> {
    Ok(string_values(df, column)?
        .into_iter()
        .map(|raw| raw.as_deref().and_then(parse_date))
        .collect())
}

fn distinct_values(df: &DataFrame, columns: &[String], keywords: &[&str]) -> Result<Vec<String>> {
    let Some(name) = find_column(columns, keywords) else {
        return Ok(Vec::new());
    };
    let values: BTreeSet<String> = string_values(df, name)?
        .into_iter()
        .flatten()
        .filter(|v| !v.is_empty())
        .collect();
    Ok(values.into_iter().collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 6, 1)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    fn analyzer() -> UploadAnalyzer {
        UploadAnalyzer::default()
    }

    /// One row per month from Jan 2023 for `months` months, `value(i)` each.
    fn monthly_csv(months: u32, value: impl Fn(u32) -> f64) -> Vec<u8> {
        let mut csv = String::from("date,center,item,qty\n");
        for i in 0..months {
            let (year, month) = add_months((2023, 1), i);
            csv.push_str(&format!("{:04}-{:02}-15,VASAI,MUNDI,{}\n", year, month, value(i)));
        }
        csv.into_bytes()
    }

    #[test]
    fn basic_upload_gives_non_negative_summary() {
        let csv = b"date,center,item,qty\n\
            2024-01-05,VASAI,MUNDI,120\n\
            2024-02-05,VASAI,MUNDI,80\n\
            2024-03-05,UTTAN,BOMBIL,100\n";
        let summary = analyzer().summarize(csv.to_vec(), 12, now()).unwrap();

        assert_eq!(summary.status, "success");
        assert_eq!(summary.total_months, 12);
        assert_eq!(summary.records_analyzed, 3);
        assert_eq!(summary.monthly_forecast.len(), 12);
        assert_eq!(summary.monthly_forecast[0].month, "2024-04");
        assert!(summary.estimated_demand >= 0.0);
        assert!(summary.recommended_inventory >= 0.0);
        assert_eq!(summary.forecast_generated, "2025-06-01 12:00:00");
        assert_eq!(summary.unit, "kg");
    }

    #[test]
    fn flat_history_projects_its_average() {
        let summary = analyzer().summarize(monthly_csv(12, |_| 100.0), 6, now()).unwrap();
        assert_eq!(summary.growth_rate, 0.0);
        assert_eq!(summary.estimated_demand, 600.0);
        assert_eq!(summary.recommended_inventory, 120.0);
        assert!(summary.growth_trend.ends_with("vs prior period"));
    }

    #[test]
    fn two_years_use_year_over_year_growth() {
        // 100 a month in 2023, 110 in 2024
        let csv = monthly_csv(24, |i| if i < 12 { 100.0 } else { 110.0 });
        let summary = analyzer().summarize(csv, 12, now()).unwrap();
        assert!((summary.growth_rate - 0.1).abs() < 1e-9);
        assert_eq!(summary.growth_trend, "+10.0% YoY");
        assert_eq!(summary.monthly_forecast[0].month, "2025-01");
    }

    #[test]
    fn peak_season_picks_busiest_window() {
        let csv = monthly_csv(12, |i| if (5..8).contains(&i) { 500.0 } else { 100.0 });
        let summary = analyzer().summarize(csv, 12, now()).unwrap();
        assert_eq!(summary.peak_season, "Jun-Aug");
    }

    #[test]
    fn peak_window_wraps_the_year() {
        let csv = monthly_csv(12, |i| if i == 0 || i == 1 || i == 11 { 500.0 } else { 100.0 });
        let summary = analyzer().summarize(csv, 3, now()).unwrap();
        assert_eq!(summary.peak_season, "Dec-Feb");
    }

    #[test]
    fn short_or_undated_uploads() {
        let single = b"date,qty\n2024-05-01,40\n2024-05-20,60\n";
        let summary = analyzer().summarize(single.to_vec(), 2, now()).unwrap();
        assert_eq!(summary.peak_season, "May");
        assert_eq!(summary.growth_trend, "+0.0% (stable)");
        assert_eq!(summary.estimated_demand, 200.0);

        let undated = b"center,demand\nVASAI,10\nUTTAN,30\n";
        let summary = analyzer().summarize(undated.to_vec(), 1, now()).unwrap();
        assert_eq!(summary.peak_season, "Unknown");
        assert_eq!(summary.monthly_forecast[0].month, "2025-07");
        assert_eq!(summary.estimated_demand, 40.0);
    }

    #[test]
    fn rows_with_unreadable_dates_still_count() {
        let csv = b"date,qty\n2024-01-05,100\nJan 20 2024,900\n2024-02-05,100\n";
        let summary = analyzer().summarize(csv.to_vec(), 2, now()).unwrap();

        assert_eq!(summary.records_analyzed, 3);
        assert_eq!(summary.monthly_forecast[0].month, "2024-03");
        // 1100 over two observed months
        assert_eq!(summary.estimated_demand, 1100.0);
        assert!(summary.message.ends_with("(1 row had no usable date)"));

        let clean = analyzer().summarize(monthly_csv(3, |_| 1.0), 2, now()).unwrap();
        assert_eq!(clean.message, "Generated 2-month forecast from uploaded data");
    }

    #[test]
    fn analysis_failures() {
        let no_demand = b"date,center\n2024-01-01,VASAI\n";
        assert!(matches!(
            analyzer().summarize(no_demand.to_vec(), 12, now()),
            Err(ComputeError::MissingColumn(_))
        ));

        let header_only = b"date,qty\n";
        assert!(analyzer().summarize(header_only.to_vec(), 12, now()).is_err());

        assert!(matches!(
            analyzer().summarize(monthly_csv(3, |_| 1.0), 61, now()),
            Err(ComputeError::InvalidHorizon(_))
        ));
    }

    #[test]
    fn overview_describes_columns_and_values() {
        let csv = b"DATE,CENTER NAME,ITEM,PAY WEIGHT\n\
            2024-01-05,VASAI,MUNDI,10.5\n\
            2024-03-01,UTTAN,BOMBIL,4.5\n\
            2024-02-01,VASAI,BOMBIL,5\n";
        let overview = analyzer().overview(csv.to_vec()).unwrap();

        assert_eq!(overview.total_records, 3);
        assert_eq!(overview.columns, vec!["DATE", "CENTER NAME", "ITEM", "PAY WEIGHT"]);
        let range = overview.date_range.unwrap();
        assert_eq!(range.start, NaiveDate::from_ymd_opt(2024, 1, 5).unwrap());
        assert_eq!(range.end, NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());
        assert_eq!(overview.centers, vec!["UTTAN", "VASAI"]);
        assert_eq!(overview.products, vec!["BOMBIL", "MUNDI"]);
        assert_eq!(overview.total_demand, 20.0);
        assert_eq!(overview.recommendations[1], "Found 3 records for processing");
    }
}
