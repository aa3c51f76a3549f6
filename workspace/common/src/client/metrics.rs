/// A metric card shown on the dashboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetricEntry {
    pub label: String,
    pub value: String,
}

/// Metrics currently on screen plus a presentation refresh counter.
///
/// The dashboard timer calls [`MetricsPanel::refreshed`] on a fixed interval.
/// It only re-reads what is already displayed and never talks to the API.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MetricsPanel {
    entries: Vec<MetricEntry>,
    refresh_count: u64,
}

impl MetricsPanel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces the metric with the given label.
    pub fn set(&mut self, label: impl Into<String>, value: impl Into<String>) {
        let label = label.into();
        let value = value.into();
        match self.entries.iter_mut().find(|e| e.label == label) {
            Some(entry) => entry.value = value,
            None => self.entries.push(MetricEntry { label, value }),
        }
    }

    pub fn get(&self, label: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|e| e.label == label)
            .map(|e| e.value.as_str())
    }

    pub fn entries(&self) -> &[MetricEntry] {
        &self.entries
    }

    pub fn refresh_count(&self) -> u64 {
        self.refresh_count
    }

    /// Copy of the panel with the same metrics and a bumped refresh counter.
    pub fn refreshed(&self) -> Self {
        Self {
            entries: self.entries.clone(),
            refresh_count: self.refresh_count + 1,
        }
    }
}
