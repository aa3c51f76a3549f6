use std::collections::{BTreeMap, BTreeSet};
use tracing::debug;

use crate::dataset::HistoryDataset;
use crate::settings::CatalogSettings;

/// Where the selectable centers and items came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogSource {
    History,
    Fallback,
}

/// Sorted, deduplicated sets of centers and items.
#[derive(Debug, Clone)]
pub struct Catalog {
    centers: Vec<String>,
    items: Vec<String>,
    /// Items observed per center; only filled from history
    items_by_center: BTreeMap<String, BTreeSet<String>>,
    source: CatalogSource,
}

impl Catalog {
    /// Builds the catalog from history, or from the configured fallback
    /// lists when no history was loaded.
    pub fn new(dataset: &HistoryDataset, fallback: &CatalogSettings) -> Self {
        if dataset.is_empty() {
            debug!("Using fallback catalog");
            return Self {
                centers: normalized(&fallback.centers),
                items: normalized(&fallback.items),
                items_by_center: BTreeMap::new(),
                source: CatalogSource::Fallback,
            };
        }

        let mut items_by_center: BTreeMap<String, BTreeSet<String>> = BTreeMap::new();
        let mut items = BTreeSet::new();
        for (center, item) in dataset.pairs() {
            items_by_center
                .entry(center.to_string())
                .or_default()
                .insert(item.to_string());
            items.insert(item.to_string());
        }

        Self {
            centers: items_by_center.keys().cloned().collect(),
            items: items.into_iter().collect(),
            items_by_center,
            source: CatalogSource::History,
        }
    }

    pub fn source(&self) -> CatalogSource {
        self.source
    }

    pub fn centers(&self) -> &[String] {
        &self.centers
    }

    /// Items, optionally limited to those observed at one center.
    ///
    /// The fallback catalog has no center association, so a known center
    /// sees every item. Unknown centers see nothing.
    pub fn items(&self, center: Option<&str>) -> Vec<String> {
        match (center, self.source) {
            (None, _) => self.items.clone(),
            (Some(center), CatalogSource::History) => self
                .items_by_center
                .get(center)
                .map(|items| items.iter().cloned().collect())
                .unwrap_or_default(),
            (Some(center), CatalogSource::Fallback) => {
                if self.contains_center(center) {
                    self.items.clone()
                } else {
                    Vec::new()
                }
            }
        }
    }

    pub fn contains_center(&self, center: &str) -> bool {
        self.centers.binary_search_by(|c| c.as_str().cmp(center)).is_ok()
    }

    pub fn contains_item(&self, item: &str) -> bool {
        self.items.binary_search_by(|i| i.as_str().cmp(item)).is_ok()
    }

    /// Whether `item` can be forecast at `center`.
    ///
    /// History catalogs only accept pairs that were observed together.
    pub fn contains_pair(&self, center: &str, item: &str) -> bool {
        match self.source {
            CatalogSource::History => self
                .items_by_center
                .get(center)
                .is_some_and(|items| items.contains(item)),
            CatalogSource::Fallback => self.contains_center(center) && self.contains_item(item),
        }
    }
}

fn normalized(names: &[String]) -> Vec<String> {
    let set: BTreeSet<String> = names
        .iter()
        .map(|name| name.trim().to_string())
        .filter(|name| !name.is_empty())
        .collect();
    set.into_iter().collect()
}
