use serde::Serialize;
use std::collections::BTreeMap;

use crate::services::footprint::FootprintBand;

pub const FALLBACK_KEY: &str = "fallback";

#[derive(Debug, Default, Clone, Serialize, PartialEq)]
pub struct MetricsData {
    pub keyword_usage: BTreeMap<String, u64>,
    pub band_usage: BTreeMap<String, u64>,
    pub rejected_calculations: u64,
}

/// Counters for the current run; single-threaded, so plain `&mut` access.
#[derive(Debug, Default, Clone)]
pub struct MetricsManager {
    inner: MetricsData,
}

impl MetricsManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment_keyword(&mut self, keyword: Option<&str>) {
        let key = keyword.unwrap_or(FALLBACK_KEY);
        *self.inner.keyword_usage.entry(key.to_string()).or_insert(0) += 1;
    }

    pub fn increment_band(&mut self, band: FootprintBand) {
        *self
            .inner
            .band_usage
            .entry(band.as_str().to_string())
            .or_insert(0) += 1;
    }

    pub fn increment_rejected(&mut self) {
        self.inner.rejected_calculations += 1;
    }

    pub fn get_metrics(&self) -> &MetricsData {
        &self.inner
    }
}
