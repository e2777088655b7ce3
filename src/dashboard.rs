//! Every analytical view of a record set, computed in one pass.
//!
//! Mirrors what a chart and table front end needs from one batch of
//! records: per-day averages, a rolling series, the market cap leaders,
//! day-over-day change, a normalized series and a self-join.

use log::debug;
use serde::Serialize;

use crate::core::{Field, Record};
use crate::error::{Result, TransformError};
use crate::transform::{
    average_price_by_day, daily_percent_change_by_coin, group_by_coin, join_by_date_coin,
    normalize_by_coin, rolling_average_by_coin, top_n_by_market_cap, DailyAverage,
    NormalizedValue, PercentChange, RollingValue, DEFAULT_TOP_N, DEFAULT_WINDOW_SIZE,
};

/// Configuration for [`Dashboard::compute`].
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardConfig {
    /// Column used by the rolling, change and normalized views
    pub field: Field,
    /// Rolling average window size
    pub window_size: usize,
    /// Number of records in the market cap ranking
    pub top_n: usize,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            field: Field::Price,
            window_size: DEFAULT_WINDOW_SIZE,
            top_n: DEFAULT_TOP_N,
        }
    }
}

impl DashboardConfig {
    /// Create a config with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the column to analyze.
    pub fn field(mut self, field: Field) -> Self {
        self.field = field;
        self
    }

    /// Set the rolling window size.
    pub fn window_size(mut self, window_size: usize) -> Self {
        self.window_size = window_size;
        self
    }

    /// Set the number of top records.
    pub fn top_n(mut self, top_n: usize) -> Self {
        self.top_n = top_n;
        self
    }

    /// Check that every setting is usable.
    pub fn validate(&self) -> Result<()> {
        if self.window_size == 0 {
            return Err(TransformError::InvalidParameter(
                "window_size must be positive".to_string(),
            ));
        }
        if self.top_n == 0 {
            return Err(TransformError::InvalidParameter(
                "top_n must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

/// Derived views of one record set.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dashboard {
    pub daily_average: Vec<DailyAverage>,
    pub rolling: Vec<RollingValue>,
    pub top_by_market_cap: Vec<Record>,
    pub daily_change: Vec<PercentChange>,
    pub normalized: Vec<NormalizedValue>,
    pub joined: Vec<Record>,
}

impl Dashboard {
    /// Compute every view over `records`.
    pub fn compute(records: &[Record], config: &DashboardConfig) -> Result<Self> {
        config.validate()?;
        debug!(
            "computing dashboard over {} records (field={}, window={}, top_n={})",
            records.len(),
            config.field,
            config.window_size,
            config.top_n
        );

        let field = config.field.accessor();
        let dashboard = Self {
            daily_average: average_price_by_day(records),
            rolling: rolling_average_by_coin(records, field, config.window_size),
            top_by_market_cap: top_n_by_market_cap(records, config.top_n),
            daily_change: daily_percent_change_by_coin(records, field),
            normalized: normalize_by_coin(records, field),
            joined: join_by_date_coin(records, records),
        };

        debug!(
            "dashboard ready: {} days, {} rolling points, {} changes",
            dashboard.daily_average.len(),
            dashboard.rolling.len(),
            dashboard.daily_change.len()
        );
        Ok(dashboard)
    }

    /// Distinct coins present, in first-seen order.
    pub fn coins(&self) -> Vec<&str> {
        group_by_coin(&self.joined).keys().copied().collect()
    }

    /// Serialize every view as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
