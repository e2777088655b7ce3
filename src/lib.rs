//! # coinframe
//!
//! Time series transformations over per-day, per-asset market records.
//!
//! Provides grouping by asset or date, daily cross-asset averages, trailing
//! moving averages, day-over-day percentage change, min-max normalization,
//! top-N ranking and `(date, coin)` joins. All transformations are pure
//! functions over borrowed slices.

pub mod core;
pub mod dashboard;
pub mod error;
pub mod transform;

pub use error::{Result, TransformError};

pub mod prelude {
    pub use crate::core::{records_from_json, records_to_json, Field, Record, RecordPatch};
    pub use crate::dashboard::{Dashboard, DashboardConfig};
    pub use crate::error::{Result, TransformError};
    pub use crate::transform::{
        average_price_by_day, daily_percent_change_by_coin, group_by_key, join_by_date_coin,
        normalize_by_coin, rolling_average_by_coin, top_n_by_market_cap,
    };
}
