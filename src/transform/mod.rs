//! Record transformations.
//!
//! Provides grouping, per-day averages, rolling averages, percentage
//! change, min-max normalization, ranking and joins over [`Record`]s.
//! Every function is pure: inputs are borrowed and never modified.
//!
//! # Example
//!
//! ```
//! use coinframe::core::{Field, Record};
//! use coinframe::transform::{daily_percent_change_by_coin, normalize_by_coin};
//!
//! let records = vec![
//!     Record::new("2024-01-01", "BTC", 100.0, 10.0, 1000.0),
//!     Record::new("2024-01-02", "BTC", 200.0, 10.0, 1000.0),
//! ];
//!
//! let change = daily_percent_change_by_coin(&records, Field::Price.accessor());
//! assert_eq!(change[0].change, 100.0);
//!
//! let normalized = normalize_by_coin(&records, Field::Price.accessor());
//! assert_eq!(normalized[1].normalized, 1.0);
//! ```
//!
//! [`Record`]: crate::core::Record

pub mod aggregate;
pub mod change;
pub mod group;
pub mod join;
pub mod rank;
pub mod scale;
pub mod window;

pub use aggregate::{average_by_day, average_price_by_day, mean, DailyAverage};
pub use change::{daily_percent_change_by_coin, percent_change, PercentChange};
pub use group::{group_by_coin, group_by_date, group_by_key, sort_chronologically, Groups};
pub use join::{join_by_date_coin, Overlay};
pub use rank::{top_n_by, top_n_by_market_cap, DEFAULT_TOP_N};
pub use scale::{min_max, min_max_scale, normalize_by_coin, NormalizedValue};
pub use window::{rolling_average_by_coin, trailing_mean, RollingValue, DEFAULT_WINDOW_SIZE};
