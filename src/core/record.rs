//! Per-day, per-asset observations and typed column access.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TransformError;

/// One observation of an asset's price, volume and market cap on one date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    /// Calendar date, `YYYY-MM-DD` or an RFC 3339 timestamp
    pub date: String,
    /// Asset identifier
    pub coin: String,
    pub price: f64,
    pub volume: f64,
    pub market_cap: f64,
}

impl Record {
    /// Create a new record.
    pub fn new(
        date: impl Into<String>,
        coin: impl Into<String>,
        price: f64,
        volume: f64,
        market_cap: f64,
    ) -> Self {
        Self {
            date: date.into(),
            coin: coin.into(),
            price,
            volume,
            market_cap,
        }
    }

    /// Read a numeric column.
    pub fn get(&self, field: Field) -> f64 {
        field.get(self)
    }
}

/// A join row that may carry only some of the numeric columns.
///
/// Absent columns leave the joined record untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecordPatch {
    pub date: String,
    pub coin: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub volume: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub market_cap: Option<f64>,
}

impl RecordPatch {
    /// Create an empty patch for the given date and coin.
    pub fn new(date: impl Into<String>, coin: impl Into<String>) -> Self {
        Self {
            date: date.into(),
            coin: coin.into(),
            ..Default::default()
        }
    }

    /// Set the price column.
    pub fn price(mut self, price: f64) -> Self {
        self.price = Some(price);
        self
    }

    /// Set the volume column.
    pub fn volume(mut self, volume: f64) -> Self {
        self.volume = Some(volume);
        self
    }

    /// Set the market cap column.
    pub fn market_cap(mut self, market_cap: f64) -> Self {
        self.market_cap = Some(market_cap);
        self
    }
}

impl From<Record> for RecordPatch {
    fn from(record: Record) -> Self {
        Self {
            date: record.date,
            coin: record.coin,
            price: Some(record.price),
            volume: Some(record.volume),
            market_cap: Some(record.market_cap),
        }
    }
}

/// Numeric column of a [`Record`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    #[default]
    Price,
    Volume,
    MarketCap,
}

impl Field {
    /// All numeric columns.
    pub const ALL: [Field; 3] = [Field::Price, Field::Volume, Field::MarketCap];

    /// Read this column from a record.
    pub fn get(self, record: &Record) -> f64 {
        match self {
            Field::Price => record.price,
            Field::Volume => record.volume,
            Field::MarketCap => record.market_cap,
        }
    }

    /// Accessor closure suitable for the transform functions.
    pub fn accessor(self) -> impl Fn(&Record) -> f64 + Copy {
        move |record: &Record| self.get(record)
    }

    /// Column name as it appears in serialized records.
    pub fn name(self) -> &'static str {
        match self {
            Field::Price => "price",
            Field::Volume => "volume",
            Field::MarketCap => "market_cap",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Field {
    type Err = TransformError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "price" => Ok(Field::Price),
            "volume" => Ok(Field::Volume),
            "market_cap" | "marketcap" | "market-cap" => Ok(Field::MarketCap),
            other => Err(TransformError::InvalidParameter(format!(
                "unknown field '{}'",
                other
            ))),
        }
    }
}
