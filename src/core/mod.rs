//! Core record types.

mod date;
mod load;
mod record;

pub use date::{date_key, parse_date, DateKey};
pub use load::{records_from_json, records_to_json};
pub use record::{Field, Record, RecordPatch};
