//! Decoding records delivered as JSON.

use log::debug;
use serde::Deserialize;

use super::record::Record;
use crate::error::Result;

#[derive(Deserialize)]
#[serde(untagged)]
enum Payload {
    Bare(Vec<Record>),
    Envelope { items: Vec<Record> },
}

/// Decode records from JSON.
///
/// Accepts either a bare array of records or an `{"items": [...]}` envelope.
///
/// # Example
/// ```
/// use coinframe::core::records_from_json;
///
/// let json = r#"{"items":[{"date":"2024-01-01","coin":"BTC","price":1.0,"volume":2.0,"market_cap":3.0}]}"#;
/// let records = records_from_json(json).unwrap();
/// assert_eq!(records.len(), 1);
/// ```
pub fn records_from_json(json: &str) -> Result<Vec<Record>> {
    let records = match serde_json::from_str::<Payload>(json)? {
        Payload::Bare(records) => records,
        Payload::Envelope { items } => items,
    };
    debug!("decoded {} records", records.len());
    Ok(records)
}

/// Encode records as a JSON array.
pub fn records_to_json(records: &[Record]) -> Result<String> {
    Ok(serde_json::to_string(records)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TransformError;

    const ROW: &str =
        r#"{"date":"2024-01-01","coin":"BTC","price":100.0,"volume":10.0,"market_cap":1000.0}"#;

    #[test]
    fn decodes_bare_array() {
        let records = records_from_json(&format!("[{}]", ROW)).unwrap();
        assert_eq!(
            records,
            vec![Record::new("2024-01-01", "BTC", 100.0, 10.0, 1000.0)]
        );
    }

    #[test]
    fn decodes_items_envelope() {
        let records = records_from_json(&format!(r#"{{"items":[{},{}]}}"#, ROW, ROW)).unwrap();
        assert_eq!(records.len(), 2);
    }

    #[test]
    fn empty_array_is_empty() {
        assert!(records_from_json("[]").unwrap().is_empty());
    }

    #[test]
    fn numeric_strings_are_rejected() {
        let json = r#"[{"date":"2024-01-01","coin":"BTC","price":"100","volume":10,"market_cap":1}]"#;
        assert!(matches!(
            records_from_json(json),
            Err(TransformError::Parse(_))
        ));
    }

    #[test]
    fn malformed_json_is_parse_error() {
        assert!(matches!(
            records_from_json("{not json"),
            Err(TransformError::Parse(_))
        ));
    }

    #[test]
    fn encode_then_decode_preserves_records() {
        let records = vec![Record::new("2024-01-02", "ETH", 2.0, 3.0, 4.0)];
        let json = records_to_json(&records).unwrap();
        assert_eq!(records_from_json(&json).unwrap(), records);
    }
}
