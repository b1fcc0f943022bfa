//! Row-to-entity parsing helpers.
//!
//! Handles the dual datetime format (`SQLite`'s `datetime('now')` vs
//! `to_rfc3339()`) and the NULL-vs-empty distinction for watch-only columns.

use chrono::{DateTime, Utc};

use crate::error::DatabaseError;

/// Parse a required TEXT column as `DateTime<Utc>`.
///
/// Handles both RFC 3339 (`"2026-02-09T14:30:00+00:00"`) and `SQLite`'s default
/// format (`"2026-02-09 14:30:00"`).
///
/// # Errors
///
/// Returns `DatabaseError::Query` if the string cannot be parsed as either format.
pub fn parse_datetime(s: &str) -> Result<DateTime<Utc>, DatabaseError> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&Utc));
    }
    chrono::NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S")
        .map(|naive| naive.and_utc())
        .map_err(|e| DatabaseError::Query(format!("Failed to parse datetime '{s}': {e}")))
}

/// Parse a TEXT column into a serde-deserializable enum.
///
/// Works with the neo-core enums that use `#[serde(rename_all = "snake_case")]`.
///
/// # Errors
///
/// Returns `DatabaseError::Query` if the string does not match any enum variant.
pub fn parse_enum<T: serde::de::DeserializeOwned>(s: &str) -> Result<T, DatabaseError> {
    serde_json::from_value(serde_json::Value::String(s.to_string()))
        .map_err(|e| DatabaseError::Query(format!("Failed to parse enum from '{s}': {e}")))
}

/// Read a nullable TEXT column. Returns `None` for both SQL NULL and empty string.
///
/// `row.get::<String>(idx)` on a NULL column returns an error, not `""`.
///
/// # Errors
///
/// Returns `DatabaseError` if the column read fails.
pub fn get_opt_string(row: &libsql::Row, idx: i32) -> Result<Option<String>, DatabaseError> {
    match row.get::<Option<String>>(idx)? {
        Some(s) if s.is_empty() => Ok(None),
        other => Ok(other),
    }
}

/// Read a column that must be present on the row's record type.
///
/// # Errors
///
/// Returns `DatabaseError::InvalidState` naming the column when it is NULL.
pub fn require<T>(value: Option<T>, column: &str, backend_id: &str) -> Result<T, DatabaseError> {
    value.ok_or_else(|| {
        DatabaseError::InvalidState(format!("record {backend_id} has no {column}"))
    })
}

#[cfg(test)]
mod tests {
    use neo_core::enums::RecordType;

    use super::*;

    #[test]
    fn parses_both_datetime_formats() {
        let rfc = parse_datetime("2026-10-18T06:00:00+00:00").unwrap();
        let sqlite = parse_datetime("2026-10-18 06:00:00").unwrap();
        assert_eq!(rfc, sqlite);
        assert!(parse_datetime("yesterday").is_err());
    }

    #[test]
    fn parses_record_type() {
        assert_eq!(parse_enum::<RecordType>("watch").unwrap(), RecordType::Watch);
        assert_eq!(parse_enum::<RecordType>("user").unwrap(), RecordType::User);
        assert!(parse_enum::<RecordType>("WATCH").is_err());
    }

    #[test]
    fn require_names_the_column() {
        let err = require::<f64>(None, "alert_distance_km", "rec-1").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid state: record rec-1 has no alert_distance_km"
        );
    }
}
