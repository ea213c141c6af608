use cite_core::model::{CitationFormat, CitationFormatRecord, FormatKind};
use sqlx::Row;
use sqlx::sqlite::SqliteRow;

use crate::repository::StorageError;

fn ser<E: core::fmt::Display>(e: E) -> StorageError {
    StorageError::Serialization(e.to_string())
}

pub(crate) fn position_to_i64(position: usize) -> Result<i64, StorageError> {
    i64::try_from(position).map_err(|_| StorageError::Serialization("position overflow".into()))
}

/// Map a `cite_formats` row back into a domain format.
///
/// Stale columns for other modes are dropped by the record conversion.
pub(crate) fn map_cite_format_row(row: &SqliteRow) -> Result<CitationFormat, StorageError> {
    let format: String = row.try_get("format").map_err(ser)?;
    let format: FormatKind = format.parse().map_err(ser)?;
    let brackets: Option<i64> = row.try_get("brackets").map_err(ser)?;

    let record = CitationFormatRecord {
        name: row.try_get("name").map_err(ser)?,
        format,
        command: row.try_get("command").map_err(ser)?,
        template: row.try_get("template").map_err(ser)?,
        csl_style: row.try_get("csl_style").map_err(ser)?,
        brackets: brackets.map(|value| value != 0),
    };
    Ok(CitationFormat::from(record))
}
