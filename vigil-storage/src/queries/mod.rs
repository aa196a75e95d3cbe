//! SQL behind the storage engine, one module per concern.

pub mod health_ops;
pub mod signal_crud;
pub mod signal_query;

use chrono::{DateTime, Datelike, SecondsFormat, Utc};

use vigil_core::errors::VigilResult;
use vigil_core::signal::SignalKind;

use crate::to_storage_err;

/// Table holding records of the given kind.
pub(crate) fn table_for(kind: SignalKind) -> &'static str {
    match kind {
        SignalKind::Event => "signal_events",
        SignalKind::Alert => "signal_alerts",
    }
}

/// Years whose RFC 3339 form is four digits with no sign.
const STORABLE_YEARS: std::ops::RangeInclusive<i32> = 0..=9999;

/// Fixed-width UTC timestamp so lexical order matches chronological order.
/// Times outside years 0000..=9999 are rejected.
pub(crate) fn encode_time(t: &DateTime<Utc>) -> VigilResult<String> {
    if !STORABLE_YEARS.contains(&t.year()) {
        return Err(to_storage_err(format!(
            "generated_at {t} is outside years 0000..=9999"
        )));
    }
    Ok(t.to_rfc3339_opts(SecondsFormat::Micros, true))
}

pub(crate) fn decode_time(s: &str) -> VigilResult<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(s)
        .map(|t| t.with_timezone(&Utc))
        .map_err(|e| to_storage_err(format!("bad timestamp {s:?}: {e}")))
}
