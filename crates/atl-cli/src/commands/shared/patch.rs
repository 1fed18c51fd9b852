//! Parsing of command-line values into create and update payload fields.
//!
//! Update flags that target nullable columns accept `none` (or an empty
//! string) to send an explicit `null`.

use anyhow::anyhow;
use chrono::NaiveDate;

fn is_clear(raw: &str) -> bool {
    let trimmed = raw.trim();
    trimmed.is_empty() || trimmed.eq_ignore_ascii_case("none")
}

/// Parse a `YYYY-MM-DD` date.
pub fn parse_date(raw: &str, field: &str) -> anyhow::Result<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|error| anyhow!("invalid {field} '{raw}': {error} (expected YYYY-MM-DD)"))
}

pub fn parse_date_opt(raw: Option<&str>, field: &str) -> anyhow::Result<Option<NaiveDate>> {
    raw.map(|raw| parse_date(raw, field)).transpose()
}

/// Nullable text patch: `None` leaves the field out, `none` clears it.
#[must_use]
pub fn text(raw: Option<String>) -> Option<Option<String>> {
    raw.map(|raw| if is_clear(&raw) { None } else { Some(raw) })
}

pub fn id(raw: Option<&str>, field: &str) -> anyhow::Result<Option<Option<i64>>> {
    raw.map(|raw| {
        if is_clear(raw) {
            return Ok(None);
        }
        raw.trim()
            .parse::<i64>()
            .map(Some)
            .map_err(|error| anyhow!("invalid {field} '{raw}': {error}"))
    })
    .transpose()
}

pub fn date(raw: Option<&str>, field: &str) -> anyhow::Result<Option<Option<NaiveDate>>> {
    raw.map(|raw| {
        if is_clear(raw) {
            Ok(None)
        } else {
            parse_date(raw, field).map(Some)
        }
    })
    .transpose()
}
