use chrono::{DateTime, Duration, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::errors::ItemError;

/// Layout accepted for every date typed by the user.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Days added to "now" when no usable expiration date is supplied.
pub const DEFAULT_SHELF_LIFE_DAYS: i64 = 14;

const MIN_BARCODE_LENGTH: usize = 3;

/// Product barcode as typed or scanned by the user.
///
/// Not unique per physical unit: several items may share one barcode.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Barcode(String);

impl Barcode {
    /// Trims the raw value and rejects blank or too short barcodes.
    pub fn parse(raw: &str) -> Result<Self, ItemError> {
        let trimmed = raw.trim();
        if trimmed.chars().count() < MIN_BARCODE_LENGTH {
            return Err(ItemError::BarcodeInvalid);
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl std::fmt::Display for Barcode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Parses a `YYYY-MM-DD` date as midnight UTC.
pub fn parse_date(raw: &str) -> Option<DateTime<Utc>> {
    NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT)
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// Expiration for a new item: the parsed date, or `now` plus the default shelf life
/// when the value is blank or unparsable.
pub fn expiration_or_default(raw: &str, now: DateTime<Utc>) -> DateTime<Utc> {
    parse_date(raw).unwrap_or_else(|| now + Duration::days(DEFAULT_SHELF_LIFE_DAYS))
}

/// Addition date for a new item.
///
/// Manual entries must carry a valid date; everything else is added "now".
pub fn addition_date(
    raw: &str,
    is_manual: bool,
    now: DateTime<Utc>,
) -> Result<DateTime<Utc>, ItemError> {
    if !is_manual {
        return Ok(now);
    }
    parse_date(raw).ok_or(ItemError::AdditionDateInvalid)
}

/// Expiration supplied on update: blank clears it, anything else must parse.
pub fn optional_expiration(raw: &str) -> Result<Option<DateTime<Utc>>, ItemError> {
    if raw.trim().is_empty() {
        return Ok(None);
    }
    parse_date(raw)
        .map(Some)
        .ok_or(ItemError::ExpirationDateInvalid)
}
