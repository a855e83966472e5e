use chrono::{DateTime, Utc};

/// Barcode-level view over every item sharing that barcode.
#[derive(Debug, Clone, PartialEq)]
pub struct FridgeEntry {
    pub barcode: String,
    pub name: String,
    pub brand: String,
    pub total_quantity: i64,
    /// Earliest known expiration; `None` only when no constituent has one.
    pub next_expiration: Option<DateTime<Utc>>,
    pub latest_addition: DateTime<Utc>,
    pub item_count: usize,
}
