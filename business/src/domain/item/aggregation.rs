//! Rules collapsing item rows into fridge entries and ranking them.
//!
//! Every read re-aggregates from the raw rows; nothing here is cached.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use chrono::{DateTime, Utc};

use super::fridge_entry::FridgeEntry;
use super::model::Item;

/// Ordering applied to the home page widgets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortMode {
    /// Most recently added first.
    Latest,
    /// Soonest expiring first, unknown expirations last.
    Expiring,
}

impl std::fmt::Display for SortMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SortMode::Latest => write!(f, "latest"),
            SortMode::Expiring => write!(f, "expiring"),
        }
    }
}

impl std::str::FromStr for SortMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "latest" => Ok(SortMode::Latest),
            "expiring" => Ok(SortMode::Expiring),
            _ => Err(format!("Unsupported sort mode: {}", s)),
        }
    }
}

/// Compares expirations with `None` treated as later than any date.
pub fn compare_expiration(a: Option<DateTime<Utc>>, b: Option<DateTime<Utc>>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

fn earliest(a: Option<DateTime<Utc>>, b: Option<DateTime<Utc>>) -> Option<DateTime<Utc>> {
    match compare_expiration(a, b) {
        Ordering::Greater => b,
        _ => a,
    }
}

/// Groups rows by barcode, one entry per barcode, in barcode order.
///
/// Name and brand come from the row with the greatest identifier, i.e. the
/// most recently inserted one.
pub fn group_by_barcode(items: &[Item]) -> Vec<FridgeEntry> {
    let mut groups: BTreeMap<&str, Vec<&Item>> = BTreeMap::new();
    for item in items {
        groups.entry(item.barcode.as_str()).or_default().push(item);
    }

    groups
        .into_values()
        .filter_map(|rows| {
            let representative = rows.iter().max_by_key(|item| item.id)?;
            let mut entry = FridgeEntry {
                barcode: representative.barcode.clone(),
                name: representative.name.clone(),
                brand: representative.brand.clone(),
                total_quantity: 0,
                next_expiration: None,
                latest_addition: representative.added_at,
                item_count: rows.len(),
            };
            for item in &rows {
                entry.total_quantity = entry.total_quantity.saturating_add(item.quantity);
                entry.next_expiration = earliest(entry.next_expiration, item.expiration_date);
                entry.latest_addition = entry.latest_addition.max(item.added_at);
            }
            Some(entry)
        })
        .collect()
}

fn by_expiration(a: &FridgeEntry, b: &FridgeEntry) -> Ordering {
    compare_expiration(a.next_expiration, b.next_expiration).then_with(|| a.barcode.cmp(&b.barcode))
}

fn by_latest_addition(a: &FridgeEntry, b: &FridgeEntry) -> Ordering {
    b.latest_addition
        .cmp(&a.latest_addition)
        .then_with(|| a.barcode.cmp(&b.barcode))
}

/// Whole fridge, soonest expiring entry first.
pub fn fridge(items: &[Item]) -> Vec<FridgeEntry> {
    let mut entries = group_by_barcode(items);
    entries.sort_by(by_expiration);
    entries
}

/// At most `limit` entries ordered by `mode`.
pub fn top(items: &[Item], limit: usize, mode: SortMode) -> Vec<FridgeEntry> {
    let mut entries = group_by_barcode(items);
    match mode {
        SortMode::Latest => entries.sort_by(by_latest_addition),
        SortMode::Expiring => entries.sort_by(by_expiration),
    }
    entries.truncate(limit);
    entries
}
