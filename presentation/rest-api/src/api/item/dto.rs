use chrono::{DateTime, Utc};
use poem_openapi::{Enum, Object};
use serde::{Deserialize, Serialize};

use business::domain::item::fridge_entry::FridgeEntry;
use business::domain::item::model::Item;
use business::domain::item::repository::ItemsByBarcode;
use business::domain::item::urgency::{UrgencyLevel, get_urgency_level};
use business::domain::item::use_cases::get_home::HomeItems;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Enum)]
pub enum UrgencyDto {
    #[oai(rename = "unknown")]
    Unknown,
    #[oai(rename = "fresh")]
    Fresh,
    #[oai(rename = "use_this_week")]
    UseThisWeek,
    #[oai(rename = "use_soon")]
    UseSoon,
    #[oai(rename = "expired")]
    Expired,
}

impl From<UrgencyLevel> for UrgencyDto {
    fn from(level: UrgencyLevel) -> Self {
        match level {
            UrgencyLevel::Unknown => UrgencyDto::Unknown,
            UrgencyLevel::Fresh => UrgencyDto::Fresh,
            UrgencyLevel::UseThisWeek => UrgencyDto::UseThisWeek,
            UrgencyLevel::UseSoon => UrgencyDto::UseSoon,
            UrgencyLevel::Expired => UrgencyDto::Expired,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct AddItemRequest {
    /// Scanned or typed barcode (at least 3 characters)
    pub barcode: String,
    /// Product name; leave empty to resolve it from the barcode
    #[oai(default)]
    pub name: String,
    /// Product brand, used only when a name is given
    #[oai(default)]
    pub brand: String,
    /// Expiration date (YYYY-MM-DD); defaults to two weeks from now
    #[oai(default)]
    pub expiration_date: String,
    /// Addition date (YYYY-MM-DD), required when `is_manual` is set
    #[oai(default)]
    pub addition_date: String,
    /// Whether the addition date was entered by hand
    #[oai(default)]
    pub is_manual: bool,
}

#[derive(Debug, Clone, Object)]
pub struct UpdateItemRequest {
    /// Product name (cannot be empty)
    pub name: String,
    #[oai(default)]
    pub brand: String,
    /// Expiration date (YYYY-MM-DD); empty clears it
    #[oai(default)]
    pub expiration_date: String,
}

fn default_delta() -> i64 {
    1
}

#[derive(Debug, Clone, Object)]
pub struct IncreaseQuantityRequest {
    /// Units to add (at least 1)
    #[oai(default = "default_delta")]
    pub delta: i64,
}

#[derive(Debug, Clone, Object)]
pub struct ItemResponse {
    pub id: String,
    pub barcode: String,
    pub name: String,
    pub brand: String,
    pub quantity: i64,
    #[oai(skip_serializing_if_is_none)]
    pub expiration_date: Option<DateTime<Utc>>,
    pub added_at: DateTime<Utc>,
}

impl From<Item> for ItemResponse {
    fn from(item: Item) -> Self {
        Self {
            id: item.id.to_string(),
            barcode: item.barcode,
            name: item.name,
            brand: item.brand,
            quantity: item.quantity,
            expiration_date: item.expiration_date,
            added_at: item.added_at,
        }
    }
}

/// One barcode in the fridge, summed over its items.
#[derive(Debug, Clone, Object)]
pub struct FridgeEntryResponse {
    pub barcode: String,
    pub name: String,
    pub brand: String,
    pub total_quantity: i64,
    /// Soonest expiration among the items, absent when none is known
    #[oai(skip_serializing_if_is_none)]
    pub next_expiration: Option<DateTime<Utc>>,
    pub latest_addition: DateTime<Utc>,
    pub item_count: u64,
    pub urgency: UrgencyDto,
}

impl FridgeEntryResponse {
    pub fn from_entry(entry: FridgeEntry, now: DateTime<Utc>) -> Self {
        Self {
            urgency: get_urgency_level(entry.next_expiration, now).into(),
            barcode: entry.barcode,
            name: entry.name,
            brand: entry.brand,
            total_quantity: entry.total_quantity,
            next_expiration: entry.next_expiration,
            latest_addition: entry.latest_addition,
            item_count: entry.item_count as u64,
        }
    }

    pub fn list(entries: Vec<FridgeEntry>) -> Vec<Self> {
        let now = Utc::now();
        entries
            .into_iter()
            .map(|entry| Self::from_entry(entry, now))
            .collect()
    }
}

#[derive(Debug, Clone, Object)]
pub struct ItemsByBarcodeResponse {
    pub exists: bool,
    pub items: Vec<ItemResponse>,
}

impl From<ItemsByBarcode> for ItemsByBarcodeResponse {
    fn from(result: ItemsByBarcode) -> Self {
        Self {
            exists: result.exists,
            items: result.items.into_iter().map(|i| i.into()).collect(),
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct HomeItemsResponse {
    /// Most recently added entries
    pub recent_items: Vec<FridgeEntryResponse>,
    /// Soonest expiring entries
    pub expiring_items: Vec<FridgeEntryResponse>,
}

impl From<HomeItems> for HomeItemsResponse {
    fn from(home: HomeItems) -> Self {
        Self {
            recent_items: FridgeEntryResponse::list(home.recent_items),
            expiring_items: FridgeEntryResponse::list(home.expiring_items),
        }
    }
}
