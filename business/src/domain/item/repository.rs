use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::errors::RepositoryError;

use super::aggregation::SortMode;
use super::fridge_entry::FridgeEntry;
use super::model::Item;
use super::product_info::ProductInfo;

/// Rows sharing a barcode, soonest expiring first.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ItemsByBarcode {
    pub exists: bool,
    pub items: Vec<Item>,
}

impl ItemsByBarcode {
    pub fn new(items: Vec<Item>) -> Self {
        Self {
            exists: !items.is_empty(),
            items,
        }
    }
}

#[async_trait]
pub trait ItemRepository: Send + Sync {
    async fn insert(
        &self,
        product: &ProductInfo,
        expiration_date: Option<DateTime<Utc>>,
        added_at: DateTime<Utc>,
    ) -> Result<Item, RepositoryError>;
    async fn get_by_id(&self, id: Uuid) -> Result<Item, RepositoryError>;
    async fn get_by_barcode(&self, barcode: &str) -> Result<ItemsByBarcode, RepositoryError>;
    async fn get_all(&self) -> Result<Vec<Item>, RepositoryError>;
    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError>;
    async fn update(
        &self,
        id: Uuid,
        name: &str,
        brand: &str,
        expiration_date: Option<DateTime<Utc>>,
    ) -> Result<(), RepositoryError>;
    async fn increase_quantity(&self, id: Uuid, delta: i64) -> Result<(), RepositoryError>;
    async fn get_fridge(&self) -> Result<Vec<FridgeEntry>, RepositoryError>;
    async fn get_top(
        &self,
        limit: usize,
        mode: SortMode,
    ) -> Result<Vec<FridgeEntry>, RepositoryError>;
}
