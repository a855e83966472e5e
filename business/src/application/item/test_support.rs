use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use mockall::mock;
use uuid::Uuid;

use crate::domain::errors::RepositoryError;
use crate::domain::item::aggregation::SortMode;
use crate::domain::item::errors::ItemError;
use crate::domain::item::fridge_entry::FridgeEntry;
use crate::domain::item::model::Item;
use crate::domain::item::product_info::{ExternalProduct, ProductInfo};
use crate::domain::item::repository::{ItemRepository, ItemsByBarcode};
use crate::domain::item::services::ProductLookupService;
use crate::domain::logger::Logger;

mock! {
    pub ItemRepo {}

    #[async_trait]
    impl ItemRepository for ItemRepo {
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
}

mock! {
    pub ProductLookup {}

    #[async_trait]
    impl ProductLookupService for ProductLookup {
        async fn lookup(&self, barcode: &str) -> Result<ExternalProduct, ItemError>;
    }
}

mock! {
    pub Log {}

    impl Logger for Log {
        fn info(&self, message: &str);
        fn warn(&self, message: &str);
        fn error(&self, message: &str);
        fn debug(&self, message: &str);
    }
}

pub fn mock_logger() -> Arc<dyn Logger> {
    let mut logger = MockLog::new();
    logger.expect_info().returning(|_| ());
    logger.expect_warn().returning(|_| ());
    logger.expect_error().returning(|_| ());
    logger.expect_debug().returning(|_| ());
    Arc::new(logger)
}

pub fn make_item(id: Uuid, barcode: &str, name: &str) -> Item {
    Item::from_repository(
        id,
        barcode.to_string(),
        name.to_string(),
        "Granarolo".to_string(),
        1,
        None,
        Utc::now(),
    )
}

pub fn make_entry(barcode: &str, quantity: i64) -> FridgeEntry {
    FridgeEntry {
        barcode: barcode.to_string(),
        name: "Milk".to_string(),
        brand: "Granarolo".to_string(),
        total_quantity: quantity,
        next_expiration: None,
        latest_addition: Utc::now(),
        item_count: 1,
    }
}
