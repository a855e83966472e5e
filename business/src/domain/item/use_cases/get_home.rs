use async_trait::async_trait;

use crate::domain::item::errors::ItemError;
use crate::domain::item::fridge_entry::FridgeEntry;

/// Entries shown on the home page.
#[derive(Debug, Clone, Default)]
pub struct HomeItems {
    pub recent_items: Vec<FridgeEntry>,
    pub expiring_items: Vec<FridgeEntry>,
}

#[async_trait]
pub trait GetHomeItemsUseCase: Send + Sync {
    async fn execute(&self) -> Result<HomeItems, ItemError>;
}
