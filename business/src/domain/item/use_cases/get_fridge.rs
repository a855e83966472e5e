use async_trait::async_trait;

use crate::domain::item::errors::ItemError;
use crate::domain::item::fridge_entry::FridgeEntry;

#[async_trait]
pub trait GetFridgeUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<FridgeEntry>, ItemError>;
}
