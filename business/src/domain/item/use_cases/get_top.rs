use async_trait::async_trait;

use crate::domain::item::errors::ItemError;
use crate::domain::item::fridge_entry::FridgeEntry;

pub struct GetTopItemsParams {
    pub limit: usize,
    pub sort: String,
}

#[async_trait]
pub trait GetTopItemsUseCase: Send + Sync {
    async fn execute(&self, params: GetTopItemsParams) -> Result<Vec<FridgeEntry>, ItemError>;
}
