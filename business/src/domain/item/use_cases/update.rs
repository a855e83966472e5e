use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::item::errors::ItemError;
use crate::domain::item::model::Item;

pub struct UpdateItemParams {
    pub id: Uuid,
    pub name: String,
    pub brand: String,
    /// `YYYY-MM-DD`, or blank to clear the expiration.
    pub expiration_date: String,
}

#[async_trait]
pub trait UpdateItemUseCase: Send + Sync {
    async fn execute(&self, params: UpdateItemParams) -> Result<Item, ItemError>;
}
