use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::item::errors::ItemError;
use crate::domain::item::model::Item;

pub struct IncreaseQuantityParams {
    pub id: Uuid,
    pub delta: i64,
}

#[async_trait]
pub trait IncreaseQuantityUseCase: Send + Sync {
    async fn execute(&self, params: IncreaseQuantityParams) -> Result<Item, ItemError>;
}
