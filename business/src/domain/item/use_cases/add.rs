use async_trait::async_trait;

use crate::domain::item::errors::ItemError;
use crate::domain::item::model::Item;

/// Raw form values for a new item.
///
/// A blank `name` means the product metadata must be resolved from the barcode.
pub struct AddItemParams {
    pub barcode: String,
    pub name: String,
    pub brand: String,
    pub expiration_date: String,
    pub addition_date: String,
    pub is_manual: bool,
}

#[async_trait]
pub trait AddItemUseCase: Send + Sync {
    async fn execute(&self, params: AddItemParams) -> Result<Item, ItemError>;
}
