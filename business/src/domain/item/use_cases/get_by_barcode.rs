use async_trait::async_trait;

use crate::domain::item::errors::ItemError;
use crate::domain::item::repository::ItemsByBarcode;

pub struct GetItemsByBarcodeParams {
    pub barcode: String,
}

#[async_trait]
pub trait GetItemsByBarcodeUseCase: Send + Sync {
    async fn execute(&self, params: GetItemsByBarcodeParams)
    -> Result<ItemsByBarcode, ItemError>;
}
