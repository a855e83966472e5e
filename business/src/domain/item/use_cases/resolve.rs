use async_trait::async_trait;

use crate::domain::item::errors::ItemError;
use crate::domain::item::product_info::ProductInfo;

pub struct ResolveProductParams {
    pub barcode: String,
}

#[async_trait]
pub trait ResolveProductUseCase: Send + Sync {
    async fn execute(&self, params: ResolveProductParams) -> Result<ProductInfo, ItemError>;
}
