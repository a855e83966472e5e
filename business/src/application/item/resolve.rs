use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::item::errors::ItemError;
use crate::domain::item::product_info::ProductInfo;
use crate::domain::item::repository::ItemRepository;
use crate::domain::item::services::ProductLookupService;
use crate::domain::item::use_cases::resolve::{ResolveProductParams, ResolveProductUseCase};
use crate::domain::item::value_objects::Barcode;
use crate::domain::logger::Logger;

/// Resolves product metadata, trusting local rows over the external provider.
pub struct ResolveProductUseCaseImpl {
    pub repository: Arc<dyn ItemRepository>,
    pub lookup: Arc<dyn ProductLookupService>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl ResolveProductUseCase for ResolveProductUseCaseImpl {
    async fn execute(&self, params: ResolveProductParams) -> Result<ProductInfo, ItemError> {
        let barcode = Barcode::parse(&params.barcode)?;
        self.logger
            .info(&format!("Resolving product for barcode: {}", barcode));

        let local = self
            .repository
            .get_by_barcode(barcode.as_str())
            .await
            .map_err(|e| {
                self.logger.error(&format!(
                    "Failed to read local items for barcode {}: {}",
                    barcode, e
                ));
                ItemError::Repository(e)
            })?;

        if let Some(item) = local.items.first() {
            self.logger
                .debug(&format!("Barcode {} known locally, skipping lookup", barcode));
            return Ok(item.product_info());
        }

        let external = self.lookup.lookup(barcode.as_str()).await.map_err(|e| {
            self.logger.error(&format!(
                "Product lookup failed for barcode {}: {}",
                barcode, e
            ));
            e
        })?;

        let product = external.into_product_info(barcode.as_str());
        self.logger.info(&format!(
            "Product resolved externally: {} ({})",
            product.name, product.barcode
        ));
        Ok(product)
    }
}
