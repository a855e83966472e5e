use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::item::errors::ItemError;
use crate::domain::item::model::Item;
use crate::domain::item::product_info::ProductInfo;
use crate::domain::item::repository::ItemRepository;
use crate::domain::item::use_cases::add::{AddItemParams, AddItemUseCase};
use crate::domain::item::use_cases::resolve::{ResolveProductParams, ResolveProductUseCase};
use crate::domain::item::value_objects::{Barcode, addition_date, expiration_or_default};
use crate::domain::logger::Logger;

pub struct AddItemUseCaseImpl {
    pub repository: Arc<dyn ItemRepository>,
    pub resolver: Arc<dyn ResolveProductUseCase>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl AddItemUseCase for AddItemUseCaseImpl {
    async fn execute(&self, params: AddItemParams) -> Result<Item, ItemError> {
        let barcode = Barcode::parse(&params.barcode)?;
        let now = Utc::now();
        let added_at = addition_date(&params.addition_date, params.is_manual, now)?;
        let expiration_date = expiration_or_default(&params.expiration_date, now);

        self.logger
            .info(&format!("Adding item with barcode: {}", barcode));

        let name = params.name.trim();
        let product = if name.is_empty() {
            let resolved = self
                .resolver
                .execute(ResolveProductParams {
                    barcode: barcode.to_string(),
                })
                .await?;
            // Group under the barcode the user scanned, whatever the provider echoed.
            ProductInfo {
                barcode: barcode.into_inner(),
                ..resolved
            }
        } else {
            ProductInfo {
                barcode: barcode.into_inner(),
                name: name.to_string(),
                brand: params.brand.trim().to_string(),
            }
        };

        let item = self
            .repository
            .insert(&product, Some(expiration_date), added_at)
            .await
            .map_err(|e| {
                self.logger.error(&format!(
                    "Failed to insert item {}: {}",
                    product.barcode, e
                ));
                ItemError::Repository(e)
            })?;

        self.logger.info(&format!("Item added with id: {}", item.id));
        Ok(item)
    }
}
