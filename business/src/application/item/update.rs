use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::item::errors::ItemError;
use crate::domain::item::model::Item;
use crate::domain::item::repository::ItemRepository;
use crate::domain::item::use_cases::update::{UpdateItemParams, UpdateItemUseCase};
use crate::domain::item::value_objects::optional_expiration;
use crate::domain::logger::Logger;

/// Updates name, brand and expiration; barcode, quantity and addition date stay untouched.
pub struct UpdateItemUseCaseImpl {
    pub repository: Arc<dyn ItemRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UpdateItemUseCase for UpdateItemUseCaseImpl {
    async fn execute(&self, params: UpdateItemParams) -> Result<Item, ItemError> {
        self.logger.info(&format!("Updating item: {}", params.id));

        let name = params.name.trim();
        if name.is_empty() {
            return Err(ItemError::NameEmpty);
        }
        let expiration_date = optional_expiration(&params.expiration_date)?;

        self.repository
            .update(params.id, name, params.brand.trim(), expiration_date)
            .await
            .map_err(|e| {
                if !matches!(e, RepositoryError::NotFound) {
                    self.logger
                        .error(&format!("Failed to update item {}: {}", params.id, e));
                }
                ItemError::from_lookup(e)
            })?;

        let item = self
            .repository
            .get_by_id(params.id)
            .await
            .map_err(ItemError::from_lookup)?;

        self.logger.info(&format!("Item updated: {}", item.id));
        Ok(item)
    }
}
