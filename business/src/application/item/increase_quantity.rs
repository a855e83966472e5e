use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::item::errors::ItemError;
use crate::domain::item::model::Item;
use crate::domain::item::repository::ItemRepository;
use crate::domain::item::use_cases::increase_quantity::{
    IncreaseQuantityParams, IncreaseQuantityUseCase,
};
use crate::domain::logger::Logger;

/// Adds units to a single stored row, addressed by its identifier.
pub struct IncreaseQuantityUseCaseImpl {
    pub repository: Arc<dyn ItemRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl IncreaseQuantityUseCase for IncreaseQuantityUseCaseImpl {
    async fn execute(&self, params: IncreaseQuantityParams) -> Result<Item, ItemError> {
        if params.delta < 1 {
            return Err(ItemError::QuantityInvalid);
        }

        let current = self
            .repository
            .get_by_id(params.id)
            .await
            .map_err(ItemError::from_lookup)?;
        if current.quantity.checked_add(params.delta).is_none() {
            self.logger.warn(&format!(
                "Rejected increase of item {} by {}: quantity would overflow",
                params.id, params.delta
            ));
            return Err(ItemError::QuantityInvalid);
        }

        self.logger.info(&format!(
            "Increasing quantity of item {} by {}",
            params.id, params.delta
        ));

        self.repository
            .increase_quantity(params.id, params.delta)
            .await
            .map_err(|e| {
                if !matches!(e, RepositoryError::NotFound) {
                    self.logger.error(&format!(
                        "Failed to increase quantity of item {}: {}",
                        params.id, e
                    ));
                }
                ItemError::from_lookup(e)
            })?;

        self.repository
            .get_by_id(params.id)
            .await
            .map_err(ItemError::from_lookup)
    }
}
