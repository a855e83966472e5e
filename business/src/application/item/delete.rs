use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::item::errors::ItemError;
use crate::domain::item::repository::ItemRepository;
use crate::domain::item::use_cases::delete::{DeleteItemParams, DeleteItemUseCase};
use crate::domain::logger::Logger;

/// Removes one item row. Deleting an unknown id is a successful no-op.
pub struct DeleteItemUseCaseImpl {
    pub repository: Arc<dyn ItemRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl DeleteItemUseCase for DeleteItemUseCaseImpl {
    async fn execute(&self, params: DeleteItemParams) -> Result<(), ItemError> {
        self.logger.info(&format!("Deleting item: {}", params.id));

        self.repository.delete(params.id).await.map_err(|e| {
            self.logger
                .error(&format!("Failed to delete item {}: {}", params.id, e));
            ItemError::Repository(e)
        })?;

        self.logger.info(&format!("Item deleted: {}", params.id));
        Ok(())
    }
}
