use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::item::errors::ItemError;
use crate::domain::item::fridge_entry::FridgeEntry;
use crate::domain::item::repository::ItemRepository;
use crate::domain::item::use_cases::get_fridge::GetFridgeUseCase;
use crate::domain::logger::Logger;

pub struct GetFridgeUseCaseImpl {
    pub repository: Arc<dyn ItemRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetFridgeUseCase for GetFridgeUseCaseImpl {
    async fn execute(&self) -> Result<Vec<FridgeEntry>, ItemError> {
        self.logger.info("Fetching fridge content");
        let entries = self.repository.get_fridge().await.map_err(|e| {
            self.logger
                .error(&format!("Failed to aggregate fridge: {}", e));
            ItemError::Repository(e)
        })?;
        self.logger
            .info(&format!("Fridge holds {} distinct products", entries.len()));
        Ok(entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::item::test_support::{MockItemRepo, make_entry, mock_logger};
    use crate::domain::errors::RepositoryError;

    #[tokio::test]
    async fn should_return_aggregated_entries() {
        let mut mock_repo = MockItemRepo::new();
        mock_repo
            .expect_get_fridge()
            .returning(|| {
                Ok(vec![
                    make_entry("0001111041700", 2),
                    make_entry("8001234567890", 1),
                ])
            });

        let use_case = GetFridgeUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let entries = use_case.execute().await.unwrap();

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].total_quantity, 2);
    }

    #[tokio::test]
    async fn should_surface_storage_failure() {
        let mut mock_repo = MockItemRepo::new();
        mock_repo
            .expect_get_fridge()
            .returning(|| Err(RepositoryError::DatabaseError));

        let use_case = GetFridgeUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        assert!(matches!(
            use_case.execute().await.unwrap_err(),
            ItemError::Repository(_)
        ));
    }
}
