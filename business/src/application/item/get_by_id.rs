use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::item::errors::ItemError;
use crate::domain::item::model::Item;
use crate::domain::item::repository::ItemRepository;
use crate::domain::item::use_cases::get_by_id::{GetItemByIdParams, GetItemByIdUseCase};
use crate::domain::logger::Logger;

pub struct GetItemByIdUseCaseImpl {
    pub repository: Arc<dyn ItemRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetItemByIdUseCase for GetItemByIdUseCaseImpl {
    async fn execute(&self, params: GetItemByIdParams) -> Result<Item, ItemError> {
        self.logger
            .info(&format!("Fetching item by id: {}", params.id));

        self.repository.get_by_id(params.id).await.map_err(|e| {
            if !matches!(e, RepositoryError::NotFound) {
                self.logger
                    .error(&format!("Failed to fetch item {}: {}", params.id, e));
            }
            ItemError::from_lookup(e)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::item::test_support::{MockItemRepo, make_item, mock_logger};
    use uuid::Uuid;

    #[tokio::test]
    async fn should_return_item_when_exists() {
        let item_id = Uuid::now_v7();
        let mut mock_repo = MockItemRepo::new();

        let id_clone = item_id;
        mock_repo
            .expect_get_by_id()
            .withf(move |id| *id == id_clone)
            .returning(move |_| Ok(make_item(item_id, "0001111041700", "Fresh Salmon")));

        let use_case = GetItemByIdUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case.execute(GetItemByIdParams { id: item_id }).await;

        assert!(result.is_ok());
        let item = result.unwrap();
        assert_eq!(item.id, item_id);
        assert_eq!(item.name, "Fresh Salmon");
    }

    #[tokio::test]
    async fn should_return_not_found_when_item_missing() {
        let mut mock_repo = MockItemRepo::new();
        mock_repo
            .expect_get_by_id()
            .returning(|_| Err(RepositoryError::NotFound));

        let use_case = GetItemByIdUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(GetItemByIdParams { id: Uuid::now_v7() })
            .await;

        assert!(matches!(result.unwrap_err(), ItemError::NotFound));
    }

    #[tokio::test]
    async fn should_keep_storage_errors_distinct_from_not_found() {
        let mut mock_repo = MockItemRepo::new();
        mock_repo
            .expect_get_by_id()
            .returning(|_| Err(RepositoryError::DatabaseError));

        let use_case = GetItemByIdUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(GetItemByIdParams { id: Uuid::now_v7() })
            .await;

        assert!(matches!(
            result.unwrap_err(),
            ItemError::Repository(RepositoryError::DatabaseError)
        ));
    }
}
