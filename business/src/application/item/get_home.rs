use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::item::aggregation::SortMode;
use crate::domain::item::errors::ItemError;
use crate::domain::item::repository::ItemRepository;
use crate::domain::item::use_cases::get_home::{GetHomeItemsUseCase, HomeItems};
use crate::domain::logger::Logger;

/// Entries per home page widget.
pub const HOME_WIDGET_LIMIT: usize = 10;

pub struct GetHomeItemsUseCaseImpl {
    pub repository: Arc<dyn ItemRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetHomeItemsUseCase for GetHomeItemsUseCaseImpl {
    async fn execute(&self) -> Result<HomeItems, ItemError> {
        self.logger.info("Fetching home items");

        let recent_items = self
            .repository
            .get_top(HOME_WIDGET_LIMIT, SortMode::Latest)
            .await
            .map_err(|e| {
                self.logger
                    .error(&format!("Failed to get recent items: {}", e));
                ItemError::Repository(e)
            })?;

        let expiring_items = self
            .repository
            .get_top(HOME_WIDGET_LIMIT, SortMode::Expiring)
            .await
            .map_err(|e| {
                self.logger
                    .error(&format!("Failed to get expiring items: {}", e));
                ItemError::Repository(e)
            })?;

        Ok(HomeItems {
            recent_items,
            expiring_items,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::item::test_support::{MockItemRepo, make_entry, mock_logger};
    use crate::domain::errors::RepositoryError;
    use mockall::predicate::eq;

    #[tokio::test]
    async fn should_fill_both_widgets() {
        let mut mock_repo = MockItemRepo::new();
        mock_repo
            .expect_get_top()
            .with(eq(HOME_WIDGET_LIMIT), eq(SortMode::Latest))
            .returning(|_, _| Ok(vec![make_entry("recent", 1)]));
        mock_repo
            .expect_get_top()
            .with(eq(HOME_WIDGET_LIMIT), eq(SortMode::Expiring))
            .returning(|_, _| Ok(vec![make_entry("expiring", 1), make_entry("later", 2)]));

        let use_case = GetHomeItemsUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let home = use_case.execute().await.unwrap();

        assert_eq!(home.recent_items.len(), 1);
        assert_eq!(home.recent_items[0].barcode, "recent");
        assert_eq!(home.expiring_items.len(), 2);
        assert_eq!(home.expiring_items[0].barcode, "expiring");
    }

    #[tokio::test]
    async fn should_fail_when_a_widget_query_fails() {
        let mut mock_repo = MockItemRepo::new();
        mock_repo
            .expect_get_top()
            .returning(|_, _| Err(RepositoryError::DatabaseError));

        let use_case = GetHomeItemsUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        assert!(matches!(
            use_case.execute().await.unwrap_err(),
            ItemError::Repository(_)
        ));
    }
}
