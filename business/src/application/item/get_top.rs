use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::item::aggregation::SortMode;
use crate::domain::item::errors::ItemError;
use crate::domain::item::fridge_entry::FridgeEntry;
use crate::domain::item::repository::ItemRepository;
use crate::domain::item::use_cases::get_top::{GetTopItemsParams, GetTopItemsUseCase};
use crate::domain::logger::Logger;

pub struct GetTopItemsUseCaseImpl {
    pub repository: Arc<dyn ItemRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetTopItemsUseCase for GetTopItemsUseCaseImpl {
    async fn execute(&self, params: GetTopItemsParams) -> Result<Vec<FridgeEntry>, ItemError> {
        // The mode is checked before the store is touched.
        let mode = params
            .sort
            .parse::<SortMode>()
            .map_err(|_| ItemError::UnsupportedSortMode(params.sort.clone()))?;

        self.logger.info(&format!(
            "Fetching top {} fridge entries by {}",
            params.limit, mode
        ));

        self.repository
            .get_top(params.limit, mode)
            .await
            .map_err(|e| {
                self.logger
                    .error(&format!("Failed to rank fridge entries: {}", e));
                ItemError::Repository(e)
            })
    }
}
