use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::item::errors::ItemError;
use crate::domain::item::repository::{ItemRepository, ItemsByBarcode};
use crate::domain::item::use_cases::get_by_barcode::{
    GetItemsByBarcodeParams, GetItemsByBarcodeUseCase,
};
use crate::domain::item::value_objects::Barcode;
use crate::domain::logger::Logger;

pub struct GetItemsByBarcodeUseCaseImpl {
    pub repository: Arc<dyn ItemRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetItemsByBarcodeUseCase for GetItemsByBarcodeUseCaseImpl {
    async fn execute(
        &self,
        params: GetItemsByBarcodeParams,
    ) -> Result<ItemsByBarcode, ItemError> {
        let barcode = Barcode::parse(&params.barcode)?;
        self.logger
            .info(&format!("Fetching items for barcode: {}", barcode));

        let result = self
            .repository
            .get_by_barcode(barcode.as_str())
            .await
            .map_err(|e| {
                self.logger
                    .error(&format!("Failed to fetch items for {}: {}", barcode, e));
                ItemError::Repository(e)
            })?;

        self.logger.debug(&format!(
            "Found {} items for barcode {}",
            result.items.len(),
            barcode
        ));
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::item::test_support::{MockItemRepo, make_item, mock_logger};
    use uuid::Uuid;

    #[tokio::test]
    async fn should_return_items_sharing_barcode() {
        let mut mock_repo = MockItemRepo::new();
        mock_repo.expect_get_by_barcode().returning(|barcode| {
            Ok(ItemsByBarcode::new(vec![
                make_item(Uuid::now_v7(), barcode, "Milk"),
                make_item(Uuid::now_v7(), barcode, "Milk"),
            ]))
        });

        let use_case = GetItemsByBarcodeUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(GetItemsByBarcodeParams {
                barcode: "0001111041700".to_string(),
            })
            .await
            .unwrap();

        assert!(result.exists);
        assert_eq!(result.items.len(), 2);
    }

    #[tokio::test]
    async fn should_report_missing_barcode_without_error() {
        let mut mock_repo = MockItemRepo::new();
        mock_repo
            .expect_get_by_barcode()
            .returning(|_| Ok(ItemsByBarcode::default()));

        let use_case = GetItemsByBarcodeUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(GetItemsByBarcodeParams {
                barcode: "9999999999999".to_string(),
            })
            .await
            .unwrap();

        assert!(!result.exists);
        assert!(result.items.is_empty());
    }

    #[tokio::test]
    async fn should_reject_blank_barcode() {
        let mut mock_repo = MockItemRepo::new();
        mock_repo.expect_get_by_barcode().never();

        let use_case = GetItemsByBarcodeUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(GetItemsByBarcodeParams {
                barcode: String::new(),
            })
            .await;

        assert!(matches!(result.unwrap_err(), ItemError::BarcodeInvalid));
    }
}
