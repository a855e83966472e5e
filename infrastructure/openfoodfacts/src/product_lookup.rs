use async_trait::async_trait;
use serde::Deserialize;

use business::domain::item::errors::ItemError;
use business::domain::item::product_info::ExternalProduct;
use business::domain::item::services::ProductLookupService;

use crate::client::FoodApiClient;

#[derive(Deserialize)]
struct ProductResponse {
    product: Option<ExternalProduct>,
}

impl ProductResponse {
    /// A payload without a product object still yields a (placeholder) product.
    fn into_product(self) -> ExternalProduct {
        self.product.unwrap_or_default()
    }
}

pub struct ProductLookupOpenFoodFacts {
    client: FoodApiClient,
}

impl ProductLookupOpenFoodFacts {
    pub fn new(client: FoodApiClient) -> Self {
        Self { client }
    }

    fn parse_response(body: &str) -> Result<ExternalProduct, ItemError> {
        let response: ProductResponse =
            serde_json::from_str(body).map_err(|_| ItemError::LookupFailed)?;
        Ok(response.into_product())
    }
}

#[async_trait]
impl ProductLookupService for ProductLookupOpenFoodFacts {
    async fn lookup(&self, barcode: &str) -> Result<ExternalProduct, ItemError> {
        let response = self
            .client
            .client
            .get(self.client.product_url(barcode))
            .send()
            .await
            .map_err(|_| ItemError::LookupFailed)?;

        if !response.status().is_success() {
            return Err(ItemError::LookupFailed);
        }

        let body = response.text().await.map_err(|_| ItemError::LookupFailed)?;
        Self::parse_response(&body)
    }
}
