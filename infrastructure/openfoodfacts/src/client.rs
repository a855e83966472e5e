use std::time::Duration;

use reqwest::Client;

pub const DEFAULT_BASE_URL: &str = "https://world.openfoodfacts.org/api/v0/product";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Shared Open Food Facts HTTP client configuration.
pub struct FoodApiClient {
    pub client: Client,
    pub base_url: String,
}

impl FoodApiClient {
    /// Builds the HTTP client; fails rather than fall back to one without a timeout.
    pub fn new(base_url: String, timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Returns the product endpoint URL for a barcode.
    pub fn product_url(&self, barcode: &str) -> String {
        format!("{}/{}.json", self.base_url, barcode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::net::TcpListener;

    #[test]
    fn should_build_product_url() {
        let client = FoodApiClient::new(DEFAULT_BASE_URL.to_string(), DEFAULT_TIMEOUT).unwrap();
        assert_eq!(
            client.product_url("0001111041700"),
            "https://world.openfoodfacts.org/api/v0/product/0001111041700.json"
        );
    }

    #[test]
    fn should_ignore_trailing_slash_in_base_url() {
        let client =
            FoodApiClient::new("http://localhost:9000/api/".to_string(), DEFAULT_TIMEOUT).unwrap();
        assert_eq!(client.product_url("123"), "http://localhost:9000/api/123.json");
    }

    #[tokio::test]
    async fn should_apply_configured_timeout() {
        // Accepts the connection but never answers.
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let address = listener.local_addr().unwrap();
        let server = tokio::spawn(async move {
            let (socket, _) = listener.accept().await.unwrap();
            tokio::time::sleep(Duration::from_secs(30)).await;
            drop(socket);
        });

        let client =
            FoodApiClient::new(format!("http://{address}"), Duration::from_millis(200)).unwrap();
        let error = client
            .client
            .get(client.product_url("123"))
            .send()
            .await
            .unwrap_err();

        assert!(error.is_timeout());
        server.abort();
    }
}
