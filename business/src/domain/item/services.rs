use async_trait::async_trait;

use super::errors::ItemError;
use super::product_info::ExternalProduct;

/// Service port for the external product metadata provider.
///
/// Transport errors, non-success statuses and malformed payloads all
/// surface as [`ItemError::LookupFailed`]. Implementations make a single
/// attempt and never retry.
#[async_trait]
pub trait ProductLookupService: Send + Sync {
    async fn lookup(&self, barcode: &str) -> Result<ExternalProduct, ItemError>;
}
