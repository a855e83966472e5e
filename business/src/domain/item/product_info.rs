use serde::{Deserialize, Serialize};

/// Name shown when no locale of the external payload carries one.
pub const UNKNOWN_PRODUCT_NAME: &str = "Unknown product";

/// Product metadata needed to create an item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductInfo {
    pub barcode: String,
    pub name: String,
    pub brand: String,
}

/// Raw product payload returned by the external lookup.
///
/// Every field is optional: the provider does not always echo the barcode
/// and only fills the names it knows.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExternalProduct {
    #[serde(rename = "_id", default)]
    pub barcode: Option<String>,
    #[serde(default)]
    pub product_name: Option<String>,
    #[serde(default)]
    pub product_name_it: Option<String>,
    #[serde(default)]
    pub product_name_en: Option<String>,
    #[serde(rename = "brands", default)]
    pub brand: Option<String>,
}

impl ExternalProduct {
    /// Normalizes the payload for the barcode that was queried.
    ///
    /// Name fallback: locale-neutral, Italian, English, then [`UNKNOWN_PRODUCT_NAME`].
    pub fn into_product_info(self, queried_barcode: &str) -> ProductInfo {
        let name = [self.product_name, self.product_name_it, self.product_name_en]
            .into_iter()
            .flatten()
            .map(|n| n.trim().to_string())
            .find(|n| !n.is_empty())
            .unwrap_or_else(|| UNKNOWN_PRODUCT_NAME.to_string());

        let barcode = self
            .barcode
            .map(|b| b.trim().to_string())
            .filter(|b| !b.is_empty())
            .unwrap_or_else(|| queried_barcode.to_string());

        ProductInfo {
            barcode,
            name,
            brand: self.brand.map(|b| b.trim().to_string()).unwrap_or_default(),
        }
    }
}
