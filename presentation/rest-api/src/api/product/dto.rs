use poem_openapi::Object;

use business::domain::item::product_info::ProductInfo;

/// Product metadata resolved for a barcode.
#[derive(Debug, Clone, Object)]
pub struct ProductInfoResponse {
    pub barcode: String,
    pub name: String,
    pub brand: String,
}

impl From<ProductInfo> for ProductInfoResponse {
    fn from(product: ProductInfo) -> Self {
        Self {
            barcode: product.barcode,
            name: product.name,
            brand: product.brand,
        }
    }
}
