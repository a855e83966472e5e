use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::product_info::ProductInfo;

/// One physical unit (or batch) stored in the fridge.
#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    pub id: Uuid,
    pub barcode: String,
    pub name: String,
    pub brand: String,
    pub quantity: i64,
    pub expiration_date: Option<DateTime<Utc>>,
    pub added_at: DateTime<Utc>,
}

pub struct NewItemProps {
    pub product: ProductInfo,
    pub expiration_date: Option<DateTime<Utc>>,
    pub added_at: DateTime<Utc>,
}

impl Item {
    /// Builds a fresh row with a time-ordered identifier and a quantity of one.
    pub fn new(props: NewItemProps) -> Self {
        Self {
            id: Uuid::now_v7(),
            barcode: props.product.barcode,
            name: props.product.name,
            brand: props.product.brand,
            quantity: 1,
            expiration_date: props.expiration_date,
            added_at: props.added_at,
        }
    }

    /// Constructor for data already persisted in the repository (no validation).
    pub fn from_repository(
        id: Uuid,
        barcode: String,
        name: String,
        brand: String,
        quantity: i64,
        expiration_date: Option<DateTime<Utc>>,
        added_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            barcode,
            name,
            brand,
            quantity,
            expiration_date,
            added_at,
        }
    }

    /// Product metadata carried by this row, used as the local lookup cache.
    pub fn product_info(&self) -> ProductInfo {
        ProductInfo {
            barcode: self.barcode.clone(),
            name: self.name.clone(),
            brand: self.brand.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn milk() -> ProductInfo {
        ProductInfo {
            barcode: "0001111041700".to_string(),
            name: "Milk".to_string(),
            brand: "Granarolo".to_string(),
        }
    }

    #[test]
    fn should_default_quantity_to_one() {
        let item = Item::new(NewItemProps {
            product: milk(),
            expiration_date: None,
            added_at: Utc::now(),
        });

        assert_eq!(item.quantity, 1);
        assert_eq!(item.barcode, "0001111041700");
    }

    #[test]
    fn should_generate_increasing_ids() {
        let first = Item::new(NewItemProps {
            product: milk(),
            expiration_date: None,
            added_at: Utc::now(),
        });
        let second = Item::new(NewItemProps {
            product: milk(),
            expiration_date: None,
            added_at: Utc::now(),
        });

        assert!(second.id > first.id);
        assert!(second.id.to_string() > first.id.to_string());
    }

    #[test]
    fn should_expose_product_info() {
        let item = Item::new(NewItemProps {
            product: milk(),
            expiration_date: None,
            added_at: Utc::now(),
        });

        assert_eq!(item.product_info(), milk());
    }
}
