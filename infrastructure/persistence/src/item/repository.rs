use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::SqlitePool;
use uuid::Uuid;

use business::domain::errors::RepositoryError;
use business::domain::item::aggregation::{self, SortMode};
use business::domain::item::fridge_entry::FridgeEntry;
use business::domain::item::model::{Item, NewItemProps};
use business::domain::item::product_info::ProductInfo;
use business::domain::item::repository::{ItemRepository, ItemsByBarcode};

use super::entity::{ItemEntity, format_timestamp, storable};

const SELECT_ITEMS: &str =
    "SELECT id, barcode, name, brand, quantity, expiration_date, added_at FROM items";

fn database_error(error: sqlx::Error) -> RepositoryError {
    tracing::error!(error = %error, "Item store query failed");
    RepositoryError::DatabaseError
}

fn into_items(entities: Vec<ItemEntity>) -> Result<Vec<Item>, RepositoryError> {
    entities.into_iter().map(ItemEntity::into_domain).collect()
}

pub struct ItemRepositorySqlite {
    pool: SqlitePool,
}

impl ItemRepositorySqlite {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ItemRepository for ItemRepositorySqlite {
    async fn insert(
        &self,
        product: &ProductInfo,
        expiration_date: Option<DateTime<Utc>>,
        added_at: DateTime<Utc>,
    ) -> Result<Item, RepositoryError> {
        let item = Item::new(NewItemProps {
            product: product.clone(),
            expiration_date: expiration_date.map(storable),
            added_at: storable(added_at),
        });

        sqlx::query(
            r#"INSERT INTO items (id, barcode, name, brand, quantity, expiration_date, added_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)"#,
        )
        .bind(item.id.to_string())
        .bind(&item.barcode)
        .bind(&item.name)
        .bind(&item.brand)
        .bind(item.quantity)
        .bind(item.expiration_date.as_ref().map(format_timestamp))
        .bind(format_timestamp(&item.added_at))
        .execute(&self.pool)
        .await
        .map_err(database_error)?;

        Ok(item)
    }

    async fn get_by_id(&self, id: Uuid) -> Result<Item, RepositoryError> {
        let entity = sqlx::query_as::<_, ItemEntity>(&format!("{SELECT_ITEMS} WHERE id = $1"))
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(database_error)?
            .ok_or(RepositoryError::NotFound)?;

        entity.into_domain()
    }

    async fn get_by_barcode(&self, barcode: &str) -> Result<ItemsByBarcode, RepositoryError> {
        let entities = sqlx::query_as::<_, ItemEntity>(&format!(
            "{SELECT_ITEMS} WHERE barcode = $1 \
             ORDER BY expiration_date IS NULL, expiration_date, id"
        ))
        .bind(barcode)
        .fetch_all(&self.pool)
        .await
        .map_err(database_error)?;

        Ok(ItemsByBarcode::new(into_items(entities)?))
    }

    async fn get_all(&self) -> Result<Vec<Item>, RepositoryError> {
        let entities = sqlx::query_as::<_, ItemEntity>(&format!("{SELECT_ITEMS} ORDER BY id"))
            .fetch_all(&self.pool)
            .await
            .map_err(database_error)?;

        into_items(entities)
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError> {
        sqlx::query("DELETE FROM items WHERE id = $1")
            .bind(id.to_string())
            .execute(&self.pool)
            .await
            .map_err(database_error)?;

        Ok(())
    }

    async fn update(
        &self,
        id: Uuid,
        name: &str,
        brand: &str,
        expiration_date: Option<DateTime<Utc>>,
    ) -> Result<(), RepositoryError> {
        let result = sqlx::query(
            "UPDATE items SET name = $1, brand = $2, expiration_date = $3 WHERE id = $4",
        )
        .bind(name)
        .bind(brand)
        .bind(expiration_date.map(storable).as_ref().map(format_timestamp))
        .bind(id.to_string())
        .execute(&self.pool)
        .await
        .map_err(database_error)?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }

    async fn increase_quantity(&self, id: Uuid, delta: i64) -> Result<(), RepositoryError> {
        // SQLite turns an overflowing integer sum into REAL, so the guard keeps
        // the column an INTEGER. A row that would overflow is left untouched.
        let result = sqlx::query(
            "UPDATE items SET quantity = quantity + $1 WHERE id = $2 AND quantity <= $3 - $1",
        )
        .bind(delta)
        .bind(id.to_string())
        .bind(i64::MAX)
        .execute(&self.pool)
        .await
        .map_err(database_error)?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }

    async fn get_fridge(&self) -> Result<Vec<FridgeEntry>, RepositoryError> {
        let items = self.get_all().await?;
        Ok(aggregation::fridge(&items))
    }

    async fn get_top(
        &self,
        limit: usize,
        mode: SortMode,
    ) -> Result<Vec<FridgeEntry>, RepositoryError> {
        let items = self.get_all().await?;
        Ok(aggregation::top(&items, limit, mode))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{DatabaseConfig, create_sqlite_pool, ensure_schema};
    use chrono::{Duration, TimeZone};

    async fn repository() -> ItemRepositorySqlite {
        let mut config = DatabaseConfig::new("sqlite::memory:".to_string());
        config.max_connections = 1;
        let pool = create_sqlite_pool(&config).await.unwrap();
        ensure_schema(&pool).await.unwrap();
        ItemRepositorySqlite::new(pool)
    }

    fn day(y: i32, m: u32, d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, 0, 0, 0).unwrap()
    }

    fn product(barcode: &str, name: &str) -> ProductInfo {
        ProductInfo {
            barcode: barcode.to_string(),
            name: name.to_string(),
            brand: "Granarolo".to_string(),
        }
    }

    #[tokio::test]
    async fn should_insert_and_read_back_item() {
        let repo = repository().await;

        let inserted = repo
            .insert(
                &product("0001111041700", "Milk"),
                Some(day(2025, 1, 1)),
                day(2024, 12, 1),
            )
            .await
            .unwrap();
        let loaded = repo.get_by_id(inserted.id).await.unwrap();

        assert_eq!(loaded, inserted);
        assert_eq!(loaded.quantity, 1);
        assert_eq!(loaded.expiration_date, Some(day(2025, 1, 1)));
        assert_eq!(loaded.added_at, day(2024, 12, 1));
    }

    #[tokio::test]
    async fn should_return_not_found_for_unknown_id() {
        let repo = repository().await;
        let result = repo.get_by_id(Uuid::now_v7()).await;
        assert!(matches!(result, Err(RepositoryError::NotFound)));
    }

    #[tokio::test]
    async fn should_report_unknown_barcode_as_absent() {
        let repo = repository().await;
        let result = repo.get_by_barcode("9999999999999").await.unwrap();
        assert!(!result.exists);
        assert!(result.items.is_empty());
    }

    #[tokio::test]
    async fn should_list_barcode_rows_soonest_expiring_first() {
        let repo = repository().await;
        let now = day(2024, 12, 1);
        let unknown = repo.insert(&product("aaa", "Cheese"), None, now).await.unwrap();
        let later = repo
            .insert(&product("aaa", "Cheese"), Some(day(2025, 3, 1)), now)
            .await
            .unwrap();
        let sooner = repo
            .insert(&product("aaa", "Cheese"), Some(day(2025, 1, 1)), now)
            .await
            .unwrap();
        repo.insert(&product("bbb", "Butter"), None, now).await.unwrap();

        let result = repo.get_by_barcode("aaa").await.unwrap();
        let ids: Vec<Uuid> = result.items.iter().map(|i| i.id).collect();

        assert!(result.exists);
        assert_eq!(ids, vec![sooner.id, later.id, unknown.id]);
    }

    #[tokio::test]
    async fn should_delete_idempotently() {
        let repo = repository().await;
        let item = repo
            .insert(&product("aaa", "Cheese"), None, Utc::now())
            .await
            .unwrap();

        repo.delete(item.id).await.unwrap();
        repo.delete(item.id).await.unwrap();

        assert!(matches!(
            repo.get_by_id(item.id).await,
            Err(RepositoryError::NotFound)
        ));
    }

    #[tokio::test]
    async fn should_keep_other_rows_when_deleting_one_twice() {
        let repo = repository().await;
        let now = day(2024, 12, 1);
        let first = repo.insert(&product("aaa", "Cheese"), None, now).await.unwrap();
        let second = repo
            .insert(&product("aaa", "Cheese"), Some(day(2025, 1, 1)), now)
            .await
            .unwrap();
        let other = repo.insert(&product("bbb", "Butter"), None, now).await.unwrap();
        repo.increase_quantity(second.id, 2).await.unwrap();

        repo.delete(first.id).await.unwrap();
        let after_first_delete = repo.get_all().await.unwrap();
        repo.delete(first.id).await.unwrap();
        let after_second_delete = repo.get_all().await.unwrap();

        assert_eq!(after_second_delete, after_first_delete);
        assert_eq!(after_second_delete.len(), 2);

        let aaa = repo.get_by_barcode("aaa").await.unwrap();
        assert_eq!(aaa.items.len(), 1);
        assert_eq!(aaa.items[0].id, second.id);
        assert_eq!(aaa.items[0].quantity, 3);
        assert_eq!(repo.get_by_id(other.id).await.unwrap().quantity, 1);

        let fridge = repo.get_fridge().await.unwrap();
        assert_eq!(fridge.len(), 2);
        for entry in &fridge {
            let sum: i64 = after_second_delete
                .iter()
                .filter(|item| item.barcode == entry.barcode)
                .map(|item| item.quantity)
                .sum();
            assert_eq!(entry.total_quantity, sum);
        }
        let aaa_entry = fridge.iter().find(|e| e.barcode == "aaa").unwrap();
        assert_eq!(aaa_entry.total_quantity, 3);
        assert_eq!(aaa_entry.item_count, 1);
        assert_eq!(aaa_entry.next_expiration, Some(day(2025, 1, 1)));
    }

    #[tokio::test]
    async fn should_update_editable_columns_only() {
        let repo = repository().await;
        let item = repo
            .insert(
                &product("aaa", "Cheese"),
                Some(day(2025, 1, 1)),
                day(2024, 12, 1),
            )
            .await
            .unwrap();

        repo.update(item.id, "Mozzarella", "Santa Lucia", None)
            .await
            .unwrap();
        let loaded = repo.get_by_id(item.id).await.unwrap();

        assert_eq!(loaded.name, "Mozzarella");
        assert_eq!(loaded.brand, "Santa Lucia");
        assert_eq!(loaded.expiration_date, None);
        assert_eq!(loaded.barcode, "aaa");
        assert_eq!(loaded.added_at, day(2024, 12, 1));
        assert_eq!(loaded.quantity, 1);
    }

    #[tokio::test]
    async fn should_return_not_found_when_updating_missing_row() {
        let repo = repository().await;
        let result = repo.update(Uuid::now_v7(), "Milk", "", None).await;
        assert!(matches!(result, Err(RepositoryError::NotFound)));
    }

    #[tokio::test]
    async fn should_increase_quantity_of_single_row() {
        let repo = repository().await;
        let first = repo
            .insert(&product("aaa", "Cheese"), None, Utc::now())
            .await
            .unwrap();
        let second = repo
            .insert(&product("aaa", "Cheese"), None, Utc::now())
            .await
            .unwrap();

        repo.increase_quantity(first.id, 2).await.unwrap();

        assert_eq!(repo.get_by_id(first.id).await.unwrap().quantity, 3);
        assert_eq!(repo.get_by_id(second.id).await.unwrap().quantity, 1);
        assert!(matches!(
            repo.increase_quantity(Uuid::now_v7(), 1).await,
            Err(RepositoryError::NotFound)
        ));
    }

    #[tokio::test]
    async fn should_leave_row_readable_when_increase_would_overflow() {
        let repo = repository().await;
        let item = repo
            .insert(&product("aaa", "Cheese"), None, Utc::now())
            .await
            .unwrap();

        let result = repo.increase_quantity(item.id, i64::MAX).await;

        assert!(matches!(result, Err(RepositoryError::NotFound)));
        assert_eq!(repo.get_by_id(item.id).await.unwrap().quantity, 1);
        assert_eq!(repo.get_fridge().await.unwrap()[0].total_quantity, 1);
    }

    #[tokio::test]
    async fn should_cap_fridge_total_when_rows_reach_maximum() {
        let repo = repository().await;
        let full = repo
            .insert(&product("aaa", "Cheese"), None, Utc::now())
            .await
            .unwrap();
        repo.increase_quantity(full.id, i64::MAX - 1).await.unwrap();
        assert_eq!(repo.get_by_id(full.id).await.unwrap().quantity, i64::MAX);

        repo.insert(&product("aaa", "Cheese"), None, Utc::now())
            .await
            .unwrap();

        let fridge = repo.get_fridge().await.unwrap();
        assert_eq!(fridge.len(), 1);
        assert_eq!(fridge[0].total_quantity, i64::MAX);
        assert_eq!(fridge[0].item_count, 2);
        assert_eq!(repo.get_top(10, SortMode::Latest).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn should_aggregate_second_unit_of_same_barcode() {
        let repo = repository().await;
        repo.insert(
            &product("0001111041700", "Milk"),
            Some(day(2025, 1, 1)),
            Utc::now(),
        )
        .await
        .unwrap();

        let fridge = repo.get_fridge().await.unwrap();
        assert_eq!(fridge.len(), 1);
        assert_eq!(fridge[0].total_quantity, 1);
        assert_eq!(fridge[0].next_expiration, Some(day(2025, 1, 1)));

        repo.insert(
            &product("0001111041700", "Milk"),
            Some(day(2025, 2, 1)),
            Utc::now(),
        )
        .await
        .unwrap();

        let fridge = repo.get_fridge().await.unwrap();
        assert_eq!(fridge.len(), 1);
        assert_eq!(fridge[0].total_quantity, 2);
        assert_eq!(fridge[0].next_expiration, Some(day(2025, 1, 1)));
    }

    #[tokio::test]
    async fn should_rank_top_entries_by_mode() {
        let repo = repository().await;
        let now = day(2024, 6, 1);
        repo.insert(&product("aaa", "A"), Some(now + Duration::days(9)), now)
            .await
            .unwrap();
        repo.insert(
            &product("bbb", "B"),
            Some(now + Duration::days(1)),
            now + Duration::days(2),
        )
        .await
        .unwrap();
        repo.insert(&product("ccc", "C"), None, now + Duration::days(1))
            .await
            .unwrap();

        let latest = repo.get_top(2, SortMode::Latest).await.unwrap();
        let barcodes: Vec<&str> = latest.iter().map(|e| e.barcode.as_str()).collect();
        assert_eq!(barcodes, vec!["bbb", "ccc"]);

        let expiring = repo.get_top(10, SortMode::Expiring).await.unwrap();
        let barcodes: Vec<&str> = expiring.iter().map(|e| e.barcode.as_str()).collect();
        assert_eq!(barcodes, vec!["bbb", "aaa", "ccc"]);
    }

    #[tokio::test]
    async fn should_apply_default_addition_timestamp() {
        let repo = repository().await;
        sqlx::query("INSERT INTO items (id, barcode, name, brand) VALUES ($1, $2, $3, $4)")
            .bind(Uuid::now_v7().to_string())
            .bind("aaa")
            .bind("Cheese")
            .bind("")
            .execute(&repo.pool)
            .await
            .unwrap();

        let items = repo.get_all().await.unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].quantity, 1);
        assert!(items[0].added_at <= Utc::now());
    }
}
