use chrono::{DateTime, SecondsFormat, SubsecRound, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use business::domain::errors::RepositoryError;
use business::domain::item::model::Item;

/// Raw `items` row. Identifiers and timestamps are stored as text.
#[derive(Debug, FromRow)]
pub struct ItemEntity {
    pub id: String,
    pub barcode: String,
    pub name: String,
    pub brand: String,
    pub quantity: i64,
    pub expiration_date: Option<String>,
    pub added_at: String,
}

impl ItemEntity {
    pub fn into_domain(self) -> Result<Item, RepositoryError> {
        let id = Uuid::parse_str(&self.id).map_err(|e| {
            tracing::error!(id = %self.id, error = %e, "Corrupt item identifier");
            RepositoryError::DatabaseError
        })?;
        let expiration_date = self
            .expiration_date
            .as_deref()
            .map(parse_timestamp)
            .transpose()?;

        Ok(Item::from_repository(
            id,
            self.barcode,
            self.name,
            self.brand,
            self.quantity,
            expiration_date,
            parse_timestamp(&self.added_at)?,
        ))
    }
}

/// Fixed-width RFC 3339 in UTC, so text order is chronological order.
pub fn format_timestamp(value: &DateTime<Utc>) -> String {
    value.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Drops precision the column cannot hold.
pub fn storable(value: DateTime<Utc>) -> DateTime<Utc> {
    value.trunc_subsecs(3)
}

pub fn parse_timestamp(raw: &str) -> Result<DateTime<Utc>, RepositoryError> {
    DateTime::parse_from_rfc3339(raw)
        .map(|value| value.with_timezone(&Utc))
        .map_err(|e| {
            tracing::error!(value = raw, error = %e, "Corrupt item timestamp");
            RepositoryError::DatabaseError
        })
}
