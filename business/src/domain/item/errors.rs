#[derive(Debug, thiserror::Error)]
pub enum ItemError {
    #[error("item.barcode_invalid")]
    BarcodeInvalid,
    #[error("item.name_empty")]
    NameEmpty,
    #[error("item.addition_date_invalid")]
    AdditionDateInvalid,
    #[error("item.expiration_date_invalid")]
    ExpirationDateInvalid,
    #[error("item.quantity_invalid")]
    QuantityInvalid,
    #[error("item.unsupported_sort_mode")]
    UnsupportedSortMode(String),
    #[error("item.not_found")]
    NotFound,
    #[error("item.lookup_failed")]
    LookupFailed,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}

impl ItemError {
    /// Maps a repository error, turning `NotFound` into the item-level variant.
    pub fn from_lookup(error: crate::domain::errors::RepositoryError) -> Self {
        match error {
            crate::domain::errors::RepositoryError::NotFound => ItemError::NotFound,
            other => ItemError::Repository(other),
        }
    }

    /// Returns true for errors caused by caller input rather than by a dependency.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            ItemError::BarcodeInvalid
                | ItemError::NameEmpty
                | ItemError::AdditionDateInvalid
                | ItemError::ExpirationDateInvalid
                | ItemError::QuantityInvalid
                | ItemError::UnsupportedSortMode(_)
        )
    }
}
