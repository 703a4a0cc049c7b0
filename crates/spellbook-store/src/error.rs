use thiserror::Error;

use spellbook_storage::StorageError;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("spell title is empty")]
    EmptyTitle,

    #[error("spell code is empty")]
    EmptyCode,

    #[error("storage error: {0}")]
    Storage(#[from] StorageError),
}
