use serde::{Serialize, de::DeserializeOwned};

use crate::backend::StateStore;
use crate::error::StorageError;

/// Load a JSON state snapshot. `Ok(None)` means nothing has been saved yet.
pub fn load_state<T: DeserializeOwned>(store: &dyn StateStore) -> Result<Option<T>, StorageError> {
    let Some(bytes) = store.read()? else {
        return Ok(None);
    };
    let value: T = serde_json::from_slice(&bytes)?;
    Ok(Some(value))
}

/// Save a JSON state snapshot, replacing whatever was stored before.
pub fn save_state<T: Serialize>(store: &dyn StateStore, value: &T) -> Result<(), StorageError> {
    let body = serde_json::to_vec_pretty(value)?;
    store.write(&body)
}
