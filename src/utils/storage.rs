use serde::{de::DeserializeOwned, Serialize};
use web_sys::{window, Storage};

/// Errores de acceso a localStorage
#[derive(Debug, Clone, PartialEq)]
pub enum StorageError {
    /// No hay `window` o el navegador bloquea localStorage (modo privado, iframe)
    Unavailable,
    Serialize(String),
    Write,
    Remove,
}

impl std::fmt::Display for StorageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StorageError::Unavailable => write!(f, "localStorage is not available"),
            StorageError::Serialize(msg) => write!(f, "Could not serialize value: {}", msg),
            StorageError::Write => write!(f, "Could not write to localStorage"),
            StorageError::Remove => write!(f, "Could not remove key from localStorage"),
        }
    }
}

impl std::error::Error for StorageError {}

pub fn get_local_storage() -> Option<Storage> {
    window()?.local_storage().ok()?
}

pub fn save_to_storage<T: Serialize>(key: &str, value: &T) -> Result<(), StorageError> {
    let storage = get_local_storage().ok_or(StorageError::Unavailable)?;
    let json = serde_json::to_string(value).map_err(|e| StorageError::Serialize(e.to_string()))?;
    storage
        .set_item(key, &json)
        .map_err(|_| StorageError::Write)?;
    Ok(())
}

pub fn load_from_storage<T: DeserializeOwned>(key: &str) -> Option<T> {
    let storage = get_local_storage()?;
    let json = storage.get_item(key).ok()??;
    serde_json::from_str(&json).ok()
}

pub fn remove_from_storage(key: &str) -> Result<(), StorageError> {
    let storage = get_local_storage().ok_or(StorageError::Unavailable)?;
    storage.remove_item(key).map_err(|_| StorageError::Remove)?;
    Ok(())
}
