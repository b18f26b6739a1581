//! localStorage access (WASM only, no-op on native)

#[cfg(target_arch = "wasm32")]
use crate::shared::errors::AppError;
use crate::shared::errors::Result;

#[cfg(target_arch = "wasm32")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

#[cfg(target_arch = "wasm32")]
pub fn get_item(key: &str) -> Option<String> {
    local_storage()?.get_item(key).ok().flatten()
}

#[cfg(target_arch = "wasm32")]
pub fn set_item(key: &str, value: &str) -> Result<()> {
    let storage =
        local_storage().ok_or_else(|| AppError::Storage("localStorage unavailable".to_string()))?;
    storage
        .set_item(key, value)
        .map_err(|e| AppError::Storage(format!("{:?}", e)))
}

#[cfg(target_arch = "wasm32")]
pub fn remove_item(key: &str) -> Result<()> {
    let storage =
        local_storage().ok_or_else(|| AppError::Storage("localStorage unavailable".to_string()))?;
    storage
        .remove_item(key)
        .map_err(|e| AppError::Storage(format!("{:?}", e)))
}

#[cfg(not(target_arch = "wasm32"))]
pub fn get_item(_key: &str) -> Option<String> {
    None
}

#[cfg(not(target_arch = "wasm32"))]
pub fn set_item(_key: &str, _value: &str) -> Result<()> {
    // No-op on server
    Ok(())
}

#[cfg(not(target_arch = "wasm32"))]
pub fn remove_item(_key: &str) -> Result<()> {
    Ok(())
}

/// Read and decode a JSON value
pub fn get_json<T: serde::de::DeserializeOwned>(key: &str) -> Result<Option<T>> {
    match get_item(key) {
        Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
        None => Ok(None),
    }
}

pub fn set_json<T: serde::Serialize>(key: &str, value: &T) -> Result<()> {
    set_item(key, &serde_json::to_string(value)?)
}
