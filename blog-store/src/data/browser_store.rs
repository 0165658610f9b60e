//! Browser `localStorage` substrate for wasm builds.

use gloo_storage::{LocalStorage, Storage};

use crate::data::substrate::KeyValueStore;
use crate::domain::error::StoreError;

/// Reads and writes raw strings in `window.localStorage`.
#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserStore;

fn js_fault(err: wasm_bindgen::JsValue) -> StoreError {
    StoreError::Substrate(format!("{err:?}"))
}

impl KeyValueStore for BrowserStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        LocalStorage::raw().get_item(key).map_err(js_fault)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        LocalStorage::raw().set_item(key, value).map_err(js_fault)
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        LocalStorage::raw().remove_item(key).map_err(js_fault)
    }
}
