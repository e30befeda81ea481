//! localStorage adapter for the core [`KeyValueStore`] seam.

use crate::dom;
use ens_core::KeyValueStore;
use web_sys::Storage;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BrowserStorageError {
    #[error("localStorage unavailable: {0}")]
    Unavailable(String),
    #[error("localStorage rejected `{op}` on `{key}`: {message}")]
    Rejected {
        op: &'static str,
        key: String,
        message: String,
    },
}

/// Handle on the page's `localStorage`.
///
/// The storage object is looked up on every call, so a store created during
/// server rendering simply reports [`BrowserStorageError::Unavailable`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BrowserStore;

impl BrowserStore {
    fn storage() -> Result<Storage, BrowserStorageError> {
        if dom::window().is_none() {
            return Err(BrowserStorageError::Unavailable("no window".to_string()));
        }
        dom::local_storage()
            .map_err(|err| BrowserStorageError::Unavailable(dom::js_error_message(&err)))
    }

    fn rejected(op: &'static str, key: &str, err: &wasm_bindgen::JsValue) -> BrowserStorageError {
        BrowserStorageError::Rejected {
            op,
            key: key.to_string(),
            message: dom::js_error_message(err),
        }
    }
}

impl KeyValueStore for BrowserStore {
    type Error = BrowserStorageError;

    fn get(&self, key: &str) -> Result<Option<String>, Self::Error> {
        Self::storage()?
            .get_item(key)
            .map_err(|err| Self::rejected("get", key, &err))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), Self::Error> {
        Self::storage()?
            .set_item(key, value)
            .map_err(|err| Self::rejected("set", key, &err))
    }

    fn remove(&self, key: &str) -> Result<(), Self::Error> {
        Self::storage()?
            .remove_item(key)
            .map_err(|err| Self::rejected("remove", key, &err))
    }
}
