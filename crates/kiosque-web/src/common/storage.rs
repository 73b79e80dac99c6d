use kiosque_lib::{
    error::{Error, Result},
    favorites::Storage,
};

use crate::utils::local_storage;

/// `window.localStorage` as a favorites backend.
#[derive(Clone)]
pub struct LocalStorage(web_sys::Storage);

impl LocalStorage {
    pub fn new() -> Self {
        Self(local_storage())
    }
}

impl Storage for LocalStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        self.0
            .get_item(key)
            .map_err(|e| Error::Storage(format!("error get {}: {:?}", key, e)))
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        self.0
            .set_item(key, value)
            .map_err(|e| Error::Storage(format!("error set {}: {:?}", key, e)))
    }
}
