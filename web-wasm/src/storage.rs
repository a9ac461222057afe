//! localStorageへの解析結果の保存

use gloo::storage::{errors::StorageError, LocalStorage, Storage};
use serde_json::Value;
use skinai_common::{ClientError, ResultStore};

/// ブラウザのlocalStorage
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalResultStore;

impl ResultStore for LocalResultStore {
    fn load(&self, key: &str) -> skinai_common::Result<Option<Value>> {
        match LocalStorage::get::<Value>(key) {
            Ok(value) => Ok(Some(value)),
            Err(StorageError::KeyNotFound(_)) => Ok(None),
            Err(e) => Err(ClientError::Storage(e.to_string())),
        }
    }

    fn save(&self, key: &str, value: &Value) -> skinai_common::Result<()> {
        LocalStorage::set(key, value).map_err(|e| ClientError::Storage(e.to_string()))
    }
}
