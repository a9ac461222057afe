//! 解析結果の保存
//!
//! ブラウザではlocalStorage、テストではメモリ上のストアを使う。
//! レスポンスのJSONは加工せずそのまま保存する。

use std::cell::RefCell;
use std::collections::HashMap;

use serde_json::Value;

use crate::error::Result;
use crate::types::AnalysisResult;

/// キー・バリューストア
pub trait ResultStore {
    fn load(&self, key: &str) -> Result<Option<Value>>;
    fn save(&self, key: &str, value: &Value) -> Result<()>;
}

/// メモリ上のストア
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, Value>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl ResultStore for MemoryStore {
    fn load(&self, key: &str) -> Result<Option<Value>> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn save(&self, key: &str, value: &Value) -> Result<()> {
        self.entries.borrow_mut().insert(key.to_string(), value.clone());
        Ok(())
    }
}

impl<S: ResultStore + ?Sized> ResultStore for &S {
    fn load(&self, key: &str) -> Result<Option<Value>> {
        (**self).load(key)
    }

    fn save(&self, key: &str, value: &Value) -> Result<()> {
        (**self).save(key, value)
    }
}

/// 保存済みの解析結果を読み込む
///
/// 未保存・空オブジェクトの場合は `None`。
pub fn load_saved_result<S: ResultStore + ?Sized>(store: &S, key: &str) -> Result<Option<AnalysisResult>> {
    let Some(value) = store.load(key)? else {
        return Ok(None);
    };
    if value.as_object().is_some_and(|map| map.is_empty()) {
        return Ok(None);
    }
    AnalysisResult::from_value(&value).map(Some)
}
