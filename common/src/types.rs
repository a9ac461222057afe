//! 解析結果・選択ファイルの型定義
//!
//! - SelectedFile: ユーザーが選んだ画像（送信前後で保持）
//! - AnalysisResult: /analyze のレスポンス
//! - ConditionInfo: 結果に含まれる症状の説明情報
//!
//! サーバーのレスポンスは型が揺れるため、serdeの派生ではなく
//! `from_value` で寛容にパースする。型が合わないフィールドは未設定扱い。

use serde_json::{Map, Value};

use crate::error::{ClientError, Result};

/// サーバーがエラー文言を返さなかった場合のメッセージ
pub const ANALYSIS_FAILED_MESSAGE: &str = "Analysis failed. Please try again.";

/// ユーザーが選択した画像
///
/// `P` はプラットフォーム側のペイロード（ブラウザでは `web_sys::File`）。
#[derive(Debug, Clone, PartialEq)]
pub struct SelectedFile<P> {
    pub name: String,
    pub mime_type: String,
    pub size: u64,
    pub payload: P,
}

impl<P> SelectedFile<P> {
    pub fn new(name: impl Into<String>, mime_type: impl Into<String>, size: u64, payload: P) -> Self {
        Self {
            name: name.into(),
            mime_type: mime_type.into(),
            size,
            payload,
        }
    }
}

/// 治療法（文字列1つ、またはリスト）
#[derive(Debug, Clone, PartialEq)]
pub enum Treatment {
    Text(String),
    Steps(Vec<String>),
}

/// 症状の説明情報
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConditionInfo {
    pub description: Option<String>,
    pub treatment: Option<Treatment>,
    pub symptoms: Option<Vec<String>>,
    pub causes: Option<Vec<String>>,
    pub severity: Option<String>,
    pub color: Option<String>,
}

/// 解析結果
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AnalysisResult {
    pub success: bool,
    pub prediction: Option<String>,
    pub confidence: Option<f64>,
    pub info: ConditionInfo,
    pub report_filename: Option<String>,
    /// サーバー側に保存されたアップロード画像名
    pub filename: Option<String>,
    pub timestamp: Option<String>,
    pub error: Option<String>,
}

impl AnalysisResult {
    /// JSON値からパース
    ///
    /// オブジェクト以外はサーバーエラー扱い。
    pub fn from_value(value: &Value) -> Result<Self> {
        let Some(map) = value.as_object() else {
            return Err(ClientError::Server(ANALYSIS_FAILED_MESSAGE.to_string()));
        };

        let info = map
            .get("info")
            .and_then(Value::as_object)
            .map(ConditionInfo::from_map)
            .unwrap_or_default();

        Ok(Self {
            success: get_bool(map, "success").unwrap_or(false),
            prediction: get_string(map, "prediction"),
            confidence: get_number(map, "confidence"),
            info,
            report_filename: get_string(map, "report_filename"),
            filename: get_string(map, "filename"),
            timestamp: get_string(map, "timestamp"),
            error: get_string(map, "error"),
        })
    }

    /// 成功レスポンスなら自身を、失敗ならサーバーエラーを返す
    pub fn into_success(self) -> Result<Self> {
        if self.success {
            Ok(self)
        } else {
            let message = self
                .error
                .filter(|e| !e.trim().is_empty())
                .unwrap_or_else(|| ANALYSIS_FAILED_MESSAGE.to_string());
            Err(ClientError::Server(message))
        }
    }
}

impl ConditionInfo {
    fn from_map(map: &Map<String, Value>) -> Self {
        let treatment = match map.get("treatment") {
            Some(Value::Array(_)) => get_list(map, "treatment").map(Treatment::Steps),
            Some(Value::String(s)) => Some(Treatment::Text(s.clone())),
            _ => None,
        };

        Self {
            description: get_string(map, "description"),
            treatment,
            symptoms: get_list(map, "symptoms"),
            causes: get_list(map, "causes"),
            severity: get_string(map, "severity"),
            color: get_string(map, "color"),
        }
    }
}

fn get_string(map: &Map<String, Value>, key: &str) -> Option<String> {
    map.get(key)?.as_str().map(str::to_string)
}

/// 真偽値のみ受け付ける（"true" や 1 は真偽値とみなさない）
fn get_bool(map: &Map<String, Value>, key: &str) -> Option<bool> {
    map.get(key)?.as_bool()
}

fn get_number(map: &Map<String, Value>, key: &str) -> Option<f64> {
    let value = map.get(key)?;
    if let Some(n) = value.as_f64() {
        return Some(n);
    }
    value.as_str().and_then(|s| s.trim().parse().ok())
}

/// 配列を文字列リストとして取得（文字列以外の要素はJSON表記）
fn get_list(map: &Map<String, Value>, key: &str) -> Option<Vec<String>> {
    let items = map.get(key)?.as_array()?;
    Some(
        items
            .iter()
            .filter(|item| !item.is_null())
            .map(|item| match item.as_str() {
                Some(s) => s.to_string(),
                None => item.to_string(),
            })
            .collect(),
    )
}
