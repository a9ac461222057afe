//! クライアント設定
//!
//! ホストページに埋め込まれたJSONで一部の値を上書きできる。
//! 指定のないキーはデフォルト値になる。

use serde::Deserialize;

use crate::error::{ClientError, Result};
use crate::validation::MAX_FILE_SIZE;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// 解析エンドポイント（multipart POST）
    pub analyze_endpoint: String,
    /// 画像を載せるフォームフィールド名
    pub upload_field: String,
    /// レポートダウンロードのパス（末尾にファイル名を付ける）
    pub report_endpoint: String,
    /// 直近の解析結果を保存するlocalStorageのキー
    pub storage_key: String,
    /// このパスを含むURLでは結果ページを表示する
    pub result_path_marker: String,
    pub max_file_size: u64,
    pub notification_timeout_ms: u32,
    pub loading_floor_ms: u32,
    pub scroll_delay_ms: u32,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            analyze_endpoint: "/analyze".into(),
            upload_field: "file".into(),
            report_endpoint: "/download_report/".into(),
            storage_key: "analysisResult".into(),
            result_path_marker: "/result/".into(),
            max_file_size: MAX_FILE_SIZE,
            notification_timeout_ms: 5000,
            loading_floor_ms: 500,
            scroll_delay_ms: 100,
        }
    }
}

impl ClientConfig {
    /// JSON文字列から読み込む
    pub fn from_json(json: &str) -> Result<Self> {
        let config: ClientConfig = serde_json::from_str(json)
            .map_err(|e| ClientError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        let required = [
            ("analyze_endpoint", &self.analyze_endpoint),
            ("upload_field", &self.upload_field),
            ("report_endpoint", &self.report_endpoint),
            ("storage_key", &self.storage_key),
            ("result_path_marker", &self.result_path_marker),
        ];
        for (name, value) in required {
            if value.trim().is_empty() {
                return Err(ClientError::Config(format!("{} must not be empty", name)));
            }
        }
        if self.max_file_size == 0 {
            return Err(ClientError::Config("max_file_size must be positive".into()));
        }
        Ok(())
    }

    /// 結果ページのURLかどうか
    pub fn is_result_page(&self, pathname: &str) -> bool {
        pathname.contains(&self.result_path_marker)
    }

    /// レポートダウンロードURL
    pub fn report_url(&self, report_filename: &str) -> String {
        format!("{}{}", self.report_endpoint, report_filename)
    }
}
