//! エラー型定義
//!
//! Displayの文言はそのまま画面の通知に表示される。

use thiserror::Error;

/// ファイル選択時のバリデーションエラー
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("Please select a valid image file (PNG, JPG, JPEG, GIF, BMP)")]
    UnsupportedType(String),

    #[error("Image is too large. Maximum size is {} MB.", .limit / (1024 * 1024))]
    TooLarge { size: u64, limit: u64 },
}

/// クライアント共通エラー型
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ClientError {
    #[error("{0}")]
    Validation(#[from] ValidationError),

    /// サーバーが返したエラー（success:false または不正なボディ）
    #[error("{0}")]
    Server(String),

    /// 通信エラー（詳細はログ用、画面には固定文言）
    #[error("Network error. Please check your connection and try again.")]
    Transport(String),

    #[error("Could not read the selected image: {0}")]
    FileRead(String),

    #[error("Report file not available")]
    MissingReport,

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Config error: {0}")]
    Config(String),
}

impl ClientError {
    /// 詳細情報（ログ出力用）
    pub fn detail(&self) -> String {
        match self {
            ClientError::Transport(detail) => detail.clone(),
            other => other.to_string(),
        }
    }
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, ClientError>;
