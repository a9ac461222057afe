//! SkinAI Client Common Library
//!
//! 画像アップロード画面の型・ビューモデル・コントローラ。
//! ブラウザに依存しないため、ネイティブでテストできる。

pub mod config;
pub mod controller;
pub mod error;
pub mod severity;
pub mod storage;
pub mod types;
pub mod validation;
pub mod view;

pub use config::ClientConfig;
pub use controller::{Platform, SubmitOutcome, UploadController, UploadView};
pub use error::{ClientError, Result, ValidationError};
pub use severity::SeverityClass;
pub use storage::{load_saved_result, MemoryStore, ResultStore};
pub use types::{AnalysisResult, ConditionInfo, SelectedFile, Treatment};
pub use validation::{format_file_size, validate_image, ACCEPTED_MIME_TYPES, MAX_FILE_SIZE};
pub use view::{PreviewView, ResultView};
