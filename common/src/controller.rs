//! アップロード画面のコントローラ
//!
//! 選択中のファイル・送信中フラグ・直近の結果を `UploadState` にまとめ、
//! 画面操作（選択 / 削除 / 解析 / レポート取得）をここで処理する。
//! ブラウザ依存の処理は `Platform` と `UploadView` に分離している。
//!
//! 状態の借用はawaitをまたがない。送信中に再度 `submit` が呼ばれても
//! フラグを見て即座に戻る。

use std::cell::RefCell;

use serde_json::Value;

use crate::config::ClientConfig;
use crate::error::{ClientError, Result};
use crate::storage::ResultStore;
use crate::types::{AnalysisResult, SelectedFile};
use crate::validation::validate_image;
use crate::view::{PreviewView, ResultView};

/// ブラウザ側の非同期処理
#[allow(async_fn_in_trait)]
pub trait Platform {
    type Payload: Clone;

    /// ファイルをData URLに変換
    async fn read_data_url(&self, file: &SelectedFile<Self::Payload>) -> Result<String>;

    /// 解析エンドポイントへ送信し、レスポンスのJSONを返す
    ///
    /// JSONとして読めないレスポンスは `ClientError::Transport`。
    async fn post_image(&self, file: &SelectedFile<Self::Payload>) -> Result<Value>;
}

/// 画面への反映
pub trait UploadView {
    fn show_preview(&self, preview: PreviewView);
    /// プレビュー・結果を消してアップロード案内に戻す
    fn reset(&self);
    /// 送信中表示（ボタン無効化・ローディング）
    fn set_busy(&self, busy: bool);
    fn show_result(&self, result: ResultView);
    fn show_error(&self, message: String);
}

/// 画面の状態
#[derive(Debug)]
pub struct UploadState<P> {
    pub selected: Option<SelectedFile<P>>,
    pub in_flight: bool,
    pub last_result: Option<AnalysisResult>,
    /// 選択のたびに進める。古いプレビューの反映を防ぐ
    generation: u64,
}

impl<P> Default for UploadState<P> {
    fn default() -> Self {
        Self {
            selected: None,
            in_flight: false,
            last_result: None,
            generation: 0,
        }
    }
}

/// `submit` の結果
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// 送信中のため何もしなかった
    Busy,
    /// ファイル未選択
    NoFile,
    Completed {
        result: AnalysisResult,
        /// 保存に失敗しても解析自体は成功扱い
        persist_error: Option<ClientError>,
    },
    Failed(ClientError),
}

pub struct UploadController<P: Platform, S: ResultStore, V: UploadView> {
    platform: P,
    store: S,
    view: V,
    config: ClientConfig,
    state: RefCell<UploadState<P::Payload>>,
}

impl<P: Platform, S: ResultStore, V: UploadView> UploadController<P, S, V> {
    pub fn new(platform: P, store: S, view: V, config: ClientConfig) -> Self {
        Self {
            platform,
            store,
            view,
            config,
            state: RefCell::new(UploadState::default()),
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn is_busy(&self) -> bool {
        self.state.borrow().in_flight
    }

    pub fn has_selection(&self) -> bool {
        self.state.borrow().selected.is_some()
    }

    pub fn last_result(&self) -> Option<AnalysisResult> {
        self.state.borrow().last_result.clone()
    }

    /// ファイル選択（ピッカー・ドロップ共通）
    ///
    /// 検証に通ればプレビューを作成する。不正なファイルは通知して終了。
    pub async fn select(&self, file: SelectedFile<P::Payload>) -> Result<()> {
        if let Err(e) = validate_image(&file.mime_type, file.size, self.config.max_file_size) {
            let error = ClientError::from(e);
            self.view.show_error(error.to_string());
            return Err(error);
        }

        let generation = {
            let mut state = self.state.borrow_mut();
            state.generation += 1;
            state.selected = Some(file.clone());
            state.generation
        };

        let decoded = self.platform.read_data_url(&file).await;

        if self.state.borrow().generation != generation {
            // 読み込み中に削除・再選択された
            return Ok(());
        }

        match decoded {
            Ok(data_url) => {
                self.view
                    .show_preview(PreviewView::new(data_url, &file.name, file.size));
                Ok(())
            }
            Err(e) => {
                {
                    let mut state = self.state.borrow_mut();
                    state.selected = None;
                    state.generation += 1;
                }
                self.view.show_error(e.to_string());
                Err(e)
            }
        }
    }

    /// 画像を取り消してアップロード案内に戻す
    pub fn remove(&self) {
        {
            let mut state = self.state.borrow_mut();
            state.selected = None;
            state.generation += 1;
        }
        self.view.reset();
    }

    /// 選択中の画像を解析
    ///
    /// 同時に送信できるのは1件のみ。結果に関わらず送信中フラグは必ず戻す。
    pub async fn submit(&self) -> SubmitOutcome {
        let file = {
            let mut state = self.state.borrow_mut();
            if state.in_flight {
                return SubmitOutcome::Busy;
            }
            let Some(file) = state.selected.clone() else {
                return SubmitOutcome::NoFile;
            };
            state.in_flight = true;
            file
        };
        self.view.set_busy(true);

        let outcome = match self.analyze(&file).await {
            Ok((result, raw)) => {
                self.view.show_result(ResultView::from_result(&result));
                let persist_error = self.store.save(&self.config.storage_key, &raw).err();
                self.state.borrow_mut().last_result = Some(result.clone());
                SubmitOutcome::Completed {
                    result,
                    persist_error,
                }
            }
            Err(e) => {
                self.view.show_error(e.to_string());
                SubmitOutcome::Failed(e)
            }
        };

        self.state.borrow_mut().in_flight = false;
        self.view.set_busy(false);
        outcome
    }

    async fn analyze(&self, file: &SelectedFile<P::Payload>) -> Result<(AnalysisResult, Value)> {
        let raw = self.platform.post_image(file).await?;
        let result = AnalysisResult::from_value(&raw)?.into_success()?;
        Ok((result, raw))
    }

    /// 直近の結果のレポートURL
    ///
    /// ファイル名がなければ通知してエラーを返す。
    pub fn report_url(&self) -> Result<String> {
        let filename = self
            .state
            .borrow()
            .last_result
            .as_ref()
            .and_then(|r| r.report_filename.clone())
            .filter(|name| !name.trim().is_empty());

        match filename {
            Some(name) => Ok(self.config.report_url(&name)),
            None => {
                let error = ClientError::MissingReport;
                self.view.show_error(error.to_string());
                Err(error)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;
    use futures::executor::block_on;
    use serde_json::json;
    use std::cell::Cell;

    #[derive(Debug, Clone, PartialEq)]
    enum Event {
        Preview(PreviewView),
        Reset,
        Busy(bool),
        Result(ResultView),
        Error(String),
    }

    #[derive(Default)]
    struct RecordingView {
        events: RefCell<Vec<Event>>,
    }

    impl UploadView for &RecordingView {
        fn show_preview(&self, preview: PreviewView) {
            self.events.borrow_mut().push(Event::Preview(preview));
        }
        fn reset(&self) {
            self.events.borrow_mut().push(Event::Reset);
        }
        fn set_busy(&self, busy: bool) {
            self.events.borrow_mut().push(Event::Busy(busy));
        }
        fn show_result(&self, result: ResultView) {
            self.events.borrow_mut().push(Event::Result(result));
        }
        fn show_error(&self, message: String) {
            self.events.borrow_mut().push(Event::Error(message));
        }
    }

    struct StubPlatform {
        response: RefCell<Result<Value>>,
        posts: Cell<usize>,
    }

    impl StubPlatform {
        fn returning(response: Result<Value>) -> Self {
            Self {
                response: RefCell::new(response),
                posts: Cell::new(0),
            }
        }
    }

    impl Platform for &StubPlatform {
        type Payload = Vec<u8>;

        async fn read_data_url(&self, file: &SelectedFile<Vec<u8>>) -> Result<String> {
            Ok(format!("data:{};base64,{}", file.mime_type, file.payload.len()))
        }

        async fn post_image(&self, _file: &SelectedFile<Vec<u8>>) -> Result<Value> {
            self.posts.set(self.posts.get() + 1);
            self.response.borrow().clone()
        }
    }

    fn png(size: u64) -> SelectedFile<Vec<u8>> {
        SelectedFile::new("mole.png", "image/png", size, vec![1, 2, 3])
    }

    #[test]
    fn test_select_valid_file_shows_preview() {
        let platform = StubPlatform::returning(Ok(json!({})));
        let store = MemoryStore::new();
        let view = RecordingView::default();
        let controller = UploadController::new(&platform, &store, &view, ClientConfig::default());

        block_on(controller.select(png(2048))).expect("選択失敗");

        assert!(controller.has_selection());
        assert_eq!(
            view.events.borrow().as_slice(),
            &[Event::Preview(PreviewView {
                data_url: "data:image/png;base64,3".to_string(),
                file_name: "mole.png".to_string(),
                size_text: "2 KB".to_string(),
            })]
        );
    }

    #[test]
    fn test_select_invalid_file_is_rejected() {
        let platform = StubPlatform::returning(Ok(json!({})));
        let store = MemoryStore::new();
        let view = RecordingView::default();
        let controller = UploadController::new(&platform, &store, &view, ClientConfig::default());

        let file = SelectedFile::new("scan.webp", "image/webp", 10, vec![]);
        let result = block_on(controller.select(file));

        assert!(matches!(result, Err(ClientError::Validation(_))));
        assert!(!controller.has_selection());
        assert_eq!(
            view.events.borrow().as_slice(),
            &[Event::Error(
                "Please select a valid image file (PNG, JPG, JPEG, GIF, BMP)".to_string()
            )]
        );
    }

    #[test]
    fn test_remove_clears_selection() {
        let platform = StubPlatform::returning(Ok(json!({})));
        let store = MemoryStore::new();
        let view = RecordingView::default();
        let controller = UploadController::new(&platform, &store, &view, ClientConfig::default());

        block_on(controller.select(png(10))).expect("選択失敗");
        controller.remove();

        assert!(!controller.has_selection());
        assert_eq!(view.events.borrow().last(), Some(&Event::Reset));
        assert_eq!(block_on(controller.submit()), SubmitOutcome::NoFile);
        assert_eq!(platform.posts.get(), 0);
    }

    #[test]
    fn test_submit_without_file() {
        let platform = StubPlatform::returning(Ok(json!({"success": true})));
        let store = MemoryStore::new();
        let view = RecordingView::default();
        let controller = UploadController::new(&platform, &store, &view, ClientConfig::default());

        assert_eq!(block_on(controller.submit()), SubmitOutcome::NoFile);
        assert!(view.events.borrow().is_empty());
    }

    #[test]
    fn test_submit_success_stores_raw_response() {
        let response = json!({
            "success": true,
            "prediction": "Eczema",
            "confidence": 87,
            "info": {"severity": "Moderate risk"},
            "report_filename": "r1.pdf",
            "timestamp": "20250101_120000"
        });
        let platform = StubPlatform::returning(Ok(response.clone()));
        let store = MemoryStore::new();
        let view = RecordingView::default();
        let controller = UploadController::new(&platform, &store, &view, ClientConfig::default());

        block_on(controller.select(png(10))).expect("選択失敗");
        let outcome = block_on(controller.submit());

        assert!(matches!(outcome, SubmitOutcome::Completed { persist_error: None, .. }));
        assert_eq!(store.load("analysisResult").expect("読込失敗"), Some(response));
        assert_eq!(controller.report_url(), Ok("/download_report/r1.pdf".to_string()));
        assert!(!controller.is_busy());
    }

    #[test]
    fn test_report_url_without_result() {
        let platform = StubPlatform::returning(Ok(json!({})));
        let store = MemoryStore::new();
        let view = RecordingView::default();
        let controller = UploadController::new(&platform, &store, &view, ClientConfig::default());

        assert_eq!(controller.report_url(), Err(ClientError::MissingReport));
        assert_eq!(
            view.events.borrow().as_slice(),
            &[Event::Error("Report file not available".to_string())]
        );
    }

    #[test]
    fn test_busy_events_bracket_request() {
        let platform = StubPlatform::returning(Err(ClientError::Transport("offline".into())));
        let store = MemoryStore::new();
        let view = RecordingView::default();
        let controller = UploadController::new(&platform, &store, &view, ClientConfig::default());

        block_on(controller.select(png(10))).expect("選択失敗");
        view.events.borrow_mut().clear();
        block_on(controller.submit());

        assert_eq!(
            view.events.borrow().as_slice(),
            &[
                Event::Busy(true),
                Event::Error("Network error. Please check your connection and try again.".to_string()),
                Event::Busy(false),
            ]
        );
    }
}
