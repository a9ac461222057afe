//! 画面の状態（シグナル）
//!
//! コントローラからの通知をシグナルに反映する。コンポーネントは
//! ここのシグナルを読むだけで、状態を直接書き換えない。

use gloo::console;
use gloo::timers::future::TimeoutFuture;
use leptos::html::Input;
use leptos::prelude::*;
use leptos::task::spawn_local;
use web_sys::{ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

use skinai_common::{ClientConfig, PreviewView, ResultView, UploadView};

pub const RESULTS_SECTION_ID: &str = "resultsSection";

/// エラー通知
#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub message: String,
}

/// 画面右上のエラー通知一覧
///
/// 通知は一定時間後に自動で消える。×ボタンで先に消すこともできる。
#[derive(Clone, Copy)]
pub struct Notifications {
    pub items: RwSignal<Vec<Toast>>,
    next_id: RwSignal<u64>,
    timeout_ms: u32,
}

impl Notifications {
    pub fn new(timeout_ms: u32) -> Self {
        Self {
            items: RwSignal::new(Vec::new()),
            next_id: RwSignal::new(0),
            timeout_ms,
        }
    }

    pub fn error(&self, message: String) {
        let id = self.next_id.get_untracked();
        self.next_id.set(id + 1);
        self.items.update(|items| items.push(Toast { id, message }));

        let this = *self;
        let timeout_ms = self.timeout_ms;
        spawn_local(async move {
            TimeoutFuture::new(timeout_ms).await;
            this.dismiss(id);
        });
    }

    pub fn dismiss(&self, id: u64) {
        self.items.try_update(|items| items.retain(|toast| toast.id != id));
    }
}

/// アップロード画面のシグナル
#[derive(Clone, Copy)]
pub struct PageSignals {
    pub preview: RwSignal<Option<PreviewView>>,
    pub result: RwSignal<Option<ResultView>>,
    /// 送信中（ボタン無効化）
    pub busy: RwSignal<bool>,
    /// ローディング表示（送信完了後も少し残す）
    pub overlay: RwSignal<bool>,
    pub notifications: Notifications,
    pub file_input: NodeRef<Input>,
    loading_floor_ms: u32,
    scroll_delay_ms: u32,
}

impl PageSignals {
    pub fn new(config: &ClientConfig, notifications: Notifications) -> Self {
        Self {
            preview: RwSignal::new(None),
            result: RwSignal::new(None),
            busy: RwSignal::new(false),
            overlay: RwSignal::new(false),
            notifications,
            file_input: NodeRef::new(),
            loading_floor_ms: config.loading_floor_ms,
            scroll_delay_ms: config.scroll_delay_ms,
        }
    }
}

impl UploadView for PageSignals {
    fn show_preview(&self, preview: PreviewView) {
        self.preview.set(Some(preview));
    }

    fn reset(&self) {
        if let Some(input) = self.file_input.get_untracked() {
            input.set_value("");
        }
        self.preview.set(None);
        self.result.set(None);
    }

    fn set_busy(&self, busy: bool) {
        self.busy.set(busy);
        if busy {
            self.overlay.set(true);
            return;
        }

        let this = *self;
        spawn_local(async move {
            TimeoutFuture::new(this.loading_floor_ms).await;
            // 待っている間に次の送信が始まっていたら消さない
            if !this.busy.get_untracked() {
                this.overlay.set(false);
            }
        });
    }

    fn show_result(&self, result: ResultView) {
        self.result.set(Some(result));

        let delay = self.scroll_delay_ms;
        spawn_local(async move {
            TimeoutFuture::new(delay).await;
            scroll_to_results();
        });
    }

    fn show_error(&self, message: String) {
        self.notifications.error(message);
    }
}

fn scroll_to_results() {
    let Some(section) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(RESULTS_SECTION_ID))
    else {
        console::warn!("結果セクションが見つかりません");
        return;
    };

    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    options.set_block(ScrollLogicalPosition::Start);
    section.scroll_into_view_with_scroll_into_view_options(&options);
}
