//! メインアプリケーションコンポーネント
//!
//! URLに応じてアップロード画面か結果ページを表示する。

use std::rc::Rc;

use gloo::console;
use leptos::prelude::*;
use leptos::task::spawn_local;
use skinai_common::{ClientConfig, SubmitOutcome, UploadController};
use web_sys::File;

use crate::api::analyze::{selected_file, BrowserPlatform};
use crate::components::{
    header::Header,
    loading_overlay::LoadingOverlay,
    notifications::ErrorNotifications,
    preview_panel::PreviewPanel,
    result_card::ResultCard,
    result_page::ResultPage,
    upload_area::UploadArea,
};
use crate::config::load_config;
use crate::state::{Notifications, PageSignals, RESULTS_SECTION_ID};
use crate::storage::LocalResultStore;

type PageController = UploadController<BrowserPlatform, LocalResultStore, PageSignals>;

/// ブラウザを指定URLへ遷移
pub fn navigate_to(url: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };
    if let Err(e) = window.location().set_href(url) {
        console::error!("遷移に失敗:", e);
    }
}

#[component]
pub fn App() -> impl IntoView {
    let config = load_config();
    let pathname = web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_default();

    if config.is_result_page(&pathname) {
        view! { <ResultPage config=config /> }.into_any()
    } else {
        view! { <UploadPage config=config /> }.into_any()
    }
}

/// アップロード画面
#[component]
fn UploadPage(config: ClientConfig) -> impl IntoView {
    let notifications = Notifications::new(config.notification_timeout_ms);
    let signals = PageSignals::new(&config, notifications);

    let controller: Rc<PageController> = Rc::new(UploadController::new(
        BrowserPlatform::new(&config),
        LocalResultStore,
        signals,
        config,
    ));
    let controller = StoredValue::new_local(controller);

    // ファイル選択（ピッカー・ドロップ共通）
    let on_file = move |file: File| {
        let controller = controller.get_value();
        spawn_local(async move {
            // 不正なファイルは通知済み
            let _ = controller.select(selected_file(file)).await;
        });
    };

    // 未選択のときだけファイルダイアログを開く
    let on_pick = move || {
        if controller.with_value(|c| c.has_selection()) {
            return;
        }
        if let Some(input) = signals.file_input.get_untracked() {
            input.click();
        }
    };

    let on_input_change = move |_| {
        let file = signals
            .file_input
            .get_untracked()
            .and_then(|input| input.files())
            .and_then(|files| files.get(0));
        if let Some(file) = file {
            on_file(file);
        }
    };

    // 解析開始ハンドラ
    let on_analyze = move |_: ()| {
        let controller = controller.get_value();
        spawn_local(async move {
            if let SubmitOutcome::Completed {
                persist_error: Some(e),
                ..
            } = controller.submit().await
            {
                console::warn!("解析結果を保存できませんでした:", e.to_string());
            }
        });
    };

    let on_remove = move |_: ()| controller.with_value(|c| c.remove());

    // レポートダウンロード
    let on_download = move |_: ()| {
        // ファイル名がない場合は通知済み
        if let Ok(url) = controller.with_value(|c| c.report_url()) {
            navigate_to(&url);
        }
    };

    view! {
        <div class="container">
            <Header />

            <section class="upload-section">
                <input
                    type="file"
                    id="imageInput"
                    accept="image/*"
                    style="display: none"
                    node_ref=signals.file_input
                    on:change=on_input_change
                />

                <Show when=move || signals.preview.with(Option::is_none)>
                    <UploadArea on_file=on_file on_pick=on_pick />
                </Show>

                {move || signals.preview.get().map(|preview| view! {
                    <PreviewPanel
                        preview=preview
                        busy=signals.busy
                        on_analyze=on_analyze
                        on_remove=on_remove
                    />
                })}
            </section>

            <section
                id=RESULTS_SECTION_ID
                class="results-section"
                style=move || if signals.result.with(Option::is_some) { "display: block" } else { "display: none" }
            >
                <div class="results-container">
                    {move || signals.result.get().map(|result| view! {
                        <ResultCard
                            result=result
                            image_src=signals.preview.get_untracked().map(|p| p.data_url)
                            on_download=on_download
                            on_reset=on_remove
                        />
                    })}
                </div>
            </section>

            <LoadingOverlay visible=signals.overlay />
            <ErrorNotifications notifications=signals.notifications />
        </div>
    }
}
