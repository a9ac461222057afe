//! アップロードエリアコンポーネント
//!
//! ドラッグ&ドロップとクリックでの選択を受け付ける。
//! ドロップされた複数ファイルのうち先頭のみを使う。

use leptos::prelude::*;
use web_sys::{DragEvent, File};

#[component]
pub fn UploadArea<FF, FP>(
    on_file: FF,
    on_pick: FP,
) -> impl IntoView
where
    FF: Fn(File) + 'static + Clone + Send + Sync,
    FP: Fn() + 'static + Clone + Send + Sync,
{
    let (is_dragover, set_is_dragover) = signal(false);

    let on_drop = move |ev: DragEvent| {
        ev.prevent_default();
        set_is_dragover.set(false);

        let file = ev
            .data_transfer()
            .and_then(|dt| dt.files())
            .and_then(|files| files.get(0));
        if let Some(file) = file {
            on_file(file);
        }
    };

    let on_dragover = move |ev: DragEvent| {
        ev.prevent_default();
        set_is_dragover.set(true);
    };

    let on_dragleave = move |ev: DragEvent| {
        ev.prevent_default();
        set_is_dragover.set(false);
    };

    view! {
        <div
            class=move || {
                let mut classes = vec!["upload-area"];
                if is_dragover.get() {
                    classes.push("drag-over");
                }
                classes.join(" ")
            }
            on:drop=on_drop
            on:dragover=on_dragover
            on:dragleave=on_dragleave
            on:click=move |_| on_pick()
        >
            <div class="upload-icon">
                <i class="fas fa-cloud-upload-alt"></i>
            </div>
            <p>"Drag & drop an image here, or click to browse"</p>
            <p class="text-muted">"Supported formats: PNG, JPG, JPEG, GIF, BMP (max 16 MB)"</p>
        </div>
    }
}
