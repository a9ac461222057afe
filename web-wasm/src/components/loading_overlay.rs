//! ローディング表示コンポーネント
//!
//! 解析時間は分からないため、進捗は出さず不定のアニメーションにする。

use leptos::prelude::*;

#[component]
pub fn LoadingOverlay(visible: RwSignal<bool>) -> impl IntoView {
    view! {
        <div
            class="loading-overlay"
            style=move || if visible.get() { "display: flex" } else { "display: none" }
        >
            <div class="loading-content">
                <div class="progress-bar">
                    <div class="progress-fill indeterminate" />
                </div>
                <p class="progress-text">"Analyzing image..."</p>
            </div>
        </div>
    }
}
