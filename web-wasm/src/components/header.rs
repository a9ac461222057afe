//! ヘッダーコンポーネント

use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="hero">
            <h1>"SkinAI - Skin Condition Analysis"</h1>
            <p class="text-muted">"Upload a clear photo of the affected area for a preliminary AI assessment"</p>
        </header>
    }
}
