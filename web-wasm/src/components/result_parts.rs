//! 解析結果の共通パーツ
//!
//! インライン結果と結果ページで同じ見た目にするため、バッジ・信頼度バー・
//! リスクレベル・リストはここにまとめる。

use leptos::prelude::*;
use skinai_common::ResultView;

/// 症状名のバッジ（背景色は結果の色）
#[component]
pub fn ConditionBadge(result: ResultView) -> impl IntoView {
    view! {
        <div class="condition-badge" style=result.badge_style()>
            <i class="fas fa-stethoscope"></i>
            <span>{result.label.clone()}</span>
        </div>
    }
}

/// 信頼度バー
#[component]
pub fn ConfidenceMeter(result: ResultView, note: &'static str) -> impl IntoView {
    view! {
        <div class="confidence-content">
            <div class="confidence-bar-container">
                <div class="confidence-bar" style=result.bar_style()></div>
            </div>
            <div class="confidence-text-large">{result.confidence_text()}</div>
        </div>
        <p class="confidence-note">{note}</p>
    }
}

/// リスクレベル
#[component]
pub fn SeverityBadge(result: ResultView) -> impl IntoView {
    view! {
        <span class="severity-label">"Risk Level:"</span>
        <span class=result.severity_class()>{result.severity_text.clone()}</span>
    }
}

/// 箇条書き
#[component]
pub fn ItemList(items: Vec<String>, #[prop(optional)] list_class: &'static str) -> impl IntoView {
    view! {
        <ul class=list_class>
            {items.into_iter().map(|item| view! { <li>{item}</li> }).collect_view()}
        </ul>
    }
}
