//! 結果ページ
//!
//! 送信はせず、localStorageに保存された直近の結果を表示する。

use gloo::console;
use leptos::prelude::*;
use skinai_common::{load_saved_result, ClientConfig, ResultView};

use crate::app::navigate_to;
use crate::components::header::Header;
use crate::components::result_parts::{ConditionBadge, ConfidenceMeter, ItemList, SeverityBadge};
use crate::storage::LocalResultStore;

#[component]
pub fn ResultPage(config: ClientConfig) -> impl IntoView {
    let saved = match load_saved_result(&LocalResultStore, &config.storage_key) {
        Ok(saved) => saved,
        Err(e) => {
            console::warn!("保存済みの結果を読み込めません:", e.to_string());
            None
        }
    };

    let content = match saved {
        Some(result) => {
            let result = ResultView::from_result(&result);
            let download_url = result
                .report_filename
                .as_deref()
                .map(|name| config.report_url(name));
            let has_report = download_url.is_some();
            view! {
                <DiagnosisCard result=result />
                <div class="result-actions">
                    <button
                        id="downloadBtn"
                        class="btn btn-download"
                        disabled=!has_report
                        on:click=move |_| {
                            if let Some(url) = &download_url {
                                navigate_to(url);
                            }
                        }
                    >
                        <i class="fas fa-download"></i>
                        " Download Full Report"
                    </button>
                    <a class="btn btn-secondary" href="/">
                        <i class="fas fa-plus"></i>
                        " Analyze Another Image"
                    </a>
                </div>
            }
            .into_any()
        }
        None => view! {
            <div class="empty-result">
                <p>"No saved analysis was found."</p>
                <a class="btn btn-primary" href="/">"Analyze an image"</a>
            </div>
        }
        .into_any(),
    };

    view! {
        <div class="container">
            <Header />
            <section class="result-page">{content}</section>
        </div>
    }
}

#[component]
fn DiagnosisCard(result: ResultView) -> impl IntoView {
    view! {
        <div id="diagnosisCard" class="diagnosis-card">
            <div class="diagnosis-header">
                <ConditionBadge result=result.clone() />
                <div class="confidence-score">
                    <div class="confidence-circle">
                        <svg class="confidence-ring">
                            <circle class="confidence-ring-bg" cx="50" cy="50" r="45"></circle>
                            <circle
                                class="confidence-ring-fill"
                                cx="50"
                                cy="50"
                                r="45"
                                style=result.ring_style()
                            ></circle>
                        </svg>
                        <span class="confidence-text">{result.confidence_text()}</span>
                    </div>
                    <p>"AI Confidence"</p>
                </div>
            </div>

            <div class="diagnosis-content">
                <div class="info-section">
                    <h3><i class="fas fa-info-circle"></i>" Description"</h3>
                    <p>{result.description.clone()}</p>
                </div>

                <div class="confidence-card">
                    <h3><i class="fas fa-chart-line"></i>" AI Confidence Assessment"</h3>
                    <ConfidenceMeter
                        result=result.clone()
                        note="This represents the AI model's certainty based on learned visual patterns."
                    />
                </div>

                <div class="info-section">
                    <h3><i class="fas fa-pills"></i>" Potential Treatment Options"</h3>
                    <ItemList items=result.treatment_items.clone() />
                </div>

                <div class="info-section">
                    <h3><i class="fas fa-notes-medical"></i>" Associated Symptoms"</h3>
                    <ItemList items=result.symptoms.clone() />
                </div>

                <div class="info-section">
                    <h3><i class="fas fa-dna"></i>" Contributing Factors"</h3>
                    <ItemList items=result.causes.clone() />
                </div>

                <div class="severity-indicator">
                    <SeverityBadge result=result.clone() />
                </div>

                <div class="accuracy-warning">
                    <div class="warning-header">
                        <i class="fas fa-exclamation-triangle"></i>
                        <h3>"Important Accuracy Notice"</h3>
                    </div>
                    <p>
                        "This AI prediction is "<strong>"not 100% accurate"</strong>
                        ". Many skin conditions appear visually similar, making definitive diagnosis challenging. This analysis should be used as preliminary information only."
                    </p>
                </div>

                <div class="disclaimer">
                    <i class="fas fa-user-md"></i>
                    <div>
                        <h4>"Professional Medical Consultation Required"</h4>
                        <p>"This AI analysis is for educational purposes only and should not replace professional medical diagnosis. Please consult a qualified dermatologist or healthcare provider for proper evaluation, diagnosis, and treatment recommendations."</p>
                    </div>
                </div>
            </div>
        </div>
    }
}
