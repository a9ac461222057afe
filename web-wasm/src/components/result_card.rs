//! 解析直後のインライン結果

use leptos::prelude::*;
use skinai_common::ResultView;

use crate::components::result_parts::{ConditionBadge, ConfidenceMeter, ItemList, SeverityBadge};

#[component]
pub fn ResultCard<FD, FR>(
    result: ResultView,
    image_src: Option<String>,
    on_download: FD,
    on_reset: FR,
) -> impl IntoView
where
    FD: Fn(()) + 'static + Clone + Send + Sync,
    FR: Fn(()) + 'static + Clone + Send + Sync,
{
    view! {
        <div class="result-card animate-fade-up">
            <div class="result-header">
                <h2>"AI Analysis Complete"</h2>
                <p>"Preliminary skin condition assessment using artificial intelligence"</p>
            </div>

            <div class="result-content-grid">
                <div class="result-image">
                    {image_src.map(|src| view! { <img src=src alt="Analyzed Image" /> })}
                    <div class="scan-overlay"></div>
                </div>

                <div class="result-details">
                    <div class="diagnosis-summary">
                        <ConditionBadge result=result.clone() />
                    </div>

                    <div class="diagnosis-info">
                        <div class="info-card">
                            <h4><i class="fas fa-info-circle"></i>" Description"</h4>
                            <p>{result.description.clone()}</p>
                        </div>

                        <div class="confidence-card">
                            <h4><i class="fas fa-chart-line"></i>" AI Confidence Assessment"</h4>
                            <ConfidenceMeter
                                result=result.clone()
                                note="This percentage indicates how certain the AI model is about this prediction based on learned patterns."
                            />
                        </div>

                        <div class="info-card">
                            <h4><i class="fas fa-pills"></i>" Potential Treatment Options"</h4>
                            <p class="treatment-summary">{result.treatment_summary.clone()}</p>
                        </div>

                        <div class="info-card">
                            <h4><i class="fas fa-notes-medical"></i>" Associated Symptoms"</h4>
                            <ItemList items=result.symptoms.clone() list_class="symptoms-list" />
                        </div>

                        <div class="severity-display">
                            <SeverityBadge result=result.clone() />
                        </div>
                    </div>

                    <div class="result-actions">
                        <button
                            class="btn btn-download"
                            on:click={
                                let on_download = on_download.clone();
                                move |_| on_download(())
                            }
                        >
                            <i class="fas fa-download"></i>
                            " Download Full Report"
                        </button>
                        <button
                            class="btn btn-secondary"
                            on:click={
                                let on_reset = on_reset.clone();
                                move |_| on_reset(())
                            }
                        >
                            <i class="fas fa-plus"></i>
                            " Analyze Another Image"
                        </button>
                    </div>
                </div>
            </div>

            <div class="accuracy-warning">
                <div class="warning-header">
                    <i class="fas fa-exclamation-triangle"></i>
                    <h3>"Important Accuracy Notice"</h3>
                </div>
                <p>
                    "This AI prediction is "<strong>"not 100% accurate"</strong>
                    " and should be interpreted with caution. Many skin diseases can appear visually similar and may share overlapping characteristics, making precise differentiation challenging even for advanced AI systems. Factors such as lighting conditions, image quality, disease stage, and individual skin variations can significantly impact analysis accuracy."
                </p>
            </div>

            <div class="medical-disclaimer">
                <i class="fas fa-user-md"></i>
                <div class="disclaimer-content">
                    <h4>"Professional Medical Consultation Required"</h4>
                    <p>
                        "This AI analysis is for educational and preliminary screening purposes only. It should "
                        <strong>"never replace professional medical evaluation"</strong>
                        " by qualified dermatologists or healthcare professionals. Always consult medical experts for accurate diagnosis, proper evaluation, and appropriate treatment decisions."
                    </p>
                </div>
            </div>
        </div>
    }
}
