//! 表示用ビューモデル
//!
//! 解析結果をそのまま描画せず、フォールバック適用済みの値に変換してから
//! コンポーネントに渡す。インライン結果と結果ページは同じ `ResultView` を使う。

use crate::severity::SeverityClass;
use crate::types::{AnalysisResult, Treatment};
use crate::validation::format_file_size;

pub const DEFAULT_BADGE_COLOR: &str = "#17a2b8";
pub const UNKNOWN_LABEL: &str = "Unknown";
pub const NO_DESCRIPTION: &str = "No description available.";
pub const TREATMENT_FALLBACK: &str = "Consult healthcare provider for proper treatment options.";
pub const SYMPTOMS_FALLBACK: &str = "Consult healthcare provider for symptom evaluation";
pub const CAUSES_FALLBACK: &str = "Consult healthcare provider to identify contributing factors";
pub const TREATMENT_SEPARATOR: &str = " • ";

/// 信頼度リングの円周（r=45）
const RING_CIRCUMFERENCE: f64 = 283.0;

/// プレビュー表示
#[derive(Debug, Clone, PartialEq)]
pub struct PreviewView {
    pub data_url: String,
    pub file_name: String,
    pub size_text: String,
}

impl PreviewView {
    pub fn new(data_url: String, file_name: &str, size: u64) -> Self {
        Self {
            data_url,
            file_name: file_name.to_string(),
            size_text: format_file_size(size),
        }
    }

    pub fn name_line(&self) -> String {
        format!("File: {}", self.file_name)
    }

    pub fn size_line(&self) -> String {
        format!("Size: {}", self.size_text)
    }
}

/// 解析結果の表示
#[derive(Debug, Clone, PartialEq)]
pub struct ResultView {
    pub label: String,
    pub badge_color: String,
    pub description: String,
    pub confidence: f64,
    /// インライン表示用（リストは区切り文字で連結）
    pub treatment_summary: String,
    /// 結果ページ用（リスト表示）
    pub treatment_items: Vec<String>,
    pub symptoms: Vec<String>,
    pub causes: Vec<String>,
    pub severity_text: String,
    pub severity: SeverityClass,
    pub report_filename: Option<String>,
}

impl ResultView {
    pub fn from_result(result: &AnalysisResult) -> Self {
        let info = &result.info;

        let steps: Vec<String> = match &info.treatment {
            Some(Treatment::Steps(steps)) => non_blank(steps),
            Some(Treatment::Text(text)) if !text.trim().is_empty() => vec![text.clone()],
            _ => Vec::new(),
        };
        let treatment_summary = if steps.is_empty() {
            TREATMENT_FALLBACK.to_string()
        } else {
            steps.join(TREATMENT_SEPARATOR)
        };
        let treatment_items = or_fallback(steps, TREATMENT_FALLBACK);

        Self {
            label: text_or(result.prediction.as_deref(), UNKNOWN_LABEL),
            badge_color: text_or(info.color.as_deref(), DEFAULT_BADGE_COLOR),
            description: text_or(info.description.as_deref(), NO_DESCRIPTION),
            confidence: result.confidence.filter(|c| c.is_finite()).unwrap_or(0.0),
            treatment_summary,
            treatment_items,
            symptoms: or_fallback(
                info.symptoms.as_deref().map(non_blank).unwrap_or_default(),
                SYMPTOMS_FALLBACK,
            ),
            causes: or_fallback(
                info.causes.as_deref().map(non_blank).unwrap_or_default(),
                CAUSES_FALLBACK,
            ),
            severity_text: text_or(info.severity.as_deref(), UNKNOWN_LABEL),
            severity: SeverityClass::classify(info.severity.as_deref()),
            report_filename: result
                .report_filename
                .clone()
                .filter(|name| !name.trim().is_empty()),
        }
    }

    /// "87%"
    pub fn confidence_text(&self) -> String {
        format!("{}%", self.confidence)
    }

    /// 信頼度バーのスタイル（幅は0〜100にクランプ）
    pub fn bar_style(&self) -> String {
        format!("width: {}%", self.confidence.clamp(0.0, 100.0))
    }

    pub fn badge_style(&self) -> String {
        format!("background: {}", self.badge_color)
    }

    /// 結果ページの信頼度リング
    pub fn ring_style(&self) -> String {
        let filled = self.confidence.clamp(0.0, 100.0) / 100.0 * RING_CIRCUMFERENCE;
        format!("stroke-dasharray: {}px {}px", filled, RING_CIRCUMFERENCE)
    }

    pub fn severity_class(&self) -> String {
        format!("severity-badge {}", self.severity.css_class())
    }
}

fn text_or(value: Option<&str>, fallback: &str) -> String {
    match value {
        Some(text) if !text.trim().is_empty() => text.to_string(),
        _ => fallback.to_string(),
    }
}

fn non_blank(items: &[String]) -> Vec<String> {
    items
        .iter()
        .filter(|item| !item.trim().is_empty())
        .cloned()
        .collect()
}

fn or_fallback(items: Vec<String>, fallback: &str) -> Vec<String> {
    if items.is_empty() {
        vec![fallback.to_string()]
    } else {
        items
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn view_of(value: serde_json::Value) -> ResultView {
        let result = AnalysisResult::from_value(&value).expect("パース失敗");
        ResultView::from_result(&result)
    }

    #[test]
    fn test_eczema_example() {
        let view = view_of(json!({
            "success": true,
            "prediction": "Eczema",
            "confidence": 87,
            "info": {"severity": "Moderate risk"},
            "report_filename": "r1.pdf"
        }));

        assert_eq!(view.label, "Eczema");
        assert_eq!(view.bar_style(), "width: 87%");
        assert_eq!(view.confidence_text(), "87%");
        assert_eq!(view.severity, SeverityClass::Medium);
        assert_eq!(view.severity_class(), "severity-badge severity-medium");
        assert_eq!(view.severity_text, "Moderate risk");
        assert_eq!(view.report_filename.as_deref(), Some("r1.pdf"));
    }

    #[test]
    fn test_all_fallbacks() {
        let view = view_of(json!({"success": true}));

        assert_eq!(view.label, UNKNOWN_LABEL);
        assert_eq!(view.badge_color, DEFAULT_BADGE_COLOR);
        assert_eq!(view.badge_style(), "background: #17a2b8");
        assert_eq!(view.description, NO_DESCRIPTION);
        assert_eq!(view.confidence_text(), "0%");
        assert_eq!(view.treatment_summary, TREATMENT_FALLBACK);
        assert_eq!(view.treatment_items, vec![TREATMENT_FALLBACK.to_string()]);
        assert_eq!(view.symptoms, vec![SYMPTOMS_FALLBACK.to_string()]);
        assert_eq!(view.causes, vec![CAUSES_FALLBACK.to_string()]);
        assert_eq!(view.severity_text, "Unknown");
        assert_eq!(view.severity, SeverityClass::Unknown);
        assert_eq!(view.report_filename, None);
    }

    #[test]
    fn test_treatment_list() {
        let view = view_of(json!({"info": {"treatment": ["Moisturizers", "Antihistamines"]}}));
        assert_eq!(view.treatment_summary, "Moisturizers • Antihistamines");
        assert_eq!(view.treatment_items, vec!["Moisturizers", "Antihistamines"]);
    }

    #[test]
    fn test_treatment_text() {
        let view = view_of(json!({"info": {"treatment": "Keep area dry"}}));
        assert_eq!(view.treatment_summary, "Keep area dry");
        assert_eq!(view.treatment_items, vec!["Keep area dry"]);
    }

    #[test]
    fn test_treatment_empty_falls_back() {
        for treatment in [json!([]), json!(""), json!(["  "])] {
            let view = view_of(json!({"info": {"treatment": treatment}}));
            assert_eq!(view.treatment_summary, TREATMENT_FALLBACK);
            assert_eq!(view.treatment_items, vec![TREATMENT_FALLBACK]);
        }
    }

    #[test]
    fn test_empty_symptoms_fall_back() {
        let view = view_of(json!({"info": {"symptoms": [], "causes": []}}));
        assert_eq!(view.symptoms, vec![SYMPTOMS_FALLBACK]);
        assert_eq!(view.causes, vec![CAUSES_FALLBACK]);
    }

    #[test]
    fn test_lists_preserve_order() {
        let view = view_of(json!({"info": {"symptoms": ["b", "a", "c"], "causes": ["z", "y"]}}));
        assert_eq!(view.symptoms, vec!["b", "a", "c"]);
        assert_eq!(view.causes, vec!["z", "y"]);
    }

    #[test]
    fn test_fractional_confidence() {
        let view = view_of(json!({"confidence": 91.3}));
        assert_eq!(view.confidence_text(), "91.3%");
        assert_eq!(view.bar_style(), "width: 91.3%");
    }

    #[test]
    fn test_bar_width_is_clamped() {
        let over = view_of(json!({"confidence": 140}));
        assert_eq!(over.bar_style(), "width: 100%");
        assert_eq!(over.confidence_text(), "140%");

        let under = view_of(json!({"confidence": -5}));
        assert_eq!(under.bar_style(), "width: 0%");
    }

    #[test]
    fn test_ring_style() {
        assert_eq!(view_of(json!({"confidence": 100})).ring_style(), "stroke-dasharray: 283px 283px");
        assert_eq!(view_of(json!({"confidence": 50})).ring_style(), "stroke-dasharray: 141.5px 283px");
        assert_eq!(view_of(json!({})).ring_style(), "stroke-dasharray: 0px 283px");
    }

    #[test]
    fn test_custom_badge_color() {
        let view = view_of(json!({"info": {"color": "#ffc107"}}));
        assert_eq!(view.badge_style(), "background: #ffc107");
    }

    #[test]
    fn test_blank_report_filename_is_none() {
        let view = view_of(json!({"report_filename": ""}));
        assert_eq!(view.report_filename, None);
    }

    #[test]
    fn test_preview_view() {
        let preview = PreviewView::new("data:image/png;base64,AAAA".to_string(), "mole.png", 2048);
        assert_eq!(preview.size_text, "2 KB");
        assert_eq!(preview.name_line(), "File: mole.png");
        assert_eq!(preview.size_line(), "Size: 2 KB");
    }
}
