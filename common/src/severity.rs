//! リスクレベルの分類
//!
//! サーバーは自由文でリスクを返すため、部分一致でバッジのクラスを決める。
//! 判定順は low → moderate/medium → high。"Low to Moderate" は low になる。

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeverityClass {
    Low,
    Medium,
    High,
    Unknown,
}

impl SeverityClass {
    pub fn classify(severity: Option<&str>) -> Self {
        let Some(text) = severity else {
            return SeverityClass::Unknown;
        };
        let lower = text.to_lowercase();
        if lower.contains("low") {
            SeverityClass::Low
        } else if lower.contains("moderate") || lower.contains("medium") {
            SeverityClass::Medium
        } else if lower.contains("high") {
            SeverityClass::High
        } else {
            SeverityClass::Unknown
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            SeverityClass::Low => "severity-low",
            SeverityClass::Medium => "severity-medium",
            SeverityClass::High => "severity-high",
            SeverityClass::Unknown => "severity-unknown",
        }
    }
}
