//! 選択ファイルの検証とサイズ表示

use crate::error::ValidationError;

/// 受け付けるMIMEタイプ（ブラウザ申告値との完全一致）
pub const ACCEPTED_MIME_TYPES: [&str; 5] = [
    "image/png",
    "image/jpg",
    "image/jpeg",
    "image/gif",
    "image/bmp",
];

/// アップロード上限 16MiB
pub const MAX_FILE_SIZE: u64 = 16 * 1024 * 1024;

const SIZE_UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];

/// MIMEタイプとサイズを検証
///
/// タイプを先に判定するため、両方不正な場合は `UnsupportedType` になる。
pub fn validate_image(mime_type: &str, size: u64, limit: u64) -> Result<(), ValidationError> {
    if !ACCEPTED_MIME_TYPES.contains(&mime_type) {
        return Err(ValidationError::UnsupportedType(mime_type.to_string()));
    }
    if size > limit {
        return Err(ValidationError::TooLarge { size, limit });
    }
    Ok(())
}

/// バイト数を1024基準の単位付き文字列にする
///
/// 小数2桁で丸め、末尾の0は落とす（1536 → "1.5 KB"）。
/// GBを超える値もGBのまま表示する。
pub fn format_file_size(bytes: u64) -> String {
    if bytes == 0 {
        return "0 Bytes".to_string();
    }

    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < SIZE_UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }

    let rounded = (value * 100.0).round() / 100.0;
    format!("{} {}", rounded, SIZE_UNITS[unit])
}
