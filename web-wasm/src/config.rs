//! ホストページからの設定読み込み
//!
//! `<script id="skinai-config" type="application/json">` があれば
//! その内容でデフォルト値を上書きする。

use gloo::console;
use skinai_common::ClientConfig;

const CONFIG_ELEMENT_ID: &str = "skinai-config";

pub fn load_config() -> ClientConfig {
    let text = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
        .and_then(|el| el.text_content());

    let Some(text) = text.filter(|t| !t.trim().is_empty()) else {
        return ClientConfig::default();
    };

    match ClientConfig::from_json(&text) {
        Ok(config) => config,
        Err(e) => {
            console::warn!("設定の読み込みに失敗、デフォルトを使用します:", e.to_string());
            ClientConfig::default()
        }
    }
}
