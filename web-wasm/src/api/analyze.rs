//! 解析API連携
//!
//! 画像をmultipartで /analyze に送り、レスポンスのJSONを返す。
//! HTTPステータスは見ない（サーバーは4xx/5xxでもJSONでエラーを返す）。

use gloo::console;
use serde_json::Value;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{File, FormData, Request, RequestInit, RequestMode, Response};

use skinai_common::{ClientConfig, ClientError, Platform, SelectedFile};

/// ブラウザ実装（fetch + FileReader）
#[derive(Debug, Clone)]
pub struct BrowserPlatform {
    analyze_endpoint: String,
    upload_field: String,
}

impl BrowserPlatform {
    pub fn new(config: &ClientConfig) -> Self {
        Self {
            analyze_endpoint: config.analyze_endpoint.clone(),
            upload_field: config.upload_field.clone(),
        }
    }
}

/// web_sys::File から選択ファイルを作る
pub fn selected_file(file: File) -> SelectedFile<File> {
    SelectedFile::new(file.name(), file.type_(), file.size() as u64, file)
}

impl Platform for BrowserPlatform {
    type Payload = File;

    async fn read_data_url(&self, file: &SelectedFile<File>) -> skinai_common::Result<String> {
        let blob = gloo::file::File::from(file.payload.clone());
        gloo::file::futures::read_as_data_url(&blob)
            .await
            .map_err(|e| ClientError::FileRead(e.to_string()))
    }

    async fn post_image(&self, file: &SelectedFile<File>) -> skinai_common::Result<Value> {
        post_multipart(&self.analyze_endpoint, &self.upload_field, &file.payload)
            .await
            .map_err(|e| {
                let detail = format!("{:?}", e);
                console::error!("解析リクエスト失敗:", detail.clone());
                ClientError::Transport(detail)
            })
    }
}

/// multipart POST（fetch API）
async fn post_multipart(url: &str, field: &str, file: &File) -> Result<Value, JsValue> {
    let form = FormData::new()?;
    form.append_with_blob_and_filename(field, file, &file.name())?;

    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_mode(RequestMode::Cors);
    opts.set_body(&form);

    let request = Request::new_with_str_and_init(url, &opts)?;

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("window unavailable"))?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request)).await?;
    let resp: Response = resp_value.dyn_into()?;

    // JSONでないボディはここで失敗する
    let json = JsFuture::from(resp.json()?).await?;
    let value: Value = serde_wasm_bindgen::from_value(json)?;
    Ok(value)
}
