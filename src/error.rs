use thiserror::Error;

#[derive(Debug, Error)]
pub enum SiteError {
    #[error("browser window is unavailable")]
    MissingWindow,
    #[error("document is unavailable")]
    MissingDocument,
    #[error("required element `{0}` is missing")]
    MissingElement(&'static str),
    #[error("DOM call failed: {0}")]
    Dom(String),
    #[error("invalid site config: {0}")]
    Config(#[from] serde_json::Error),
}

#[cfg(target_arch = "wasm32")]
impl From<wasm_bindgen::JsValue> for SiteError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        let message = value
            .as_string()
            .or_else(|| {
                js_sys::Reflect::get(&value, &wasm_bindgen::JsValue::from_str("message"))
                    .ok()
                    .and_then(|message| message.as_string())
            })
            .unwrap_or_else(|| format!("{value:?}"));

        Self::Dom(message)
    }
}
