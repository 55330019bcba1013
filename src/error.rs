use thiserror::Error;

#[derive(Debug, Error)]
pub enum PortfolioError {
    #[error("element `{0}` is not present on this page")]
    MissingElement(&'static str),
    #[error("browser call failed: {0}")]
    Js(String),
    #[error("invalid portfolio config: {0}")]
    Config(#[from] serde_json::Error),
}

impl PortfolioError {
    /// Absent elements only mean the page does not use that feature.
    pub fn is_missing_element(&self) -> bool {
        matches!(self, Self::MissingElement(_))
    }
}

#[cfg(target_arch = "wasm32")]
impl From<wasm_bindgen::JsValue> for PortfolioError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        let message = value
            .as_string()
            .or_else(|| {
                js_sys::Reflect::get(&value, &wasm_bindgen::JsValue::from_str("message"))
                    .ok()
                    .and_then(|message| message.as_string())
            })
            .unwrap_or_else(|| format!("{value:?}"));
        Self::Js(message)
    }
}

pub type Result<T, E = PortfolioError> = std::result::Result<T, E>;
