use wasm_bindgen::JsValue;

/// Reasons a component could not be set up. Callers log these and carry on;
/// none of them reach the page.
#[derive(Debug, thiserror::Error)]
pub enum SetupError {
    #[error("no window")]
    NoWindow,
    #[error("no document")]
    NoDocument,
    #[error("missing #{0}")]
    MissingElement(&'static str),
    #[error("#{0} is not a canvas")]
    NotACanvas(&'static str),
    #[error("2d context unavailable")]
    NoContext,
    #[error("js call failed: {0}")]
    Js(String),
}

impl From<JsValue> for SetupError {
    fn from(value: JsValue) -> Self {
        SetupError::Js(format!("{:?}", value))
    }
}

impl From<serde_wasm_bindgen::Error> for SetupError {
    fn from(value: serde_wasm_bindgen::Error) -> Self {
        SetupError::Js(value.to_string())
    }
}
