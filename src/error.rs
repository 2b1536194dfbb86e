use thiserror::Error;

use crate::param::RangeError;

#[derive(Debug, Error)]
pub enum Error {
    #[error("no global `window` exists")]
    NoWindow,

    #[error("window has no document")]
    NoDocument,

    #[error("element #{0} not found")]
    MissingElement(String),

    #[error("2d canvas context not supported")]
    NoContext,

    #[error("javascript error: {0}")]
    Js(String),

    #[error("invalid configuration: {0}")]
    Config(#[from] serde_json::Error),

    #[error("invalid `{name}` range: {source}")]
    InvalidRange {
        name: &'static str,
        #[source]
        source: RangeError,
    },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[cfg(target_arch = "wasm32")]
impl From<wasm_bindgen::JsValue> for Error {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        Error::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}

#[cfg(target_arch = "wasm32")]
impl From<Error> for wasm_bindgen::JsValue {
    fn from(err: Error) -> Self {
        js_sys::Error::new(&err.to_string()).into()
    }
}
