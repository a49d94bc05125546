use thiserror::Error;
use wasm_bindgen::JsValue;

/// Failures while talking to the injected wallet provider.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WalletError {
    #[error("no Web3 wallet provider detected")]
    ProviderUnavailable,
    #[error("wallet request failed: {0}")]
    ProviderRequestFailed(String),
}

impl WalletError {
    /// Text shown to the user in the blocking alert.
    pub fn user_message(&self) -> &'static str {
        match self {
            WalletError::ProviderUnavailable => "Please install MetaMask or another Web3 wallet!",
            WalletError::ProviderRequestFailed(_) => "Failed to connect wallet. Please try again.",
        }
    }
}

/// Failures of the remote claim API. These are only ever logged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),
    #[error("unexpected HTTP status {0}")]
    Status(u16),
    #[error("invalid response body: {0}")]
    Decode(String),
    #[error("could not encode request: {0}")]
    Encode(String),
}

#[derive(Debug, Error)]
pub enum BrowserError {
    #[error("no global `window` exists")]
    NoWindow,
    #[error("{0}")]
    Js(String),
}

/// Best-effort text for a rejected promise or thrown JS value.
pub fn js_error_text(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}

impl From<JsValue> for BrowserError {
    fn from(value: JsValue) -> Self {
        BrowserError::Js(js_error_text(&value))
    }
}
