//! Wallet access behind a small capability trait.
//!
//! The browser implementation wraps the EIP-1193 object injected at
//! `window.ethereum`; tests substitute their own provider.

use std::future::Future;
use std::pin::Pin;

use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;

use crate::error::{WalletError, js_error_text};

pub type WalletFuture<'a, T> = Pin<Box<dyn Future<Output = Result<T, WalletError>> + 'a>>;

pub trait WalletProvider {
    /// Ask the user to expose their accounts (`eth_requestAccounts`).
    fn request_accounts<'a>(&'a self) -> WalletFuture<'a, Vec<String>>;
}

/// Request account access and return the first account, if any.
///
/// `None` for `provider` means nothing was injected into the page.
pub async fn connect(provider: Option<&dyn WalletProvider>) -> Result<Option<String>, WalletError> {
    let provider = provider.ok_or(WalletError::ProviderUnavailable)?;
    let accounts = provider.request_accounts().await?;
    Ok(accounts.into_iter().next())
}

/// Provider injected by MetaMask and compatible extensions.
pub struct InjectedProvider {
    ethereum: JsValue,
}

impl InjectedProvider {
    pub fn detect() -> Option<Self> {
        let window = web_sys::window()?;
        let ethereum = js_sys::Reflect::get(&window, &JsValue::from_str("ethereum")).ok()?;
        if ethereum.is_undefined() || ethereum.is_null() {
            return None;
        }
        Some(Self { ethereum })
    }

    async fn request(&self, method: &str) -> Result<JsValue, WalletError> {
        let failed = |e: JsValue| WalletError::ProviderRequestFailed(js_error_text(&e));
        let request = js_sys::Reflect::get(&self.ethereum, &JsValue::from_str("request")).map_err(failed)?;
        let request = request
            .dyn_into::<js_sys::Function>()
            .map_err(|_| WalletError::ProviderRequestFailed("provider has no request()".into()))?;
        let args = js_sys::Object::new();
        js_sys::Reflect::set(&args, &JsValue::from_str("method"), &JsValue::from_str(method)).map_err(failed)?;
        let pending = request.call1(&self.ethereum, &args).map_err(failed)?;
        let promise = pending
            .dyn_into::<js_sys::Promise>()
            .map_err(|_| WalletError::ProviderRequestFailed(format!("{} did not return a promise", method)))?;
        JsFuture::from(promise).await.map_err(failed)
    }
}

impl WalletProvider for InjectedProvider {
    fn request_accounts<'a>(&'a self) -> WalletFuture<'a, Vec<String>> {
        Box::pin(async move {
            let value = self.request("eth_requestAccounts").await?;
            if !js_sys::Array::is_array(&value) {
                return Err(WalletError::ProviderRequestFailed(
                    "eth_requestAccounts returned a non-array".into(),
                ));
            }
            let accounts = js_sys::Array::from(&value);
            Ok(accounts.iter().filter_map(|a| a.as_string()).collect())
        })
    }
}
