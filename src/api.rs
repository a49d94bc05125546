//! Client for the remote claim API that persists a wallet's progress.
//!
//! All calls are best effort: the session keeps running on its optimistic local
//! state whatever happens here, so failures are logged and otherwise dropped.

use std::future::Future;
use std::pin::Pin;

use gloo_net::http::Request;
use serde::{Deserialize, Serialize};

use crate::config;
use crate::error::ApiError;

pub type ApiFuture<'a, T> = Pin<Box<dyn Future<Output = Result<T, ApiError>> + 'a>>;

/// Remote record for one wallet, as returned by `GET /claim/status/{wallet}`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClaimStatus {
    pub exists: bool,
    pub coins_collected: u32,
    pub completed: bool,
}

/// Body of `POST /claim/submit`. Always carries the full count, never a delta.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmitRequest {
    pub wallet_address: String,
    pub coins_collected: u32,
}

/// Persistence seam for the game state.
pub trait ClaimStore {
    fn status<'a>(&'a self, wallet_address: &'a str) -> ApiFuture<'a, ClaimStatus>;
    fn submit<'a>(&'a self, request: &'a SubmitRequest) -> ApiFuture<'a, ()>;
}

#[derive(Clone, Debug, PartialEq)]
pub struct HttpClaimStore {
    base_url: String,
}

impl HttpClaimStore {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    pub fn from_env() -> Self {
        Self::new(config::api_base_url())
    }

    pub fn status_url(&self, wallet_address: &str) -> String {
        format!("{}/claim/status/{}", self.base_url, wallet_address)
    }

    pub fn submit_url(&self) -> String {
        format!("{}/claim/submit", self.base_url)
    }
}

impl ClaimStore for HttpClaimStore {
    fn status<'a>(&'a self, wallet_address: &'a str) -> ApiFuture<'a, ClaimStatus> {
        Box::pin(async move {
            let response = Request::get(&self.status_url(wallet_address))
                .send()
                .await
                .map_err(|e| ApiError::Network(e.to_string()))?;
            if !response.ok() {
                return Err(ApiError::Status(response.status()));
            }
            response
                .json::<ClaimStatus>()
                .await
                .map_err(|e| ApiError::Decode(e.to_string()))
        })
    }

    fn submit<'a>(&'a self, request: &'a SubmitRequest) -> ApiFuture<'a, ()> {
        Box::pin(async move {
            let response = Request::post(&self.submit_url())
                .json(request)
                .map_err(|e| ApiError::Encode(e.to_string()))?
                .send()
                .await
                .map_err(|e| ApiError::Network(e.to_string()))?;
            if !response.ok() {
                return Err(ApiError::Status(response.status()));
            }
            Ok(())
        })
    }
}

/// Fetch the remote record for `wallet_address`, logging and swallowing failures.
pub async fn load_best_effort(store: &dyn ClaimStore, wallet_address: &str) -> Option<ClaimStatus> {
    match store.status(wallet_address).await {
        Ok(status) => {
            log::debug!("loaded game state for {}: {:?}", wallet_address, status);
            Some(status)
        }
        Err(err) => {
            log::error!("Failed to load game state: {}", err);
            None
        }
    }
}

/// Push the full current count. Returns whether the submit went through.
pub async fn sync_best_effort(store: &dyn ClaimStore, request: &SubmitRequest) -> bool {
    match store.submit(request).await {
        Ok(()) => {
            log::debug!(
                "saved {} coins for {}",
                request.coins_collected,
                request.wallet_address
            );
            true
        }
        Err(err) => {
            log::error!("Failed to save game state: {}", err);
            false
        }
    }
}
