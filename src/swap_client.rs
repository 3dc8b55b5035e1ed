//! Client for the Jupiter quote/swap REST API.
//!
//! Mirrors the surface of the official SDK client: `quote` and `swap` take the
//! vendor request shapes and hand back the vendor responses without
//! interpreting them. Routes keep every field we do not model in `extra`, so a
//! route from a quote is posted back to `/swap` untouched.
use crate::error::{GatewayError, Result};
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use serde_with::{serde_as, DisplayFromStr, PickFirst};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SwapMode {
    ExactIn,
    ExactOut,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteRequest {
    pub input_mint: String,
    pub output_mint: String,
    /// Amount in base units of the input (or output, for `ExactOut`) mint.
    pub amount: u64,
    pub slippage_bps: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub swap_mode: Option<SwapMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub only_direct_routes: Option<bool>,
}

impl QuoteRequest {
    pub fn new(input_mint: impl Into<String>, output_mint: impl Into<String>, amount: u64, slippage_bps: u16) -> Self {
        Self {
            input_mint: input_mint.into(),
            output_mint: output_mint.into(),
            amount,
            slippage_bps,
            swap_mode: None,
            only_direct_routes: None,
        }
    }
}

#[serde_as]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Route {
    #[serde_as(as = "PickFirst<(DisplayFromStr, _)>")]
    pub in_amount: u64,
    #[serde_as(as = "PickFirst<(DisplayFromStr, _)>")]
    pub out_amount: u64,
    #[serde_as(as = "PickFirst<(DisplayFromStr, _)>")]
    #[serde(default)]
    pub other_amount_threshold: u64,
    #[serde(default)]
    pub price_impact_pct: f64,
    #[serde(default)]
    pub slippage_bps: u16,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub swap_mode: Option<SwapMode>,
    /// Market infos, fees and anything else the API attaches to a route.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteResponse {
    /// Candidate routes, best first.
    pub data: Vec<Route>,
    #[serde(default)]
    pub time_taken: Option<f64>,
    #[serde(default)]
    pub context_slot: Option<u64>,
}

impl QuoteResponse {
    pub fn best_route(&self) -> Option<&Route> {
        self.data.first()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SwapRequest {
    pub route: Route,
    pub user_public_key: String,
    #[serde(rename = "wrapUnwrapSOL", skip_serializing_if = "Option::is_none")]
    pub wrap_unwrap_sol: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fee_account: Option<String>,
}

impl SwapRequest {
    pub fn new(route: Route, user_public_key: impl Into<String>) -> Self {
        Self {
            route,
            user_public_key: user_public_key.into(),
            wrap_unwrap_sol: None,
            fee_account: None,
        }
    }
}

/// Unsigned, base64-encoded transactions ready for the caller to sign.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SwapResponse {
    pub swap_transaction: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub setup_transaction: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cleanup_transaction: Option<String>,
}

#[derive(Clone)]
pub struct SwapClient {
    http: Client,
    base_url: String,
}

impl SwapClient {
    /// `base_url` points at the quote API root, e.g. `https://quote-api.jup.ag/v4`.
    pub fn new(http: Client, base_url: String) -> Self {
        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub async fn quote(&self, request: &QuoteRequest) -> Result<QuoteResponse> {
        let url = format!("{}/quote", self.base_url);
        log::debug!(
            "Requesting quote {} -> {} amount={} slippage_bps={}",
            request.input_mint,
            request.output_mint,
            request.amount,
            request.slippage_bps
        );
        let response = self.http.get(&url).query(request).send().await?;
        let quote: QuoteResponse = read_json(response).await?;
        log::debug!("Quote returned {} route(s)", quote.data.len());
        Ok(quote)
    }

    pub async fn swap(&self, request: &SwapRequest) -> Result<SwapResponse> {
        let url = format!("{}/swap", self.base_url);
        log::debug!("Requesting swap transaction for {}", request.user_public_key);
        let response = self.http.post(&url).json(request).send().await?;
        read_json(response).await
    }
}

async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T> {
    let status = response.status();
    let body = response.text().await?;
    if !status.is_success() {
        log::error!("Jupiter API error {}: {}", status, body);
        return Err(GatewayError::Status { status, body });
    }
    Ok(serde_json::from_str(&body)?)
}
