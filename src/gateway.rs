//! Token gateway over the Jupiter price, token list and swap APIs.
//!
//! Two failure policies live side by side here and are kept apart on purpose:
//!
//! * best-effort: [`JupiterGateway::get_token_list`], [`JupiterGateway::get_strict_list`]
//!   and [`JupiterGateway::lookup_token`] never fail. Any problem is logged and
//!   reported as [`TokenList::Unavailable`] (or `None` for a lookup).
//! * correctness-critical: prices, quotes and swaps return a [`GatewayError`]
//!   to the caller on any transport, status or parse failure.
use crate::config::GatewayConfig;
use crate::error::{GatewayError, Result};
use crate::model::{PriceResponse, TokenList, TokenMetadata, TokenPriceRecord, VsToken};
use crate::swap_client::{QuoteRequest, QuoteResponse, SwapClient, SwapRequest, SwapResponse};
use reqwest::Client;
use solana_sdk::native_token::LAMPORTS_PER_SOL;
use solana_sdk::pubkey::Pubkey;
use std::collections::HashMap;
use std::str::FromStr;
use std::time::Duration;

/// Wrapped SOL mint.
pub const SOL_MINT: &str = "So11111111111111111111111111111111111111112";
/// $FML mint.
pub const FML_MINT: &str = "5Z7Bmo3RRiMEuqTaJtqDaRmLonWApLB7pNY2NdtACmNB";
/// 0.5%
pub const FML_SLIPPAGE_BPS: u16 = 50;

#[derive(Clone)]
pub struct JupiterGateway {
    http: Client,
    price_api_url: String,
    token_api_url: String,
    swap_client: SwapClient,
}

impl JupiterGateway {
    pub fn new(config: GatewayConfig) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(secs) = config.request_timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        Ok(Self::with_http_client(config, builder.build()?))
    }

    /// Build a gateway on top of an existing `reqwest::Client`.
    pub fn with_http_client(config: GatewayConfig, http: Client) -> Self {
        let swap_client = SwapClient::new(http.clone(), config.quote_api_url);
        Self {
            http,
            price_api_url: config.price_api_url.trim_end_matches('/').to_string(),
            token_api_url: config.token_api_url.trim_end_matches('/').to_string(),
            swap_client,
        }
    }

    pub async fn get_token_prices_in_usdc(&self, ids: &[String]) -> Result<HashMap<String, TokenPriceRecord>> {
        self.get_token_prices(ids, VsToken::Usdc).await
    }

    pub async fn get_token_price_in_sol(&self, ids: &[String]) -> Result<HashMap<String, TokenPriceRecord>> {
        self.get_token_prices(ids, VsToken::Sol).await
    }

    /// Prices for `ids` quoted in `vs_token`, keyed by the id as given.
    ///
    /// An empty `ids` returns an empty map without touching the network.
    pub async fn get_token_prices(
        &self,
        ids: &[String],
        vs_token: VsToken,
    ) -> Result<HashMap<String, TokenPriceRecord>> {
        if ids.is_empty() {
            return Ok(HashMap::new());
        }

        // Ids stay comma-joined without percent-encoding the separator.
        let url = format!(
            "{}/price?ids={}&vsToken={}",
            self.price_api_url,
            ids.join(","),
            vs_token
        );
        log::debug!("Fetching {} price(s) in {}", ids.len(), vs_token);

        let response = self.http.get(&url).send().await?;
        let body = response.text().await?;
        let parsed: PriceResponse = serde_json::from_str(&body)?;
        log::debug!("Price API answered {} record(s) in {}s", parsed.data.len(), parsed.time_taken);
        Ok(parsed.data)
    }

    pub async fn quote_get(&self, request: &QuoteRequest) -> Result<QuoteResponse> {
        self.swap_client.quote(request).await
    }

    pub async fn swap_post(&self, request: &SwapRequest) -> Result<SwapResponse> {
        self.swap_client.swap(request).await
    }

    /// Every token Jupiter knows about.
    pub async fn get_token_list(&self) -> TokenList {
        self.fetch_token_list("all").await
    }

    /// The curated subset of [`Self::get_token_list`].
    pub async fn get_strict_list(&self) -> TokenList {
        self.fetch_token_list("strict").await
    }

    async fn fetch_token_list(&self, which: &str) -> TokenList {
        let url = format!("{}/{}", self.token_api_url, which);
        match self.try_fetch_token_list(&url).await {
            Ok(Some(tokens)) => {
                log::debug!("Token list '{}' has {} entries", which, tokens.len());
                TokenList::Available(tokens)
            }
            Ok(None) => TokenList::Unavailable,
            Err(e) => {
                log::error!("Failed to fetch token list {}: {}", url, e);
                TokenList::Unavailable
            }
        }
    }

    /// `Ok(None)` means the endpoint answered with a non-success status.
    async fn try_fetch_token_list(&self, url: &str) -> Result<Option<Vec<TokenMetadata>>> {
        let response = self.http.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            log::warn!("Token list {} returned {}", url, status);
            return Ok(None);
        }
        let body = response.text().await?;
        Ok(Some(serde_json::from_str(&body)?))
    }

    /// Resolve a symbol or mint address against the strict list.
    ///
    /// Case-insensitive, surrounding whitespace ignored, first match in list
    /// order wins. The list is fetched fresh on every call.
    pub async fn lookup_token(&self, token: Option<&str>) -> Option<TokenMetadata> {
        let needle = token?.to_lowercase().trim().to_string();
        if needle.is_empty() {
            return None;
        }
        let list = self.get_strict_list().await;
        let found = list.find(&needle).cloned();
        if found.is_none() {
            log::debug!("No strict-list token matches '{}'", needle);
        }
        found
    }

    /// Quote and build a SOL -> $FML swap for `user_public_key`.
    ///
    /// Fails with [`GatewayError::NoQuote`] when the quote carries no route, in
    /// which case no swap request is sent.
    pub async fn swap_sol_for_fml(&self, amount_in_sol: f64, user_public_key: &str) -> Result<SwapResponse> {
        let user = Pubkey::from_str(user_public_key)
            .map_err(|e| GatewayError::InvalidPublicKey(format!("{user_public_key}: {e}")))?;
        let quote_request = fml_quote_request(amount_in_sol)?;

        let quote = self.quote_get(&quote_request).await?;
        let route = quote.best_route().cloned().ok_or_else(|| GatewayError::NoQuote {
            input_mint: quote_request.input_mint.clone(),
            output_mint: quote_request.output_mint.clone(),
        })?;

        log::info!(
            "Swapping {} lamports SOL for ~{} FML base units",
            route.in_amount,
            route.out_amount
        );
        self.swap_post(&SwapRequest::new(route, user.to_string())).await
    }
}

/// Quote request for swapping `amount_in_sol` SOL into $FML.
pub fn fml_quote_request(amount_in_sol: f64) -> Result<QuoteRequest> {
    Ok(QuoteRequest::new(
        SOL_MINT,
        FML_MINT,
        sol_to_lamports(amount_in_sol)?,
        FML_SLIPPAGE_BPS,
    ))
}

pub fn sol_to_lamports(amount_in_sol: f64) -> Result<u64> {
    if !amount_in_sol.is_finite() || amount_in_sol < 0.0 {
        return Err(GatewayError::InvalidAmount(amount_in_sol));
    }
    checked_lamports((amount_in_sol * LAMPORTS_PER_SOL as f64).round())
        .ok_or(GatewayError::InvalidAmount(amount_in_sol))
}

/// `u64::MAX as f64` rounds up to 2^64, so anything at or above it overflows.
fn checked_lamports(lamports: f64) -> Option<u64> {
    (lamports < u64::MAX as f64).then_some(lamports as u64)
}
