use crate::error::{GatewayError, Result};
use serde::Deserialize;
use std::fs;

pub const DEFAULT_PRICE_API_URL: &str = "https://price.jup.ag/v4";
pub const DEFAULT_TOKEN_API_URL: &str = "https://token.jup.ag";
pub const DEFAULT_QUOTE_API_URL: &str = "https://quote-api.jup.ag/v4";

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct GatewayConfig {
    /// Base URL of the price API; `/price` is appended.
    pub price_api_url: String,
    /// Base URL of the token list API; `/all` and `/strict` are appended.
    pub token_api_url: String,
    /// Base URL of the quote/swap API; `/quote` and `/swap` are appended.
    pub quote_api_url: String,
    /// Optional per-request timeout in seconds. No timeout when unset.
    pub request_timeout_secs: Option<u64>,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            price_api_url: DEFAULT_PRICE_API_URL.to_string(),
            token_api_url: DEFAULT_TOKEN_API_URL.to_string(),
            quote_api_url: DEFAULT_QUOTE_API_URL.to_string(),
            request_timeout_secs: None,
        }
    }
}

impl GatewayConfig {
    pub fn from_file(path: &str) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| GatewayError::Config(e.to_string()))
    }
}
