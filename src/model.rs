use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DefaultOnNull};
use std::collections::HashMap;
use std::fmt;

/// Reference currency a price is quoted in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VsToken {
    Usdc,
    Sol,
}

impl VsToken {
    pub fn as_str(&self) -> &'static str {
        match self {
            VsToken::Usdc => "USDC",
            VsToken::Sol => "SOL",
        }
    }
}

impl fmt::Display for VsToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenPriceRecord {
    pub id: String,
    pub mint_symbol: String,
    pub vs_token: String,
    pub vs_token_symbol: String,
    pub price: f64,
}

/// Body of the price endpoint.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceResponse {
    pub data: HashMap<String, TokenPriceRecord>,
    #[serde(default)]
    pub time_taken: f64,
}

/// Entry of the `all`/`strict` token lists. Upstream leaves optional fields
/// out or sends `null`; both parse.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenMetadata {
    pub address: String,
    pub chain_id: u64,
    pub decimals: u8,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub symbol: Option<String>,
    #[serde(rename = "logoURI", default)]
    pub logo_uri: Option<String>,
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub tags: Vec<String>,
}

impl TokenMetadata {
    /// `needle` must already be lowercased and trimmed.
    pub fn matches(&self, needle: &str) -> bool {
        self.symbol
            .as_deref()
            .is_some_and(|s| s.to_lowercase() == needle)
            || self.address.to_lowercase() == needle
    }
}

/// Outcome of a best-effort token list fetch.
///
/// `Unavailable` covers every failure mode (bad status, transport error,
/// malformed body); callers that only care about the entries can use
/// [`TokenList::into_vec`] and treat it as an empty list.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenList {
    Available(Vec<TokenMetadata>),
    Unavailable,
}

impl TokenList {
    pub fn tokens(&self) -> &[TokenMetadata] {
        match self {
            TokenList::Available(tokens) => tokens,
            TokenList::Unavailable => &[],
        }
    }

    pub fn is_empty(&self) -> bool {
        self.tokens().is_empty()
    }

    pub fn len(&self) -> usize {
        self.tokens().len()
    }

    pub fn into_vec(self) -> Vec<TokenMetadata> {
        match self {
            TokenList::Available(tokens) => tokens,
            TokenList::Unavailable => Vec::new(),
        }
    }

    /// First entry matching a lowercased, trimmed symbol or address.
    pub fn find(&self, needle: &str) -> Option<&TokenMetadata> {
        self.tokens().iter().find(|t| t.matches(needle))
    }
}
