//! Error type for the gateway.
//!
//! Only the correctness-critical calls (prices, quote, swap) ever surface a
//! `GatewayError`. Token-list lookups are best-effort and swallow their failures
//! into `TokenList::Unavailable` instead.
use reqwest::StatusCode;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GatewayError {
    /// Transport failure reported by `reqwest`.
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    /// The response body was not the JSON we expected.
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    /// The quote/swap API answered with a non-success status.
    #[error("Jupiter API returned {status}: {body}")]
    Status { status: StatusCode, body: String },

    #[error("No quote available for {input_mint} -> {output_mint}")]
    NoQuote {
        input_mint: String,
        output_mint: String,
    },

    /// Amount must be a finite, non-negative number of SOL.
    #[error("Invalid amount: {0}")]
    InvalidAmount(f64),

    #[error("Invalid public key: {0}")]
    InvalidPublicKey(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T, E = GatewayError> = std::result::Result<T, E>;
