//! Gateway over the Jupiter aggregator APIs.
//!
//! - Token prices in USDC or SOL via the price API
//! - Token metadata via the `all` and `strict` token lists
//! - Quotes and unsigned swap transactions via the quote API
//!
//! Construct a [`JupiterGateway`] from a [`GatewayConfig`] and share it by
//! reference; there is no global instance.

pub mod config;
pub mod error;
pub mod gateway;
pub mod model;
pub mod swap_client;

pub use config::GatewayConfig;
pub use error::{GatewayError, Result};
pub use gateway::{fml_quote_request, JupiterGateway, FML_MINT, SOL_MINT};
pub use model::{TokenList, TokenMetadata, TokenPriceRecord, VsToken};
pub use swap_client::{QuoteRequest, QuoteResponse, Route, SwapClient, SwapMode, SwapRequest, SwapResponse};
