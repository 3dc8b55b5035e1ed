//! Command-line front end for the Jupiter gateway.
//! Every subcommand performs one gateway call and prints the result as JSON.

use anyhow::{anyhow, Result};
use jupiter_gateway::{GatewayConfig, JupiterGateway, QuoteRequest, VsToken};
use serde::Serialize;
use structopt::StructOpt;

#[derive(StructOpt, Debug)]
#[structopt(name = "jupiter_gateway")]
struct Cli {
    /// Path to config file. Public Jupiter endpoints are used when omitted
    #[structopt(short, long)]
    config: Option<String>,

    #[structopt(subcommand)]
    command: Command,
}

#[derive(StructOpt, Debug)]
enum Command {
    /// Token prices, keyed by id
    Prices {
        /// Quote in SOL instead of USDC
        #[structopt(long)]
        sol: bool,
        ids: Vec<String>,
    },
    /// Dump the full token list, or the strict list with --strict
    Tokens {
        #[structopt(long)]
        strict: bool,
    },
    /// Find a strict-list token by symbol or mint address
    Lookup { token: String },
    /// Raw quote between two mints
    Quote {
        input_mint: String,
        output_mint: String,
        /// Amount in base units of the input mint
        amount: u64,
        #[structopt(long, default_value = "50")]
        slippage_bps: u16,
    },
    /// Build an unsigned SOL -> $FML swap transaction
    SwapSolForFml {
        amount_in_sol: f64,
        /// Public key of the wallet that will sign
        user_public_key: String,
    },
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    let args = Cli::from_args();
    let cfg = match &args.config {
        Some(path) => GatewayConfig::from_file(path)?,
        None => GatewayConfig::default(),
    };
    let gateway = JupiterGateway::new(cfg)?;

    match args.command {
        Command::Prices { sol, ids } => {
            let vs = if sol { VsToken::Sol } else { VsToken::Usdc };
            print_json(&gateway.get_token_prices(&ids, vs).await?)?;
        }
        Command::Tokens { strict } => {
            let list = if strict {
                gateway.get_strict_list().await
            } else {
                gateway.get_token_list().await
            };
            log::info!("{} token(s)", list.len());
            print_json(&list.into_vec())?;
        }
        Command::Lookup { token } => {
            let found = gateway
                .lookup_token(Some(token.as_str()))
                .await
                .ok_or_else(|| anyhow!("no strict-list token matches '{}'", token))?;
            print_json(&found)?;
        }
        Command::Quote {
            input_mint,
            output_mint,
            amount,
            slippage_bps,
        } => {
            let request = QuoteRequest::new(input_mint, output_mint, amount, slippage_bps);
            print_json(&gateway.quote_get(&request).await?)?;
        }
        Command::SwapSolForFml {
            amount_in_sol,
            user_public_key,
        } => {
            print_json(&gateway.swap_sol_for_fml(amount_in_sol, &user_public_key).await?)?;
        }
    }
    Ok(())
}
