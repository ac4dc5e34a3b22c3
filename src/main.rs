mod config;
mod domain;
mod errors;
mod monitoring;
mod onramp;
mod pricing;
mod quote;
mod service;
mod transfer;
mod wallet;

use std::io::{IsTerminal, Read};

use anyhow::Result;
use tracing::info;

use crate::domain::BuyRequest;
use crate::onramp::MockOnramp;
use crate::pricing::StaticRateTable;

#[tokio::main]
async fn main() -> Result<()> {
    // Load local .env if present (no-op in prod/systemd envs)
    let _ = dotenvy::dotenv();

    monitoring::init_tracing();

    let cfg = config::Config::from_env()?;
    info!(?cfg, "boot");

    let req = read_request(&cfg)?;
    let funding = MockOnramp;
    let rates = StaticRateTable::testnet_defaults();

    match service::handle_buy(&cfg, &funding, &rates, &req).await {
        Ok(resp) => {
            println!("{}", serde_json::to_string_pretty(&resp)?);
            Ok(())
        }
        Err(err) => {
            eprintln!("{}", serde_json::to_string_pretty(&err.body())?);
            std::process::exit(1);
        }
    }
}

/// One request per invocation: JSON on stdin when piped, config defaults
/// otherwise. The transport layer proper lives outside this binary.
fn read_request(cfg: &config::Config) -> Result<BuyRequest> {
    let mut stdin = std::io::stdin();
    if stdin.is_terminal() {
        return Ok(BuyRequest::with_defaults(cfg.default_output_amount));
    }
    let mut raw = String::new();
    stdin.read_to_string(&mut raw)?;
    if raw.trim().is_empty() {
        return Ok(BuyRequest::with_defaults(cfg.default_output_amount));
    }
    Ok(serde_json::from_str(&raw)?)
}
