use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};

use crate::domain::AssetInfo;

/// Wrapped SOL mint, the target asset of every conversion in this version.
pub const SOL_MINT: &str = "So11111111111111111111111111111111111111112";

const USDC_TESTNET_MINT: &str = "8FRFC6MoGGkMFQwngccyu69VnNu9pMoQjiX4D6darAAc";
const CUSTOM_TESTNET_MINT: &str = "4k3Dyjzvzp8eMZWUXbBCjEvwSkkk59S5iCNLY3QrkX6R";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    // Target asset
    pub target_mint: String,
    pub target_symbol: String,
    pub target_decimals: u8,

    // Quoting
    pub quote_top_k: usize,
    pub default_output_amount: f64,

    // Onramp stub
    pub onramp_amount: u64,

    // Bound on external calls (funding, a real pricing source)
    pub external_call_timeout_ms: u64,

    // Validation
    pub max_identity_hint_len: usize,

    /// Ordered candidate catalog; order breaks ranking ties.
    pub catalog: Vec<AssetInfo>,
}

fn env_parse<T: std::str::FromStr>(key: &str) -> Option<T> {
    std::env::var(key).ok().and_then(|x| x.parse().ok())
}

pub fn default_catalog() -> Vec<AssetInfo> {
    vec![
        AssetInfo {
            mint: USDC_TESTNET_MINT.to_string(),
            symbol: "USDC".to_string(),
            decimals: 6,
        },
        AssetInfo {
            mint: CUSTOM_TESTNET_MINT.to_string(),
            symbol: "CUSTOM".to_string(),
            decimals: 9,
        },
    ]
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let target_mint =
            std::env::var("ONRAMP_TARGET_MINT").unwrap_or_else(|_| SOL_MINT.to_string());
        let target_symbol =
            std::env::var("ONRAMP_TARGET_SYMBOL").unwrap_or_else(|_| "SOL".to_string());
        let target_decimals = env_parse::<u8>("ONRAMP_TARGET_DECIMALS").unwrap_or(9);

        let quote_top_k = env_parse::<usize>("ONRAMP_QUOTE_TOP_K").unwrap_or(3);
        let default_output_amount = env_parse::<f64>("ONRAMP_DEFAULT_AMOUNT").unwrap_or(5.0);

        let onramp_amount = env_parse::<u64>("ONRAMP_FUNDING_AMOUNT").unwrap_or(1000);
        let external_call_timeout_ms = env_parse::<u64>("ONRAMP_CALL_TIMEOUT_MS").unwrap_or(5000);
        let max_identity_hint_len = env_parse::<usize>("ONRAMP_MAX_HINT_LEN").unwrap_or(254);

        let catalog = match std::env::var("ONRAMP_CATALOG_JSON") {
            Ok(raw) => serde_json::from_str(&raw)
                .map_err(|e| anyhow!("ONRAMP_CATALOG_JSON is not a valid catalog: {e}"))?,
            Err(_) => default_catalog(),
        };

        if quote_top_k == 0 {
            return Err(anyhow!("ONRAMP_QUOTE_TOP_K must be at least 1"));
        }
        if !default_output_amount.is_finite() || default_output_amount < 0.0 {
            return Err(anyhow!("ONRAMP_DEFAULT_AMOUNT must be a non-negative number"));
        }
        if external_call_timeout_ms == 0 {
            return Err(anyhow!("ONRAMP_CALL_TIMEOUT_MS must be non-zero"));
        }

        Ok(Self {
            target_mint,
            target_symbol,
            target_decimals,
            quote_top_k,
            default_output_amount,
            onramp_amount,
            external_call_timeout_ms,
            max_identity_hint_len,
            catalog,
        })
    }

    pub fn target_asset(&self) -> AssetInfo {
        AssetInfo {
            mint: self.target_mint.clone(),
            symbol: self.target_symbol.clone(),
            decimals: self.target_decimals,
        }
    }
}
