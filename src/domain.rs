use serde::{Deserialize, Serialize};

/// One entry in the candidate source-asset catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetInfo {
    pub mint: String,
    pub symbol: String,
    pub decimals: u8,
}

/// Freshly provisioned custodial wallet. Handed to the caller once in the
/// response and never retained server-side.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountIdentity {
    pub address: String,
    /// base58-encoded 64-byte keypair.
    pub secret_key: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SwapInfo {
    pub mint_a: String,
    pub mint_b: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteStep {
    pub swap_info: SwapInfo,
    pub percent: u8,
}

pub type RoutePlan = Vec<RouteStep>;

/// One conversion quote. All amounts are integer base units
/// (display = base / 10^decimals), never display units.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quote {
    pub source: AssetInfo,
    /// Requested output in the target asset's base units.
    pub out_amount_base: u64,
    /// Implied input in the source asset's base units.
    pub in_amount_base: u64,
    pub route: RoutePlan,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FundingReceipt {
    pub success: bool,
    pub amount: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuyRequest {
    #[serde(default)]
    pub identity_hint: Option<String>,
    /// Informational only; candidates are not filtered by it yet.
    #[serde(default)]
    pub source_asset_hint: Option<String>,
    #[serde(default = "default_output_amount")]
    pub requested_output_amount: f64,
    #[serde(default)]
    pub selected_quote_index: usize,
}

fn default_output_amount() -> f64 {
    5.0
}

impl BuyRequest {
    pub fn with_defaults(requested_output_amount: f64) -> Self {
        Self {
            identity_hint: None,
            source_asset_hint: None,
            requested_output_amount,
            selected_quote_index: 0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteOption {
    pub source_symbol: String,
    pub source_mint: String,
    pub target_display_amount: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuyResponse {
    pub wallet: AccountIdentity,
    pub options: Vec<QuoteOption>,
    /// base64 unsigned transaction; omitted when the selection index is out
    /// of range (quote-only flow).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transaction: Option<String>,
}
