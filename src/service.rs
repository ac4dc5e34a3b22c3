use tokio::time::{timeout, Duration};
use tracing::{info, warn};

use crate::config::Config;
use crate::domain::{BuyRequest, BuyResponse, QuoteOption};
use crate::errors::ServiceError;
use crate::onramp::FundingProvider;
use crate::pricing::RateSource;
use crate::{quote, transfer, wallet};

fn validate(cfg: &Config, req: &BuyRequest) -> Result<(), ServiceError> {
    if !req.requested_output_amount.is_finite() || req.requested_output_amount < 0.0 {
        return Err(ServiceError::InvalidRequest(format!(
            "requestedOutputAmount must be a non-negative number, got {}",
            req.requested_output_amount
        )));
    }
    if let Some(hint) = req.identity_hint.as_deref() {
        if hint.len() > cfg.max_identity_hint_len {
            return Err(ServiceError::InvalidRequest(format!(
                "identityHint exceeds {} bytes",
                cfg.max_identity_hint_len
            )));
        }
    }
    Ok(())
}

/// One stateless buy request: provision -> confirm funding -> rank quotes ->
/// build the unsigned transfer for the selected quote. An out-of-range
/// selection skips the build and returns quotes only (two-phase flow).
pub async fn handle_buy(
    cfg: &Config,
    funding: &impl FundingProvider,
    rates: &impl RateSource,
    req: &BuyRequest,
) -> Result<BuyResponse, ServiceError> {
    validate(cfg, req)?;

    let identity = wallet::provision(req.identity_hint.as_deref());
    info!(address = %identity.address, "buy.wallet_ready");

    let receipt = timeout(
        Duration::from_millis(cfg.external_call_timeout_ms),
        funding.confirm_funding(&identity.address, cfg.onramp_amount),
    )
    .await
    .map_err(|_| ServiceError::FundingFailed("onramp timed out".to_string()))?
    .map_err(|e| ServiceError::FundingFailed(e.to_string()))?;

    if !receipt.success {
        return Err(ServiceError::FundingFailed(format!(
            "onramp reported failure for {}",
            identity.address
        )));
    }
    info!(amount = receipt.amount, "buy.funding_confirmed");

    let target = cfg.target_asset();
    let ranked = quote::rank(
        &cfg.catalog,
        &target,
        req.requested_output_amount,
        rates,
        cfg.quote_top_k,
    );
    if ranked.is_empty() {
        return Err(ServiceError::NoRouteFound);
    }

    let options = ranked
        .iter()
        .map(|q| QuoteOption {
            source_symbol: q.source.symbol.clone(),
            source_mint: q.source.mint.clone(),
            target_display_amount: quote::display_units(q.out_amount_base, target.decimals),
        })
        .collect();

    let transaction = match ranked.get(req.selected_quote_index) {
        Some(selected) => Some(transfer::build_unsigned(&identity, selected)?),
        None => {
            warn!(
                index = req.selected_quote_index,
                options = ranked.len(),
                "buy.selection_out_of_range"
            );
            None
        }
    };

    Ok(BuyResponse {
        wallet: identity,
        options,
        transaction,
    })
}
