use std::cmp::Ordering;

use tracing::debug;

use crate::domain::{AssetInfo, Quote, RouteStep, SwapInfo};
use crate::pricing::RateSource;

/// Applied when a candidate is missing from the rate source. Quoting
/// degrades per-candidate rather than failing the batch.
const FALLBACK_RATE: f64 = 1.0;

pub fn base_units(display: f64, decimals: u8) -> u64 {
    (display * 10f64.powi(decimals as i32)).round() as u64
}

pub fn display_units(base: u64, decimals: u8) -> f64 {
    base as f64 / 10f64.powi(decimals as i32)
}

/// Quotes every candidate against the target asset and returns the best
/// `top_k`, descending by displayed output amount. The sort is stable, so
/// equal outputs keep catalog order.
pub fn rank(
    candidates: &[AssetInfo],
    target: &AssetInfo,
    requested_display: f64,
    rates: &impl RateSource,
    top_k: usize,
) -> Vec<Quote> {
    let out_base = base_units(requested_display, target.decimals);

    let mut quotes: Vec<Quote> = candidates
        .iter()
        .map(|candidate| quote_one(candidate, target, requested_display, out_base, rates))
        .collect();

    quotes.sort_by(|a, b| {
        let ka = display_units(a.out_amount_base, target.decimals);
        let kb = display_units(b.out_amount_base, target.decimals);
        kb.partial_cmp(&ka).unwrap_or(Ordering::Equal)
    });
    quotes.truncate(top_k);
    quotes
}

fn quote_one(
    candidate: &AssetInfo,
    target: &AssetInfo,
    requested_display: f64,
    out_base: u64,
    rates: &impl RateSource,
) -> Quote {
    let rate = match rates.rate(&candidate.mint) {
        Some(r) if r.is_finite() && r > 0.0 => r,
        _ => {
            debug!(mint = %candidate.mint, "no usable rate, defaulting 1:1");
            FALLBACK_RATE
        }
    };

    // Input is in the source asset's own base units.
    let in_base = base_units(requested_display / rate, candidate.decimals);

    Quote {
        source: candidate.clone(),
        out_amount_base: out_base,
        in_amount_base: in_base,
        route: vec![RouteStep {
            swap_info: SwapInfo {
                mint_a: candidate.mint.clone(),
                mint_b: target.mint.clone(),
            },
            percent: 100,
        }],
    }
}
