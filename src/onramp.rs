use anyhow::Result;
use tracing::info;

use crate::domain::FundingReceipt;

/// Boundary to the payment rail that funds a freshly provisioned wallet.
/// A real implementation calls an external processor and can fail or hang;
/// the orchestrator bounds the call with a timeout either way.
pub trait FundingProvider {
    async fn confirm_funding(&self, address: &str, amount: u64) -> Result<FundingReceipt>;
}

/// Stub rail: always reports success with the requested constant amount.
#[derive(Debug, Clone, Copy, Default)]
pub struct MockOnramp;

impl FundingProvider for MockOnramp {
    async fn confirm_funding(&self, address: &str, amount: u64) -> Result<FundingReceipt> {
        info!(%address, amount, "onramp.mock");
        Ok(FundingReceipt {
            success: true,
            amount,
        })
    }
}
