use solana_sdk::signature::{Keypair, Signer};
use tracing::debug;

use crate::domain::AccountIdentity;

/// Generates a fresh custodial keypair. The OS CSPRNG backs `Keypair::new`;
/// randomness exhaustion aborts the process, which is the intended fatal
/// behavior. The identity hint is accepted for bookkeeping only.
pub fn provision(identity_hint: Option<&str>) -> AccountIdentity {
    let keypair = Keypair::new();
    let address = keypair.pubkey().to_string();
    if let Some(hint) = identity_hint {
        debug!(hint, %address, "wallet.provision");
    }
    AccountIdentity {
        address,
        secret_key: keypair.to_base58_string(),
    }
}
