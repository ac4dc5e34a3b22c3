use anyhow::{anyhow, Result};
use base64::Engine as _;
use solana_sdk::pubkey::Pubkey;
use solana_sdk::transaction::Transaction;
use std::str::FromStr;
use tracing::info;

use crate::domain::{AccountIdentity, Quote};
use crate::errors::ServiceError;

/// Builds the unsigned transfer for a selected quote and encodes it for
/// transport. The owner is source, destination and authority (self-transfer;
/// a real swap routes the destination to the swap program). No private key
/// material is read here.
pub fn build_unsigned(owner: &AccountIdentity, quote: &Quote) -> Result<String, ServiceError> {
    let owner_key = Pubkey::from_str(&owner.address)?;
    let mint = Pubkey::from_str(&quote.source.mint)?;

    // transfer_checked enforces mint decimals on-chain, so the value must be
    // the source asset's own decimals, not a constant.
    let ix = spl_token::instruction::transfer_checked(
        &spl_token::id(),
        &owner_key,
        &mint,
        &owner_key,
        &owner_key,
        &[],
        quote.in_amount_base,
        quote.source.decimals,
    )
    .map_err(|e| ServiceError::Internal(anyhow!("transfer_checked build failed: {e}")))?;

    let tx = Transaction::new_with_payer(&[ix], Some(&owner_key));
    let bytes = bincode::serialize(&tx)
        .map_err(|e| ServiceError::Internal(anyhow!("transaction serialize failed: {e}")))?;

    info!(
        mint = %quote.source.mint,
        amount = quote.in_amount_base,
        decimals = quote.source.decimals,
        "transfer.built"
    );
    Ok(base64::engine::general_purpose::STANDARD.encode(bytes))
}

/// Inverse of `build_unsigned`, for callers inspecting the envelope before
/// signing.
pub fn decode_unsigned(encoded: &str) -> Result<Transaction> {
    let bytes = base64::engine::general_purpose::STANDARD.decode(encoded)?;
    Ok(bincode::deserialize(&bytes)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::default_catalog;
    use crate::domain::{RouteStep, SwapInfo};
    use crate::wallet;
    use solana_sdk::signature::Signature;
    use spl_token::instruction::TokenInstruction;

    fn quote_for(idx: usize, in_amount_base: u64) -> Quote {
        let source = default_catalog()[idx].clone();
        let route = vec![RouteStep {
            swap_info: SwapInfo {
                mint_a: source.mint.clone(),
                mint_b: crate::config::SOL_MINT.to_string(),
            },
            percent: 100,
        }];
        Quote {
            source,
            out_amount_base: 5_000_000_000,
            in_amount_base,
            route,
        }
    }

    #[test]
    fn round_trip_preserves_the_instruction() {
        let owner = wallet::provision(None);
        let quote = quote_for(0, 5_050_505);

        let encoded = build_unsigned(&owner, &quote).unwrap();
        let tx = decode_unsigned(&encoded).unwrap();
        let re_encoded = base64::engine::general_purpose::STANDARD
            .encode(bincode::serialize(&tx).unwrap());
        assert_eq!(encoded, re_encoded);

        let ix = tx.message.instructions[0].clone();
        let program = tx.message.account_keys[ix.program_id_index as usize];
        assert_eq!(program, spl_token::id());
    }

    #[test]
    fn instruction_decimals_match_the_source_asset() {
        let owner = wallet::provision(None);
        // CUSTOM has 9 decimals; a hardcoded 6 here would corrupt the move.
        let quote = quote_for(1, 5_263_157_895);

        let tx = decode_unsigned(&build_unsigned(&owner, &quote).unwrap()).unwrap();
        let data = &tx.message.instructions[0].data;
        match TokenInstruction::unpack(data).unwrap() {
            TokenInstruction::TransferChecked { amount, decimals } => {
                assert_eq!(amount, 5_263_157_895);
                assert_eq!(decimals, quote.source.decimals);
            }
            other => panic!("unexpected instruction: {other:?}"),
        }
    }

    #[test]
    fn owner_is_source_destination_and_authority() {
        let owner = wallet::provision(None);
        let quote = quote_for(0, 1_000_000);

        let tx = decode_unsigned(&build_unsigned(&owner, &quote).unwrap()).unwrap();
        let ix = &tx.message.instructions[0];
        let keys: Vec<_> = ix
            .accounts
            .iter()
            .map(|i| tx.message.account_keys[*i as usize].to_string())
            .collect();
        // transfer_checked account order: source, mint, destination, authority
        assert_eq!(keys[0], owner.address);
        assert_eq!(keys[1], quote.source.mint);
        assert_eq!(keys[2], owner.address);
        assert_eq!(keys[3], owner.address);
    }

    #[test]
    fn envelope_is_unsigned() {
        let owner = wallet::provision(None);
        let tx = decode_unsigned(&build_unsigned(&owner, &quote_for(0, 1)).unwrap()).unwrap();
        assert!(tx.signatures.iter().all(|s| *s == Signature::default()));
    }

    #[test]
    fn malformed_owner_address_is_fatal() {
        let owner = AccountIdentity {
            address: "not-a-pubkey".to_string(),
            secret_key: String::new(),
        };
        let err = build_unsigned(&owner, &quote_for(0, 1)).unwrap_err();
        assert!(matches!(err, ServiceError::MalformedKey(_)));
    }

    #[test]
    fn malformed_mint_is_fatal() {
        let owner = wallet::provision(None);
        let mut quote = quote_for(0, 1);
        quote.source.mint = "<CUSTOM_MINT>".to_string();
        let err = build_unsigned(&owner, &quote).unwrap_err();
        assert!(matches!(err, ServiceError::MalformedKey(_)));
    }
}
