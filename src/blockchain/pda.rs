//! Program-derived address for the provisioned account.
//!
//! Seeds are `[prefix, number.to_le_bytes()]` with the number encoded as a
//! 4-byte little-endian u32, matching what the on-chain program expects.

use solana_sdk::pubkey::{Pubkey, MAX_SEED_LEN};

use crate::blockchain::types::{ChainError, ChainResult};

/// A derived account address together with its canonical bump.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DerivedAccount {
    pub address: Pubkey,
    pub bump: u8,
    pub seed_prefix: String,
    pub number: u32,
}

impl DerivedAccount {
    /// Derive the address for `seed_prefix` + `number` under `program_id`.
    pub fn derive(program_id: &Pubkey, seed_prefix: &str, number: u32) -> ChainResult<Self> {
        if seed_prefix.is_empty() || seed_prefix.len() > MAX_SEED_LEN {
            return Err(ChainError::InvalidSeed(format!(
                "prefix '{}' must be 1..={} bytes",
                seed_prefix, MAX_SEED_LEN
            )));
        }

        let number_bytes = number.to_le_bytes();
        let (address, bump) = Pubkey::try_find_program_address(
            &[seed_prefix.as_bytes(), &number_bytes],
            program_id,
        )
        .ok_or_else(|| {
            ChainError::InvalidSeed(format!("no viable bump for '{}' #{}", seed_prefix, number))
        })?;

        Ok(Self {
            address,
            bump,
            seed_prefix: seed_prefix.to_string(),
            number,
        })
    }

    /// Capitalized prefix for console lines ("game" → "Game").
    pub fn label(&self) -> String {
        let mut chars = self.seed_prefix.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }
}
