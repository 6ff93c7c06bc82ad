//! Delegation Record State
//!
//! A capability record at `["delegate_nft", owner]` letting anyone move up
//! to `amount` units out of `source` without the owner's signature. The
//! ceiling shrinks with each delegated transfer and the record is closed
//! when it reaches zero.
//!
//! # Size: 74 bytes

use crate::error::EditionError;
use crate::state::{AccountKey, Pack, Record};
use crate::utils::checked_sub;
use arrayref::{array_mut_ref, array_ref, array_refs, mut_array_refs};
use solana_program::{entrypoint::ProgramResult, program_error::ProgramError, pubkey::Pubkey};

/// Delegation record.
///
/// ```text
/// ┌─────────────────────────────────────────────────────────────────┐
/// │ Offset │ Size │ Field            │ Type                        │
/// ├────────┼──────┼──────────────────┼─────────────────────────────┤
/// │ 0      │ 1    │ key              │ AccountKey::Delegation      │
/// │ 1      │ 32   │ owner            │ Pubkey                      │
/// │ 33     │ 32   │ source           │ Pubkey (token account)      │
/// │ 65     │ 8    │ amount           │ u64 (remaining ceiling)     │
/// │ 73     │ 1    │ bump             │ u8                          │
/// └─────────────────────────────────────────────────────────────────┘
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Delegation {
    pub owner: Pubkey,
    pub source: Pubkey,
    pub amount: u64,
    pub bump: u8,
}

impl Delegation {
    /// Spend `amount` from the ceiling. Returns what remains.
    pub fn consume(&mut self, amount: u64) -> Result<u64, ProgramError> {
        if amount > self.amount {
            return Err(EditionError::DelegatedAmountExceeded.into());
        }
        self.amount = checked_sub(self.amount, amount)?;
        Ok(self.amount)
    }

    pub fn assert_source(&self, source: &Pubkey) -> ProgramResult {
        if self.source != *source {
            return Err(EditionError::NoActiveDelegation.into());
        }
        Ok(())
    }
}

impl Pack for Delegation {
    const LEN: usize = 74;

    fn unpack(input: &[u8]) -> Result<Self, ProgramError> {
        let input = array_ref![input, 0, Delegation::LEN];

        #[allow(clippy::ptr_offset_with_cast)]
        let (_key, owner, source, amount, bump) = array_refs![input, 1, 32, 32, 8, 1];

        Ok(Delegation {
            owner: Pubkey::new_from_array(*owner),
            source: Pubkey::new_from_array(*source),
            amount: u64::from_le_bytes(*amount),
            bump: bump[0],
        })
    }

    fn pack(&self, output: &mut [u8]) -> Result<(), ProgramError> {
        let output = array_mut_ref![output, 0, Delegation::LEN];

        #[allow(clippy::ptr_offset_with_cast)]
        let (key_dst, owner_dst, source_dst, amount_dst, bump_dst) =
            mut_array_refs![output, 1, 32, 32, 8, 1];

        key_dst[0] = Self::KEY.to_u8();
        owner_dst.copy_from_slice(self.owner.as_ref());
        source_dst.copy_from_slice(self.source.as_ref());
        *amount_dst = self.amount.to_le_bytes();
        bump_dst[0] = self.bump;

        Ok(())
    }
}

impl Record for Delegation {
    const KEY: AccountKey = AccountKey::Delegation;
}
