//! Token Account State
//!
//! A Token Account holds units of one mint for one owner. Its address is
//! derived from `[owner, program_id, mint]`, so each (mint, owner) pair has
//! exactly one canonical account.
//!
//! # Size: 109 bytes

use crate::state::{
    pack_coption_pubkey, unpack_coption_pubkey, AccountKey, COption, Pack, Record,
};
use arrayref::{array_mut_ref, array_ref, array_refs, mut_array_refs};
use solana_program::{program_error::ProgramError, pubkey::Pubkey};

// =============================================================================
// TOKEN ACCOUNT STRUCTURE
// =============================================================================

/// Token account data structure.
///
/// # Memory Layout (109 bytes total)
///
/// ```text
/// ┌─────────────────────────────────────────────────────────────────┐
/// │ Offset │ Size │ Field            │ Type                        │
/// ├────────┼──────┼──────────────────┼─────────────────────────────┤
/// │ 0      │ 1    │ key              │ AccountKey::TokenAccount    │
/// │ 1      │ 32   │ mint             │ Pubkey                      │
/// │ 33     │ 32   │ owner            │ Pubkey                      │
/// │ 65     │ 8    │ amount           │ u64                         │
/// │ 73     │ 36   │ delegate         │ COption<Pubkey>             │
/// ├────────┼──────┼──────────────────┼─────────────────────────────┤
/// │ Total  │ 109  │                  │                             │
/// └─────────────────────────────────────────────────────────────────┘
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TokenAccount {
    /// The mint this account holds units of. Fixed at creation.
    pub mint: Pubkey,

    /// The owner of this account.
    ///
    /// The owner can delegate, revoke and burn from this account.
    pub owner: Pubkey,

    /// Units held. Never exceeds the supply of `mint`.
    pub amount: u64,

    /// Delegation record currently allowed to spend from this account.
    ///
    /// - None: no delegation active
    /// - Some(record): the record's remaining ceiling bounds what a
    ///   TransferViaDelegate may move
    pub delegate: COption<Pubkey>,
}

impl TokenAccount {
    /// Whether this account holds the one and only unit of a mint.
    pub fn holds_single_unit(&self) -> bool {
        self.amount == 1
    }
}

// =============================================================================
// PACK TRAIT IMPLEMENTATION
// =============================================================================

impl Pack for TokenAccount {
    const LEN: usize = 109;

    fn unpack(input: &[u8]) -> Result<Self, ProgramError> {
        let input = array_ref![input, 0, TokenAccount::LEN];

        #[allow(clippy::ptr_offset_with_cast)]
        let (_key, mint, owner, amount, delegate) = array_refs![input, 1, 32, 32, 8, 36];

        Ok(TokenAccount {
            mint: Pubkey::new_from_array(*mint),
            owner: Pubkey::new_from_array(*owner),
            amount: u64::from_le_bytes(*amount),
            delegate: unpack_coption_pubkey(delegate)?,
        })
    }

    fn pack(&self, output: &mut [u8]) -> Result<(), ProgramError> {
        let output = array_mut_ref![output, 0, TokenAccount::LEN];

        #[allow(clippy::ptr_offset_with_cast)]
        let (key_dst, mint_dst, owner_dst, amount_dst, delegate_dst) =
            mut_array_refs![output, 1, 32, 32, 8, 36];

        key_dst[0] = Self::KEY.to_u8();
        mint_dst.copy_from_slice(self.mint.as_ref());
        owner_dst.copy_from_slice(self.owner.as_ref());
        *amount_dst = self.amount.to_le_bytes();
        pack_coption_pubkey(&self.delegate, delegate_dst);

        Ok(())
    }
}

impl Record for TokenAccount {
    const KEY: AccountKey = AccountKey::TokenAccount;
}

// =============================================================================
// UNIT TESTS
// =============================================================================
