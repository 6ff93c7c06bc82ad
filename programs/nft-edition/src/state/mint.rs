//! Mint Account State
//!
//! A Mint defines one token type. For this program a mint is the identity
//! of one NFT: the master, or a single print.
//!
//! # What a Mint Controls
//!
//! 1. Who can create new units (mint_authority)
//! 2. Total units in existence (supply)
//! 3. Display precision (decimals, always 0 here)
//!
//! Creating a master edition takes the mint authority away for good, which
//! is what pins a master's supply at exactly one.
//!
//! # Size: 46 bytes

use crate::state::{
    pack_coption_pubkey, unpack_coption_pubkey, AccountKey, COption, Pack, Record,
};
use arrayref::{array_mut_ref, array_ref, array_refs, mut_array_refs};
use solana_program::{program_error::ProgramError, pubkey::Pubkey};

// =============================================================================
// MINT STRUCTURE
// =============================================================================

/// Mint account data structure.
///
/// # Memory Layout (46 bytes total)
///
/// ```text
/// ┌─────────────────────────────────────────────────────────────────┐
/// │ Offset │ Size │ Field            │ Type                        │
/// ├────────┼──────┼──────────────────┼─────────────────────────────┤
/// │ 0      │ 1    │ key              │ AccountKey::Mint            │
/// │ 1      │ 36   │ mint_authority   │ COption<Pubkey>             │
/// │ 37     │ 8    │ supply           │ u64                         │
/// │ 45     │ 1    │ decimals         │ u8                          │
/// ├────────┼──────┼──────────────────┼─────────────────────────────┤
/// │ Total  │ 46   │                  │                             │
/// └─────────────────────────────────────────────────────────────────┘
/// ```
///
/// An account created by `CreateMint` is all zeros; its key byte reads
/// `Uninitialized` until `InitializeMint` writes the record.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Mint {
    /// The authority that can mint new units.
    ///
    /// - `Some(pubkey)`: That pubkey can call MintTo
    /// - `None`: No more units can ever be minted
    ///
    /// Cleared permanently by CreateMasterEdition.
    pub mint_authority: COption<Pubkey>,

    /// Total number of units currently in existence.
    ///
    /// Increased by MintTo, decreased by the burn instructions.
    pub supply: u64,

    /// Number of decimal places. Always 0: NFTs are indivisible.
    pub decimals: u8,
}

impl Mint {
    /// Whether `authority` is the current mint authority.
    pub fn is_mint_authority(&self, authority: &Pubkey) -> bool {
        self.mint_authority.as_ref() == Some(authority)
    }
}

// =============================================================================
// PACK TRAIT IMPLEMENTATION
// =============================================================================

impl Pack for Mint {
    const LEN: usize = 46;

    fn unpack(input: &[u8]) -> Result<Self, ProgramError> {
        let input = array_ref![input, 0, Mint::LEN];

        #[allow(clippy::ptr_offset_with_cast)]
        let (_key, mint_authority, supply, decimals) = array_refs![input, 1, 36, 8, 1];

        Ok(Mint {
            mint_authority: unpack_coption_pubkey(mint_authority)?,
            supply: u64::from_le_bytes(*supply),
            decimals: decimals[0],
        })
    }

    fn pack(&self, output: &mut [u8]) -> Result<(), ProgramError> {
        let output = array_mut_ref![output, 0, Mint::LEN];

        #[allow(clippy::ptr_offset_with_cast)]
        let (key_dst, mint_authority_dst, supply_dst, decimals_dst) =
            mut_array_refs![output, 1, 36, 8, 1];

        key_dst[0] = Self::KEY.to_u8();
        pack_coption_pubkey(&self.mint_authority, mint_authority_dst);
        *supply_dst = self.supply.to_le_bytes();
        decimals_dst[0] = self.decimals;

        Ok(())
    }
}

impl Record for Mint {
    const KEY: AccountKey = AccountKey::Mint;
}

// =============================================================================
// UNIT TESTS
// =============================================================================
