//! Derived Addresses
//!
//! Every record the program owns lives at an address computed from tagged
//! seeds and the program id. Nothing stores these addresses: given a mint or
//! an owner, any client recomputes them.
//!
//! | Record | Seeds |
//! |--------|-------|
//! | Token account | `[owner, program_id, mint]` |
//! | Metadata | `["metadata", program_id, mint]` |
//! | Master / print edition | `["metadata", program_id, mint, "edition"]` |
//! | Edition marker | `["metadata", program_id, master_mint, "edition", "<edition / 248>"]` |
//! | Delegation | `["delegate_nft", owner]` |

use crate::constants::{DELEGATE_SEED, EDITION, EDITION_MARKER_BIT_SIZE, PREFIX};
use crate::error::EditionError;
use solana_program::{account_info::AccountInfo, program_error::ProgramError, pubkey::Pubkey};

/// Derive an address and bump from `seeds`.
///
/// The bump is searched from 255 downward until the resulting point is off
/// the ed25519 curve. `NoValidBump` is fatal: the same seeds will never
/// succeed on retry.
pub fn derive_address(seeds: &[&[u8]], program_id: &Pubkey) -> Result<(Pubkey, u8), ProgramError> {
    Pubkey::try_find_program_address(seeds, program_id)
        .ok_or_else(|| EditionError::NoValidBump.into())
}

/// Check that `account` sits at the address derived from `seeds`.
///
/// Returns the bump so callers can sign for the address.
pub fn assert_derivation(
    program_id: &Pubkey,
    account: &AccountInfo,
    seeds: &[&[u8]],
) -> Result<u8, ProgramError> {
    let (key, bump) = derive_address(seeds, program_id)?;
    if key != *account.key {
        return Err(EditionError::DerivedAddressMismatch.into());
    }
    Ok(bump)
}

// =============================================================================
// NAMED DERIVATIONS
// =============================================================================

pub fn find_token_account_address(
    program_id: &Pubkey,
    owner: &Pubkey,
    mint: &Pubkey,
) -> Result<(Pubkey, u8), ProgramError> {
    derive_address(
        &[owner.as_ref(), program_id.as_ref(), mint.as_ref()],
        program_id,
    )
}

pub fn find_metadata_address(
    program_id: &Pubkey,
    mint: &Pubkey,
) -> Result<(Pubkey, u8), ProgramError> {
    derive_address(&[PREFIX, program_id.as_ref(), mint.as_ref()], program_id)
}

/// Address of the master edition record, or of a print edition record when
/// `mint` is a print mint.
pub fn find_edition_address(
    program_id: &Pubkey,
    mint: &Pubkey,
) -> Result<(Pubkey, u8), ProgramError> {
    derive_address(
        &[PREFIX, program_id.as_ref(), mint.as_ref(), EDITION],
        program_id,
    )
}

/// Which marker account covers `edition`.
pub fn marker_number(edition: u64) -> u64 {
    edition / EDITION_MARKER_BIT_SIZE
}

/// Marker seed: the decimal string of the marker number.
pub fn marker_seed(edition: u64) -> String {
    marker_number(edition).to_string()
}

pub fn find_edition_marker_address(
    program_id: &Pubkey,
    master_mint: &Pubkey,
    edition: u64,
) -> Result<(Pubkey, u8), ProgramError> {
    let seed = marker_seed(edition);
    derive_address(
        &[
            PREFIX,
            program_id.as_ref(),
            master_mint.as_ref(),
            EDITION,
            seed.as_bytes(),
        ],
        program_id,
    )
}

pub fn find_delegate_address(
    program_id: &Pubkey,
    owner: &Pubkey,
) -> Result<(Pubkey, u8), ProgramError> {
    derive_address(&[DELEGATE_SEED, owner.as_ref()], program_id)
}

// =============================================================================
// UNIT TESTS
// =============================================================================
