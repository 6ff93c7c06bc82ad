//! Shared Burn Step
//!
//! Destroys the single unit an owner holds of an NFT mint. Used by both
//! BurnPrint and BurnMaster before they close the edition records.

use crate::error::EditionError;
use crate::state::{load_record, store_record, Mint, TokenAccount};
use crate::utils::*;
use solana_program::{account_info::AccountInfo, entrypoint::ProgramResult, pubkey::Pubkey};

/// Burn the one unit held in `token_info`.
///
/// Checks performed:
/// - owner signed and owns the token account
/// - token account belongs to `mint_info`
/// - token account holds exactly one unit
pub fn burn_single_unit(
    program_id: &Pubkey,
    token_info: &AccountInfo,
    mint_info: &AccountInfo,
    owner_info: &AccountInfo,
) -> ProgramResult {
    assert_writable(token_info)?;
    assert_writable(mint_info)?;

    let mut account: TokenAccount = load_record(program_id, token_info)?;
    let mut mint: Mint = load_record(program_id, mint_info)?;

    validate_token_owner(&account, owner_info)?;

    if account.mint != *mint_info.key {
        return Err(EditionError::MintMismatch.into());
    }
    if !account.holds_single_unit() {
        return Err(EditionError::InsufficientFunds.into());
    }

    account.amount = checked_sub(account.amount, 1u64)?;
    mint.supply = checked_sub(mint.supply, 1u64)?;

    store_record(&account, token_info)?;
    store_record(&mint, mint_info)?;

    Ok(())
}
