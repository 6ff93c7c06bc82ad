//! MintTo Instruction Processor
//!
//! Mints new units to a token account.

use crate::error::EditionError;
use crate::state::{load_record, store_record, Mint, TokenAccount};
use crate::utils::*;
use solana_program::{
    account_info::{next_account_info, AccountInfo},
    entrypoint::ProgramResult,
    pubkey::Pubkey,
};

/// Process MintTo instruction
///
/// Accounts expected:
/// 0. `[writable]` Mint
/// 1. `[writable]` Destination token account
/// 2. `[signer]` Mint authority
pub fn process(program_id: &Pubkey, accounts: &[AccountInfo], amount: u64) -> ProgramResult {
    let account_info_iter = &mut accounts.iter();

    // Account 0: Mint
    let mint_info = next_account_info(account_info_iter)?;

    // Account 1: Destination token account
    let dest_info = next_account_info(account_info_iter)?;

    // Account 2: Mint authority
    let authority_info = next_account_info(account_info_iter)?;

    assert_writable(mint_info)?;
    assert_writable(dest_info)?;

    let mut mint: Mint = load_record(program_id, mint_info)?;
    let mut dest_account: TokenAccount = load_record(program_id, dest_info)?;

    if dest_account.mint != *mint_info.key {
        return Err(EditionError::MintMismatch.into());
    }

    // A master edition's mint has no authority left
    validate_mint_authority(&mint, authority_info)?;

    mint.supply = checked_add(mint.supply, amount)?;
    dest_account.amount = checked_add(dest_account.amount, amount)?;

    store_record(&mint, mint_info)?;
    store_record(&dest_account, dest_info)?;

    Ok(())
}
