//! Revoke Instruction Processor
//!
//! Cancels a delegation and returns the record's rent to the owner.

use crate::error::EditionError;
use crate::state::{load_record, store_record, COption, Delegation, TokenAccount};
use crate::utils::*;
use solana_program::{
    account_info::{next_account_info, AccountInfo},
    entrypoint::ProgramResult,
    msg,
    pubkey::Pubkey,
};

/// Process Revoke instruction
///
/// Accounts expected:
/// 0. `[writable]` Source token account
/// 1. `[writable]` Delegation record
/// 2. `[writable, signer]` Owner
pub fn process(program_id: &Pubkey, accounts: &[AccountInfo]) -> ProgramResult {
    let account_info_iter = &mut accounts.iter();

    // Account 0: Source token account
    let source_info = next_account_info(account_info_iter)?;

    // Account 1: Delegation record
    let record_info = next_account_info(account_info_iter)?;

    // Account 2: Owner
    let owner_info = next_account_info(account_info_iter)?;

    assert_writable(source_info)?;

    // Verify owner
    let mut source: TokenAccount = load_record(program_id, source_info)?;
    validate_token_owner(&source, owner_info)?;

    if source.delegate.as_ref() != Some(record_info.key) {
        return Err(EditionError::NoActiveDelegation.into());
    }
    let delegation: Delegation = load_record(program_id, record_info)?;
    assert_key(owner_info, &delegation.owner, EditionError::OwnerMismatch)?;

    // The record must still be bound to this source
    delegation.assert_source(source_info.key)?;

    close_program_account(record_info, owner_info)?;

    source.delegate = COption::none();
    store_record(&source, source_info)?;

    msg!("Delegation on {} revoked", source_info.key);
    Ok(())
}
