//! TransferViaDelegate Instruction Processor
//!
//! Moves units out of a token account under a delegation record, without
//! the owner's signature. The ceiling is consumed atomically with the
//! transfer; at zero the record is closed and the rent returns to the owner.

use crate::constants::DELEGATE_SEED;
use crate::error::EditionError;
use crate::state::{load_record, store_record, COption, Delegation, TokenAccount};
use crate::utils::*;
use solana_program::{
    account_info::{next_account_info, AccountInfo},
    entrypoint::ProgramResult,
    msg,
    pubkey::Pubkey,
};

/// Process TransferViaDelegate instruction
///
/// Accounts expected:
/// 0. `[writable]` Source token account
/// 1. `[writable]` Destination token account
/// 2. `[writable]` Delegation record
/// 3. `[writable]` Owner
pub fn process(
    program_id: &Pubkey,
    accounts: &[AccountInfo],
    amount: u64,
    bump: u8,
) -> ProgramResult {
    let account_info_iter = &mut accounts.iter();

    // Account 0: Source token account
    let source_info = next_account_info(account_info_iter)?;

    // Account 1: Destination token account
    let dest_info = next_account_info(account_info_iter)?;

    // Account 2: Delegation record
    let record_info = next_account_info(account_info_iter)?;

    // Account 3: Owner
    let owner_info = next_account_info(account_info_iter)?;

    assert_writable(source_info)?;
    assert_writable(dest_info)?;
    assert_writable(record_info)?;
    assert_writable(owner_info)?;

    if source_info.key == dest_info.key {
        return Err(EditionError::SelfTransfer.into());
    }

    // A consumed or revoked delegation leaves nothing behind
    if record_info.data_is_empty() || record_info.lamports() == 0 {
        return Err(EditionError::NoActiveDelegation.into());
    }
    // Load delegation and verify its address from the bump
    let mut delegation: Delegation = load_record(program_id, record_info)?;

    let expected = Pubkey::create_program_address(
        &[DELEGATE_SEED, delegation.owner.as_ref(), &[bump]],
        program_id,
    )
    .map_err(|_| EditionError::InvalidDelegateBump)?;
    if expected != *record_info.key {
        return Err(EditionError::InvalidDelegateBump.into());
    }

    assert_key(owner_info, &delegation.owner, EditionError::OwnerMismatch)?;
    delegation.assert_source(source_info.key)?;

    // Load token accounts
    let mut source: TokenAccount = load_record(program_id, source_info)?;
    let mut dest: TokenAccount = load_record(program_id, dest_info)?;

    if source.delegate.as_ref() != Some(record_info.key) {
        return Err(EditionError::NoActiveDelegation.into());
    }
    if source.mint != dest.mint {
        return Err(EditionError::MintMismatch.into());
    }

    // Consume ceiling and move units
    let remaining = delegation.consume(amount)?;
    source.amount = checked_sub(source.amount, amount)?;
    dest.amount = checked_add(dest.amount, amount)?;

    if remaining == 0 {
        source.delegate = COption::none();
        close_program_account(record_info, owner_info)?;
        msg!("Delegation from {} consumed", source_info.key);
    } else {
        store_record(&delegation, record_info)?;
    }

    store_record(&source, source_info)?;
    store_record(&dest, dest_info)?;

    Ok(())
}
