//! Delegate Instruction Processor
//!
//! Grants a transfer ceiling on a token account through a delegation record
//! at `["delegate_nft", owner]`. There is one record per owner: delegating
//! again from the same source overwrites the ceiling, while a record bound to
//! a different source must be revoked first.

use crate::constants::DELEGATE_SEED;
use crate::error::EditionError;
use crate::pda::assert_derivation;
use crate::state::{load_record, store_record, COption, Delegation, Pack, TokenAccount};
use crate::utils::*;
use solana_program::{
    account_info::{next_account_info, AccountInfo},
    entrypoint::ProgramResult,
    msg,
    pubkey::Pubkey,
};

/// Process Delegate instruction
///
/// Accounts expected:
/// 0. `[writable]` Source token account
/// 1. `[writable]` Delegation record
/// 2. `[writable, signer]` Owner (pays for a new record)
/// 3. `[]` System program
pub fn process(program_id: &Pubkey, accounts: &[AccountInfo], amount: u64) -> ProgramResult {
    let account_info_iter = &mut accounts.iter();

    // Account 0: Source token account
    let source_info = next_account_info(account_info_iter)?;

    // Account 1: Delegation record
    let record_info = next_account_info(account_info_iter)?;

    // Account 2: Owner
    let owner_info = next_account_info(account_info_iter)?;

    // Account 3: System program
    let system_program_info = next_account_info(account_info_iter)?;

    assert_writable(source_info)?;
    assert_writable(record_info)?;

    // Only the owner of the source may delegate from it
    let mut source: TokenAccount = load_record(program_id, source_info)?;
    validate_token_owner(&source, owner_info)?;

    let seeds: &[&[u8]] = &[DELEGATE_SEED, owner_info.key.as_ref()];
    let bump = assert_derivation(program_id, record_info, seeds)?;

    if record_info.data_is_empty() {
        create_pda_account(
            owner_info,
            record_info,
            system_program_info,
            program_id,
            Delegation::LEN,
            seeds,
            bump,
        )?;
    } else {
        // Another source still points at this record
        let previous: Delegation = load_record(program_id, record_info)?;
        if previous.source != *source_info.key {
            return Err(EditionError::DelegationInUse.into());
        }
    }

    let delegation = Delegation {
        owner: *owner_info.key,
        source: *source_info.key,
        amount,
        bump,
    };
    store_record(&delegation, record_info)?;

    source.delegate = COption::some(*record_info.key);
    store_record(&source, source_info)?;

    msg!("Delegated up to {} from {}", amount, source_info.key);
    Ok(())
}
