//! UpdateMetadata Instruction Processor
//!
//! Replaces the descriptor, hands over the update authority, or freezes the
//! record for good.

use crate::error::EditionError;
use crate::state::{load_record, store_record, Data, Metadata};
use crate::utils::*;
use solana_program::{
    account_info::{next_account_info, AccountInfo},
    entrypoint::ProgramResult,
    msg,
    pubkey::Pubkey,
};

/// Process UpdateMetadata instruction
///
/// Accounts expected:
/// 0. `[writable]` Metadata record
/// 1. `[signer]` Current update authority
pub fn process(
    program_id: &Pubkey,
    accounts: &[AccountInfo],
    data: Option<Data>,
    new_update_authority: Option<Pubkey>,
    is_mutable: Option<bool>,
) -> ProgramResult {
    let account_info_iter = &mut accounts.iter();

    // Account 0: Metadata record
    let metadata_info = next_account_info(account_info_iter)?;

    // Account 1: Current update authority
    let authority_info = next_account_info(account_info_iter)?;

    assert_writable(metadata_info)?;
    let mut metadata: Metadata = load_record(program_id, metadata_info)?;
    validate_update_authority(&metadata, authority_info)?;

    if !metadata.is_mutable {
        return Err(EditionError::MetadataImmutable.into());
    }

    if let Some(data) = data {
        data.validate()?;
        data.assert_verified_creators(Some(authority_info.key), &metadata.data.creators)?;
        metadata.data = data;
    }

    if let Some(new_update_authority) = new_update_authority {
        msg!("Update authority moved to {}", new_update_authority);
        metadata.update_authority = new_update_authority;
    }

    // Clearing the flag is one-way
    if let Some(false) = is_mutable {
        metadata.is_mutable = false;
    }

    store_record(&metadata, metadata_info)
}
