//! BurnMaster Instruction Processor
//!
//! Burns a master token and closes its master edition and metadata records,
//! subject to the master's burn policy.

use crate::constants::{EDITION, PREFIX};
use crate::error::EditionError;
use crate::pda::assert_derivation;
use crate::processor::burn::burn_single_unit;
use crate::state::{load_record, EditionKind, MasterBurnPolicy, MasterEdition, Metadata};
use crate::utils::*;
use solana_program::{
    account_info::{next_account_info, AccountInfo},
    entrypoint::ProgramResult,
    msg,
    pubkey::Pubkey,
};

/// Process BurnMaster instruction
///
/// Accounts expected:
/// 0. `[writable]` Master metadata record
/// 1. `[writable, signer]` Owner of the master token
/// 2. `[writable]` Master mint
/// 3. `[writable]` Master token account
/// 4. `[writable]` Master edition record
pub fn process(program_id: &Pubkey, accounts: &[AccountInfo]) -> ProgramResult {
    let account_info_iter = &mut accounts.iter();

    // Account 0: Master metadata record
    let metadata_info = next_account_info(account_info_iter)?;

    // Account 1: Owner of the master token
    let owner_info = next_account_info(account_info_iter)?;

    // Account 2: Master mint
    let mint_info = next_account_info(account_info_iter)?;

    // Account 3: Master token account
    let token_account_info = next_account_info(account_info_iter)?;

    // Account 4: Master edition record
    let master_edition_info = next_account_info(account_info_iter)?;

    // Validate master metadata
    let metadata: Metadata = load_record(program_id, metadata_info)?;
    if metadata.mint != *mint_info.key {
        return Err(EditionError::MintMismatch.into());
    }
    if metadata.edition_kind != EditionKind::Master {
        return Err(EditionError::NotAMasterEdition.into());
    }

    // Load master edition and verify its address
    let master_edition = MasterEdition::load(program_id, master_edition_info)?;
    assert_derivation(
        program_id,
        master_edition_info,
        &[PREFIX, program_id.as_ref(), mint_info.key.as_ref(), EDITION],
    )?;

    // Apply the burn policy
    let outstanding = master_edition.outstanding_prints()?;
    if master_edition.burn_policy == MasterBurnPolicy::RequireNoOutstandingPrints
        && outstanding > 0
    {
        msg!("{} prints still outstanding", outstanding);
        return Err(EditionError::OutstandingPrints.into());
    }

    // Burn the master token
    burn_single_unit(program_id, token_account_info, mint_info, owner_info)?;

    // Close records, rent to owner
    close_program_account(master_edition_info, owner_info)?;
    close_program_account(metadata_info, owner_info)?;

    msg!("Master {} burned", mint_info.key);
    Ok(())
}
