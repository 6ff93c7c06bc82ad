//! CreateMasterEdition Instruction Processor
//!
//! Pins a one-unit mint as a master edition: the mint authority is revoked
//! for good and the metadata is marked as a master.

use crate::constants::{EDITION, PREFIX};
use crate::error::EditionError;
use crate::pda::assert_derivation;
use crate::state::{
    load_record, store_record, COption, EditionKind, MasterBurnPolicy, MasterEdition, Metadata,
    Mint, Pack,
};
use crate::utils::*;
use solana_program::{
    account_info::{next_account_info, AccountInfo},
    entrypoint::ProgramResult,
    msg,
    pubkey::Pubkey,
};

/// Process CreateMasterEdition instruction
///
/// Accounts expected:
/// 0. `[writable]` Master edition record, at `["metadata", program_id, mint, "edition"]`
/// 1. `[writable]` Mint
/// 2. `[signer]` Update authority
/// 3. `[signer]` Mint authority
/// 4. `[writable, signer]` Payer
/// 5. `[writable]` Metadata record
/// 6. `[]` System program
pub fn process(
    program_id: &Pubkey,
    accounts: &[AccountInfo],
    max_supply: Option<u64>,
    burn_policy: MasterBurnPolicy,
) -> ProgramResult {
    let account_info_iter = &mut accounts.iter();

    // Account 0: Master edition record
    let edition_info = next_account_info(account_info_iter)?;

    // Account 1: Mint
    let mint_info = next_account_info(account_info_iter)?;

    // Account 2: Update authority
    let update_authority_info = next_account_info(account_info_iter)?;

    // Account 3: Mint authority
    let mint_authority_info = next_account_info(account_info_iter)?;

    // Account 4: Payer
    let payer_info = next_account_info(account_info_iter)?;

    // Account 5: Metadata record
    let metadata_info = next_account_info(account_info_iter)?;

    // Account 6: System program
    let system_program_info = next_account_info(account_info_iter)?;

    assert_signer(payer_info)?;
    assert_writable(mint_info)?;
    assert_writable(metadata_info)?;

    let seeds: &[&[u8]] = &[
        PREFIX,
        program_id.as_ref(),
        mint_info.key.as_ref(),
        EDITION,
    ];
    let bump = assert_derivation(program_id, edition_info, seeds)?;
    assert_uninitialized(edition_info, program_id)?;

    let mut mint: Mint = load_record(program_id, mint_info)?;
    let mut metadata: Metadata = load_record(program_id, metadata_info)?;

    if metadata.mint != *mint_info.key {
        return Err(EditionError::MintMismatch.into());
    }
    validate_update_authority(&metadata, update_authority_info)?;
    validate_mint_authority(&mint, mint_authority_info)?;

    if mint.supply != 1 {
        return Err(EditionError::MasterSupplyNotOne.into());
    }

    create_pda_account(
        payer_info,
        edition_info,
        system_program_info,
        program_id,
        MasterEdition::LEN,
        seeds,
        bump,
    )?;

    let master_edition = MasterEdition {
        mint: *mint_info.key,
        supply: 0,
        max_supply: max_supply.into(),
        burned_prints: 0,
        burn_policy,
    };
    store_record(&master_edition, edition_info)?;

    // Irreversible: the supply stays at one
    mint.mint_authority = COption::none();
    store_record(&mint, mint_info)?;

    metadata.edition_kind = EditionKind::Master;
    store_record(&metadata, metadata_info)?;

    msg!(
        "Master edition created for {} (max supply {:?}), mint authority revoked",
        mint_info.key,
        max_supply
    );
    Ok(())
}
