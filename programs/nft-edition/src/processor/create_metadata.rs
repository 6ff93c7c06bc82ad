//! CreateMetadata Instruction Processor
//!
//! Attaches a validated descriptor to a mint.

use crate::constants::PREFIX;
use crate::pda::assert_derivation;
use crate::state::{load_record, store_record, Data, EditionKind, Metadata, Mint, Pack};
use crate::utils::*;
use solana_program::{
    account_info::{next_account_info, AccountInfo},
    entrypoint::ProgramResult,
    msg,
    pubkey::Pubkey,
};

/// Process CreateMetadata instruction
///
/// Accounts expected:
/// 0. `[writable]` Metadata record, at `["metadata", program_id, mint]`
/// 1. `[]` Mint
/// 2. `[signer]` Mint authority
/// 3. `[writable, signer]` Payer
/// 4. `[]` Update authority (must sign to mark itself a verified creator)
/// 5. `[]` System program
pub fn process(program_id: &Pubkey, accounts: &[AccountInfo], data: Data) -> ProgramResult {
    let account_info_iter = &mut accounts.iter();

    // Account 0: Metadata record
    let metadata_info = next_account_info(account_info_iter)?;

    // Account 1: Mint
    let mint_info = next_account_info(account_info_iter)?;

    // Account 2: Mint authority
    let mint_authority_info = next_account_info(account_info_iter)?;

    // Account 3: Payer
    let payer_info = next_account_info(account_info_iter)?;

    // Account 4: Update authority (must sign to mark itself a verified creator)
    let update_authority_info = next_account_info(account_info_iter)?;

    // Account 5: System program
    let system_program_info = next_account_info(account_info_iter)?;

    assert_signer(payer_info)?;

    let mint: Mint = load_record(program_id, mint_info)?;
    validate_mint_authority(&mint, mint_authority_info)?;

    data.validate()?;
    let signing_authority = update_authority_info
        .is_signer
        .then_some(update_authority_info.key);
    data.assert_verified_creators(signing_authority, &[])?;

    let seeds: &[&[u8]] = &[PREFIX, program_id.as_ref(), mint_info.key.as_ref()];
    let bump = assert_derivation(program_id, metadata_info, seeds)?;

    create_pda_account(
        payer_info,
        metadata_info,
        system_program_info,
        program_id,
        Metadata::LEN,
        seeds,
        bump,
    )?;

    let metadata = Metadata {
        update_authority: *update_authority_info.key,
        mint: *mint_info.key,
        data,
        is_mutable: true,
        edition_kind: EditionKind::Standalone,
    };
    store_record(&metadata, metadata_info)?;

    msg!("Metadata created for mint {}", mint_info.key);
    Ok(())
}
