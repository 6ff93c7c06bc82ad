//! CreatePrintEdition Instruction Processor
//!
//! Issues the next numbered print of a master edition.
//!
//! ```text
//! 1. requested edition == master.supply + 1        else EditionNumberOutOfSequence
//! 2. requested edition <= max_supply               else EditionsExhausted
//! 3. marker bit for the edition is clear           else EditionAlreadyIssued
//! 4. print mint: 0 decimals, supply 1, held by print owner; authority revoked
//! 5. create Edition + print Metadata records
//! 6. set marker bit, master.supply = edition
//! ```
//!
//! Every step runs inside one instruction, so a failure at any point leaves
//! no partial state behind.

use crate::constants::{EDITION, PREFIX};
use crate::error::EditionError;
use crate::pda::{assert_derivation, marker_seed};
use crate::state::{
    load_record, store_record, COption, Edition, EditionKind, EditionMarker, MasterEdition,
    Metadata, Mint, Pack, TokenAccount,
};
use crate::utils::*;
use solana_program::{
    account_info::{next_account_info, AccountInfo},
    entrypoint::ProgramResult,
    msg,
    pubkey::Pubkey,
};

/// Process CreatePrintEdition instruction
///
/// Accounts expected:
/// 0. `[writable]` Print metadata record
/// 1. `[writable]` Print edition record
/// 2. `[writable]` Master edition record
/// 3. `[writable]` Print mint
/// 4. `[writable]` Edition marker
/// 5. `[signer]` Print mint authority
/// 6. `[writable, signer]` Payer
/// 7. `[signer]` Owner of the master token
/// 8. `[]` Master token account
/// 9. `[]` Master metadata record
/// 10. `[]` Master mint
/// 11. `[]` Print token account
/// 12. `[]` Print owner
/// 13. `[]` System program
pub fn process(program_id: &Pubkey, accounts: &[AccountInfo], edition: u64) -> ProgramResult {
    let account_info_iter = &mut accounts.iter();

    // Account 0: Print metadata record
    let print_metadata_info = next_account_info(account_info_iter)?;

    // Account 1: Print edition record
    let print_edition_info = next_account_info(account_info_iter)?;

    // Account 2: Master edition record
    let master_edition_info = next_account_info(account_info_iter)?;

    // Account 3: Print mint
    let print_mint_info = next_account_info(account_info_iter)?;

    // Account 4: Edition marker
    let marker_info = next_account_info(account_info_iter)?;

    // Account 5: Print mint authority
    let print_mint_authority_info = next_account_info(account_info_iter)?;

    // Account 6: Payer
    let payer_info = next_account_info(account_info_iter)?;

    // Account 7: Owner of the master token
    let master_token_owner_info = next_account_info(account_info_iter)?;

    // Account 8: Master token account
    let master_token_account_info = next_account_info(account_info_iter)?;

    // Account 9: Master metadata record
    let master_metadata_info = next_account_info(account_info_iter)?;

    // Account 10: Master mint
    let master_mint_info = next_account_info(account_info_iter)?;

    // Account 11: Print token account
    let print_token_account_info = next_account_info(account_info_iter)?;

    // Account 12: Print owner
    let print_owner_info = next_account_info(account_info_iter)?;

    // Account 13: System program
    let system_program_info = next_account_info(account_info_iter)?;

    // Validate accounts this instruction writes
    assert_signer(payer_info)?;
    assert_writable(master_edition_info)?;
    assert_writable(print_mint_info)?;
    assert_writable(marker_info)?;

    // =========================================================================
    // MASTER LINEAGE
    // =========================================================================

    let _master_mint: Mint = load_record(program_id, master_mint_info)?;

    // Load master edition and verify its address
    let mut master_edition = MasterEdition::load(program_id, master_edition_info)?;
    assert_derivation(
        program_id,
        master_edition_info,
        &[
            PREFIX,
            program_id.as_ref(),
            master_mint_info.key.as_ref(),
            EDITION,
        ],
    )?;
    assert_key(master_mint_info, &master_edition.mint, EditionError::MintMismatch)?;

    // Master metadata must be marked as a master
    let master_metadata: Metadata = load_record(program_id, master_metadata_info)?;
    if master_metadata.mint != *master_mint_info.key {
        return Err(EditionError::MintMismatch.into());
    }
    if master_metadata.edition_kind != EditionKind::Master {
        return Err(EditionError::NotAMasterEdition.into());
    }

    // Issuance is authorized by whoever holds the master token
    let master_token: TokenAccount = load_record(program_id, master_token_account_info)?;
    if master_token.mint != *master_mint_info.key {
        return Err(EditionError::MintMismatch.into());
    }
    validate_token_owner(&master_token, master_token_owner_info)?;
    if !master_token.holds_single_unit() {
        return Err(EditionError::InsufficientFunds.into());
    }

    // =========================================================================
    // SEQUENCE AND CAP
    // =========================================================================

    if edition != checked_add(master_edition.supply, 1u64)? {
        return Err(EditionError::EditionNumberOutOfSequence.into());
    }
    let edition = master_edition.next_edition()?;

    // =========================================================================
    // PRINT MINT
    // =========================================================================

    // Load print mint
    let mut print_mint: Mint = load_record(program_id, print_mint_info)?;
    if print_mint.decimals != 0 {
        return Err(EditionError::InvalidPrecision.into());
    }
    if print_mint.supply != 1 {
        return Err(EditionError::PrintMintNotSingleUnit.into());
    }

    // The single unit sits with the print owner
    let print_token: TokenAccount = load_record(program_id, print_token_account_info)?;
    if print_token.mint != *print_mint_info.key {
        return Err(EditionError::MintMismatch.into());
    }
    if print_token.owner != *print_owner_info.key {
        return Err(EditionError::OwnerMismatch.into());
    }
    if !print_token.holds_single_unit() {
        return Err(EditionError::PrintMintNotSingleUnit.into());
    }

    // Validate print mint authority
    validate_mint_authority(&print_mint, print_mint_authority_info)?;

    // =========================================================================
    // ADDRESSES
    // =========================================================================

    let marker_number = marker_seed(edition);
    let marker_seeds: &[&[u8]] = &[
        PREFIX,
        program_id.as_ref(),
        master_mint_info.key.as_ref(),
        EDITION,
        marker_number.as_bytes(),
    ];
    let marker_bump = assert_derivation(program_id, marker_info, marker_seeds)?;

    let print_edition_seeds: &[&[u8]] = &[
        PREFIX,
        program_id.as_ref(),
        print_mint_info.key.as_ref(),
        EDITION,
    ];
    let print_edition_bump = assert_derivation(program_id, print_edition_info, print_edition_seeds)?;

    let print_metadata_seeds: &[&[u8]] =
        &[PREFIX, program_id.as_ref(), print_mint_info.key.as_ref()];
    let print_metadata_bump =
        assert_derivation(program_id, print_metadata_info, print_metadata_seeds)?;

    // =========================================================================
    // MARKER
    // =========================================================================

    let mut marker = if marker_info.data_is_empty() {
        create_pda_account(
            payer_info,
            marker_info,
            system_program_info,
            program_id,
            EditionMarker::LEN,
            marker_seeds,
            marker_bump,
        )?;
        EditionMarker::default()
    } else {
        load_record::<EditionMarker>(program_id, marker_info)?
    };
    marker.insert_edition(edition)?;

    // =========================================================================
    // PRINT RECORDS
    // =========================================================================

    create_pda_account(
        payer_info,
        print_edition_info,
        system_program_info,
        program_id,
        Edition::LEN,
        print_edition_seeds,
        print_edition_bump,
    )?;
    create_pda_account(
        payer_info,
        print_metadata_info,
        system_program_info,
        program_id,
        Metadata::LEN,
        print_metadata_seeds,
        print_metadata_bump,
    )?;

    let print_edition = Edition {
        parent: *master_edition_info.key,
        edition,
    };
    store_record(&print_edition, print_edition_info)?;

    let print_metadata = Metadata {
        update_authority: master_metadata.update_authority,
        mint: *print_mint_info.key,
        data: master_metadata.data.clone(),
        is_mutable: master_metadata.is_mutable,
        edition_kind: EditionKind::Print,
    };
    store_record(&print_metadata, print_metadata_info)?;

    print_mint.mint_authority = COption::none();
    store_record(&print_mint, print_mint_info)?;

    store_record(&marker, marker_info)?;

    master_edition.supply = edition;
    store_record(&master_edition, master_edition_info)?;

    msg!(
        "Edition {} of master {} issued to {}",
        edition,
        master_mint_info.key,
        print_owner_info.key
    );
    Ok(())
}
