//! BurnPrint Instruction Processor
//!
//! Burns a print and closes its edition and metadata records. The master's
//! print count and the edition marker stay as they are, so a burned number
//! is never issued again.
//!
//! A print can outlive its master under `AllowOutstandingPrints`. Once the
//! master edition record is closed, lineage is checked against the address
//! derived from the master mint and there is no burned count left to bump.

use crate::constants::{EDITION, PREFIX};
use crate::error::EditionError;
use crate::pda::{assert_derivation, find_edition_address, marker_seed};
use crate::processor::burn::burn_single_unit;
use crate::state::{
    load_record, store_record, Edition, EditionKind, EditionMarker, MasterEdition, Metadata,
    Mint, TokenAccount,
};
use crate::utils::*;
use solana_program::{
    account_info::{next_account_info, AccountInfo},
    entrypoint::ProgramResult,
    msg,
    pubkey::Pubkey,
};

/// Process BurnPrint instruction
///
/// Accounts expected:
/// 0. `[writable]` Print metadata record
/// 1. `[writable, signer]` Owner of the print
/// 2. `[writable]` Print mint
/// 3. `[writable]` Print token account
/// 4. `[]` Master mint
/// 5. `[]` Master token account
/// 6. `[writable]` Master edition record (may already be closed)
/// 7. `[writable]` Print edition record
/// 8. `[]` Edition marker
pub fn process(program_id: &Pubkey, accounts: &[AccountInfo]) -> ProgramResult {
    let account_info_iter = &mut accounts.iter();

    // Account 0: Print metadata record
    let print_metadata_info = next_account_info(account_info_iter)?;

    // Account 1: Owner of the print
    let owner_info = next_account_info(account_info_iter)?;

    // Account 2: Print mint
    let print_mint_info = next_account_info(account_info_iter)?;

    // Account 3: Print token account
    let print_token_account_info = next_account_info(account_info_iter)?;

    // Account 4: Master mint
    let master_mint_info = next_account_info(account_info_iter)?;

    // Account 5: Master token account
    let master_token_account_info = next_account_info(account_info_iter)?;

    // Account 6: Master edition record
    let master_edition_info = next_account_info(account_info_iter)?;

    // Account 7: Print edition record
    let print_edition_info = next_account_info(account_info_iter)?;

    // Account 8: Edition marker
    let marker_info = next_account_info(account_info_iter)?;

    assert_writable(master_edition_info)?;

    // =========================================================================
    // PRINT SIDE
    // =========================================================================

    let print_metadata: Metadata = load_record(program_id, print_metadata_info)?;
    if print_metadata.mint != *print_mint_info.key {
        return Err(EditionError::MintMismatch.into());
    }
    if print_metadata.edition_kind != EditionKind::Print {
        return Err(EditionError::DataTypeMismatch.into());
    }

    let print_edition: Edition = load_record(program_id, print_edition_info)?;
    assert_derivation(
        program_id,
        print_edition_info,
        &[
            PREFIX,
            program_id.as_ref(),
            print_mint_info.key.as_ref(),
            EDITION,
        ],
    )?;

    // =========================================================================
    // LINEAGE: print edition -> master edition -> master mint
    // =========================================================================

    assert_key(
        master_edition_info,
        &print_edition.parent,
        EditionError::EditionParentMismatch,
    )?;

    let master_closed =
        master_edition_info.data_is_empty() || master_edition_info.owner != program_id;

    let master_edition = if master_closed {
        // Parent must still be the edition address of this master mint
        let (expected_parent, _) = find_edition_address(program_id, master_mint_info.key)?;
        if expected_parent != print_edition.parent {
            return Err(EditionError::EditionParentMismatch.into());
        }
        None
    } else {
        let master_edition = MasterEdition::load(program_id, master_edition_info)?;
        assert_key(
            master_mint_info,
            &master_edition.mint,
            EditionError::EditionParentMismatch,
        )?;
        Some(master_edition)
    };

    let _master_mint: Mint = load_record(program_id, master_mint_info)?;
    let master_token: TokenAccount = load_record(program_id, master_token_account_info)?;
    if master_token.mint != *master_mint_info.key {
        return Err(EditionError::MintMismatch.into());
    }

    // =========================================================================
    // MARKER
    // =========================================================================

    let marker_number = marker_seed(print_edition.edition);
    assert_derivation(
        program_id,
        marker_info,
        &[
            PREFIX,
            program_id.as_ref(),
            master_mint_info.key.as_ref(),
            EDITION,
            marker_number.as_bytes(),
        ],
    )?;
    let marker: EditionMarker = load_record(program_id, marker_info)?;
    if !marker.edition_taken(print_edition.edition) {
        return Err(EditionError::EditionNotMarked.into());
    }

    // =========================================================================
    // BURN AND CLOSE
    // =========================================================================

    burn_single_unit(
        program_id,
        print_token_account_info,
        print_mint_info,
        owner_info,
    )?;

    close_program_account(print_edition_info, owner_info)?;
    close_program_account(print_metadata_info, owner_info)?;

    if let Some(mut master_edition) = master_edition {
        master_edition.burned_prints = checked_add(master_edition.burned_prints, 1u64)?;
        store_record(&master_edition, master_edition_info)?;
    }

    msg!(
        "Edition {} of master {} burned",
        print_edition.edition,
        master_mint_info.key
    );
    Ok(())
}
