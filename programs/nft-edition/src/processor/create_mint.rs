//! CreateMint Instruction Processor
//!
//! Allocates an uninitialized mint account owned by this program.

use crate::state::{Mint, Pack};
use crate::utils::*;
use solana_program::{
    account_info::{next_account_info, AccountInfo},
    entrypoint::ProgramResult,
    msg,
    pubkey::Pubkey,
};

/// Process CreateMint instruction
///
/// Accounts expected:
/// 0. `[writable, signer]` New mint account
/// 1. `[writable, signer]` Payer
/// 2. `[]` System program
pub fn process(program_id: &Pubkey, accounts: &[AccountInfo]) -> ProgramResult {
    let account_info_iter = &mut accounts.iter();

    // Account 0: New mint account
    let mint_info = next_account_info(account_info_iter)?;

    // Account 1: Payer
    let payer_info = next_account_info(account_info_iter)?;

    // Account 2: System program
    let system_program_info = next_account_info(account_info_iter)?;

    // The mint keypair signs for its own allocation
    assert_signer(mint_info)?;
    assert_signer(payer_info)?;

    create_program_account(
        payer_info,
        mint_info,
        system_program_info,
        program_id,
        Mint::LEN,
        &[],
    )?;

    msg!("Allocated mint {}", mint_info.key);
    Ok(())
}
