//! CreateTokenAccount Instruction Processor
//!
//! Creates the canonical token account for an (owner, mint) pair.

use crate::pda::assert_derivation;
use crate::state::{load_record, store_record, COption, Mint, Pack, TokenAccount};
use crate::utils::*;
use solana_program::{
    account_info::{next_account_info, AccountInfo},
    entrypoint::ProgramResult,
    msg,
    pubkey::Pubkey,
};

/// Process CreateTokenAccount instruction
///
/// Accounts expected:
/// 0. `[writable]` Token account, at `[owner, program_id, mint]`
/// 1. `[]` Owner
/// 2. `[]` Mint
/// 3. `[writable, signer]` Payer
/// 4. `[]` System program
pub fn process(program_id: &Pubkey, accounts: &[AccountInfo]) -> ProgramResult {
    let account_info_iter = &mut accounts.iter();

    // Account 0: Token account
    let token_account_info = next_account_info(account_info_iter)?;

    // Account 1: Owner
    let owner_info = next_account_info(account_info_iter)?;

    // Account 2: Mint
    let mint_info = next_account_info(account_info_iter)?;

    // Account 3: Payer
    let payer_info = next_account_info(account_info_iter)?;

    // Account 4: System program
    let system_program_info = next_account_info(account_info_iter)?;

    assert_signer(payer_info)?;
    let _mint: Mint = load_record(program_id, mint_info)?;

    let seeds: &[&[u8]] = &[
        owner_info.key.as_ref(),
        program_id.as_ref(),
        mint_info.key.as_ref(),
    ];
    let bump = assert_derivation(program_id, token_account_info, seeds)?;

    create_pda_account(
        payer_info,
        token_account_info,
        system_program_info,
        program_id,
        TokenAccount::LEN,
        seeds,
        bump,
    )?;

    let account = TokenAccount {
        mint: *mint_info.key,
        owner: *owner_info.key,
        amount: 0,
        delegate: COption::none(),
    };
    store_record(&account, token_account_info)?;

    msg!("Token account {} created for {}", token_account_info.key, owner_info.key);
    Ok(())
}
