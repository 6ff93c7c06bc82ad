//! InitializeMint Instruction Processor
//!
//! Turns an account allocated by CreateMint into a usable mint.

use crate::error::EditionError;
use crate::state::{record_key, store_record, AccountKey, COption, Mint, Pack};
use crate::utils::*;
use solana_program::{
    account_info::{next_account_info, AccountInfo},
    entrypoint::ProgramResult,
    pubkey::Pubkey,
};

/// Process InitializeMint instruction
///
/// Accounts expected:
/// 0. `[writable]` Mint account
/// 1. `[signer]` Mint authority
pub fn process(program_id: &Pubkey, accounts: &[AccountInfo], decimals: u8) -> ProgramResult {
    let account_info_iter = &mut accounts.iter();

    // Account 0: Mint account
    let mint_info = next_account_info(account_info_iter)?;

    // Account 1: Mint authority
    let authority_info = next_account_info(account_info_iter)?;

    // NFTs are indivisible
    if decimals != 0 {
        return Err(EditionError::InvalidPrecision.into());
    }

    assert_owned_by(mint_info, program_id)?;
    assert_writable(mint_info)?;
    assert_data_length(mint_info, Mint::LEN)?;
    assert_signer(authority_info)?;

    // Prevent double initialization
    if record_key(&mint_info.data.borrow())? != AccountKey::Uninitialized {
        return Err(EditionError::AlreadyInitialized.into());
    }

    let mint = Mint {
        mint_authority: COption::some(*authority_info.key),
        supply: 0,
        decimals,
    };
    store_record(&mint, mint_info)
}
