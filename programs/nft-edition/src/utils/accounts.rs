//! Account Lifecycle Helpers
//!
//! Allocation goes through the system program so every record starts
//! rent-exempt and owned by this program. Closing moves the lamports out
//! and zeroes the data; the runtime reclaims the account once the
//! transaction ends.

use crate::utils::{assert_uninitialized, assert_writable, checked_add};
use solana_program::{
    account_info::AccountInfo,
    entrypoint::ProgramResult,
    msg,
    program::{invoke, invoke_signed},
    pubkey::Pubkey,
    rent::Rent,
    system_instruction,
    sysvar::Sysvar,
};

/// Allocate `space` rent-exempt bytes at `new_account`, owned by `program_id`.
///
/// `signer_seeds` is empty when `new_account` signs the transaction itself
/// (a keypair mint) and carries the seeds plus bump for a derived address.
///
/// An address that already holds lamports but no record is taken over:
/// topped up to rent exemption, then allocated and assigned.
///
/// # Errors
///
/// `AccountAlreadyExists` if a record already lives at the address.
pub fn create_program_account<'a>(
    payer: &AccountInfo<'a>,
    new_account: &AccountInfo<'a>,
    system_program: &AccountInfo<'a>,
    program_id: &Pubkey,
    space: usize,
    signer_seeds: &[&[&[u8]]],
) -> ProgramResult {
    assert_uninitialized(new_account, program_id)?;

    let required = Rent::get()?.minimum_balance(space);
    let current = new_account.lamports();

    if current == 0 {
        return invoke_signed(
            &system_instruction::create_account(
                payer.key,
                new_account.key,
                required,
                space as u64,
                program_id,
            ),
            &[payer.clone(), new_account.clone(), system_program.clone()],
            signer_seeds,
        );
    }

    // Pre-funded address
    let top_up = required.saturating_sub(current);
    if top_up > 0 {
        invoke(
            &system_instruction::transfer(payer.key, new_account.key, top_up),
            &[payer.clone(), new_account.clone(), system_program.clone()],
        )?;
    }

    invoke_signed(
        &system_instruction::allocate(new_account.key, space as u64),
        &[new_account.clone(), system_program.clone()],
        signer_seeds,
    )?;
    invoke_signed(
        &system_instruction::assign(new_account.key, program_id),
        &[new_account.clone(), system_program.clone()],
        signer_seeds,
    )?;

    msg!("Took over pre-funded {} ({} lamports added)", new_account.key, top_up);
    Ok(())
}

/// Allocate a record at a derived address, signing with `seeds` + `bump`.
pub fn create_pda_account<'a>(
    payer: &AccountInfo<'a>,
    new_account: &AccountInfo<'a>,
    system_program: &AccountInfo<'a>,
    program_id: &Pubkey,
    space: usize,
    seeds: &[&[u8]],
    bump: u8,
) -> ProgramResult {
    let bump_seed = [bump];
    let mut signer_seeds: Vec<&[u8]> = seeds.to_vec();
    signer_seeds.push(&bump_seed);

    create_program_account(
        payer,
        new_account,
        system_program,
        program_id,
        space,
        &[signer_seeds.as_slice()],
    )
}

/// Close a program-owned record, sending its rent to `destination`.
pub fn close_program_account(account: &AccountInfo, destination: &AccountInfo) -> ProgramResult {
    assert_writable(account)?;
    assert_writable(destination)?;

    let account_lamports = account.lamports();
    **destination.lamports.borrow_mut() = checked_add(destination.lamports(), account_lamports)?;
    **account.lamports.borrow_mut() = 0;

    account.data.borrow_mut().fill(0);

    msg!("Closed {} ({} lamports reclaimed)", account.key, account_lamports);
    Ok(())
}
