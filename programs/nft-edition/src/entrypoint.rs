//! Program Entrypoint
//!
//! Where the Solana runtime calls into the program for every instruction.

// Compiled out when another program depends on this crate
#![cfg(not(feature = "no-entrypoint"))]

use crate::processor::Processor;
use solana_program::{
    account_info::AccountInfo, entrypoint, entrypoint::ProgramResult, pubkey::Pubkey,
};

entrypoint!(process_instruction);

/// The main entrypoint for the edition program.
///
/// # Arguments
///
/// * `program_id` - The public key of this program
/// * `accounts` - All accounts involved in this instruction
/// * `instruction_data` - Discriminant byte followed by instruction fields
///
/// Any error rolls back every write the instruction made.
pub fn process_instruction(
    program_id: &Pubkey,
    accounts: &[AccountInfo],
    instruction_data: &[u8],
) -> ProgramResult {
    Processor::process(program_id, accounts, instruction_data)
}
