//! Instruction Processors
//!
//! This module contains the business logic for each instruction.
//! Each instruction has its own file; `burn` holds the step shared by the
//! two burn instructions.

pub mod burn;
pub mod burn_master;
pub mod burn_print;
pub mod create_master_edition;
pub mod create_metadata;
pub mod create_mint;
pub mod create_print_edition;
pub mod create_token_account;
pub mod delegate;
pub mod initialize_mint;
pub mod mint_to;
pub mod revoke;
pub mod transfer_via_delegate;
pub mod update_metadata;

use crate::instruction::EditionInstruction;
use solana_program::{account_info::AccountInfo, entrypoint::ProgramResult, msg, pubkey::Pubkey};

/// Main processor that routes instructions to specific handlers
pub struct Processor;

impl Processor {
    /// Process an edition program instruction
    pub fn process(
        program_id: &Pubkey,
        accounts: &[AccountInfo],
        instruction_data: &[u8],
    ) -> ProgramResult {
        let instruction = EditionInstruction::unpack(instruction_data)?;

        match instruction {
            EditionInstruction::CreateMint => {
                msg!("Instruction: CreateMint");
                create_mint::process(program_id, accounts)
            }

            EditionInstruction::InitializeMint { decimals } => {
                msg!("Instruction: InitializeMint");
                initialize_mint::process(program_id, accounts, decimals)
            }

            EditionInstruction::CreateTokenAccount => {
                msg!("Instruction: CreateTokenAccount");
                create_token_account::process(program_id, accounts)
            }

            EditionInstruction::MintTo { amount } => {
                msg!("Instruction: MintTo");
                mint_to::process(program_id, accounts, amount)
            }

            EditionInstruction::CreateMetadata { data } => {
                msg!("Instruction: CreateMetadata");
                create_metadata::process(program_id, accounts, data)
            }

            EditionInstruction::UpdateMetadata {
                data,
                new_update_authority,
                is_mutable,
            } => {
                msg!("Instruction: UpdateMetadata");
                update_metadata::process(
                    program_id,
                    accounts,
                    data,
                    new_update_authority,
                    is_mutable,
                )
            }

            EditionInstruction::CreateMasterEdition {
                max_supply,
                burn_policy,
            } => {
                msg!("Instruction: CreateMasterEdition");
                create_master_edition::process(program_id, accounts, max_supply, burn_policy)
            }

            EditionInstruction::CreatePrintEdition { edition } => {
                msg!("Instruction: CreatePrintEdition");
                create_print_edition::process(program_id, accounts, edition)
            }

            EditionInstruction::Delegate { amount } => {
                msg!("Instruction: Delegate");
                delegate::process(program_id, accounts, amount)
            }

            EditionInstruction::TransferViaDelegate { amount, bump } => {
                msg!("Instruction: TransferViaDelegate");
                transfer_via_delegate::process(program_id, accounts, amount, bump)
            }

            EditionInstruction::Revoke => {
                msg!("Instruction: Revoke");
                revoke::process(program_id, accounts)
            }

            EditionInstruction::BurnPrint => {
                msg!("Instruction: BurnPrint");
                burn_print::process(program_id, accounts)
            }

            EditionInstruction::BurnMaster => {
                msg!("Instruction: BurnMaster");
                burn_master::process(program_id, accounts)
            }
        }
    }
}
