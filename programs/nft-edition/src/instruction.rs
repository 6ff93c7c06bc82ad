//! Instruction Types
//!
//! This module defines all instructions supported by the edition program,
//! their wire format and client-side builders.
//!
//! # Instruction Format
//!
//! ```text
//! [discriminant: u8][data: varies]
//! ```
//!
//! # Discriminant Values
//!
//! | Value | Instruction |
//! |-------|-------------|
//! | 0 | CreateMint |
//! | 1 | InitializeMint |
//! | 2 | CreateTokenAccount |
//! | 3 | MintTo |
//! | 4 | CreateMetadata |
//! | 5 | UpdateMetadata |
//! | 6 | CreateMasterEdition |
//! | 7 | CreatePrintEdition |
//! | 8 | Delegate |
//! | 9 | TransferViaDelegate |
//! | 10 | Revoke |
//! | 11 | BurnPrint |
//! | 12 | BurnMaster |
//!
//! # Field Encoding
//!
//! - Integers: little-endian
//! - Strings: `u32` length + UTF-8 bytes
//! - Options: `u8` tag (0 = None, 1 = Some) + value
//! - Creators: `u8` count + 34 bytes each (address, verified, share)

use crate::constants::MAX_CREATOR_LEN;
use crate::error::EditionError;
use crate::pda::{
    find_delegate_address, find_edition_address, find_edition_marker_address,
    find_metadata_address, find_token_account_address,
};
use crate::state::{Creator, Data, MasterBurnPolicy};
use solana_program::{
    instruction::{AccountMeta, Instruction},
    program_error::ProgramError,
    pubkey::Pubkey,
    system_program,
};

// =============================================================================
// INSTRUCTION ENUM
// =============================================================================

/// All instructions supported by the edition program.
#[derive(Clone, Debug, PartialEq)]
pub enum EditionInstruction {
    /// Allocate an uninitialized mint account.
    ///
    /// Accounts expected:
    /// 0. `[writable, signer]` New mint account
    /// 1. `[writable, signer]` Payer
    /// 2. `[]` System program
    CreateMint,

    /// Initialize a mint allocated by CreateMint.
    ///
    /// Accounts expected:
    /// 0. `[writable]` Mint account
    /// 1. `[signer]` Mint authority
    InitializeMint {
        /// Must be 0.
        decimals: u8,
    },

    /// Create the canonical token account for (owner, mint).
    ///
    /// Accounts expected:
    /// 0. `[writable]` Token account, at `[owner, program_id, mint]`
    /// 1. `[]` Owner
    /// 2. `[]` Mint
    /// 3. `[writable, signer]` Payer
    /// 4. `[]` System program
    CreateTokenAccount,

    /// Mint new units into a token account.
    ///
    /// Accounts expected:
    /// 0. `[writable]` Mint
    /// 1. `[writable]` Destination token account
    /// 2. `[signer]` Mint authority
    MintTo { amount: u64 },

    /// Attach a metadata record to a mint.
    ///
    /// Accounts expected:
    /// 0. `[writable]` Metadata record, at `["metadata", program_id, mint]`
    /// 1. `[]` Mint
    /// 2. `[signer]` Mint authority
    /// 3. `[writable, signer]` Payer
    /// 4. `[]` Update authority (signer when a creator is marked verified)
    /// 5. `[]` System program
    CreateMetadata { data: Data },

    /// Change a mutable metadata record.
    ///
    /// Accounts expected:
    /// 0. `[writable]` Metadata record
    /// 1. `[signer]` Current update authority
    UpdateMetadata {
        data: Option<Data>,
        new_update_authority: Option<Pubkey>,
        is_mutable: Option<bool>,
    },

    /// Turn a one-unit mint into a master edition.
    ///
    /// Accounts expected:
    /// 0. `[writable]` Master edition record, at `["metadata", program_id, mint, "edition"]`
    /// 1. `[writable]` Mint
    /// 2. `[signer]` Update authority
    /// 3. `[signer]` Mint authority
    /// 4. `[writable, signer]` Payer
    /// 5. `[writable]` Metadata record
    /// 6. `[]` System program
    CreateMasterEdition {
        /// `None` for unlimited prints.
        max_supply: Option<u64>,
        /// Trailing byte; RequireNoOutstandingPrints when absent.
        burn_policy: MasterBurnPolicy,
    },

    /// Issue the next numbered print of a master.
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
    CreatePrintEdition { edition: u64 },

    /// Let anyone move up to `amount` units out of `source`.
    ///
    /// Accounts expected:
    /// 0. `[writable]` Source token account
    /// 1. `[writable]` Delegation record, at `["delegate_nft", owner]`
    /// 2. `[writable, signer]` Owner
    /// 3. `[]` System program
    Delegate { amount: u64 },

    /// Move units under a delegation. No owner signature.
    ///
    /// Accounts expected:
    /// 0. `[writable]` Source token account
    /// 1. `[writable]` Destination token account
    /// 2. `[writable]` Delegation record
    /// 3. `[writable]` Owner (receives the record's rent when it closes)
    TransferViaDelegate { amount: u64, bump: u8 },

    /// Cancel a delegation.
    ///
    /// Accounts expected:
    /// 0. `[writable]` Source token account
    /// 1. `[writable]` Delegation record
    /// 2. `[writable, signer]` Owner
    Revoke,

    /// Burn a print and close its records.
    ///
    /// Accounts expected:
    /// 0. `[writable]` Print metadata record
    /// 1. `[writable, signer]` Owner of the print
    /// 2. `[writable]` Print mint
    /// 3. `[writable]` Print token account
    /// 4. `[]` Master mint
    /// 5. `[]` Master token account
    /// 6. `[writable]` Master edition record
    /// 7. `[writable]` Print edition record
    /// 8. `[]` Edition marker
    BurnPrint,

    /// Burn a master token and close its records.
    ///
    /// Accounts expected:
    /// 0. `[writable]` Master metadata record
    /// 1. `[writable, signer]` Owner of the master token
    /// 2. `[writable]` Master mint
    /// 3. `[writable]` Master token account
    /// 4. `[writable]` Master edition record
    BurnMaster,
}

// =============================================================================
// UNPACK / PACK
// =============================================================================

impl EditionInstruction {
    /// Unpack instruction data into an EditionInstruction.
    ///
    /// # Errors
    ///
    /// `InvalidInstruction` for an unknown discriminant, short data or a
    /// malformed field.
    pub fn unpack(input: &[u8]) -> Result<Self, ProgramError> {
        let (&discriminant, rest) = input
            .split_first()
            .ok_or(EditionError::InvalidInstruction)?;

        Ok(match discriminant {
            0 => EditionInstruction::CreateMint,

            1 => {
                let (decimals, _) = unpack_u8(rest)?;
                EditionInstruction::InitializeMint { decimals }
            }

            2 => EditionInstruction::CreateTokenAccount,

            3 => {
                let (amount, _) = unpack_u64(rest)?;
                EditionInstruction::MintTo { amount }
            }

            4 => {
                let (data, _) = unpack_data(rest)?;
                EditionInstruction::CreateMetadata { data }
            }

            5 => {
                let (data, rest) = match unpack_option_tag(rest)? {
                    (true, rest) => {
                        let (data, rest) = unpack_data(rest)?;
                        (Some(data), rest)
                    }
                    (false, rest) => (None, rest),
                };
                let (new_update_authority, rest) = match unpack_option_tag(rest)? {
                    (true, rest) => {
                        let (key, rest) = unpack_pubkey(rest)?;
                        (Some(key), rest)
                    }
                    (false, rest) => (None, rest),
                };
                let (is_mutable, _) = match unpack_option_tag(rest)? {
                    (true, rest) => {
                        let (flag, rest) = unpack_bool(rest)?;
                        (Some(flag), rest)
                    }
                    (false, rest) => (None, rest),
                };
                EditionInstruction::UpdateMetadata {
                    data,
                    new_update_authority,
                    is_mutable,
                }
            }

            6 => {
                let (max_supply, rest) = match unpack_option_tag(rest)? {
                    (true, rest) => {
                        let (max, rest) = unpack_u64(rest)?;
                        (Some(max), rest)
                    }
                    (false, rest) => (None, rest),
                };
                let burn_policy = match rest.first() {
                    Some(byte) => MasterBurnPolicy::from_u8(*byte)?,
                    None => MasterBurnPolicy::default(),
                };
                EditionInstruction::CreateMasterEdition {
                    max_supply,
                    burn_policy,
                }
            }

            7 => {
                let (edition, _) = unpack_u64(rest)?;
                EditionInstruction::CreatePrintEdition { edition }
            }

            8 => {
                let (amount, _) = unpack_u64(rest)?;
                EditionInstruction::Delegate { amount }
            }

            9 => {
                let (amount, rest) = unpack_u64(rest)?;
                let (bump, _) = unpack_u8(rest)?;
                EditionInstruction::TransferViaDelegate { amount, bump }
            }

            10 => EditionInstruction::Revoke,
            11 => EditionInstruction::BurnPrint,
            12 => EditionInstruction::BurnMaster,

            _ => return Err(EditionError::InvalidInstruction.into()),
        })
    }

    /// Pack instruction into bytes.
    ///
    /// This is the inverse of `unpack()`.
    pub fn pack(&self) -> Vec<u8> {
        let mut buf = Vec::new();

        match self {
            EditionInstruction::CreateMint => buf.push(0),

            EditionInstruction::InitializeMint { decimals } => {
                buf.push(1);
                buf.push(*decimals);
            }

            EditionInstruction::CreateTokenAccount => buf.push(2),

            EditionInstruction::MintTo { amount } => {
                buf.push(3);
                buf.extend_from_slice(&amount.to_le_bytes());
            }

            EditionInstruction::CreateMetadata { data } => {
                buf.push(4);
                pack_data(data, &mut buf);
            }

            EditionInstruction::UpdateMetadata {
                data,
                new_update_authority,
                is_mutable,
            } => {
                buf.push(5);
                match data {
                    Some(data) => {
                        buf.push(1);
                        pack_data(data, &mut buf);
                    }
                    None => buf.push(0),
                }
                match new_update_authority {
                    Some(key) => {
                        buf.push(1);
                        buf.extend_from_slice(key.as_ref());
                    }
                    None => buf.push(0),
                }
                match is_mutable {
                    Some(flag) => {
                        buf.push(1);
                        buf.push(*flag as u8);
                    }
                    None => buf.push(0),
                }
            }

            EditionInstruction::CreateMasterEdition {
                max_supply,
                burn_policy,
            } => {
                buf.push(6);
                match max_supply {
                    Some(max) => {
                        buf.push(1);
                        buf.extend_from_slice(&max.to_le_bytes());
                    }
                    None => buf.push(0),
                }
                buf.push(*burn_policy as u8);
            }

            EditionInstruction::CreatePrintEdition { edition } => {
                buf.push(7);
                buf.extend_from_slice(&edition.to_le_bytes());
            }

            EditionInstruction::Delegate { amount } => {
                buf.push(8);
                buf.extend_from_slice(&amount.to_le_bytes());
            }

            EditionInstruction::TransferViaDelegate { amount, bump } => {
                buf.push(9);
                buf.extend_from_slice(&amount.to_le_bytes());
                buf.push(*bump);
            }

            EditionInstruction::Revoke => buf.push(10),
            EditionInstruction::BurnPrint => buf.push(11),
            EditionInstruction::BurnMaster => buf.push(12),
        }

        buf
    }
}

// =============================================================================
// FIELD DECODERS
// =============================================================================

fn unpack_u8(input: &[u8]) -> Result<(u8, &[u8]), ProgramError> {
    let (&value, rest) = input
        .split_first()
        .ok_or(EditionError::InvalidInstruction)?;
    Ok((value, rest))
}

fn unpack_bool(input: &[u8]) -> Result<(bool, &[u8]), ProgramError> {
    match unpack_u8(input)? {
        (0, rest) => Ok((false, rest)),
        (1, rest) => Ok((true, rest)),
        _ => Err(EditionError::InvalidInstruction.into()),
    }
}

fn unpack_option_tag(input: &[u8]) -> Result<(bool, &[u8]), ProgramError> {
    unpack_bool(input)
}

fn unpack_u16(input: &[u8]) -> Result<(u16, &[u8]), ProgramError> {
    if input.len() < 2 {
        return Err(EditionError::InvalidInstruction.into());
    }
    let (bytes, rest) = input.split_at(2);
    Ok((u16::from_le_bytes([bytes[0], bytes[1]]), rest))
}

fn unpack_u64(input: &[u8]) -> Result<(u64, &[u8]), ProgramError> {
    if input.len() < 8 {
        return Err(EditionError::InvalidInstruction.into());
    }
    let (bytes, rest) = input.split_at(8);
    let value = u64::from_le_bytes(
        bytes
            .try_into()
            .map_err(|_| EditionError::InvalidInstruction)?,
    );
    Ok((value, rest))
}

fn unpack_pubkey(input: &[u8]) -> Result<(Pubkey, &[u8]), ProgramError> {
    if input.len() < 32 {
        return Err(EditionError::InvalidInstruction.into());
    }
    let (bytes, rest) = input.split_at(32);
    let key = Pubkey::new_from_array(
        bytes
            .try_into()
            .map_err(|_| EditionError::InvalidInstruction)?,
    );
    Ok((key, rest))
}

fn unpack_string(input: &[u8]) -> Result<(String, &[u8]), ProgramError> {
    if input.len() < 4 {
        return Err(EditionError::InvalidInstruction.into());
    }
    let (len, rest) = input.split_at(4);
    let len = u32::from_le_bytes([len[0], len[1], len[2], len[3]]) as usize;
    if rest.len() < len {
        return Err(EditionError::InvalidInstruction.into());
    }
    let (bytes, rest) = rest.split_at(len);
    let value =
        String::from_utf8(bytes.to_vec()).map_err(|_| EditionError::InvalidInstruction)?;
    Ok((value, rest))
}

fn unpack_creators(input: &[u8]) -> Result<(Vec<Creator>, &[u8]), ProgramError> {
    let (count, mut rest) = unpack_u8(input)?;
    let mut creators = Vec::with_capacity(count as usize);

    for _ in 0..count {
        if rest.len() < MAX_CREATOR_LEN {
            return Err(EditionError::InvalidInstruction.into());
        }
        let (address, after) = unpack_pubkey(rest)?;
        let (verified, after) = unpack_bool(after)?;
        let (share, after) = unpack_u8(after)?;
        creators.push(Creator {
            address,
            verified,
            share,
        });
        rest = after;
    }

    Ok((creators, rest))
}

fn unpack_data(input: &[u8]) -> Result<(Data, &[u8]), ProgramError> {
    let (name, rest) = unpack_string(input)?;
    let (symbol, rest) = unpack_string(rest)?;
    let (uri, rest) = unpack_string(rest)?;
    let (seller_fee_basis_points, rest) = unpack_u16(rest)?;
    let (creators, rest) = unpack_creators(rest)?;

    Ok((
        Data {
            name,
            symbol,
            uri,
            seller_fee_basis_points,
            creators,
        },
        rest,
    ))
}

// =============================================================================
// FIELD ENCODERS
// =============================================================================

fn pack_string(value: &str, buf: &mut Vec<u8>) {
    buf.extend_from_slice(&(value.len() as u32).to_le_bytes());
    buf.extend_from_slice(value.as_bytes());
}

fn pack_data(data: &Data, buf: &mut Vec<u8>) {
    pack_string(&data.name, buf);
    pack_string(&data.symbol, buf);
    pack_string(&data.uri, buf);
    buf.extend_from_slice(&data.seller_fee_basis_points.to_le_bytes());
    buf.push(data.creators.len() as u8);
    for creator in &data.creators {
        buf.extend_from_slice(creator.address.as_ref());
        buf.push(creator.verified as u8);
        buf.push(creator.share);
    }
}

// =============================================================================
// INSTRUCTION BUILDERS
// =============================================================================

pub fn create_mint(program_id: &Pubkey, mint: &Pubkey, payer: &Pubkey) -> Instruction {
    Instruction {
        program_id: *program_id,
        accounts: vec![
            AccountMeta::new(*mint, true),
            AccountMeta::new(*payer, true),
            AccountMeta::new_readonly(system_program::id(), false),
        ],
        data: EditionInstruction::CreateMint.pack(),
    }
}

pub fn initialize_mint(program_id: &Pubkey, mint: &Pubkey, mint_authority: &Pubkey) -> Instruction {
    Instruction {
        program_id: *program_id,
        accounts: vec![
            AccountMeta::new(*mint, false),
            AccountMeta::new_readonly(*mint_authority, true),
        ],
        data: EditionInstruction::InitializeMint { decimals: 0 }.pack(),
    }
}

pub fn create_token_account(
    program_id: &Pubkey,
    payer: &Pubkey,
    owner: &Pubkey,
    mint: &Pubkey,
) -> Result<Instruction, ProgramError> {
    let (token_account, _) = find_token_account_address(program_id, owner, mint)?;

    Ok(Instruction {
        program_id: *program_id,
        accounts: vec![
            AccountMeta::new(token_account, false),
            AccountMeta::new_readonly(*owner, false),
            AccountMeta::new_readonly(*mint, false),
            AccountMeta::new(*payer, true),
            AccountMeta::new_readonly(system_program::id(), false),
        ],
        data: EditionInstruction::CreateTokenAccount.pack(),
    })
}

pub fn mint_to(
    program_id: &Pubkey,
    mint: &Pubkey,
    destination: &Pubkey,
    mint_authority: &Pubkey,
    amount: u64,
) -> Instruction {
    Instruction {
        program_id: *program_id,
        accounts: vec![
            AccountMeta::new(*mint, false),
            AccountMeta::new(*destination, false),
            AccountMeta::new_readonly(*mint_authority, true),
        ],
        data: EditionInstruction::MintTo { amount }.pack(),
    }
}

/// `update_authority_signs` must be true for any creator marked verified.
pub fn create_metadata(
    program_id: &Pubkey,
    mint: &Pubkey,
    mint_authority: &Pubkey,
    payer: &Pubkey,
    update_authority: &Pubkey,
    update_authority_signs: bool,
    data: Data,
) -> Result<Instruction, ProgramError> {
    let (metadata, _) = find_metadata_address(program_id, mint)?;

    Ok(Instruction {
        program_id: *program_id,
        accounts: vec![
            AccountMeta::new(metadata, false),
            AccountMeta::new_readonly(*mint, false),
            AccountMeta::new_readonly(*mint_authority, true),
            AccountMeta::new(*payer, true),
            AccountMeta::new_readonly(*update_authority, update_authority_signs),
            AccountMeta::new_readonly(system_program::id(), false),
        ],
        data: EditionInstruction::CreateMetadata { data }.pack(),
    })
}

pub fn update_metadata(
    program_id: &Pubkey,
    mint: &Pubkey,
    update_authority: &Pubkey,
    data: Option<Data>,
    new_update_authority: Option<Pubkey>,
    is_mutable: Option<bool>,
) -> Result<Instruction, ProgramError> {
    let (metadata, _) = find_metadata_address(program_id, mint)?;

    Ok(Instruction {
        program_id: *program_id,
        accounts: vec![
            AccountMeta::new(metadata, false),
            AccountMeta::new_readonly(*update_authority, true),
        ],
        data: EditionInstruction::UpdateMetadata {
            data,
            new_update_authority,
            is_mutable,
        }
        .pack(),
    })
}

pub fn create_master_edition(
    program_id: &Pubkey,
    mint: &Pubkey,
    update_authority: &Pubkey,
    mint_authority: &Pubkey,
    payer: &Pubkey,
    max_supply: Option<u64>,
    burn_policy: MasterBurnPolicy,
) -> Result<Instruction, ProgramError> {
    let (edition, _) = find_edition_address(program_id, mint)?;
    let (metadata, _) = find_metadata_address(program_id, mint)?;

    Ok(Instruction {
        program_id: *program_id,
        accounts: vec![
            AccountMeta::new(edition, false),
            AccountMeta::new(*mint, false),
            AccountMeta::new_readonly(*update_authority, true),
            AccountMeta::new_readonly(*mint_authority, true),
            AccountMeta::new(*payer, true),
            AccountMeta::new(metadata, false),
            AccountMeta::new_readonly(system_program::id(), false),
        ],
        data: EditionInstruction::CreateMasterEdition {
            max_supply,
            burn_policy,
        }
        .pack(),
    })
}

/// Keys a caller supplies to issue a print; every record address is
/// derived from them.
#[derive(Clone, Copy, Debug)]
pub struct PrintEditionKeys {
    pub master_mint: Pubkey,
    pub master_token_owner: Pubkey,
    pub print_mint: Pubkey,
    pub print_mint_authority: Pubkey,
    pub print_owner: Pubkey,
    pub payer: Pubkey,
}

pub fn create_print_edition(
    program_id: &Pubkey,
    keys: &PrintEditionKeys,
    edition: u64,
) -> Result<Instruction, ProgramError> {
    let (print_metadata, _) = find_metadata_address(program_id, &keys.print_mint)?;
    let (print_edition, _) = find_edition_address(program_id, &keys.print_mint)?;
    let (master_edition, _) = find_edition_address(program_id, &keys.master_mint)?;
    let (edition_marker, _) =
        find_edition_marker_address(program_id, &keys.master_mint, edition)?;
    let (master_token_account, _) =
        find_token_account_address(program_id, &keys.master_token_owner, &keys.master_mint)?;
    let (master_metadata, _) = find_metadata_address(program_id, &keys.master_mint)?;
    let (print_token_account, _) =
        find_token_account_address(program_id, &keys.print_owner, &keys.print_mint)?;

    Ok(Instruction {
        program_id: *program_id,
        accounts: vec![
            AccountMeta::new(print_metadata, false),
            AccountMeta::new(print_edition, false),
            AccountMeta::new(master_edition, false),
            AccountMeta::new(keys.print_mint, false),
            AccountMeta::new(edition_marker, false),
            AccountMeta::new_readonly(keys.print_mint_authority, true),
            AccountMeta::new(keys.payer, true),
            AccountMeta::new_readonly(keys.master_token_owner, true),
            AccountMeta::new_readonly(master_token_account, false),
            AccountMeta::new_readonly(master_metadata, false),
            AccountMeta::new_readonly(keys.master_mint, false),
            AccountMeta::new_readonly(print_token_account, false),
            AccountMeta::new_readonly(keys.print_owner, false),
            AccountMeta::new_readonly(system_program::id(), false),
        ],
        data: EditionInstruction::CreatePrintEdition { edition }.pack(),
    })
}

pub fn delegate(
    program_id: &Pubkey,
    source: &Pubkey,
    owner: &Pubkey,
    amount: u64,
) -> Result<Instruction, ProgramError> {
    let (delegate_record, _) = find_delegate_address(program_id, owner)?;

    Ok(Instruction {
        program_id: *program_id,
        accounts: vec![
            AccountMeta::new(*source, false),
            AccountMeta::new(delegate_record, false),
            AccountMeta::new(*owner, true),
            AccountMeta::new_readonly(system_program::id(), false),
        ],
        data: EditionInstruction::Delegate { amount }.pack(),
    })
}

/// `bump` is carried in the data and checked against the record address;
/// pass the one returned by `find_delegate_address`.
pub fn transfer_via_delegate(
    program_id: &Pubkey,
    source: &Pubkey,
    destination: &Pubkey,
    owner: &Pubkey,
    amount: u64,
    bump: u8,
) -> Result<Instruction, ProgramError> {
    let (delegate_record, _) = find_delegate_address(program_id, owner)?;

    Ok(Instruction {
        program_id: *program_id,
        accounts: vec![
            AccountMeta::new(*source, false),
            AccountMeta::new(*destination, false),
            AccountMeta::new(delegate_record, false),
            AccountMeta::new(*owner, false),
        ],
        data: EditionInstruction::TransferViaDelegate { amount, bump }.pack(),
    })
}

pub fn revoke(
    program_id: &Pubkey,
    source: &Pubkey,
    owner: &Pubkey,
) -> Result<Instruction, ProgramError> {
    let (delegate_record, _) = find_delegate_address(program_id, owner)?;

    Ok(Instruction {
        program_id: *program_id,
        accounts: vec![
            AccountMeta::new(*source, false),
            AccountMeta::new(delegate_record, false),
            AccountMeta::new(*owner, true),
        ],
        data: EditionInstruction::Revoke.pack(),
    })
}

pub fn burn_print(
    program_id: &Pubkey,
    owner: &Pubkey,
    print_mint: &Pubkey,
    master_mint: &Pubkey,
    master_token_account: &Pubkey,
    edition: u64,
) -> Result<Instruction, ProgramError> {
    let (print_metadata, _) = find_metadata_address(program_id, print_mint)?;
    let (print_token_account, _) = find_token_account_address(program_id, owner, print_mint)?;
    let (master_edition, _) = find_edition_address(program_id, master_mint)?;
    let (print_edition, _) = find_edition_address(program_id, print_mint)?;
    let (edition_marker, _) = find_edition_marker_address(program_id, master_mint, edition)?;

    Ok(Instruction {
        program_id: *program_id,
        accounts: vec![
            AccountMeta::new(print_metadata, false),
            AccountMeta::new(*owner, true),
            AccountMeta::new(*print_mint, false),
            AccountMeta::new(print_token_account, false),
            AccountMeta::new_readonly(*master_mint, false),
            AccountMeta::new_readonly(*master_token_account, false),
            AccountMeta::new(master_edition, false),
            AccountMeta::new(print_edition, false),
            AccountMeta::new_readonly(edition_marker, false),
        ],
        data: EditionInstruction::BurnPrint.pack(),
    })
}

pub fn burn_master(
    program_id: &Pubkey,
    owner: &Pubkey,
    master_mint: &Pubkey,
) -> Result<Instruction, ProgramError> {
    let (master_metadata, _) = find_metadata_address(program_id, master_mint)?;
    let (master_token_account, _) = find_token_account_address(program_id, owner, master_mint)?;
    let (master_edition, _) = find_edition_address(program_id, master_mint)?;

    Ok(Instruction {
        program_id: *program_id,
        accounts: vec![
            AccountMeta::new(master_metadata, false),
            AccountMeta::new(*owner, true),
            AccountMeta::new(*master_mint, false),
            AccountMeta::new(master_token_account, false),
            AccountMeta::new(master_edition, false),
        ],
        data: EditionInstruction::BurnMaster.pack(),
    })
}

// =============================================================================
// UNIT TESTS
// =============================================================================
