//! Metadata Record State
//!
//! The descriptor attached to a mint: name, symbol, URI, royalty and the
//! creator split. One record per mint at `["metadata", program_id, mint]`.
//!
//! Strings and the creator list are stored at their maximum width so the
//! record never changes size after creation.
//!
//! # Size: 494 bytes

use crate::constants::{
    CREATOR_SHARE_TOTAL, MAX_CREATOR_LEN, MAX_CREATOR_LIMIT, MAX_NAME_LENGTH,
    MAX_SELLER_FEE_BASIS_POINTS, MAX_SYMBOL_LENGTH, MAX_URI_LENGTH,
};
use crate::error::EditionError;
use crate::state::{AccountKey, Pack, Record};
use arrayref::{array_mut_ref, array_ref, array_refs, mut_array_refs};
use solana_program::{entrypoint::ProgramResult, program_error::ProgramError, pubkey::Pubkey};

/// Bytes reserved for each string: u32 length prefix plus the maximum body.
const NAME_FIELD: usize = 4 + MAX_NAME_LENGTH;
const SYMBOL_FIELD: usize = 4 + MAX_SYMBOL_LENGTH;
const URI_FIELD: usize = 4 + MAX_URI_LENGTH;
const CREATORS_FIELD: usize = 1 + MAX_CREATOR_LIMIT * MAX_CREATOR_LEN;

// =============================================================================
// EDITION KIND
// =============================================================================

/// Which edition role, if any, the mint behind this record plays.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum EditionKind {
    /// No edition record exists yet.
    #[default]
    Standalone,
    /// A master edition was created for this mint.
    Master,
    /// This mint is a numbered print of a master.
    Print,
}

impl EditionKind {
    pub fn from_u8(value: u8) -> Result<Self, ProgramError> {
        match value {
            0 => Ok(EditionKind::Standalone),
            1 => Ok(EditionKind::Master),
            2 => Ok(EditionKind::Print),
            _ => Err(ProgramError::InvalidAccountData),
        }
    }
}

// =============================================================================
// CREATOR
// =============================================================================

/// One entry of the royalty split.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Creator {
    pub address: Pubkey,
    /// Set only when the creator signed for this record.
    pub verified: bool,
    /// Whole-percent share of royalties.
    pub share: u8,
}

impl Creator {
    pub const LEN: usize = MAX_CREATOR_LEN;

    pub fn unpack(src: &[u8; MAX_CREATOR_LEN]) -> Self {
        let (address, verified, share) = array_refs![src, 32, 1, 1];
        Creator {
            address: Pubkey::new_from_array(*address),
            verified: verified[0] != 0,
            share: share[0],
        }
    }

    pub fn pack(&self, dst: &mut [u8; MAX_CREATOR_LEN]) {
        let (address, verified, share) = mut_array_refs![dst, 32, 1, 1];
        address.copy_from_slice(self.address.as_ref());
        verified[0] = self.verified as u8;
        share[0] = self.share;
    }
}

// =============================================================================
// DATA (USER-SUPPLIED DESCRIPTOR)
// =============================================================================

/// The fields a caller supplies at creation and may later update.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Data {
    pub name: String,
    pub symbol: String,
    pub uri: String,
    /// Royalty in basis points (10 000 = 100%).
    pub seller_fee_basis_points: u16,
    pub creators: Vec<Creator>,
}

impl Data {
    /// Check lengths, fee range and the creator split.
    ///
    /// # Rules
    ///
    /// - name ≤ 32, symbol ≤ 10, uri ≤ 200 bytes
    /// - seller_fee_basis_points ≤ 10 000
    /// - at most 5 creators, no repeated address
    /// - when creators are present their shares sum to exactly 100
    pub fn validate(&self) -> ProgramResult {
        if self.name.len() > MAX_NAME_LENGTH {
            return Err(EditionError::NameTooLong.into());
        }
        if self.symbol.len() > MAX_SYMBOL_LENGTH {
            return Err(EditionError::SymbolTooLong.into());
        }
        if self.uri.len() > MAX_URI_LENGTH {
            return Err(EditionError::UriTooLong.into());
        }
        if self.seller_fee_basis_points > MAX_SELLER_FEE_BASIS_POINTS {
            return Err(EditionError::InvalidSellerFee.into());
        }
        if self.creators.len() > MAX_CREATOR_LIMIT {
            return Err(EditionError::TooManyCreators.into());
        }

        if self.creators.is_empty() {
            return Ok(());
        }

        for (i, creator) in self.creators.iter().enumerate() {
            if self.creators[..i]
                .iter()
                .any(|earlier| earlier.address == creator.address)
            {
                return Err(EditionError::DuplicateCreatorAddress.into());
            }
        }

        let total: u16 = self.creators.iter().map(|c| u16::from(c.share)).sum();
        if total != CREATOR_SHARE_TOTAL {
            return Err(EditionError::InvalidCreatorShares.into());
        }

        Ok(())
    }

    /// Check every `verified` flag is backed by a signature.
    ///
    /// A creator may be flagged verified when it is the signing update
    /// authority, or when `existing` already holds it verified at the same
    /// address.
    pub fn assert_verified_creators(
        &self,
        signing_authority: Option<&Pubkey>,
        existing: &[Creator],
    ) -> ProgramResult {
        for creator in self.creators.iter().filter(|c| c.verified) {
            let signed = signing_authority == Some(&creator.address);
            let already = existing
                .iter()
                .any(|old| old.verified && old.address == creator.address);

            if !signed && !already {
                return Err(EditionError::CreatorNotVerifiable.into());
            }
        }
        Ok(())
    }
}

// =============================================================================
// METADATA STRUCTURE
// =============================================================================

/// Metadata record.
///
/// # Memory Layout (494 bytes total)
///
/// ```text
/// ┌─────────────────────────────────────────────────────────────────┐
/// │ Offset │ Size │ Field                   │ Type                 │
/// ├────────┼──────┼─────────────────────────┼──────────────────────┤
/// │ 0      │ 1    │ key                     │ AccountKey::Metadata │
/// │ 1      │ 32   │ update_authority        │ Pubkey               │
/// │ 33     │ 32   │ mint                    │ Pubkey               │
/// │ 65     │ 36   │ name                    │ u32 len + 32         │
/// │ 101    │ 14   │ symbol                  │ u32 len + 10         │
/// │ 115    │ 204  │ uri                     │ u32 len + 200        │
/// │ 319    │ 2    │ seller_fee_basis_points │ u16                  │
/// │ 321    │ 171  │ creators                │ u8 count + 5 × 34    │
/// │ 492    │ 1    │ is_mutable              │ bool                 │
/// │ 493    │ 1    │ edition_kind            │ EditionKind          │
/// └─────────────────────────────────────────────────────────────────┘
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Metadata {
    /// Who may update this record and create its master edition.
    pub update_authority: Pubkey,
    pub mint: Pubkey,
    pub data: Data,
    /// Once false, never true again.
    pub is_mutable: bool,
    pub edition_kind: EditionKind,
}

impl Pack for Metadata {
    const LEN: usize = 1 + 32 + 32 + NAME_FIELD + SYMBOL_FIELD + URI_FIELD + 2 + CREATORS_FIELD + 1 + 1;

    fn unpack(input: &[u8]) -> Result<Self, ProgramError> {
        let input = array_ref![input, 0, Metadata::LEN];

        #[allow(clippy::ptr_offset_with_cast)]
        let (
            _key,
            update_authority,
            mint,
            name,
            symbol,
            uri,
            seller_fee_basis_points,
            creators,
            is_mutable,
            edition_kind,
        ) = array_refs![
            input,
            1,
            32,
            32,
            NAME_FIELD,
            SYMBOL_FIELD,
            URI_FIELD,
            2,
            CREATORS_FIELD,
            1,
            1
        ];

        Ok(Metadata {
            update_authority: Pubkey::new_from_array(*update_authority),
            mint: Pubkey::new_from_array(*mint),
            data: Data {
                name: unpack_string(name)?,
                symbol: unpack_string(symbol)?,
                uri: unpack_string(uri)?,
                seller_fee_basis_points: u16::from_le_bytes(*seller_fee_basis_points),
                creators: unpack_creators(creators)?,
            },
            is_mutable: is_mutable[0] != 0,
            edition_kind: EditionKind::from_u8(edition_kind[0])?,
        })
    }

    fn pack(&self, output: &mut [u8]) -> Result<(), ProgramError> {
        let output = array_mut_ref![output, 0, Metadata::LEN];

        #[allow(clippy::ptr_offset_with_cast)]
        let (
            key_dst,
            update_authority_dst,
            mint_dst,
            name_dst,
            symbol_dst,
            uri_dst,
            fee_dst,
            creators_dst,
            is_mutable_dst,
            edition_kind_dst,
        ) = mut_array_refs![
            output,
            1,
            32,
            32,
            NAME_FIELD,
            SYMBOL_FIELD,
            URI_FIELD,
            2,
            CREATORS_FIELD,
            1,
            1
        ];

        key_dst[0] = Self::KEY.to_u8();
        update_authority_dst.copy_from_slice(self.update_authority.as_ref());
        mint_dst.copy_from_slice(self.mint.as_ref());
        pack_string(&self.data.name, name_dst)?;
        pack_string(&self.data.symbol, symbol_dst)?;
        pack_string(&self.data.uri, uri_dst)?;
        *fee_dst = self.data.seller_fee_basis_points.to_le_bytes();
        pack_creators(&self.data.creators, creators_dst)?;
        is_mutable_dst[0] = self.is_mutable as u8;
        edition_kind_dst[0] = self.edition_kind as u8;

        Ok(())
    }
}

impl Record for Metadata {
    const KEY: AccountKey = AccountKey::Metadata;
}

// =============================================================================
// FIELD HELPERS
// =============================================================================

fn unpack_string(src: &[u8]) -> Result<String, ProgramError> {
    let (len, body) = src.split_at(4);
    let len = u32::from_le_bytes([len[0], len[1], len[2], len[3]]) as usize;
    let bytes = body.get(..len).ok_or(ProgramError::InvalidAccountData)?;

    String::from_utf8(bytes.to_vec()).map_err(|_| ProgramError::InvalidAccountData)
}

fn pack_string(value: &str, dst: &mut [u8]) -> Result<(), ProgramError> {
    let (len, body) = dst.split_at_mut(4);
    if value.len() > body.len() {
        return Err(ProgramError::InvalidAccountData);
    }

    len.copy_from_slice(&(value.len() as u32).to_le_bytes());
    body[..value.len()].copy_from_slice(value.as_bytes());
    body[value.len()..].fill(0);
    Ok(())
}

fn unpack_creators(src: &[u8; CREATORS_FIELD]) -> Result<Vec<Creator>, ProgramError> {
    let count = src[0] as usize;
    if count > MAX_CREATOR_LIMIT {
        return Err(ProgramError::InvalidAccountData);
    }

    Ok(src[1..]
        .chunks_exact(MAX_CREATOR_LEN)
        .take(count)
        .map(|chunk| Creator::unpack(array_ref![chunk, 0, MAX_CREATOR_LEN]))
        .collect())
}

fn pack_creators(creators: &[Creator], dst: &mut [u8; CREATORS_FIELD]) -> Result<(), ProgramError> {
    if creators.len() > MAX_CREATOR_LIMIT {
        return Err(ProgramError::InvalidAccountData);
    }

    dst.fill(0);
    dst[0] = creators.len() as u8;
    for (creator, chunk) in creators.iter().zip(dst[1..].chunks_exact_mut(MAX_CREATOR_LEN)) {
        creator.pack(array_mut_ref![chunk, 0, MAX_CREATOR_LEN]);
    }
    Ok(())
}

// =============================================================================
// UNIT TESTS
// =============================================================================
