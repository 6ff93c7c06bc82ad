//! Account State Structures
//!
//! Fixed-size records stored in accounts owned by the edition program.
//!
//! # Record Types
//!
//! | Type | Size | Address |
//! |------|------|---------|
//! | Mint | 46 bytes | caller-chosen keypair |
//! | TokenAccount | 109 bytes | `[owner, program, mint]` |
//! | Metadata | 494 bytes | `["metadata", program, mint]` |
//! | MasterEdition | 62 bytes | `["metadata", program, mint, "edition"]` |
//! | Edition | 41 bytes | `["metadata", program, print_mint, "edition"]` |
//! | EditionMarker | 32 bytes | `["metadata", program, master_mint, "edition", n]` |
//! | Delegation | 74 bytes | `["delegate_nft", owner]` |
//!
//! # Serialization
//!
//! - First byte is always the [`AccountKey`] discriminator
//! - Little-endian integers, no padding between fields
//! - Strings and lists are length-prefixed and zero-padded to their maximum
//!
//! ```ignore
//! let mint: Mint = load_record(program_id, mint_info)?;  // Read + validate
//! store_record(&mint, mint_info)?;                      // Write
//! ```

pub mod account;
pub mod delegation;
pub mod edition;
pub mod metadata;
pub mod mint;

pub use account::TokenAccount;
pub use delegation::Delegation;
pub use edition::{Edition, EditionMarker, MasterBurnPolicy, MasterEdition};
pub use metadata::{Creator, Data, EditionKind, Metadata};
pub use mint::Mint;

use crate::error::EditionError;
use crate::utils::{assert_data_length, assert_owned_by};
use arrayref::{array_refs, mut_array_refs};
use solana_program::{
    account_info::AccountInfo, entrypoint::ProgramResult, program_error::ProgramError,
    pubkey::Pubkey,
};

// =============================================================================
// PACK TRAIT
// =============================================================================

/// Trait for packing/unpacking account state to/from bytes.
///
/// Every record has one fixed size so accounts can be allocated rent-exempt
/// up front and never resized.
pub trait Pack: Sized {
    /// The fixed size in bytes when serialized.
    const LEN: usize;

    /// Deserialize from a byte slice of at least `LEN` bytes.
    fn unpack(input: &[u8]) -> Result<Self, ProgramError>;

    /// Serialize into a byte slice of at least `LEN` bytes.
    fn pack(&self, output: &mut [u8]) -> Result<(), ProgramError>;

    /// Unpack with length validation.
    fn unpack_from_slice(src: &[u8]) -> Result<Self, ProgramError> {
        if src.len() != Self::LEN {
            return Err(ProgramError::InvalidAccountData);
        }
        Self::unpack(src)
    }

    /// Pack with length validation.
    fn pack_into_slice(&self, dst: &mut [u8]) -> Result<(), ProgramError> {
        if dst.len() != Self::LEN {
            return Err(ProgramError::InvalidAccountData);
        }
        self.pack(dst)
    }
}

// =============================================================================
// ACCOUNT KEY (DISCRIMINATOR)
// =============================================================================

/// First byte of every record.
///
/// A freshly allocated account is all zeros, so `Uninitialized` doubles as
/// the "created but not yet initialized" state of a mint.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AccountKey {
    #[default]
    Uninitialized,
    Mint,
    TokenAccount,
    Metadata,
    MasterEdition,
    Edition,
    EditionMarker,
    Delegation,
}

impl AccountKey {
    pub fn from_u8(value: u8) -> Result<Self, ProgramError> {
        match value {
            0 => Ok(AccountKey::Uninitialized),
            1 => Ok(AccountKey::Mint),
            2 => Ok(AccountKey::TokenAccount),
            3 => Ok(AccountKey::Metadata),
            4 => Ok(AccountKey::MasterEdition),
            5 => Ok(AccountKey::Edition),
            6 => Ok(AccountKey::EditionMarker),
            7 => Ok(AccountKey::Delegation),
            _ => Err(EditionError::DataTypeMismatch.into()),
        }
    }

    pub fn to_u8(self) -> u8 {
        self as u8
    }
}

/// A packable record tagged with its discriminator.
pub trait Record: Pack {
    const KEY: AccountKey;
}

/// Read the discriminator of raw account data. Empty data counts as
/// uninitialized.
pub fn record_key(data: &[u8]) -> Result<AccountKey, ProgramError> {
    match data.first() {
        Some(byte) => AccountKey::from_u8(*byte),
        None => Ok(AccountKey::Uninitialized),
    }
}

/// Load a record after checking owner, size and discriminator.
pub fn load_record<T: Record>(program_id: &Pubkey, info: &AccountInfo) -> Result<T, ProgramError> {
    assert_owned_by(info, program_id)?;
    assert_data_length(info, T::LEN)?;

    let data = info.data.borrow();
    match record_key(&data)? {
        key if key == T::KEY => T::unpack_from_slice(&data),
        AccountKey::Uninitialized => Err(EditionError::UninitializedAccount.into()),
        _ => Err(EditionError::DataTypeMismatch.into()),
    }
}

/// Write a record back into its account.
pub fn store_record<T: Record>(record: &T, info: &AccountInfo) -> ProgramResult {
    record.pack_into_slice(&mut info.data.borrow_mut())
}

// =============================================================================
// COPTION - COMPACT OPTIONAL TYPE
// =============================================================================

/// A fixed-layout optional for on-chain storage.
///
/// ```text
/// COption<Pubkey>: [tag: u32 LE][value: 32 bytes]  = 36 bytes
/// COption<u64>:    [tag: u32 LE][value: 8 bytes]   = 12 bytes
/// Tag 0 = None (value bytes zeroed), Tag 1 = Some
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct COption<T> {
    value: Option<T>,
}

impl<T> COption<T> {
    pub fn some(value: T) -> Self {
        Self { value: Some(value) }
    }

    pub fn none() -> Self {
        Self { value: None }
    }

    pub fn is_some(&self) -> bool {
        self.value.is_some()
    }

    pub fn is_none(&self) -> bool {
        self.value.is_none()
    }

    pub fn as_ref(&self) -> Option<&T> {
        self.value.as_ref()
    }
}

impl<T> From<Option<T>> for COption<T> {
    fn from(opt: Option<T>) -> Self {
        Self { value: opt }
    }
}

impl<T> From<COption<T>> for Option<T> {
    fn from(copt: COption<T>) -> Self {
        copt.value
    }
}

// =============================================================================
// COPTION PACKING HELPERS
// =============================================================================

pub(crate) fn unpack_coption_pubkey(src: &[u8; 36]) -> Result<COption<Pubkey>, ProgramError> {
    let (tag, body) = array_refs![src, 4, 32];

    match u32::from_le_bytes(*tag) {
        0 => Ok(COption::none()),
        1 => Ok(COption::some(Pubkey::new_from_array(*body))),
        _ => Err(ProgramError::InvalidAccountData),
    }
}

pub(crate) fn pack_coption_pubkey(src: &COption<Pubkey>, dst: &mut [u8; 36]) {
    let (tag, body) = mut_array_refs![dst, 4, 32];

    match src.as_ref() {
        Some(pubkey) => {
            *tag = 1u32.to_le_bytes();
            body.copy_from_slice(pubkey.as_ref());
        }
        None => {
            *tag = 0u32.to_le_bytes();
            body.fill(0);
        }
    }
}

pub(crate) fn unpack_coption_u64(src: &[u8; 12]) -> Result<COption<u64>, ProgramError> {
    let (tag, body) = array_refs![src, 4, 8];

    match u32::from_le_bytes(*tag) {
        0 => Ok(COption::none()),
        1 => Ok(COption::some(u64::from_le_bytes(*body))),
        _ => Err(ProgramError::InvalidAccountData),
    }
}

pub(crate) fn pack_coption_u64(src: &COption<u64>, dst: &mut [u8; 12]) {
    let (tag, body) = mut_array_refs![dst, 4, 8];

    match src.as_ref() {
        Some(value) => {
            *tag = 1u32.to_le_bytes();
            *body = value.to_le_bytes();
        }
        None => {
            *tag = 0u32.to_le_bytes();
            body.fill(0);
        }
    }
}

// =============================================================================
// UNIT TESTS
// =============================================================================
