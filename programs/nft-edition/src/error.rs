//! Custom Error Types
//!
//! Every failure the edition program can return. Each variant maps to a
//! stable numeric code (`ProgramError::Custom(code)`) and to one of the
//! protocol's error kinds.
//!
//! # Error Code Ranges
//!
//! | Range | Category |
//! |-------|----------|
//! | 0-9 | Account validation |
//! | 10-17 | Authority and delegation |
//! | 18-27 | Capacity and limits |
//! | 28-36 | Edition and lineage preconditions |
//! | 37 | Double issuance |
//! | 38 | Address derivation |
//! | 39 | Delegation binding |
//!
//! # Usage
//!
//! ```ignore
//! use crate::error::EditionError;
//!
//! if master.supply >= max {
//!     return Err(EditionError::EditionsExhausted.into());
//! }
//! ```

use num_traits::FromPrimitive;
use solana_program::program_error::ProgramError;
use thiserror::Error;

// =============================================================================
// ERROR KIND
// =============================================================================

/// Coarse classification of every [`EditionError`].
///
/// Clients branch on the kind rather than on individual codes when they
/// only need to know whether a retry, a different signer, or a different
/// account set could help.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// A required prior record is missing or belongs to a different mint.
    PreconditionViolation,
    /// The signer does not match the recorded authority or delegate.
    AuthorizationFailure,
    /// A count, length, share sum or balance would exceed its limit.
    CapacityExceeded,
    /// The record already exists, or the edition number is already marked.
    DuplicateState,
    /// No bump produced an off-curve address. Fatal, never retry.
    AddressDerivationFailure,
    /// Instruction data or arguments could not be interpreted.
    InvalidInput,
}

// =============================================================================
// ERROR ENUM
// =============================================================================

/// Errors that may be returned by the edition program.
///
/// After deployment, NEVER reorder these variants. Add new ones at the end.
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum EditionError {
    // =========================================================================
    // ACCOUNT VALIDATION ERRORS (0-9)
    // =========================================================================

    /// Error 0: Account is not owned by this program.
    #[error("Account not owned by the edition program")]
    InvalidAccountOwner,

    /// Error 1: Account data has the wrong length for its record type.
    #[error("Invalid account data length")]
    InvalidAccountDataLength,

    /// Error 2: Record was already initialized.
    #[error("Account already initialized")]
    AlreadyInitialized,

    /// Error 3: Record has not been initialized yet.
    #[error("Account not initialized")]
    UninitializedAccount,

    /// Error 4: Target address already holds an account.
    ///
    /// Returned by every create instruction. Idempotent client flows may
    /// treat it as success; the program never does.
    #[error("Account already exists")]
    AccountAlreadyExists,

    /// Error 5: Supplied account is not the expected derived address.
    #[error("Derived address mismatch")]
    DerivedAddressMismatch,

    /// Error 6: Account holds a different record type.
    #[error("Account data type mismatch")]
    DataTypeMismatch,

    /// Error 7: Instruction data could not be parsed.
    #[error("Invalid instruction")]
    InvalidInstruction,

    /// Error 8: Mints of this program only support zero decimals.
    #[error("Mint precision must be zero")]
    InvalidPrecision,

    /// Error 9: Token account or record belongs to a different mint.
    #[error("Mint mismatch")]
    MintMismatch,

    // =========================================================================
    // AUTHORITY ERRORS (10-17)
    // =========================================================================

    /// Error 10: Signer does not match the recorded authority.
    #[error("Invalid authority")]
    InvalidAuthority,

    /// Error 11: Token account owner does not match.
    #[error("Owner mismatch")]
    OwnerMismatch,

    /// Error 12: Mint authority has been revoked.
    ///
    /// Every `MintTo` against a master or print mint ends here.
    #[error("Mint authority required")]
    MintAuthorityRequired,

    /// Error 13: Signer is not the metadata update authority.
    #[error("Update authority mismatch")]
    UpdateAuthorityMismatch,

    /// Error 14: A creator was marked verified without signing.
    #[error("Creator cannot be marked verified")]
    CreatorNotVerifiable,

    /// Error 15: Metadata was made immutable.
    #[error("Metadata is immutable")]
    MetadataImmutable,

    /// Error 16: Bump does not re-derive the delegation record address.
    #[error("Invalid delegate bump")]
    InvalidDelegateBump,

    /// Error 17: No delegation covers this token account.
    #[error("No active delegation")]
    NoActiveDelegation,

    // =========================================================================
    // CAPACITY ERRORS (18-27)
    // =========================================================================

    /// Error 18: Name longer than `MAX_NAME_LENGTH`.
    #[error("Name too long")]
    NameTooLong,

    /// Error 19: Symbol longer than `MAX_SYMBOL_LENGTH`.
    #[error("Symbol too long")]
    SymbolTooLong,

    /// Error 20: URI longer than `MAX_URI_LENGTH`.
    #[error("URI too long")]
    UriTooLong,

    /// Error 21: Seller fee above 10000 basis points.
    #[error("Seller fee basis points out of range")]
    InvalidSellerFee,

    /// Error 22: More than `MAX_CREATOR_LIMIT` creators.
    #[error("Too many creators")]
    TooManyCreators,

    /// Error 23: Creator shares do not add up to 100.
    #[error("Creator shares must sum to 100")]
    InvalidCreatorShares,

    /// Error 24: Master edition has issued its maximum number of prints.
    #[error("Edition supply exhausted")]
    EditionsExhausted,

    /// Error 25: Delegated transfer exceeds the remaining ceiling.
    #[error("Delegated amount exceeded")]
    DelegatedAmountExceeded,

    /// Error 26: Balance too low.
    #[error("Insufficient funds")]
    InsufficientFunds,

    /// Error 27: Arithmetic overflow.
    #[error("Arithmetic overflow")]
    Overflow,

    // =========================================================================
    // EDITION PRECONDITIONS (28-36)
    // =========================================================================

    /// Error 28: Same creator address listed twice.
    #[error("Duplicate creator address")]
    DuplicateCreatorAddress,

    /// Error 29: Master edition requires exactly one minted unit.
    #[error("Mint supply must be exactly one")]
    MasterSupplyNotOne,

    /// Error 30: Print mint must hold exactly one unit in the print token account.
    #[error("Print mint must hold exactly one unit")]
    PrintMintNotSingleUnit,

    /// Error 31: Requested edition number is not the next in sequence.
    #[error("Edition number out of sequence")]
    EditionNumberOutOfSequence,

    /// Error 32: Metadata does not belong to a master edition.
    #[error("Not a master edition")]
    NotAMasterEdition,

    /// Error 33: Print edition points at a different master.
    #[error("Edition parent mismatch")]
    EditionParentMismatch,

    /// Error 34: Marker bit for this edition is not set.
    #[error("Edition not recorded in marker")]
    EditionNotMarked,

    /// Error 35: Master burn refused while prints are outstanding.
    #[error("Master edition has outstanding prints")]
    OutstandingPrints,

    /// Error 36: Source and destination are the same account.
    #[error("Self transfer not allowed")]
    SelfTransfer,

    // =========================================================================
    // DOUBLE ISSUANCE (37)
    // =========================================================================

    /// Error 37: Edition number already marked as issued.
    #[error("Edition already issued")]
    EditionAlreadyIssued,

    // =========================================================================
    // ADDRESS DERIVATION (38)
    // =========================================================================

    /// Error 38: No bump in 0..=255 yields an off-curve address.
    #[error("No valid bump found")]
    NoValidBump,

    // =========================================================================
    // DELEGATION (39)
    // =========================================================================

    /// Error 39: The owner's delegation record is bound to another source
    /// account. Revoke it there first.
    #[error("Delegation record in use by another source")]
    DelegationInUse,
}

impl EditionError {
    /// All variants in code order.
    const ALL: [EditionError; 40] = [
        EditionError::InvalidAccountOwner,
        EditionError::InvalidAccountDataLength,
        EditionError::AlreadyInitialized,
        EditionError::UninitializedAccount,
        EditionError::AccountAlreadyExists,
        EditionError::DerivedAddressMismatch,
        EditionError::DataTypeMismatch,
        EditionError::InvalidInstruction,
        EditionError::InvalidPrecision,
        EditionError::MintMismatch,
        EditionError::InvalidAuthority,
        EditionError::OwnerMismatch,
        EditionError::MintAuthorityRequired,
        EditionError::UpdateAuthorityMismatch,
        EditionError::CreatorNotVerifiable,
        EditionError::MetadataImmutable,
        EditionError::InvalidDelegateBump,
        EditionError::NoActiveDelegation,
        EditionError::NameTooLong,
        EditionError::SymbolTooLong,
        EditionError::UriTooLong,
        EditionError::InvalidSellerFee,
        EditionError::TooManyCreators,
        EditionError::InvalidCreatorShares,
        EditionError::EditionsExhausted,
        EditionError::DelegatedAmountExceeded,
        EditionError::InsufficientFunds,
        EditionError::Overflow,
        EditionError::DuplicateCreatorAddress,
        EditionError::MasterSupplyNotOne,
        EditionError::PrintMintNotSingleUnit,
        EditionError::EditionNumberOutOfSequence,
        EditionError::NotAMasterEdition,
        EditionError::EditionParentMismatch,
        EditionError::EditionNotMarked,
        EditionError::OutstandingPrints,
        EditionError::SelfTransfer,
        EditionError::EditionAlreadyIssued,
        EditionError::NoValidBump,
        EditionError::DelegationInUse,
    ];

    /// Classify this error.
    pub fn kind(&self) -> ErrorKind {
        use EditionError::*;
        match self {
            InvalidAccountOwner
            | InvalidAccountDataLength
            | UninitializedAccount
            | DerivedAddressMismatch
            | DataTypeMismatch
            | MintMismatch
            | MasterSupplyNotOne
            | PrintMintNotSingleUnit
            | EditionNumberOutOfSequence
            | NotAMasterEdition
            | EditionParentMismatch
            | EditionNotMarked
            | OutstandingPrints
            | DelegationInUse => ErrorKind::PreconditionViolation,

            InvalidAuthority
            | OwnerMismatch
            | MintAuthorityRequired
            | UpdateAuthorityMismatch
            | CreatorNotVerifiable
            | MetadataImmutable
            | InvalidDelegateBump
            | NoActiveDelegation => ErrorKind::AuthorizationFailure,

            NameTooLong
            | SymbolTooLong
            | UriTooLong
            | InvalidSellerFee
            | TooManyCreators
            | InvalidCreatorShares
            | EditionsExhausted
            | DelegatedAmountExceeded
            | InsufficientFunds
            | Overflow => ErrorKind::CapacityExceeded,

            AlreadyInitialized | AccountAlreadyExists | EditionAlreadyIssued => {
                ErrorKind::DuplicateState
            }

            NoValidBump => ErrorKind::AddressDerivationFailure,

            InvalidInstruction | InvalidPrecision | DuplicateCreatorAddress | SelfTransfer => {
                ErrorKind::InvalidInput
            }
        }
    }

    /// Decode a `ProgramError::Custom` code produced by this program.
    pub fn from_code(code: u32) -> Option<Self> {
        Self::from_u32(code)
    }
}

// =============================================================================
// CONVERSIONS
// =============================================================================

/// Convert EditionError to ProgramError so `?` works in processors.
///
/// The code is the variant's position: InvalidAccountOwner = 0, and so on.
impl From<EditionError> for ProgramError {
    fn from(e: EditionError) -> Self {
        ProgramError::Custom(e as u32)
    }
}

impl FromPrimitive for EditionError {
    fn from_i64(n: i64) -> Option<Self> {
        if n < 0 {
            return None;
        }
        Self::from_u64(n as u64)
    }

    fn from_u64(n: u64) -> Option<Self> {
        usize::try_from(n)
            .ok()
            .and_then(|index| Self::ALL.get(index).copied())
    }
}

// =============================================================================
// UNIT TESTS
// =============================================================================
