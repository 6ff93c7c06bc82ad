//! Assertion Helper Functions
//!
//! Common validation checks used across all processors.
//!
//! # Usage Pattern
//!
//! ```ignore
//! pub fn process(...) -> ProgramResult {
//!     // Validate everything first
//!     assert_signer(authority)?;
//!     assert_writable(account)?;
//!     let mint: Mint = load_record(program_id, mint_info)?;
//!
//!     // Then do the actual work
//!     ...
//! }
//! ```

use crate::error::EditionError;
use num_traits::{CheckedAdd, CheckedSub};
use solana_program::{
    account_info::AccountInfo, entrypoint::ProgramResult, program_error::ProgramError,
    pubkey::Pubkey, system_program,
};

// =============================================================================
// OWNERSHIP CHECKS
// =============================================================================

/// Assert that an account is owned by the expected program.
///
/// # Errors
///
/// Returns `InvalidAccountOwner` if the owner doesn't match.
pub fn assert_owned_by(account: &AccountInfo, owner: &Pubkey) -> ProgramResult {
    if account.owner != owner {
        Err(EditionError::InvalidAccountOwner.into())
    } else {
        Ok(())
    }
}

// =============================================================================
// SIGNER / WRITABLE CHECKS
// =============================================================================

/// Assert that an account is a signer of the transaction.
///
/// Missing signatures use the runtime's own error so clients see the
/// familiar `MissingRequiredSignature`.
pub fn assert_signer(account: &AccountInfo) -> ProgramResult {
    if !account.is_signer {
        Err(ProgramError::MissingRequiredSignature)
    } else {
        Ok(())
    }
}

pub fn assert_writable(account: &AccountInfo) -> ProgramResult {
    if !account.is_writable {
        Err(ProgramError::InvalidAccountData)
    } else {
        Ok(())
    }
}

// =============================================================================
// IDENTITY CHECKS
// =============================================================================

/// Assert that an account is the one a record points at.
///
/// ```ignore
/// assert_key(master_mint_info, &master_edition.mint, EditionError::MintMismatch)?;
/// ```
pub fn assert_key(account: &AccountInfo, expected: &Pubkey, error: EditionError) -> ProgramResult {
    if account.key != expected {
        Err(error.into())
    } else {
        Ok(())
    }
}

/// Assert that no record lives at this address yet.
///
/// Lamports alone do not count: anyone can send lamports to an address
/// before its record is created, and the allocation tops them up instead.
///
/// # Errors
///
/// Returns `AccountAlreadyExists` if the account holds data, is already
/// owned by `program_id`, or is funded but owned by a program other than
/// the system program.
pub fn assert_uninitialized(account: &AccountInfo, program_id: &Pubkey) -> ProgramResult {
    let foreign_funded = account.lamports() > 0 && !system_program::check_id(account.owner);
    if !account.data_is_empty() || account.owner == program_id || foreign_funded {
        Err(EditionError::AccountAlreadyExists.into())
    } else {
        Ok(())
    }
}

// =============================================================================
// SIZE CHECKS
// =============================================================================

/// Assert that an account has the expected data length.
///
/// # Errors
///
/// Returns `InvalidAccountDataLength` if length doesn't match.
pub fn assert_data_length(account: &AccountInfo, expected: usize) -> ProgramResult {
    if account.data_len() != expected {
        Err(EditionError::InvalidAccountDataLength.into())
    } else {
        Ok(())
    }
}

// =============================================================================
// CHECKED ARITHMETIC
// =============================================================================

/// Checked addition that returns `Overflow` instead of wrapping.
///
/// ```ignore
/// mint.supply = checked_add(mint.supply, amount)?;
/// ```
pub fn checked_add<T: CheckedAdd>(a: T, b: T) -> Result<T, ProgramError> {
    a.checked_add(&b)
        .ok_or_else(|| EditionError::Overflow.into())
}

/// Checked subtraction that returns `InsufficientFunds` instead of wrapping.
///
/// ```ignore
/// source.amount = checked_sub(source.amount, amount)?;
/// ```
pub fn checked_sub<T: CheckedSub>(a: T, b: T) -> Result<T, ProgramError> {
    a.checked_sub(&b)
        .ok_or_else(|| EditionError::InsufficientFunds.into())
}

// =============================================================================
// UNIT TESTS
// =============================================================================
