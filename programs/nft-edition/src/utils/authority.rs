//! Authority Validation Utilities
//!
//! Every privileged action names the authority it expects from stored state
//! and checks two things about the account supplied in the transaction:
//!
//! ```text
//! 1. authority_info.key == expected authority?   (else a role-specific error)
//! 2. authority_info.is_signer == true?           (else MissingRequiredSignature)
//! ```
//!
//! # Roles
//!
//! | Role | Stored in | Mismatch error |
//! |------|-----------|----------------|
//! | Mint authority | `Mint::mint_authority` | `InvalidAuthority` / `MintAuthorityRequired` when revoked |
//! | Token owner | `TokenAccount::owner` | `OwnerMismatch` |
//! | Update authority | `Metadata::update_authority` | `UpdateAuthorityMismatch` |

use crate::error::EditionError;
use crate::state::{Metadata, Mint, TokenAccount};
use solana_program::{
    account_info::AccountInfo, entrypoint::ProgramResult, program_error::ProgramError,
    pubkey::Pubkey,
};

// =============================================================================
// MAIN AUTHORITY VALIDATION
// =============================================================================

/// Validate that `authority_info` is `expected_authority` and signed.
///
/// `mismatch` is returned when a different account was supplied.
pub fn validate_authority(
    expected_authority: &Pubkey,
    authority_info: &AccountInfo,
    mismatch: EditionError,
) -> ProgramResult {
    if authority_info.key != expected_authority {
        return Err(mismatch.into());
    }

    if !authority_info.is_signer {
        return Err(ProgramError::MissingRequiredSignature);
    }

    Ok(())
}

// =============================================================================
// ROLE-SPECIFIC HELPERS
// =============================================================================

/// The mint must still have an authority, and it must have signed.
///
/// ```ignore
/// validate_mint_authority(&mint, authority_info)?;
/// mint.supply = checked_add(mint.supply, amount)?;
/// ```
pub fn validate_mint_authority(mint: &Mint, authority_info: &AccountInfo) -> ProgramResult {
    let authority = mint
        .mint_authority
        .as_ref()
        .ok_or(EditionError::MintAuthorityRequired)?;

    validate_authority(authority, authority_info, EditionError::InvalidAuthority)
}

pub fn validate_token_owner(account: &TokenAccount, owner_info: &AccountInfo) -> ProgramResult {
    validate_authority(&account.owner, owner_info, EditionError::OwnerMismatch)
}

pub fn validate_update_authority(
    metadata: &Metadata,
    authority_info: &AccountInfo,
) -> ProgramResult {
    validate_authority(
        &metadata.update_authority,
        authority_info,
        EditionError::UpdateAuthorityMismatch,
    )
}

// =============================================================================
// UNIT TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::COption;

    /// Helper to create a mock AccountInfo for testing
    fn create_test_account_info<'a>(
        key: &'a Pubkey,
        is_signer: bool,
        lamports: &'a mut u64,
        data: &'a mut [u8],
        owner: &'a Pubkey,
    ) -> AccountInfo<'a> {
        AccountInfo::new(key, is_signer, false, lamports, data, owner, false, 0)
    }

    #[test]
    fn test_single_signer_valid() {
        let key = Pubkey::new_unique();
        let owner = Pubkey::default();
        let mut lamports = 0u64;
        let mut data = [];
        let info = create_test_account_info(&key, true, &mut lamports, &mut data, &owner);

        assert!(validate_authority(&key, &info, EditionError::InvalidAuthority).is_ok());
    }

    #[test]
    fn test_single_signer_not_signed() {
        let key = Pubkey::new_unique();
        let owner = Pubkey::default();
        let mut lamports = 0u64;
        let mut data = [];
        let info = create_test_account_info(&key, false, &mut lamports, &mut data, &owner);

        assert_eq!(
            validate_authority(&key, &info, EditionError::InvalidAuthority),
            Err(ProgramError::MissingRequiredSignature)
        );
    }

    #[test]
    fn test_single_signer_wrong_key() {
        let key = Pubkey::new_unique();
        let owner = Pubkey::default();
        let mut lamports = 0u64;
        let mut data = [];
        let info = create_test_account_info(&key, true, &mut lamports, &mut data, &owner);

        assert_eq!(
            validate_authority(&Pubkey::new_unique(), &info, EditionError::OwnerMismatch),
            Err(EditionError::OwnerMismatch.into())
        );
    }

    #[test]
    fn test_revoked_mint_authority() {
        let key = Pubkey::new_unique();
        let owner = Pubkey::default();
        let mut lamports = 0u64;
        let mut data = [];
        let info = create_test_account_info(&key, true, &mut lamports, &mut data, &owner);

        let mint = Mint {
            mint_authority: COption::none(),
            supply: 1,
            decimals: 0,
        };

        assert_eq!(
            validate_mint_authority(&mint, &info),
            Err(EditionError::MintAuthorityRequired.into())
        );
    }

    #[test]
    fn test_update_authority_mismatch() {
        let key = Pubkey::new_unique();
        let owner = Pubkey::default();
        let mut lamports = 0u64;
        let mut data = [];
        let info = create_test_account_info(&key, true, &mut lamports, &mut data, &owner);

        let metadata = Metadata {
            update_authority: Pubkey::new_unique(),
            ..Metadata::default()
        };

        assert_eq!(
            validate_update_authority(&metadata, &info),
            Err(EditionError::UpdateAuthorityMismatch.into())
        );
    }
}
