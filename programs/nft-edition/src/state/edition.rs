//! Edition State
//!
//! Three records drive print issuance:
//!
//! - [`MasterEdition`]: the print counter and cap for a master mint
//! - [`Edition`]: the numbered record behind each print mint
//! - [`EditionMarker`]: a 248-bit ledger of which numbers were issued
//!
//! # Issuance Flow
//!
//! ```text
//! master.supply = c
//!        │
//!        ▼
//! next = c + 1 ──► > max_supply? ──► EditionsExhausted
//!        │
//!        ▼
//! marker[next / 248] bit (next % 248) set? ──► EditionAlreadyIssued
//!        │
//!        ▼
//! set bit, write Edition { parent, edition: next }, master.supply = next
//! ```

use crate::constants::EDITION_MARKER_BIT_SIZE;
use crate::error::EditionError;
use crate::state::{
    load_record, pack_coption_u64, unpack_coption_u64, AccountKey, COption, Pack, Record,
};
use crate::utils::{checked_add, checked_sub};
use arrayref::{array_mut_ref, array_ref, array_refs, mut_array_refs};
use solana_program::{
    account_info::AccountInfo, entrypoint::ProgramResult, program_error::ProgramError,
    pubkey::Pubkey,
};

// =============================================================================
// MASTER BURN POLICY
// =============================================================================

/// Whether the master token may be burned while prints of it still exist.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MasterBurnPolicy {
    /// BurnMaster fails with `OutstandingPrints` until every print is burned.
    #[default]
    RequireNoOutstandingPrints,
    /// Prints outlive their master.
    AllowOutstandingPrints,
}

impl MasterBurnPolicy {
    pub fn from_u8(value: u8) -> Result<Self, ProgramError> {
        match value {
            0 => Ok(MasterBurnPolicy::RequireNoOutstandingPrints),
            1 => Ok(MasterBurnPolicy::AllowOutstandingPrints),
            _ => Err(EditionError::InvalidInstruction.into()),
        }
    }
}

// =============================================================================
// MASTER EDITION
// =============================================================================

/// Master edition record.
///
/// # Memory Layout (62 bytes total)
///
/// ```text
/// ┌─────────────────────────────────────────────────────────────────┐
/// │ Offset │ Size │ Field            │ Type                        │
/// ├────────┼──────┼──────────────────┼─────────────────────────────┤
/// │ 0      │ 1    │ key              │ AccountKey::MasterEdition   │
/// │ 1      │ 32   │ mint             │ Pubkey                      │
/// │ 33     │ 8    │ supply           │ u64 (prints issued)         │
/// │ 41     │ 12   │ max_supply       │ COption<u64>                │
/// │ 53     │ 8    │ burned_prints    │ u64                         │
/// │ 61     │ 1    │ burn_policy      │ MasterBurnPolicy            │
/// └─────────────────────────────────────────────────────────────────┘
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct MasterEdition {
    /// The master mint this record belongs to.
    pub mint: Pubkey,

    /// Number of prints issued so far. Only ever increases, and equals the
    /// highest edition number handed out.
    pub supply: u64,

    /// Print cap.
    ///
    /// - `None`: unlimited
    /// - `Some(0)`: no prints at all
    /// - `Some(n)`: at most n prints
    pub max_supply: COption<u64>,

    /// Prints burned so far. Burning never lowers `supply`.
    pub burned_prints: u64,

    pub burn_policy: MasterBurnPolicy,
}

impl MasterEdition {
    /// Load a master edition record. A print edition record in its place
    /// reports `NotAMasterEdition`.
    pub fn load(program_id: &Pubkey, info: &AccountInfo) -> Result<Self, ProgramError> {
        load_record::<MasterEdition>(program_id, info).map_err(|err| {
            if err == EditionError::DataTypeMismatch.into() {
                EditionError::NotAMasterEdition.into()
            } else {
                err
            }
        })
    }

    /// The next edition number, or `EditionsExhausted` if the cap is hit.
    pub fn next_edition(&self) -> Result<u64, ProgramError> {
        let next = checked_add(self.supply, 1u64)?;
        match self.max_supply.as_ref() {
            Some(max) if next > *max => Err(EditionError::EditionsExhausted.into()),
            _ => Ok(next),
        }
    }

    /// Prints issued and not yet burned.
    pub fn outstanding_prints(&self) -> Result<u64, ProgramError> {
        checked_sub(self.supply, self.burned_prints)
    }
}

impl Pack for MasterEdition {
    const LEN: usize = 62;

    fn unpack(input: &[u8]) -> Result<Self, ProgramError> {
        let input = array_ref![input, 0, MasterEdition::LEN];

        #[allow(clippy::ptr_offset_with_cast)]
        let (_key, mint, supply, max_supply, burned_prints, burn_policy) =
            array_refs![input, 1, 32, 8, 12, 8, 1];

        Ok(MasterEdition {
            mint: Pubkey::new_from_array(*mint),
            supply: u64::from_le_bytes(*supply),
            max_supply: unpack_coption_u64(max_supply)?,
            burned_prints: u64::from_le_bytes(*burned_prints),
            burn_policy: MasterBurnPolicy::from_u8(burn_policy[0])
                .map_err(|_| ProgramError::InvalidAccountData)?,
        })
    }

    fn pack(&self, output: &mut [u8]) -> Result<(), ProgramError> {
        let output = array_mut_ref![output, 0, MasterEdition::LEN];

        #[allow(clippy::ptr_offset_with_cast)]
        let (key_dst, mint_dst, supply_dst, max_supply_dst, burned_dst, policy_dst) =
            mut_array_refs![output, 1, 32, 8, 12, 8, 1];

        key_dst[0] = Self::KEY.to_u8();
        mint_dst.copy_from_slice(self.mint.as_ref());
        *supply_dst = self.supply.to_le_bytes();
        pack_coption_u64(&self.max_supply, max_supply_dst);
        *burned_dst = self.burned_prints.to_le_bytes();
        policy_dst[0] = self.burn_policy as u8;

        Ok(())
    }
}

impl Record for MasterEdition {
    const KEY: AccountKey = AccountKey::MasterEdition;
}

// =============================================================================
// PRINT EDITION
// =============================================================================

/// Print edition record: `key | parent (32) | edition (8)`, 41 bytes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Edition {
    /// Address of the master edition record.
    pub parent: Pubkey,
    /// 1-based print number.
    pub edition: u64,
}

impl Pack for Edition {
    const LEN: usize = 41;

    fn unpack(input: &[u8]) -> Result<Self, ProgramError> {
        let input = array_ref![input, 0, Edition::LEN];
        let (_key, parent, edition) = array_refs![input, 1, 32, 8];

        Ok(Edition {
            parent: Pubkey::new_from_array(*parent),
            edition: u64::from_le_bytes(*edition),
        })
    }

    fn pack(&self, output: &mut [u8]) -> Result<(), ProgramError> {
        let output = array_mut_ref![output, 0, Edition::LEN];
        let (key_dst, parent_dst, edition_dst) = mut_array_refs![output, 1, 32, 8];

        key_dst[0] = Self::KEY.to_u8();
        parent_dst.copy_from_slice(self.parent.as_ref());
        *edition_dst = self.edition.to_le_bytes();

        Ok(())
    }
}

impl Record for Edition {
    const KEY: AccountKey = AccountKey::Edition;
}

// =============================================================================
// EDITION MARKER
// =============================================================================

/// Bitmap of issued edition numbers for one 248-number range.
///
/// Marker `m` covers editions `248·m ..= 248·m + 247`. Within the range,
/// edition `n` maps to byte `(n % 248) / 8`, most significant bit first.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EditionMarker {
    pub ledger: [u8; 31],
}

impl EditionMarker {
    /// Byte index and bit mask for `edition`.
    pub fn index_and_mask(edition: u64) -> (usize, u8) {
        let bit = edition % EDITION_MARKER_BIT_SIZE;
        let index = (bit / 8) as usize;
        let mask = 1u8 << (7 - (bit % 8));
        (index, mask)
    }

    pub fn edition_taken(&self, edition: u64) -> bool {
        let (index, mask) = Self::index_and_mask(edition);
        self.ledger[index] & mask != 0
    }

    /// Record `edition` as issued. Fails if it already was.
    pub fn insert_edition(&mut self, edition: u64) -> ProgramResult {
        if self.edition_taken(edition) {
            return Err(EditionError::EditionAlreadyIssued.into());
        }
        let (index, mask) = Self::index_and_mask(edition);
        self.ledger[index] |= mask;
        Ok(())
    }
}

impl Pack for EditionMarker {
    const LEN: usize = 32;

    fn unpack(input: &[u8]) -> Result<Self, ProgramError> {
        let input = array_ref![input, 0, EditionMarker::LEN];
        let (_key, ledger) = array_refs![input, 1, 31];

        Ok(EditionMarker { ledger: *ledger })
    }

    fn pack(&self, output: &mut [u8]) -> Result<(), ProgramError> {
        let output = array_mut_ref![output, 0, EditionMarker::LEN];
        let (key_dst, ledger_dst) = mut_array_refs![output, 1, 31];

        key_dst[0] = Self::KEY.to_u8();
        *ledger_dst = self.ledger;

        Ok(())
    }
}

impl Record for EditionMarker {
    const KEY: AccountKey = AccountKey::EditionMarker;
}

// =============================================================================
// UNIT TESTS
// =============================================================================
