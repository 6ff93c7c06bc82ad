//! # NFT Edition Program
//!
//! A native Solana program for one-of-one NFTs and numbered prints of them.
//!
//! ## Overview
//!
//! This program allows you to:
//! - Create mints and canonical token accounts
//! - Attach metadata (name, symbol, URI, royalty split) to a mint
//! - Promote a one-unit mint to a master edition with an optional print cap
//! - Issue numbered prints, each recorded in an edition marker bitmap
//! - Delegate a bounded transfer capability and spend it without a signature
//! - Burn prints and masters, closing their records
//!
//! ## Account Types
//!
//! | Account Type | Size | Description |
//! |--------------|------|-------------|
//! | Mint | 46 bytes | One NFT identity |
//! | TokenAccount | 109 bytes | Balance of one mint for one owner |
//! | Metadata | 494 bytes | Descriptor and creator split |
//! | MasterEdition | 62 bytes | Print counter and cap |
//! | Edition | 41 bytes | Numbered print record |
//! | EditionMarker | 32 bytes | Issued-number bitmap (248 per marker) |
//! | Delegation | 74 bytes | Remaining delegated ceiling |
//!
//! ## Instructions
//!
//! | # | Instruction | Description |
//! |---|-------------|-------------|
//! | 0 | CreateMint | Allocate a mint |
//! | 1 | InitializeMint | Set the mint authority |
//! | 2 | CreateTokenAccount | Create the (owner, mint) token account |
//! | 3 | MintTo | Mint new units |
//! | 4 | CreateMetadata | Attach metadata to a mint |
//! | 5 | UpdateMetadata | Change mutable metadata |
//! | 6 | CreateMasterEdition | Pin supply at one and allow prints |
//! | 7 | CreatePrintEdition | Issue the next print |
//! | 8 | Delegate | Grant a transfer ceiling |
//! | 9 | TransferViaDelegate | Spend the ceiling |
//! | 10 | Revoke | Cancel a delegation |
//! | 11 | BurnPrint | Burn a print |
//! | 12 | BurnMaster | Burn a master |

// =============================================================================
// MODULE DECLARATIONS
// =============================================================================

/// Seeds and size limits
pub mod constants;

/// Program entrypoint - where Solana calls into our program
pub mod entrypoint;

/// Custom error types with unique codes
pub mod error;

/// Instruction definitions, parsing and builders
pub mod instruction;

/// Derived addresses for every record
pub mod pda;

/// Instruction processors (business logic)
pub mod processor;

/// Account state structures
pub mod state;

/// Utility functions for validation, math and account lifecycle
pub mod utils;

// =============================================================================
// RE-EXPORTS
// =============================================================================

pub use error::{EditionError, ErrorKind};
pub use instruction::EditionInstruction;
pub use processor::Processor;
pub use state::{
    Creator, Data, Delegation, Edition, EditionKind, EditionMarker, MasterBurnPolicy,
    MasterEdition, Metadata, Mint, Pack, TokenAccount,
};

// =============================================================================
// PROGRAM ID
// =============================================================================

solana_program::declare_id!("NftEdition111111111111111111111111111111111");

/*
=============================================================================
LIFECYCLE OF A PRINT
=============================================================================

  CreateMint ─► InitializeMint ─► CreateTokenAccount ─► MintTo(1)
                                                          │
                                                          ▼
                                                   CreateMetadata
                                                          │
                                                          ▼
                                 CreateMasterEdition(max_supply)
                                 (mint authority gone, supply pinned at 1)
                                                          │
        print mint (supply 1, held by print owner) ───────┤
                                                          ▼
                                   CreatePrintEdition(master.supply + 1)
                                   - marker bit set
                                   - Edition { parent, edition } written
                                   - print metadata copied from master
                                   - print mint authority revoked

Edition numbers are handed out strictly in order. The marker bitmap is
only ever set, never cleared, so BurnPrint frees the records but not the
number.
*/
