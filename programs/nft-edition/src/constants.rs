//! Protocol Constants
//!
//! Seed prefixes for derived addresses and the fixed limits that size every
//! record. Changing any of these changes account layouts or addresses.

/// Prefix for metadata, edition and marker addresses.
pub const PREFIX: &[u8] = b"metadata";

/// Suffix distinguishing edition and marker addresses from metadata.
pub const EDITION: &[u8] = b"edition";

/// Tag for delegation record addresses.
pub const DELEGATE_SEED: &[u8] = b"delegate_nft";

// Size constants.

pub const MAX_NAME_LENGTH: usize = 32;

pub const MAX_SYMBOL_LENGTH: usize = 10;

pub const MAX_URI_LENGTH: usize = 200;

pub const MAX_CREATOR_LIMIT: usize = 5;

/// address (32) + verified (1) + share (1)
pub const MAX_CREATOR_LEN: usize = 32 + 1 + 1;

/// Shares are whole percentages.
pub const CREATOR_SHARE_TOTAL: u16 = 100;

pub const MAX_SELLER_FEE_BASIS_POINTS: u16 = 10_000;

/// Edition numbers tracked by one marker account (31 bytes of bits).
pub const EDITION_MARKER_BIT_SIZE: u64 = 248;
