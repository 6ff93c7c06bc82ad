//! Utility Modules
//!
//! This module provides helper functions used across all processors.
//!
//! # Modules
//!
//! - `accounts`: Record allocation and closing
//! - `assertions`: Common validation checks (ownership, signer, etc.)
//! - `authority`: Authority validation per role

pub mod accounts;
pub mod assertions;
pub mod authority;

// Re-export all utilities for easy access
pub use accounts::*;
pub use assertions::*;
pub use authority::*;
