//! Common utilities and types used throughout the cache simulator.
//!
//! This module provides the building blocks shared by every cache model. It includes:
//! 1. **Address Decoding:** Splitting an address into tag, index and offset fields.
//! 2. **Constants:** Fixed address and word widths.
//! 3. **Error Handling:** The crate-wide error enum and result alias.

/// Address decoding and binary rendering.
pub mod addr;

/// Common constants used throughout the simulator.
pub mod constants;

/// Error types.
pub mod error;

pub use addr::{DecodedAddress, decode, to_binary, to_binary_padded};
pub use constants::{ADDRESS_WIDTH, INDEX_PLACEHOLDER, WORD_BYTES};
pub use error::{SimError, SimResult};
