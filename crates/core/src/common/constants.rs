//! Global Simulator Constants.
//!
//! Fixed widths shared by geometry derivation, decoding and rendering.

/// Width of a simulated address in bits.
///
/// Only used to report the tag width; decoding keeps every residual high bit in the tag.
pub const ADDRESS_WIDTH: u32 = 32;

/// Size of one word in bytes. Block size is `words_per_block * WORD_BYTES`.
pub const WORD_BYTES: u64 = 4;

/// Rendered in place of the index field when a model has no index bits.
pub const INDEX_PLACEHOLDER: &str = "-";
