//! # Error Tests
//!
//! Display strings and source chaining of `SimError`.

use std::error::Error as _;

use cachesim_core::SimError;

#[test]
fn invalid_address_names_token_and_position() {
    let err = SimError::InvalidAddress {
        token: "0x1f".to_owned(),
        position: 3,
    };
    assert_eq!(err.to_string(), "invalid address \"0x1f\" at position 3");
}

#[test]
fn zero_parameter_display() {
    let err = SimError::ZeroParameter {
        name: "words_per_block",
    };
    assert_eq!(err.to_string(), "words_per_block must be a positive integer");
}

#[test]
fn no_sets_display() {
    let err = SimError::NoSets {
        model: "Set-Associative",
        num_blocks: 4,
        ways: 8,
    };
    assert_eq!(
        err.to_string(),
        "Set-Associative cache has no sets: 4 block(s) cannot be split into 8-way sets"
    );
}

#[test]
fn not_power_of_two_display() {
    let err = SimError::NotPowerOfTwo {
        name: "block_size",
        value: 12,
    };
    assert_eq!(err.to_string(), "block_size = 12 is not a power of two");
}

#[test]
fn io_error_keeps_its_source() {
    let err = SimError::Io {
        path: "missing.txt".into(),
        source: std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
    };
    assert!(err.to_string().starts_with("could not read missing.txt"));
    assert!(err.source().is_some());
}

#[test]
fn json_errors_convert() {
    let json_err = serde_json::from_str::<u64>("nope").unwrap_err();
    let err: SimError = json_err.into();
    assert!(matches!(err, SimError::Json(_)));
}
