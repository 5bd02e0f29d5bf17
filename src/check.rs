// Copyright 2024 The p11check developers
// See LICENSE.txt file for terms

//! Conformance verdict helpers.
//!
//! Every module call returns a bare `CK_RV`; the functions here turn a
//! returned status (and any produced data) into a pass/fail outcome.
//! A call expected to succeed fails the check on any non-`CKR_OK`
//! status; a call expected to be rejected passes only on the single
//! expected status, anything else, success included, is a failure.
//! Data comparisons are always byte-exact.

use crate::error::{Error, Result};
use crate::interface::*;

/// Returns the CKR_* constant name for a return value, or its hex
/// encoding when the value is not part of the known set
pub fn rv_name(rv: CK_RV) -> String {
    macro_rules! rv_name_entry {
        ($rv:expr; $($name:ident),* $(,)?) => {
            match $rv {
                $($name => return stringify!($name).to_string(),)*
                _ => (),
            }
        };
    }
    rv_name_entry!(rv;
        CKR_OK,
        CKR_CANCEL,
        CKR_HOST_MEMORY,
        CKR_SLOT_ID_INVALID,
        CKR_GENERAL_ERROR,
        CKR_FUNCTION_FAILED,
        CKR_ARGUMENTS_BAD,
        CKR_ATTRIBUTE_READ_ONLY,
        CKR_ATTRIBUTE_SENSITIVE,
        CKR_ATTRIBUTE_TYPE_INVALID,
        CKR_ATTRIBUTE_VALUE_INVALID,
        CKR_ACTION_PROHIBITED,
        CKR_DATA_INVALID,
        CKR_DATA_LEN_RANGE,
        CKR_DEVICE_ERROR,
        CKR_DEVICE_MEMORY,
        CKR_DEVICE_REMOVED,
        CKR_ENCRYPTED_DATA_INVALID,
        CKR_ENCRYPTED_DATA_LEN_RANGE,
        CKR_FUNCTION_CANCELED,
        CKR_FUNCTION_NOT_SUPPORTED,
        CKR_KEY_HANDLE_INVALID,
        CKR_KEY_SIZE_RANGE,
        CKR_KEY_TYPE_INCONSISTENT,
        CKR_KEY_FUNCTION_NOT_PERMITTED,
        CKR_MECHANISM_INVALID,
        CKR_MECHANISM_PARAM_INVALID,
        CKR_OBJECT_HANDLE_INVALID,
        CKR_OPERATION_ACTIVE,
        CKR_OPERATION_NOT_INITIALIZED,
        CKR_PIN_INCORRECT,
        CKR_PIN_INVALID,
        CKR_PIN_LOCKED,
        CKR_SESSION_CLOSED,
        CKR_SESSION_HANDLE_INVALID,
        CKR_SESSION_READ_ONLY,
        CKR_TEMPLATE_INCOMPLETE,
        CKR_TEMPLATE_INCONSISTENT,
        CKR_TOKEN_NOT_PRESENT,
        CKR_TOKEN_NOT_RECOGNIZED,
        CKR_USER_ALREADY_LOGGED_IN,
        CKR_USER_NOT_LOGGED_IN,
        CKR_BUFFER_TOO_SMALL,
        CKR_CRYPTOKI_NOT_INITIALIZED,
        CKR_CRYPTOKI_ALREADY_INITIALIZED,
    );
    format!("{:#010x}", rv)
}

/// Checks a status from a call that is required to succeed
pub fn check_ok(func: &str, rv: CK_RV) -> Result<()> {
    if rv == CKR_OK {
        Ok(())
    } else {
        Err(Error::mismatch(format!(
            "{} failed with {}",
            func,
            rv_name(rv)
        )))
    }
}

/// Checks a status from a call that must fail with one specific status
///
/// Any other status, including CKR_OK, is a conformance failure.
pub fn check_rv(func: &str, expected: CK_RV, rv: CK_RV) -> Result<()> {
    if rv == expected {
        Ok(())
    } else {
        Err(Error::mismatch(format!(
            "{} returned {}, expected {}",
            func,
            rv_name(rv),
            rv_name(expected)
        )))
    }
}

/// Compares two byte buffers for exact equality, lengths included
pub fn check_bytes(what: &str, expected: &[u8], actual: &[u8]) -> Result<()> {
    if expected == actual {
        Ok(())
    } else {
        Err(Error::mismatch(format!(
            "{} mismatch: expected {} bytes [{}], got {} bytes [{}]",
            what,
            expected.len(),
            hex::encode(expected),
            actual.len(),
            hex::encode(actual)
        )))
    }
}

/// Compares two CK_ULONG values, typically output lengths
pub fn check_ulong(what: &str, expected: CK_ULONG, actual: CK_ULONG) -> Result<()> {
    if expected == actual {
        Ok(())
    } else {
        Err(Error::mismatch(format!(
            "{} mismatch: expected {}, got {}",
            what, expected, actual
        )))
    }
}

/// Asserts that a module call returned CKR_OK
#[macro_export]
macro_rules! assert_ckr_ok {
    ($rv:expr) => {{
        let rv = $rv;
        assert_eq!(
            rv,
            $crate::interface::CKR_OK,
            "expected CKR_OK, got {}",
            $crate::check::rv_name(rv)
        );
    }};
}

/// Asserts that a module call returned one specific status
#[macro_export]
macro_rules! assert_ckr {
    ($expected:expr, $rv:expr) => {{
        let rv = $rv;
        let expected = $expected;
        assert_eq!(
            rv,
            expected,
            "expected {}, got {}",
            $crate::check::rv_name(expected),
            $crate::check::rv_name(rv)
        );
    }};
}

/// Unwraps a Result or panics with the error display
#[macro_export]
macro_rules! ret_or_panic {
    ($ret:expr) => {
        match $ret {
            Ok(r) => r,
            Err(e) => panic!("{e}"),
        }
    };
}
