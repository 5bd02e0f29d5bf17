// Copyright 2024 The p11check developers
// See LICENSE.txt file for terms

//! Harness error type.
//!
//! The module under test reports failures only through `CK_RV` status
//! values; an [Error] of kind [ErrorKind::CkError] wraps such a status
//! when a harness component promotes it to a Rust failure. Conformance
//! verdicts and internal errors get their own kinds.

use std::error;
use std::fmt;

use crate::check;
use crate::interface;

/// Shorthand Result type carrying the harness [Error]
pub type Result<T> = std::result::Result<T, Error>;

/// The harness error
#[derive(Debug)]
pub struct Error {
    kind: ErrorKind,
    origin: Option<Box<dyn error::Error>>,
    errmsg: Option<String>,
    ckrv: interface::CK_RV,
}

/// Discriminates the error sources
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[non_exhaustive]
pub enum ErrorKind {
    /// A Cryptoki-style error, see ckrv Error field
    CkError,
    /// A conformance verdict: the module returned a status or data
    /// that does not match the expected outcome, see errmsg
    Mismatch,
    /// The attribute was not found, see errmsg
    AttributeNotFound,
    /// Other error, see origin
    Nested,
}

impl Error {
    /// Wraps a module-reported status value
    pub fn ck_rv(ckrv: interface::CK_RV) -> Error {
        Error {
            kind: ErrorKind::CkError,
            origin: None,
            errmsg: None,
            ckrv: ckrv,
        }
    }

    /// Wraps a status value together with the error that caused it
    pub fn ck_rv_from_error<E>(ckrv: interface::CK_RV, error: E) -> Error
    where
        E: Into<Box<dyn error::Error>>,
    {
        Error {
            kind: ErrorKind::CkError,
            origin: Some(error.into()),
            errmsg: None,
            ckrv: ckrv,
        }
    }

    /// Wraps a status value together with a context message
    pub fn ck_rv_with_errmsg(ckrv: interface::CK_RV, errmsg: String) -> Error {
        Error {
            kind: ErrorKind::CkError,
            origin: None,
            errmsg: Some(errmsg),
            ckrv: ckrv,
        }
    }

    /// Builds a conformance verdict error
    pub fn mismatch(errmsg: String) -> Error {
        Error {
            kind: ErrorKind::Mismatch,
            origin: None,
            errmsg: Some(errmsg),
            ckrv: interface::CKR_GENERAL_ERROR,
        }
    }

    /// Builds an attribute-not-found error
    pub fn not_found(errmsg: String) -> Error {
        Error {
            kind: ErrorKind::AttributeNotFound,
            origin: None,
            errmsg: Some(errmsg),
            ckrv: interface::CKR_GENERAL_ERROR,
        }
    }

    /// Wraps any other error
    pub fn other_error<E>(error: E) -> Error
    where
        E: Into<Box<dyn error::Error>>,
    {
        Error {
            kind: ErrorKind::Nested,
            origin: Some(error.into()),
            errmsg: None,
            ckrv: interface::CKR_GENERAL_ERROR,
        }
    }

    /// Returns the error kind
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Convenience check for the AttributeNotFound kind
    pub fn attr_not_found(&self) -> bool {
        return self.kind == ErrorKind::AttributeNotFound;
    }

    /// Returns the wrapped status value
    pub fn rv(&self) -> interface::CK_RV {
        self.ckrv
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.kind {
            ErrorKind::CkError => {
                if let Some(ref e) = self.errmsg {
                    write!(f, "{} [{}]", e, check::rv_name(self.ckrv))
                } else {
                    write!(f, "{}", check::rv_name(self.ckrv))
                }
            }
            ErrorKind::Mismatch => {
                write!(f, "{}", self.errmsg.as_ref().unwrap())
            }
            ErrorKind::AttributeNotFound => write!(
                f,
                "attribute not found: {}",
                self.errmsg.as_ref().unwrap()
            ),
            ErrorKind::Nested => self.origin.as_ref().unwrap().fmt(f),
        }
    }
}

impl From<interface::CK_RV> for Error {
    fn from(ckrv: interface::CK_RV) -> Error {
        Error::ck_rv(ckrv)
    }
}

impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Error {
        Error::other_error(error)
    }
}

impl From<std::num::TryFromIntError> for Error {
    fn from(error: std::num::TryFromIntError) -> Error {
        Error::other_error(error)
    }
}

impl From<hex::FromHexError> for Error {
    fn from(error: hex::FromHexError) -> Error {
        Error::other_error(error)
    }
}

impl From<std::convert::Infallible> for Error {
    fn from(error: std::convert::Infallible) -> Error {
        match error {}
    }
}

impl error::Error for Error {}

/// Returns an Err wrapping a CK_RV status
#[macro_export]
macro_rules! err_rv {
    ($ck_err:expr) => {
        Err($crate::error::Error::ck_rv($ck_err))
    };
}

/// Builds an Error wrapping a CK_RV status
#[macro_export]
macro_rules! to_rv {
    ($ck_err:expr) => {
        $crate::error::Error::ck_rv($ck_err)
    };
}
