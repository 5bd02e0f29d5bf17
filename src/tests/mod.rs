// Copyright 2024 The p11check developers
// See LICENSE.txt file for terms

pub use crate::attribute::{
    AttrType, Attribute, CkAttrs, DEFAULT_LABEL, DEFAULT_MODULUS_BITS,
    DEFAULT_PUBLIC_EXPONENT,
};
pub use crate::check;
pub use crate::error::{Error, ErrorKind, Result};
pub use crate::interface::*;
pub use crate::keypair::KeyPair;
pub use crate::module::{FuncList, Module};
pub use crate::ops;
pub use crate::{assert_ckr, assert_ckr_ok, ret_or_panic};

use crate::log::log_init;

#[macro_use]
mod util;
pub use util::*;

pub use module::{TestModule, TEST_SESSION};

/// A reference module with its one open read/write session, the
/// starting state every test case builds on
pub struct TestSession {
    module: TestModule,
    session: CK_SESSION_HANDLE,
}

impl TestSession {
    pub fn initialized() -> TestSession {
        log_init();
        TestSession {
            module: TestModule::new(),
            session: TEST_SESSION,
        }
    }

    pub fn module(&self) -> &TestModule {
        &self.module
    }

    pub fn session(&self) -> CK_SESSION_HANDLE {
        self.session
    }
}

mod templates;



mod attrs;


mod config;
