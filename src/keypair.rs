// Copyright 2024 The p11check developers
// See LICENSE.txt file for terms

//! Key-pair fixture: generates an asymmetric key pair inside a borrowed
//! session on construction and destroys both key objects on teardown.
//!
//! The fixture owns the two object handles logically, not the key
//! material; ownership is enforced through explicit destroy calls
//! against the module. A pair is either fully constructed or not
//! constructed at all: when generation fails no handles are retained
//! and nothing is destroyed.

use crate::attribute::{
    CkAttrs, DEFAULT_MODULUS_BITS, DEFAULT_PUBLIC_EXPONENT,
};
use crate::check::rv_name;
use crate::error::{Error, Result};
use crate::interface::*;
use crate::module::Module;
use crate::ops;

/// A generated public/private key pair bound to a session.
///
/// The handles stay readable after destruction so tests can verify the
/// module refuses operations on dead handles; the liveness flags only
/// control what teardown still has to clean up.
#[derive(Debug)]
pub struct KeyPair<'a, M: Module> {
    module: &'a M,
    session: CK_SESSION_HANDLE,
    public: CK_OBJECT_HANDLE,
    private: CK_OBJECT_HANDLE,
    public_live: bool,
    private_live: bool,
}

impl<'a, M: Module> KeyPair<'a, M> {
    /// Generates an RSA key pair from two lists of desired attribute
    /// kinds.
    ///
    /// Templates are built with the [crate::attribute] defaults; the
    /// public template is completed with the default modulus size
    /// and public exponent when the kind lists do not name them. The
    /// mechanism is always `CKM_RSA_PKCS_KEY_PAIR_GEN`; use
    /// [KeyPair::generate_with_templates] for full control.
    pub fn generate(
        module: &'a M,
        session: CK_SESSION_HANDLE,
        public_kinds: &[CK_ATTRIBUTE_TYPE],
        private_kinds: &[CK_ATTRIBUTE_TYPE],
    ) -> Result<KeyPair<'a, M>> {
        let mut public_template = CkAttrs::from_kinds(public_kinds)?;
        public_template
            .add_missing_ulong(CKA_MODULUS_BITS, DEFAULT_MODULUS_BITS)?;
        public_template.add_missing_slice(
            CKA_PUBLIC_EXPONENT,
            &DEFAULT_PUBLIC_EXPONENT,
        )?;
        let private_template = CkAttrs::from_kinds(private_kinds)?;

        let mechanism = ops::mechanism(CKM_RSA_PKCS_KEY_PAIR_GEN);
        Self::generate_with_templates(
            module,
            session,
            &mechanism,
            public_template.as_slice(),
            private_template.as_slice(),
        )
    }

    /// Generates a key pair from explicit templates and mechanism.
    pub fn generate_with_templates(
        module: &'a M,
        session: CK_SESSION_HANDLE,
        mechanism: &CK_MECHANISM,
        public_template: &[CK_ATTRIBUTE],
        private_template: &[CK_ATTRIBUTE],
    ) -> Result<KeyPair<'a, M>> {
        let mut public: CK_OBJECT_HANDLE = CK_INVALID_HANDLE;
        let mut private: CK_OBJECT_HANDLE = CK_INVALID_HANDLE;
        let rv = module.generate_key_pair(
            session,
            mechanism,
            public_template,
            private_template,
            &mut public,
            &mut private,
        );
        if rv != CKR_OK {
            return Err(Error::ck_rv_with_errmsg(
                rv,
                "C_GenerateKeyPair failed".to_string(),
            ));
        }
        Ok(KeyPair {
            module: module,
            session: session,
            public: public,
            private: private,
            public_live: true,
            private_live: true,
        })
    }

    /// Returns the session the pair was generated in
    pub fn session(&self) -> CK_SESSION_HANDLE {
        self.session
    }

    /// Returns the public key object handle
    pub fn public_handle(&self) -> CK_OBJECT_HANDLE {
        self.public
    }

    /// Returns the private key object handle
    pub fn private_handle(&self) -> CK_OBJECT_HANDLE {
        self.private
    }

    /// Destroys the public key object now instead of at teardown.
    ///
    /// Destroying a handle that was already destroyed is a harness
    /// usage defect and is reported, not absorbed.
    pub fn destroy_public(&mut self) -> Result<()> {
        if !self.public_live {
            return Err(Error::ck_rv_with_errmsg(
                CKR_OBJECT_HANDLE_INVALID,
                "public key already destroyed".to_string(),
            ));
        }
        self.public_live = false;
        let rv = self.module.destroy_object(self.session, self.public);
        if rv != CKR_OK {
            return Err(Error::ck_rv_with_errmsg(
                rv,
                "C_DestroyObject(public) failed".to_string(),
            ));
        }
        Ok(())
    }

    /// Destroys the private key object now instead of at teardown.
    pub fn destroy_private(&mut self) -> Result<()> {
        if !self.private_live {
            return Err(Error::ck_rv_with_errmsg(
                CKR_OBJECT_HANDLE_INVALID,
                "private key already destroyed".to_string(),
            ));
        }
        self.private_live = false;
        let rv = self.module.destroy_object(self.session, self.private);
        if rv != CKR_OK {
            return Err(Error::ck_rv_with_errmsg(
                rv,
                "C_DestroyObject(private) failed".to_string(),
            ));
        }
        Ok(())
    }

    /// Destroys both key objects.
    ///
    /// Each handle is destroyed exactly once; calling this after the
    /// whole pair was already torn down reports a defect.
    pub fn destroy(&mut self) -> Result<()> {
        if !self.public_live && !self.private_live {
            return Err(Error::ck_rv_with_errmsg(
                CKR_OBJECT_HANDLE_INVALID,
                "key pair already destroyed".to_string(),
            ));
        }
        let mut result = Ok(());
        if self.public_live {
            let r = self.destroy_public();
            if result.is_ok() {
                result = r;
            }
        }
        if self.private_live {
            let r = self.destroy_private();
            if result.is_ok() {
                result = r;
            }
        }
        result
    }
}

impl<M: Module> Drop for KeyPair<'_, M> {
    fn drop(&mut self) {
        if self.public_live {
            let rv = self.module.destroy_object(self.session, self.public);
            if rv != CKR_OK {
                log::error!(
                    "failed to destroy public key {}: {}",
                    self.public,
                    rv_name(rv)
                );
            }
        }
        if self.private_live {
            let rv = self.module.destroy_object(self.session, self.private);
            if rv != CKR_OK {
                log::error!(
                    "failed to destroy private key {}: {}",
                    self.private,
                    rv_name(rv)
                );
            }
        }
    }
}
