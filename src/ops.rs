// Copyright 2024 The p11check developers
// See LICENSE.txt file for terms

//! Drivers for the two-phase encrypt/decrypt protocol.
//!
//! Each operation is Init followed by a one-shot call; the module keeps
//! the per-session operation state (Idle until a successful Init,
//! Initialized until the one-shot call completes or fails terminally).
//! The helpers here never gate calls on the client side, so a test can
//! also issue the raw [crate::module::Module] calls out of order and
//! assert on the usage-error statuses the module reports.

use crate::error::{Error, Result};
use crate::interface::*;
use crate::module::Module;

/// Builds a parameterless mechanism descriptor
pub fn mechanism(mechanism: CK_MECHANISM_TYPE) -> CK_MECHANISM {
    CK_MECHANISM {
        mechanism: mechanism,
        pParameter: std::ptr::null_mut(),
        ulParameterLen: 0,
    }
}

/// Encrypts a plaintext with the given key in one init + one-shot
/// sequence, sizing the output with a length probe first
pub fn encrypt<M: Module>(
    module: &M,
    session: CK_SESSION_HANDLE,
    key: CK_OBJECT_HANDLE,
    plaintext: &[u8],
    mechanism: &CK_MECHANISM,
) -> Result<Vec<u8>> {
    let rv = module.encrypt_init(session, mechanism, key);
    if rv != CKR_OK {
        return Err(Error::ck_rv(rv));
    }

    let mut enc_len: CK_ULONG = 0;
    let rv = module.encrypt(session, plaintext, None, &mut enc_len);
    if rv != CKR_OK {
        return Err(Error::ck_rv(rv));
    }

    let mut enc = vec![0u8; usize::try_from(enc_len)?];
    let rv = module.encrypt(session, plaintext, Some(&mut enc), &mut enc_len);
    if rv != CKR_OK {
        return Err(Error::ck_rv(rv));
    }
    enc.resize(usize::try_from(enc_len)?, 0);

    Ok(enc)
}

/// Decrypts a ciphertext with the given key in one init + one-shot
/// sequence, sizing the output with a length probe first
pub fn decrypt<M: Module>(
    module: &M,
    session: CK_SESSION_HANDLE,
    key: CK_OBJECT_HANDLE,
    ciphertext: &[u8],
    mechanism: &CK_MECHANISM,
) -> Result<Vec<u8>> {
    let rv = module.decrypt_init(session, mechanism, key);
    if rv != CKR_OK {
        return Err(Error::ck_rv(rv));
    }

    let mut dec_len: CK_ULONG = 0;
    let rv = module.decrypt(session, ciphertext, None, &mut dec_len);
    if rv != CKR_OK {
        return Err(Error::ck_rv(rv));
    }

    let mut dec = vec![0u8; usize::try_from(dec_len)?];
    let rv = module.decrypt(session, ciphertext, Some(&mut dec), &mut dec_len);
    if rv != CKR_OK {
        return Err(Error::ck_rv(rv));
    }
    dec.resize(usize::try_from(dec_len)?, 0);

    Ok(dec)
}

/// Encrypts with the public key, decrypts with the private key, and
/// returns both the ciphertext and the recovered plaintext
pub fn round_trip<M: Module>(
    module: &M,
    session: CK_SESSION_HANDLE,
    public_key: CK_OBJECT_HANDLE,
    private_key: CK_OBJECT_HANDLE,
    plaintext: &[u8],
    mechanism: &CK_MECHANISM,
) -> Result<(Vec<u8>, Vec<u8>)> {
    let ciphertext =
        encrypt(module, session, public_key, plaintext, mechanism)?;
    let recovered =
        decrypt(module, session, private_key, &ciphertext, mechanism)?;
    Ok((ciphertext, recovered))
}
