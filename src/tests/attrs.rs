// Copyright 2024 The p11check developers
// See LICENSE.txt file for terms

use crate::tests::*;

use serial_test::parallel;

#[test]
#[parallel]
fn test_sensitive_attrs() {
    let ts = TestSession::initialized();
    let session = ts.session();

    let keypair = ret_or_panic!(KeyPair::generate(
        ts.module(),
        session,
        &[CKA_ENCRYPT],
        &[CKA_DECRYPT, CKA_SENSITIVE],
    ));

    /* modulus and public exponent come off the public key freely */
    let modulus: [u8; 512] = [0; 512];
    let public_exponent: [u8; 16] = [0; 16];
    let mut template = make_ptrs_template(&[
        (CKA_MODULUS, void_ptr!(modulus.as_ptr()), modulus.len()),
        (
            CKA_PUBLIC_EXPONENT,
            void_ptr!(public_exponent.as_ptr()),
            public_exponent.len(),
        ),
    ]);
    let ret = ts.module().get_attribute_value(
        session,
        keypair.public_handle(),
        &mut template,
    );
    assert_ckr_ok!(ret);
    assert_eq!(template[0].ulValueLen, 128);
    assert_eq!(template[1].ulValueLen, 3);

    /* the private key factors and exponent must never be readable on
     * a sensitive key; the buffer contents must not change either */
    for attr_type in [CKA_PRIME_1, CKA_PRIME_2, CKA_PRIVATE_EXPONENT] {
        let buffer: [u8; 1024] = [0xa5; 1024];
        let mut template = make_ptrs_template(&[(
            attr_type,
            void_ptr!(buffer.as_ptr()),
            buffer.len(),
        )]);
        let ret = ts.module().get_attribute_value(
            session,
            keypair.private_handle(),
            &mut template,
        );
        assert_ckr!(CKR_ATTRIBUTE_SENSITIVE, ret);
        assert_eq!(template[0].ulValueLen, CK_UNAVAILABLE_INFORMATION);
        assert!(buffer.iter().all(|b| *b == 0xa5));
    }

    /* the modulus is not key material, it stays readable off the
     * private key too */
    let modulus: [u8; 512] = [0; 512];
    let mut template = make_ptrs_template(&[(
        CKA_MODULUS,
        void_ptr!(modulus.as_ptr()),
        modulus.len(),
    )]);
    let ret = ts.module().get_attribute_value(
        session,
        keypair.private_handle(),
        &mut template,
    );
    assert_ckr_ok!(ret);
    assert_eq!(template[0].ulValueLen, 128);
}

#[test]
#[parallel]
fn test_nonsensitive_private_key_extractable() {
    let ts = TestSession::initialized();
    let session = ts.session();

    /* without the sensitive flag the module hands the key material
     * back */
    let keypair = ret_or_panic!(KeyPair::generate(
        ts.module(),
        session,
        &[CKA_ENCRYPT],
        &[CKA_DECRYPT],
    ));
    let buffer: [u8; 1024] = [0; 1024];
    let mut template = make_ptrs_template(&[(
        CKA_PRIVATE_EXPONENT,
        void_ptr!(buffer.as_ptr()),
        buffer.len(),
    )]);
    let ret = ts.module().get_attribute_value(
        session,
        keypair.private_handle(),
        &mut template,
    );
    assert_ckr_ok!(ret);
    assert_eq!(template[0].ulValueLen, 128);
}

#[test]
#[parallel]
fn test_label_roundtrip() {
    let ts = TestSession::initialized();
    let session = ts.session();

    let keypair = ret_or_panic!(KeyPair::generate(
        ts.module(),
        session,
        &[CKA_ENCRYPT, CKA_LABEL],
        &[CKA_DECRYPT, CKA_LABEL],
    ));

    for handle in [keypair.public_handle(), keypair.private_handle()] {
        let data: [u8; 128] = [0; 128];
        let mut template = make_ptrs_template(&[(
            CKA_LABEL,
            void_ptr!(data.as_ptr()),
            data.len(),
        )]);
        let ret =
            ts.module().get_attribute_value(session, handle, &mut template);
        assert_ckr_ok!(ret);
        let size = template[0].ulValueLen as usize;
        let value = std::str::from_utf8(&data[0..size]).unwrap();
        assert_eq!(value, DEFAULT_LABEL);
    }
}

#[test]
#[parallel]
fn test_attr_query_sizing() {
    let ts = TestSession::initialized();
    let session = ts.session();

    let keypair = ret_or_panic!(KeyPair::generate(
        ts.module(),
        session,
        &[CKA_ENCRYPT, CKA_LABEL],
        &[CKA_DECRYPT],
    ));

    /* null pointer probes the value length */
    let mut template =
        make_ptrs_template(&[(CKA_LABEL, std::ptr::null_mut(), 0)]);
    let ret = ts.module().get_attribute_value(
        session,
        keypair.public_handle(),
        &mut template,
    );
    assert_ckr_ok!(ret);
    assert_eq!(template[0].ulValueLen as usize, DEFAULT_LABEL.len());

    /* an undersized buffer fails the query for that attribute */
    let data: [u8; 128] = [0; 128];
    let mut template =
        make_ptrs_template(&[(CKA_LABEL, void_ptr!(data.as_ptr()), 1)]);
    let ret = ts.module().get_attribute_value(
        session,
        keypair.public_handle(),
        &mut template,
    );
    assert_ckr!(CKR_BUFFER_TOO_SMALL, ret);
    assert_eq!(template[0].ulValueLen, CK_UNAVAILABLE_INFORMATION);

    /* an attribute the object does not carry */
    let mut template =
        make_ptrs_template(&[(CKA_VALUE_LEN, std::ptr::null_mut(), 0)]);
    let ret = ts.module().get_attribute_value(
        session,
        keypair.public_handle(),
        &mut template,
    );
    assert_ckr!(CKR_ATTRIBUTE_TYPE_INVALID, ret);
    assert_eq!(template[0].ulValueLen, CK_UNAVAILABLE_INFORMATION);

    /* a destroyed object is not queryable at all */
    let mut keypair = keypair;
    let public = keypair.public_handle();
    ret_or_panic!(keypair.destroy());
    let mut template =
        make_ptrs_template(&[(CKA_LABEL, std::ptr::null_mut(), 0)]);
    let ret =
        ts.module().get_attribute_value(session, public, &mut template);
    assert_ckr!(CKR_OBJECT_HANDLE_INVALID, ret);
}
