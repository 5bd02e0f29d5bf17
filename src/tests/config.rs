// Copyright 2024 The p11check developers
// See LICENSE.txt file for terms

use crate::config::Config;
use crate::tests::*;

use serial_test::{parallel, serial};

#[test]
#[parallel]
fn test_config_defaults() {
    let conf = Config::new();
    assert_eq!(conf.module, None);
    assert_eq!(conf.initargs, None);
    assert_eq!(conf.slot, 0);
    assert_eq!(conf.pin, None);
    assert_eq!(conf.modulus_bits, 1024);
    assert_eq!(conf.public_exponent, "010001");

    assert_eq!(ret_or_panic!(conf.slot_id()), 0);
    assert_eq!(ret_or_panic!(conf.modulus_bits()), DEFAULT_MODULUS_BITS);
    assert_eq!(
        ret_or_panic!(conf.public_exponent()),
        DEFAULT_PUBLIC_EXPONENT.to_vec()
    );
}

#[test]
#[parallel]
fn test_config_from_str() {
    let conf = ret_or_panic!(Config::from_str(
        r#"
module = "/usr/lib64/pkcs11/libsofthsm2.so"
slot = 4
pin = "12345678"
modulus_bits = 2048
public_exponent = "00010001"
"#
    ));
    assert_eq!(
        conf.module.as_deref(),
        Some("/usr/lib64/pkcs11/libsofthsm2.so")
    );
    assert_eq!(conf.slot, 4);
    assert_eq!(conf.pin.as_deref(), Some("12345678"));
    assert_eq!(ret_or_panic!(conf.modulus_bits()), 2048);

    /* the 4 byte exponent encoding decodes as written */
    assert_eq!(
        ret_or_panic!(conf.public_exponent()),
        vec![0x00, 0x01, 0x00, 0x01]
    );

    /* omitted keys keep their defaults */
    let conf = ret_or_panic!(Config::from_str("slot = 2\n"));
    assert_eq!(conf.slot, 2);
    assert_eq!(conf.modulus_bits, 1024);
    assert_eq!(conf.module, None);
}

#[test]
#[parallel]
fn test_config_bad_input() {
    let err = match Config::from_str("slot = \"not a number\"\n") {
        Ok(_) => panic!("malformed configuration accepted"),
        Err(e) => e,
    };
    assert_eq!(err.rv(), CKR_TOKEN_NOT_RECOGNIZED);

    /* a bad exponent string surfaces at decode time, not at parse
     * time */
    let conf = ret_or_panic!(Config::from_str("public_exponent = \"xyz\"\n"));
    assert!(conf.public_exponent().is_err());
}

#[test]
#[serial]
fn test_config_env_overrides() {
    let mut conf = Config::new();
    std::env::set_var("P11CHECK_MODULE", "/tmp/module.so");
    std::env::set_var("P11CHECK_SLOT", "7");
    std::env::set_var("P11CHECK_PIN", "0000");
    conf.load_env_vars_overrides();
    std::env::remove_var("P11CHECK_MODULE");
    std::env::remove_var("P11CHECK_SLOT");
    std::env::remove_var("P11CHECK_PIN");

    assert_eq!(conf.module.as_deref(), Some("/tmp/module.so"));
    assert_eq!(conf.slot, 7);
    assert_eq!(conf.pin.as_deref(), Some("0000"));

    /* an unparsable slot override is ignored */
    std::env::set_var("P11CHECK_SLOT", "seven");
    conf.load_env_vars_overrides();
    std::env::remove_var("P11CHECK_SLOT");
    assert_eq!(conf.slot, 7);
}

#[test]
#[serial]
fn test_config_conf_file_env() {
    /* P11CHECK_CONF has the highest precedence and is returned as is */
    std::env::set_var("P11CHECK_CONF", "/tmp/p11check-test.conf");
    let found = Config::find_conf();
    std::env::remove_var("P11CHECK_CONF");
    assert_eq!(ret_or_panic!(found), "/tmp/p11check-test.conf");
}
