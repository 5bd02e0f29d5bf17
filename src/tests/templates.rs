// Copyright 2024 The p11check developers
// See LICENSE.txt file for terms

use crate::tests::*;

use serial_test::parallel;

#[test]
#[parallel]
fn test_template_from_kinds() {
    /* boolean kinds default to true, one CK_BBOOL each */
    let template = ret_or_panic!(CkAttrs::from_kinds(&[
        CKA_ENCRYPT,
        CKA_TOKEN,
        CKA_SENSITIVE,
    ]));
    assert_eq!(template.len(), 3);
    for attr in template.as_slice() {
        assert_eq!(attr.ulValueLen as usize, CK_BBOOL_SIZE);
        let val = unsafe { *(attr.pValue as *const CK_BBOOL) };
        assert_eq!(val, CK_TRUE);
    }

    /* sized and bulk kinds receive the harness defaults */
    let template = ret_or_panic!(CkAttrs::from_kinds(&[
        CKA_MODULUS_BITS,
        CKA_PUBLIC_EXPONENT,
        CKA_LABEL,
    ]));
    let attr = template.find_attr(CKA_MODULUS_BITS).unwrap();
    assert_eq!(attr.ulValueLen as usize, CK_ULONG_SIZE);
    let bits = unsafe { *(attr.pValue as *const CK_ULONG) };
    assert_eq!(bits, DEFAULT_MODULUS_BITS);

    let attr = template.find_attr(CKA_PUBLIC_EXPONENT).unwrap();
    assert_eq!(attr.ulValueLen as usize, DEFAULT_PUBLIC_EXPONENT.len());
    let exp = unsafe {
        std::slice::from_raw_parts(
            attr.pValue as *const u8,
            attr.ulValueLen as usize,
        )
    };
    assert_eq!(exp, &DEFAULT_PUBLIC_EXPONENT);

    let attr = template.find_attr(CKA_LABEL).unwrap();
    let label = unsafe {
        std::slice::from_raw_parts(
            attr.pValue as *const u8,
            attr.ulValueLen as usize,
        )
    };
    assert_eq!(label, DEFAULT_LABEL.as_bytes());
}

#[test]
#[parallel]
fn test_attr_type_map() {
    assert_eq!(
        ret_or_panic!(AttrType::attr_id_to_attrtype(CKA_TOKEN)),
        AttrType::BoolType
    );
    assert_eq!(
        ret_or_panic!(AttrType::attr_id_to_attrtype(CKA_MODULUS_BITS)),
        AttrType::NumType
    );
    assert_eq!(
        ret_or_panic!(AttrType::attr_id_to_attrtype(CKA_LABEL)),
        AttrType::StringType
    );
    assert_eq!(
        ret_or_panic!(AttrType::attr_id_to_attrtype(CKA_PRIVATE_EXPONENT)),
        AttrType::BytesType
    );
    assert_eq!(AttrType::attr_id_to_name(CKA_MODULUS), Some("CKA_MODULUS"));
    assert_eq!(AttrType::attr_id_to_name(0xdeadbeef), None);
}

#[test]
#[parallel]
fn test_template_unknown_kind() {
    /* an id outside the known set is a harness bug, not a module
     * status */
    let err = match CkAttrs::from_kinds(&[0xdeadbeef]) {
        Ok(_) => panic!("unknown attribute kind accepted"),
        Err(e) => e,
    };
    assert!(err.attr_not_found());
    assert_eq!(err.kind(), ErrorKind::AttributeNotFound);

    /* known kind without a sensible default is rejected the same way */
    let err = match CkAttrs::from_kinds(&[CKA_MODULUS]) {
        Ok(_) => panic!("kind with no default accepted"),
        Err(e) => e,
    };
    assert!(err.attr_not_found());
}

#[test]
#[parallel]
fn test_template_growth_keeps_pointers() {
    /* values stored before the array grows must stay addressable */
    let mut template = CkAttrs::with_capacity(1);
    for i in 0..16 as CK_ULONG {
        ret_or_panic!(
            template.add_owned_ulong(CKA_MODULUS_BITS + i, 512 + i)
        );
    }
    let first = template.as_slice()[0];
    let val = unsafe { *(first.pValue as *const CK_ULONG) };
    assert_eq!(val, 512);
    let last = template.as_slice()[15];
    let val = unsafe { *(last.pValue as *const CK_ULONG) };
    assert_eq!(val, 527);
}

#[test]
#[parallel]
fn test_template_add_missing() {
    let mut template = make_attr_template(
        &[(CKA_MODULUS_BITS, 2048)],
        &[],
        &[(CKA_ENCRYPT, true)],
    );
    assert_eq!(template.len(), 2);

    /* present entries are left alone */
    ret_or_panic!(
        template.add_missing_ulong(CKA_MODULUS_BITS, DEFAULT_MODULUS_BITS)
    );
    assert_eq!(template.len(), 2);
    let attr = template.find_attr(CKA_MODULUS_BITS).unwrap();
    let bits = unsafe { *(attr.pValue as *const CK_ULONG) };
    assert_eq!(bits, 2048);

    /* absent entries are appended */
    ret_or_panic!(template
        .add_missing_slice(CKA_PUBLIC_EXPONENT, &DEFAULT_PUBLIC_EXPONENT));
    assert_eq!(template.len(), 3);
    assert!(template.find_attr(CKA_PUBLIC_EXPONENT).is_some());
    assert!(template.find_attr(CKA_DECRYPT).is_none());
}

#[test]
#[parallel]
fn test_attribute_values() {
    let attr = Attribute::from_bool(CKA_TOKEN, true);
    assert_eq!(attr.get_type(), CKA_TOKEN);
    assert_eq!(ret_or_panic!(attr.to_bool()), true);
    assert_eq!(attr.name(), "CKA_TOKEN");

    let attr = Attribute::from_ulong(CKA_MODULUS_BITS, 1024);
    assert_eq!(ret_or_panic!(attr.to_ulong()), 1024);

    let attr = Attribute::from_string(CKA_LABEL, String::from("a label"));
    assert_eq!(ret_or_panic!(attr.to_string()), "a label");

    /* an unknown id still formats, as hex */
    let attr = Attribute::from_bytes(0xdeadbeef, vec![0x01]);
    assert_eq!(attr.name(), "0xdeadbeef");

    /* a value of the wrong size does not reinterpret */
    let attr = Attribute::from_bytes(CKA_TOKEN, vec![0x01, 0x02]);
    assert!(attr.to_bool().is_err());
}

#[test]
#[parallel]
fn test_attribute_from_ck_attr() {
    let value: CK_ULONG = 1024;
    let ck_attr = CK_ATTRIBUTE {
        type_: CKA_MODULUS_BITS,
        pValue: void_ptr!(&value),
        ulValueLen: CK_ULONG_SIZE as CK_ULONG,
    };
    let attr = ret_or_panic!(Attribute::from_ck_attr(&ck_attr));
    assert_eq!(attr.get_type(), CKA_MODULUS_BITS);
    assert_eq!(ret_or_panic!(attr.to_ulong()), 1024);

    /* null pointer with a nonzero length is rejected */
    let ck_attr = CK_ATTRIBUTE {
        type_: CKA_MODULUS_BITS,
        pValue: std::ptr::null_mut(),
        ulValueLen: CK_ULONG_SIZE as CK_ULONG,
    };
    assert!(Attribute::from_ck_attr(&ck_attr).is_err());
}
