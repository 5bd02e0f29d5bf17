// Copyright 2024 The p11check developers
// See LICENSE.txt file for terms

use crate::tests::*;

pub const CK_ULONG_SIZE: usize = std::mem::size_of::<CK_ULONG>();
pub const CK_BBOOL_SIZE: usize = std::mem::size_of::<CK_BBOOL>();

macro_rules! void_ptr {
    ($ptr:expr) => {
        $ptr as *const _ as CK_VOID_PTR
    };
}

/// Builds an owned attribute template from ulong, byte-string and bool
/// valued entries
pub fn make_attr_template(
    ulongs: &[(CK_ATTRIBUTE_TYPE, CK_ULONG)],
    bytes: &[(CK_ATTRIBUTE_TYPE, &[u8])],
    bools: &[(CK_ATTRIBUTE_TYPE, bool)],
) -> CkAttrs {
    let mut template =
        CkAttrs::with_capacity(ulongs.len() + bytes.len() + bools.len());
    for (typ, val) in ulongs {
        template.add_owned_ulong(*typ, *val).unwrap();
    }
    for (typ, val) in bytes {
        template.add_owned_slice(*typ, val).unwrap();
    }
    for (typ, val) in bools {
        template
            .add_owned_bool(*typ, if *val { CK_TRUE } else { CK_FALSE })
            .unwrap();
    }
    template
}

/// Builds a raw query template from (type, buffer pointer, buffer
/// length) triples; pass a null pointer to probe value lengths
pub fn make_ptrs_template(
    ptrs: &[(CK_ATTRIBUTE_TYPE, CK_VOID_PTR, usize)],
) -> Vec<CK_ATTRIBUTE> {
    let mut template = Vec::with_capacity(ptrs.len());
    for (typ, ptr, len) in ptrs {
        template.push(CK_ATTRIBUTE {
            type_: *typ,
            pValue: *ptr,
            ulValueLen: *len as CK_ULONG,
        });
    }
    template
}
