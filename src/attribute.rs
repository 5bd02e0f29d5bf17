// Copyright 2024 The p11check developers
// See LICENSE.txt file for terms

//! Helpers to build and inspect PKCS#11 attribute templates with typed,
//! sized values ([Attribute], [CkAttrs]), and the mapping between
//! attribute type values and the data type they carry ([AttrType]).
//!
//! Templates built here own their backing storage, so the raw
//! `CK_ATTRIBUTE` array stays valid for as long as the template value
//! lives and can be handed to generation and query calls directly.

use std::cmp::Ordering;

use crate::error::{Error, Result};
use crate::interface::*;

/// Default modulus size for generated RSA key pairs
pub const DEFAULT_MODULUS_BITS: CK_ULONG = 1024;
/// Default public exponent, 65537 as big-endian bytes
pub const DEFAULT_PUBLIC_EXPONENT: [u8; 3] = [0x01, 0x00, 0x01];
/// Default label applied to generated test keys
pub const DEFAULT_LABEL: &str = "p11check test key";

/// List of attribute value types we understand
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum AttrType {
    /// A CK_BBOOL flag
    BoolType,
    /// A CK_ULONG value
    NumType,
    /// A UTF-8 byte string
    StringType,
    /// An opaque byte string
    BytesType,
}

impl AttrType {
    /// Finds the attribute type from the attribute id
    ///
    /// An id that is not in the map is a caller bug, reported as a
    /// harness error rather than a module status.
    pub fn attr_id_to_attrtype(id: CK_ULONG) -> Result<AttrType> {
        match Attrmap::search_by_id(id) {
            Some(a) => Ok(a.atype),
            None => Err(Error::not_found(format!("{:#010x}", id))),
        }
    }

    /// Returns the CKA_* constant name of an attribute id, if known
    pub fn attr_id_to_name(id: CK_ULONG) -> Option<&'static str> {
        Attrmap::search_by_id(id).map(|a| a.name)
    }
}

/// Struct to map a PKCS#11 attribute to a type and a printable name
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
struct Attrmap<'a> {
    id: CK_ULONG,
    name: &'a str,
    atype: AttrType,
}

impl PartialOrd for Attrmap<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Attrmap<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.id.cmp(&other.id)
    }
}

impl Attrmap<'_> {
    /// Convenience function to efficiently search for a mapping by id
    fn search_by_id(id: CK_ULONG) -> Option<&'static Attrmap<'static>> {
        match &ATTRMAP.binary_search(&Attrmap {
            id: id,
            name: "",
            atype: AttrType::BytesType,
        }) {
            Ok(i) => Some(&ATTRMAP[*i]),
            Err(_) => None,
        }
    }
}

/// Helper macro to populate the static attributes map
macro_rules! attrmap_element {
    ($id:expr; as $attrtype:ident) => {
        Attrmap {
            id: $id,
            name: stringify!($id),
            atype: AttrType::$attrtype,
        }
    };
}

/// The attributes map, sorted by id, lists all attributes the harness
/// knows how to size and type
static ATTRMAP: [Attrmap<'_>; 42] = [
    attrmap_element!(CKA_CLASS; as NumType),
    attrmap_element!(CKA_TOKEN; as BoolType),
    attrmap_element!(CKA_PRIVATE; as BoolType),
    attrmap_element!(CKA_LABEL; as StringType),
    attrmap_element!(CKA_UNIQUE_ID; as StringType),
    attrmap_element!(CKA_APPLICATION; as StringType),
    attrmap_element!(CKA_VALUE; as BytesType),
    attrmap_element!(CKA_OBJECT_ID; as BytesType),
    attrmap_element!(CKA_KEY_TYPE; as NumType),
    attrmap_element!(CKA_SUBJECT; as BytesType),
    attrmap_element!(CKA_ID; as BytesType),
    attrmap_element!(CKA_SENSITIVE; as BoolType),
    attrmap_element!(CKA_ENCRYPT; as BoolType),
    attrmap_element!(CKA_DECRYPT; as BoolType),
    attrmap_element!(CKA_WRAP; as BoolType),
    attrmap_element!(CKA_UNWRAP; as BoolType),
    attrmap_element!(CKA_SIGN; as BoolType),
    attrmap_element!(CKA_SIGN_RECOVER; as BoolType),
    attrmap_element!(CKA_VERIFY; as BoolType),
    attrmap_element!(CKA_VERIFY_RECOVER; as BoolType),
    attrmap_element!(CKA_DERIVE; as BoolType),
    attrmap_element!(CKA_START_DATE; as BytesType),
    attrmap_element!(CKA_END_DATE; as BytesType),
    attrmap_element!(CKA_MODULUS; as BytesType),
    attrmap_element!(CKA_MODULUS_BITS; as NumType),
    attrmap_element!(CKA_PUBLIC_EXPONENT; as BytesType),
    attrmap_element!(CKA_PRIVATE_EXPONENT; as BytesType),
    attrmap_element!(CKA_PRIME_1; as BytesType),
    attrmap_element!(CKA_PRIME_2; as BytesType),
    attrmap_element!(CKA_EXPONENT_1; as BytesType),
    attrmap_element!(CKA_EXPONENT_2; as BytesType),
    attrmap_element!(CKA_COEFFICIENT; as BytesType),
    attrmap_element!(CKA_PUBLIC_KEY_INFO; as BytesType),
    attrmap_element!(CKA_VALUE_LEN; as NumType),
    attrmap_element!(CKA_EXTRACTABLE; as BoolType),
    attrmap_element!(CKA_LOCAL; as BoolType),
    attrmap_element!(CKA_NEVER_EXTRACTABLE; as BoolType),
    attrmap_element!(CKA_ALWAYS_SENSITIVE; as BoolType),
    attrmap_element!(CKA_KEY_GEN_MECHANISM; as NumType),
    attrmap_element!(CKA_MODIFIABLE; as BoolType),
    attrmap_element!(CKA_COPYABLE; as BoolType),
    attrmap_element!(CKA_DESTROYABLE; as BoolType),
];

/// An attribute value in safe Rust representation
///
/// The value bytes are owned; numeric values are stored in native
/// endianness as the module would see them through a `CK_ATTRIBUTE`.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Attribute {
    ck_type: CK_ATTRIBUTE_TYPE,
    value: Vec<u8>,
}

impl Attribute {
    /// Returns the attribute type id
    pub fn get_type(&self) -> CK_ATTRIBUTE_TYPE {
        self.ck_type
    }

    /// Returns a reference to the raw value bytes
    pub fn get_value(&self) -> &Vec<u8> {
        &self.value
    }

    /// Returns the attribute's CKA_* constant name, or the hex id when
    /// unknown
    pub fn name(&self) -> String {
        match AttrType::attr_id_to_name(self.ck_type) {
            Some(n) => n.to_string(),
            None => format!("{:#010x}", self.ck_type),
        }
    }

    /// Interprets the value as a CK_BBOOL
    pub fn to_bool(&self) -> Result<bool> {
        if self.value.len() != std::mem::size_of::<CK_BBOOL>() {
            return Err(CKR_ATTRIBUTE_VALUE_INVALID)?;
        }
        Ok(self.value[0] != CK_FALSE)
    }

    /// Interprets the value as a CK_ULONG
    pub fn to_ulong(&self) -> Result<CK_ULONG> {
        if self.value.len() != std::mem::size_of::<CK_ULONG>() {
            return Err(CKR_ATTRIBUTE_VALUE_INVALID)?;
        }
        let mut bytes = [0u8; std::mem::size_of::<CK_ULONG>()];
        bytes.copy_from_slice(&self.value);
        Ok(CK_ULONG::from_ne_bytes(bytes))
    }

    /// Interprets the value as a UTF-8 string
    pub fn to_string(&self) -> Result<String> {
        match std::str::from_utf8(&self.value) {
            Ok(s) => Ok(s.to_string()),
            Err(_) => Err(CKR_ATTRIBUTE_VALUE_INVALID)?,
        }
    }

    /// Creates an attribute from a boolean value
    pub fn from_bool(t: CK_ATTRIBUTE_TYPE, val: bool) -> Attribute {
        Attribute {
            ck_type: t,
            value: vec![if val { CK_TRUE } else { CK_FALSE }],
        }
    }

    /// Creates an attribute from a CK_ULONG value
    pub fn from_ulong(t: CK_ATTRIBUTE_TYPE, val: CK_ULONG) -> Attribute {
        Attribute {
            ck_type: t,
            value: val.to_ne_bytes().to_vec(),
        }
    }

    /// Creates an attribute from a byte vector, taking ownership
    pub fn from_bytes(t: CK_ATTRIBUTE_TYPE, val: Vec<u8>) -> Attribute {
        Attribute {
            ck_type: t,
            value: val,
        }
    }

    /// Creates an attribute from a string value
    pub fn from_string(t: CK_ATTRIBUTE_TYPE, val: String) -> Attribute {
        Attribute {
            ck_type: t,
            value: val.into_bytes(),
        }
    }

    /// Creates an attribute by copying the value a `CK_ATTRIBUTE`
    /// points at
    ///
    /// The pointer and length must describe valid readable memory, this
    /// is the caller's responsibility.
    pub fn from_ck_attr(attr: &CK_ATTRIBUTE) -> Result<Attribute> {
        if attr.pValue.is_null() && attr.ulValueLen != 0 {
            return Err(CKR_ARGUMENTS_BAD)?;
        }
        let len = usize::try_from(attr.ulValueLen)?;
        let value = if len == 0 {
            Vec::new()
        } else {
            unsafe {
                std::slice::from_raw_parts(attr.pValue as *const u8, len)
                    .to_vec()
            }
        };
        Ok(Attribute {
            ck_type: attr.type_,
            value: value,
        })
    }
}

/// Helper object to build managed arrays of CK_ATTRIBUTEs
///
/// All values are copied into storage owned by this object; the
/// CK_ATTRIBUTE elements point into that storage. Growing the array
/// never moves previously stored values, so pointers handed out via
/// [CkAttrs::as_ptr] remain valid until the object is dropped.
#[derive(Debug)]
pub struct CkAttrs {
    /// Storage for the byte buffers backing each attribute value
    v: Vec<Vec<u8>>,
    /// The actual `CK_ATTRIBUTE` array
    p: Vec<CK_ATTRIBUTE>,
}

impl CkAttrs {
    /// Creates a new empty managed array of CK_ATTRIBUTEs
    pub fn new() -> CkAttrs {
        Self::with_capacity(0)
    }

    /// Creates a new empty managed array of CK_ATTRIBUTEs
    /// with the specified capacity
    pub fn with_capacity(capacity: usize) -> CkAttrs {
        CkAttrs {
            v: Vec::with_capacity(capacity),
            p: Vec::with_capacity(capacity),
        }
    }

    /// Builds a generation template from a list of desired attribute
    /// kinds, filling in default values
    ///
    /// Boolean kinds are set to true; `CKA_MODULUS_BITS`,
    /// `CKA_PUBLIC_EXPONENT` and `CKA_LABEL` receive the harness
    /// defaults. A kind the harness cannot size or default is a caller
    /// bug and fails fast with a harness error, never a module status.
    pub fn from_kinds(kinds: &[CK_ATTRIBUTE_TYPE]) -> Result<CkAttrs> {
        let mut attrs = CkAttrs::with_capacity(kinds.len());
        for kind in kinds {
            match AttrType::attr_id_to_attrtype(*kind)? {
                AttrType::BoolType => attrs.add_owned_bool(*kind, CK_TRUE)?,
                AttrType::NumType => match *kind {
                    CKA_MODULUS_BITS => attrs
                        .add_owned_ulong(*kind, DEFAULT_MODULUS_BITS)?,
                    _ => {
                        return Err(Error::not_found(format!(
                            "no default value for {}",
                            AttrType::attr_id_to_name(*kind).unwrap_or("?")
                        )))
                    }
                },
                AttrType::BytesType => match *kind {
                    CKA_PUBLIC_EXPONENT => attrs
                        .add_owned_slice(*kind, &DEFAULT_PUBLIC_EXPONENT)?,
                    _ => {
                        return Err(Error::not_found(format!(
                            "no default value for {}",
                            AttrType::attr_id_to_name(*kind).unwrap_or("?")
                        )))
                    }
                },
                AttrType::StringType => match *kind {
                    CKA_LABEL => attrs
                        .add_owned_slice(*kind, DEFAULT_LABEL.as_bytes())?,
                    _ => {
                        return Err(Error::not_found(format!(
                            "no default value for {}",
                            AttrType::attr_id_to_name(*kind).unwrap_or("?")
                        )))
                    }
                },
            }
        }
        Ok(attrs)
    }

    fn attr_from_last(&self, typ: CK_ATTRIBUTE_TYPE) -> Result<CK_ATTRIBUTE> {
        if let Some(r) = self.v.last() {
            Ok(CK_ATTRIBUTE {
                type_: typ,
                pValue: r.as_ptr() as CK_VOID_PTR,
                ulValueLen: CK_ULONG::try_from(r.len())?,
            })
        } else {
            Err(CKR_GENERAL_ERROR)?
        }
    }

    /// Add a new attribute to the array, the value is a vector of bytes
    ///
    /// The vector ownership is transferred to the array
    pub fn add_vec(
        &mut self,
        typ: CK_ATTRIBUTE_TYPE,
        val: Vec<u8>,
    ) -> Result<()> {
        self.v.push(val);
        let a = self.attr_from_last(typ)?;
        self.p.push(a);
        Ok(())
    }

    /// Add a new attribute to the array, the value is defined as a slice
    ///
    /// This internally copies the slice to an allocated vector
    pub fn add_owned_slice(
        &mut self,
        typ: CK_ATTRIBUTE_TYPE,
        val: &[u8],
    ) -> Result<()> {
        self.add_vec(typ, val.to_vec())
    }

    /// Add a new attribute to the array, the value is a CK_ULONG
    ///
    /// This internally copies the ulong to an allocated vector of bytes
    pub fn add_owned_ulong(
        &mut self,
        typ: CK_ATTRIBUTE_TYPE,
        val: CK_ULONG,
    ) -> Result<()> {
        self.add_vec(typ, val.to_ne_bytes().to_vec())
    }

    /// Add a new attribute to the array, the value is a CK_BBOOL
    ///
    /// This internally copies the bool to an allocated vector of bytes
    pub fn add_owned_bool(
        &mut self,
        typ: CK_ATTRIBUTE_TYPE,
        val: CK_BBOOL,
    ) -> Result<()> {
        self.add_vec(typ, val.to_ne_bytes().to_vec())
    }

    /// Adds a new attribute but only if it does not already exist on
    /// the array, the value is a CK_ULONG
    pub fn add_missing_ulong(
        &mut self,
        typ: CK_ATTRIBUTE_TYPE,
        val: CK_ULONG,
    ) -> Result<()> {
        match self.p.iter().find(|a| a.type_ == typ) {
            Some(_) => Ok(()),
            None => self.add_owned_ulong(typ, val),
        }
    }

    /// Adds a new attribute but only if it does not already exist on
    /// the array, the value is a slice of bytes
    pub fn add_missing_slice(
        &mut self,
        typ: CK_ATTRIBUTE_TYPE,
        val: &[u8],
    ) -> Result<()> {
        match self.p.iter().find(|a| a.type_ == typ) {
            Some(_) => Ok(()),
            None => self.add_owned_slice(typ, val),
        }
    }

    /// Returns the number of elements in the array
    pub fn len(&self) -> usize {
        self.p.len()
    }

    /// Returns whether the array holds no attributes
    pub fn is_empty(&self) -> bool {
        self.p.is_empty()
    }

    /// Returns a pointer to the array of CK_ATTRIBUTEs
    pub fn as_ptr(&self) -> *const CK_ATTRIBUTE {
        self.p.as_ptr()
    }

    /// Returns a mutable pointer to the array of CK_ATTRIBUTEs
    pub fn as_mut_ptr(&mut self) -> *mut CK_ATTRIBUTE {
        self.p.as_mut_ptr()
    }

    /// Returns a reference to the internal CK_ATTRIBUTEs array
    pub fn as_slice(&self) -> &[CK_ATTRIBUTE] {
        &self.p
    }

    /// Finds an attribute by attribute id and return a reference to it
    /// if present, None if not found
    pub fn find_attr(&self, typ: CK_ATTRIBUTE_TYPE) -> Option<&CK_ATTRIBUTE> {
        self.p.iter().find(|a| a.type_ == typ)
    }
}
