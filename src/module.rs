// Copyright 2024 The p11check developers
// See LICENSE.txt file for terms

//! The binding to the module under test.
//!
//! The harness drives a fixed set of named operations with fixed
//! argument shapes; every operation reports its outcome as a bare
//! `CK_RV` status, never as a Rust error. The [Module] trait is that
//! surface. [FuncList] implements it on top of a raw
//! `CK_FUNCTION_LIST` obtained from a module somebody else already
//! loaded; the harness never performs module loading itself.

use std::ffi::{c_void, CStr, CString};

use crate::error::{Error, Result};
use crate::interface::*;

/// The set of module operations the harness exercises.
///
/// Buffered outputs follow the Cryptoki convention: passing no output
/// buffer queries the required length; passing a buffer that is too
/// small fails with `CKR_BUFFER_TOO_SMALL` and reports the required
/// length, leaving any active operation state intact for a retry. In
/// all cases `output_len` receives the length the module reported.
pub trait Module {
    /// C_GenerateKeyPair
    fn generate_key_pair(
        &self,
        session: CK_SESSION_HANDLE,
        mechanism: &CK_MECHANISM,
        public_template: &[CK_ATTRIBUTE],
        private_template: &[CK_ATTRIBUTE],
        public_key: &mut CK_OBJECT_HANDLE,
        private_key: &mut CK_OBJECT_HANDLE,
    ) -> CK_RV;

    /// C_DestroyObject
    fn destroy_object(
        &self,
        session: CK_SESSION_HANDLE,
        object: CK_OBJECT_HANDLE,
    ) -> CK_RV;

    /// C_GetAttributeValue
    ///
    /// The template entries are updated in place: value lengths always,
    /// value bytes when a buffer pointer was supplied.
    fn get_attribute_value(
        &self,
        session: CK_SESSION_HANDLE,
        object: CK_OBJECT_HANDLE,
        template: &mut [CK_ATTRIBUTE],
    ) -> CK_RV;

    /// C_EncryptInit
    fn encrypt_init(
        &self,
        session: CK_SESSION_HANDLE,
        mechanism: &CK_MECHANISM,
        key: CK_OBJECT_HANDLE,
    ) -> CK_RV;

    /// C_Encrypt (one-shot)
    fn encrypt(
        &self,
        session: CK_SESSION_HANDLE,
        data: &[u8],
        output: Option<&mut [u8]>,
        output_len: &mut CK_ULONG,
    ) -> CK_RV;

    /// C_DecryptInit
    fn decrypt_init(
        &self,
        session: CK_SESSION_HANDLE,
        mechanism: &CK_MECHANISM,
        key: CK_OBJECT_HANDLE,
    ) -> CK_RV;

    /// C_Decrypt (one-shot)
    fn decrypt(
        &self,
        session: CK_SESSION_HANDLE,
        data: &[u8],
        output: Option<&mut [u8]>,
        output_len: &mut CK_ULONG,
    ) -> CK_RV;
}

/// Returns the last dynamic linker error as a printable string
pub fn dl_error() -> String {
    let cstr = unsafe { libc::dlerror() };
    if cstr.is_null() {
        String::from("<none>")
    } else {
        unsafe {
            String::from_utf8_lossy(CStr::from_ptr(cstr).to_bytes()).to_string()
        }
    }
}

/// A loaded module's function table.
///
/// The table pointer must stay valid for the lifetime of this object;
/// it is owned by the module library, which the embedding fixture keeps
/// loaded for the duration of the test run.
pub struct FuncList {
    fntable: *mut CK_FUNCTION_LIST,
}

macro_rules! fn_or_unsupported {
    ($list:expr, $name:ident) => {
        match unsafe { (*$list.fntable).$name } {
            Some(func) => func,
            None => return CKR_FUNCTION_NOT_SUPPORTED,
        }
    };
}

impl FuncList {
    /// Wraps a function table pointer previously obtained from the
    /// module's `C_GetFunctionList`
    pub fn from_ptr(fntable: *mut CK_FUNCTION_LIST) -> Result<FuncList> {
        if fntable.is_null() {
            return Err(CKR_ARGUMENTS_BAD)?;
        }
        Ok(FuncList { fntable: fntable })
    }

    /// Resolves the named `C_GetFunctionList` style symbol on an
    /// already dlopen-ed library handle and fetches the table from it
    pub fn from_symbol_name(
        handle: *mut c_void,
        name: &str,
    ) -> Result<FuncList> {
        let fname = match CString::new(name) {
            Ok(n) => n,
            Err(_) => return Err(CKR_ARGUMENTS_BAD)?,
        };
        let list_fn: CK_C_GetFunctionList = unsafe {
            let ptr = libc::dlsym(handle, fname.as_ptr());
            if ptr.is_null() {
                None
            } else {
                Some(std::mem::transmute::<
                    *mut c_void,
                    unsafe extern "C" fn(
                        *mut *mut CK_FUNCTION_LIST,
                    ) -> CK_RV,
                >(ptr))
            }
        };
        let mut fn_list: *mut CK_FUNCTION_LIST = std::ptr::null_mut();
        let rv = match list_fn {
            None => {
                return Err(Error::ck_rv_with_errmsg(
                    CKR_GENERAL_ERROR,
                    dl_error(),
                ));
            }
            Some(func) => unsafe { func(&mut fn_list) },
        };
        if rv != CKR_OK {
            return Err(Error::ck_rv_with_errmsg(
                rv,
                format!("Failed to load pkcs11 function list: {}", rv),
            ));
        }
        FuncList::from_ptr(fn_list)
    }

    /// Returns the Cryptoki version the module's table declares
    pub fn version(&self) -> CK_VERSION {
        unsafe { (*self.fntable).version }
    }
}

impl Module for FuncList {
    fn generate_key_pair(
        &self,
        session: CK_SESSION_HANDLE,
        mechanism: &CK_MECHANISM,
        public_template: &[CK_ATTRIBUTE],
        private_template: &[CK_ATTRIBUTE],
        public_key: &mut CK_OBJECT_HANDLE,
        private_key: &mut CK_OBJECT_HANDLE,
    ) -> CK_RV {
        let func = fn_or_unsupported!(self, C_GenerateKeyPair);
        unsafe {
            func(
                session,
                mechanism as *const _ as CK_MECHANISM_PTR,
                public_template.as_ptr() as CK_ATTRIBUTE_PTR,
                public_template.len() as CK_ULONG,
                private_template.as_ptr() as CK_ATTRIBUTE_PTR,
                private_template.len() as CK_ULONG,
                public_key,
                private_key,
            )
        }
    }

    fn destroy_object(
        &self,
        session: CK_SESSION_HANDLE,
        object: CK_OBJECT_HANDLE,
    ) -> CK_RV {
        let func = fn_or_unsupported!(self, C_DestroyObject);
        unsafe { func(session, object) }
    }

    fn get_attribute_value(
        &self,
        session: CK_SESSION_HANDLE,
        object: CK_OBJECT_HANDLE,
        template: &mut [CK_ATTRIBUTE],
    ) -> CK_RV {
        let func = fn_or_unsupported!(self, C_GetAttributeValue);
        unsafe {
            func(
                session,
                object,
                template.as_mut_ptr(),
                template.len() as CK_ULONG,
            )
        }
    }

    fn encrypt_init(
        &self,
        session: CK_SESSION_HANDLE,
        mechanism: &CK_MECHANISM,
        key: CK_OBJECT_HANDLE,
    ) -> CK_RV {
        let func = fn_or_unsupported!(self, C_EncryptInit);
        unsafe { func(session, mechanism as *const _ as CK_MECHANISM_PTR, key) }
    }

    fn encrypt(
        &self,
        session: CK_SESSION_HANDLE,
        data: &[u8],
        output: Option<&mut [u8]>,
        output_len: &mut CK_ULONG,
    ) -> CK_RV {
        let func = fn_or_unsupported!(self, C_Encrypt);
        let (ptr, mut len) = match output {
            Some(buf) => (buf.as_mut_ptr(), buf.len() as CK_ULONG),
            None => (std::ptr::null_mut(), 0),
        };
        let rv = unsafe {
            func(
                session,
                data.as_ptr() as *mut u8,
                data.len() as CK_ULONG,
                ptr,
                &mut len,
            )
        };
        *output_len = len;
        rv
    }

    fn decrypt_init(
        &self,
        session: CK_SESSION_HANDLE,
        mechanism: &CK_MECHANISM,
        key: CK_OBJECT_HANDLE,
    ) -> CK_RV {
        let func = fn_or_unsupported!(self, C_DecryptInit);
        unsafe { func(session, mechanism as *const _ as CK_MECHANISM_PTR, key) }
    }

    fn decrypt(
        &self,
        session: CK_SESSION_HANDLE,
        data: &[u8],
        output: Option<&mut [u8]>,
        output_len: &mut CK_ULONG,
    ) -> CK_RV {
        let func = fn_or_unsupported!(self, C_Decrypt);
        let (ptr, mut len) = match output {
            Some(buf) => (buf.as_mut_ptr(), buf.len() as CK_ULONG),
            None => (std::ptr::null_mut(), 0),
        };
        let rv = unsafe {
            func(
                session,
                data.as_ptr() as *mut u8,
                data.len() as CK_ULONG,
                ptr,
                &mut len,
            )
        };
        *output_len = len;
        rv
    }
}
