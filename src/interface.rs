// Copyright 2024 The p11check developers
// See LICENSE.txt file for terms

//! Hand-maintained PKCS#11 v2.40 type and constant definitions.
//!
//! This module carries the subset of the Cryptoki interface the harness
//! drives. The layout of `CK_ATTRIBUTE`, `CK_MECHANISM` and
//! `CK_FUNCTION_LIST` is ABI compatible with the OASIS headers so a
//! `CK_FUNCTION_LIST` pointer obtained from a loaded module can be used
//! directly.

#![allow(missing_docs)]
#![allow(non_camel_case_types)]
#![allow(non_snake_case)]
#![allow(non_upper_case_globals)]

use std::os::raw::{c_ulong, c_void};

pub type CK_BYTE = u8;
pub type CK_CHAR = CK_BYTE;
pub type CK_UTF8CHAR = CK_BYTE;
pub type CK_BBOOL = CK_BYTE;
pub type CK_ULONG = c_ulong;
pub type CK_LONG = std::os::raw::c_long;
pub type CK_FLAGS = CK_ULONG;

pub type CK_RV = CK_ULONG;
pub type CK_SLOT_ID = CK_ULONG;
pub type CK_SESSION_HANDLE = CK_ULONG;
pub type CK_OBJECT_HANDLE = CK_ULONG;
pub type CK_OBJECT_CLASS = CK_ULONG;
pub type CK_KEY_TYPE = CK_ULONG;
pub type CK_ATTRIBUTE_TYPE = CK_ULONG;
pub type CK_MECHANISM_TYPE = CK_ULONG;
pub type CK_USER_TYPE = CK_ULONG;
pub type CK_STATE = CK_ULONG;
pub type CK_NOTIFICATION = CK_ULONG;

pub type CK_VOID_PTR = *mut c_void;
pub type CK_BYTE_PTR = *mut CK_BYTE;
pub type CK_UTF8CHAR_PTR = *mut CK_UTF8CHAR;
pub type CK_ULONG_PTR = *mut CK_ULONG;
pub type CK_SLOT_ID_PTR = *mut CK_SLOT_ID;
pub type CK_SESSION_HANDLE_PTR = *mut CK_SESSION_HANDLE;
pub type CK_OBJECT_HANDLE_PTR = *mut CK_OBJECT_HANDLE;
pub type CK_MECHANISM_TYPE_PTR = *mut CK_MECHANISM_TYPE;

pub const CK_TRUE: CK_BBOOL = 1;
pub const CK_FALSE: CK_BBOOL = 0;

pub const CK_INVALID_HANDLE: CK_ULONG = 0;
// this is wrongly converted on 32b architecture to too large value
// which can not be represented in CK_ULONG.
pub const CK_UNAVAILABLE_INFORMATION: CK_ULONG = CK_ULONG::MAX;

#[repr(C)]
#[derive(Debug, Copy, Clone, Default)]
pub struct CK_VERSION {
    pub major: CK_BYTE,
    pub minor: CK_BYTE,
}

#[repr(C)]
#[derive(Debug, Copy, Clone)]
pub struct CK_ATTRIBUTE {
    pub type_: CK_ATTRIBUTE_TYPE,
    pub pValue: CK_VOID_PTR,
    pub ulValueLen: CK_ULONG,
}
pub type CK_ATTRIBUTE_PTR = *mut CK_ATTRIBUTE;

#[repr(C)]
#[derive(Debug, Copy, Clone)]
pub struct CK_MECHANISM {
    pub mechanism: CK_MECHANISM_TYPE,
    pub pParameter: CK_VOID_PTR,
    pub ulParameterLen: CK_ULONG,
}
pub type CK_MECHANISM_PTR = *mut CK_MECHANISM;

#[repr(C)]
#[derive(Debug, Copy, Clone)]
pub struct CK_INFO {
    pub cryptokiVersion: CK_VERSION,
    pub manufacturerID: [CK_UTF8CHAR; 32],
    pub flags: CK_FLAGS,
    pub libraryDescription: [CK_UTF8CHAR; 32],
    pub libraryVersion: CK_VERSION,
}
pub type CK_INFO_PTR = *mut CK_INFO;

#[repr(C)]
#[derive(Debug, Copy, Clone)]
pub struct CK_SLOT_INFO {
    pub slotDescription: [CK_UTF8CHAR; 64],
    pub manufacturerID: [CK_UTF8CHAR; 32],
    pub flags: CK_FLAGS,
    pub hardwareVersion: CK_VERSION,
    pub firmwareVersion: CK_VERSION,
}
pub type CK_SLOT_INFO_PTR = *mut CK_SLOT_INFO;

#[repr(C)]
#[derive(Debug, Copy, Clone)]
pub struct CK_TOKEN_INFO {
    pub label: [CK_UTF8CHAR; 32],
    pub manufacturerID: [CK_UTF8CHAR; 32],
    pub model: [CK_UTF8CHAR; 16],
    pub serialNumber: [CK_CHAR; 16],
    pub flags: CK_FLAGS,
    pub ulMaxSessionCount: CK_ULONG,
    pub ulSessionCount: CK_ULONG,
    pub ulMaxRwSessionCount: CK_ULONG,
    pub ulRwSessionCount: CK_ULONG,
    pub ulMaxPinLen: CK_ULONG,
    pub ulMinPinLen: CK_ULONG,
    pub ulTotalPublicMemory: CK_ULONG,
    pub ulFreePublicMemory: CK_ULONG,
    pub ulTotalPrivateMemory: CK_ULONG,
    pub ulFreePrivateMemory: CK_ULONG,
    pub hardwareVersion: CK_VERSION,
    pub firmwareVersion: CK_VERSION,
    pub utcTime: [CK_CHAR; 16],
}
pub type CK_TOKEN_INFO_PTR = *mut CK_TOKEN_INFO;

#[repr(C)]
#[derive(Debug, Copy, Clone, Default)]
pub struct CK_SESSION_INFO {
    pub slotID: CK_SLOT_ID,
    pub state: CK_STATE,
    pub flags: CK_FLAGS,
    pub ulDeviceError: CK_ULONG,
}
pub type CK_SESSION_INFO_PTR = *mut CK_SESSION_INFO;

#[repr(C)]
#[derive(Debug, Copy, Clone, Default)]
pub struct CK_MECHANISM_INFO {
    pub ulMinKeySize: CK_ULONG,
    pub ulMaxKeySize: CK_ULONG,
    pub flags: CK_FLAGS,
}
pub type CK_MECHANISM_INFO_PTR = *mut CK_MECHANISM_INFO;

pub type CK_CREATEMUTEX =
    Option<unsafe extern "C" fn(ppMutex: *mut CK_VOID_PTR) -> CK_RV>;
pub type CK_DESTROYMUTEX =
    Option<unsafe extern "C" fn(pMutex: CK_VOID_PTR) -> CK_RV>;
pub type CK_LOCKMUTEX =
    Option<unsafe extern "C" fn(pMutex: CK_VOID_PTR) -> CK_RV>;
pub type CK_UNLOCKMUTEX =
    Option<unsafe extern "C" fn(pMutex: CK_VOID_PTR) -> CK_RV>;

#[repr(C)]
#[derive(Debug, Copy, Clone)]
pub struct CK_C_INITIALIZE_ARGS {
    pub CreateMutex: CK_CREATEMUTEX,
    pub DestroyMutex: CK_DESTROYMUTEX,
    pub LockMutex: CK_LOCKMUTEX,
    pub UnlockMutex: CK_UNLOCKMUTEX,
    pub flags: CK_FLAGS,
    pub pReserved: CK_VOID_PTR,
}

pub type CK_NOTIFY = Option<
    unsafe extern "C" fn(
        hSession: CK_SESSION_HANDLE,
        event: CK_NOTIFICATION,
        pApplication: CK_VOID_PTR,
    ) -> CK_RV,
>;

/* Object classes */
pub const CKO_DATA: CK_OBJECT_CLASS = 0x00000000;
pub const CKO_CERTIFICATE: CK_OBJECT_CLASS = 0x00000001;
pub const CKO_PUBLIC_KEY: CK_OBJECT_CLASS = 0x00000002;
pub const CKO_PRIVATE_KEY: CK_OBJECT_CLASS = 0x00000003;
pub const CKO_SECRET_KEY: CK_OBJECT_CLASS = 0x00000004;

/* Key types */
pub const CKK_RSA: CK_KEY_TYPE = 0x00000000;
pub const CKK_EC: CK_KEY_TYPE = 0x00000003;
pub const CKK_GENERIC_SECRET: CK_KEY_TYPE = 0x00000010;
pub const CKK_AES: CK_KEY_TYPE = 0x0000001f;

/* Attributes */
pub const CKA_CLASS: CK_ATTRIBUTE_TYPE = 0x00000000;
pub const CKA_TOKEN: CK_ATTRIBUTE_TYPE = 0x00000001;
pub const CKA_PRIVATE: CK_ATTRIBUTE_TYPE = 0x00000002;
pub const CKA_LABEL: CK_ATTRIBUTE_TYPE = 0x00000003;
pub const CKA_UNIQUE_ID: CK_ATTRIBUTE_TYPE = 0x00000004;
pub const CKA_APPLICATION: CK_ATTRIBUTE_TYPE = 0x00000010;
pub const CKA_VALUE: CK_ATTRIBUTE_TYPE = 0x00000011;
pub const CKA_OBJECT_ID: CK_ATTRIBUTE_TYPE = 0x00000012;
pub const CKA_KEY_TYPE: CK_ATTRIBUTE_TYPE = 0x00000100;
pub const CKA_SUBJECT: CK_ATTRIBUTE_TYPE = 0x00000101;
pub const CKA_ID: CK_ATTRIBUTE_TYPE = 0x00000102;
pub const CKA_SENSITIVE: CK_ATTRIBUTE_TYPE = 0x00000103;
pub const CKA_ENCRYPT: CK_ATTRIBUTE_TYPE = 0x00000104;
pub const CKA_DECRYPT: CK_ATTRIBUTE_TYPE = 0x00000105;
pub const CKA_WRAP: CK_ATTRIBUTE_TYPE = 0x00000106;
pub const CKA_UNWRAP: CK_ATTRIBUTE_TYPE = 0x00000107;
pub const CKA_SIGN: CK_ATTRIBUTE_TYPE = 0x00000108;
pub const CKA_SIGN_RECOVER: CK_ATTRIBUTE_TYPE = 0x00000109;
pub const CKA_VERIFY: CK_ATTRIBUTE_TYPE = 0x0000010a;
pub const CKA_VERIFY_RECOVER: CK_ATTRIBUTE_TYPE = 0x0000010b;
pub const CKA_DERIVE: CK_ATTRIBUTE_TYPE = 0x0000010c;
pub const CKA_START_DATE: CK_ATTRIBUTE_TYPE = 0x00000110;
pub const CKA_END_DATE: CK_ATTRIBUTE_TYPE = 0x00000111;
pub const CKA_MODULUS: CK_ATTRIBUTE_TYPE = 0x00000120;
pub const CKA_MODULUS_BITS: CK_ATTRIBUTE_TYPE = 0x00000121;
pub const CKA_PUBLIC_EXPONENT: CK_ATTRIBUTE_TYPE = 0x00000122;
pub const CKA_PRIVATE_EXPONENT: CK_ATTRIBUTE_TYPE = 0x00000123;
pub const CKA_PRIME_1: CK_ATTRIBUTE_TYPE = 0x00000124;
pub const CKA_PRIME_2: CK_ATTRIBUTE_TYPE = 0x00000125;
pub const CKA_EXPONENT_1: CK_ATTRIBUTE_TYPE = 0x00000126;
pub const CKA_EXPONENT_2: CK_ATTRIBUTE_TYPE = 0x00000127;
pub const CKA_COEFFICIENT: CK_ATTRIBUTE_TYPE = 0x00000128;
pub const CKA_PUBLIC_KEY_INFO: CK_ATTRIBUTE_TYPE = 0x00000129;
pub const CKA_VALUE_LEN: CK_ATTRIBUTE_TYPE = 0x00000161;
pub const CKA_EXTRACTABLE: CK_ATTRIBUTE_TYPE = 0x00000162;
pub const CKA_LOCAL: CK_ATTRIBUTE_TYPE = 0x00000163;
pub const CKA_NEVER_EXTRACTABLE: CK_ATTRIBUTE_TYPE = 0x00000164;
pub const CKA_ALWAYS_SENSITIVE: CK_ATTRIBUTE_TYPE = 0x00000165;
pub const CKA_KEY_GEN_MECHANISM: CK_ATTRIBUTE_TYPE = 0x00000166;
pub const CKA_MODIFIABLE: CK_ATTRIBUTE_TYPE = 0x00000170;
pub const CKA_COPYABLE: CK_ATTRIBUTE_TYPE = 0x00000171;
pub const CKA_DESTROYABLE: CK_ATTRIBUTE_TYPE = 0x00000172;

/* Mechanisms */
pub const CKM_RSA_PKCS_KEY_PAIR_GEN: CK_MECHANISM_TYPE = 0x00000000;
pub const CKM_RSA_PKCS: CK_MECHANISM_TYPE = 0x00000001;
pub const CKM_RSA_9796: CK_MECHANISM_TYPE = 0x00000002;
pub const CKM_RSA_X_509: CK_MECHANISM_TYPE = 0x00000003;
pub const CKM_RSA_PKCS_OAEP: CK_MECHANISM_TYPE = 0x00000009;

/* Session flags */
pub const CKF_TOKEN_PRESENT: CK_FLAGS = 0x00000001;
pub const CKF_RW_SESSION: CK_FLAGS = 0x00000002;
pub const CKF_SERIAL_SESSION: CK_FLAGS = 0x00000004;

/* C_Initialize flags */
pub const CKF_LIBRARY_CANT_CREATE_OS_THREADS: CK_FLAGS = 0x00000001;
pub const CKF_OS_LOCKING_OK: CK_FLAGS = 0x00000002;

/* User types */
pub const CKU_SO: CK_USER_TYPE = 0;
pub const CKU_USER: CK_USER_TYPE = 1;
pub const CKU_CONTEXT_SPECIFIC: CK_USER_TYPE = 2;

/* Return values */
pub const CKR_OK: CK_RV = 0x00000000;
pub const CKR_CANCEL: CK_RV = 0x00000001;
pub const CKR_HOST_MEMORY: CK_RV = 0x00000002;
pub const CKR_SLOT_ID_INVALID: CK_RV = 0x00000003;
pub const CKR_GENERAL_ERROR: CK_RV = 0x00000005;
pub const CKR_FUNCTION_FAILED: CK_RV = 0x00000006;
pub const CKR_ARGUMENTS_BAD: CK_RV = 0x00000007;
pub const CKR_ATTRIBUTE_READ_ONLY: CK_RV = 0x00000010;
pub const CKR_ATTRIBUTE_SENSITIVE: CK_RV = 0x00000011;
pub const CKR_ATTRIBUTE_TYPE_INVALID: CK_RV = 0x00000012;
pub const CKR_ATTRIBUTE_VALUE_INVALID: CK_RV = 0x00000013;
pub const CKR_ACTION_PROHIBITED: CK_RV = 0x0000001b;
pub const CKR_DATA_INVALID: CK_RV = 0x00000020;
pub const CKR_DATA_LEN_RANGE: CK_RV = 0x00000021;
pub const CKR_DEVICE_ERROR: CK_RV = 0x00000030;
pub const CKR_DEVICE_MEMORY: CK_RV = 0x00000031;
pub const CKR_DEVICE_REMOVED: CK_RV = 0x00000032;
pub const CKR_ENCRYPTED_DATA_INVALID: CK_RV = 0x00000040;
pub const CKR_ENCRYPTED_DATA_LEN_RANGE: CK_RV = 0x00000041;
pub const CKR_FUNCTION_CANCELED: CK_RV = 0x00000050;
pub const CKR_FUNCTION_NOT_SUPPORTED: CK_RV = 0x00000054;
pub const CKR_KEY_HANDLE_INVALID: CK_RV = 0x00000060;
pub const CKR_KEY_SIZE_RANGE: CK_RV = 0x00000062;
pub const CKR_KEY_TYPE_INCONSISTENT: CK_RV = 0x00000063;
pub const CKR_KEY_FUNCTION_NOT_PERMITTED: CK_RV = 0x00000068;
pub const CKR_MECHANISM_INVALID: CK_RV = 0x00000070;
pub const CKR_MECHANISM_PARAM_INVALID: CK_RV = 0x00000071;
pub const CKR_OBJECT_HANDLE_INVALID: CK_RV = 0x00000082;
pub const CKR_OPERATION_ACTIVE: CK_RV = 0x00000090;
pub const CKR_OPERATION_NOT_INITIALIZED: CK_RV = 0x00000091;
pub const CKR_PIN_INCORRECT: CK_RV = 0x000000a0;
pub const CKR_PIN_INVALID: CK_RV = 0x000000a1;
pub const CKR_PIN_LEN_RANGE: CK_RV = 0x000000a2;
pub const CKR_PIN_EXPIRED: CK_RV = 0x000000a3;
pub const CKR_PIN_LOCKED: CK_RV = 0x000000a4;
pub const CKR_SESSION_CLOSED: CK_RV = 0x000000b0;
pub const CKR_SESSION_COUNT: CK_RV = 0x000000b1;
pub const CKR_SESSION_HANDLE_INVALID: CK_RV = 0x000000b3;
pub const CKR_SESSION_PARALLEL_NOT_SUPPORTED: CK_RV = 0x000000b4;
pub const CKR_SESSION_READ_ONLY: CK_RV = 0x000000b5;
pub const CKR_SESSION_EXISTS: CK_RV = 0x000000b6;
pub const CKR_SESSION_READ_ONLY_EXISTS: CK_RV = 0x000000b7;
pub const CKR_SESSION_READ_WRITE_SO_EXISTS: CK_RV = 0x000000b8;
pub const CKR_TEMPLATE_INCOMPLETE: CK_RV = 0x000000d0;
pub const CKR_TEMPLATE_INCONSISTENT: CK_RV = 0x000000d1;
pub const CKR_TOKEN_NOT_PRESENT: CK_RV = 0x000000e0;
pub const CKR_TOKEN_NOT_RECOGNIZED: CK_RV = 0x000000e1;
pub const CKR_USER_ALREADY_LOGGED_IN: CK_RV = 0x00000100;
pub const CKR_USER_NOT_LOGGED_IN: CK_RV = 0x00000101;
pub const CKR_USER_PIN_NOT_INITIALIZED: CK_RV = 0x00000102;
pub const CKR_USER_TYPE_INVALID: CK_RV = 0x00000103;
pub const CKR_USER_ANOTHER_ALREADY_LOGGED_IN: CK_RV = 0x00000104;
pub const CKR_BUFFER_TOO_SMALL: CK_RV = 0x00000150;
pub const CKR_SAVED_STATE_INVALID: CK_RV = 0x00000160;
pub const CKR_INFORMATION_SENSITIVE: CK_RV = 0x00000170;
pub const CKR_STATE_UNSAVEABLE: CK_RV = 0x00000180;
pub const CKR_CRYPTOKI_NOT_INITIALIZED: CK_RV = 0x00000190;
pub const CKR_CRYPTOKI_ALREADY_INITIALIZED: CK_RV = 0x00000191;
pub const CKR_MUTEX_BAD: CK_RV = 0x000001a0;
pub const CKR_MUTEX_NOT_LOCKED: CK_RV = 0x000001a1;

/// The complete PKCS#11 v2.40 function table.
///
/// Field order matches the OASIS `CK_FUNCTION_LIST` declaration; the
/// harness only ever calls a handful of entries but the whole table must
/// be declared for the pointer arithmetic to come out right.
#[repr(C)]
#[derive(Copy, Clone)]
pub struct CK_FUNCTION_LIST {
    pub version: CK_VERSION,
    pub C_Initialize:
        Option<unsafe extern "C" fn(pInitArgs: CK_VOID_PTR) -> CK_RV>,
    pub C_Finalize:
        Option<unsafe extern "C" fn(pReserved: CK_VOID_PTR) -> CK_RV>,
    pub C_GetInfo: Option<unsafe extern "C" fn(pInfo: CK_INFO_PTR) -> CK_RV>,
    pub C_GetFunctionList: Option<
        unsafe extern "C" fn(
            ppFunctionList: *mut *mut CK_FUNCTION_LIST,
        ) -> CK_RV,
    >,
    pub C_GetSlotList: Option<
        unsafe extern "C" fn(
            tokenPresent: CK_BBOOL,
            pSlotList: CK_SLOT_ID_PTR,
            pulCount: CK_ULONG_PTR,
        ) -> CK_RV,
    >,
    pub C_GetSlotInfo: Option<
        unsafe extern "C" fn(
            slotID: CK_SLOT_ID,
            pInfo: CK_SLOT_INFO_PTR,
        ) -> CK_RV,
    >,
    pub C_GetTokenInfo: Option<
        unsafe extern "C" fn(
            slotID: CK_SLOT_ID,
            pInfo: CK_TOKEN_INFO_PTR,
        ) -> CK_RV,
    >,
    pub C_GetMechanismList: Option<
        unsafe extern "C" fn(
            slotID: CK_SLOT_ID,
            pMechanismList: CK_MECHANISM_TYPE_PTR,
            pulCount: CK_ULONG_PTR,
        ) -> CK_RV,
    >,
    pub C_GetMechanismInfo: Option<
        unsafe extern "C" fn(
            slotID: CK_SLOT_ID,
            type_: CK_MECHANISM_TYPE,
            pInfo: CK_MECHANISM_INFO_PTR,
        ) -> CK_RV,
    >,
    pub C_InitToken: Option<
        unsafe extern "C" fn(
            slotID: CK_SLOT_ID,
            pPin: CK_UTF8CHAR_PTR,
            ulPinLen: CK_ULONG,
            pLabel: CK_UTF8CHAR_PTR,
        ) -> CK_RV,
    >,
    pub C_InitPIN: Option<
        unsafe extern "C" fn(
            hSession: CK_SESSION_HANDLE,
            pPin: CK_UTF8CHAR_PTR,
            ulPinLen: CK_ULONG,
        ) -> CK_RV,
    >,
    pub C_SetPIN: Option<
        unsafe extern "C" fn(
            hSession: CK_SESSION_HANDLE,
            pOldPin: CK_UTF8CHAR_PTR,
            ulOldLen: CK_ULONG,
            pNewPin: CK_UTF8CHAR_PTR,
            ulNewLen: CK_ULONG,
        ) -> CK_RV,
    >,
    pub C_OpenSession: Option<
        unsafe extern "C" fn(
            slotID: CK_SLOT_ID,
            flags: CK_FLAGS,
            pApplication: CK_VOID_PTR,
            Notify: CK_NOTIFY,
            phSession: CK_SESSION_HANDLE_PTR,
        ) -> CK_RV,
    >,
    pub C_CloseSession:
        Option<unsafe extern "C" fn(hSession: CK_SESSION_HANDLE) -> CK_RV>,
    pub C_CloseAllSessions:
        Option<unsafe extern "C" fn(slotID: CK_SLOT_ID) -> CK_RV>,
    pub C_GetSessionInfo: Option<
        unsafe extern "C" fn(
            hSession: CK_SESSION_HANDLE,
            pInfo: CK_SESSION_INFO_PTR,
        ) -> CK_RV,
    >,
    pub C_GetOperationState: Option<
        unsafe extern "C" fn(
            hSession: CK_SESSION_HANDLE,
            pOperationState: CK_BYTE_PTR,
            pulOperationStateLen: CK_ULONG_PTR,
        ) -> CK_RV,
    >,
    pub C_SetOperationState: Option<
        unsafe extern "C" fn(
            hSession: CK_SESSION_HANDLE,
            pOperationState: CK_BYTE_PTR,
            ulOperationStateLen: CK_ULONG,
            hEncryptionKey: CK_OBJECT_HANDLE,
            hAuthenticationKey: CK_OBJECT_HANDLE,
        ) -> CK_RV,
    >,
    pub C_Login: Option<
        unsafe extern "C" fn(
            hSession: CK_SESSION_HANDLE,
            userType: CK_USER_TYPE,
            pPin: CK_UTF8CHAR_PTR,
            ulPinLen: CK_ULONG,
        ) -> CK_RV,
    >,
    pub C_Logout:
        Option<unsafe extern "C" fn(hSession: CK_SESSION_HANDLE) -> CK_RV>,
    pub C_CreateObject: Option<
        unsafe extern "C" fn(
            hSession: CK_SESSION_HANDLE,
            pTemplate: CK_ATTRIBUTE_PTR,
            ulCount: CK_ULONG,
            phObject: CK_OBJECT_HANDLE_PTR,
        ) -> CK_RV,
    >,
    pub C_CopyObject: Option<
        unsafe extern "C" fn(
            hSession: CK_SESSION_HANDLE,
            hObject: CK_OBJECT_HANDLE,
            pTemplate: CK_ATTRIBUTE_PTR,
            ulCount: CK_ULONG,
            phNewObject: CK_OBJECT_HANDLE_PTR,
        ) -> CK_RV,
    >,
    pub C_DestroyObject: Option<
        unsafe extern "C" fn(
            hSession: CK_SESSION_HANDLE,
            hObject: CK_OBJECT_HANDLE,
        ) -> CK_RV,
    >,
    pub C_GetObjectSize: Option<
        unsafe extern "C" fn(
            hSession: CK_SESSION_HANDLE,
            hObject: CK_OBJECT_HANDLE,
            pulSize: CK_ULONG_PTR,
        ) -> CK_RV,
    >,
    pub C_GetAttributeValue: Option<
        unsafe extern "C" fn(
            hSession: CK_SESSION_HANDLE,
            hObject: CK_OBJECT_HANDLE,
            pTemplate: CK_ATTRIBUTE_PTR,
            ulCount: CK_ULONG,
        ) -> CK_RV,
    >,
    pub C_SetAttributeValue: Option<
        unsafe extern "C" fn(
            hSession: CK_SESSION_HANDLE,
            hObject: CK_OBJECT_HANDLE,
            pTemplate: CK_ATTRIBUTE_PTR,
            ulCount: CK_ULONG,
        ) -> CK_RV,
    >,
    pub C_FindObjectsInit: Option<
        unsafe extern "C" fn(
            hSession: CK_SESSION_HANDLE,
            pTemplate: CK_ATTRIBUTE_PTR,
            ulCount: CK_ULONG,
        ) -> CK_RV,
    >,
    pub C_FindObjects: Option<
        unsafe extern "C" fn(
            hSession: CK_SESSION_HANDLE,
            phObject: CK_OBJECT_HANDLE_PTR,
            ulMaxObjectCount: CK_ULONG,
            pulObjectCount: CK_ULONG_PTR,
        ) -> CK_RV,
    >,
    pub C_FindObjectsFinal:
        Option<unsafe extern "C" fn(hSession: CK_SESSION_HANDLE) -> CK_RV>,
    pub C_EncryptInit: Option<
        unsafe extern "C" fn(
            hSession: CK_SESSION_HANDLE,
            pMechanism: CK_MECHANISM_PTR,
            hKey: CK_OBJECT_HANDLE,
        ) -> CK_RV,
    >,
    pub C_Encrypt: Option<
        unsafe extern "C" fn(
            hSession: CK_SESSION_HANDLE,
            pData: CK_BYTE_PTR,
            ulDataLen: CK_ULONG,
            pEncryptedData: CK_BYTE_PTR,
            pulEncryptedDataLen: CK_ULONG_PTR,
        ) -> CK_RV,
    >,
    pub C_EncryptUpdate: Option<
        unsafe extern "C" fn(
            hSession: CK_SESSION_HANDLE,
            pPart: CK_BYTE_PTR,
            ulPartLen: CK_ULONG,
            pEncryptedPart: CK_BYTE_PTR,
            pulEncryptedPartLen: CK_ULONG_PTR,
        ) -> CK_RV,
    >,
    pub C_EncryptFinal: Option<
        unsafe extern "C" fn(
            hSession: CK_SESSION_HANDLE,
            pLastEncryptedPart: CK_BYTE_PTR,
            pulLastEncryptedPartLen: CK_ULONG_PTR,
        ) -> CK_RV,
    >,
    pub C_DecryptInit: Option<
        unsafe extern "C" fn(
            hSession: CK_SESSION_HANDLE,
            pMechanism: CK_MECHANISM_PTR,
            hKey: CK_OBJECT_HANDLE,
        ) -> CK_RV,
    >,
    pub C_Decrypt: Option<
        unsafe extern "C" fn(
            hSession: CK_SESSION_HANDLE,
            pEncryptedData: CK_BYTE_PTR,
            ulEncryptedDataLen: CK_ULONG,
            pData: CK_BYTE_PTR,
            pulDataLen: CK_ULONG_PTR,
        ) -> CK_RV,
    >,
    pub C_DecryptUpdate: Option<
        unsafe extern "C" fn(
            hSession: CK_SESSION_HANDLE,
            pEncryptedPart: CK_BYTE_PTR,
            ulEncryptedPartLen: CK_ULONG,
            pPart: CK_BYTE_PTR,
            pulPartLen: CK_ULONG_PTR,
        ) -> CK_RV,
    >,
    pub C_DecryptFinal: Option<
        unsafe extern "C" fn(
            hSession: CK_SESSION_HANDLE,
            pLastPart: CK_BYTE_PTR,
            pulLastPartLen: CK_ULONG_PTR,
        ) -> CK_RV,
    >,
    pub C_DigestInit: Option<
        unsafe extern "C" fn(
            hSession: CK_SESSION_HANDLE,
            pMechanism: CK_MECHANISM_PTR,
        ) -> CK_RV,
    >,
    pub C_Digest: Option<
        unsafe extern "C" fn(
            hSession: CK_SESSION_HANDLE,
            pData: CK_BYTE_PTR,
            ulDataLen: CK_ULONG,
            pDigest: CK_BYTE_PTR,
            pulDigestLen: CK_ULONG_PTR,
        ) -> CK_RV,
    >,
    pub C_DigestUpdate: Option<
        unsafe extern "C" fn(
            hSession: CK_SESSION_HANDLE,
            pPart: CK_BYTE_PTR,
            ulPartLen: CK_ULONG,
        ) -> CK_RV,
    >,
    pub C_DigestKey: Option<
        unsafe extern "C" fn(
            hSession: CK_SESSION_HANDLE,
            hKey: CK_OBJECT_HANDLE,
        ) -> CK_RV,
    >,
    pub C_DigestFinal: Option<
        unsafe extern "C" fn(
            hSession: CK_SESSION_HANDLE,
            pDigest: CK_BYTE_PTR,
            pulDigestLen: CK_ULONG_PTR,
        ) -> CK_RV,
    >,
    pub C_SignInit: Option<
        unsafe extern "C" fn(
            hSession: CK_SESSION_HANDLE,
            pMechanism: CK_MECHANISM_PTR,
            hKey: CK_OBJECT_HANDLE,
        ) -> CK_RV,
    >,
    pub C_Sign: Option<
        unsafe extern "C" fn(
            hSession: CK_SESSION_HANDLE,
            pData: CK_BYTE_PTR,
            ulDataLen: CK_ULONG,
            pSignature: CK_BYTE_PTR,
            pulSignatureLen: CK_ULONG_PTR,
        ) -> CK_RV,
    >,
    pub C_SignUpdate: Option<
        unsafe extern "C" fn(
            hSession: CK_SESSION_HANDLE,
            pPart: CK_BYTE_PTR,
            ulPartLen: CK_ULONG,
        ) -> CK_RV,
    >,
    pub C_SignFinal: Option<
        unsafe extern "C" fn(
            hSession: CK_SESSION_HANDLE,
            pSignature: CK_BYTE_PTR,
            pulSignatureLen: CK_ULONG_PTR,
        ) -> CK_RV,
    >,
    pub C_SignRecoverInit: Option<
        unsafe extern "C" fn(
            hSession: CK_SESSION_HANDLE,
            pMechanism: CK_MECHANISM_PTR,
            hKey: CK_OBJECT_HANDLE,
        ) -> CK_RV,
    >,
    pub C_SignRecover: Option<
        unsafe extern "C" fn(
            hSession: CK_SESSION_HANDLE,
            pData: CK_BYTE_PTR,
            ulDataLen: CK_ULONG,
            pSignature: CK_BYTE_PTR,
            pulSignatureLen: CK_ULONG_PTR,
        ) -> CK_RV,
    >,
    pub C_VerifyInit: Option<
        unsafe extern "C" fn(
            hSession: CK_SESSION_HANDLE,
            pMechanism: CK_MECHANISM_PTR,
            hKey: CK_OBJECT_HANDLE,
        ) -> CK_RV,
    >,
    pub C_Verify: Option<
        unsafe extern "C" fn(
            hSession: CK_SESSION_HANDLE,
            pData: CK_BYTE_PTR,
            ulDataLen: CK_ULONG,
            pSignature: CK_BYTE_PTR,
            ulSignatureLen: CK_ULONG,
        ) -> CK_RV,
    >,
    pub C_VerifyUpdate: Option<
        unsafe extern "C" fn(
            hSession: CK_SESSION_HANDLE,
            pPart: CK_BYTE_PTR,
            ulPartLen: CK_ULONG,
        ) -> CK_RV,
    >,
    pub C_VerifyFinal: Option<
        unsafe extern "C" fn(
            hSession: CK_SESSION_HANDLE,
            pSignature: CK_BYTE_PTR,
            ulSignatureLen: CK_ULONG,
        ) -> CK_RV,
    >,
    pub C_VerifyRecoverInit: Option<
        unsafe extern "C" fn(
            hSession: CK_SESSION_HANDLE,
            pMechanism: CK_MECHANISM_PTR,
            hKey: CK_OBJECT_HANDLE,
        ) -> CK_RV,
    >,
    pub C_VerifyRecover: Option<
        unsafe extern "C" fn(
            hSession: CK_SESSION_HANDLE,
            pSignature: CK_BYTE_PTR,
            ulSignatureLen: CK_ULONG,
            pData: CK_BYTE_PTR,
            pulDataLen: CK_ULONG_PTR,
        ) -> CK_RV,
    >,
    pub C_DigestEncryptUpdate: Option<
        unsafe extern "C" fn(
            hSession: CK_SESSION_HANDLE,
            pPart: CK_BYTE_PTR,
            ulPartLen: CK_ULONG,
            pEncryptedPart: CK_BYTE_PTR,
            pulEncryptedPartLen: CK_ULONG_PTR,
        ) -> CK_RV,
    >,
    pub C_DecryptDigestUpdate: Option<
        unsafe extern "C" fn(
            hSession: CK_SESSION_HANDLE,
            pEncryptedPart: CK_BYTE_PTR,
            ulEncryptedPartLen: CK_ULONG,
            pPart: CK_BYTE_PTR,
            pulPartLen: CK_ULONG_PTR,
        ) -> CK_RV,
    >,
    pub C_SignEncryptUpdate: Option<
        unsafe extern "C" fn(
            hSession: CK_SESSION_HANDLE,
            pPart: CK_BYTE_PTR,
            ulPartLen: CK_ULONG,
            pEncryptedPart: CK_BYTE_PTR,
            pulEncryptedPartLen: CK_ULONG_PTR,
        ) -> CK_RV,
    >,
    pub C_DecryptVerifyUpdate: Option<
        unsafe extern "C" fn(
            hSession: CK_SESSION_HANDLE,
            pEncryptedPart: CK_BYTE_PTR,
            ulEncryptedPartLen: CK_ULONG,
            pPart: CK_BYTE_PTR,
            pulPartLen: CK_ULONG_PTR,
        ) -> CK_RV,
    >,
    pub C_GenerateKey: Option<
        unsafe extern "C" fn(
            hSession: CK_SESSION_HANDLE,
            pMechanism: CK_MECHANISM_PTR,
            pTemplate: CK_ATTRIBUTE_PTR,
            ulCount: CK_ULONG,
            phKey: CK_OBJECT_HANDLE_PTR,
        ) -> CK_RV,
    >,
    pub C_GenerateKeyPair: Option<
        unsafe extern "C" fn(
            hSession: CK_SESSION_HANDLE,
            pMechanism: CK_MECHANISM_PTR,
            pPublicKeyTemplate: CK_ATTRIBUTE_PTR,
            ulPublicKeyAttributeCount: CK_ULONG,
            pPrivateKeyTemplate: CK_ATTRIBUTE_PTR,
            ulPrivateKeyAttributeCount: CK_ULONG,
            phPublicKey: CK_OBJECT_HANDLE_PTR,
            phPrivateKey: CK_OBJECT_HANDLE_PTR,
        ) -> CK_RV,
    >,
    pub C_WrapKey: Option<
        unsafe extern "C" fn(
            hSession: CK_SESSION_HANDLE,
            pMechanism: CK_MECHANISM_PTR,
            hWrappingKey: CK_OBJECT_HANDLE,
            hKey: CK_OBJECT_HANDLE,
            pWrappedKey: CK_BYTE_PTR,
            pulWrappedKeyLen: CK_ULONG_PTR,
        ) -> CK_RV,
    >,
    pub C_UnwrapKey: Option<
        unsafe extern "C" fn(
            hSession: CK_SESSION_HANDLE,
            pMechanism: CK_MECHANISM_PTR,
            hUnwrappingKey: CK_OBJECT_HANDLE,
            pWrappedKey: CK_BYTE_PTR,
            ulWrappedKeyLen: CK_ULONG,
            pTemplate: CK_ATTRIBUTE_PTR,
            ulAttributeCount: CK_ULONG,
            phKey: CK_OBJECT_HANDLE_PTR,
        ) -> CK_RV,
    >,
    pub C_DeriveKey: Option<
        unsafe extern "C" fn(
            hSession: CK_SESSION_HANDLE,
            pMechanism: CK_MECHANISM_PTR,
            hBaseKey: CK_OBJECT_HANDLE,
            pTemplate: CK_ATTRIBUTE_PTR,
            ulAttributeCount: CK_ULONG,
            phKey: CK_OBJECT_HANDLE_PTR,
        ) -> CK_RV,
    >,
    pub C_SeedRandom: Option<
        unsafe extern "C" fn(
            hSession: CK_SESSION_HANDLE,
            pSeed: CK_BYTE_PTR,
            ulSeedLen: CK_ULONG,
        ) -> CK_RV,
    >,
    pub C_GenerateRandom: Option<
        unsafe extern "C" fn(
            hSession: CK_SESSION_HANDLE,
            RandomData: CK_BYTE_PTR,
            ulRandomLen: CK_ULONG,
        ) -> CK_RV,
    >,
    pub C_GetFunctionStatus:
        Option<unsafe extern "C" fn(hSession: CK_SESSION_HANDLE) -> CK_RV>,
    pub C_CancelFunction:
        Option<unsafe extern "C" fn(hSession: CK_SESSION_HANDLE) -> CK_RV>,
    pub C_WaitForSlotEvent: Option<
        unsafe extern "C" fn(
            flags: CK_FLAGS,
            pSlot: CK_SLOT_ID_PTR,
            pReserved: CK_VOID_PTR,
        ) -> CK_RV,
    >,
}

// types that need different mutability than the C declarations use
pub type CK_FUNCTION_LIST_PTR = *const CK_FUNCTION_LIST;
pub type CK_C_GetFunctionList = Option<
    unsafe extern "C" fn(ppFunctionList: *mut *mut CK_FUNCTION_LIST) -> CK_RV,
>;
