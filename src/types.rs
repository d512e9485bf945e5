//! Basic MQI scalar types and handles.

#![allow(non_camel_case_types)]

use crate::status::MqError;

pub use libc::c_void;

/// 32-bit signed integer (`MQLONG`).
pub type MQLONG = i32;
/// Single byte (`MQBYTE`).
pub type MQBYTE = u8;
/// Single character (`MQCHAR`).
pub type MQCHAR = libc::c_char;
/// 64-bit signed integer (`MQINT64`).
pub type MQINT64 = i64;
/// Message handle (`MQHMSG`).
pub type MQHMSG = MQINT64;
/// Connection handle (`MQHCONN`).
pub type MQHCONN = MQLONG;
/// Object handle (`MQHOBJ`).
pub type MQHOBJ = MQLONG;
/// Pointer to caller-owned memory (`MQPTR`).
pub type MQPTR = *mut c_void;

/// 24-byte identifier (`MQBYTE24`).
pub type MQBYTE24 = [MQBYTE; 24];

/// Unusable connection handle sentinel.
pub const MQHC_UNUSABLE_HCONN: MQHCONN = -1;
/// Default connection handle (z/OS batch).
pub const MQHC_DEF_HCONN: MQHCONN = 0;
/// Unusable object handle sentinel.
pub const MQHO_UNUSABLE_HOBJ: MQHOBJ = -1;
/// No object handle.
pub const MQHO_NONE: MQHOBJ = 0;

/// Blank used to pad fixed-width character fields.
pub const MQ_BLANK: MQCHAR = b' ' as MQCHAR;

/// Connection handle.
#[repr(transparent)]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Hconn(pub MQHCONN);

impl Hconn {
    pub const UNUSABLE: Self = Hconn(MQHC_UNUSABLE_HCONN);

    /// Whether the handle may be passed to further calls.
    pub fn is_usable(self) -> bool {
        self != Self::UNUSABLE
    }

    /// Reset the handle to the unusable sentinel.
    pub fn invalidate(&mut self) {
        *self = Self::UNUSABLE;
    }
}

impl Default for Hconn {
    fn default() -> Self {
        Self::UNUSABLE
    }
}

/// Object handle.
#[repr(transparent)]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Hobj(pub MQHOBJ);

impl Hobj {
    pub const UNUSABLE: Self = Hobj(MQHO_UNUSABLE_HOBJ);

    /// Whether the handle may be passed to further calls.
    pub fn is_usable(self) -> bool {
        self != Self::UNUSABLE
    }

    /// Reset the handle to the unusable sentinel.
    pub fn invalidate(&mut self) {
        *self = Self::UNUSABLE;
    }
}

impl Default for Hobj {
    fn default() -> Self {
        Self::UNUSABLE
    }
}

/// Fill a fixed-width character field with `value`, blank-padded.
///
/// Fails instead of truncating when `value` does not fit.
pub fn set_mq_chars(dst: &mut [MQCHAR], value: &str) -> Result<(), MqError> {
    let bytes = value.as_bytes();
    if bytes.len() > dst.len() {
        return Err(MqError::NameTooLong {
            name: value.to_string(),
            max: dst.len(),
        });
    }
    for (slot, byte) in dst.iter_mut().zip(bytes) {
        *slot = *byte as MQCHAR;
    }
    for slot in dst.iter_mut().skip(bytes.len()) {
        *slot = MQ_BLANK;
    }
    Ok(())
}

/// Convert a buffer length to the `MQLONG` a record stores it in.
pub fn mq_length(field: &'static str, length: usize) -> Result<MQLONG, MqError> {
    MQLONG::try_from(length).map_err(|_| MqError::LengthOverflow { field, length })
}

/// Build a blank-padded fixed-width character field.
pub fn mq_chars<const N: usize>(value: &str) -> Result<[MQCHAR; N], MqError> {
    let mut field = [MQ_BLANK; N];
    set_mq_chars(&mut field, value)?;
    Ok(field)
}

/// Read a fixed-width character field, trimming trailing blanks and NULs.
///
/// Reading stops at the first NUL.
pub fn mq_str(src: &[MQCHAR]) -> String {
    let bytes: Vec<u8> = src
        .iter()
        .map(|c| *c as u8)
        .take_while(|b| *b != 0)
        .collect();
    String::from_utf8_lossy(&bytes)
        .trim_end_matches(' ')
        .to_string()
}

/// Copy a byte string into a fixed-width character field without padding.
pub(crate) const fn const_chars<const N: usize>(value: &[u8; N]) -> [MQCHAR; N] {
    let mut out = [0 as MQCHAR; N];
    let mut i = 0;
    while i < N {
        out[i] = value[i] as MQCHAR;
        i += 1;
    }
    out
}
