//! MQCNO and MQCSP: connect options and security parameters.
//!
//! Both records reach optional trailing data either through a pointer or through
//! an offset from the start of the record. [`Addressing`] names which of the two
//! is authoritative; [`ConnectOptions`] owns the pointed-to data for the duration
//! of a call so callers never do address arithmetic themselves.

use std::fmt;
use std::ptr;

use crate::constants::*;
use crate::options::ConnectFlags;
use crate::structs::Mqcd;
use crate::status::MqError;
use crate::types::{c_void, const_chars, mq_length, MQBYTE, MQCHAR, MQLONG, MQPTR};

/// Connect options (`MQCNO`).
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mqcno {
    pub struc_id: [MQCHAR; 4],
    pub version: MQLONG,
    pub options: MQLONG,
    pub client_conn_offset: MQLONG,
    pub client_conn_ptr: MQPTR,
    pub conn_tag: [MQBYTE; MQ_CONN_TAG_LENGTH],
    pub ssl_config_ptr: MQPTR,
    pub ssl_config_offset: MQLONG,
    pub connection_id: [MQBYTE; MQ_CONNECTION_ID_LENGTH],
    pub security_parms_offset: MQLONG,
    pub security_parms_ptr: MQPTR,
    pub ccdt_url_ptr: MQPTR,
    pub ccdt_url_offset: MQLONG,
    pub ccdt_url_length: MQLONG,
    pub reserved: [MQBYTE; 8],
}

impl Default for Mqcno {
    fn default() -> Self {
        Self {
            struc_id: const_chars(&MQCNO_STRUC_ID),
            version: MQCNO_CURRENT_VERSION,
            options: ConnectFlags::STANDARD_BINDING.bits(),
            client_conn_offset: 0,
            client_conn_ptr: ptr::null_mut(),
            conn_tag: [0; MQ_CONN_TAG_LENGTH],
            ssl_config_ptr: ptr::null_mut(),
            ssl_config_offset: 0,
            connection_id: [0; MQ_CONNECTION_ID_LENGTH],
            security_parms_offset: 0,
            security_parms_ptr: ptr::null_mut(),
            ccdt_url_ptr: ptr::null_mut(),
            ccdt_url_offset: 0,
            ccdt_url_length: 0,
            reserved: [0; 8],
        }
    }
}

impl Mqcno {
    /// Typed view of the options field.
    pub fn flags(&self) -> ConnectFlags {
        ConnectFlags::from_bits_retain(self.options)
    }

    /// Where the client channel definition lives.
    pub fn client_conn(&self) -> Addressing {
        addressing(
            self.client_conn_ptr,
            self.client_conn_offset,
            std::mem::size_of::<Mqcd>() as MQLONG,
        )
    }

    /// Where the security parameters live.
    pub fn security_parms(&self) -> Addressing {
        addressing(
            self.security_parms_ptr,
            self.security_parms_offset,
            std::mem::size_of::<Mqcsp>() as MQLONG,
        )
    }
}

/// Security parameters (`MQCSP`).
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mqcsp {
    pub struc_id: [MQCHAR; 4],
    pub version: MQLONG,
    pub authentication_type: MQLONG,
    pub reserved1: [MQBYTE; 4],
    pub csp_user_id_ptr: MQPTR,
    pub csp_user_id_offset: MQLONG,
    pub csp_user_id_length: MQLONG,
    pub reserved2: [MQBYTE; 8],
    pub csp_password_ptr: MQPTR,
    pub csp_password_offset: MQLONG,
    pub csp_password_length: MQLONG,
}

impl Default for Mqcsp {
    fn default() -> Self {
        Self {
            struc_id: const_chars(&MQCSP_STRUC_ID),
            version: MQCSP_CURRENT_VERSION,
            authentication_type: MQCSP_AUTH_NONE,
            reserved1: [0; 4],
            csp_user_id_ptr: ptr::null_mut(),
            csp_user_id_offset: 0,
            csp_user_id_length: 0,
            reserved2: [0; 8],
            csp_password_ptr: ptr::null_mut(),
            csp_password_offset: 0,
            csp_password_length: 0,
        }
    }
}

impl Mqcsp {
    /// Where the user id lives.
    pub fn user_id(&self) -> Addressing {
        addressing(
            self.csp_user_id_ptr,
            self.csp_user_id_offset,
            self.csp_user_id_length,
        )
    }

    /// Where the password lives.
    pub fn password(&self) -> Addressing {
        addressing(
            self.csp_password_ptr,
            self.csp_password_offset,
            self.csp_password_length,
        )
    }
}

/// Location of optional data referenced from a structure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Addressing {
    /// No data supplied.
    Absent,
    /// Data in caller memory outside the structure.
    Pointer { ptr: *const c_void, length: usize },
    /// Data at `offset` bytes from the start of the structure.
    Offset { offset: usize, length: usize },
}

/// A non-null pointer wins over the offset.
pub(super) fn addressing(ptr: MQPTR, offset: MQLONG, length: MQLONG) -> Addressing {
    if length <= 0 {
        return Addressing::Absent;
    }
    let length = length as usize;
    if !ptr.is_null() {
        Addressing::Pointer {
            ptr: ptr as *const c_void,
            length,
        }
    } else if offset > 0 {
        Addressing::Offset {
            offset: offset as usize,
            length,
        }
    } else {
        Addressing::Absent
    }
}

impl Addressing {
    pub fn is_absent(&self) -> bool {
        matches!(self, Addressing::Absent)
    }

    /// Resolve the data as bytes.
    ///
    /// `base` is the memory starting at the owning structure; it is only
    /// consulted for [`Addressing::Offset`]. Out-of-range offsets yield `None`.
    ///
    /// # Safety
    ///
    /// For [`Addressing::Pointer`], the pointer must be valid for reads of
    /// `length` bytes for the lifetime `'a`.
    pub unsafe fn resolve<'a>(&self, base: &'a [u8]) -> Option<&'a [u8]> {
        match *self {
            Addressing::Absent => None,
            Addressing::Pointer { ptr, length } => {
                Some(std::slice::from_raw_parts(ptr as *const u8, length))
            }
            Addressing::Offset { offset, length } => {
                base.get(offset..offset.checked_add(length)?)
            }
        }
    }
}

/// Owned user-id/password security parameters.
///
/// The `Mqcsp` and credential bytes are heap-allocated so the pointers linked
/// into it stay valid when this value moves.
pub struct SecurityParams {
    csp: Box<Mqcsp>,
    user_id: Vec<u8>,
    password: Vec<u8>,
}

impl SecurityParams {
    /// Fails when either credential is too long for its `MQLONG` length field.
    pub fn user_id_and_password(user_id: &str, password: &str) -> Result<Self, MqError> {
        let csp = Mqcsp {
            authentication_type: MQCSP_AUTH_USER_ID_AND_PWD,
            csp_user_id_length: mq_length("user id", user_id.len())?,
            csp_password_length: mq_length("password", password.len())?,
            ..Mqcsp::default()
        };
        Ok(Self {
            csp: Box::new(csp),
            user_id: user_id.as_bytes().to_vec(),
            password: password.as_bytes().to_vec(),
        })
    }

    pub fn user_id(&self) -> &[u8] {
        &self.user_id
    }

    pub fn authentication_type(&self) -> MQLONG {
        self.csp.authentication_type
    }

    /// Point the `Mqcsp` at the owned credentials and return it.
    ///
    /// The lengths were checked when the credentials were taken.
    fn link(&mut self) -> *mut Mqcsp {
        let csp = &mut *self.csp;
        csp.csp_user_id_ptr = self.user_id.as_ptr() as MQPTR;
        csp.csp_user_id_offset = 0;
        csp.csp_password_ptr = self.password.as_ptr() as MQPTR;
        csp.csp_password_offset = 0;
        csp as *mut Mqcsp
    }
}

impl fmt::Debug for SecurityParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SecurityParams")
            .field("user_id", &String::from_utf8_lossy(&self.user_id))
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Owned connect parameters: an `Mqcno` plus the records it points to.
#[derive(Debug, Default)]
pub struct ConnectOptions {
    cno: Mqcno,
    channel: Option<Box<Mqcd>>,
    security: Option<SecurityParams>,
}

impl ConnectOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_flags(mut self, flags: ConnectFlags) -> Self {
        self.cno.options = flags.bits();
        self
    }

    /// Connect as a client over `cd` instead of the default channel table.
    pub fn with_channel(mut self, cd: Mqcd) -> Self {
        self.channel = Some(Box::new(cd));
        self
    }

    pub fn with_credentials(mut self, user_id: &str, password: &str) -> Result<Self, MqError> {
        self.security = Some(SecurityParams::user_id_and_password(user_id, password)?);
        Ok(self)
    }

    pub fn flags(&self) -> ConnectFlags {
        self.cno.flags()
    }

    pub fn channel(&self) -> Option<&Mqcd> {
        self.channel.as_deref()
    }

    pub fn security(&self) -> Option<&SecurityParams> {
        self.security.as_ref()
    }

    /// Link the owned channel and security records into the `Mqcno` and
    /// return it, ready to pass to a connect call.
    ///
    /// Pointer addressing is used and offsets are cleared. The version is
    /// raised to the lowest one that makes the linked fields meaningful.
    pub fn prepare(&mut self) -> &mut Mqcno {
        if let Some(cd) = self.channel.as_deref_mut() {
            self.cno.client_conn_ptr = cd as *mut Mqcd as MQPTR;
            self.cno.client_conn_offset = 0;
            self.cno.version = self.cno.version.max(MQCNO_VERSION_2);
        }
        if let Some(security) = self.security.as_mut() {
            self.cno.security_parms_ptr = security.link() as MQPTR;
            self.cno.security_parms_offset = 0;
            self.cno.version = self.cno.version.max(MQCNO_VERSION_5);
        }
        &mut self.cno
    }
}
