//! PCF (Programmable Command Format) administrative records.
//!
//! A PCF message is an `MQCFH` header followed by `ParameterCount` parameter
//! records. Every record starts with `Type` and `StrucLength`, and readers advance
//! through the buffer by `StrucLength` bytes, so the encoder always writes the
//! exact serialized length (padded to a multiple of four). Integers use the
//! native encoding, matching the in-memory layout of the structures.

use bytes::{Buf, BufMut, Bytes, BytesMut};

use crate::constants::{MQCA_Q_NAME, MQCCSI_DEFAULT, MQ_Q_NAME_LENGTH};
use crate::status::{MqStatus, MQCC_OK, MQRC_NONE};
use crate::types::MQLONG;

// ---------------------------------------------------------------------------
//  Constants
// ---------------------------------------------------------------------------

pub const MQCFT_COMMAND: MQLONG = 1;
pub const MQCFT_RESPONSE: MQLONG = 2;
pub const MQCFT_INTEGER: MQLONG = 3;
pub const MQCFT_STRING: MQLONG = 4;
pub const MQCFT_INTEGER_LIST: MQLONG = 5;
pub const MQCFT_STRING_LIST: MQLONG = 6;
pub const MQCFT_EVENT: MQLONG = 7;
pub const MQCFT_USER: MQLONG = 8;
pub const MQCFT_REPORT: MQLONG = 12;
pub const MQCFT_COMMAND_XR: MQLONG = 16;
pub const MQCFT_XR_MSG: MQLONG = 17;
pub const MQCFT_XR_ITEM: MQLONG = 18;
pub const MQCFT_XR_SUMMARY: MQLONG = 19;

pub const MQCFH_VERSION_1: MQLONG = 1;
pub const MQCFH_STRUC_LENGTH: MQLONG = 36;
pub const MQCFIN_STRUC_LENGTH: MQLONG = 16;
pub const MQCFST_STRUC_LENGTH_FIXED: MQLONG = 20;
pub const MQCFIL_STRUC_LENGTH_FIXED: MQLONG = 16;
pub const MQCFSL_STRUC_LENGTH_FIXED: MQLONG = 24;

pub const MQCFC_NOT_LAST: MQLONG = 0;
pub const MQCFC_LAST: MQLONG = 1;

pub const MQCMD_INQUIRE_Q_MGR: MQLONG = 2;
pub const MQCMD_CHANGE_Q: MQLONG = 8;
pub const MQCMD_CLEAR_Q: MQLONG = 9;
pub const MQCMD_COPY_Q: MQLONG = 10;
pub const MQCMD_CREATE_Q: MQLONG = 11;
pub const MQCMD_DELETE_Q: MQLONG = 12;
pub const MQCMD_INQUIRE_Q: MQLONG = 13;
pub const MQCMD_INQUIRE_Q_NAMES: MQLONG = 18;
pub const MQCMD_INQUIRE_Q_STATUS: MQLONG = 41;

pub const MQIACF_Q_ATTRS: MQLONG = 1002;
pub const MQIACF_ALL: MQLONG = 1009;

/// Queue that accepts PCF commands.
pub const ADMIN_COMMAND_QUEUE: &str = "SYSTEM.ADMIN.COMMAND.QUEUE";

// ---------------------------------------------------------------------------
//  Fixed record layouts
// ---------------------------------------------------------------------------

/// PCF header (`MQCFH`).
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mqcfh {
    pub cf_type: MQLONG,
    pub struc_length: MQLONG,
    pub version: MQLONG,
    pub command: MQLONG,
    pub msg_seq_number: MQLONG,
    pub control: MQLONG,
    pub comp_code: MQLONG,
    pub reason: MQLONG,
    pub parameter_count: MQLONG,
}

/// Integer parameter (`MQCFIN`).
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mqcfin {
    pub cf_type: MQLONG,
    pub struc_length: MQLONG,
    pub parameter: MQLONG,
    pub value: MQLONG,
}

/// String parameter (`MQCFST`), fixed part. `string_length` bytes follow.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mqcfst {
    pub cf_type: MQLONG,
    pub struc_length: MQLONG,
    pub parameter: MQLONG,
    pub coded_char_set_id: MQLONG,
    pub string_length: MQLONG,
}

/// Integer list parameter (`MQCFIL`), fixed part. `count` integers follow.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mqcfil {
    pub cf_type: MQLONG,
    pub struc_length: MQLONG,
    pub parameter: MQLONG,
    pub count: MQLONG,
}

/// String list parameter (`MQCFSL`), fixed part. `count` strings of
/// `string_length` bytes follow.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mqcfsl {
    pub cf_type: MQLONG,
    pub struc_length: MQLONG,
    pub parameter: MQLONG,
    pub coded_char_set_id: MQLONG,
    pub count: MQLONG,
    pub string_length: MQLONG,
}

impl Mqcfh {
    /// Header for a single-message command.
    pub fn command(command: MQLONG) -> Self {
        Self {
            cf_type: MQCFT_COMMAND,
            struc_length: MQCFH_STRUC_LENGTH,
            version: MQCFH_VERSION_1,
            command,
            msg_seq_number: 1,
            control: MQCFC_LAST,
            comp_code: MQCC_OK,
            reason: MQRC_NONE,
            parameter_count: 0,
        }
    }
}

// ---------------------------------------------------------------------------
//  Errors
// ---------------------------------------------------------------------------

/// Errors raised while encoding or decoding PCF buffers.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PcfError {
    #[error("Truncated PCF record at offset {offset}: need {needed} bytes, {available} available")]
    Truncated {
        offset: usize,
        needed: usize,
        available: usize,
    },

    #[error("Bad structure length {struc_length} for record type {cf_type} at offset {offset}")]
    BadStrucLength {
        offset: usize,
        cf_type: MQLONG,
        struc_length: MQLONG,
    },

    #[error("Unknown PCF record type {cf_type} at offset {offset}")]
    UnknownType { offset: usize, cf_type: MQLONG },

    #[error("Header declares {declared} parameters, found {found}")]
    ParameterCountMismatch { declared: MQLONG, found: usize },

    #[error("Value of {length} bytes does not fit the record")]
    TooLong { length: usize },
}

// ---------------------------------------------------------------------------
//  Parameters
// ---------------------------------------------------------------------------

/// One parameter record with its variable part.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PcfParameter {
    Integer {
        parameter: MQLONG,
        value: MQLONG,
    },
    String {
        parameter: MQLONG,
        ccsid: MQLONG,
        value: Vec<u8>,
    },
    IntegerList {
        parameter: MQLONG,
        values: Vec<MQLONG>,
    },
    StringList {
        parameter: MQLONG,
        ccsid: MQLONG,
        values: Vec<Vec<u8>>,
    },
}

fn padded(length: usize) -> usize {
    (length + 3) & !3
}

fn to_long(length: usize) -> Result<MQLONG, PcfError> {
    MQLONG::try_from(length).map_err(|_| PcfError::TooLong { length })
}

impl PcfParameter {
    pub fn integer(parameter: MQLONG, value: MQLONG) -> Self {
        PcfParameter::Integer { parameter, value }
    }

    pub fn string(parameter: MQLONG, value: &str) -> Self {
        PcfParameter::String {
            parameter,
            ccsid: MQCCSI_DEFAULT,
            value: value.as_bytes().to_vec(),
        }
    }

    pub fn integer_list(parameter: MQLONG, values: &[MQLONG]) -> Self {
        PcfParameter::IntegerList {
            parameter,
            values: values.to_vec(),
        }
    }

    pub fn string_list(parameter: MQLONG, values: &[&str]) -> Self {
        PcfParameter::StringList {
            parameter,
            ccsid: MQCCSI_DEFAULT,
            values: values.iter().map(|v| v.as_bytes().to_vec()).collect(),
        }
    }

    /// Parameter identifier (`MQCA_*`, `MQIA_*`, `MQIACF_*`).
    pub fn parameter(&self) -> MQLONG {
        match self {
            PcfParameter::Integer { parameter, .. }
            | PcfParameter::String { parameter, .. }
            | PcfParameter::IntegerList { parameter, .. }
            | PcfParameter::StringList { parameter, .. } => *parameter,
        }
    }

    /// Record type (`MQCFT_*`).
    pub fn cf_type(&self) -> MQLONG {
        match self {
            PcfParameter::Integer { .. } => MQCFT_INTEGER,
            PcfParameter::String { .. } => MQCFT_STRING,
            PcfParameter::IntegerList { .. } => MQCFT_INTEGER_LIST,
            PcfParameter::StringList { .. } => MQCFT_STRING_LIST,
        }
    }

    /// Common width of the entries in a string list.
    fn list_string_length(values: &[Vec<u8>]) -> usize {
        values.iter().map(Vec::len).max().unwrap_or(0)
    }

    /// Serialized length of this record, padding included.
    pub fn struc_length(&self) -> usize {
        match self {
            PcfParameter::Integer { .. } => MQCFIN_STRUC_LENGTH as usize,
            PcfParameter::String { value, .. } => {
                MQCFST_STRUC_LENGTH_FIXED as usize + padded(value.len())
            }
            PcfParameter::IntegerList { values, .. } => {
                MQCFIL_STRUC_LENGTH_FIXED as usize + 4 * values.len()
            }
            PcfParameter::StringList { values, .. } => {
                let width = Self::list_string_length(values);
                MQCFSL_STRUC_LENGTH_FIXED as usize + padded(width * values.len())
            }
        }
    }

    fn encode(&self, buf: &mut BytesMut) -> Result<(), PcfError> {
        let struc_length = to_long(self.struc_length())?;
        let start = buf.len();
        buf.put_i32_ne(self.cf_type());
        buf.put_i32_ne(struc_length);
        buf.put_i32_ne(self.parameter());

        match self {
            PcfParameter::Integer { value, .. } => {
                buf.put_i32_ne(*value);
            }
            PcfParameter::String { ccsid, value, .. } => {
                buf.put_i32_ne(*ccsid);
                buf.put_i32_ne(to_long(value.len())?);
                buf.put_slice(value);
            }
            PcfParameter::IntegerList { values, .. } => {
                buf.put_i32_ne(to_long(values.len())?);
                for value in values {
                    buf.put_i32_ne(*value);
                }
            }
            PcfParameter::StringList { ccsid, values, .. } => {
                let width = Self::list_string_length(values);
                buf.put_i32_ne(*ccsid);
                buf.put_i32_ne(to_long(values.len())?);
                buf.put_i32_ne(to_long(width)?);
                for value in values {
                    buf.put_slice(value);
                    buf.put_bytes(b' ', width - value.len());
                }
            }
        }

        let written = buf.len() - start;
        buf.put_bytes(0, struc_length as usize - written);
        Ok(())
    }

    /// Decode one record. `record` is exactly `StrucLength` bytes.
    fn decode(record: &[u8], offset: usize) -> Result<Self, PcfError> {
        let mut cursor = record;
        let cf_type = cursor.get_i32_ne();
        let struc_length = cursor.get_i32_ne();
        let bad_length = || PcfError::BadStrucLength {
            offset,
            cf_type,
            struc_length,
        };

        let fixed = match cf_type {
            MQCFT_INTEGER => MQCFIN_STRUC_LENGTH,
            MQCFT_STRING => MQCFST_STRUC_LENGTH_FIXED,
            MQCFT_INTEGER_LIST => MQCFIL_STRUC_LENGTH_FIXED,
            MQCFT_STRING_LIST => MQCFSL_STRUC_LENGTH_FIXED,
            _ => return Err(PcfError::UnknownType { offset, cf_type }),
        } as usize;
        if record.len() < fixed {
            return Err(bad_length());
        }

        let parameter = cursor.get_i32_ne();
        match cf_type {
            MQCFT_INTEGER => Ok(PcfParameter::Integer {
                parameter,
                value: cursor.get_i32_ne(),
            }),
            MQCFT_STRING => {
                let ccsid = cursor.get_i32_ne();
                let length = usize::try_from(cursor.get_i32_ne()).map_err(|_| bad_length())?;
                let value = cursor.get(..length).ok_or_else(bad_length)?.to_vec();
                Ok(PcfParameter::String {
                    parameter,
                    ccsid,
                    value,
                })
            }
            MQCFT_INTEGER_LIST => {
                let count = usize::try_from(cursor.get_i32_ne()).map_err(|_| bad_length())?;
                if cursor.remaining() < count.checked_mul(4).ok_or_else(bad_length)? {
                    return Err(bad_length());
                }
                let values = (0..count).map(|_| cursor.get_i32_ne()).collect();
                Ok(PcfParameter::IntegerList { parameter, values })
            }
            _ => {
                let ccsid = cursor.get_i32_ne();
                let count = usize::try_from(cursor.get_i32_ne()).map_err(|_| bad_length())?;
                let width = usize::try_from(cursor.get_i32_ne()).map_err(|_| bad_length())?;
                let total = count.checked_mul(width).ok_or_else(bad_length)?;
                let strings = cursor.get(..total).ok_or_else(bad_length)?;
                let values = if width == 0 {
                    vec![Vec::new(); count]
                } else {
                    strings
                        .chunks(width)
                        .map(|chunk| trim_blanks(chunk).to_vec())
                        .collect()
                };
                Ok(PcfParameter::StringList {
                    parameter,
                    ccsid,
                    values,
                })
            }
        }
    }
}

fn trim_blanks(value: &[u8]) -> &[u8] {
    let end = value
        .iter()
        .rposition(|b| *b != b' ' && *b != 0)
        .map_or(0, |i| i + 1);
    &value[..end]
}

// ---------------------------------------------------------------------------
//  Reader
// ---------------------------------------------------------------------------

/// Cursor over concatenated parameter records.
///
/// Each step advances by the record's `StrucLength`. After the first error the
/// reader is exhausted.
pub struct PcfReader<'a> {
    buf: &'a [u8],
    pos: usize,
    base: usize,
}

impl<'a> PcfReader<'a> {
    pub fn new(buf: &'a [u8]) -> Self {
        Self::with_base(buf, 0)
    }

    /// Reader whose reported offsets start at `base`.
    fn with_base(buf: &'a [u8], base: usize) -> Self {
        Self { buf, pos: 0, base }
    }

    /// Bytes consumed so far.
    pub fn position(&self) -> usize {
        self.pos
    }

    fn next_record(&mut self) -> Result<PcfParameter, PcfError> {
        let rest = &self.buf[self.pos..];
        let offset = self.base + self.pos;
        if rest.len() < 8 {
            return Err(PcfError::Truncated {
                offset,
                needed: 8,
                available: rest.len(),
            });
        }

        let mut head = rest;
        let cf_type = head.get_i32_ne();
        let struc_length = head.get_i32_ne();
        if struc_length < 8 || struc_length % 4 != 0 {
            return Err(PcfError::BadStrucLength {
                offset,
                cf_type,
                struc_length,
            });
        }

        let length = struc_length as usize;
        if rest.len() < length {
            return Err(PcfError::Truncated {
                offset,
                needed: length,
                available: rest.len(),
            });
        }

        let parameter = PcfParameter::decode(&rest[..length], offset)?;
        self.pos += length;
        Ok(parameter)
    }
}

impl Iterator for PcfReader<'_> {
    type Item = Result<PcfParameter, PcfError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.pos >= self.buf.len() {
            return None;
        }
        let result = self.next_record();
        if result.is_err() {
            self.pos = self.buf.len();
        }
        Some(result)
    }
}

// ---------------------------------------------------------------------------
//  Messages
// ---------------------------------------------------------------------------

/// A PCF header with its parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PcfMessage {
    pub header: Mqcfh,
    pub parameters: Vec<PcfParameter>,
}

impl PcfMessage {
    pub fn command(command: MQLONG) -> Self {
        Self {
            header: Mqcfh::command(command),
            parameters: Vec::new(),
        }
    }

    /// `MQCMD_INQUIRE_Q` for `queue_name`, asking for `attrs` (`MQIA_*`/`MQCA_*`).
    pub fn inquire_queue(queue_name: &str, attrs: &[MQLONG]) -> Result<Self, PcfError> {
        if queue_name.len() > MQ_Q_NAME_LENGTH {
            return Err(PcfError::TooLong {
                length: queue_name.len(),
            });
        }
        Ok(Self::command(MQCMD_INQUIRE_Q)
            .with(PcfParameter::string(MQCA_Q_NAME, queue_name))
            .with(PcfParameter::integer_list(MQIACF_Q_ATTRS, attrs)))
    }

    pub fn with(mut self, parameter: PcfParameter) -> Self {
        self.parameters.push(parameter);
        self
    }

    pub fn push(&mut self, parameter: PcfParameter) {
        self.parameters.push(parameter);
    }

    /// Total serialized length.
    pub fn struc_length(&self) -> usize {
        MQCFH_STRUC_LENGTH as usize
            + self
                .parameters
                .iter()
                .map(PcfParameter::struc_length)
                .sum::<usize>()
    }

    /// Serialize the header and all parameters. `ParameterCount` is taken from
    /// the parameter list, not from `header`.
    pub fn to_bytes(&self) -> Result<Bytes, PcfError> {
        let mut buf = BytesMut::with_capacity(self.struc_length());
        let h = &self.header;
        buf.put_i32_ne(h.cf_type);
        buf.put_i32_ne(MQCFH_STRUC_LENGTH);
        buf.put_i32_ne(h.version);
        buf.put_i32_ne(h.command);
        buf.put_i32_ne(h.msg_seq_number);
        buf.put_i32_ne(h.control);
        buf.put_i32_ne(h.comp_code);
        buf.put_i32_ne(h.reason);
        buf.put_i32_ne(to_long(self.parameters.len())?);

        for parameter in &self.parameters {
            parameter.encode(&mut buf)?;
        }
        Ok(buf.freeze())
    }

    /// Parse one message from the start of `bytes`.
    pub fn parse(bytes: &[u8]) -> Result<Self, PcfError> {
        let header_length = MQCFH_STRUC_LENGTH as usize;
        if bytes.len() < header_length {
            return Err(PcfError::Truncated {
                offset: 0,
                needed: header_length,
                available: bytes.len(),
            });
        }

        let mut cursor = bytes;
        let header = Mqcfh {
            cf_type: cursor.get_i32_ne(),
            struc_length: cursor.get_i32_ne(),
            version: cursor.get_i32_ne(),
            command: cursor.get_i32_ne(),
            msg_seq_number: cursor.get_i32_ne(),
            control: cursor.get_i32_ne(),
            comp_code: cursor.get_i32_ne(),
            reason: cursor.get_i32_ne(),
            parameter_count: cursor.get_i32_ne(),
        };

        match header.cf_type {
            MQCFT_COMMAND | MQCFT_RESPONSE | MQCFT_EVENT | MQCFT_USER | MQCFT_REPORT
            | MQCFT_COMMAND_XR | MQCFT_XR_MSG | MQCFT_XR_ITEM | MQCFT_XR_SUMMARY => {}
            cf_type => return Err(PcfError::UnknownType { offset: 0, cf_type }),
        }
        if header.struc_length != MQCFH_STRUC_LENGTH {
            return Err(PcfError::BadStrucLength {
                offset: 0,
                cf_type: header.cf_type,
                struc_length: header.struc_length,
            });
        }
        let declared = usize::try_from(header.parameter_count).map_err(|_| {
            PcfError::ParameterCountMismatch {
                declared: header.parameter_count,
                found: 0,
            }
        })?;

        let mut reader = PcfReader::with_base(&bytes[header_length..], header_length);
        let mut parameters = Vec::with_capacity(declared.min(64));
        while parameters.len() < declared {
            match reader.next() {
                Some(parameter) => parameters.push(parameter?),
                None => {
                    return Err(PcfError::ParameterCountMismatch {
                        declared: header.parameter_count,
                        found: parameters.len(),
                    })
                }
            }
        }

        Ok(Self { header, parameters })
    }

    /// Completion and reason of a response message.
    pub fn status(&self) -> MqStatus {
        MqStatus::from_raw(self.header.comp_code, self.header.reason)
    }

    /// Whether this is the final message of a response set.
    pub fn is_last(&self) -> bool {
        self.header.control == MQCFC_LAST
    }

    fn find(&self, parameter: MQLONG) -> Option<&PcfParameter> {
        self.parameters.iter().find(|p| p.parameter() == parameter)
    }

    pub fn integer(&self, parameter: MQLONG) -> Option<MQLONG> {
        match self.find(parameter)? {
            PcfParameter::Integer { value, .. } => Some(*value),
            _ => None,
        }
    }

    /// String parameter with trailing blanks removed.
    pub fn string(&self, parameter: MQLONG) -> Option<String> {
        match self.find(parameter)? {
            PcfParameter::String { value, .. } => {
                Some(String::from_utf8_lossy(trim_blanks(value)).into_owned())
            }
            _ => None,
        }
    }

    pub fn integer_list(&self, parameter: MQLONG) -> Option<&[MQLONG]> {
        match self.find(parameter)? {
            PcfParameter::IntegerList { values, .. } => Some(values),
            _ => None,
        }
    }

    pub fn string_list(&self, parameter: MQLONG) -> Option<Vec<String>> {
        match self.find(parameter)? {
            PcfParameter::StringList { values, .. } => Some(
                values
                    .iter()
                    .map(|v| String::from_utf8_lossy(v).into_owned())
                    .collect(),
            ),
            _ => None,
        }
    }
}
