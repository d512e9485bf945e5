//! Completion and reason codes.
//!
//! Every MQI call yields a coarse completion code and a fine-grained reason code.
//! Callers branch on the completion code first.

use std::fmt;

use crate::pcf::PcfError;
use crate::types::MQLONG;

/// Successful completion.
pub const MQCC_OK: MQLONG = 0;
/// Partial completion.
pub const MQCC_WARNING: MQLONG = 1;
/// Call failed.
pub const MQCC_FAILED: MQLONG = 2;
/// Completion code not known.
pub const MQCC_UNKNOWN: MQLONG = -1;

/// Coarse completion code.
#[repr(transparent)]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct CompCode(pub MQLONG);

impl CompCode {
    pub const OK: Self = CompCode(MQCC_OK);
    pub const WARNING: Self = CompCode(MQCC_WARNING);
    pub const FAILED: Self = CompCode(MQCC_FAILED);
    pub const UNKNOWN: Self = CompCode(MQCC_UNKNOWN);

    /// Symbolic name, when the value is known.
    pub fn name(self) -> Option<&'static str> {
        match self.0 {
            MQCC_OK => Some("MQCC_OK"),
            MQCC_WARNING => Some("MQCC_WARNING"),
            MQCC_FAILED => Some("MQCC_FAILED"),
            MQCC_UNKNOWN => Some("MQCC_UNKNOWN"),
            _ => None,
        }
    }
}

impl fmt::Display for CompCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => write!(f, "{} ({})", name, self.0),
            None => write!(f, "{}", self.0),
        }
    }
}

/// Fine-grained reason code.
#[repr(transparent)]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Reason(pub MQLONG);

macro_rules! reason_codes {
    ($($raw:ident / $assoc:ident = $value:literal;)*) => {
        $(
            pub const $raw: MQLONG = $value;
        )*

        impl Reason {
            $(
                pub const $assoc: Reason = Reason($raw);
            )*

            /// Symbolic name, when the value is known.
            pub fn name(self) -> Option<&'static str> {
                match self.0 {
                    $( $value => Some(stringify!($raw)), )*
                    _ => None,
                }
            }
        }

        /// Every known reason code.
        pub const KNOWN_REASONS: &[MQLONG] = &[$($raw),*];
    };
}

reason_codes! {
    MQRC_NONE / NONE = 0;
    MQRC_ALIAS_BASE_Q_TYPE_ERROR / ALIAS_BASE_Q_TYPE_ERROR = 2001;
    MQRC_ALREADY_CONNECTED / ALREADY_CONNECTED = 2002;
    MQRC_BACKED_OUT / BACKED_OUT = 2003;
    MQRC_BUFFER_ERROR / BUFFER_ERROR = 2004;
    MQRC_BUFFER_LENGTH_ERROR / BUFFER_LENGTH_ERROR = 2005;
    MQRC_CHAR_ATTR_LENGTH_ERROR / CHAR_ATTR_LENGTH_ERROR = 2006;
    MQRC_CHAR_ATTRS_ERROR / CHAR_ATTRS_ERROR = 2007;
    MQRC_CHAR_ATTRS_TOO_SHORT / CHAR_ATTRS_TOO_SHORT = 2008;
    MQRC_CONNECTION_BROKEN / CONNECTION_BROKEN = 2009;
    MQRC_DATA_LENGTH_ERROR / DATA_LENGTH_ERROR = 2010;
    MQRC_DYNAMIC_Q_NAME_ERROR / DYNAMIC_Q_NAME_ERROR = 2011;
    MQRC_EXPIRY_ERROR / EXPIRY_ERROR = 2013;
    MQRC_FEEDBACK_ERROR / FEEDBACK_ERROR = 2014;
    MQRC_GET_INHIBITED / GET_INHIBITED = 2016;
    MQRC_HANDLE_NOT_AVAILABLE / HANDLE_NOT_AVAILABLE = 2017;
    MQRC_HCONN_ERROR / HCONN_ERROR = 2018;
    MQRC_HOBJ_ERROR / HOBJ_ERROR = 2019;
    MQRC_INHIBIT_VALUE_ERROR / INHIBIT_VALUE_ERROR = 2020;
    MQRC_INT_ATTR_COUNT_ERROR / INT_ATTR_COUNT_ERROR = 2021;
    MQRC_INT_ATTR_COUNT_TOO_SMALL / INT_ATTR_COUNT_TOO_SMALL = 2022;
    MQRC_INT_ATTRS_ARRAY_ERROR / INT_ATTRS_ARRAY_ERROR = 2023;
    MQRC_SYNCPOINT_LIMIT_REACHED / SYNCPOINT_LIMIT_REACHED = 2024;
    MQRC_MAX_CONNS_LIMIT_REACHED / MAX_CONNS_LIMIT_REACHED = 2025;
    MQRC_MD_ERROR / MD_ERROR = 2026;
    MQRC_MISSING_REPLY_TO_Q / MISSING_REPLY_TO_Q = 2027;
    MQRC_MSG_TYPE_ERROR / MSG_TYPE_ERROR = 2029;
    MQRC_MSG_TOO_BIG_FOR_Q / MSG_TOO_BIG_FOR_Q = 2030;
    MQRC_MSG_TOO_BIG_FOR_Q_MGR / MSG_TOO_BIG_FOR_Q_MGR = 2031;
    MQRC_NO_MSG_AVAILABLE / NO_MSG_AVAILABLE = 2033;
    MQRC_NO_MSG_UNDER_CURSOR / NO_MSG_UNDER_CURSOR = 2034;
    MQRC_NOT_AUTHORIZED / NOT_AUTHORIZED = 2035;
    MQRC_NOT_OPEN_FOR_BROWSE / NOT_OPEN_FOR_BROWSE = 2036;
    MQRC_NOT_OPEN_FOR_INPUT / NOT_OPEN_FOR_INPUT = 2037;
    MQRC_NOT_OPEN_FOR_INQUIRE / NOT_OPEN_FOR_INQUIRE = 2038;
    MQRC_NOT_OPEN_FOR_OUTPUT / NOT_OPEN_FOR_OUTPUT = 2039;
    MQRC_NOT_OPEN_FOR_SET / NOT_OPEN_FOR_SET = 2040;
    MQRC_OBJECT_CHANGED / OBJECT_CHANGED = 2041;
    MQRC_OBJECT_IN_USE / OBJECT_IN_USE = 2042;
    MQRC_OBJECT_TYPE_ERROR / OBJECT_TYPE_ERROR = 2043;
    MQRC_OD_ERROR / OD_ERROR = 2044;
    MQRC_OPTION_NOT_VALID_FOR_TYPE / OPTION_NOT_VALID_FOR_TYPE = 2045;
    MQRC_OPTIONS_ERROR / OPTIONS_ERROR = 2046;
    MQRC_PERSISTENCE_ERROR / PERSISTENCE_ERROR = 2047;
    MQRC_PERSISTENT_NOT_ALLOWED / PERSISTENT_NOT_ALLOWED = 2048;
    MQRC_PRIORITY_EXCEEDS_MAXIMUM / PRIORITY_EXCEEDS_MAXIMUM = 2049;
    MQRC_PRIORITY_ERROR / PRIORITY_ERROR = 2050;
    MQRC_PUT_INHIBITED / PUT_INHIBITED = 2051;
    MQRC_Q_DELETED / Q_DELETED = 2052;
    MQRC_Q_FULL / Q_FULL = 2053;
    MQRC_Q_NOT_EMPTY / Q_NOT_EMPTY = 2055;
    MQRC_Q_SPACE_NOT_AVAILABLE / Q_SPACE_NOT_AVAILABLE = 2056;
    MQRC_Q_TYPE_ERROR / Q_TYPE_ERROR = 2057;
    MQRC_Q_MGR_NAME_ERROR / Q_MGR_NAME_ERROR = 2058;
    MQRC_Q_MGR_NOT_AVAILABLE / Q_MGR_NOT_AVAILABLE = 2059;
    MQRC_REPORT_OPTIONS_ERROR / REPORT_OPTIONS_ERROR = 2061;
    MQRC_SECURITY_ERROR / SECURITY_ERROR = 2063;
    MQRC_SELECTOR_COUNT_ERROR / SELECTOR_COUNT_ERROR = 2065;
    MQRC_SELECTOR_LIMIT_EXCEEDED / SELECTOR_LIMIT_EXCEEDED = 2066;
    MQRC_SELECTOR_ERROR / SELECTOR_ERROR = 2067;
    MQRC_SELECTOR_NOT_FOR_TYPE / SELECTOR_NOT_FOR_TYPE = 2068;
    MQRC_SIGNAL_OUTSTANDING / SIGNAL_OUTSTANDING = 2069;
    MQRC_SIGNAL_REQUEST_ACCEPTED / SIGNAL_REQUEST_ACCEPTED = 2070;
    MQRC_STORAGE_NOT_AVAILABLE / STORAGE_NOT_AVAILABLE = 2071;
    MQRC_SYNCPOINT_NOT_AVAILABLE / SYNCPOINT_NOT_AVAILABLE = 2072;
    MQRC_TRUNCATED_MSG_ACCEPTED / TRUNCATED_MSG_ACCEPTED = 2079;
    MQRC_TRUNCATED_MSG_FAILED / TRUNCATED_MSG_FAILED = 2080;
    MQRC_UNKNOWN_ALIAS_BASE_Q / UNKNOWN_ALIAS_BASE_Q = 2082;
    MQRC_UNKNOWN_OBJECT_NAME / UNKNOWN_OBJECT_NAME = 2085;
    MQRC_UNKNOWN_OBJECT_Q_MGR / UNKNOWN_OBJECT_Q_MGR = 2086;
    MQRC_UNKNOWN_REMOTE_Q_MGR / UNKNOWN_REMOTE_Q_MGR = 2087;
    MQRC_WAIT_INTERVAL_ERROR / WAIT_INTERVAL_ERROR = 2090;
    MQRC_XMIT_Q_TYPE_ERROR / XMIT_Q_TYPE_ERROR = 2091;
    MQRC_XMIT_Q_USAGE_ERROR / XMIT_Q_USAGE_ERROR = 2092;
    MQRC_OBJECT_ALREADY_EXISTS / OBJECT_ALREADY_EXISTS = 2100;
    MQRC_OBJECT_DAMAGED / OBJECT_DAMAGED = 2101;
    MQRC_RESOURCE_PROBLEM / RESOURCE_PROBLEM = 2102;
    MQRC_FORMAT_ERROR / FORMAT_ERROR = 2110;
    MQRC_NOT_CONVERTED / NOT_CONVERTED = 2119;
    MQRC_CONVERTED_MSG_TOO_BIG / CONVERTED_MSG_TOO_BIG = 2120;
    MQRC_CNO_ERROR / CNO_ERROR = 2139;
    MQRC_Q_MGR_QUIESCING / Q_MGR_QUIESCING = 2161;
    MQRC_Q_MGR_STOPPING / Q_MGR_STOPPING = 2162;
    MQRC_PMO_ERROR / PMO_ERROR = 2173;
    MQRC_GMO_ERROR / GMO_ERROR = 2186;
    MQRC_UNEXPECTED_ERROR / UNEXPECTED_ERROR = 2195;
    MQRC_CONNECTION_QUIESCING / CONNECTION_QUIESCING = 2202;
    MQRC_CONNECTION_STOPPING / CONNECTION_STOPPING = 2203;
    MQRC_CONNECTION_NOT_AUTHORIZED / CONNECTION_NOT_AUTHORIZED = 2217;
    MQRC_CALL_IN_PROGRESS / CALL_IN_PROGRESS = 2219;
    MQRC_CD_ERROR / CD_ERROR = 2277;
    MQRC_CLIENT_CONN_ERROR / CLIENT_CONN_ERROR = 2278;
    MQRC_SSL_INITIALIZATION_ERROR / SSL_INITIALIZATION_ERROR = 2393;
    MQRC_CHANNEL_NOT_AVAILABLE / CHANNEL_NOT_AVAILABLE = 2537;
    MQRC_HOST_NOT_AVAILABLE / HOST_NOT_AVAILABLE = 2538;
    MQRC_CHANNEL_CONFIG_ERROR / CHANNEL_CONFIG_ERROR = 2539;
    MQRC_UNKNOWN_CHANNEL_NAME / UNKNOWN_CHANNEL_NAME = 2540;
    MQRC_RECONNECTING / RECONNECTING = 2544;
    MQRC_RECONNECTED / RECONNECTED = 2545;
    MQRC_RECONNECT_FAILED / RECONNECT_FAILED = 2548;
}

/// Older name for [`MQRC_Q_MGR_NAME_ERROR`].
pub const MQRC_UNKNOWN_Q_MGR: MQLONG = MQRC_Q_MGR_NAME_ERROR;

impl fmt::Display for Reason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => write!(f, "{} ({})", name, self.0),
            None => write!(f, "reason {}", self.0),
        }
    }
}

/// Completion and reason code pair returned by every MQI call.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct MqStatus {
    pub comp_code: CompCode,
    pub reason: Reason,
}

impl MqStatus {
    pub const OK: Self = MqStatus {
        comp_code: CompCode::OK,
        reason: Reason::NONE,
    };

    /// Build a status from raw output values.
    pub const fn from_raw(comp_code: MQLONG, reason: MQLONG) -> Self {
        Self {
            comp_code: CompCode(comp_code),
            reason: Reason(reason),
        }
    }

    /// A failed completion with `reason`.
    pub const fn failed(reason: Reason) -> Self {
        Self {
            comp_code: CompCode::FAILED,
            reason,
        }
    }

    /// A warning completion with `reason`.
    pub const fn warning(reason: Reason) -> Self {
        Self {
            comp_code: CompCode::WARNING,
            reason,
        }
    }

    pub fn is_ok(&self) -> bool {
        self.comp_code == CompCode::OK
    }

    pub fn is_warning(&self) -> bool {
        self.comp_code == CompCode::WARNING
    }

    pub fn is_failed(&self) -> bool {
        self.comp_code == CompCode::FAILED
    }

    /// Convert to a `Result`, treating anything but `OK`/`WARNING` as an error.
    pub fn check(self, operation: &'static str) -> Result<MqStatus, MqError> {
        match self.comp_code {
            CompCode::OK | CompCode::WARNING => Ok(self),
            comp_code => Err(MqError::Call {
                operation,
                comp_code,
                reason: self.reason,
            }),
        }
    }
}

/// Errors surfaced by the safe client layer.
#[derive(Debug, thiserror::Error)]
pub enum MqError {
    #[error("{operation} failed: {reason}, completion code {comp_code}")]
    Call {
        operation: &'static str,
        comp_code: CompCode,
        reason: Reason,
    },

    #[error("'{name}' exceeds {max} characters")]
    NameTooLong { name: String, max: usize },

    #[error("{field} length {length} does not fit an MQLONG")]
    LengthOverflow { field: &'static str, length: usize },

    #[error("Object handle is not usable")]
    UnusableHandle,

    #[error("PCF error: {0}")]
    Pcf(#[from] PcfError),
}

impl MqError {
    /// Reason code of a failed call, if this is one.
    pub fn reason(&self) -> Option<Reason> {
        match self {
            MqError::Call { reason, .. } => Some(*reason),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_completion_code_values() {
        assert_eq!(CompCode::OK.0, 0);
        assert_eq!(CompCode::WARNING.0, 1);
        assert_eq!(CompCode::FAILED.0, 2);
    }

    #[test]
    fn test_reason_names() {
        assert_eq!(Reason::Q_MGR_NOT_AVAILABLE.0, 2059);
        assert_eq!(
            Reason::Q_MGR_NOT_AVAILABLE.name(),
            Some("MQRC_Q_MGR_NOT_AVAILABLE")
        );
        assert_eq!(Reason::NONE.name(), Some("MQRC_NONE"));
        assert_eq!(Reason(99999).name(), None);
    }

    #[test]
    fn test_reason_display() {
        assert_eq!(
            Reason::NO_MSG_AVAILABLE.to_string(),
            "MQRC_NO_MSG_AVAILABLE (2033)"
        );
        assert_eq!(Reason(42).to_string(), "reason 42");
        assert_eq!(CompCode::FAILED.to_string(), "MQCC_FAILED (2)");
    }

    #[test]
    fn test_known_reasons_are_unique() {
        let mut values = KNOWN_REASONS.to_vec();
        values.sort_unstable();
        values.dedup();
        assert_eq!(values.len(), KNOWN_REASONS.len());
    }

    #[test]
    fn test_vendor_values() {
        assert_eq!(MQRC_CONNECTION_BROKEN, 2009);
        assert_eq!(MQRC_NOT_AUTHORIZED, 2035);
        assert_eq!(MQRC_Q_FULL, 2053);
        assert_eq!(MQRC_OBJECT_CHANGED, 2041);
        assert_eq!(MQRC_OBJECT_ALREADY_EXISTS, 2100);
        assert_eq!(MQRC_UNKNOWN_Q_MGR, 2058);
        assert_eq!(MQRC_HOST_NOT_AVAILABLE, 2538);
    }

    #[test]
    fn test_check() {
        assert!(MqStatus::OK.check("MQCONNX").is_ok());
        assert!(MqStatus::warning(Reason::TRUNCATED_MSG_ACCEPTED)
            .check("MQGET")
            .is_ok());

        let err = MqStatus::failed(Reason::Q_MGR_NOT_AVAILABLE)
            .check("MQCONNX")
            .unwrap_err();
        assert_eq!(err.reason(), Some(Reason::Q_MGR_NOT_AVAILABLE));
        assert_eq!(
            err.to_string(),
            "MQCONNX failed: MQRC_Q_MGR_NOT_AVAILABLE (2059), completion code MQCC_FAILED (2)"
        );
    }

    #[test]
    fn test_unknown_comp_code_is_error() {
        assert!(MqStatus::from_raw(7, 0).check("MQDISC").is_err());
    }
}
