//! MQI constants: field lengths, structure versions, eye catchers and enumerations.
//!
//! Option bit values live in [`crate::options`], reason codes in [`crate::status`]
//! and PCF constants in [`crate::pcf`].

use crate::types::{MQBYTE24, MQCHAR, MQHMSG, MQLONG};

// ---------------------------------------------------------------------------
//  Field lengths
// ---------------------------------------------------------------------------

pub const MQ_Q_MGR_NAME_LENGTH: usize = 48;
pub const MQ_Q_NAME_LENGTH: usize = 48;
pub const MQ_OBJECT_NAME_LENGTH: usize = 48;
pub const MQ_CHANNEL_NAME_LENGTH: usize = 20;
pub const MQ_CHANNEL_DESC_LENGTH: usize = 64;
pub const MQ_CONN_NAME_LENGTH: usize = 264;
pub const MQ_SHORT_CONN_NAME_LENGTH: usize = 20;
pub const MQ_MCA_NAME_LENGTH: usize = 20;
pub const MQ_MODE_NAME_LENGTH: usize = 8;
pub const MQ_TP_NAME_LENGTH: usize = 64;
pub const MQ_EXIT_NAME_LENGTH: usize = 128;
pub const MQ_EXIT_DATA_LENGTH: usize = 32;
pub const MQ_USER_ID_LENGTH: usize = 12;
pub const MQ_PASSWORD_LENGTH: usize = 12;
pub const MQ_SECURITY_ID_LENGTH: usize = 40;
pub const MQ_SSL_CIPHER_SPEC_LENGTH: usize = 32;
pub const MQ_LOCAL_ADDRESS_LENGTH: usize = 48;
pub const MQ_CERT_LABEL_LENGTH: usize = 64;
pub const MQ_CONN_TAG_LENGTH: usize = 128;
pub const MQ_CONNECTION_ID_LENGTH: usize = 24;
pub const MQ_MSG_ID_LENGTH: usize = 24;
pub const MQ_CORREL_ID_LENGTH: usize = 24;
pub const MQ_GROUP_ID_LENGTH: usize = 24;
pub const MQ_MSG_TOKEN_LENGTH: usize = 16;
pub const MQ_FORMAT_LENGTH: usize = 8;
pub const MQ_ACCOUNTING_TOKEN_LENGTH: usize = 32;
pub const MQ_APPL_IDENTITY_DATA_LENGTH: usize = 32;
pub const MQ_APPL_ORIGIN_DATA_LENGTH: usize = 4;
pub const MQ_PUT_APPL_NAME_LENGTH: usize = 28;
pub const MQ_PUT_DATE_LENGTH: usize = 8;
pub const MQ_PUT_TIME_LENGTH: usize = 8;

// ---------------------------------------------------------------------------
//  Structure identifiers and versions
// ---------------------------------------------------------------------------

pub const MQCNO_STRUC_ID: [u8; 4] = *b"CNO ";
pub const MQCSP_STRUC_ID: [u8; 4] = *b"CSP ";
pub const MQOD_STRUC_ID: [u8; 4] = *b"OD  ";
pub const MQMD_STRUC_ID: [u8; 4] = *b"MD  ";
pub const MQGMO_STRUC_ID: [u8; 4] = *b"GMO ";
pub const MQPMO_STRUC_ID: [u8; 4] = *b"PMO ";

pub const MQCD_VERSION_1: MQLONG = 1;
pub const MQCD_VERSION_11: MQLONG = 11;
pub const MQCD_CURRENT_VERSION: MQLONG = MQCD_VERSION_11;

pub const MQCNO_VERSION_1: MQLONG = 1;
pub const MQCNO_VERSION_2: MQLONG = 2;
pub const MQCNO_VERSION_4: MQLONG = 4;
pub const MQCNO_VERSION_5: MQLONG = 5;
pub const MQCNO_CURRENT_VERSION: MQLONG = MQCNO_VERSION_5;

pub const MQCSP_VERSION_1: MQLONG = 1;
pub const MQCSP_CURRENT_VERSION: MQLONG = MQCSP_VERSION_1;

pub const MQOD_VERSION_1: MQLONG = 1;
pub const MQOD_VERSION_4: MQLONG = 4;
pub const MQOD_CURRENT_VERSION: MQLONG = MQOD_VERSION_4;

pub const MQMD_VERSION_1: MQLONG = 1;
pub const MQMD_VERSION_2: MQLONG = 2;
pub const MQMD_CURRENT_VERSION: MQLONG = MQMD_VERSION_2;

pub const MQGMO_VERSION_1: MQLONG = 1;
pub const MQGMO_VERSION_2: MQLONG = 2;
pub const MQGMO_VERSION_3: MQLONG = 3;
pub const MQGMO_VERSION_4: MQLONG = 4;
pub const MQGMO_CURRENT_VERSION: MQLONG = MQGMO_VERSION_4;

pub const MQPMO_VERSION_1: MQLONG = 1;
pub const MQPMO_VERSION_2: MQLONG = 2;
pub const MQPMO_VERSION_3: MQLONG = 3;
pub const MQPMO_CURRENT_VERSION: MQLONG = MQPMO_VERSION_3;

// ---------------------------------------------------------------------------
//  Structure lengths (vendor published values per version)
// ---------------------------------------------------------------------------

pub const MQMD_LENGTH_2: usize = 364;
pub const MQGMO_LENGTH_4: usize = 112;

#[cfg(target_pointer_width = "64")]
mod lengths {
    pub const MQCNO_LENGTH_5: usize = 224;
    pub const MQCSP_LENGTH_1: usize = 56;
    pub const MQOD_LENGTH_4: usize = 424;
    pub const MQPMO_LENGTH_3: usize = 184;
    pub const MQCHARV_LENGTH: usize = 24;
}

#[cfg(target_pointer_width = "32")]
mod lengths {
    pub const MQCNO_LENGTH_5: usize = 208;
    pub const MQCSP_LENGTH_1: usize = 48;
    pub const MQOD_LENGTH_4: usize = 400;
    pub const MQPMO_LENGTH_3: usize = 176;
    pub const MQCHARV_LENGTH: usize = 20;
}

pub use lengths::*;

// ---------------------------------------------------------------------------
//  Object and queue types
// ---------------------------------------------------------------------------

pub const MQOT_Q: MQLONG = 1;
pub const MQOT_NAMELIST: MQLONG = 2;
pub const MQOT_PROCESS: MQLONG = 3;
pub const MQOT_Q_MGR: MQLONG = 5;
pub const MQOT_CHANNEL: MQLONG = 6;
pub const MQOT_TOPIC: MQLONG = 8;

pub const MQQT_LOCAL: MQLONG = 1;
pub const MQQT_MODEL: MQLONG = 2;
pub const MQQT_ALIAS: MQLONG = 3;
pub const MQQT_REMOTE: MQLONG = 6;
pub const MQQT_CLUSTER: MQLONG = 7;
pub const MQQT_ALL: MQLONG = 1001;

// ---------------------------------------------------------------------------
//  Message descriptor values
// ---------------------------------------------------------------------------

pub const MQMT_REQUEST: MQLONG = 1;
pub const MQMT_REPLY: MQLONG = 2;
pub const MQMT_REPORT: MQLONG = 4;
pub const MQMT_DATAGRAM: MQLONG = 8;

pub const MQPER_NOT_PERSISTENT: MQLONG = 0;
pub const MQPER_PERSISTENT: MQLONG = 1;
pub const MQPER_PERSISTENCE_AS_Q_DEF: MQLONG = 2;

pub const MQPRI_PRIORITY_AS_Q_DEF: MQLONG = -1;
pub const MQEI_UNLIMITED: MQLONG = -1;
pub const MQFB_NONE: MQLONG = 0;
pub const MQRO_NONE: MQLONG = 0;
pub const MQAT_NO_CONTEXT: MQLONG = 0;
pub const MQMF_NONE: MQLONG = 0;
pub const MQOL_UNDEFINED: MQLONG = -1;

pub const MQMI_NONE: MQBYTE24 = [0; 24];
pub const MQCI_NONE: MQBYTE24 = [0; 24];
pub const MQGI_NONE: MQBYTE24 = [0; 24];

pub const MQFMT_NONE: [u8; MQ_FORMAT_LENGTH] = *b"        ";
pub const MQFMT_STRING: [u8; MQ_FORMAT_LENGTH] = *b"MQSTR   ";
pub const MQFMT_ADMIN: [u8; MQ_FORMAT_LENGTH] = *b"MQADMIN ";
pub const MQFMT_PCF: [u8; MQ_FORMAT_LENGTH] = *b"MQPCF   ";

pub const MQCCSI_DEFAULT: MQLONG = 0;
pub const MQCCSI_Q_MGR: MQLONG = 0;
pub const MQCCSI_APPL: MQLONG = -3;

/// `MQCHARV` length meaning "up to the first null".
pub const MQVS_NULL_TERMINATED: MQLONG = -1;

pub const MQENC_INTEGER_NORMAL: MQLONG = 0x0001;
pub const MQENC_INTEGER_REVERSED: MQLONG = 0x0002;
pub const MQENC_DECIMAL_NORMAL: MQLONG = 0x0010;
pub const MQENC_DECIMAL_REVERSED: MQLONG = 0x0020;
pub const MQENC_FLOAT_IEEE_NORMAL: MQLONG = 0x0100;
pub const MQENC_FLOAT_IEEE_REVERSED: MQLONG = 0x0200;

/// Native numeric encoding of this target.
#[cfg(target_endian = "little")]
pub const MQENC_NATIVE: MQLONG =
    MQENC_INTEGER_REVERSED | MQENC_DECIMAL_REVERSED | MQENC_FLOAT_IEEE_REVERSED;
/// Native numeric encoding of this target.
#[cfg(target_endian = "big")]
pub const MQENC_NATIVE: MQLONG =
    MQENC_INTEGER_NORMAL | MQENC_DECIMAL_NORMAL | MQENC_FLOAT_IEEE_NORMAL;

pub const MQWI_UNLIMITED: MQLONG = -1;

pub const MQGS_NOT_IN_GROUP: MQCHAR = b' ' as MQCHAR;
pub const MQSS_NOT_A_SEGMENT: MQCHAR = b' ' as MQCHAR;
pub const MQSEG_INHIBITED: MQCHAR = b' ' as MQCHAR;

pub const MQACTP_NEW: MQLONG = 0;
pub const MQPUBLEVEL_ALL: MQLONG = 9;
pub const MQHM_NONE: MQHMSG = 0;
pub const MQHM_UNUSABLE_HMSG: MQHMSG = -1;

// ---------------------------------------------------------------------------
//  Channel definition values
// ---------------------------------------------------------------------------

pub const MQCHT_SENDER: MQLONG = 1;
pub const MQCHT_SERVER: MQLONG = 2;
pub const MQCHT_RECEIVER: MQLONG = 3;
pub const MQCHT_REQUESTER: MQLONG = 4;
pub const MQCHT_CLNTCONN: MQLONG = 6;
pub const MQCHT_SVRCONN: MQLONG = 7;

pub const MQXPT_LU62: MQLONG = 1;
pub const MQXPT_TCP: MQLONG = 2;

pub const MQCD_CLIENT_MAX_MSG_LENGTH: MQLONG = 4_194_304;
pub const MQMCAT_PROCESS: MQLONG = 1;
pub const MQCDC_NO_SENDER_CONVERSION: MQLONG = 0;
pub const MQPA_DEFAULT: MQLONG = 1;
pub const MQNPMS_FAST: MQLONG = 2;
pub const MQSCA_REQUIRED: MQLONG = 0;
pub const MQKAI_AUTO: MQLONG = -1;
pub const MQCOMPRESS_NONE: MQLONG = 0;
pub const MQCOMPRESS_NOT_AVAILABLE: MQLONG = -1;
pub const MQMON_OFF: MQLONG = 0;
pub const MQMON_Q_MGR: MQLONG = -3;
pub const MQCAFTY_PREFERRED: MQLONG = 1;
pub const MQUSEDLQ_YES: MQLONG = 2;
pub const MQRCN_NO: MQLONG = 0;
pub const MQPROP_COMPATIBILITY: MQLONG = 0;

// ---------------------------------------------------------------------------
//  Security parameters
// ---------------------------------------------------------------------------

pub const MQCSP_AUTH_NONE: MQLONG = 0;
pub const MQCSP_AUTH_USER_ID_AND_PWD: MQLONG = 1;

// ---------------------------------------------------------------------------
//  Attribute selectors
// ---------------------------------------------------------------------------

pub const MQIA_CURRENT_Q_DEPTH: MQLONG = 3;
pub const MQIA_INHIBIT_GET: MQLONG = 9;
pub const MQIA_INHIBIT_PUT: MQLONG = 10;
pub const MQIA_MAX_Q_DEPTH: MQLONG = 15;
pub const MQIA_OPEN_INPUT_COUNT: MQLONG = 17;
pub const MQIA_OPEN_OUTPUT_COUNT: MQLONG = 18;
pub const MQIA_Q_TYPE: MQLONG = 20;

pub const MQCA_Q_NAME: MQLONG = 2016;
pub const MQCA_Q_DESC: MQLONG = 2013;

pub const MQQA_GET_ALLOWED: MQLONG = 0;
pub const MQQA_GET_INHIBITED: MQLONG = 1;
pub const MQQA_PUT_ALLOWED: MQLONG = 0;
pub const MQQA_PUT_INHIBITED: MQLONG = 1;
