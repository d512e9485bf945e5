//! MQMD: message descriptor.

use crate::constants::*;
use crate::status::MqError;
use crate::types::{const_chars, mq_str, set_mq_chars, MQBYTE, MQBYTE24, MQCHAR, MQLONG};

/// Message descriptor (`MQMD`), version 2 layout.
///
/// `msg_id`, `correl_id` and `group_id` are opaque bytes; compare them
/// bytewise, never as strings.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mqmd {
    pub struc_id: [MQCHAR; 4],
    pub version: MQLONG,
    pub report: MQLONG,
    pub msg_type: MQLONG,
    pub expiry: MQLONG,
    pub feedback: MQLONG,
    pub encoding: MQLONG,
    pub coded_char_set_id: MQLONG,
    pub format: [MQCHAR; MQ_FORMAT_LENGTH],
    pub priority: MQLONG,
    pub persistence: MQLONG,
    pub msg_id: MQBYTE24,
    pub correl_id: MQBYTE24,
    pub backout_count: MQLONG,
    pub reply_to_q: [MQCHAR; MQ_Q_NAME_LENGTH],
    pub reply_to_q_mgr: [MQCHAR; MQ_Q_MGR_NAME_LENGTH],
    pub user_identifier: [MQCHAR; MQ_USER_ID_LENGTH],
    pub accounting_token: [MQBYTE; MQ_ACCOUNTING_TOKEN_LENGTH],
    pub appl_identity_data: [MQCHAR; MQ_APPL_IDENTITY_DATA_LENGTH],
    pub put_appl_type: MQLONG,
    pub put_appl_name: [MQCHAR; MQ_PUT_APPL_NAME_LENGTH],
    pub put_date: [MQCHAR; MQ_PUT_DATE_LENGTH],
    pub put_time: [MQCHAR; MQ_PUT_TIME_LENGTH],
    pub appl_origin_data: [MQCHAR; MQ_APPL_ORIGIN_DATA_LENGTH],
    pub group_id: MQBYTE24,
    pub msg_seq_number: MQLONG,
    pub offset: MQLONG,
    pub msg_flags: MQLONG,
    pub original_length: MQLONG,
}

impl Default for Mqmd {
    fn default() -> Self {
        Self {
            struc_id: const_chars(&MQMD_STRUC_ID),
            version: MQMD_CURRENT_VERSION,
            report: MQRO_NONE,
            msg_type: MQMT_DATAGRAM,
            expiry: MQEI_UNLIMITED,
            feedback: MQFB_NONE,
            encoding: MQENC_NATIVE,
            coded_char_set_id: MQCCSI_Q_MGR,
            format: const_chars(&MQFMT_NONE),
            priority: MQPRI_PRIORITY_AS_Q_DEF,
            persistence: MQPER_PERSISTENCE_AS_Q_DEF,
            msg_id: MQMI_NONE,
            correl_id: MQCI_NONE,
            backout_count: 0,
            reply_to_q: [0; MQ_Q_NAME_LENGTH],
            reply_to_q_mgr: [0; MQ_Q_MGR_NAME_LENGTH],
            user_identifier: [0; MQ_USER_ID_LENGTH],
            accounting_token: [0; MQ_ACCOUNTING_TOKEN_LENGTH],
            appl_identity_data: [0; MQ_APPL_IDENTITY_DATA_LENGTH],
            put_appl_type: MQAT_NO_CONTEXT,
            put_appl_name: [0; MQ_PUT_APPL_NAME_LENGTH],
            put_date: [0; MQ_PUT_DATE_LENGTH],
            put_time: [0; MQ_PUT_TIME_LENGTH],
            appl_origin_data: [0; MQ_APPL_ORIGIN_DATA_LENGTH],
            group_id: MQGI_NONE,
            msg_seq_number: 1,
            offset: 0,
            msg_flags: MQMF_NONE,
            original_length: MQOL_UNDEFINED,
        }
    }
}

impl Mqmd {
    /// Descriptor for a string message.
    pub fn string() -> Self {
        Self {
            format: const_chars(&MQFMT_STRING),
            ..Self::default()
        }
    }

    pub fn format(&self) -> String {
        mq_str(&self.format)
    }

    pub fn set_format(&mut self, format: &str) -> Result<(), MqError> {
        set_mq_chars(&mut self.format, format)
    }

    pub fn set_reply_to(&mut self, queue: &str, q_mgr: &str) -> Result<(), MqError> {
        set_mq_chars(&mut self.reply_to_q, queue)?;
        set_mq_chars(&mut self.reply_to_q_mgr, q_mgr)
    }

    /// Whether no message id has been assigned.
    pub fn msg_id_is_none(&self) -> bool {
        self.msg_id == MQMI_NONE
    }

    /// Reset ids so the next get is not matched on a previous message.
    pub fn clear_ids(&mut self) {
        self.msg_id = MQMI_NONE;
        self.correl_id = MQCI_NONE;
    }
}
