//! MQGMO and MQPMO: get- and put-message options.

use std::ptr;

use crate::constants::*;
use crate::options::{GetOptions, MatchOptions, PutOptions, MQMO_MATCH_CORREL_ID, MQMO_MATCH_MSG_ID};
use crate::types::{const_chars, mq_str, MQBYTE, MQCHAR, MQHMSG, MQHOBJ, MQLONG, MQPTR};

/// Returned length not set.
pub const MQRL_UNDEFINED: MQLONG = -1;

/// Get-message options (`MQGMO`).
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mqgmo {
    pub struc_id: [MQCHAR; 4],
    pub version: MQLONG,
    pub options: MQLONG,
    pub wait_interval: MQLONG,
    pub signal1: MQLONG,
    pub signal2: MQLONG,
    pub resolved_q_name: [MQCHAR; MQ_Q_NAME_LENGTH],
    pub match_options: MQLONG,
    pub group_status: MQCHAR,
    pub segment_status: MQCHAR,
    pub segmentation: MQCHAR,
    pub reserved1: MQCHAR,
    pub msg_token: [MQBYTE; MQ_MSG_TOKEN_LENGTH],
    pub returned_length: MQLONG,
    pub reserved2: MQLONG,
    pub msg_handle: MQHMSG,
}

impl Default for Mqgmo {
    fn default() -> Self {
        Self {
            struc_id: const_chars(&MQGMO_STRUC_ID),
            version: MQGMO_CURRENT_VERSION,
            options: 0,
            wait_interval: 0,
            signal1: 0,
            signal2: 0,
            resolved_q_name: [0; MQ_Q_NAME_LENGTH],
            match_options: MQMO_MATCH_MSG_ID | MQMO_MATCH_CORREL_ID,
            group_status: MQGS_NOT_IN_GROUP,
            segment_status: MQSS_NOT_A_SEGMENT,
            segmentation: MQSEG_INHIBITED,
            reserved1: b' ' as MQCHAR,
            msg_token: [0; MQ_MSG_TOKEN_LENGTH],
            returned_length: MQRL_UNDEFINED,
            reserved2: 0,
            msg_handle: MQHM_NONE,
        }
    }
}

impl Mqgmo {
    pub fn with_options(options: GetOptions) -> Self {
        Self {
            options: options.bits(),
            ..Self::default()
        }
    }

    /// Typed view of the options field; unknown bits are kept.
    pub fn options(&self) -> GetOptions {
        GetOptions::from_bits_retain(self.options)
    }

    pub fn set_options(&mut self, options: GetOptions) {
        self.options = options.bits();
    }

    pub fn match_options(&self) -> MatchOptions {
        MatchOptions::from_bits_retain(self.match_options)
    }

    /// Wait up to `millis` for a message, or forever with `MQWI_UNLIMITED`.
    pub fn wait(&mut self, millis: MQLONG) {
        self.options |= GetOptions::WAIT.bits();
        self.wait_interval = millis;
    }

    pub fn resolved_q_name(&self) -> String {
        mq_str(&self.resolved_q_name)
    }
}

/// Put-message options (`MQPMO`).
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mqpmo {
    pub struc_id: [MQCHAR; 4],
    pub version: MQLONG,
    pub options: MQLONG,
    pub timeout: MQLONG,
    pub context: MQHOBJ,
    pub known_dest_count: MQLONG,
    pub unknown_dest_count: MQLONG,
    pub invalid_dest_count: MQLONG,
    pub resolved_q_name: [MQCHAR; MQ_Q_NAME_LENGTH],
    pub resolved_q_mgr_name: [MQCHAR; MQ_Q_MGR_NAME_LENGTH],
    pub recs_present: MQLONG,
    pub put_msg_rec_fields: MQLONG,
    pub put_msg_rec_offset: MQLONG,
    pub response_rec_offset: MQLONG,
    pub put_msg_rec_ptr: MQPTR,
    pub response_rec_ptr: MQPTR,
    pub original_msg_handle: MQHMSG,
    pub new_msg_handle: MQHMSG,
    pub action: MQLONG,
    pub pub_level: MQLONG,
}

impl Default for Mqpmo {
    fn default() -> Self {
        Self {
            struc_id: const_chars(&MQPMO_STRUC_ID),
            version: MQPMO_CURRENT_VERSION,
            options: 0,
            timeout: -1,
            context: 0,
            known_dest_count: 0,
            unknown_dest_count: 0,
            invalid_dest_count: 0,
            resolved_q_name: [0; MQ_Q_NAME_LENGTH],
            resolved_q_mgr_name: [0; MQ_Q_MGR_NAME_LENGTH],
            recs_present: 0,
            put_msg_rec_fields: 0,
            put_msg_rec_offset: 0,
            response_rec_offset: 0,
            put_msg_rec_ptr: ptr::null_mut(),
            response_rec_ptr: ptr::null_mut(),
            original_msg_handle: MQHM_NONE,
            new_msg_handle: MQHM_NONE,
            action: MQACTP_NEW,
            pub_level: MQPUBLEVEL_ALL,
        }
    }
}

impl Mqpmo {
    pub fn with_options(options: PutOptions) -> Self {
        Self {
            options: options.bits(),
            ..Self::default()
        }
    }

    /// Typed view of the options field; unknown bits are kept.
    pub fn options(&self) -> PutOptions {
        PutOptions::from_bits_retain(self.options)
    }

    pub fn set_options(&mut self, options: PutOptions) {
        self.options = options.bits();
    }

    pub fn resolved_q_name(&self) -> String {
        mq_str(&self.resolved_q_name)
    }
}
