//! MQOD: object descriptor.

use std::ptr;

use crate::constants::*;
use crate::status::MqError;
use crate::structs::cno::{addressing, Addressing};
use crate::types::{const_chars, mq_str, set_mq_chars, MQBYTE, MQCHAR, MQLONG, MQPTR};

/// Variable-length string descriptor (`MQCHARV`).
///
/// The characters live in caller memory, reached through `vs_ptr` or through
/// `vs_offset` from the start of the record that embeds the descriptor.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mqcharv {
    pub vs_ptr: MQPTR,
    pub vs_offset: MQLONG,
    pub vs_buf_size: MQLONG,
    pub vs_length: MQLONG,
    pub vs_ccsid: MQLONG,
}

impl Default for Mqcharv {
    fn default() -> Self {
        Self {
            vs_ptr: ptr::null_mut(),
            vs_offset: 0,
            vs_buf_size: 0,
            vs_length: 0,
            vs_ccsid: MQCCSI_APPL,
        }
    }
}

impl Mqcharv {
    pub fn is_empty(&self) -> bool {
        self.vs_length == 0
    }

    pub fn is_null_terminated(&self) -> bool {
        self.vs_length == MQVS_NULL_TERMINATED
    }

    /// Where the characters live.
    ///
    /// Only explicit lengths are located; a null-terminated string reports
    /// [`Addressing::Absent`] and must be scanned through `vs_ptr`.
    pub fn location(&self) -> Addressing {
        addressing(self.vs_ptr, self.vs_offset, self.vs_length)
    }
}

/// Object descriptor (`MQOD`), version 4 layout.
///
/// `object_*`, `dynamic_q_name` and `alternate_user_id` are caller input.
/// The `resolved_*` fields are output only.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mqod {
    pub struc_id: [MQCHAR; 4],
    pub version: MQLONG,
    pub object_type: MQLONG,
    pub object_name: [MQCHAR; MQ_OBJECT_NAME_LENGTH],
    pub object_q_mgr_name: [MQCHAR; MQ_Q_MGR_NAME_LENGTH],
    pub dynamic_q_name: [MQCHAR; MQ_Q_NAME_LENGTH],
    pub alternate_user_id: [MQCHAR; MQ_USER_ID_LENGTH],
    pub recs_present: MQLONG,
    pub known_dest_count: MQLONG,
    pub unknown_dest_count: MQLONG,
    pub invalid_dest_count: MQLONG,
    pub object_rec_offset: MQLONG,
    pub response_rec_offset: MQLONG,
    pub object_rec_ptr: MQPTR,
    pub response_rec_ptr: MQPTR,
    pub alternate_security_id: [MQBYTE; MQ_SECURITY_ID_LENGTH],
    pub resolved_q_name: [MQCHAR; MQ_Q_NAME_LENGTH],
    pub resolved_q_mgr_name: [MQCHAR; MQ_Q_MGR_NAME_LENGTH],
    pub object_string: Mqcharv,
    pub selection_string: Mqcharv,
    pub res_object_string: Mqcharv,
    pub resolved_type: MQLONG,
}

const DEFAULT_DYNAMIC_Q_NAME: [u8; 5] = *b"AMQ.*";

impl Default for Mqod {
    fn default() -> Self {
        let mut dynamic_q_name = [0 as MQCHAR; MQ_Q_NAME_LENGTH];
        dynamic_q_name[..DEFAULT_DYNAMIC_Q_NAME.len()]
            .copy_from_slice(&const_chars(&DEFAULT_DYNAMIC_Q_NAME));

        Self {
            struc_id: const_chars(&MQOD_STRUC_ID),
            version: MQOD_CURRENT_VERSION,
            object_type: MQOT_Q,
            object_name: [0; MQ_OBJECT_NAME_LENGTH],
            object_q_mgr_name: [0; MQ_Q_MGR_NAME_LENGTH],
            dynamic_q_name,
            alternate_user_id: [0; MQ_USER_ID_LENGTH],
            recs_present: 0,
            known_dest_count: 0,
            unknown_dest_count: 0,
            invalid_dest_count: 0,
            object_rec_offset: 0,
            response_rec_offset: 0,
            object_rec_ptr: ptr::null_mut(),
            response_rec_ptr: ptr::null_mut(),
            alternate_security_id: [0; MQ_SECURITY_ID_LENGTH],
            resolved_q_name: [0; MQ_Q_NAME_LENGTH],
            resolved_q_mgr_name: [0; MQ_Q_MGR_NAME_LENGTH],
            object_string: Mqcharv::default(),
            selection_string: Mqcharv::default(),
            res_object_string: Mqcharv::default(),
            resolved_type: 0,
        }
    }
}

impl Mqod {
    /// Descriptor for the queue `name` on the connected queue manager.
    pub fn queue(name: &str) -> Result<Self, MqError> {
        let mut od = Self::default();
        set_mq_chars(&mut od.object_name, name)?;
        Ok(od)
    }

    /// Descriptor for the queue manager object itself (for inquiries).
    pub fn queue_manager() -> Self {
        Self {
            object_type: MQOT_Q_MGR,
            ..Self::default()
        }
    }

    pub fn object_name(&self) -> String {
        mq_str(&self.object_name)
    }

    pub fn resolved_q_name(&self) -> String {
        mq_str(&self.resolved_q_name)
    }

    pub fn resolved_q_mgr_name(&self) -> String {
        mq_str(&self.resolved_q_mgr_name)
    }

    /// Whether a successful open filled in any resolution output.
    pub fn is_resolved(&self) -> bool {
        self.resolved_q_name.iter().any(|c| *c != 0)
            || self.resolved_q_mgr_name.iter().any(|c| *c != 0)
            || self.resolved_type != 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_queue_descriptor() {
        let od = Mqod::queue("DEV.QUEUE.1").unwrap();
        assert_eq!(od.object_type, MQOT_Q);
        assert_eq!(od.version, MQOD_VERSION_4);
        assert_eq!(od.object_name(), "DEV.QUEUE.1");
        assert_eq!(mq_str(&od.dynamic_q_name), "AMQ.*");
        assert!(!od.is_resolved());
    }

    #[test]
    fn test_object_strings_default_to_empty_descriptors() {
        let od = Mqod::default();
        for charv in [od.object_string, od.selection_string, od.res_object_string] {
            assert!(charv.vs_ptr.is_null());
            assert!(charv.is_empty());
            assert_eq!(charv.vs_ccsid, MQCCSI_APPL);
            assert!(charv.location().is_absent());
        }
    }

    #[test]
    fn test_charv_location() {
        let topic = *b"price/fruit";
        let charv = Mqcharv {
            vs_ptr: topic.as_ptr() as MQPTR,
            vs_length: topic.len() as MQLONG,
            ..Mqcharv::default()
        };
        assert_eq!(unsafe { charv.location().resolve(&[]) }, Some(&topic[..]));

        let terminated = Mqcharv {
            vs_ptr: topic.as_ptr() as MQPTR,
            vs_length: MQVS_NULL_TERMINATED,
            ..Mqcharv::default()
        };
        assert!(terminated.is_null_terminated());
        assert!(terminated.location().is_absent());
    }

    #[test]
    fn test_descriptor_has_vendor_length() {
        assert_eq!(std::mem::size_of::<Mqcharv>(), MQCHARV_LENGTH);
        assert_eq!(std::mem::size_of::<Mqod>(), MQOD_LENGTH_4);
    }

    #[test]
    fn test_queue_manager_descriptor() {
        let od = Mqod::queue_manager();
        assert_eq!(od.object_type, MQOT_Q_MGR);
        assert_eq!(od.object_name(), "");
    }

    #[test]
    fn test_queue_name_too_long() {
        let name = "Q".repeat(MQ_Q_NAME_LENGTH + 1);
        assert!(Mqod::queue(&name).is_err());
    }
}
