//! Option bit masks for MQCONNX, MQOPEN, MQCLOSE, MQGET and MQPUT.
//!
//! Each flag set is a typed view over the raw `MQLONG` options field. Bits this
//! crate does not name are carried through untouched (`from_bits_retain`), so
//! options introduced by later client versions are never rejected or dropped.

use bitflags::bitflags;

use crate::types::MQLONG;

bitflags! {
    /// Connect options (`MQCNO.Options`).
    #[repr(transparent)]
    #[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
    pub struct ConnectFlags: MQLONG {
        const STANDARD_BINDING = 0x0000_0000;
        const FASTPATH_BINDING = 0x0000_0001;
        const SHARED_BINDING = 0x0000_0400;
        const ISOLATED_BINDING = 0x0000_0200;
        const HANDLE_SHARE_NONE = 0x0000_0020;
        const HANDLE_SHARE_BLOCK = 0x0000_0040;
        const HANDLE_SHARE_NO_BLOCK = 0x0000_0080;
        const RECONNECT = 0x0100_0000;
        const RECONNECT_DISABLED = 0x0200_0000;
        const RECONNECT_Q_MGR = 0x0400_0000;
        const CLIENT_BINDING = 0x0000_0800;
        const LOCAL_BINDING = 0x0000_0400;

        const _ = !0;
    }
}

bitflags! {
    /// Open options (`MQOPEN` Options).
    #[repr(transparent)]
    #[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
    pub struct OpenOptions: MQLONG {
        const INPUT_AS_Q_DEF = 0x0000_0001;
        const INPUT_SHARED = 0x0000_0002;
        const INPUT_EXCLUSIVE = 0x0000_0004;
        const BROWSE = 0x0000_0008;
        const OUTPUT = 0x0000_0010;
        const INQUIRE = 0x0000_0020;
        const SET = 0x0000_0040;
        const SAVE_ALL_CONTEXT = 0x0000_0080;
        const PASS_IDENTITY_CONTEXT = 0x0000_0100;
        const PASS_ALL_CONTEXT = 0x0000_0200;
        const SET_IDENTITY_CONTEXT = 0x0000_0400;
        const SET_ALL_CONTEXT = 0x0000_0800;
        const ALTERNATE_USER_AUTHORITY = 0x0000_1000;
        const FAIL_IF_QUIESCING = 0x0000_2000;

        const _ = !0;
    }
}

bitflags! {
    /// Close options (`MQCLOSE` Options).
    #[repr(transparent)]
    #[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
    pub struct CloseOptions: MQLONG {
        const DELETE = 0x0000_0001;
        const DELETE_PURGE = 0x0000_0002;
        const KEEP_SUB = 0x0000_0004;
        const REMOVE_SUB = 0x0000_0008;
        const QUIESCE = 0x0000_0020;

        const _ = !0;
    }
}

bitflags! {
    /// Get-message options (`MQGMO.Options`).
    #[repr(transparent)]
    #[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
    pub struct GetOptions: MQLONG {
        const WAIT = 0x0000_0001;
        const SYNCPOINT = 0x0000_0002;
        const NO_SYNCPOINT = 0x0000_0004;
        const SET_SIGNAL = 0x0000_0008;
        const BROWSE_FIRST = 0x0000_0010;
        const BROWSE_NEXT = 0x0000_0020;
        const ACCEPT_TRUNCATED_MSG = 0x0000_0040;
        const MARK_SKIP_BACKOUT = 0x0000_0080;
        const MSG_UNDER_CURSOR = 0x0000_0100;
        const LOCK = 0x0000_0200;
        const UNLOCK = 0x0000_0400;
        const BROWSE_MSG_UNDER_CURSOR = 0x0000_0800;
        const SYNCPOINT_IF_PERSISTENT = 0x0000_1000;
        const FAIL_IF_QUIESCING = 0x0000_2000;
        const CONVERT = 0x0000_4000;
        const LOGICAL_ORDER = 0x0000_8000;
        const COMPLETE_MSG = 0x0001_0000;
        const ALL_MSGS_AVAILABLE = 0x0002_0000;
        const ALL_SEGMENTS_AVAILABLE = 0x0004_0000;

        const _ = !0;
    }
}

bitflags! {
    /// Put-message options (`MQPMO.Options`).
    #[repr(transparent)]
    #[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
    pub struct PutOptions: MQLONG {
        const SYNCPOINT = 0x0000_0002;
        const NO_SYNCPOINT = 0x0000_0004;
        const DEFAULT_CONTEXT = 0x0000_0020;
        const NEW_MSG_ID = 0x0000_0040;
        const NEW_CORREL_ID = 0x0000_0080;
        const PASS_IDENTITY_CONTEXT = 0x0000_0100;
        const PASS_ALL_CONTEXT = 0x0000_0200;
        const SET_IDENTITY_CONTEXT = 0x0000_0400;
        const SET_ALL_CONTEXT = 0x0000_0800;
        const ALTERNATE_USER_AUTHORITY = 0x0000_1000;
        const FAIL_IF_QUIESCING = 0x0000_2000;
        const NO_CONTEXT = 0x0000_4000;
        const LOGICAL_ORDER = 0x0000_8000;

        const _ = !0;
    }
}

bitflags! {
    /// Match options (`MQGMO.MatchOptions`).
    #[repr(transparent)]
    #[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
    pub struct MatchOptions: MQLONG {
        const MATCH_MSG_ID = 0x0000_0001;
        const MATCH_CORREL_ID = 0x0000_0002;
        const MATCH_GROUP_ID = 0x0000_0004;
        const MATCH_MSG_SEQ_NUMBER = 0x0000_0008;
        const MATCH_OFFSET = 0x0000_0010;
        const MATCH_MSG_TOKEN = 0x0000_0020;

        const _ = !0;
    }
}

pub const MQCNO_NONE: MQLONG = 0;
pub const MQCNO_HANDLE_SHARE_BLOCK: MQLONG = ConnectFlags::HANDLE_SHARE_BLOCK.bits();

pub const MQOO_INPUT_AS_Q_DEF: MQLONG = OpenOptions::INPUT_AS_Q_DEF.bits();
pub const MQOO_INPUT_SHARED: MQLONG = OpenOptions::INPUT_SHARED.bits();
pub const MQOO_INPUT_EXCLUSIVE: MQLONG = OpenOptions::INPUT_EXCLUSIVE.bits();
pub const MQOO_BROWSE: MQLONG = OpenOptions::BROWSE.bits();
pub const MQOO_OUTPUT: MQLONG = OpenOptions::OUTPUT.bits();
pub const MQOO_INQUIRE: MQLONG = OpenOptions::INQUIRE.bits();
pub const MQOO_SET: MQLONG = OpenOptions::SET.bits();
pub const MQOO_FAIL_IF_QUIESCING: MQLONG = OpenOptions::FAIL_IF_QUIESCING.bits();

pub const MQCO_NONE: MQLONG = 0;
pub const MQCO_DELETE: MQLONG = CloseOptions::DELETE.bits();
pub const MQCO_DELETE_PURGE: MQLONG = CloseOptions::DELETE_PURGE.bits();

pub const MQGMO_NO_WAIT: MQLONG = 0;
pub const MQGMO_WAIT: MQLONG = GetOptions::WAIT.bits();
pub const MQGMO_SYNCPOINT: MQLONG = GetOptions::SYNCPOINT.bits();
pub const MQGMO_NO_SYNCPOINT: MQLONG = GetOptions::NO_SYNCPOINT.bits();
pub const MQGMO_BROWSE_FIRST: MQLONG = GetOptions::BROWSE_FIRST.bits();
pub const MQGMO_BROWSE_NEXT: MQLONG = GetOptions::BROWSE_NEXT.bits();
pub const MQGMO_ACCEPT_TRUNCATED_MSG: MQLONG = GetOptions::ACCEPT_TRUNCATED_MSG.bits();
pub const MQGMO_FAIL_IF_QUIESCING: MQLONG = GetOptions::FAIL_IF_QUIESCING.bits();
pub const MQGMO_CONVERT: MQLONG = GetOptions::CONVERT.bits();

pub const MQPMO_NONE: MQLONG = 0;
pub const MQPMO_SYNCPOINT: MQLONG = PutOptions::SYNCPOINT.bits();
pub const MQPMO_NO_SYNCPOINT: MQLONG = PutOptions::NO_SYNCPOINT.bits();
pub const MQPMO_NEW_MSG_ID: MQLONG = PutOptions::NEW_MSG_ID.bits();
pub const MQPMO_NEW_CORREL_ID: MQLONG = PutOptions::NEW_CORREL_ID.bits();
pub const MQPMO_FAIL_IF_QUIESCING: MQLONG = PutOptions::FAIL_IF_QUIESCING.bits();

pub const MQMO_NONE: MQLONG = 0;
pub const MQMO_MATCH_MSG_ID: MQLONG = MatchOptions::MATCH_MSG_ID.bits();
pub const MQMO_MATCH_CORREL_ID: MQLONG = MatchOptions::MATCH_CORREL_ID.bits();
