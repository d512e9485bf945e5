//! `#[no_mangle]` stand-ins for the seven MQI calls.
//!
//! Results match [`StubMqi`](crate::mqi::StubMqi). Null output pointers are
//! skipped; input records and buffers are never read.

use crate::mqi::stub::{RELEASED, UNAVAILABLE};
use crate::status::MqStatus;
use crate::structs::Mqcno;
use crate::types::{
    c_void, MQCHAR, MQHCONN, MQHC_UNUSABLE_HCONN, MQHOBJ, MQHO_UNUSABLE_HOBJ, MQLONG,
};

/// Write `value` through `target` unless it is null.
///
/// # Safety
///
/// `target` must be null or valid for writes.
unsafe fn store(target: *mut MQLONG, value: MQLONG) {
    if let Some(slot) = target.as_mut() {
        *slot = value;
    }
}

/// # Safety
///
/// `comp_code` and `reason` must each be null or valid for writes.
unsafe fn report(status: MqStatus, comp_code: *mut MQLONG, reason: *mut MQLONG) {
    store(comp_code, status.comp_code.0);
    store(reason, status.reason.0);
}

/// Connect. Always fails with `MQRC_Q_MGR_NOT_AVAILABLE`.
///
/// # Safety
///
/// Output pointers must each be null or valid for writes.
#[no_mangle]
pub unsafe extern "C" fn MQCONNX(
    _qmgr_name: *mut MQCHAR,
    _connect_opts: *mut Mqcno,
    hconn: *mut MQHCONN,
    comp_code: *mut MQLONG,
    reason: *mut MQLONG,
) {
    store(hconn, MQHC_UNUSABLE_HCONN);
    report(UNAVAILABLE, comp_code, reason);
}

/// Disconnect. Always succeeds and resets `*hconn`.
///
/// # Safety
///
/// Pointers must each be null or valid for writes.
#[no_mangle]
pub unsafe extern "C" fn MQDISC(hconn: *mut MQHCONN, comp_code: *mut MQLONG, reason: *mut MQLONG) {
    store(hconn, MQHC_UNUSABLE_HCONN);
    report(RELEASED, comp_code, reason);
}

/// Open. Always fails; the descriptor is not touched.
///
/// # Safety
///
/// Output pointers must each be null or valid for writes.
#[no_mangle]
pub unsafe extern "C" fn MQOPEN(
    _hconn: MQHCONN,
    _obj_desc: *mut c_void,
    _options: MQLONG,
    hobj: *mut MQHOBJ,
    comp_code: *mut MQLONG,
    reason: *mut MQLONG,
) {
    store(hobj, MQHO_UNUSABLE_HOBJ);
    report(UNAVAILABLE, comp_code, reason);
}

/// Close. Always succeeds and resets `*hobj`.
///
/// # Safety
///
/// Pointers must each be null or valid for writes.
#[no_mangle]
pub unsafe extern "C" fn MQCLOSE(
    _hconn: MQHCONN,
    hobj: *mut MQHOBJ,
    _options: MQLONG,
    comp_code: *mut MQLONG,
    reason: *mut MQLONG,
) {
    store(hobj, MQHO_UNUSABLE_HOBJ);
    report(RELEASED, comp_code, reason);
}

/// Get. Always fails with `*data_length` = 0; the buffer is not touched.
///
/// # Safety
///
/// Output pointers must each be null or valid for writes.
#[no_mangle]
pub unsafe extern "C" fn MQGET(
    _hconn: MQHCONN,
    _hobj: MQHOBJ,
    _msg_desc: *mut c_void,
    _get_msg_opts: *mut c_void,
    _buffer_length: MQLONG,
    _buffer: *mut c_void,
    data_length: *mut MQLONG,
    comp_code: *mut MQLONG,
    reason: *mut MQLONG,
) {
    store(data_length, 0);
    report(UNAVAILABLE, comp_code, reason);
}

/// Put. Always fails; nothing is read or written besides the status.
///
/// # Safety
///
/// Output pointers must each be null or valid for writes.
#[no_mangle]
pub unsafe extern "C" fn MQPUT(
    _hconn: MQHCONN,
    _hobj: MQHOBJ,
    _msg_desc: *mut c_void,
    _put_msg_opts: *mut c_void,
    _buffer_length: MQLONG,
    _buffer: *mut c_void,
    comp_code: *mut MQLONG,
    reason: *mut MQLONG,
) {
    report(UNAVAILABLE, comp_code, reason);
}

/// Inquire. Always fails; the attribute arrays are not touched.
///
/// # Safety
///
/// Output pointers must each be null or valid for writes.
#[no_mangle]
pub unsafe extern "C" fn MQINQ(
    _hconn: MQHCONN,
    _hobj: MQHOBJ,
    _selector_count: MQLONG,
    _selectors: *mut MQLONG,
    _int_attr_count: MQLONG,
    _int_attrs: *mut MQLONG,
    _char_attr_length: MQLONG,
    _char_attrs: *mut MQCHAR,
    comp_code: *mut MQLONG,
    reason: *mut MQLONG,
) {
    report(UNAVAILABLE, comp_code, reason);
}
