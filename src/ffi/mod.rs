//! Raw C-ABI entry points with the vendor names, parameter order and types.
//!
//! Without the vendor client these are `#[no_mangle]` stand-ins, so C objects
//! compiled against the vendor header link against this crate. With the
//! client installed they are declarations resolved by its library.
//!
//! Records are passed as `*mut c_void` where the vendor prototype uses
//! `PMQVOID`.

#![allow(non_snake_case)]

#[cfg(not(mq_client_installed))]
mod stub;

#[cfg(not(mq_client_installed))]
pub use stub::*;

#[cfg(mq_client_installed)]
use crate::structs::Mqcno;
#[cfg(mq_client_installed)]
use crate::types::{c_void, MQCHAR, MQHCONN, MQHOBJ, MQLONG};

#[cfg(mq_client_installed)]
extern "C" {
    pub fn MQCONNX(
        qmgr_name: *mut MQCHAR,
        connect_opts: *mut Mqcno,
        hconn: *mut MQHCONN,
        comp_code: *mut MQLONG,
        reason: *mut MQLONG,
    );

    pub fn MQDISC(hconn: *mut MQHCONN, comp_code: *mut MQLONG, reason: *mut MQLONG);

    pub fn MQOPEN(
        hconn: MQHCONN,
        obj_desc: *mut c_void,
        options: MQLONG,
        hobj: *mut MQHOBJ,
        comp_code: *mut MQLONG,
        reason: *mut MQLONG,
    );

    pub fn MQCLOSE(
        hconn: MQHCONN,
        hobj: *mut MQHOBJ,
        options: MQLONG,
        comp_code: *mut MQLONG,
        reason: *mut MQLONG,
    );

    pub fn MQGET(
        hconn: MQHCONN,
        hobj: MQHOBJ,
        msg_desc: *mut c_void,
        get_msg_opts: *mut c_void,
        buffer_length: MQLONG,
        buffer: *mut c_void,
        data_length: *mut MQLONG,
        comp_code: *mut MQLONG,
        reason: *mut MQLONG,
    );

    pub fn MQPUT(
        hconn: MQHCONN,
        hobj: MQHOBJ,
        msg_desc: *mut c_void,
        put_msg_opts: *mut c_void,
        buffer_length: MQLONG,
        buffer: *mut c_void,
        comp_code: *mut MQLONG,
        reason: *mut MQLONG,
    );

    pub fn MQINQ(
        hconn: MQHCONN,
        hobj: MQHOBJ,
        selector_count: MQLONG,
        selectors: *mut MQLONG,
        int_attr_count: MQLONG,
        int_attrs: *mut MQLONG,
        char_attr_length: MQLONG,
        char_attrs: *mut MQCHAR,
        comp_code: *mut MQLONG,
        reason: *mut MQLONG,
    );
}
