//! Binding that forwards to the installed vendor client.

use super::Mqi;
use crate::constants::MQ_Q_MGR_NAME_LENGTH;
use crate::ffi;
use crate::options::{CloseOptions, OpenOptions};
use crate::status::{MqStatus, Reason, MQCC_UNKNOWN};
use crate::structs::{Mqcno, Mqgmo, Mqmd, Mqod, Mqpmo};
use crate::types::{c_void, Hconn, Hobj, MQCHAR, MQLONG};

/// Forwards every call to the client library found at build time.
#[derive(Debug, Default, Clone, Copy)]
pub struct NativeMqi;

fn length(len: usize) -> Option<MQLONG> {
    MQLONG::try_from(len).ok()
}

impl Mqi for NativeMqi {
    fn connx(
        &self,
        qmgr_name: &[MQCHAR; MQ_Q_MGR_NAME_LENGTH],
        cno: &mut Mqcno,
        hconn: &mut Hconn,
    ) -> MqStatus {
        let mut name = *qmgr_name;
        let (mut cc, mut rc) = (MQCC_UNKNOWN, 0);
        unsafe { ffi::MQCONNX(name.as_mut_ptr(), cno, &mut hconn.0, &mut cc, &mut rc) };
        MqStatus::from_raw(cc, rc)
    }

    fn disc(&self, hconn: &mut Hconn) -> MqStatus {
        let (mut cc, mut rc) = (MQCC_UNKNOWN, 0);
        unsafe { ffi::MQDISC(&mut hconn.0, &mut cc, &mut rc) };
        MqStatus::from_raw(cc, rc)
    }

    fn open(
        &self,
        hconn: Hconn,
        od: &mut Mqod,
        options: OpenOptions,
        hobj: &mut Hobj,
    ) -> MqStatus {
        let (mut cc, mut rc) = (MQCC_UNKNOWN, 0);
        unsafe {
            ffi::MQOPEN(
                hconn.0,
                od as *mut Mqod as *mut c_void,
                options.bits(),
                &mut hobj.0,
                &mut cc,
                &mut rc,
            )
        };
        MqStatus::from_raw(cc, rc)
    }

    fn close(&self, hconn: Hconn, hobj: &mut Hobj, options: CloseOptions) -> MqStatus {
        let (mut cc, mut rc) = (MQCC_UNKNOWN, 0);
        unsafe { ffi::MQCLOSE(hconn.0, &mut hobj.0, options.bits(), &mut cc, &mut rc) };
        MqStatus::from_raw(cc, rc)
    }

    fn get(
        &self,
        hconn: Hconn,
        hobj: Hobj,
        md: &mut Mqmd,
        gmo: &mut Mqgmo,
        buffer: &mut [u8],
        data_length: &mut MQLONG,
    ) -> MqStatus {
        let Some(buffer_length) = length(buffer.len()) else {
            return MqStatus::failed(Reason::BUFFER_LENGTH_ERROR);
        };
        let (mut cc, mut rc) = (MQCC_UNKNOWN, 0);
        unsafe {
            ffi::MQGET(
                hconn.0,
                hobj.0,
                md as *mut Mqmd as *mut c_void,
                gmo as *mut Mqgmo as *mut c_void,
                buffer_length,
                buffer.as_mut_ptr() as *mut c_void,
                data_length,
                &mut cc,
                &mut rc,
            )
        };
        MqStatus::from_raw(cc, rc)
    }

    fn put(
        &self,
        hconn: Hconn,
        hobj: Hobj,
        md: &mut Mqmd,
        pmo: &mut Mqpmo,
        buffer: &[u8],
    ) -> MqStatus {
        let Some(buffer_length) = length(buffer.len()) else {
            return MqStatus::failed(Reason::BUFFER_LENGTH_ERROR);
        };
        let (mut cc, mut rc) = (MQCC_UNKNOWN, 0);
        // The client reads the buffer but its prototype is not const.
        unsafe {
            ffi::MQPUT(
                hconn.0,
                hobj.0,
                md as *mut Mqmd as *mut c_void,
                pmo as *mut Mqpmo as *mut c_void,
                buffer_length,
                buffer.as_ptr() as *mut c_void,
                &mut cc,
                &mut rc,
            )
        };
        MqStatus::from_raw(cc, rc)
    }

    fn inq(
        &self,
        hconn: Hconn,
        hobj: Hobj,
        selectors: &[MQLONG],
        int_attrs: &mut [MQLONG],
        char_attrs: &mut [MQCHAR],
    ) -> MqStatus {
        let Some(selector_count) = length(selectors.len()) else {
            return MqStatus::failed(Reason::SELECTOR_COUNT_ERROR);
        };
        let Some(int_attr_count) = length(int_attrs.len()) else {
            return MqStatus::failed(Reason::INT_ATTR_COUNT_ERROR);
        };
        let Some(char_attr_length) = length(char_attrs.len()) else {
            return MqStatus::failed(Reason::CHAR_ATTR_LENGTH_ERROR);
        };
        let (mut cc, mut rc) = (MQCC_UNKNOWN, 0);
        unsafe {
            ffi::MQINQ(
                hconn.0,
                hobj.0,
                selector_count,
                selectors.as_ptr() as *mut MQLONG,
                int_attr_count,
                int_attrs.as_mut_ptr(),
                char_attr_length,
                char_attrs.as_mut_ptr(),
                &mut cc,
                &mut rc,
            )
        };
        MqStatus::from_raw(cc, rc)
    }
}
