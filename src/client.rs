//! Safe client layer over any [`Mqi`] binding.
//!
//! [`Connection`] and [`OpenObject`] own their handles and release them on
//! every exit path. `WARNING` completions are returned as success and logged;
//! `FAILED` completions become [`MqError::Call`].

use std::sync::Arc;

use tracing::{debug, warn};

use crate::config::ShimConfig;
use crate::constants::{MQIA_CURRENT_Q_DEPTH, MQFMT_ADMIN, MQMT_REQUEST, MQ_Q_MGR_NAME_LENGTH};
use crate::mqi::Mqi;
use crate::options::{CloseOptions, OpenOptions, PutOptions};
use crate::pcf::{PcfMessage, ADMIN_COMMAND_QUEUE};
use crate::status::{MqError, MqStatus};
use crate::structs::{ConnectOptions, Mqgmo, Mqmd, Mqod, Mqpmo};
use crate::types::{const_chars, mq_chars, Hconn, Hobj, MQCHAR, MQLONG};

fn checked(status: MqStatus, operation: &'static str) -> Result<MqStatus, MqError> {
    if status.is_warning() {
        warn!(operation, reason = %status.reason, "MQI call completed with warning");
    }
    status.check(operation)
}

/// Connection to a queue manager.
pub struct Connection {
    mqi: Arc<dyn Mqi>,
    hconn: Hconn,
    qmgr_name: String,
}

impl Connection {
    /// Connect to `qmgr_name` (empty for the default queue manager).
    pub fn connect(
        mqi: Arc<dyn Mqi>,
        qmgr_name: &str,
        options: &mut ConnectOptions,
    ) -> Result<Self, MqError> {
        let name: [MQCHAR; MQ_Q_MGR_NAME_LENGTH] = mq_chars(qmgr_name)?;
        let mut hconn = Hconn::UNUSABLE;
        let status = mqi.connx(&name, options.prepare(), &mut hconn);
        debug!(
            qmgr = qmgr_name,
            hconn = hconn.0,
            comp_code = %status.comp_code,
            reason = %status.reason,
            "MQCONNX"
        );
        checked(status, "MQCONNX")?;

        Ok(Self {
            mqi,
            hconn,
            qmgr_name: qmgr_name.to_string(),
        })
    }

    /// Connect with the queue manager, channel and credentials from `config`.
    pub fn from_config(mqi: Arc<dyn Mqi>, config: &ShimConfig) -> Result<Self, MqError> {
        let mut options = config.connect_options()?;
        Self::connect(mqi, &config.queue_manager, &mut options)
    }

    pub fn handle(&self) -> Hconn {
        self.hconn
    }

    pub fn queue_manager(&self) -> &str {
        &self.qmgr_name
    }

    /// Open the object described by `od`. Resolution output is written back
    /// into `od`.
    pub fn open(&self, od: &mut Mqod, options: OpenOptions) -> Result<OpenObject<'_>, MqError> {
        let mut hobj = Hobj::UNUSABLE;
        let status = self.mqi.open(self.hconn, od, options, &mut hobj);
        debug!(
            hconn = self.hconn.0,
            object = %od.object_name(),
            hobj = hobj.0,
            comp_code = %status.comp_code,
            reason = %status.reason,
            "MQOPEN"
        );
        checked(status, "MQOPEN")?;

        Ok(OpenObject {
            connection: self,
            hobj,
            name: od.object_name(),
        })
    }

    /// Open the queue `name` on this queue manager.
    pub fn open_queue(&self, name: &str, options: OpenOptions) -> Result<OpenObject<'_>, MqError> {
        let mut od = Mqod::queue(name)?;
        self.open(&mut od, options)
    }

    /// Put a PCF command on the command queue, asking for replies on
    /// `reply_to_q`.
    pub fn send_command(&self, command: &PcfMessage, reply_to_q: &str) -> Result<(), MqError> {
        let bytes = command.to_bytes()?;
        let mut md = Mqmd {
            format: const_chars(&MQFMT_ADMIN),
            msg_type: MQMT_REQUEST,
            ..Mqmd::default()
        };
        md.set_reply_to(reply_to_q, "")?;
        let mut pmo = Mqpmo::with_options(PutOptions::NO_SYNCPOINT | PutOptions::NEW_MSG_ID);

        let queue = self.open_queue(
            ADMIN_COMMAND_QUEUE,
            OpenOptions::OUTPUT | OpenOptions::FAIL_IF_QUIESCING,
        )?;
        queue.put(&mut md, &mut pmo, &bytes)?;
        queue.close(CloseOptions::empty())
    }

    /// Disconnect, reporting the outcome.
    pub fn disconnect(mut self) -> Result<(), MqError> {
        checked(self.release(), "MQDISC").map(|_| ())
    }

    fn release(&mut self) -> MqStatus {
        if !self.hconn.is_usable() {
            return MqStatus::OK;
        }
        let hconn = self.hconn.0;
        let status = self.mqi.disc(&mut self.hconn);
        debug!(
            hconn,
            comp_code = %status.comp_code,
            reason = %status.reason,
            "MQDISC"
        );
        self.hconn.invalidate();
        status
    }
}

impl Drop for Connection {
    fn drop(&mut self) {
        let status = self.release();
        if status.is_failed() {
            warn!(
                qmgr = %self.qmgr_name,
                reason = %status.reason,
                "Failed to disconnect on drop"
            );
        }
    }
}

/// An open queue or other object. Closed on drop.
pub struct OpenObject<'c> {
    connection: &'c Connection,
    hobj: Hobj,
    name: String,
}

impl OpenObject<'_> {
    pub fn handle(&self) -> Hobj {
        self.hobj
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    fn mqi(&self) -> &dyn Mqi {
        self.connection.mqi.as_ref()
    }

    /// Put one message.
    pub fn put(&self, md: &mut Mqmd, pmo: &mut Mqpmo, data: &[u8]) -> Result<(), MqError> {
        let status = self
            .mqi()
            .put(self.connection.hconn, self.hobj, md, pmo, data);
        debug!(
            hobj = self.hobj.0,
            length = data.len(),
            comp_code = %status.comp_code,
            reason = %status.reason,
            "MQPUT"
        );
        checked(status, "MQPUT").map(|_| ())
    }

    /// Get one message into `buffer`.
    ///
    /// Returns the number of bytes placed in `buffer`. When a truncated message
    /// is accepted that is less than the message length.
    pub fn get(&self, md: &mut Mqmd, gmo: &mut Mqgmo, buffer: &mut [u8]) -> Result<usize, MqError> {
        let mut data_length: MQLONG = 0;
        let status = self.mqi().get(
            self.connection.hconn,
            self.hobj,
            md,
            gmo,
            buffer,
            &mut data_length,
        );
        debug!(
            hobj = self.hobj.0,
            data_length,
            comp_code = %status.comp_code,
            reason = %status.reason,
            "MQGET"
        );
        checked(status, "MQGET")?;
        Ok(usize::try_from(data_length).unwrap_or(0).min(buffer.len()))
    }

    /// Get one PCF message of at most `capacity` bytes.
    pub fn get_pcf(&self, gmo: &mut Mqgmo, capacity: usize) -> Result<PcfMessage, MqError> {
        let mut md = Mqmd::default();
        let mut buffer = vec![0u8; capacity];
        let length = self.get(&mut md, gmo, &mut buffer)?;
        Ok(PcfMessage::parse(&buffer[..length])?)
    }

    /// Inquire attributes (see [`Mqi::inq`]).
    pub fn inquire(
        &self,
        selectors: &[MQLONG],
        int_attrs: &mut [MQLONG],
        char_attrs: &mut [MQCHAR],
    ) -> Result<(), MqError> {
        let status = self.mqi().inq(
            self.connection.hconn,
            self.hobj,
            selectors,
            int_attrs,
            char_attrs,
        );
        debug!(
            hobj = self.hobj.0,
            selectors = selectors.len(),
            comp_code = %status.comp_code,
            reason = %status.reason,
            "MQINQ"
        );
        checked(status, "MQINQ").map(|_| ())
    }

    /// Current depth of an object opened with `OpenOptions::INQUIRE`.
    pub fn queue_depth(&self) -> Result<MQLONG, MqError> {
        let mut depth = [0];
        self.inquire(&[MQIA_CURRENT_Q_DEPTH], &mut depth, &mut [])?;
        Ok(depth[0])
    }

    /// Close with `options`, reporting the outcome.
    pub fn close(mut self, options: CloseOptions) -> Result<(), MqError> {
        checked(self.release(options), "MQCLOSE").map(|_| ())
    }

    fn release(&mut self, options: CloseOptions) -> MqStatus {
        if !self.hobj.is_usable() {
            return MqStatus::OK;
        }
        let hobj = self.hobj.0;
        let status = self
            .connection
            .mqi
            .close(self.connection.hconn, &mut self.hobj, options);
        debug!(
            hobj,
            comp_code = %status.comp_code,
            reason = %status.reason,
            "MQCLOSE"
        );
        self.hobj.invalidate();
        status
    }
}

impl Drop for OpenObject<'_> {
    fn drop(&mut self) {
        let status = self.release(CloseOptions::empty());
        if status.is_failed() {
            warn!(object = %self.name, reason = %status.reason, "Failed to close on drop");
        }
    }
}
