//! The MQI seam: seven calls every binding implements.
//!
//! Consumers hold an `Arc<dyn Mqi>` (or use [`DefaultMqi`] directly). Which
//! implementation `DefaultMqi` names is fixed at build time by the capability
//! detector, so nothing branches on the binding at runtime.
//!
//! Implementations:
//! - [`StubMqi`]: always reports the queue manager as unavailable
//! - `NativeMqi`: delegates to the vendor client (only with the client installed)

pub(crate) mod stub;

#[cfg(mq_client_installed)]
mod native;

#[cfg(mq_client_installed)]
pub use native::NativeMqi;
pub use stub::StubMqi;

use crate::constants::MQ_Q_MGR_NAME_LENGTH;
use crate::options::{CloseOptions, OpenOptions};
use crate::status::MqStatus;
use crate::structs::{Mqcno, Mqgmo, Mqmd, Mqod, Mqpmo};
use crate::types::{Hconn, Hobj, MQCHAR, MQLONG};

/// Binding selected for this build.
#[cfg(mq_client_installed)]
pub type DefaultMqi = NativeMqi;

/// Binding selected for this build.
#[cfg(not(mq_client_installed))]
pub type DefaultMqi = StubMqi;

/// Message queue interface.
///
/// Parameters mirror the vendor calls; output parameters are `&mut` and the
/// completion/reason pair is the return value. Callers own every record.
pub trait Mqi: Send + Sync {
    /// Connect to `qmgr_name` (`MQCONNX`). On failure `hconn` is unusable.
    fn connx(
        &self,
        qmgr_name: &[MQCHAR; MQ_Q_MGR_NAME_LENGTH],
        cno: &mut Mqcno,
        hconn: &mut Hconn,
    ) -> MqStatus;

    /// Disconnect (`MQDISC`). `hconn` is unusable afterwards.
    fn disc(&self, hconn: &mut Hconn) -> MqStatus;

    /// Open an object (`MQOPEN`). The descriptor's resolved fields are output.
    fn open(&self, hconn: Hconn, od: &mut Mqod, options: OpenOptions, hobj: &mut Hobj)
        -> MqStatus;

    /// Close an object (`MQCLOSE`). `hobj` is unusable afterwards.
    fn close(&self, hconn: Hconn, hobj: &mut Hobj, options: CloseOptions) -> MqStatus;

    /// Get a message into `buffer` (`MQGET`); `data_length` receives the
    /// message length.
    fn get(
        &self,
        hconn: Hconn,
        hobj: Hobj,
        md: &mut Mqmd,
        gmo: &mut Mqgmo,
        buffer: &mut [u8],
        data_length: &mut MQLONG,
    ) -> MqStatus;

    /// Put the message in `buffer` (`MQPUT`).
    fn put(&self, hconn: Hconn, hobj: Hobj, md: &mut Mqmd, pmo: &mut Mqpmo, buffer: &[u8])
        -> MqStatus;

    /// Inquire object attributes (`MQINQ`). Integer selectors fill `int_attrs`
    /// in order; character selectors fill consecutive runs of `char_attrs`.
    fn inq(
        &self,
        hconn: Hconn,
        hobj: Hobj,
        selectors: &[MQLONG],
        int_attrs: &mut [MQLONG],
        char_attrs: &mut [MQCHAR],
    ) -> MqStatus;
}
