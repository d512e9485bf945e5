//! Stub binding used when the vendor client is not installed.

use tracing::trace;

use super::Mqi;
use crate::constants::MQ_Q_MGR_NAME_LENGTH;
use crate::options::{CloseOptions, OpenOptions};
use crate::status::{MqStatus, Reason};
use crate::structs::{Mqcno, Mqgmo, Mqmd, Mqod, Mqpmo};
use crate::types::{mq_str, Hconn, Hobj, MQCHAR, MQLONG};

/// Result of every call that would need a queue manager.
pub(crate) const UNAVAILABLE: MqStatus = MqStatus::failed(Reason::Q_MGR_NOT_AVAILABLE);

/// Result of every call that releases a handle.
pub(crate) const RELEASED: MqStatus = MqStatus::OK;

/// Binding with no queue manager behind it.
///
/// Connect and open fail with `MQRC_Q_MGR_NOT_AVAILABLE` and hand back unusable
/// handles. Disconnect and close succeed and reset the handle. Message and
/// inquiry calls fail without touching any caller memory. Option arguments are
/// ignored and nothing blocks.
#[derive(Debug, Default, Clone, Copy)]
pub struct StubMqi;

impl Mqi for StubMqi {
    fn connx(
        &self,
        qmgr_name: &[MQCHAR; MQ_Q_MGR_NAME_LENGTH],
        _cno: &mut Mqcno,
        hconn: &mut Hconn,
    ) -> MqStatus {
        trace!(qmgr = %mq_str(qmgr_name), "stub connect");
        hconn.invalidate();
        UNAVAILABLE
    }

    fn disc(&self, hconn: &mut Hconn) -> MqStatus {
        trace!(hconn = hconn.0, "stub disconnect");
        hconn.invalidate();
        RELEASED
    }

    fn open(
        &self,
        _hconn: Hconn,
        od: &mut Mqod,
        _options: OpenOptions,
        hobj: &mut Hobj,
    ) -> MqStatus {
        trace!(object = %od.object_name(), "stub open");
        hobj.invalidate();
        UNAVAILABLE
    }

    fn close(&self, _hconn: Hconn, hobj: &mut Hobj, _options: CloseOptions) -> MqStatus {
        trace!(hobj = hobj.0, "stub close");
        hobj.invalidate();
        RELEASED
    }

    fn get(
        &self,
        _hconn: Hconn,
        _hobj: Hobj,
        _md: &mut Mqmd,
        _gmo: &mut Mqgmo,
        buffer: &mut [u8],
        data_length: &mut MQLONG,
    ) -> MqStatus {
        trace!(capacity = buffer.len(), "stub get");
        *data_length = 0;
        UNAVAILABLE
    }

    fn put(
        &self,
        _hconn: Hconn,
        _hobj: Hobj,
        _md: &mut Mqmd,
        _pmo: &mut Mqpmo,
        buffer: &[u8],
    ) -> MqStatus {
        trace!(length = buffer.len(), "stub put");
        UNAVAILABLE
    }

    fn inq(
        &self,
        _hconn: Hconn,
        _hobj: Hobj,
        selectors: &[MQLONG],
        _int_attrs: &mut [MQLONG],
        _char_attrs: &mut [MQCHAR],
    ) -> MqStatus {
        trace!(selectors = selectors.len(), "stub inquire");
        UNAVAILABLE
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::status::CompCode;
    use crate::types::mq_chars;

    #[test]
    fn test_connect_reports_unavailable() {
        let name = mq_chars("QM1").unwrap();
        let mut hconn = Hconn(42);
        let status = StubMqi.connx(&name, &mut Mqcno::default(), &mut hconn);

        assert_eq!(hconn, Hconn::UNUSABLE);
        assert_eq!(status.comp_code, CompCode::FAILED);
        assert_eq!(status.reason, Reason::Q_MGR_NOT_AVAILABLE);
    }

    #[test]
    fn test_release_resets_handles() {
        let mut hconn = Hconn(7);
        assert_eq!(StubMqi.disc(&mut hconn), MqStatus::OK);
        assert_eq!(hconn, Hconn::UNUSABLE);

        let mut hobj = Hobj(9);
        assert_eq!(
            StubMqi.close(Hconn(7), &mut hobj, CloseOptions::DELETE),
            MqStatus::OK
        );
        assert_eq!(hobj, Hobj::UNUSABLE);
    }

    #[test]
    fn test_open_leaves_descriptor() {
        let mut od = Mqod::queue("DEV.QUEUE.1").unwrap();
        let before = od;
        let mut hobj = Hobj(3);
        let status = StubMqi.open(Hconn(1), &mut od, OpenOptions::OUTPUT, &mut hobj);

        assert_eq!(status, UNAVAILABLE);
        assert_eq!(hobj, Hobj::UNUSABLE);
        assert_eq!(od, before);
        assert!(!od.is_resolved());
    }

    #[test]
    fn test_get_returns_nothing() {
        let mut buffer = [0xA5u8; 32];
        let mut data_length = 99;
        let mut md = Mqmd::default();
        let mut gmo = Mqgmo::default();
        gmo.wait(60_000);

        let status = StubMqi.get(
            Hconn(1),
            Hobj(2),
            &mut md,
            &mut gmo,
            &mut buffer,
            &mut data_length,
        );
        assert_eq!(status, UNAVAILABLE);
        assert_eq!(data_length, 0);
        assert_eq!(buffer, [0xA5u8; 32]);
        assert_eq!(md, Mqmd::default());
    }
}
