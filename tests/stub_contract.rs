//! Contract of the stub binding: acquire fails, release succeeds, and no
//! caller memory is ever written besides handles and status.

use std::sync::Arc;
use std::thread;

use proptest::prelude::*;

use mqshim::status::{MQCC_FAILED, MQCC_OK, MQRC_NONE, MQRC_Q_MGR_NOT_AVAILABLE};
use mqshim::types::{mq_chars, MQCHAR, MQLONG};
use mqshim::{
    CloseOptions, CompCode, ConnectOptions, Connection, GetOptions, Hconn, Hobj, Mqcno, Mqgmo,
    Mqi, Mqmd, Mqod, Mqpmo, OpenOptions, PutOptions, Reason, StubMqi,
};

fn qmgr_name() -> impl Strategy<Value = String> {
    "[A-Z0-9._%/]{0,48}"
}

fn queue_name() -> impl Strategy<Value = String> {
    "[A-Z0-9._]{1,48}"
}

proptest! {
    #[test]
    fn connect_always_unusable(name in qmgr_name(), prior in any::<i32>(), flags in any::<i32>()) {
        let name: [MQCHAR; 48] = mq_chars(&name).unwrap();
        let mut cno = Mqcno { options: flags, ..Mqcno::default() };
        let mut hconn = Hconn(prior);

        let status = StubMqi.connx(&name, &mut cno, &mut hconn);
        prop_assert_eq!(hconn, Hconn::UNUSABLE);
        prop_assert_eq!(status.comp_code, CompCode::FAILED);
        prop_assert_eq!(status.reason, Reason::Q_MGR_NOT_AVAILABLE);
    }

    #[test]
    fn disconnect_always_succeeds(prior in any::<i32>()) {
        let mut hconn = Hconn(prior);
        let status = StubMqi.disc(&mut hconn);
        prop_assert_eq!(status.comp_code.0, MQCC_OK);
        prop_assert_eq!(status.reason.0, MQRC_NONE);
        prop_assert_eq!(hconn.0, -1);
    }

    #[test]
    fn open_always_unusable(
        hconn in any::<i32>(),
        name in queue_name(),
        options in any::<i32>(),
        prior in any::<i32>(),
    ) {
        let mut od = Mqod::queue(&name).unwrap();
        let before = od;
        let mut hobj = Hobj(prior);

        let options = OpenOptions::from_bits_retain(options);
        let status = StubMqi.open(Hconn(hconn), &mut od, options, &mut hobj);
        prop_assert_eq!(hobj, Hobj::UNUSABLE);
        prop_assert_eq!(status.comp_code, CompCode::FAILED);
        prop_assert_eq!(status.reason, Reason::Q_MGR_NOT_AVAILABLE);
        prop_assert_eq!(od, before);
    }

    #[test]
    fn close_always_succeeds(
        hconn in any::<i32>(),
        prior in any::<i32>(),
        options in any::<i32>(),
    ) {
        let mut hobj = Hobj(prior);
        let options = CloseOptions::from_bits_retain(options);
        let status = StubMqi.close(Hconn(hconn), &mut hobj, options);
        prop_assert_eq!(status.comp_code.0, MQCC_OK);
        prop_assert_eq!(status.reason.0, MQRC_NONE);
        prop_assert_eq!(hobj.0, -1);
    }

    #[test]
    fn get_leaves_buffer_untouched(
        contents in proptest::collection::vec(any::<u8>(), 0..512),
        wait in any::<i32>(),
        prior_length in any::<i32>(),
    ) {
        let mut buffer = contents.clone();
        let mut md = Mqmd::default();
        let mut gmo = Mqgmo::with_options(GetOptions::WAIT | GetOptions::ACCEPT_TRUNCATED_MSG);
        gmo.wait_interval = wait;
        let (md_before, gmo_before) = (md, gmo);
        let mut data_length: MQLONG = prior_length;

        let status =
            StubMqi.get(Hconn(1), Hobj(2), &mut md, &mut gmo, &mut buffer, &mut data_length);
        prop_assert_eq!(data_length, 0);
        prop_assert_eq!(&buffer, &contents);
        prop_assert_eq!(md, md_before);
        prop_assert_eq!(gmo, gmo_before);
        prop_assert_eq!(status.comp_code.0, MQCC_FAILED);
        prop_assert_eq!(status.reason.0, MQRC_Q_MGR_NOT_AVAILABLE);
    }

    #[test]
    fn put_appends_nothing(payload in proptest::collection::vec(any::<u8>(), 0..512)) {
        let mut surrogate_queue: Vec<Vec<u8>> = Vec::new();
        let mut md = Mqmd::string();
        let mut pmo = Mqpmo::with_options(PutOptions::NEW_MSG_ID | PutOptions::NO_SYNCPOINT);
        let md_before = md;

        let status = StubMqi.put(Hconn(1), Hobj(2), &mut md, &mut pmo, &payload);
        if !status.is_failed() {
            surrogate_queue.push(payload.clone());
        }
        prop_assert!(surrogate_queue.is_empty());
        prop_assert_eq!(status.reason, Reason::Q_MGR_NOT_AVAILABLE);
        prop_assert_eq!(md, md_before);
        prop_assert!(md.msg_id_is_none());
    }

    #[test]
    fn inquire_leaves_outputs_untouched(
        selectors in proptest::collection::vec(any::<i32>(), 0..16),
        ints in proptest::collection::vec(any::<i32>(), 0..16),
        chars in proptest::collection::vec(any::<u8>(), 0..96),
    ) {
        let mut int_attrs = ints.clone();
        let mut char_attrs: Vec<MQCHAR> = chars.iter().map(|b| *b as MQCHAR).collect();
        let chars_before = char_attrs.clone();

        let status = StubMqi.inq(Hconn(1), Hobj(2), &selectors, &mut int_attrs, &mut char_attrs);
        prop_assert_eq!(status.comp_code, CompCode::FAILED);
        prop_assert_eq!(status.reason, Reason::Q_MGR_NOT_AVAILABLE);
        prop_assert_eq!(int_attrs, ints);
        prop_assert_eq!(char_attrs, chars_before);
    }
}

#[test]
fn test_connect_qm1_example() {
    let name: [MQCHAR; 48] = mq_chars("QM1").unwrap();
    let mut hconn = Hconn::default();
    let status = StubMqi.connx(&name, &mut Mqcno::default(), &mut hconn);
    assert_eq!((hconn.0, status.comp_code.0, status.reason.0), (-1, 2, 2059));
}

#[test]
fn test_disconnect_unusable_handle() {
    let mut hconn = Hconn::UNUSABLE;
    let status = StubMqi.disc(&mut hconn);
    assert_eq!((status.comp_code.0, status.reason.0), (0, 0));
    assert_eq!(hconn.0, -1);
}

#[test]
fn test_cleanup_path_runs_uniformly() {
    let mqi = StubMqi;
    let name: [MQCHAR; 48] = mq_chars("QM1").unwrap();
    let mut hconn = Hconn::default();
    let mut hobj = Hobj::default();

    let connected = mqi.connx(&name, &mut Mqcno::default(), &mut hconn);
    let opened = mqi.open(
        hconn,
        &mut Mqod::queue("DEV.QUEUE.1").unwrap(),
        OpenOptions::OUTPUT,
        &mut hobj,
    );
    assert!(connected.is_failed());
    assert!(opened.is_failed());

    assert!(mqi.close(hconn, &mut hobj, CloseOptions::empty()).is_ok());
    assert!(mqi.disc(&mut hconn).is_ok());
}

#[test]
fn test_client_layer_surfaces_unavailable() {
    let result = Connection::connect(Arc::new(StubMqi), "QM1", &mut ConnectOptions::new());
    match result {
        Err(e) => assert_eq!(e.reason(), Some(Reason::Q_MGR_NOT_AVAILABLE)),
        Ok(_) => panic!("stub connect must fail"),
    }
}

#[test]
fn test_concurrent_calls_need_no_coordination() {
    let mqi: Arc<dyn Mqi> = Arc::new(StubMqi);
    let workers: Vec<_> = (0..8)
        .map(|i| {
            let mqi = Arc::clone(&mqi);
            thread::spawn(move || {
                let name: [MQCHAR; 48] = mq_chars(&format!("QM{}", i)).unwrap();
                (0..100).all(|_| {
                    let mut hconn = Hconn(i);
                    let acquired = mqi.connx(&name, &mut Mqcno::default(), &mut hconn);
                    let released = mqi.disc(&mut hconn);
                    acquired.is_failed() && released.is_ok() && hconn == Hconn::UNUSABLE
                })
            })
        })
        .collect();

    for worker in workers {
        assert!(worker.join().unwrap());
    }
}

#[cfg(not(mq_client_installed))]
mod raw_ffi {
    use super::*;
    use mqshim::ffi;
    use mqshim::types::c_void;

    proptest! {
        #[test]
        fn raw_calls_match_trait(
            prior in any::<i32>(),
            contents in proptest::collection::vec(any::<u8>(), 1..128),
        ) {
            let mut name: [MQCHAR; 48] = mq_chars("QM1").unwrap();
            let mut cno = Mqcno::default();
            let (mut hconn, mut cc, mut rc) = (prior, -1, -1);
            unsafe { ffi::MQCONNX(name.as_mut_ptr(), &mut cno, &mut hconn, &mut cc, &mut rc) };
            prop_assert_eq!((hconn, cc, rc), (-1, MQCC_FAILED, MQRC_Q_MGR_NOT_AVAILABLE));

            let mut od = Mqod::queue("DEV.QUEUE.1").unwrap();
            let mut hobj = prior;
            unsafe {
                let od = &mut od as *mut Mqod as *mut c_void;
                ffi::MQOPEN(prior, od, 0, &mut hobj, &mut cc, &mut rc)
            };
            prop_assert_eq!((hobj, cc, rc), (-1, MQCC_FAILED, MQRC_Q_MGR_NOT_AVAILABLE));

            let mut buffer = contents.clone();
            let mut md = Mqmd::default();
            let mut gmo = Mqgmo::default();
            let mut data_length = prior;
            unsafe {
                ffi::MQGET(
                    prior,
                    prior,
                    &mut md as *mut Mqmd as *mut c_void,
                    &mut gmo as *mut Mqgmo as *mut c_void,
                    buffer.len() as MQLONG,
                    buffer.as_mut_ptr() as *mut c_void,
                    &mut data_length,
                    &mut cc,
                    &mut rc,
                )
            };
            prop_assert_eq!(data_length, 0);
            prop_assert_eq!(&buffer, &contents);
            prop_assert_eq!((cc, rc), (MQCC_FAILED, MQRC_Q_MGR_NOT_AVAILABLE));

            let mut pmo = Mqpmo::default();
            unsafe {
                ffi::MQPUT(
                    prior,
                    prior,
                    &mut md as *mut Mqmd as *mut c_void,
                    &mut pmo as *mut Mqpmo as *mut c_void,
                    buffer.len() as MQLONG,
                    buffer.as_mut_ptr() as *mut c_void,
                    &mut cc,
                    &mut rc,
                )
            };
            prop_assert_eq!((cc, rc), (MQCC_FAILED, MQRC_Q_MGR_NOT_AVAILABLE));

            let mut selectors = [3, 20];
            let mut ints = [prior, prior];
            unsafe {
                ffi::MQINQ(
                    prior,
                    prior,
                    2,
                    selectors.as_mut_ptr(),
                    2,
                    ints.as_mut_ptr(),
                    0,
                    std::ptr::null_mut(),
                    &mut cc,
                    &mut rc,
                )
            };
            prop_assert_eq!(ints, [prior, prior]);
            prop_assert_eq!((cc, rc), (MQCC_FAILED, MQRC_Q_MGR_NOT_AVAILABLE));

            unsafe { ffi::MQCLOSE(prior, &mut hobj, 0, &mut cc, &mut rc) };
            prop_assert_eq!((hobj, cc, rc), (-1, MQCC_OK, MQRC_NONE));

            unsafe { ffi::MQDISC(&mut hconn, &mut cc, &mut rc) };
            prop_assert_eq!((hconn, cc, rc), (-1, MQCC_OK, MQRC_NONE));
        }
    }
}
