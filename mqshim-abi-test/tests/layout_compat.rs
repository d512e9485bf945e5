//! C Reference Compatibility Tests
//!
//! Compare the Rust MQI records against the compiled C reference layouts.

#![allow(non_snake_case)]

use memoffset::offset_of;
use mqshim::constants::{
    MQCHARV_LENGTH, MQCNO_LENGTH_5, MQCSP_LENGTH_1, MQGMO_LENGTH_4, MQMD_LENGTH_2,
    MQOD_LENGTH_4, MQPMO_LENGTH_3,
};
use mqshim::pcf::{Mqcfh, Mqcfil, Mqcfin, Mqcfsl, Mqcfst};
use mqshim::{Mqcd, Mqcharv, Mqcno, Mqcsp, Mqgmo, Mqmd, Mqod, Mqpmo};
use mqshim_abi_test::verify_struct_layout;

extern "C" {
    fn MQCHARV_size() -> usize;
    fn MQCHARV_align() -> usize;
    fn MQCHARV_VSPtr_offset() -> usize;
    fn MQCHARV_VSOffset_offset() -> usize;
    fn MQCHARV_VSBufSize_offset() -> usize;
    fn MQCHARV_VSLength_offset() -> usize;
    fn MQCHARV_VSCCSID_offset() -> usize;

    fn MQCNO_LENGTH_5_value() -> usize;
    fn MQCSP_LENGTH_1_value() -> usize;
    fn MQOD_LENGTH_4_value() -> usize;
    fn MQPMO_LENGTH_3_value() -> usize;
    fn MQMD_LENGTH_2_value() -> usize;
    fn MQGMO_LENGTH_4_value() -> usize;

    fn MQCD_size() -> usize;
    fn MQCD_align() -> usize;
    fn MQCD_Version_offset() -> usize;
    fn MQCD_Desc_offset() -> usize;
    fn MQCD_ConnectionName_offset() -> usize;
    fn MQCD_MsgRetryExit_offset() -> usize;
    fn MQCD_StrucLength_offset() -> usize;
    fn MQCD_MsgExitPtr_offset() -> usize;
    fn MQCD_ClusterPtr_offset() -> usize;
    fn MQCD_LongMCAUserIdPtr_offset() -> usize;
    fn MQCD_MCASecurityId_offset() -> usize;
    fn MQCD_SSLPeerNamePtr_offset() -> usize;
    fn MQCD_LocalAddress_offset() -> usize;
    fn MQCD_MsgCompList_offset() -> usize;
    fn MQCD_CertificateLabel_offset() -> usize;

    fn MQCNO_size() -> usize;
    fn MQCNO_align() -> usize;
    fn MQCNO_Version_offset() -> usize;
    fn MQCNO_Options_offset() -> usize;
    fn MQCNO_ClientConnOffset_offset() -> usize;
    fn MQCNO_ClientConnPtr_offset() -> usize;
    fn MQCNO_ConnTag_offset() -> usize;
    fn MQCNO_SSLConfigPtr_offset() -> usize;
    fn MQCNO_SSLConfigOffset_offset() -> usize;
    fn MQCNO_ConnectionId_offset() -> usize;
    fn MQCNO_SecurityParmsOffset_offset() -> usize;
    fn MQCNO_SecurityParmsPtr_offset() -> usize;
    fn MQCNO_CCDTUrlPtr_offset() -> usize;
    fn MQCNO_CCDTUrlOffset_offset() -> usize;
    fn MQCNO_CCDTUrlLength_offset() -> usize;
    fn MQCNO_Reserved_offset() -> usize;

    fn MQCSP_size() -> usize;
    fn MQCSP_align() -> usize;
    fn MQCSP_AuthenticationType_offset() -> usize;
    fn MQCSP_CSPUserIdPtr_offset() -> usize;
    fn MQCSP_CSPUserIdOffset_offset() -> usize;
    fn MQCSP_CSPUserIdLength_offset() -> usize;
    fn MQCSP_CSPPasswordPtr_offset() -> usize;
    fn MQCSP_CSPPasswordOffset_offset() -> usize;
    fn MQCSP_CSPPasswordLength_offset() -> usize;

    fn MQOD_size() -> usize;
    fn MQOD_align() -> usize;
    fn MQOD_ObjectType_offset() -> usize;
    fn MQOD_ObjectName_offset() -> usize;
    fn MQOD_ObjectQMgrName_offset() -> usize;
    fn MQOD_DynamicQName_offset() -> usize;
    fn MQOD_AlternateUserId_offset() -> usize;
    fn MQOD_ObjectRecPtr_offset() -> usize;
    fn MQOD_ResponseRecPtr_offset() -> usize;
    fn MQOD_AlternateSecurityId_offset() -> usize;
    fn MQOD_ResolvedQName_offset() -> usize;
    fn MQOD_ResolvedQMgrName_offset() -> usize;
    fn MQOD_ObjectString_offset() -> usize;
    fn MQOD_SelectionString_offset() -> usize;
    fn MQOD_ResObjectString_offset() -> usize;
    fn MQOD_ResolvedType_offset() -> usize;

    fn MQMD_size() -> usize;
    fn MQMD_align() -> usize;
    fn MQMD_Format_offset() -> usize;
    fn MQMD_Priority_offset() -> usize;
    fn MQMD_MsgId_offset() -> usize;
    fn MQMD_CorrelId_offset() -> usize;
    fn MQMD_BackoutCount_offset() -> usize;
    fn MQMD_ReplyToQ_offset() -> usize;
    fn MQMD_ReplyToQMgr_offset() -> usize;
    fn MQMD_AccountingToken_offset() -> usize;
    fn MQMD_PutApplType_offset() -> usize;
    fn MQMD_PutApplName_offset() -> usize;
    fn MQMD_ApplOriginData_offset() -> usize;
    fn MQMD_GroupId_offset() -> usize;
    fn MQMD_MsgSeqNumber_offset() -> usize;
    fn MQMD_OriginalLength_offset() -> usize;

    fn MQGMO_size() -> usize;
    fn MQGMO_align() -> usize;
    fn MQGMO_Options_offset() -> usize;
    fn MQGMO_WaitInterval_offset() -> usize;
    fn MQGMO_ResolvedQName_offset() -> usize;
    fn MQGMO_MatchOptions_offset() -> usize;
    fn MQGMO_GroupStatus_offset() -> usize;
    fn MQGMO_MsgToken_offset() -> usize;
    fn MQGMO_ReturnedLength_offset() -> usize;
    fn MQGMO_MsgHandle_offset() -> usize;

    fn MQPMO_size() -> usize;
    fn MQPMO_align() -> usize;
    fn MQPMO_Context_offset() -> usize;
    fn MQPMO_ResolvedQName_offset() -> usize;
    fn MQPMO_ResolvedQMgrName_offset() -> usize;
    fn MQPMO_PutMsgRecPtr_offset() -> usize;
    fn MQPMO_ResponseRecPtr_offset() -> usize;
    fn MQPMO_OriginalMsgHandle_offset() -> usize;
    fn MQPMO_Action_offset() -> usize;
    fn MQPMO_PubLevel_offset() -> usize;

    fn MQCFH_size() -> usize;
    fn MQCFH_align() -> usize;
    fn MQCFH_Command_offset() -> usize;
    fn MQCFH_Control_offset() -> usize;
    fn MQCFH_ParameterCount_offset() -> usize;

    fn MQCFIN_size() -> usize;
    fn MQCFIN_Parameter_offset() -> usize;
    fn MQCFIN_Value_offset() -> usize;

    fn MQCFST_CodedCharSetId_offset() -> usize;
    fn MQCFST_StringLength_offset() -> usize;
    fn MQCFST_String_offset() -> usize;

    fn MQCFIL_Count_offset() -> usize;
    fn MQCFIL_Values_offset() -> usize;

    fn MQCFSL_Count_offset() -> usize;
    fn MQCFSL_StringLength_offset() -> usize;
    fn MQCFSL_Strings_offset() -> usize;
}

#[test]
fn test_mqcharv_vs_c() {
    let result = unsafe {
        verify_struct_layout::<Mqcharv>(
            "MQCHARV",
            MQCHARV_size(),
            MQCHARV_align(),
            &[
                (offset_of!(Mqcharv, vs_ptr), MQCHARV_VSPtr_offset()),
                (offset_of!(Mqcharv, vs_offset), MQCHARV_VSOffset_offset()),
                (offset_of!(Mqcharv, vs_buf_size), MQCHARV_VSBufSize_offset()),
                (offset_of!(Mqcharv, vs_length), MQCHARV_VSLength_offset()),
                (offset_of!(Mqcharv, vs_ccsid), MQCHARV_VSCCSID_offset()),
            ],
        )
    };
    assert!(result.is_compatible(), "Mqcharv must match C MQCHARV: {:?}", result);
    assert_eq!(unsafe { MQCHARV_size() }, MQCHARV_LENGTH);
}

#[test]
fn test_published_lengths_match_c() {
    let lengths = unsafe {
        [
            ("MQCNO", MQCNO_LENGTH_5, MQCNO_LENGTH_5_value(), MQCNO_size()),
            ("MQCSP", MQCSP_LENGTH_1, MQCSP_LENGTH_1_value(), MQCSP_size()),
            ("MQOD", MQOD_LENGTH_4, MQOD_LENGTH_4_value(), MQOD_size()),
            ("MQPMO", MQPMO_LENGTH_3, MQPMO_LENGTH_3_value(), MQPMO_size()),
            ("MQMD", MQMD_LENGTH_2, MQMD_LENGTH_2_value(), MQMD_size()),
            ("MQGMO", MQGMO_LENGTH_4, MQGMO_LENGTH_4_value(), MQGMO_size()),
        ]
    };
    for (name, rust, published, c_size) in lengths {
        assert_eq!(rust, published, "{} length constant differs from the C header", name);
        assert_eq!(c_size, published, "C {} is not its published length", name);
    }
}

#[test]
fn test_last_fields_end_at_published_length() {
    unsafe {
        assert_eq!(MQCNO_Reserved_offset() + 8, MQCNO_LENGTH_5);
        assert_eq!(MQCSP_CSPPasswordLength_offset() + 4, MQCSP_LENGTH_1);
        // MQOD pads to pointer alignment after ResolvedType.
        assert!(MQOD_ResolvedType_offset() + 4 <= MQOD_LENGTH_4);
        assert_eq!(MQOD_ResObjectString_offset() + MQCHARV_LENGTH, MQOD_ResolvedType_offset());
        assert_eq!(MQPMO_PubLevel_offset() + 4, MQPMO_LENGTH_3);
        assert_eq!(MQMD_OriginalLength_offset() + 4, MQMD_LENGTH_2);
        assert_eq!(MQGMO_MsgHandle_offset() + 8, MQGMO_LENGTH_4);
    }
    assert_eq!(offset_of!(Mqcno, reserved) + 8, MQCNO_LENGTH_5);
    assert!(offset_of!(Mqod, resolved_type) + 4 <= MQOD_LENGTH_4);
}

#[test]
fn test_mqcd_vs_c() {
    let result = unsafe {
        verify_struct_layout::<Mqcd>(
            "MQCD",
            MQCD_size(),
            MQCD_align(),
            &[
                (offset_of!(Mqcd, version), MQCD_Version_offset()),
                (offset_of!(Mqcd, desc), MQCD_Desc_offset()),
                (offset_of!(Mqcd, connection_name), MQCD_ConnectionName_offset()),
                (offset_of!(Mqcd, msg_retry_exit), MQCD_MsgRetryExit_offset()),
                (offset_of!(Mqcd, struc_length), MQCD_StrucLength_offset()),
                (offset_of!(Mqcd, msg_exit_ptr), MQCD_MsgExitPtr_offset()),
                (offset_of!(Mqcd, cluster_ptr), MQCD_ClusterPtr_offset()),
                (offset_of!(Mqcd, long_mca_user_id_ptr), MQCD_LongMCAUserIdPtr_offset()),
                (offset_of!(Mqcd, mca_security_id), MQCD_MCASecurityId_offset()),
                (offset_of!(Mqcd, ssl_peer_name_ptr), MQCD_SSLPeerNamePtr_offset()),
                (offset_of!(Mqcd, local_address), MQCD_LocalAddress_offset()),
                (offset_of!(Mqcd, msg_comp_list), MQCD_MsgCompList_offset()),
                (offset_of!(Mqcd, certificate_label), MQCD_CertificateLabel_offset()),
            ],
        )
    };
    assert!(result.is_compatible(), "Mqcd must match C MQCD: {:?}", result);

    // The struc_length default must describe the whole record.
    assert_eq!(Mqcd::default().struc_length as usize, unsafe { MQCD_size() });
}

#[test]
fn test_mqcno_vs_c() {
    let result = unsafe {
        verify_struct_layout::<Mqcno>(
            "MQCNO",
            MQCNO_size(),
            MQCNO_align(),
            &[
                (offset_of!(Mqcno, version), MQCNO_Version_offset()),
                (offset_of!(Mqcno, options), MQCNO_Options_offset()),
                (offset_of!(Mqcno, client_conn_offset), MQCNO_ClientConnOffset_offset()),
                (offset_of!(Mqcno, client_conn_ptr), MQCNO_ClientConnPtr_offset()),
                (offset_of!(Mqcno, conn_tag), MQCNO_ConnTag_offset()),
                (offset_of!(Mqcno, ssl_config_ptr), MQCNO_SSLConfigPtr_offset()),
                (offset_of!(Mqcno, ssl_config_offset), MQCNO_SSLConfigOffset_offset()),
                (offset_of!(Mqcno, connection_id), MQCNO_ConnectionId_offset()),
                (offset_of!(Mqcno, security_parms_offset), MQCNO_SecurityParmsOffset_offset()),
                (offset_of!(Mqcno, security_parms_ptr), MQCNO_SecurityParmsPtr_offset()),
                (offset_of!(Mqcno, ccdt_url_ptr), MQCNO_CCDTUrlPtr_offset()),
                (offset_of!(Mqcno, ccdt_url_offset), MQCNO_CCDTUrlOffset_offset()),
                (offset_of!(Mqcno, ccdt_url_length), MQCNO_CCDTUrlLength_offset()),
                (offset_of!(Mqcno, reserved), MQCNO_Reserved_offset()),
            ],
        )
    };
    assert!(result.is_compatible(), "Mqcno must match C MQCNO: {:?}", result);
}

#[test]
fn test_mqcsp_vs_c() {
    let result = unsafe {
        verify_struct_layout::<Mqcsp>(
            "MQCSP",
            MQCSP_size(),
            MQCSP_align(),
            &[
                (offset_of!(Mqcsp, authentication_type), MQCSP_AuthenticationType_offset()),
                (offset_of!(Mqcsp, csp_user_id_ptr), MQCSP_CSPUserIdPtr_offset()),
                (offset_of!(Mqcsp, csp_user_id_offset), MQCSP_CSPUserIdOffset_offset()),
                (offset_of!(Mqcsp, csp_user_id_length), MQCSP_CSPUserIdLength_offset()),
                (offset_of!(Mqcsp, csp_password_ptr), MQCSP_CSPPasswordPtr_offset()),
                (offset_of!(Mqcsp, csp_password_offset), MQCSP_CSPPasswordOffset_offset()),
                (offset_of!(Mqcsp, csp_password_length), MQCSP_CSPPasswordLength_offset()),
            ],
        )
    };
    assert!(result.is_compatible(), "Mqcsp must match C MQCSP: {:?}", result);
}

#[test]
fn test_mqod_vs_c() {
    let result = unsafe {
        verify_struct_layout::<Mqod>(
            "MQOD",
            MQOD_size(),
            MQOD_align(),
            &[
                (offset_of!(Mqod, object_type), MQOD_ObjectType_offset()),
                (offset_of!(Mqod, object_name), MQOD_ObjectName_offset()),
                (offset_of!(Mqod, object_q_mgr_name), MQOD_ObjectQMgrName_offset()),
                (offset_of!(Mqod, dynamic_q_name), MQOD_DynamicQName_offset()),
                (offset_of!(Mqod, alternate_user_id), MQOD_AlternateUserId_offset()),
                (offset_of!(Mqod, object_rec_ptr), MQOD_ObjectRecPtr_offset()),
                (offset_of!(Mqod, response_rec_ptr), MQOD_ResponseRecPtr_offset()),
                (offset_of!(Mqod, alternate_security_id), MQOD_AlternateSecurityId_offset()),
                (offset_of!(Mqod, resolved_q_name), MQOD_ResolvedQName_offset()),
                (offset_of!(Mqod, resolved_q_mgr_name), MQOD_ResolvedQMgrName_offset()),
                (offset_of!(Mqod, object_string), MQOD_ObjectString_offset()),
                (offset_of!(Mqod, selection_string), MQOD_SelectionString_offset()),
                (offset_of!(Mqod, res_object_string), MQOD_ResObjectString_offset()),
                (offset_of!(Mqod, resolved_type), MQOD_ResolvedType_offset()),
            ],
        )
    };
    assert!(result.is_compatible(), "Mqod must match C MQOD: {:?}", result);
}

#[test]
fn test_mqmd_vs_c() {
    let result = unsafe {
        verify_struct_layout::<Mqmd>(
            "MQMD",
            MQMD_size(),
            MQMD_align(),
            &[
                (offset_of!(Mqmd, format), MQMD_Format_offset()),
                (offset_of!(Mqmd, priority), MQMD_Priority_offset()),
                (offset_of!(Mqmd, msg_id), MQMD_MsgId_offset()),
                (offset_of!(Mqmd, correl_id), MQMD_CorrelId_offset()),
                (offset_of!(Mqmd, backout_count), MQMD_BackoutCount_offset()),
                (offset_of!(Mqmd, reply_to_q), MQMD_ReplyToQ_offset()),
                (offset_of!(Mqmd, reply_to_q_mgr), MQMD_ReplyToQMgr_offset()),
                (offset_of!(Mqmd, accounting_token), MQMD_AccountingToken_offset()),
                (offset_of!(Mqmd, put_appl_type), MQMD_PutApplType_offset()),
                (offset_of!(Mqmd, put_appl_name), MQMD_PutApplName_offset()),
                (offset_of!(Mqmd, appl_origin_data), MQMD_ApplOriginData_offset()),
                (offset_of!(Mqmd, group_id), MQMD_GroupId_offset()),
                (offset_of!(Mqmd, msg_seq_number), MQMD_MsgSeqNumber_offset()),
                (offset_of!(Mqmd, original_length), MQMD_OriginalLength_offset()),
            ],
        )
    };
    assert!(result.is_compatible(), "Mqmd must match C MQMD: {:?}", result);
    assert_eq!(core::mem::size_of::<Mqmd>(), 364, "MQMD is 364 bytes everywhere");
}

#[test]
fn test_mqgmo_vs_c() {
    let result = unsafe {
        verify_struct_layout::<Mqgmo>(
            "MQGMO",
            MQGMO_size(),
            MQGMO_align(),
            &[
                (offset_of!(Mqgmo, options), MQGMO_Options_offset()),
                (offset_of!(Mqgmo, wait_interval), MQGMO_WaitInterval_offset()),
                (offset_of!(Mqgmo, resolved_q_name), MQGMO_ResolvedQName_offset()),
                (offset_of!(Mqgmo, match_options), MQGMO_MatchOptions_offset()),
                (offset_of!(Mqgmo, group_status), MQGMO_GroupStatus_offset()),
                (offset_of!(Mqgmo, msg_token), MQGMO_MsgToken_offset()),
                (offset_of!(Mqgmo, returned_length), MQGMO_ReturnedLength_offset()),
                (offset_of!(Mqgmo, msg_handle), MQGMO_MsgHandle_offset()),
            ],
        )
    };
    assert!(result.is_compatible(), "Mqgmo must match C MQGMO: {:?}", result);
}

#[test]
fn test_mqpmo_vs_c() {
    let result = unsafe {
        verify_struct_layout::<Mqpmo>(
            "MQPMO",
            MQPMO_size(),
            MQPMO_align(),
            &[
                (offset_of!(Mqpmo, context), MQPMO_Context_offset()),
                (offset_of!(Mqpmo, resolved_q_name), MQPMO_ResolvedQName_offset()),
                (offset_of!(Mqpmo, resolved_q_mgr_name), MQPMO_ResolvedQMgrName_offset()),
                (offset_of!(Mqpmo, put_msg_rec_ptr), MQPMO_PutMsgRecPtr_offset()),
                (offset_of!(Mqpmo, response_rec_ptr), MQPMO_ResponseRecPtr_offset()),
                (offset_of!(Mqpmo, original_msg_handle), MQPMO_OriginalMsgHandle_offset()),
                (offset_of!(Mqpmo, action), MQPMO_Action_offset()),
                (offset_of!(Mqpmo, pub_level), MQPMO_PubLevel_offset()),
            ],
        )
    };
    assert!(result.is_compatible(), "Mqpmo must match C MQPMO: {:?}", result);
}

#[test]
fn test_pcf_records_vs_c() {
    unsafe {
        let header = verify_struct_layout::<Mqcfh>(
            "MQCFH",
            MQCFH_size(),
            MQCFH_align(),
            &[
                (offset_of!(Mqcfh, command), MQCFH_Command_offset()),
                (offset_of!(Mqcfh, control), MQCFH_Control_offset()),
                (offset_of!(Mqcfh, parameter_count), MQCFH_ParameterCount_offset()),
            ],
        );
        assert!(header.is_compatible(), "Mqcfh must match C MQCFH: {:?}", header);

        assert_eq!(core::mem::size_of::<Mqcfin>(), MQCFIN_size());
        assert_eq!(offset_of!(Mqcfin, parameter), MQCFIN_Parameter_offset());
        assert_eq!(offset_of!(Mqcfin, value), MQCFIN_Value_offset());

        // Variable-length records: the Rust type is the fixed part, which ends
        // where the C trailing array begins.
        assert_eq!(offset_of!(Mqcfst, coded_char_set_id), MQCFST_CodedCharSetId_offset());
        assert_eq!(offset_of!(Mqcfst, string_length), MQCFST_StringLength_offset());
        assert_eq!(core::mem::size_of::<Mqcfst>(), MQCFST_String_offset());

        assert_eq!(offset_of!(Mqcfil, count), MQCFIL_Count_offset());
        assert_eq!(core::mem::size_of::<Mqcfil>(), MQCFIL_Values_offset());

        assert_eq!(offset_of!(Mqcfsl, count), MQCFSL_Count_offset());
        assert_eq!(offset_of!(Mqcfsl, string_length), MQCFSL_StringLength_offset());
        assert_eq!(core::mem::size_of::<Mqcfsl>(), MQCFSL_Strings_offset());
    }
}
