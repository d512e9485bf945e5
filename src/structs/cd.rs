//! MQCD: client-connection channel definition.

use std::ptr;

use crate::constants::*;
use crate::status::MqError;
use crate::types::{set_mq_chars, MQBYTE, MQCHAR, MQLONG, MQPTR};

/// Channel definition (`MQCD`), version 11 layout.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mqcd {
    pub channel_name: [MQCHAR; MQ_CHANNEL_NAME_LENGTH],
    pub version: MQLONG,
    pub channel_type: MQLONG,
    pub transport_type: MQLONG,
    pub desc: [MQCHAR; MQ_CHANNEL_DESC_LENGTH],
    pub q_mgr_name: [MQCHAR; MQ_Q_MGR_NAME_LENGTH],
    pub xmit_q_name: [MQCHAR; MQ_Q_NAME_LENGTH],
    pub short_connection_name: [MQCHAR; MQ_SHORT_CONN_NAME_LENGTH],
    pub mca_name: [MQCHAR; MQ_MCA_NAME_LENGTH],
    pub mode_name: [MQCHAR; MQ_MODE_NAME_LENGTH],
    pub tp_name: [MQCHAR; MQ_TP_NAME_LENGTH],
    pub batch_size: MQLONG,
    pub disc_interval: MQLONG,
    pub short_retry_count: MQLONG,
    pub short_retry_interval: MQLONG,
    pub long_retry_count: MQLONG,
    pub long_retry_interval: MQLONG,
    pub security_exit: [MQCHAR; MQ_EXIT_NAME_LENGTH],
    pub msg_exit: [MQCHAR; MQ_EXIT_NAME_LENGTH],
    pub send_exit: [MQCHAR; MQ_EXIT_NAME_LENGTH],
    pub receive_exit: [MQCHAR; MQ_EXIT_NAME_LENGTH],
    pub seq_number_wrap: MQLONG,
    pub max_msg_length: MQLONG,
    pub put_authority: MQLONG,
    pub data_conversion: MQLONG,
    pub security_user_data: [MQCHAR; MQ_EXIT_DATA_LENGTH],
    pub msg_user_data: [MQCHAR; MQ_EXIT_DATA_LENGTH],
    pub send_user_data: [MQCHAR; MQ_EXIT_DATA_LENGTH],
    pub receive_user_data: [MQCHAR; MQ_EXIT_DATA_LENGTH],
    pub user_identifier: [MQCHAR; MQ_USER_ID_LENGTH],
    pub password: [MQCHAR; MQ_PASSWORD_LENGTH],
    pub mca_user_identifier: [MQCHAR; MQ_USER_ID_LENGTH],
    pub mca_type: MQLONG,
    pub connection_name: [MQCHAR; MQ_CONN_NAME_LENGTH],
    pub remote_user_identifier: [MQCHAR; MQ_USER_ID_LENGTH],
    pub remote_password: [MQCHAR; MQ_PASSWORD_LENGTH],
    pub msg_retry_exit: [MQCHAR; MQ_EXIT_NAME_LENGTH],
    pub msg_retry_user_data: [MQCHAR; MQ_EXIT_DATA_LENGTH],
    pub msg_retry_count: MQLONG,
    pub msg_retry_interval: MQLONG,
    pub heartbeat_interval: MQLONG,
    pub batch_interval: MQLONG,
    pub non_persistent_msg_speed: MQLONG,
    pub struc_length: MQLONG,
    pub exit_name_length: MQLONG,
    pub exit_data_length: MQLONG,
    pub msg_exits_defined: MQLONG,
    pub send_exits_defined: MQLONG,
    pub receive_exits_defined: MQLONG,
    pub msg_exit_ptr: MQPTR,
    pub msg_user_data_ptr: MQPTR,
    pub send_exit_ptr: MQPTR,
    pub send_user_data_ptr: MQPTR,
    pub receive_exit_ptr: MQPTR,
    pub receive_user_data_ptr: MQPTR,
    pub cluster_ptr: MQPTR,
    pub clusters_defined: MQLONG,
    pub network_priority: MQLONG,
    pub long_mca_user_id_length: MQLONG,
    pub long_remote_user_id_length: MQLONG,
    pub long_mca_user_id_ptr: MQPTR,
    pub long_remote_user_id_ptr: MQPTR,
    pub mca_security_id: [MQBYTE; MQ_SECURITY_ID_LENGTH],
    pub remote_security_id: [MQBYTE; MQ_SECURITY_ID_LENGTH],
    pub ssl_cipher_spec: [MQCHAR; MQ_SSL_CIPHER_SPEC_LENGTH],
    pub ssl_peer_name_ptr: MQPTR,
    pub ssl_peer_name_length: MQLONG,
    pub ssl_client_auth: MQLONG,
    pub keep_alive_interval: MQLONG,
    pub local_address: [MQCHAR; MQ_LOCAL_ADDRESS_LENGTH],
    pub batch_heartbeat: MQLONG,
    pub hdr_comp_list: [MQLONG; 2],
    pub msg_comp_list: [MQLONG; 16],
    pub clwl_channel_rank: MQLONG,
    pub clwl_channel_priority: MQLONG,
    pub clwl_channel_weight: MQLONG,
    pub channel_monitoring: MQLONG,
    pub channel_statistics: MQLONG,
    pub sharing_conversations: MQLONG,
    pub property_control: MQLONG,
    pub max_instances: MQLONG,
    pub max_instances_per_client: MQLONG,
    pub client_channel_weight: MQLONG,
    pub connection_affinity: MQLONG,
    pub batch_data_limit: MQLONG,
    pub use_dlq: MQLONG,
    pub def_reconnect: MQLONG,
    pub certificate_label: [MQCHAR; MQ_CERT_LABEL_LENGTH],
}

impl Mqcd {
    /// All fields zero, all pointers null.
    const EMPTY: Mqcd = Mqcd {
        channel_name: [0; MQ_CHANNEL_NAME_LENGTH],
        version: 0,
        channel_type: 0,
        transport_type: 0,
        desc: [0; MQ_CHANNEL_DESC_LENGTH],
        q_mgr_name: [0; MQ_Q_MGR_NAME_LENGTH],
        xmit_q_name: [0; MQ_Q_NAME_LENGTH],
        short_connection_name: [0; MQ_SHORT_CONN_NAME_LENGTH],
        mca_name: [0; MQ_MCA_NAME_LENGTH],
        mode_name: [0; MQ_MODE_NAME_LENGTH],
        tp_name: [0; MQ_TP_NAME_LENGTH],
        batch_size: 0,
        disc_interval: 0,
        short_retry_count: 0,
        short_retry_interval: 0,
        long_retry_count: 0,
        long_retry_interval: 0,
        security_exit: [0; MQ_EXIT_NAME_LENGTH],
        msg_exit: [0; MQ_EXIT_NAME_LENGTH],
        send_exit: [0; MQ_EXIT_NAME_LENGTH],
        receive_exit: [0; MQ_EXIT_NAME_LENGTH],
        seq_number_wrap: 0,
        max_msg_length: 0,
        put_authority: 0,
        data_conversion: 0,
        security_user_data: [0; MQ_EXIT_DATA_LENGTH],
        msg_user_data: [0; MQ_EXIT_DATA_LENGTH],
        send_user_data: [0; MQ_EXIT_DATA_LENGTH],
        receive_user_data: [0; MQ_EXIT_DATA_LENGTH],
        user_identifier: [0; MQ_USER_ID_LENGTH],
        password: [0; MQ_PASSWORD_LENGTH],
        mca_user_identifier: [0; MQ_USER_ID_LENGTH],
        mca_type: 0,
        connection_name: [0; MQ_CONN_NAME_LENGTH],
        remote_user_identifier: [0; MQ_USER_ID_LENGTH],
        remote_password: [0; MQ_PASSWORD_LENGTH],
        msg_retry_exit: [0; MQ_EXIT_NAME_LENGTH],
        msg_retry_user_data: [0; MQ_EXIT_DATA_LENGTH],
        msg_retry_count: 0,
        msg_retry_interval: 0,
        heartbeat_interval: 0,
        batch_interval: 0,
        non_persistent_msg_speed: 0,
        struc_length: 0,
        exit_name_length: 0,
        exit_data_length: 0,
        msg_exits_defined: 0,
        send_exits_defined: 0,
        receive_exits_defined: 0,
        msg_exit_ptr: ptr::null_mut(),
        msg_user_data_ptr: ptr::null_mut(),
        send_exit_ptr: ptr::null_mut(),
        send_user_data_ptr: ptr::null_mut(),
        receive_exit_ptr: ptr::null_mut(),
        receive_user_data_ptr: ptr::null_mut(),
        cluster_ptr: ptr::null_mut(),
        clusters_defined: 0,
        network_priority: 0,
        long_mca_user_id_length: 0,
        long_remote_user_id_length: 0,
        long_mca_user_id_ptr: ptr::null_mut(),
        long_remote_user_id_ptr: ptr::null_mut(),
        mca_security_id: [0; MQ_SECURITY_ID_LENGTH],
        remote_security_id: [0; MQ_SECURITY_ID_LENGTH],
        ssl_cipher_spec: [0; MQ_SSL_CIPHER_SPEC_LENGTH],
        ssl_peer_name_ptr: ptr::null_mut(),
        ssl_peer_name_length: 0,
        ssl_client_auth: 0,
        keep_alive_interval: 0,
        local_address: [0; MQ_LOCAL_ADDRESS_LENGTH],
        batch_heartbeat: 0,
        hdr_comp_list: [0; 2],
        msg_comp_list: [0; 16],
        clwl_channel_rank: 0,
        clwl_channel_priority: 0,
        clwl_channel_weight: 0,
        channel_monitoring: 0,
        channel_statistics: 0,
        sharing_conversations: 0,
        property_control: 0,
        max_instances: 0,
        max_instances_per_client: 0,
        client_channel_weight: 0,
        connection_affinity: 0,
        batch_data_limit: 0,
        use_dlq: 0,
        def_reconnect: 0,
        certificate_label: [0; MQ_CERT_LABEL_LENGTH],
    };

    /// Client-connection channel over TCP to `conn_name` (e.g. `"host(1414)"`).
    pub fn client_conn(channel_name: &str, conn_name: &str) -> Result<Self, MqError> {
        let mut cd = Self::default();
        set_mq_chars(&mut cd.channel_name, channel_name)?;
        set_mq_chars(&mut cd.connection_name, conn_name)?;
        Ok(cd)
    }
}

impl Default for Mqcd {
    /// Client-connection defaults.
    fn default() -> Self {
        let mut msg_comp_list = [MQCOMPRESS_NOT_AVAILABLE; 16];
        msg_comp_list[0] = MQCOMPRESS_NONE;

        Mqcd {
            version: MQCD_CURRENT_VERSION,
            channel_type: MQCHT_CLNTCONN,
            transport_type: MQXPT_TCP,
            batch_size: 50,
            disc_interval: 6000,
            short_retry_count: 10,
            short_retry_interval: 60,
            long_retry_count: 999_999_999,
            long_retry_interval: 1200,
            seq_number_wrap: 999_999_999,
            max_msg_length: MQCD_CLIENT_MAX_MSG_LENGTH,
            put_authority: MQPA_DEFAULT,
            data_conversion: MQCDC_NO_SENDER_CONVERSION,
            mca_type: MQMCAT_PROCESS,
            msg_retry_count: 10,
            msg_retry_interval: 1000,
            heartbeat_interval: 1,
            non_persistent_msg_speed: MQNPMS_FAST,
            struc_length: std::mem::size_of::<Mqcd>() as MQLONG,
            exit_name_length: MQ_EXIT_NAME_LENGTH as MQLONG,
            exit_data_length: MQ_EXIT_DATA_LENGTH as MQLONG,
            network_priority: 0,
            ssl_client_auth: MQSCA_REQUIRED,
            keep_alive_interval: MQKAI_AUTO,
            hdr_comp_list: [MQCOMPRESS_NONE, MQCOMPRESS_NOT_AVAILABLE],
            msg_comp_list,
            clwl_channel_weight: 50,
            channel_monitoring: MQMON_OFF,
            channel_statistics: MQMON_OFF,
            sharing_conversations: 10,
            property_control: MQPROP_COMPATIBILITY,
            max_instances: 999_999_999,
            max_instances_per_client: 999_999_999,
            connection_affinity: MQCAFTY_PREFERRED,
            batch_data_limit: 5000,
            use_dlq: MQUSEDLQ_YES,
            def_reconnect: MQRCN_NO,
            ..Self::EMPTY
        }
    }
}
