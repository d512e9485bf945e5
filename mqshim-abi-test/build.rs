//! Build script for ABI compatibility testing
//!
//! Compiles a C reference of the documented MQI structure layouts and
//! constant values, so the tests can compare them with the Rust records.

use std::env;
use std::path::Path;
use std::path::PathBuf;

fn main() {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());

    generate_reference_c_code(&out_dir);

    println!("cargo:rerun-if-changed=build.rs");
}

const MQI_TYPES: &str = r#"
/* Transcribed from the vendor's documented declarations (cmqc.h, cmqxc.h,
 * cmqcfc.h); field types use the vendor's typedef names. */
#include <stddef.h>
#include <stdint.h>

typedef int32_t  MQLONG;
typedef int64_t  MQINT64;
typedef char     MQCHAR;
typedef unsigned char MQBYTE;
typedef void    *MQPTR;
typedef MQCHAR  *PMQCHAR;

typedef MQLONG   MQHCONN;
typedef MQLONG   MQHOBJ;
typedef MQINT64  MQHMSG;

typedef MQCHAR   MQCHAR4[4];
typedef MQCHAR   MQCHAR8[8];
typedef MQCHAR   MQCHAR12[12];
typedef MQCHAR   MQCHAR20[20];
typedef MQCHAR   MQCHAR28[28];
typedef MQCHAR   MQCHAR32[32];
typedef MQCHAR   MQCHAR48[48];
typedef MQCHAR   MQCHAR64[64];
typedef MQCHAR   MQCHAR128[128];
typedef MQCHAR   MQCHAR264[264];
typedef MQBYTE   MQBYTE4[4];
typedef MQBYTE   MQBYTE8[8];
typedef MQBYTE   MQBYTE16[16];
typedef MQBYTE   MQBYTE24[24];
typedef MQBYTE   MQBYTE32[32];
typedef MQBYTE   MQBYTE40[40];
typedef MQBYTE   MQBYTE128[128];

/* MQCHARV: variable-length string */
typedef struct tagMQCHARV {
    MQPTR    VSPtr;          /* Address of variable length string */
    MQLONG   VSOffset;       /* Offset of variable length string */
    MQLONG   VSBufSize;      /* Size of buffer */
    MQLONG   VSLength;       /* Length of variable length string */
    MQLONG   VSCCSID;        /* CCSID of variable length string */
} MQCHARV;

/* MQCD: channel definition, version 11 */
typedef struct tagMQCD {
    MQCHAR20   ChannelName;
    MQLONG     Version;
    MQLONG     ChannelType;
    MQLONG     TransportType;
    MQCHAR64   Desc;
    MQCHAR48   QMgrName;
    MQCHAR48   XmitQName;
    MQCHAR20   ShortConnectionName;
    MQCHAR20   MCAName;
    MQCHAR8    ModeName;
    MQCHAR64   TpName;
    MQLONG     BatchSize;
    MQLONG     DiscInterval;
    MQLONG     ShortRetryCount;
    MQLONG     ShortRetryInterval;
    MQLONG     LongRetryCount;
    MQLONG     LongRetryInterval;
    MQCHAR128  SecurityExit;
    MQCHAR128  MsgExit;
    MQCHAR128  SendExit;
    MQCHAR128  ReceiveExit;
    MQLONG     SeqNumberWrap;
    MQLONG     MaxMsgLength;
    MQLONG     PutAuthority;
    MQLONG     DataConversion;
    MQCHAR32   SecurityUserData;
    MQCHAR32   MsgUserData;
    MQCHAR32   SendUserData;
    MQCHAR32   ReceiveUserData;
    /* Ver:1 */
    MQCHAR12   UserIdentifier;
    MQCHAR12   Password;
    MQCHAR12   MCAUserIdentifier;
    MQLONG     MCAType;
    MQCHAR264  ConnectionName;
    MQCHAR12   RemoteUserIdentifier;
    MQCHAR12   RemotePassword;
    /* Ver:2 */
    MQCHAR128  MsgRetryExit;
    MQCHAR32   MsgRetryUserData;
    MQLONG     MsgRetryCount;
    MQLONG     MsgRetryInterval;
    /* Ver:3 */
    MQLONG     HeartbeatInterval;
    MQLONG     BatchInterval;
    MQLONG     NonPersistentMsgSpeed;
    MQLONG     StrucLength;
    MQLONG     ExitNameLength;
    MQLONG     ExitDataLength;
    MQLONG     MsgExitsDefined;
    MQLONG     SendExitsDefined;
    MQLONG     ReceiveExitsDefined;
    MQPTR      MsgExitPtr;
    MQPTR      MsgUserDataPtr;
    MQPTR      SendExitPtr;
    MQPTR      SendUserDataPtr;
    MQPTR      ReceiveExitPtr;
    MQPTR      ReceiveUserDataPtr;
    /* Ver:4 */
    MQPTR      ClusterPtr;
    MQLONG     ClustersDefined;
    MQLONG     NetworkPriority;
    /* Ver:5 */
    MQLONG     LongMCAUserIdLength;
    MQLONG     LongRemoteUserIdLength;
    MQPTR      LongMCAUserIdPtr;
    MQPTR      LongRemoteUserIdPtr;
    MQBYTE40   MCASecurityId;
    MQBYTE40   RemoteSecurityId;
    /* Ver:6 */
    MQCHAR32   SSLCipherSpec;
    MQPTR      SSLPeerNamePtr;
    MQLONG     SSLPeerNameLength;
    MQLONG     SSLClientAuth;
    MQLONG     KeepAliveInterval;
    MQCHAR48   LocalAddress;
    MQLONG     BatchHeartbeat;
    /* Ver:7 */
    MQLONG     HdrCompList[2];
    MQLONG     MsgCompList[16];
    MQLONG     CLWLChannelRank;
    MQLONG     CLWLChannelPriority;
    MQLONG     CLWLChannelWeight;
    MQLONG     ChannelMonitoring;
    MQLONG     ChannelStatistics;
    /* Ver:8 */
    MQLONG     SharingConversations;
    MQLONG     PropertyControl;
    MQLONG     MaxInstances;
    MQLONG     MaxInstancesPerClient;
    MQLONG     ClientChannelWeight;
    MQLONG     ConnectionAffinity;
    /* Ver:9 */
    MQLONG     BatchDataLimit;
    MQLONG     UseDLQ;
    MQLONG     DefReconnect;
    /* Ver:10 */
    MQCHAR64   CertificateLabel;
    /* Ver:11 */
} MQCD;

/* MQCNO: connect options, version 5 */
typedef struct tagMQCNO {
    MQCHAR4    StrucId;
    MQLONG     Version;
    MQLONG     Options;
    /* Ver:1 */
    MQLONG     ClientConnOffset;
    MQPTR      ClientConnPtr;
    /* Ver:2 */
    MQBYTE128  ConnTag;
    /* Ver:3 */
    MQPTR      SSLConfigPtr;
    MQLONG     SSLConfigOffset;
    /* Ver:4 */
    MQBYTE24   ConnectionId;
    MQLONG     SecurityParmsOffset;
    MQPTR      SecurityParmsPtr;
    /* Ver:5 */
    MQPTR      CCDTUrlPtr;
    MQLONG     CCDTUrlOffset;
    MQLONG     CCDTUrlLength;
    MQBYTE8    Reserved;
} MQCNO;

/* MQCSP: security parameters, version 1 */
typedef struct tagMQCSP {
    MQCHAR4    StrucId;
    MQLONG     Version;
    MQLONG     AuthenticationType;
    MQBYTE4    Reserved1;
    MQPTR      CSPUserIdPtr;
    MQLONG     CSPUserIdOffset;
    MQLONG     CSPUserIdLength;
    MQBYTE8    Reserved2;
    MQPTR      CSPPasswordPtr;
    MQLONG     CSPPasswordOffset;
    MQLONG     CSPPasswordLength;
} MQCSP;

/* MQOD: object descriptor, version 4 */
typedef struct tagMQOD {
    MQCHAR4    StrucId;
    MQLONG     Version;
    MQLONG     ObjectType;
    MQCHAR48   ObjectName;
    MQCHAR48   ObjectQMgrName;
    MQCHAR48   DynamicQName;
    MQCHAR12   AlternateUserId;
    /* Ver:1 */
    MQLONG     RecsPresent;
    MQLONG     KnownDestCount;
    MQLONG     UnknownDestCount;
    MQLONG     InvalidDestCount;
    MQLONG     ObjectRecOffset;
    MQLONG     ResponseRecOffset;
    MQPTR      ObjectRecPtr;
    MQPTR      ResponseRecPtr;
    /* Ver:2 */
    MQBYTE40   AlternateSecurityId;
    MQCHAR48   ResolvedQName;
    MQCHAR48   ResolvedQMgrName;
    /* Ver:3 */
    MQCHARV    ObjectString;
    MQCHARV    SelectionString;
    MQCHARV    ResObjectString;
    MQLONG     ResolvedType;
    /* Ver:4 */
} MQOD;

/* MQMD: message descriptor, version 2 */
typedef struct tagMQMD {
    MQCHAR4    StrucId;
    MQLONG     Version;
    MQLONG     Report;
    MQLONG     MsgType;
    MQLONG     Expiry;
    MQLONG     Feedback;
    MQLONG     Encoding;
    MQLONG     CodedCharSetId;
    MQCHAR8    Format;
    MQLONG     Priority;
    MQLONG     Persistence;
    MQBYTE24   MsgId;
    MQBYTE24   CorrelId;
    MQLONG     BackoutCount;
    MQCHAR48   ReplyToQ;
    MQCHAR48   ReplyToQMgr;
    MQCHAR12   UserIdentifier;
    MQBYTE32   AccountingToken;
    MQCHAR32   ApplIdentityData;
    MQLONG     PutApplType;
    MQCHAR28   PutApplName;
    MQCHAR8    PutDate;
    MQCHAR8    PutTime;
    MQCHAR4    ApplOriginData;
    /* Ver:1 */
    MQBYTE24   GroupId;
    MQLONG     MsgSeqNumber;
    MQLONG     Offset;
    MQLONG     MsgFlags;
    MQLONG     OriginalLength;
    /* Ver:2 */
} MQMD;

/* MQGMO: get-message options, version 4 */
typedef struct tagMQGMO {
    MQCHAR4    StrucId;
    MQLONG     Version;
    MQLONG     Options;
    MQLONG     WaitInterval;
    MQLONG     Signal1;
    MQLONG     Signal2;
    MQCHAR48   ResolvedQName;
    /* Ver:1 */
    MQLONG     MatchOptions;
    MQCHAR     GroupStatus;
    MQCHAR     SegmentStatus;
    MQCHAR     Segmentation;
    MQCHAR     Reserved1;
    /* Ver:2 */
    MQBYTE16   MsgToken;
    MQLONG     ReturnedLength;
    /* Ver:3 */
    MQLONG     Reserved2;
    MQHMSG     MsgHandle;
    /* Ver:4 */
} MQGMO;

/* MQPMO: put-message options, version 3 */
typedef struct tagMQPMO {
    MQCHAR4    StrucId;
    MQLONG     Version;
    MQLONG     Options;
    MQLONG     Timeout;
    MQHOBJ     Context;
    MQLONG     KnownDestCount;
    MQLONG     UnknownDestCount;
    MQLONG     InvalidDestCount;
    MQCHAR48   ResolvedQName;
    MQCHAR48   ResolvedQMgrName;
    /* Ver:1 */
    MQLONG     RecsPresent;
    MQLONG     PutMsgRecFields;
    MQLONG     PutMsgRecOffset;
    MQLONG     ResponseRecOffset;
    MQPTR      PutMsgRecPtr;
    MQPTR      ResponseRecPtr;
    /* Ver:2 */
    MQHMSG     OriginalMsgHandle;
    MQHMSG     NewMsgHandle;
    MQLONG     Action;
    MQLONG     PubLevel;
    /* Ver:3 */
} MQPMO;

/* PCF records (cmqcfc.h) */
typedef struct tagMQCFH {
    MQLONG     Type;
    MQLONG     StrucLength;
    MQLONG     Version;
    MQLONG     Command;
    MQLONG     MsgSeqNumber;
    MQLONG     Control;
    MQLONG     CompCode;
    MQLONG     Reason;
    MQLONG     ParameterCount;
} MQCFH;

typedef struct tagMQCFIN {
    MQLONG     Type;
    MQLONG     StrucLength;
    MQLONG     Parameter;
    MQLONG     Value;
} MQCFIN;

typedef struct tagMQCFST {
    MQLONG     Type;
    MQLONG     StrucLength;
    MQLONG     Parameter;
    MQLONG     CodedCharSetId;
    MQLONG     StringLength;
    MQCHAR     String[1];
} MQCFST;

typedef struct tagMQCFIL {
    MQLONG     Type;
    MQLONG     StrucLength;
    MQLONG     Parameter;
    MQLONG     Count;
    MQLONG     Values[1];
} MQCFIL;

typedef struct tagMQCFSL {
    MQLONG     Type;
    MQLONG     StrucLength;
    MQLONG     Parameter;
    MQLONG     CodedCharSetId;
    MQLONG     Count;
    MQLONG     StringLength;
    MQCHAR     Strings[1];
} MQCFSL;

/* Published structure lengths */
#if UINTPTR_MAX == 0xffffffffffffffff
#define MQCNO_LENGTH_5  224
#define MQCSP_LENGTH_1  56
#define MQOD_LENGTH_4   424
#define MQPMO_LENGTH_3  184
#else
#define MQCNO_LENGTH_5  208
#define MQCSP_LENGTH_1  48
#define MQOD_LENGTH_4   400
#define MQPMO_LENGTH_3  176
#endif
#define MQMD_LENGTH_2   364
#define MQGMO_LENGTH_4  112
"#;

/// (struct, fields whose offsets are exported)
const LAYOUTS: &[(&str, &[&str])] = &[
    ("MQCHARV", &["VSPtr", "VSOffset", "VSBufSize", "VSLength", "VSCCSID"]),
    (
        "MQCD",
        &[
            "Version", "Desc", "ConnectionName", "MsgRetryExit", "StrucLength", "MsgExitPtr",
            "ClusterPtr", "LongMCAUserIdPtr", "MCASecurityId", "SSLPeerNamePtr", "LocalAddress",
            "MsgCompList", "CertificateLabel",
        ],
    ),
    (
        "MQCNO",
        &[
            "Version", "Options", "ClientConnOffset", "ClientConnPtr", "ConnTag", "SSLConfigPtr",
            "SSLConfigOffset", "ConnectionId", "SecurityParmsOffset", "SecurityParmsPtr",
            "CCDTUrlPtr", "CCDTUrlOffset", "CCDTUrlLength", "Reserved",
        ],
    ),
    (
        "MQCSP",
        &[
            "AuthenticationType", "CSPUserIdPtr", "CSPUserIdOffset", "CSPUserIdLength",
            "CSPPasswordPtr", "CSPPasswordOffset", "CSPPasswordLength",
        ],
    ),
    (
        "MQOD",
        &[
            "ObjectType", "ObjectName", "ObjectQMgrName", "DynamicQName", "AlternateUserId",
            "ObjectRecPtr", "ResponseRecPtr", "AlternateSecurityId", "ResolvedQName",
            "ResolvedQMgrName", "ObjectString", "SelectionString", "ResObjectString",
            "ResolvedType",
        ],
    ),
    (
        "MQMD",
        &[
            "Format", "Priority", "MsgId", "CorrelId", "BackoutCount", "ReplyToQ", "ReplyToQMgr",
            "AccountingToken", "PutApplType", "PutApplName", "ApplOriginData", "GroupId",
            "MsgSeqNumber", "OriginalLength",
        ],
    ),
    (
        "MQGMO",
        &[
            "Options", "WaitInterval", "ResolvedQName", "MatchOptions", "GroupStatus", "MsgToken",
            "ReturnedLength", "MsgHandle",
        ],
    ),
    (
        "MQPMO",
        &[
            "Context", "ResolvedQName", "ResolvedQMgrName", "PutMsgRecPtr", "ResponseRecPtr",
            "OriginalMsgHandle", "Action", "PubLevel",
        ],
    ),
    ("MQCFH", &["Command", "Control", "ParameterCount"]),
    ("MQCFIN", &["Parameter", "Value"]),
    ("MQCFST", &["CodedCharSetId", "StringLength", "String"]),
    ("MQCFIL", &["Count", "Values"]),
    ("MQCFSL", &["Count", "StringLength", "Strings"]),
];

/// (record, published length macro) pairs; the C side rejects a mismatch at compile time.
const LENGTHS: &[(&str, &str)] = &[
    ("MQCNO", "MQCNO_LENGTH_5"),
    ("MQCSP", "MQCSP_LENGTH_1"),
    ("MQOD", "MQOD_LENGTH_4"),
    ("MQPMO", "MQPMO_LENGTH_3"),
    ("MQMD", "MQMD_LENGTH_2"),
    ("MQGMO", "MQGMO_LENGTH_4"),
];

/// Constant values as published for the vendor client.
const CONSTANTS: &[(&str, i32)] = &[
    ("MQCC_OK", 0),
    ("MQCC_WARNING", 1),
    ("MQCC_FAILED", 2),
    ("MQRC_NONE", 0),
    ("MQRC_CONNECTION_BROKEN", 2009),
    ("MQRC_NO_MSG_AVAILABLE", 2033),
    ("MQRC_NOT_AUTHORIZED", 2035),
    ("MQRC_Q_FULL", 2053),
    ("MQRC_Q_MGR_NAME_ERROR", 2058),
    ("MQRC_Q_MGR_NOT_AVAILABLE", 2059),
    ("MQRC_TRUNCATED_MSG_ACCEPTED", 2079),
    ("MQRC_OBJECT_ALREADY_EXISTS", 2100),
    ("MQRC_HOST_NOT_AVAILABLE", 2538),
    ("MQHC_UNUSABLE_HCONN", -1),
    ("MQHO_UNUSABLE_HOBJ", -1),
    ("MQCNO_HANDLE_SHARE_BLOCK", 0x40),
    ("MQOO_INPUT_AS_Q_DEF", 0x1),
    ("MQOO_OUTPUT", 0x10),
    ("MQOO_INQUIRE", 0x20),
    ("MQOO_FAIL_IF_QUIESCING", 0x2000),
    ("MQCO_DELETE", 0x1),
    ("MQGMO_WAIT", 0x1),
    ("MQGMO_NO_SYNCPOINT", 0x4),
    ("MQGMO_ACCEPT_TRUNCATED_MSG", 0x40),
    ("MQGMO_CONVERT", 0x4000),
    ("MQPMO_NO_SYNCPOINT", 0x4),
    ("MQPMO_NEW_MSG_ID", 0x40),
    ("MQMO_MATCH_MSG_ID", 0x1),
    ("MQMO_MATCH_CORREL_ID", 0x2),
    ("MQIA_CURRENT_Q_DEPTH", 3),
    ("MQIA_INHIBIT_GET", 9),
    ("MQIA_INHIBIT_PUT", 10),
    ("MQIA_MAX_Q_DEPTH", 15),
    ("MQIA_OPEN_INPUT_COUNT", 17),
    ("MQIA_OPEN_OUTPUT_COUNT", 18),
    ("MQIA_Q_TYPE", 20),
    ("MQCA_Q_NAME", 2016),
    ("MQCFT_COMMAND", 1),
    ("MQCFT_RESPONSE", 2),
    ("MQCFT_INTEGER", 3),
    ("MQCFT_STRING", 4),
    ("MQCFT_INTEGER_LIST", 5),
    ("MQCFT_STRING_LIST", 6),
    ("MQCMD_CREATE_Q", 11),
    ("MQCMD_DELETE_Q", 12),
    ("MQCMD_INQUIRE_Q", 13),
    ("MQIACF_Q_ATTRS", 1002),
];

fn generate_reference_c_code(out_dir: &Path) {
    let mut c_code = String::from(MQI_TYPES);

    c_code.push_str("\n/* Size, alignment and offset functions */\n");
    for (name, fields) in LAYOUTS {
        c_code.push_str(&format!(
            "size_t {name}_size(void) {{ return sizeof({name}); }}\n\
             size_t {name}_align(void) {{ return _Alignof({name}); }}\n"
        ));
        for field in *fields {
            c_code.push_str(&format!(
                "size_t {name}_{field}_offset(void) {{ return offsetof({name}, {field}); }}\n"
            ));
        }
    }

    c_code.push_str("\n/* Published structure lengths */\n");
    for (name, length) in LENGTHS {
        c_code.push_str(&format!(
            "_Static_assert(sizeof({name}) == {length}, \"{name} is not {length}\");\n\
             size_t {length}_value(void) {{ return {length}; }}\n"
        ));
    }

    c_code.push_str("\n/* Published constant values */\n");
    for (name, value) in CONSTANTS {
        c_code.push_str(&format!("int32_t VERIFY_{name} = {value};\n"));
    }

    let c_file = out_dir.join("mqi_reference.c");
    std::fs::write(&c_file, c_code).expect("Failed to write C reference code");

    cc::Build::new()
        .file(&c_file)
        .warnings(false)
        .static_flag(true)
        .compile("mqi_reference");
}
