//! ABI compatibility testing for mqshim
//!
//! Checks that the `#[repr(C)]` MQI records are binary-compatible with the
//! C declarations. The compile-time checks below cover 64-bit targets; the
//! tests compare against a compiled C reference on every target.

#![allow(non_camel_case_types)]
#![allow(non_upper_case_globals)]

use core::mem::{align_of, size_of};

/// Macro to verify structure size matches expected value
#[macro_export]
macro_rules! verify_size {
    ($rust_type:ty, $expected_size:expr) => {
        const _: () = {
            const SIZE: usize = ::core::mem::size_of::<$rust_type>();
            const EXPECTED: usize = $expected_size;

            assert!(SIZE == EXPECTED, "Size mismatch");
        };
    };
}

/// Macro to verify field offset matches expected value
#[macro_export]
macro_rules! verify_offset {
    ($type:ty, $field:ident, $expected_offset:expr) => {
        const _: () = {
            use memoffset::offset_of;
            const OFFSET: usize = offset_of!($type, $field);
            const EXPECTED: usize = $expected_offset;

            assert!(OFFSET == EXPECTED, "Offset mismatch");
        };
    };
}

/// Macro to verify type alignment
#[macro_export]
macro_rules! verify_align {
    ($type:ty, $expected_align:expr) => {
        const _: () = {
            const ALIGN: usize = ::core::mem::align_of::<$type>();
            const EXPECTED: usize = $expected_align;

            assert!(ALIGN == EXPECTED, "Alignment mismatch");
        };
    };
}

/// Result of comparing one record with its C counterpart
#[derive(Debug, PartialEq, Eq)]
pub struct AbiCompatResult {
    pub struct_name: &'static str,
    pub size_match: bool,
    pub align_match: bool,
    pub fields_match: bool,
}

impl AbiCompatResult {
    pub fn is_compatible(&self) -> bool {
        self.size_match && self.align_match && self.fields_match
    }
}

/// Compare a Rust record's size and alignment with the C values.
///
/// `offsets` pairs each Rust field offset with the C one.
pub fn verify_struct_layout<T>(
    name: &'static str,
    expected_size: usize,
    expected_align: usize,
    offsets: &[(usize, usize)],
) -> AbiCompatResult {
    AbiCompatResult {
        struct_name: name,
        size_match: size_of::<T>() == expected_size,
        align_match: align_of::<T>() == expected_align,
        fields_match: offsets.iter().all(|(rust, c)| rust == c),
    }
}

// Records without pointers have the same layout everywhere.
mod fixed {
    use mqshim::pcf::{Mqcfh, Mqcfil, Mqcfin, Mqcfsl, Mqcfst};
    use mqshim::{Hconn, Hobj, Mqmd, MQLONG};
    use static_assertions::assert_eq_size;

    assert_eq_size!(Hconn, MQLONG);
    assert_eq_size!(Hobj, MQLONG);

    verify_size!(Mqmd, 364);
    verify_align!(Mqmd, 4);
    verify_offset!(Mqmd, format, 32);
    verify_offset!(Mqmd, msg_id, 48);
    verify_offset!(Mqmd, correl_id, 72);
    verify_offset!(Mqmd, reply_to_q, 100);
    verify_offset!(Mqmd, group_id, 324);
    verify_offset!(Mqmd, original_length, 360);

    verify_size!(Mqcfh, 36);
    verify_size!(Mqcfin, 16);
    verify_size!(Mqcfst, 20);
    verify_size!(Mqcfil, 16);
    verify_size!(Mqcfsl, 24);
}

#[cfg(target_pointer_width = "64")]
mod lp64 {
    use mqshim::{Mqcd, Mqcharv, Mqcno, Mqcsp, Mqgmo, Mqod, Mqpmo};

    verify_size!(Mqcharv, 24);
    verify_align!(Mqcharv, 8);
    verify_offset!(Mqcharv, vs_offset, 8);
    verify_offset!(Mqcharv, vs_ccsid, 20);

    verify_size!(Mqcno, 224);
    verify_align!(Mqcno, 8);
    verify_offset!(Mqcno, client_conn_ptr, 16);
    verify_offset!(Mqcno, conn_tag, 24);
    verify_offset!(Mqcno, ssl_config_ptr, 152);
    verify_offset!(Mqcno, connection_id, 164);
    verify_offset!(Mqcno, security_parms_ptr, 192);
    verify_offset!(Mqcno, reserved, 216);

    verify_size!(Mqcsp, 56);
    verify_offset!(Mqcsp, csp_user_id_ptr, 16);
    verify_offset!(Mqcsp, csp_password_ptr, 40);

    verify_size!(Mqod, 424);
    verify_align!(Mqod, 8);
    verify_offset!(Mqod, object_rec_ptr, 192);
    verify_offset!(Mqod, alternate_security_id, 208);
    verify_offset!(Mqod, object_string, 344);
    verify_offset!(Mqod, selection_string, 368);
    verify_offset!(Mqod, res_object_string, 392);
    verify_offset!(Mqod, resolved_type, 416);

    verify_size!(Mqgmo, 112);
    verify_align!(Mqgmo, 8);
    verify_offset!(Mqgmo, resolved_q_name, 24);
    verify_offset!(Mqgmo, match_options, 72);
    verify_offset!(Mqgmo, msg_token, 80);
    verify_offset!(Mqgmo, msg_handle, 104);

    verify_size!(Mqpmo, 184);
    verify_offset!(Mqpmo, put_msg_rec_ptr, 144);
    verify_offset!(Mqpmo, original_msg_handle, 160);
    verify_offset!(Mqpmo, pub_level, 180);

    verify_size!(Mqcd, 1984);
    verify_align!(Mqcd, 8);
}
