//! Layout-compatible MQI structures.
//!
//! Every record is `#[repr(C)]` with the vendor field order and fixed array
//! widths, so a pointer to one can be handed to the C client unchanged.
//! Memory is always owned by the caller.

mod cd;
mod cno;
mod gmo;
mod md;
mod od;

pub use cd::Mqcd;
pub use cno::{Addressing, ConnectOptions, Mqcno, Mqcsp, SecurityParams};
pub use gmo::{Mqgmo, Mqpmo, MQRL_UNDEFINED};
pub use md::Mqmd;
pub use od::{Mqcharv, Mqod};

use static_assertions::const_assert_eq;

use crate::constants::{
    MQCHARV_LENGTH, MQCNO_LENGTH_5, MQCSP_LENGTH_1, MQGMO_LENGTH_4, MQMD_LENGTH_2, MQOD_LENGTH_4,
    MQPMO_LENGTH_3,
};

const_assert_eq!(core::mem::size_of::<Mqmd>(), MQMD_LENGTH_2);
const_assert_eq!(core::mem::align_of::<Mqmd>(), 4);
const_assert_eq!(core::mem::size_of::<Mqgmo>(), MQGMO_LENGTH_4);
const_assert_eq!(core::mem::size_of::<Mqcno>(), MQCNO_LENGTH_5);
const_assert_eq!(core::mem::size_of::<Mqcsp>(), MQCSP_LENGTH_1);
const_assert_eq!(core::mem::size_of::<Mqcharv>(), MQCHARV_LENGTH);
const_assert_eq!(core::mem::size_of::<Mqod>(), MQOD_LENGTH_4);
const_assert_eq!(core::mem::size_of::<Mqpmo>(), MQPMO_LENGTH_3);

#[cfg(target_pointer_width = "64")]
mod layout_64 {
    use super::*;

    const_assert_eq!(core::mem::size_of::<Mqcd>(), 1984);
    const_assert_eq!(core::mem::align_of::<Mqcno>(), 8);
    const_assert_eq!(core::mem::align_of::<Mqod>(), 8);
}
