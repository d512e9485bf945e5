//! mqshim - IBM MQ client (MQI) compatibility shim
//!
//! Builds against the vendor MQ client when it is installed and otherwise
//! substitutes a layout-compatible stub, so dependent code compiles and links
//! on any host.
//!
//! ## Bindings
//! The build script probes for the client headers and library
//! (`MQ_INSTALLATION_PATH`, default `/opt/mqm`). Only a complete install selects
//! the native binding; anything else binds the stub, whose calls all complete
//! with `MQCC_FAILED` / `MQRC_Q_MGR_NOT_AVAILABLE` (2059). The `stub-only`
//! feature forces the stub.
//!
//! ## Layers
//! - [`structs`], [`types`], [`constants`], [`options`]: `#[repr(C)]` records
//!   and constants matching the vendor layout
//! - [`ffi`]: the seven raw C entry points (`MQCONNX` .. `MQINQ`)
//! - [`mqi`]: the [`Mqi`] trait with [`StubMqi`] and, when installed, `NativeMqi`
//! - [`client`]: RAII [`Connection`] / [`OpenObject`] wrappers
//! - [`pcf`]: PCF administrative command encoding

pub mod binding;
pub mod client;
pub mod config;
pub mod constants;
pub mod detect;
pub mod ffi;
pub mod mqi;
pub mod options;
pub mod pcf;
pub mod status;
pub mod structs;
pub mod types;
pub mod utils;

pub use binding::Binding;
pub use client::{Connection, OpenObject};
pub use mqi::{DefaultMqi, Mqi, StubMqi};
pub use options::{CloseOptions, ConnectFlags, GetOptions, MatchOptions, OpenOptions, PutOptions};
pub use status::{CompCode, MqError, MqStatus, Reason};
pub use structs::{ConnectOptions, Mqcd, Mqcharv, Mqcno, Mqcsp, Mqgmo, Mqmd, Mqod, Mqpmo};
pub use types::{Hconn, Hobj, MQBYTE, MQCHAR, MQHCONN, MQHOBJ, MQLONG};
