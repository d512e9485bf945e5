//! Which MQI binding this build selected.

use std::fmt;
use std::path::Path;

/// MQI binding selected by the build script.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Binding {
    /// No vendor client: every connect reports the queue manager unavailable.
    Stub,
    /// Calls go to the vendor client library.
    Native,
}

impl Binding {
    /// Binding compiled into this build.
    #[cfg(mq_client_installed)]
    pub const ACTIVE: Binding = Binding::Native;

    /// Binding compiled into this build.
    #[cfg(not(mq_client_installed))]
    pub const ACTIVE: Binding = Binding::Stub;

    /// Whether acquire calls are answered by the stub transport.
    pub fn is_stub(self) -> bool {
        self == Binding::Stub
    }

    /// Client install root linked against, for the native binding.
    pub fn install_root(self) -> Option<&'static Path> {
        match (self, env!("MQSHIM_INSTALL_ROOT")) {
            (Binding::Native, root) if !root.is_empty() => Some(Path::new(root)),
            _ => None,
        }
    }
}

impl fmt::Display for Binding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Binding::Stub => write!(f, "stub"),
            Binding::Native => write!(f, "native"),
        }
    }
}
