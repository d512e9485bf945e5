//! Build-time detection of an installed IBM MQ client.
//!
//! This file is compiled twice: by `build.rs` (through `#[path]`) to choose the
//! binding, and into the library so the predicate itself is testable. It must
//! only depend on `std`.

use std::path::{Path, PathBuf};

/// Default install root of the MQ client on Linux and macOS.
pub const DEFAULT_INSTALL_PATH: &str = "/opt/mqm";

/// Environment variable overriding the install root.
pub const INSTALL_PATH_ENV_VAR: &str = "MQ_INSTALLATION_PATH";

/// Headers that must both resolve for the native declarations to be usable.
pub const REQUIRED_HEADERS: [&str; 2] = ["inc/cmqc.h", "inc/cmqxc.h"];

/// Library directories searched below the install root, in order.
pub const LIBRARY_DIRS: [&str; 2] = ["lib64", "lib"];

/// Threaded client library file names.
pub const CLIENT_LIBRARIES: [&str; 2] = ["libmqic_r.so", "libmqic_r.dylib"];

/// Link name of the client library.
pub const CLIENT_LINK_NAME: &str = "mqic_r";

/// Outcome of probing an install root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Detection {
    /// Headers and client library are all present.
    Present {
        /// Install root that was probed.
        root: PathBuf,
        /// Directory containing the client library.
        lib_dir: PathBuf,
    },
    /// Nothing of the client was found.
    Absent,
    /// Some but not all of the client was found.
    Ambiguous {
        /// What made the install unusable.
        reason: String,
    },
}

impl Detection {
    /// Whether the native declarations may be bound.
    ///
    /// Only an unambiguous `Present` selects native; everything else falls
    /// back to the stub.
    pub fn selects_native(&self) -> bool {
        matches!(self, Detection::Present { .. })
    }
}

/// Resolve the install root from an optional override value.
pub fn install_root(override_value: Option<&str>) -> PathBuf {
    match override_value.map(str::trim) {
        Some(value) if !value.is_empty() => PathBuf::from(value),
        _ => PathBuf::from(DEFAULT_INSTALL_PATH),
    }
}

/// Probe `root` for the MQ client.
pub fn probe(root: &Path) -> Detection {
    if root.exists() && !root.is_dir() {
        return Detection::Ambiguous {
            reason: format!("{} is not a directory", root.display()),
        };
    }

    let missing: Vec<&str> = REQUIRED_HEADERS
        .iter()
        .copied()
        .filter(|header| !root.join(header).is_file())
        .collect();

    if missing.len() == REQUIRED_HEADERS.len() {
        return Detection::Absent;
    }
    if !missing.is_empty() {
        return Detection::Ambiguous {
            reason: format!("missing {} under {}", missing.join(", "), root.display()),
        };
    }

    match find_client_library(root) {
        Some(lib_dir) => Detection::Present {
            root: root.to_path_buf(),
            lib_dir,
        },
        None => Detection::Ambiguous {
            reason: format!(
                "headers found but no {} library under {}",
                CLIENT_LINK_NAME,
                root.display()
            ),
        },
    }
}

fn find_client_library(root: &Path) -> Option<PathBuf> {
    LIBRARY_DIRS.iter().map(|dir| root.join(dir)).find(|dir| {
        CLIENT_LIBRARIES
            .iter()
            .any(|library| dir.join(library).is_file())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn touch(root: &Path, relative: &str) {
        let path = root.join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, b"").unwrap();
    }

    #[test]
    fn test_missing_root_is_absent() {
        let dir = tempfile::tempdir().unwrap();
        let detection = probe(&dir.path().join("mqm"));
        assert_eq!(detection, Detection::Absent);
        assert!(!detection.selects_native());
    }

    #[test]
    fn test_empty_root_is_absent() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(probe(dir.path()), Detection::Absent);
    }

    #[test]
    fn test_full_install_is_present() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "inc/cmqc.h");
        touch(dir.path(), "inc/cmqxc.h");
        touch(dir.path(), "lib64/libmqic_r.so");

        let detection = probe(dir.path());
        assert!(detection.selects_native());
        assert_eq!(
            detection,
            Detection::Present {
                root: dir.path().to_path_buf(),
                lib_dir: dir.path().join("lib64"),
            }
        );
    }

    #[test]
    fn test_lib_dir_fallback() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "inc/cmqc.h");
        touch(dir.path(), "inc/cmqxc.h");
        touch(dir.path(), "lib/libmqic_r.dylib");

        match probe(dir.path()) {
            Detection::Present { lib_dir, .. } => assert_eq!(lib_dir, dir.path().join("lib")),
            other => panic!("expected Present, got {:?}", other),
        }
    }

    #[test]
    fn test_single_header_is_ambiguous() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "inc/cmqc.h");
        touch(dir.path(), "lib64/libmqic_r.so");

        let detection = probe(dir.path());
        assert!(matches!(
            detection,
            Detection::Ambiguous { ref reason } if reason.contains("cmqxc.h")
        ));
        assert!(!detection.selects_native());
    }

    #[test]
    fn test_headers_without_library_are_ambiguous() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "inc/cmqc.h");
        touch(dir.path(), "inc/cmqxc.h");

        assert!(matches!(probe(dir.path()), Detection::Ambiguous { .. }));
    }

    #[test]
    fn test_root_file_is_ambiguous() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "mqm");
        assert!(matches!(
            probe(&dir.path().join("mqm")),
            Detection::Ambiguous { .. }
        ));
    }

    #[test]
    fn test_install_root_override() {
        assert_eq!(install_root(None), PathBuf::from(DEFAULT_INSTALL_PATH));
        assert_eq!(install_root(Some("  ")), PathBuf::from(DEFAULT_INSTALL_PATH));
        assert_eq!(install_root(Some("/srv/mq")), PathBuf::from("/srv/mq"));
    }
}
