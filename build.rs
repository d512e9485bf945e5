//! Selects the MQI binding.
//!
//! Emits `cfg(mq_client_installed)` and the client link directives only when the
//! vendor client is unambiguously installed. Any other outcome binds the stub.

#[allow(dead_code)]
#[path = "src/detect.rs"]
mod detect;

use detect::Detection;

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=src/detect.rs");
    println!("cargo:rerun-if-env-changed={}", detect::INSTALL_PATH_ENV_VAR);
    println!("cargo:rustc-check-cfg=cfg(mq_client_installed)");

    if std::env::var_os("CARGO_FEATURE_STUB_ONLY").is_some() {
        println!("cargo:rustc-env=MQSHIM_INSTALL_ROOT=");
        return;
    }

    let override_value = std::env::var(detect::INSTALL_PATH_ENV_VAR).ok();
    let root = detect::install_root(override_value.as_deref());

    match detect::probe(&root) {
        Detection::Present { root, lib_dir } => {
            println!("cargo:rustc-cfg=mq_client_installed");
            println!("cargo:rustc-link-search=native={}", lib_dir.display());
            println!("cargo:rustc-link-lib=dylib={}", detect::CLIENT_LINK_NAME);
            println!("cargo:rustc-env=MQSHIM_INSTALL_ROOT={}", root.display());
        }
        Detection::Absent => {
            println!("cargo:rustc-env=MQSHIM_INSTALL_ROOT=");
        }
        Detection::Ambiguous { reason } => {
            println!(
                "cargo:warning=incomplete IBM MQ client install ({}); binding the stub transport",
                reason
            );
            println!("cargo:rustc-env=MQSHIM_INSTALL_ROOT=");
        }
    }
}
