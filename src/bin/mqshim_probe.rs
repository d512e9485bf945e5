//! mqshim-probe: report the MQI binding and try a connect.
//!
//! Prints which binding this build selected, then connects to the configured
//! queue manager and, when that works, reports the depth of a queue.
//!
//! ## Configuration
//! - First argument: YAML configuration file (optional)
//! - MQSHIM_CONFIG / MQSHIM__*: see `mqshim::config`
//! - MQSHIM_PROBE_QUEUE: queue whose depth is reported (optional)
//! - MQSHIM_LOG: log filter (default: info)

use std::sync::Arc;

use tracing::{info, warn};

use mqshim::config::ShimConfig;
use mqshim::utils::bootstrap::{connect_with_retry, init_tracing};
use mqshim::{Binding, Connection, DefaultMqi, Mqi, OpenOptions};

const PROBE_QUEUE_ENV_VAR: &str = "MQSHIM_PROBE_QUEUE";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    let path = std::env::args().nth(1);
    let config = ShimConfig::load(path.as_deref())?;

    let binding = Binding::ACTIVE;
    println!("binding: {}", binding);
    if let Some(root) = binding.install_root() {
        println!("install root: {}", root.display());
    }
    print!("{}", serde_yaml::to_string(&config)?);

    let mqi: Arc<dyn Mqi> = Arc::new(DefaultMqi::default());
    let connection = match connect_with_retry(
        &config.queue_manager,
        config.connect_attempts,
        || Connection::from_config(mqi.clone(), &config),
    ) {
        Ok(connection) => connection,
        Err(e) => {
            println!("connect: {}", e);
            if binding.is_stub() {
                info!("Stub binding has no queue manager; this is the expected outcome");
                return Ok(());
            }
            return Err(e.into());
        }
    };
    println!("connect: ok (hconn {})", connection.handle().0);

    if let Ok(queue) = std::env::var(PROBE_QUEUE_ENV_VAR) {
        match connection.open_queue(&queue, OpenOptions::INQUIRE | OpenOptions::FAIL_IF_QUIESCING) {
            Ok(object) => println!("{} depth: {}", queue, object.queue_depth()?),
            Err(e) => warn!(queue = %queue, error = %e, "Failed to open probe queue"),
        }
    }

    connection.disconnect()?;
    Ok(())
}
