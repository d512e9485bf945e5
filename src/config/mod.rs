//! Shim configuration.
//!
//! Loaded from YAML files and environment variables, so the probe binary and
//! consumers can target a queue manager without code changes.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::MQWI_UNLIMITED;
use crate::options::GetOptions;
use crate::status::MqError;
use crate::structs::{ConnectOptions, Mqcd, Mqgmo};
use crate::types::MQLONG;

/// Default configuration file name.
pub const DEFAULT_CONFIG_FILE: &str = "mqshim.yaml";
/// Environment variable for configuration file path.
pub const CONFIG_ENV_VAR: &str = "MQSHIM_CONFIG";
/// Prefix for configuration environment variables.
pub const CONFIG_ENV_PREFIX: &str = "MQSHIM";
/// Environment variable for logging configuration.
pub const LOG_ENV_VAR: &str = "MQSHIM_LOG";

/// Errors loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    Load(#[from] ::config::ConfigError),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Client channel to use instead of the default channel table.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ChannelConfig {
    /// Server-connection channel name, e.g. `DEV.APP.SVRCONN`.
    pub name: String,
    /// Connection name, e.g. `localhost(1414)`.
    pub conn_name: String,
}

/// User id and password sent in the security parameters.
#[derive(Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct CredentialsConfig {
    pub user_id: String,
    #[serde(skip_serializing)]
    pub password: String,
}

impl fmt::Debug for CredentialsConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CredentialsConfig")
            .field("user_id", &self.user_id)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Top-level configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ShimConfig {
    /// Queue manager name. Empty selects the default queue manager.
    pub queue_manager: String,
    /// Client channel (optional).
    pub channel: Option<ChannelConfig>,
    /// Credentials (optional).
    pub credentials: Option<CredentialsConfig>,
    /// Get wait interval in milliseconds; negative waits forever.
    pub wait_interval_ms: MQLONG,
    /// Connect attempts made by the probe before giving up.
    pub connect_attempts: u32,
}

impl Default for ShimConfig {
    fn default() -> Self {
        Self {
            queue_manager: String::new(),
            channel: None,
            credentials: None,
            wait_interval_ms: 0,
            connect_attempts: 1,
        }
    }
}

impl ShimConfig {
    /// Load configuration from file and environment.
    ///
    /// Configuration sources (in order of priority, later overrides earlier):
    /// 1. `mqshim.yaml` in current directory (if exists)
    /// 2. File specified by `path` argument (if provided)
    /// 3. File specified by `MQSHIM_CONFIG` environment variable (if set)
    /// 4. Environment variables with `MQSHIM__` prefix, `__` between levels
    pub fn load(path: Option<&str>) -> Result<Self, ConfigError> {
        use ::config::{Config as ConfigLib, Environment, File, FileFormat};

        let mut builder = ConfigLib::builder()
            .add_source(File::new(DEFAULT_CONFIG_FILE, FileFormat::Yaml).required(false));

        if let Some(config_path) = path {
            builder = builder.add_source(File::new(config_path, FileFormat::Yaml).required(true));
        }

        if let Ok(config_path) = std::env::var(CONFIG_ENV_VAR) {
            builder = builder.add_source(File::new(&config_path, FileFormat::Yaml).required(true));
        }

        let config = builder
            .add_source(
                Environment::with_prefix(CONFIG_ENV_PREFIX)
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let config: ShimConfig = config.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.connect_attempts == 0 {
            return Err(ConfigError::Invalid(
                "connect_attempts must be at least 1".to_string(),
            ));
        }
        if let Some(channel) = &self.channel {
            if channel.name.is_empty() || channel.conn_name.is_empty() {
                return Err(ConfigError::Invalid(
                    "channel needs both name and conn_name".to_string(),
                ));
            }
        }
        Ok(())
    }

    /// Connect options for this configuration.
    pub fn connect_options(&self) -> Result<ConnectOptions, MqError> {
        let mut options = ConnectOptions::new();
        if let Some(channel) = &self.channel {
            options = options.with_channel(Mqcd::client_conn(&channel.name, &channel.conn_name)?);
        }
        if let Some(credentials) = &self.credentials {
            options = options.with_credentials(&credentials.user_id, &credentials.password)?;
        }
        Ok(options)
    }

    /// Get options honouring `wait_interval_ms`.
    pub fn get_options(&self) -> Mqgmo {
        let mut gmo = Mqgmo::with_options(GetOptions::NO_SYNCPOINT | GetOptions::FAIL_IF_QUIESCING);
        match self.wait_interval_ms {
            0 => {}
            ms if ms < 0 => gmo.wait(MQWI_UNLIMITED),
            ms => gmo.wait(ms),
        }
        gmo
    }
}
