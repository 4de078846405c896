//! Runtime settings read from the environment.

use std::fmt;

use crate::codec::AnyCodec;

/// Environment variable holding the HTTP bind address.
pub const BIND_ADDR_VAR: &str = "DINO_BIND_ADDR";
/// Environment variable selecting the storage codec.
pub const CODEC_VAR: &str = "DINO_CODEC";

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// A variable was set to a value that cannot be used.
    InvalidValue { var: &'static str, value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidValue { var, value } => {
                write!(f, "invalid value for {}: {:?}", var, value)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Server settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub bind_addr: String,
    pub codec: AnyCodec,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
            codec: AnyCodec::default(),
        }
    }
}

impl Settings {
    /// Read settings from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Read settings through `lookup`, falling back to defaults for unset variables.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut settings = Settings::default();

        if let Some(addr) = lookup(BIND_ADDR_VAR) {
            if addr.trim().is_empty() {
                return Err(ConfigError::InvalidValue {
                    var: BIND_ADDR_VAR,
                    value: addr,
                });
            }
            settings.bind_addr = addr.trim().to_string();
        }

        if let Some(name) = lookup(CODEC_VAR) {
            settings.codec = AnyCodec::from_name(&name).ok_or(ConfigError::InvalidValue {
                var: CODEC_VAR,
                value: name,
            })?;
        }

        Ok(settings)
    }
}
