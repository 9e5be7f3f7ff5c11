use derive_more::Display;
use std::env;
use std::str::FromStr;
use thiserror::Error;

pub const ENV_VAR_DEFAULT_REGION: &str = "PHONEPACK_DEFAULT_REGION";
pub const ENV_VAR_RECORD: &str = "PHONEPACK_RECORD";

const DEFAULT_REGION: &str = "US";

#[derive(Error, PartialEq, Eq, Clone, Debug)]
pub enum ConfigError {
    #[error("invalid value {value:?} for {var}: {reason}")]
    InvalidValue {
        var: &'static str,
        value: String,
        reason: &'static str,
    },
}

/// Which packed record the host stores.
#[derive(Display, PartialEq, Eq, Clone, Copy, Debug, Default)]
pub enum RecordKind {
    #[display(fmt = "fixed")]
    Fixed,
    #[default]
    #[display(fmt = "variable")]
    Variable,
}

impl FromStr for RecordKind {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("fixed") {
            Ok(Self::Fixed)
        } else if s.eq_ignore_ascii_case("variable") {
            Ok(Self::Variable)
        } else {
            Err("expected fixed or variable")
        }
    }
}

#[derive(PartialEq, Eq, Clone, Debug)]
pub struct HostConfig {
    default_region: String,
    record_kind: RecordKind,
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            default_region: DEFAULT_REGION.into(),
            record_kind: RecordKind::default(),
        }
    }
}

impl HostConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| env::var(var).ok())
    }

    /// Unset and empty variables take their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let lookup = |var| lookup(var).filter(|value: &String| !value.trim().is_empty());

        let default_region = match lookup(ENV_VAR_DEFAULT_REGION) {
            None => DEFAULT_REGION.into(),
            Some(value) => {
                let value = value.trim();
                if value.len() != 2 || !value.chars().all(|c| c.is_ascii_alphabetic()) {
                    return Err(ConfigError::InvalidValue {
                        var: ENV_VAR_DEFAULT_REGION,
                        value: value.into(),
                        reason: "expected a two-letter region code",
                    });
                }
                value.to_ascii_uppercase()
            }
        };

        let record_kind = match lookup(ENV_VAR_RECORD) {
            None => RecordKind::default(),
            Some(value) => {
                value
                    .trim()
                    .parse()
                    .map_err(|reason| ConfigError::InvalidValue {
                        var: ENV_VAR_RECORD,
                        value,
                        reason,
                    })?
            }
        };

        Ok(Self {
            default_region,
            record_kind,
        })
    }

    pub fn default_region(&self) -> &str {
        &self.default_region
    }

    pub fn record_kind(&self) -> RecordKind {
        self.record_kind
    }
}
