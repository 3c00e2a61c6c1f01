use std::env::{self, VarError};
use thiserror::Error;
use tracing::warn;

use crate::env_keys::{BUCKET_NAME, QUEUE_NAME};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Environment variable {key} is not valid unicode")]
    NotUnicode { key: String },
}

/// Values resolved once at cold start. An unset or empty variable is `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppConfig {
    pub bucket_name: Option<String>,
    pub queue_name: Option<String>,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key))
    }

    /// Like [`AppConfig::from_env`], but a non-unicode value is an error
    /// instead of being treated as unset.
    pub fn try_from_env() -> Result<Self, ConfigError> {
        Self::try_from_lookup(|key| env::var(key))
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Result<String, VarError>,
    {
        Self {
            bucket_name: lenient_value(&lookup, BUCKET_NAME),
            queue_name: lenient_value(&lookup, QUEUE_NAME),
        }
    }

    pub fn try_from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Result<String, VarError>,
    {
        Ok(Self {
            bucket_name: config_value(&lookup, BUCKET_NAME)?,
            queue_name: config_value(&lookup, QUEUE_NAME)?,
        })
    }
}

fn config_value<F>(lookup: &F, key: &str) -> Result<Option<String>, ConfigError>
where
    F: Fn(&str) -> Result<String, VarError>,
{
    match lookup(key) {
        Ok(value) if !value.is_empty() => Ok(Some(value)),
        Ok(_) | Err(VarError::NotPresent) => Ok(None),
        Err(VarError::NotUnicode(_)) => Err(ConfigError::NotUnicode {
            key: key.to_string(),
        }),
    }
}

fn lenient_value<F>(lookup: &F, key: &str) -> Option<String>
where
    F: Fn(&str) -> Result<String, VarError>,
{
    config_value(lookup, key).unwrap_or_else(|e| {
        warn!(key = key, error = %e, "Treating config value as unset");
        None
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::ffi::OsString;

    fn lookup_from(
        vars: &[(&str, &str)],
    ) -> impl Fn(&str) -> Result<String, VarError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned().ok_or(VarError::NotPresent)
    }

    fn not_unicode(key: &str) -> Result<String, VarError> {
        if key == QUEUE_NAME {
            Err(VarError::NotUnicode(OsString::from("jobs")))
        } else {
            Ok("assets-bucket".to_string())
        }
    }

    #[test]
    fn reads_both_values() {
        let config = AppConfig::from_lookup(lookup_from(&[
            (BUCKET_NAME, "assets-bucket"),
            (QUEUE_NAME, "jobs-queue"),
        ]));

        assert_eq!(config.bucket_name.as_deref(), Some("assets-bucket"));
        assert_eq!(config.queue_name.as_deref(), Some("jobs-queue"));
    }

    #[test]
    fn missing_values_are_none() {
        let config = AppConfig::from_lookup(lookup_from(&[]));
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn empty_value_is_treated_as_unset() {
        let config = AppConfig::from_lookup(lookup_from(&[
            (BUCKET_NAME, ""),
            (QUEUE_NAME, "jobs-queue"),
        ]));

        assert_eq!(config.bucket_name, None);
        assert_eq!(config.queue_name.as_deref(), Some("jobs-queue"));
    }

    #[test]
    fn whitespace_is_kept_verbatim() {
        let config = AppConfig::from_lookup(lookup_from(&[(BUCKET_NAME, " ")]));
        assert_eq!(config.bucket_name.as_deref(), Some(" "));
    }

    #[test]
    fn lenient_loader_drops_non_unicode_value() {
        let config = AppConfig::from_lookup(not_unicode);

        assert_eq!(config.bucket_name.as_deref(), Some("assets-bucket"));
        assert_eq!(config.queue_name, None);
    }

    #[test]
    fn strict_loader_reports_non_unicode_key() {
        let err = AppConfig::try_from_lookup(not_unicode).unwrap_err();

        assert_eq!(
            err,
            ConfigError::NotUnicode {
                key: QUEUE_NAME.to_string()
            }
        );
        assert_eq!(
            err.to_string(),
            "Environment variable QUEUE_NAME is not valid unicode"
        );
    }
}
