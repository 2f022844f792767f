use std::fs::read_to_string;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::{container::DEFAULT_OUTPUT, errors::ExportError};

#[derive(Debug, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Where to write the container file. Any existing file at this path is
    /// replaced.
    pub output: PathBuf,

    /// A fixed creation stamp, in seconds since the Unix epoch, to embed in
    /// the file info instead of the current time. Useful for reproducible
    /// output.
    pub created: Option<i64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output: PathBuf::from(DEFAULT_OUTPUT),
            created: None,
        }
    }
}

impl Config {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ExportError> {
        let path = path.as_ref();
        let err = |reason: String| ExportError::Config {
            path: path.to_owned(),
            reason,
        };
        let s = read_to_string(path).map_err(|e| err(e.to_string()))?;
        let config: Self = toml::from_str(&s).map_err(|e| err(e.to_string()))?;
        if let Some(secs) = config.created {
            if DateTime::<Utc>::from_timestamp(secs, 0).is_none() {
                return Err(err(format!("created stamp {secs} is out of range")));
            }
        }
        Ok(config)
    }

    /// the configured creation stamp, falling back to `now`
    pub fn created_or(&self, now: DateTime<Utc>) -> DateTime<Utc> {
        self.created
            .and_then(|secs| DateTime::<Utc>::from_timestamp(secs, 0))
            .unwrap_or(now)
    }
}
