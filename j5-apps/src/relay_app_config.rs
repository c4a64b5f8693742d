use std::path::Path;

use j5_relay::RelayConfig;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::Error;

/// Top-level configuration of the relay binary.
#[derive(Debug, Serialize, Deserialize, Clone, Default, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct RelayAppConfig {
    #[serde(default)]
    pub relay: RelayConfig,
}

impl RelayAppConfig {
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        Self::from_str(
            &std::fs::read_to_string(&path)
                .map_err(|e| Error::NoFile(path.as_ref().to_owned(), e))?,
            path,
        )
    }

    pub fn from_str<P: AsRef<Path>>(s: &str, path: P) -> Result<Self, Error> {
        toml::from_str(s).map_err(|e| Error::TomlParseFailure(path.as_ref().to_owned(), e))
    }
}
