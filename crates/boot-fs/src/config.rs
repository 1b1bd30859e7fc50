//! TOML configuration loading

use crate::{Error, NormalizedPath, Result, io};
use serde::de::DeserializeOwned;

/// Load and deserialize a TOML file.
pub fn load_toml<T: DeserializeOwned>(path: &NormalizedPath) -> Result<T> {
    let content = io::read_text(path)?;
    toml::from_str(&content).map_err(|e| Error::ConfigParse {
        path: path.to_native(),
        message: e.to_string(),
    })
}
