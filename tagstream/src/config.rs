use std::{fs::File, path::Path};

use anyhow::Result;
use serde::Deserialize;

/// Runtime knobs for the URL check. Everything is optional; the category and
/// keyword tables of the normalizer are compile-time data and not configured
/// here.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Config {
    /// Per-request timeout in seconds
    pub check_timeout: Option<u64>,
    pub user_agent: Option<String>,
}

pub fn load_config(path: impl AsRef<Path>) -> Result<Config> {
    let file = File::open(path.as_ref())?;
    let config: Config = serde_yaml::from_reader(file)?;
    Ok(config)
}
