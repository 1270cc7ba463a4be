use std::fs;

use anyhow::Result;
use serde::{Deserialize, Serialize};

use create_next_xpres::layout::Layout;

#[derive(Debug, Serialize, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub(crate) struct Config {
    pub(crate) layout: Layout,
    pub(crate) package_manager: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            layout: Layout::default(),
            package_manager: String::from("npm"),
        }
    }
}

impl Config {
    pub(crate) fn init() -> Result<Self> {
        let path = home::home_dir()
            .expect("failed to locate user home directory")
            .join(".create-next-xpres.toml");

        let config = if !path.exists() {
            let config = Self::default();
            let contents = toml::to_string_pretty(&config)?;
            fs::write(path, contents)?;
            config
        } else {
            let contents = fs::read_to_string(path)?;
            toml::from_str(&contents)?
        };

        Ok(config)
    }
}
