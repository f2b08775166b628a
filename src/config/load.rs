use std::env;
use std::path::PathBuf;

use crate::error::{Error, Result};

use super::schema::Settings;

const APP_DIR: &str = "kaudiobooks";
const ENV_PREFIX: &str = "KAUDIOBOOKS";

impl Settings {
    /// Struct defaults, overlaid by the config file (if any), overlaid by
    /// `KAUDIOBOOKS__SECTION__KEY` environment variables.
    pub fn load() -> Result<Self> {
        let mut builder = ::config::Config::builder();
        if let Some(path) = resolve_config_path() {
            builder = builder.add_source(::config::File::from(path).required(false));
        }

        let settings: Settings = builder
            .add_source(
                ::config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<()> {
        let audible = &self.audible;
        if audible.jobs == 0 {
            return Err(Error::InvalidConfig("audible.jobs must be >= 1".into()));
        }
        for (key, tool) in [("audible.cli", &audible.cli), ("audible.decoder", &audible.decoder)] {
            if tool.trim().is_empty() {
                return Err(Error::InvalidConfig(format!("{key} must not be empty")));
            }
        }
        Ok(())
    }
}

/// `KAUDIOBOOKS_CONFIG_PATH` if set, otherwise the XDG location.
pub fn resolve_config_path() -> Option<PathBuf> {
    env::var_os("KAUDIOBOOKS_CONFIG_PATH")
        .map(PathBuf::from)
        .or_else(default_config_path)
}

/// `$XDG_CONFIG_HOME/kaudiobooks/config.toml`, or `~/.config/kaudiobooks/config.toml`.
pub fn default_config_path() -> Option<PathBuf> {
    env::var_os("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .or_else(|| env::var_os("HOME").map(|home| PathBuf::from(home).join(".config")))
        .map(|dir| dir.join(APP_DIR).join("config.toml"))
}
