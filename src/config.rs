use std::env;
use std::path::Path;

use log::debug;

use crate::error::{Error, Result};

pub const API_KEY_VAR: &str = "API_KEY";
const DOTENV_FILE: &str = ".env";

#[derive(Debug, Clone, Default)]
pub struct Config {
    pub api_key: String,
}

impl Config {
    /// Loads `.env` from the working directory, if present, then reads the
    /// API key from the environment.
    pub fn load() -> Result<Self> {
        load_env_file(Path::new(DOTENV_FILE))?;
        Ok(Self::from_env())
    }

    /// An unset key is kept empty; the API rejects it at request time.
    pub fn from_env() -> Self {
        let api_key = env::var(API_KEY_VAR).unwrap_or_default();
        if api_key.is_empty() {
            debug!("{API_KEY_VAR} is not set");
        }
        Self { api_key }
    }
}

pub fn load_env_file(path: &Path) -> Result<()> {
    match dotenvy::from_path(path) {
        Ok(()) => {
            debug!("loaded environment from {}", path.display());
            Ok(())
        }
        Err(err) if err.not_found() => {
            debug!("no {} found, skipping", path.display());
            Ok(())
        }
        Err(err) => Err(Error::Config(err)),
    }
}
