use crate::error::{LocateError, Result};
use crate::platform;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE_NAME: &str = "jvmlocate.toml";

/// Environment variables recognized when seeding candidate search roots.
/// `ProgramFiles` covers the 64-bit JDKs (or 32-bit on a 32-bit OS),
/// `ProgramFiles(x86)` the 32-bit JDKs on a 64-bit OS.
pub const RECOGNIZED_ENV_KEYS: [&str; 2] = ["ProgramFiles", "ProgramFiles(x86)"];

/// Explicit configuration handed to a finder at construction.
///
/// Finders never read the process environment themselves; whoever builds the
/// config decides which variables are visible.
#[derive(Debug, Clone)]
pub struct LocateConfig {
    /// Snapshot of the recognized environment variables.
    pub env: BTreeMap<String, String>,

    /// Command used to translate compatibility-layer paths to native ones.
    pub translator_command: String,

    /// Additional candidate search roots beyond the environment-derived ones.
    pub extra_search_roots: Vec<PathBuf>,
}

impl Default for LocateConfig {
    fn default() -> Self {
        Self {
            env: BTreeMap::new(),
            translator_command: platform::TRANSLATOR_COMMAND.to_string(),
            extra_search_roots: Vec::new(),
        }
    }
}

#[derive(Debug, Deserialize, Default)]
struct ConfigFile {
    #[serde(default)]
    translator_command: Option<String>,

    #[serde(default)]
    extra_search_roots: Vec<PathBuf>,
}

impl LocateConfig {
    /// Build a config from an explicit environment mapping. Keys outside
    /// `RECOGNIZED_ENV_KEYS` are dropped.
    pub fn with_env(vars: BTreeMap<String, String>) -> Self {
        let env = vars
            .into_iter()
            .filter(|(key, _)| RECOGNIZED_ENV_KEYS.contains(&key.as_str()))
            .collect();
        Self {
            env,
            ..Self::default()
        }
    }

    /// Snapshot the recognized variables from the process environment.
    pub fn from_env() -> Self {
        let mut vars = BTreeMap::new();
        for key in RECOGNIZED_ENV_KEYS {
            if let Ok(value) = env::var(key) {
                vars.insert(key.to_string(), value);
            }
        }
        Self::with_env(vars)
    }

    /// Snapshot the environment and apply `jvmlocate.toml` overrides from
    /// `dir`, if the file exists.
    pub fn load(dir: &Path) -> Result<Self> {
        let mut config = Self::from_env();
        let config_path = dir.join(CONFIG_FILE_NAME);

        if !config_path.exists() {
            log::debug!("Config file not found at {config_path:?}, using defaults");
            return Ok(config);
        }

        let contents = fs::read_to_string(&config_path)?;
        let file: ConfigFile = toml::from_str(&contents).map_err(|e| {
            LocateError::InvalidConfig(format!("Failed to parse {CONFIG_FILE_NAME}: {e}"))
        })?;

        if let Some(command) = file.translator_command {
            config.translator_command = command;
        }
        config.extra_search_roots = file.extra_search_roots;

        log::debug!("Loaded config from {config_path:?}");
        Ok(config)
    }
}
