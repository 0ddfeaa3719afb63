// Demo driver configuration, read from TOML.
//
//   color = true          # colored narration headings
//   log_filter = "warn"   # tracing filter used when RUST_LOG is unset
//   transcript = "stdout" # or "quiet"

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::ConfigError;
use crate::transcript::TranscriptMode;

pub const CONFIG_ENV: &str = "COMPUTER_DEMO_CONFIG";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DemoConfig {
    pub color: bool,
    pub log_filter: String,
    pub transcript: TranscriptMode,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            color: true,
            log_filter: "warn".to_string(),
            transcript: TranscriptMode::Stdout,
        }
    }
}

impl DemoConfig {
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|err| ConfigError::io(path, err))?;
        Self::parse(&content)
    }

    /// Resolves the config from `--config <path>`, then `COMPUTER_DEMO_CONFIG`,
    /// then defaults. `NO_COLOR` turns color off whatever the file says.
    pub fn load(args: &[String]) -> Result<Self, ConfigError> {
        let from_args = match args.iter().position(|arg| arg == "--config") {
            Some(i) => Some(
                args.get(i + 1)
                    .cloned()
                    .ok_or_else(|| ConfigError::missing_value("--config"))?,
            ),
            None => None,
        };
        let path = from_args.or_else(|| std::env::var(CONFIG_ENV).ok());

        let mut config = match path {
            Some(path) => Self::from_file(Path::new(&path))?,
            None => Self::default(),
        };
        if std::env::var_os("NO_COLOR").is_some() {
            config.color = false;
        }
        Ok(config)
    }
}
