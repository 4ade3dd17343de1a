use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// How yeast elements are mapped to `Recipe::yeasts`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum YeastMode {
    /// Import a single yeast, the first in document order
    #[default]
    First,
    /// Import every yeast in document order
    All,
}

/// Options that change what the import produces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ImportOptions {
    pub yeast_mode: YeastMode,
}

/// Configuration read from `beerxml.toml` and the environment
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ImportConfig {
    /// Yeast handling, "first" or "all"
    #[serde(default)]
    pub yeast_mode: YeastMode,
    /// Pretty-print JSON output
    #[serde(default = "default_pretty")]
    pub pretty: bool,
}

impl Default for ImportConfig {
    fn default() -> Self {
        Self {
            yeast_mode: YeastMode::default(),
            pretty: default_pretty(),
        }
    }
}

fn default_pretty() -> bool {
    true
}

impl ImportConfig {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded with the following priority (highest to lowest):
    /// 1. Environment variables with BEERXML__ prefix
    /// 2. beerxml.toml file in current directory
    /// 3. Default values
    pub fn load() -> Result<Self, ConfigError> {
        load_config()
    }

    pub fn options(&self) -> ImportOptions {
        ImportOptions {
            yeast_mode: self.yeast_mode,
        }
    }
}

/// Load configuration from file and environment variables
///
/// Environment variable format: BEERXML__YEAST_MODE=all
pub fn load_config() -> Result<ImportConfig, ConfigError> {
    let settings = Config::builder()
        // Optional config file (can be missing)
        .add_source(File::with_name("beerxml").required(false))
        .add_source(
            Environment::with_prefix("BEERXML")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    settings.try_deserialize()
}
