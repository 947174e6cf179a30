use config::{ConfigError, Environment, File};
use serde::Deserialize;

pub const DEFAULT_READ_BUFFER_SIZE: usize = 64 * 1024;

#[derive(Deserialize, Default, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct OutputConfig {
    /// BSD style lines (`Skein-512 (file) = hex`)
    pub tag: bool,
    pub uppercase: bool,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Config {
    /// number of files hashed in parallel, 0 lets rayon decide
    pub jobs: usize,
    pub read_buffer_size: usize,
    pub output: OutputConfig,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            jobs: 0,
            read_buffer_size: DEFAULT_READ_BUFFER_SIZE,
            output: OutputConfig::default(),
        }
    }
}

impl Config {
    /// Load from an optional file, then `SKEINSUM_*` environment variables.
    pub fn new(cfg_file: Option<&str>) -> Result<Self, ConfigError> {
        let mut cfg = config::Config::new();
        if let Some(f) = cfg_file {
            cfg.merge(File::with_name(f))?;
        }
        cfg.merge(Environment::with_prefix("SKEINSUM"))?;
        let mut parsed: Config = cfg.try_into()?;
        if parsed.read_buffer_size == 0 {
            parsed.read_buffer_size = DEFAULT_READ_BUFFER_SIZE;
        }
        Ok(parsed)
    }
}
