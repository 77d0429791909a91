use config::{Config, File};
use serde::Deserialize;

use crate::error::Result;
use crate::store::hotel::DEFAULT_DATA_FILE;

#[derive(Debug, Deserialize)]
pub struct AppConfig {
    pub data_file: Option<String>,
    pub log_level: Option<String>,
}

pub fn load_config() -> Result<AppConfig> {
    let mut config: AppConfig = Config::builder()
        .add_source(File::with_name("config.toml").required(false))
        .build()?
        .try_deserialize()?;

    set_defaults(&mut config);

    Ok(config)
}

pub fn set_defaults(config: &mut AppConfig) {
    if config.data_file.is_none() {
        config.data_file = Some(DEFAULT_DATA_FILE.to_string());
    }
    if config.log_level.is_none() {
        config.log_level = Some("warn".to_string());
    }
}

impl AppConfig {
    pub fn data_file(&self) -> &str {
        self.data_file.as_deref().unwrap_or(DEFAULT_DATA_FILE)
    }

    pub fn log_level(&self) -> &str {
        self.log_level.as_deref().unwrap_or("warn")
    }
}
