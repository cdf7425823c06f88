use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct Settings {
    pub logging: LoggingConfig,
    #[serde(default)]
    pub feed: FeedConfig,
}

#[derive(Debug, Deserialize)]
pub struct LoggingConfig {
    pub log_dir: String,
    pub console_level: String,
    pub file_level: String,
}

#[derive(Debug, Deserialize)]
pub struct FeedConfig {
    /// Page size used by the CLI when no --limit is given
    #[serde(default = "default_page_size")]
    pub default_page_size: usize,
    #[serde(default)]
    pub newest_first: bool,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            default_page_size: default_page_size(),
            newest_first: false,
        }
    }
}

fn default_page_size() -> usize {
    20
}

pub fn load_settings_from(config_path: &str) -> Result<Settings, config::ConfigError> {
    let settings: Settings = config::Config::builder()
        .add_source(config::File::with_name(config_path))
        .build()?
        .try_deserialize()?;

    Ok(settings)
}
