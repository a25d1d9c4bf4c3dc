use crate::weather::DEFAULT_BASE_URL;
use std::{env, path::PathBuf};

const DEFAULT_PORT: u16 = 8080;

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub port: u16,
    pub weather_url: String,
    pub export_dir: Option<PathBuf>,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from any key lookup; unset or blank values fall back to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let value = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let port = value("PORT")
            .and_then(|value| value.trim().parse::<u16>().ok())
            .unwrap_or(DEFAULT_PORT);
        let weather_url = value("WEATHER_API_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let export_dir = value("TRACKER_EXPORT_DIR").map(PathBuf::from);

        Self {
            port,
            weather_url,
            export_dir,
        }
    }
}
