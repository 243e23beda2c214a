use crate::countries;
use crate::search::{SearchQuery, ALL, PROPERTY_TYPES};
use anyhow::{bail, Result};
use dotenvy::dotenv;
use std::env;
use std::path::PathBuf;

const DEFAULT_DATA_DIR: &str = "./gethome_data";

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory holding the persisted listings, profile and auth flag
    pub data_dir: PathBuf,
    /// Query run at startup
    pub query: SearchQuery,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        Self::from_vars(|key| env::var(key).ok())
    }

    fn from_vars<F>(var: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let data_dir = var("GETHOME_DATA_DIR")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_DATA_DIR.to_string());

        let country = var("GETHOME_COUNTRY").unwrap_or_else(|| ALL.to_string());
        if country != ALL && countries::find_by_name(&country).is_none() {
            bail!("GETHOME_COUNTRY must be \"{}\" or a known country name, got {:?}", ALL, country);
        }

        let kind = var("GETHOME_TYPE").unwrap_or_else(|| ALL.to_string());
        if !PROPERTY_TYPES.contains(&kind.as_str()) {
            bail!("GETHOME_TYPE must be one of {:?}, got {:?}", PROPERTY_TYPES, kind);
        }

        let query = SearchQuery::text(var("GETHOME_SEARCH").unwrap_or_default())
            .with_country(country)
            .with_kind(kind);

        Ok(Self {
            data_dir: PathBuf::from(data_dir),
            query,
        })
    }
}
