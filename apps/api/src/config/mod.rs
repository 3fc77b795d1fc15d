use crate::error::Result;
use ::config::{Config as Settings, Environment};
use serde::Deserialize;

const DEFAULT_TMDB_BASE_URL: &str = "https://api.themoviedb.org/3";

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub tmdb_api_key: String,
    pub tmdb_base_url: String,
    pub tmdb_language: String,
    pub tmdb_include_adult: bool,
    pub tmdb_timeout_seconds: u64,
    /// `original_language` every returned movie must carry.
    pub content_language: String,
    pub max_results: usize,
    pub fallback_limit: usize,
    pub max_concurrent_requests: usize,
    #[serde(default)]
    pub min_relevance_score: Option<f64>,
}

impl Config {
    /// Load configuration from `APP_*` environment variables over built-in defaults.
    pub fn load() -> Result<Self> {
        dotenv::dotenv().ok();

        let settings = Settings::builder()
            .set_default("host", "127.0.0.1")?
            .set_default("port", 8080)?
            .set_default("tmdb_api_key", "")?
            .set_default("tmdb_base_url", DEFAULT_TMDB_BASE_URL)?
            .set_default("tmdb_language", "en-US")?
            .set_default("tmdb_include_adult", false)?
            .set_default("tmdb_timeout_seconds", 10)?
            .set_default("content_language", "en")?
            .set_default("max_results", 20)?
            .set_default("fallback_limit", 6)?
            .set_default("max_concurrent_requests", 8)?
            .add_source(Environment::with_prefix("APP").try_parsing(true))
            .build()?;

        Ok(settings.try_deserialize()?)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
            tmdb_api_key: String::new(),
            tmdb_base_url: DEFAULT_TMDB_BASE_URL.to_string(),
            tmdb_language: "en-US".to_string(),
            tmdb_include_adult: false,
            tmdb_timeout_seconds: 10,
            content_language: "en".to_string(),
            max_results: 20,
            fallback_limit: 6,
            max_concurrent_requests: 8,
            min_relevance_score: None,
        }
    }
}
