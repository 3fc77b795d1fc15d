use crate::{
    config::Config,
    error::{ApiError, Result},
    models::{MovieDetails, SearchPage},
    services::provider::MovieProvider,
};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, error};

const PLACEHOLDER_API_KEY: &str = "YOUR_TMDB_API_KEY_HERE";
const MAX_ERROR_BODY_CHARS: usize = 100;

#[derive(Debug, Clone)]
pub struct TmdbClient {
    client: Client,
    base_url: String,
    api_key: String,
    language: String,
    include_adult: bool,
}

impl TmdbClient {
    pub fn new(config: &Config) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.tmdb_timeout_seconds))
            .pool_max_idle_per_host(10)
            .build()
            .map_err(|e| ApiError::InternalError(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: config.tmdb_base_url.trim_end_matches('/').to_string(),
            api_key: config.tmdb_api_key.trim().to_string(),
            language: config.tmdb_language.clone(),
            include_adult: config.tmdb_include_adult,
        })
    }

    /// Fails without touching the network when no usable API key is set.
    fn ensure_configured(&self) -> Result<()> {
        if self.api_key.is_empty() || self.api_key == PLACEHOLDER_API_KEY {
            error!("TMDb API key is not configured");
            return Err(ApiError::ConfigurationError(
                "TMDb API key is not configured. Set APP_TMDB_API_KEY.".to_string(),
            ));
        }
        Ok(())
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str, params: &[(&str, String)]) -> Result<T> {
        self.ensure_configured()?;

        let url = format!("{}{}", self.base_url, path);
        debug!("Fetching {} with {:?}", url, params);

        let response = self
            .client
            .get(&url)
            .query(&[("api_key", self.api_key.as_str())])
            .query(params)
            .send()
            .await?;

        debug!("Response from {}: {}", path, response.status());

        match response.status() {
            StatusCode::OK => Ok(response.json().await?),
            StatusCode::UNAUTHORIZED => {
                error!("TMDb rejected the API key for {}", path);
                Err(ApiError::ConfigurationError(
                    "Invalid TMDb API key. Check APP_TMDB_API_KEY.".to_string(),
                ))
            }
            StatusCode::NOT_FOUND => Err(ApiError::NotFound(format!("TMDb resource {}", path))),
            status => {
                let body = response.text().await.unwrap_or_default();
                let excerpt: String = body.chars().take(MAX_ERROR_BODY_CHARS).collect();
                error!("TMDb responded {} for {}: {}", status, path, excerpt);
                Err(ApiError::NetworkError(format!(
                    "TMDb API error: {} - {}",
                    status, excerpt
                )))
            }
        }
    }
}

#[async_trait]
impl MovieProvider for TmdbClient {
    async fn search_movies(&self, query: &str) -> Result<SearchPage> {
        let params = [
            ("query", query.to_string()),
            ("include_adult", self.include_adult.to_string()),
            ("language", self.language.clone()),
            ("page", "1".to_string()),
        ];
        self.get_json("/search/movie", &params).await
    }

    async fn popular_movies(&self) -> Result<SearchPage> {
        let params = [
            ("language", self.language.clone()),
            ("page", "1".to_string()),
        ];
        self.get_json("/movie/popular", &params).await
    }

    async fn movie_details(&self, id: u64) -> Result<MovieDetails> {
        let params = [("language", self.language.clone())];
        self.get_json(&format!("/movie/{}", id), &params).await
    }
}
