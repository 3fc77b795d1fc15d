use crate::{
    config::Config,
    error::{ApiError, Result},
    models::{Movie, MovieDetails, ScoredMovie},
    services::{
        provider::MovieProvider,
        query_expander::ExpandedQuery,
        ranking::{dedup_movies, rank_movies},
    },
};
use futures::stream::{self, StreamExt};
use std::sync::Arc;
use tracing::{debug, error, info, warn};

const NO_MATCHES_NOTICE: &str = "No movies found matching your description. Try using different keywords, character names, or plot details.";
const SEARCH_FAILED_NOTICE: &str =
    "Search failed. Please check your internet connection and try again.";
const POPULAR_SUFFIX: &str = "Displaying popular movies instead.";

#[derive(Debug, Clone)]
pub struct SearchSettings {
    /// `original_language` every returned movie must carry
    pub content_language: String,
    pub max_results: usize,
    /// How many popular movies to show when nothing matched
    pub fallback_limit: usize,
    pub max_concurrent_requests: usize,
    pub min_relevance_score: Option<f64>,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self::from(&Config::default())
    }
}

impl From<&Config> for SearchSettings {
    fn from(config: &Config) -> Self {
        Self {
            content_language: config.content_language.clone(),
            max_results: config.max_results,
            fallback_limit: config.fallback_limit,
            max_concurrent_requests: config.max_concurrent_requests.max(1),
            min_relevance_score: config.min_relevance_score,
        }
    }
}

/// Result of a search that degrades to popular movies instead of failing.
#[derive(Debug, Clone)]
pub enum SearchOutcome {
    Matches(Vec<ScoredMovie>),
    /// Nothing matched directly; `movies` may be empty if the fallback also failed.
    Fallback { movies: Vec<Movie>, notice: String },
}

#[derive(Clone)]
pub struct SearchService {
    provider: Arc<dyn MovieProvider>,
    settings: SearchSettings,
}

impl SearchService {
    pub fn new(provider: Arc<dyn MovieProvider>, settings: SearchSettings) -> Self {
        Self { provider, settings }
    }

    pub fn settings(&self) -> &SearchSettings {
        &self.settings
    }

    /// Expand `query`, fan out to the provider, merge and rank.
    ///
    /// Returns at most `max_results` movies, best first. Fails with
    /// `InvalidInput` for a blank query, `ConfigurationError` when the provider
    /// rejects the credential, and `NetworkError` only when the original query
    /// failed and nothing else produced a result.
    pub async fn search(&self, query: &str) -> Result<Vec<ScoredMovie>> {
        let trimmed_query = query.trim();
        if trimmed_query.is_empty() {
            return Err(ApiError::InvalidInput("Query cannot be empty".into()));
        }

        info!("Starting search for '{}'", trimmed_query);

        let expanded = ExpandedQuery::from_query(trimmed_query);
        let plan = expanded.query_plan();
        let Some((original, fan_out)) = plan.split_first() else {
            return Ok(Vec::new());
        };

        let mut original_failure = None;
        let mut candidates = match self.fetch_candidates(&original.text).await {
            Ok(movies) => movies,
            Err(e) if e.is_configuration() => {
                error!("Provider rejected credentials: {}", e);
                return Err(e);
            }
            Err(e) => {
                warn!("Direct search failed for '{}': {}", original.text, e);
                original_failure = Some(match e {
                    ApiError::NetworkError(_) => e,
                    other => ApiError::NetworkError(other.to_string()),
                });
                Vec::new()
            }
        };

        debug!("Running {} expanded queries", fan_out.len());
        let expanded_results: Vec<Vec<Movie>> = stream::iter(fan_out)
            .map(|planned| self.execute_query(&planned.text))
            .buffered(self.settings.max_concurrent_requests.max(1))
            .collect()
            .await;
        candidates.extend(expanded_results.into_iter().flatten());

        let total_candidates = candidates.len();
        let unique = dedup_movies(candidates);
        debug!(
            "Merged {} candidates into {} unique movies",
            total_candidates,
            unique.len()
        );

        let mut ranked = rank_movies(unique, &expanded.original_query);
        if let Some(min_score) = self.settings.min_relevance_score {
            ranked.retain(|entry| entry.relevance_score >= min_score);
        }
        ranked.truncate(self.settings.max_results);

        if ranked.is_empty() {
            if let Some(failure) = original_failure {
                return Err(failure);
            }
        }

        info!(
            "Returning {} ranked results for '{}'. First movie: {:?}",
            ranked.len(),
            trimmed_query,
            ranked.first().map(|entry| entry.movie.title.as_str())
        );

        Ok(ranked)
    }

    /// Like [`search`](Self::search), but shows popular movies when nothing matched.
    ///
    /// Only a blank query or a credential problem is returned as an error.
    pub async fn search_with_fallback(&self, query: &str) -> Result<SearchOutcome> {
        let base_notice = match self.search(query).await {
            Ok(ranked) if !ranked.is_empty() => return Ok(SearchOutcome::Matches(ranked)),
            Ok(_) => NO_MATCHES_NOTICE,
            Err(e @ ApiError::NetworkError(_)) => {
                warn!("Search failed, falling back to popular movies: {}", e);
                SEARCH_FAILED_NOTICE
            }
            Err(e) => return Err(e),
        };

        let movies = match self.fallback_list().await {
            Ok(mut movies) => {
                movies.truncate(self.settings.fallback_limit);
                movies
            }
            Err(e) if e.is_configuration() => return Err(e),
            Err(e) => {
                warn!("Popular movies fallback failed: {}", e);
                Vec::new()
            }
        };

        let notice = if movies.is_empty() {
            base_notice.to_string()
        } else {
            format!("{} {}", base_notice, POPULAR_SUFFIX)
        };

        Ok(SearchOutcome::Fallback { movies, notice })
    }

    /// Popular movies with a poster and an overview in the configured language.
    pub async fn fallback_list(&self) -> Result<Vec<Movie>> {
        info!("Fetching popular movies");
        let page = self.provider.popular_movies().await?;
        let total = page.results.len();

        let movies: Vec<Movie> = page
            .results
            .into_iter()
            .filter(|movie| {
                movie.poster_path.is_some()
                    && !movie.overview.trim().is_empty()
                    && movie.original_language == self.settings.content_language
            })
            .collect();

        debug!(
            "Popular movies: {} received, {} kept after filtering",
            total,
            movies.len()
        );
        Ok(movies)
    }

    /// Check once that the provider accepts our credential.
    pub async fn verify_provider(&self) -> Result<()> {
        self.fallback_list().await.map(|_| ())
    }

    pub async fn movie_details(&self, id: u64) -> Result<MovieDetails> {
        debug!("Fetching details for movie {}", id);
        self.provider.movie_details(id).await
    }

    /// One fan-out query; any failure counts as no results.
    async fn execute_query(&self, query: &str) -> Vec<Movie> {
        match self.fetch_candidates(query).await {
            Ok(movies) => movies,
            Err(e) => {
                warn!("Expanded search failed for '{}': {}", query, e);
                Vec::new()
            }
        }
    }

    async fn fetch_candidates(&self, query: &str) -> Result<Vec<Movie>> {
        let page = self.provider.search_movies(query).await?;
        let received = page.results.len();

        let movies: Vec<Movie> = page
            .results
            .into_iter()
            .filter(|movie| {
                movie.has_display_text()
                    && movie.original_language == self.settings.content_language
            })
            .collect();

        debug!(
            "'{}': {} received, {} kept after '{}' language filter",
            query,
            received,
            movies.len(),
            self.settings.content_language
        );
        Ok(movies)
    }
}
