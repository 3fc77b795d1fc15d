use serde::{Deserialize, Serialize};

pub use movie::{Genre, Movie, MovieDetails, ScoredMovie, SearchPage};

mod movie;

/// Request structure for a description search
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchRequest {
    /// Free-text description of the movie being looked for
    pub query: String,
}

/// One entry of a search response. Fallback entries carry no score.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MovieResult {
    #[serde(flatten)]
    pub movie: Movie,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relevance_score: Option<f64>,
}

impl From<ScoredMovie> for MovieResult {
    fn from(scored: ScoredMovie) -> Self {
        Self {
            movie: scored.movie,
            relevance_score: Some(scored.relevance_score),
        }
    }
}

impl From<Movie> for MovieResult {
    fn from(movie: Movie) -> Self {
        Self {
            movie,
            relevance_score: None,
        }
    }
}

/// Response structure for a description search
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
    pub query: String,
    pub results: Vec<MovieResult>,
    /// True when no direct match was found and popular movies are shown instead
    pub fallback: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notice: Option<String>,
    /// Theme keywords the description was expanded with
    pub expansions: Vec<String>,
}

/// Response structure for the popular movies list
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PopularResponse {
    pub results: Vec<Movie>,
}

/// Health check response structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    /// Current timestamp in RFC3339 format
    pub timestamp: String,
}
