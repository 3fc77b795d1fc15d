//! Boundary to the remote movie catalog.

use async_trait::async_trait;

use crate::error::Result;
use crate::models::{MovieDetails, SearchPage};

/// A remote movie catalog that can be searched by keyword.
///
/// Implementations report a rejected or missing credential as
/// [`ApiError::ConfigurationError`](crate::error::ApiError::ConfigurationError)
/// and every other failure as
/// [`ApiError::NetworkError`](crate::error::ApiError::NetworkError).
#[async_trait]
pub trait MovieProvider: Send + Sync {
    /// First page of keyword search results for `query`.
    async fn search_movies(&self, query: &str) -> Result<SearchPage>;

    /// First page of the catalog's currently popular movies.
    async fn popular_movies(&self) -> Result<SearchPage>;

    /// Detail record for a single movie.
    async fn movie_details(&self, id: u64) -> Result<MovieDetails>;
}
