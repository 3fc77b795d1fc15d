use crate::models::{Movie, ScoredMovie};
use std::collections::HashSet;
use tracing::debug;

const EXACT_TITLE_BOOST: f64 = 200.0;
const TITLE_PHRASE_BOOST: f64 = 100.0;
const OVERVIEW_PHRASE_BOOST: f64 = 150.0;
const TITLE_TOKEN_BOOST: f64 = 30.0;
const OVERVIEW_TOKEN_BOOST: f64 = 25.0;
const POPULARITY_WEIGHT: f64 = 3.0;
const RATING_WEIGHT: f64 = 3.0;
const RECENCY_BASE_YEAR: i32 = 2000;
const RECENCY_WEIGHT: f64 = 0.2;
const MIN_TOKEN_CHARS: usize = 3;

/// Keep the first occurrence of every movie id, preserving order.
pub fn dedup_movies(movies: Vec<Movie>) -> Vec<Movie> {
    let mut seen = HashSet::with_capacity(movies.len());
    movies
        .into_iter()
        .filter(|movie| seen.insert(movie.id))
        .collect()
}

/// Lexical match against the original query layered over popularity, rating and recency.
///
/// `query_lower` must already be lower-cased.
pub fn relevance_score(movie: &Movie, query_lower: &str) -> f64 {
    let title = movie.title.to_lowercase();
    let overview = movie.overview.to_lowercase();
    let mut score = 0.0;

    if title == query_lower {
        score += EXACT_TITLE_BOOST;
    }
    if title.contains(query_lower) {
        score += TITLE_PHRASE_BOOST;
    }
    if overview.contains(query_lower) {
        score += OVERVIEW_PHRASE_BOOST;
    }

    for token in query_lower
        .split_whitespace()
        .filter(|token| token.chars().count() >= MIN_TOKEN_CHARS)
    {
        if title.contains(token) {
            score += TITLE_TOKEN_BOOST;
        }
        if overview.contains(token) {
            score += OVERVIEW_TOKEN_BOOST;
        }
    }

    score += (movie.popularity + 1.0).ln() * POPULARITY_WEIGHT;
    score += movie.vote_average * RATING_WEIGHT;

    if let Some(year) = movie.release_year().filter(|y| *y > RECENCY_BASE_YEAR) {
        score += f64::from(year - RECENCY_BASE_YEAR) * RECENCY_WEIGHT;
    }

    score
}

/// Score every movie against `original_query` and sort best first.
///
/// The sort is stable, so equal scores keep their merge order.
pub fn rank_movies(movies: Vec<Movie>, original_query: &str) -> Vec<ScoredMovie> {
    let query_lower = original_query.to_lowercase();

    let mut scored: Vec<ScoredMovie> = movies
        .into_iter()
        .map(|movie| {
            let relevance_score = relevance_score(&movie, &query_lower);
            ScoredMovie {
                movie,
                relevance_score,
            }
        })
        .collect();

    scored.sort_by(|a, b| {
        b.relevance_score
            .partial_cmp(&a.relevance_score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    if tracing::enabled!(tracing::Level::DEBUG) {
        for (i, entry) in scored.iter().take(5).enumerate() {
            debug!(
                "RANK #{}: '{}' ({}) score={:.2}",
                i + 1,
                entry.movie.title,
                entry.movie.id,
                entry.relevance_score
            );
        }
    }

    scored
}
