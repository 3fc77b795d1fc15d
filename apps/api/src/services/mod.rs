pub mod provider;
pub mod query_expander;
pub mod ranking;
pub mod search;
pub mod templates;
pub mod tmdb;

// Re-export public types
pub use provider::MovieProvider;
pub use query_expander::{ExpandedQuery, PlannedQuery, QuerySource};
pub use search::{SearchOutcome, SearchService, SearchSettings};
pub use tmdb::TmdbClient;
