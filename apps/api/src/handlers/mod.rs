pub mod health;
pub mod movies;
pub mod popular;
pub mod search;

pub use health::health_check;
pub use movies::movie_details;
pub use popular::popular_movies;
pub use search::search_config;
