use actix_web::{web, Scope};

use crate::handlers::{health_check, movie_details, popular_movies, search_config};

/// Configure all routes for the API
pub fn api_routes() -> Scope {
    web::scope("/api")
        .service(health_check)
        .service(popular_movies)
        .service(movie_details)
        .configure(search_config)
}
