use crate::{
    error::ApiError,
    models::{MovieResult, SearchRequest, SearchResponse},
    services::{query_expander::theme_keywords, SearchOutcome, SearchService},
};
use actix_web::{
    web::{self, Json},
    HttpResponse,
};
use log::info;

pub fn search_config(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/search").route(web::post().to(search_movies)));
}

/// Find movies matching a free-text description.
///
/// Falls back to popular movies, flagged with `fallback` and a `notice`, when
/// nothing matches directly.
pub async fn search_movies(
    request: Json<SearchRequest>,
    search_service: web::Data<SearchService>,
) -> Result<HttpResponse, ApiError> {
    let query = request.query.trim();

    if query.is_empty() {
        return Err(ApiError::InvalidInput("Please enter a movie description".to_string()));
    }

    info!("Search request: '{}'", query);
    let outcome = search_service.search_with_fallback(query).await?;

    let response = match outcome {
        SearchOutcome::Matches(ranked) => SearchResponse {
            query: query.to_string(),
            results: ranked.into_iter().map(MovieResult::from).collect(),
            fallback: false,
            notice: None,
            expansions: theme_keywords(query),
        },
        SearchOutcome::Fallback { movies, notice } => SearchResponse {
            query: query.to_string(),
            results: movies.into_iter().map(MovieResult::from).collect(),
            fallback: true,
            notice: Some(notice),
            expansions: theme_keywords(query),
        },
    };

    Ok(HttpResponse::Ok().json(response))
}
