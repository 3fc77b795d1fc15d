use crate::{error::Result, models::PopularResponse, services::SearchService};
use actix_web::{get, web, HttpResponse};

/// Popular movies, also used by clients to check the provider is reachable.
#[get("/popular")]
pub async fn popular_movies(search_service: web::Data<SearchService>) -> Result<HttpResponse> {
    let results = search_service.fallback_list().await?;
    Ok(HttpResponse::Ok().json(PopularResponse { results }))
}
