use crate::{error::Result, services::SearchService};
use actix_web::{get, web, HttpResponse};

#[get("/movies/{id}")]
pub async fn movie_details(
    path: web::Path<u64>,
    search_service: web::Data<SearchService>,
) -> Result<HttpResponse> {
    let details = search_service.movie_details(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(details))
}
