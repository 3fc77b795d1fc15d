use find_a_movie_api::{app::Application, config::Config, error::Result};
use log::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const DEFAULT_LOG_FILTER: &str = "find_a_movie_api=info,actix_web=info";

#[actix_web::main]
async fn main() -> Result<()> {
    // RUST_LOG may come from .env
    dotenv::dotenv().ok();

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::load()?;
    info!(
        "Configuration loaded: port={}, content_language={}, max_results={}",
        config.port, config.content_language, config.max_results
    );

    Application::new(&config).run().await
}
