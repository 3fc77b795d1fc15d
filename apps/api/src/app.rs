use crate::{
    config::Config,
    error::Result,
    routes::api_routes,
    services::{SearchService, SearchSettings, TmdbClient},
};
use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use anyhow::Context;
use log::{info, warn};
use std::net::TcpListener;
use std::sync::Arc;

pub struct Application {
    port: u16,
    host: String,
    config: Config,
}

impl Application {
    pub fn new(config: &Config) -> Self {
        Self {
            port: config.port,
            host: config.host.clone(),
            config: config.clone(),
        }
    }

    /// Bind on all interfaces at the configured port and serve until shutdown.
    pub async fn run(&self) -> Result<()> {
        let listener = TcpListener::bind(("0.0.0.0", self.port))?;
        info!("Starting server at http://{}:{}", self.host, self.port);

        self.run_with_listener(listener).await
    }

    /// Serve on an already bound listener, e.g. one on an ephemeral port.
    pub async fn run_with_listener(&self, listener: TcpListener) -> Result<()> {
        let search_service = web::Data::new(self.search_service().await?);

        HttpServer::new(move || {
            App::new()
                .wrap(
                    Cors::default()
                        .allow_any_origin()
                        .allow_any_method()
                        .allow_any_header(),
                )
                .wrap(Logger::default())
                .app_data(search_service.clone())
                .service(api_routes())
        })
        .listen(listener)?
        .run()
        .await?;

        Ok(())
    }

    /// Build the TMDb-backed search service and probe the API key once.
    ///
    /// A failed probe is only logged and the server still starts.
    async fn search_service(&self) -> Result<SearchService> {
        let tmdb = TmdbClient::new(&self.config).context("Failed to initialize TMDb client")?;
        let service = SearchService::new(Arc::new(tmdb), SearchSettings::from(&self.config));

        match service.verify_provider().await {
            Ok(()) => info!("TMDb API key verified"),
            Err(e) if e.is_configuration() => warn!(
                "TMDb API key is missing or invalid, searches will fail until APP_TMDB_API_KEY is set: {}",
                e
            ),
            Err(e) => warn!("TMDb unreachable during startup check: {}", e),
        }

        Ok(service)
    }
}
