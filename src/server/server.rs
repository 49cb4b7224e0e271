//! HTTP server core implementation

use crate::config::{Config, ServerConfig};
use crate::core::gateway::ChatGateway;
use crate::core::providers::AzureClient;
use crate::core::traits::ChatProvider;
use crate::server::middleware::RequestIdMiddleware;
use crate::server::routes;
use crate::server::state::AppState;
use crate::utils::error::{GatewayError, Result};
use actix_web::{App, HttpServer as ActixHttpServer, middleware::DefaultHeaders, web};
use std::sync::Arc;
use tracing::{debug, info};
use tracing_actix_web::TracingLogger;

/// HTTP server
pub struct HttpServer {
    /// Server configuration
    config: ServerConfig,
    /// Application state
    state: AppState,
}

impl HttpServer {
    /// Create a new HTTP server backed by Azure OpenAI
    ///
    /// Fails when the provider settings are incomplete.
    pub fn new(config: &Config) -> Result<Self> {
        info!("Creating HTTP server");

        let provider = AzureClient::new(&config.provider)?;
        info!(deployment = %provider.deployment(), "Azure OpenAI client ready");

        Ok(Self::with_provider(config, Arc::new(provider)))
    }

    /// Create a server around an already constructed provider
    pub fn with_provider(config: &Config, provider: Arc<dyn ChatProvider>) -> Self {
        let gateway = ChatGateway::from_config(config, provider);
        Self {
            config: config.server.clone(),
            state: AppState::new(config.clone(), gateway),
        }
    }

    /// Create the Actix-web application
    pub fn create_app(
        state: web::Data<AppState>,
    ) -> App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse<impl actix_web::body::MessageBody>,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        debug!("Setting up routes and middleware");

        let json_config = routes::json_config(state.config.server.max_body_size);

        App::new()
            .app_data(state)
            .app_data(json_config)
            .wrap(DefaultHeaders::new().add(("Server", "chat-gateway")))
            .wrap(RequestIdMiddleware)
            .wrap(TracingLogger::default())
            .configure(routes::configure_routes)
    }

    /// Start the HTTP server
    ///
    /// Runs until actix receives a shutdown signal. The idle sweeper, when
    /// enabled, lives exactly as long as the server.
    pub async fn start(self) -> Result<()> {
        let bind_addr = self.config.address();
        let port = self.config.port;
        let workers = self.config.worker_count();

        info!(
            "Starting HTTP server on {} with {} workers",
            bind_addr, workers
        );

        let sweep_interval = self.state.config.rate_limit.sweep_interval();
        let admission = self.state.gateway.admission().clone();
        let state = web::Data::new(self.state);

        let server = ActixHttpServer::new(move || Self::create_app(state.clone()))
            .workers(workers)
            .bind(&bind_addr)
            .map_err(|e| Self::format_bind_error(e, &bind_addr, port))?
            .run();

        info!("HTTP server listening on {}", bind_addr);

        let sweeper = sweep_interval.map(|period| {
            info!(period_secs = period.as_secs(), "Starting idle bucket sweeper");
            admission.spawn_sweeper(period)
        });

        let outcome = server
            .await
            .map_err(|e| GatewayError::internal(format!("Server error: {}", e)));

        if let Some(handle) = sweeper {
            handle.abort();
        }

        outcome?;
        info!("HTTP server stopped");
        Ok(())
    }

    /// Get server configuration
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Get application state
    pub fn state(&self) -> &AppState {
        &self.state
    }
}
