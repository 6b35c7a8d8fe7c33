//! HTTP server core implementation
//!
//! This module provides the HttpServer struct and its core methods.

use crate::config::{Config, ServerConfig};
use crate::server::middleware::{ActorResolver, HeaderActorResolver, RouteGuardMiddleware};
use crate::server::routes;
use crate::server::state::AppState;
use crate::utils::error::{GuardError, Result};
use actix_web::{
    App, HttpServer as ActixHttpServer,
    middleware::{DefaultHeaders, Logger},
    web,
};
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

/// HTTP server
pub struct HttpServer {
    /// Server configuration
    config: ServerConfig,
    /// Application state
    state: AppState,
    /// Actor source shared by every worker
    resolver: Arc<dyn ActorResolver>,
}

impl HttpServer {
    /// Create a new HTTP server
    pub fn new(config: &Config) -> Result<Self> {
        info!("Creating HTTP server");

        config.validate()?;
        let resolver: Arc<dyn ActorResolver> =
            Arc::new(HeaderActorResolver::new(&config.guard.actor_header)?);

        Ok(Self {
            config: config.server.clone(),
            state: AppState::new(config.clone()),
            resolver,
        })
    }

    /// Create the Actix-web application
    pub fn create_app(
        state: web::Data<AppState>,
        resolver: Arc<dyn ActorResolver>,
    ) -> App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse<impl actix_web::body::MessageBody>,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        let route_guard = RouteGuardMiddleware::new(&state.config.guard);

        App::new()
            .app_data(state)
            .app_data(web::Data::from(resolver))
            .wrap(route_guard)
            .wrap(Logger::default())
            .wrap(DefaultHeaders::new().add(("Server", "role-guard")))
            .configure(routes::configure_routes)
    }

    /// Start the HTTP server
    pub async fn start(self) -> Result<()> {
        let bind_addr = self.config.address();

        info!("Starting HTTP server on {}", bind_addr);

        let state = web::Data::new(self.state);
        let resolver = self.resolver;

        let mut server = ActixHttpServer::new(move || {
            Self::create_app(state.clone(), Arc::clone(&resolver))
        })
        .keep_alive(Duration::from_secs(self.config.timeout));

        if let Some(workers) = self.config.workers {
            server = server.workers(workers);
        }

        let server = server
            .bind(&bind_addr)
            .map_err(|e| GuardError::Config(format!("Failed to bind {}: {}", bind_addr, e)))?
            .run();

        info!("HTTP server listening on {}", bind_addr);

        server.await?;

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
