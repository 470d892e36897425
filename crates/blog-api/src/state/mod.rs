//! Application state
//!
//! Holds the shared state for the Axum application including
//! the service context, token verifier, and configuration.

use std::sync::Arc;

use blog_common::{AppConfig, TokenVerifier};
use blog_db::PgPool;
use blog_service::services::ServiceContext;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    /// Service context containing all dependencies
    service_context: Arc<ServiceContext>,
    /// Access-token verifier for the identity-provider boundary
    token_verifier: Arc<TokenVerifier>,
    /// Database pool, kept for readiness probing
    pool: PgPool,
    /// Application configuration
    config: Arc<AppConfig>,
}

impl AppState {
    /// Create a new AppState
    pub fn new(
        service_context: ServiceContext,
        token_verifier: TokenVerifier,
        pool: PgPool,
        config: AppConfig,
    ) -> Self {
        Self {
            service_context: Arc::new(service_context),
            token_verifier: Arc::new(token_verifier),
            pool,
            config: Arc::new(config),
        }
    }

    /// Get the service context
    pub fn service_context(&self) -> &ServiceContext {
        &self.service_context
    }

    /// Get the token verifier
    pub fn token_verifier(&self) -> &TokenVerifier {
        &self.token_verifier
    }

    /// Get the database pool
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Get the application configuration
    pub fn config(&self) -> &AppConfig {
        &self.config
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("service_context", &"ServiceContext")
            .field("config", &"AppConfig")
            .finish()
    }
}
