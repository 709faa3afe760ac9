//! Shared application state
//!
//! Este módulo define el estado compartido de la aplicación que se pasa
//! a través del router de Axum.

use sqlx::PgPool;
use std::sync::Arc;

use crate::config::environment::EnvironmentConfig;
use crate::services::auth_service::{AuthGate, AuthService};
use crate::services::jwt_service::JwtConfig;

#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub config: EnvironmentConfig,
    pub auth: Arc<dyn AuthGate>,
    pub auth_service: Arc<AuthService>,
}

impl AppState {
    pub fn new(pool: PgPool, config: EnvironmentConfig) -> Self {
        let auth_service = Arc::new(AuthService::new(pool.clone(), JwtConfig::from(&config)));

        Self {
            pool,
            config,
            auth: auth_service.clone(),
            auth_service,
        }
    }

    /// Sustituye la puerta de autenticación (tests, otros proveedores)
    pub fn with_auth_gate(mut self, auth: Arc<dyn AuthGate>) -> Self {
        self.auth = auth;
        self
    }
}
