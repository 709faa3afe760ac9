//! Services module
//!
//! Este módulo contiene los servicios de autenticación: emisión y
//! validación de JWT y la puerta de acceso que resuelve el empleado.

pub mod auth_service;
pub mod jwt_service;

pub use auth_service::{AuthGate, AuthService};
pub use jwt_service::{JwtConfig, JwtService};
