use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::employee::Employee;

/// Claims del JWT
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JwtClaims {
    pub sub: String, // employee id
    pub username: String,
    pub exp: usize, // expiration timestamp
    pub iat: usize, // issued at timestamp
}

/// Request de registro: crea un empleado `Working`
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SignupRequest {
    #[validate(length(min = 2, max = 100))]
    pub name: String,

    #[validate(length(min = 3, max = 50))]
    pub username: String,

    #[validate(email)]
    pub email: String,

    #[validate(length(min = 6, max = 100))]
    pub password: String,

    #[validate(length(min = 2, max = 50))]
    pub position: Option<String>,
}

/// Request de login
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1))]
    pub username: String,

    #[validate(length(min = 1))]
    pub password: String,
}

/// Response de login / signup
#[derive(Debug, Clone, Serialize)]
pub struct AuthResponse {
    pub token: String,
    pub token_type: String,
    pub expires_in: u64,
    pub employee: Employee,
}

/// Empleado autenticado que el middleware inyecta en las requests
#[derive(Debug, Clone)]
pub struct AuthenticatedEmployee {
    pub employee: Employee,
}
