use async_trait::async_trait;
use bcrypt::{hash, verify, DEFAULT_COST};
use sqlx::PgPool;

use crate::models::auth::{AuthResponse, LoginRequest, SignupRequest};
use crate::models::employee::Employee;
use crate::repositories::employee_repository::{EmployeeRepository, NewEmployee};
use crate::services::jwt_service::{JwtConfig, JwtService};
use crate::utils::errors::{internal_error, AppError, AppResult};

const DEFAULT_POSITION: &str = "Staff";
const DEFAULT_RATING: f64 = 0.0;

/// Puerta de autenticación: convierte un bearer token en el empleado
/// autenticado o falla con `Unauthorized`.
#[async_trait]
pub trait AuthGate: Send + Sync {
    async fn resolve_bearer(&self, token: &str) -> AppResult<Employee>;
}

/// Servicio de autenticación respaldado por la tabla de empleados
pub struct AuthService {
    jwt_service: JwtService,
    employees: EmployeeRepository,
}

impl AuthService {
    pub fn new(pool: PgPool, jwt_config: JwtConfig) -> Self {
        Self {
            jwt_service: JwtService::new(jwt_config),
            employees: EmployeeRepository::new(pool),
        }
    }

    /// Alta de un empleado `Working` y emisión de su token
    pub async fn signup(&self, request: &SignupRequest) -> AppResult<AuthResponse> {
        let password_hash = hash_password(&request.password)?;

        let employee = self
            .employees
            .create(NewEmployee {
                name: &request.name,
                username: &request.username,
                email: &request.email,
                password_hash: &password_hash,
                position: request.position.as_deref().unwrap_or(DEFAULT_POSITION),
                rating: DEFAULT_RATING,
            })
            .await?;

        self.issue(employee)
    }

    pub async fn login(&self, request: &LoginRequest) -> AppResult<AuthResponse> {
        let invalid = || AppError::Unauthorized("Invalid username or password".to_string());

        let employee = self
            .employees
            .find_by_username(&request.username)
            .await?
            .ok_or_else(invalid)?;

        let matches = verify(&request.password, &employee.password_hash)
            .map_err(|e| internal_error(&format!("Password verification failed: {}", e)))?;
        if !matches {
            return Err(invalid());
        }
        if !employee.is_working() {
            return Err(AppError::Unauthorized("Employee account is inactive".to_string()));
        }

        self.issue(employee)
    }

    fn issue(&self, employee: Employee) -> AppResult<AuthResponse> {
        let token = self.jwt_service.generate_access_token(&employee)?;

        Ok(AuthResponse {
            token,
            token_type: "Bearer".to_string(),
            expires_in: self.jwt_service.expires_in(),
            employee,
        })
    }
}

#[async_trait]
impl AuthGate for AuthService {
    async fn resolve_bearer(&self, token: &str) -> AppResult<Employee> {
        let employee_id = self.jwt_service.employee_id(token)?;

        let employee = self
            .employees
            .find_by_id(employee_id)
            .await?
            .ok_or_else(|| AppError::Unauthorized("Employee no longer exists".to_string()))?;

        if !employee.is_working() {
            return Err(AppError::Unauthorized("Employee account is inactive".to_string()));
        }

        Ok(employee)
    }
}

/// Hash bcrypt de una contraseña en claro
pub fn hash_password(password: &str) -> AppResult<String> {
    hash(password, DEFAULT_COST)
        .map_err(|e| internal_error(&format!("Password hashing failed: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_password_verifies() {
        let hashed = hash_password("s3cret!").unwrap();
        assert_ne!(hashed, "s3cret!");
        assert!(verify("s3cret!", &hashed).unwrap());
        assert!(!verify("wrong", &hashed).unwrap());
    }
}
