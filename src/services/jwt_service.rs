use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};

use crate::config::environment::EnvironmentConfig;
use crate::models::auth::JwtClaims;
use crate::models::employee::Employee;
use crate::utils::errors::{internal_error, AppError, AppResult};

/// Tope de vida de un token: 30 días
const MAX_TOKEN_LIFETIME_SECS: u64 = 30 * 24 * 3600;

/// Configuración JWT
#[derive(Debug, Clone)]
pub struct JwtConfig {
    pub secret: String,
    pub algorithm: Algorithm,
    pub access_token_duration: Duration,
}

impl JwtConfig {
    pub fn new(secret: impl Into<String>, expiration_secs: u64) -> Self {
        Self {
            secret: secret.into(),
            algorithm: Algorithm::HS256,
            access_token_duration: Duration::seconds(expiration_secs.min(MAX_TOKEN_LIFETIME_SECS) as i64),
        }
    }
}

impl From<&EnvironmentConfig> for JwtConfig {
    fn from(config: &EnvironmentConfig) -> Self {
        Self::new(config.jwt_secret.clone(), config.jwt_expiration)
    }
}

/// Servicio JWT
pub struct JwtService {
    config: JwtConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

impl JwtService {
    pub fn new(config: JwtConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.secret.as_ref());
        let decoding_key = DecodingKey::from_secret(config.secret.as_ref());

        Self {
            config,
            encoding_key,
            decoding_key,
        }
    }

    /// Segundos de vida de un token recién emitido
    pub fn expires_in(&self) -> u64 {
        self.config.access_token_duration.num_seconds().max(0) as u64
    }

    /// Genera un token de acceso para el empleado
    pub fn generate_access_token(&self, employee: &Employee) -> AppResult<String> {
        let now = Utc::now();
        let exp = now + self.config.access_token_duration;

        let claims = JwtClaims {
            sub: employee.id.to_string(),
            username: employee.username.clone(),
            exp: exp.timestamp().max(0) as usize,
            iat: now.timestamp().max(0) as usize,
        };

        encode(&Header::new(self.config.algorithm), &claims, &self.encoding_key)
            .map_err(|e| internal_error(&format!("Error generating access token: {}", e)))
    }

    /// Valida firma y expiración y devuelve los claims
    pub fn validate_token(&self, token: &str) -> AppResult<JwtClaims> {
        let validation = Validation::new(self.config.algorithm);

        decode::<JwtClaims>(token, &self.decoding_key, &validation)
            .map(|data| data.claims)
            .map_err(|e| AppError::Unauthorized(format!("Invalid token: {}", e)))
    }

    /// Extrae el id del empleado del token
    pub fn employee_id(&self, token: &str) -> AppResult<i32> {
        let claims = self.validate_token(token)?;
        claims
            .sub
            .parse()
            .map_err(|_| AppError::Unauthorized("Invalid token subject".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::employee::WorkingStatus;

    fn employee() -> Employee {
        Employee {
            id: 42,
            name: "Asha Rao".to_string(),
            username: "asha".to_string(),
            email: "asha@example.com".to_string(),
            password_hash: String::new(),
            position: "Mechanic".to_string(),
            working_status: WorkingStatus::Working,
            rating: 4.5,
            jobs_done: 0,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_generate_and_validate_token() {
        let jwt_service = JwtService::new(JwtConfig::new("test-secret", 3600));

        let token = jwt_service.generate_access_token(&employee()).unwrap();
        assert!(!token.is_empty());

        let claims = jwt_service.validate_token(&token).unwrap();
        assert_eq!(claims.sub, "42");
        assert_eq!(claims.username, "asha");
        assert_eq!(jwt_service.employee_id(&token).unwrap(), 42);
        assert_eq!(jwt_service.expires_in(), 3600);
    }

    #[test]
    fn test_token_signed_with_other_secret_is_rejected() {
        let issuer = JwtService::new(JwtConfig::new("secret-a", 3600));
        let verifier = JwtService::new(JwtConfig::new("secret-b", 3600));

        let token = issuer.generate_access_token(&employee()).unwrap();
        let err = verifier.validate_token(&token).unwrap_err();
        assert_eq!(err.code(), "UNAUTHORIZED");
    }

    #[test]
    fn test_garbage_token_is_unauthorized() {
        let jwt_service = JwtService::new(JwtConfig::new("test-secret", 3600));
        assert!(matches!(
            jwt_service.validate_token("not-a-jwt"),
            Err(AppError::Unauthorized(_))
        ));
    }
}
