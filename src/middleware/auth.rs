//! Middleware de autenticación JWT
//!
//! Extrae el bearer token, lo resuelve con la `AuthGate` del estado e
//! inyecta el empleado autenticado en las extensions de la request.

use axum::{
    extract::{Request, State},
    http::header,
    middleware::Next,
    response::Response,
};
use tracing::debug;

use crate::models::auth::AuthenticatedEmployee;
use crate::state::AppState;
use crate::utils::errors::AppError;

/// Middleware de autenticación para las rutas protegidas
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let token = bearer_token(&request)
        .ok_or_else(|| AppError::Unauthorized("Authorization token required".to_string()))?
        .to_string();

    let employee = state.auth.resolve_bearer(&token).await?;
    debug!("🔐 {} {} as {}", request.method(), request.uri().path(), employee.username);

    request
        .extensions_mut()
        .insert(AuthenticatedEmployee { employee });

    Ok(next.run(request).await)
}

fn bearer_token(request: &Request) -> Option<&str> {
    request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|token| !token.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request as HttpRequest;

    #[test]
    fn test_bearer_token_extraction() {
        let request = HttpRequest::builder()
            .header(header::AUTHORIZATION, "Bearer abc.def.ghi")
            .body(Body::empty())
            .unwrap();
        assert_eq!(bearer_token(&request), Some("abc.def.ghi"));

        let request = HttpRequest::builder()
            .header(header::AUTHORIZATION, "Basic dXNlcjpwYXNz")
            .body(Body::empty())
            .unwrap();
        assert_eq!(bearer_token(&request), None);

        let request = HttpRequest::builder()
            .header(header::AUTHORIZATION, "Bearer   ")
            .body(Body::empty())
            .unwrap();
        assert_eq!(bearer_token(&request), None);

        let request = HttpRequest::builder().body(Body::empty()).unwrap();
        assert_eq!(bearer_token(&request), None);
    }
}
