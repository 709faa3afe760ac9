//! Extractores con rechazo tipado
//!
//! Envuelven `Json`, `Path` y `Query` de axum para que un cuerpo, segmento o
//! query string mal formado responda con el sobre de error de `AppError`
//! (`VALIDATION_ERROR`, 400) en lugar del texto plano por defecto.

use axum::{
    async_trait,
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        FromRequest, FromRequestParts, Path, Query, Request,
    },
    http::request::Parts,
    Json,
};
use serde::de::DeserializeOwned;

use crate::utils::errors::AppError;

/// Cuerpo JSON deserializado
#[derive(Debug)]
pub struct JsonBody<T>(pub T);

/// Parámetros de ruta deserializados
#[derive(Debug)]
pub struct PathParam<T>(pub T);

/// Query string deserializada
#[derive(Debug)]
pub struct QueryParams<T>(pub T);

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::MalformedInput(rejection.body_text())
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::MalformedInput(rejection.body_text())
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::MalformedInput(rejection.body_text())
    }
}

#[async_trait]
impl<S, T> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await?;
        Ok(Self(value))
    }
}

#[async_trait]
impl<S, T> FromRequestParts<S> for PathParam<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(value) = Path::<T>::from_request_parts(parts, state).await?;
        Ok(Self(value))
    }
}

#[async_trait]
impl<S, T> FromRequestParts<S> for QueryParams<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(value) = Query::<T>::from_request_parts(parts, state).await?;
        Ok(Self(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{header, Request as HttpRequest, StatusCode};
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    struct Quantity {
        quantity_used: i32,
    }

    fn json_request(body: &'static str) -> HttpRequest<Body> {
        HttpRequest::builder()
            .method("POST")
            .uri("/")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body))
            .unwrap()
    }

    #[tokio::test]
    async fn test_json_body_accepts_well_formed_input() {
        let JsonBody(value) = JsonBody::<Quantity>::from_request(json_request(r#"{"quantity_used":3}"#), &())
            .await
            .unwrap();
        assert_eq!(value.quantity_used, 3);
    }

    #[tokio::test]
    async fn test_wrong_type_becomes_validation_error() {
        let err = JsonBody::<Quantity>::from_request(json_request(r#"{"quantity_used":"three"}"#), &())
            .await
            .unwrap_err();
        assert_eq!(err.code(), "VALIDATION_ERROR");
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_missing_content_type_becomes_validation_error() {
        let request = HttpRequest::builder()
            .method("POST")
            .uri("/")
            .body(Body::from(r#"{"quantity_used":3}"#))
            .unwrap();
        let err = JsonBody::<Quantity>::from_request(request, &()).await.unwrap_err();
        assert_eq!(err.code(), "VALIDATION_ERROR");
    }
}
