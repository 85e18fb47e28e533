//! Custom extractors

use crate::error::ServerError;
use axum::{
    extract::{FromRequest, Request},
    Json,
};

/// JSON body whose rejections are reported as [`ServerError::InvalidRequest`],
/// in the same `{"error", "status"}` shape as field validation errors
pub struct JsonExtractor<T>(pub T);

#[axum::async_trait]
impl<S, T> FromRequest<S> for JsonExtractor<T>
where
    T: serde::de::DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ServerError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await.map_err(|rejection| {
            tracing::debug!("Rejected request body: {}", rejection);
            ServerError::from(rejection)
        })?;
        Ok(Self(value))
    }
}
