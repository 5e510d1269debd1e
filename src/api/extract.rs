//! Request body extraction
//!
//! Write endpoints accept both JSON and URL-encoded form bodies. A request
//! with neither a `Content-Type` nor a body decodes as an empty payload.
//! Decode failures are reported as plain-text 400s like every other write
//! error.

use axum::{
    async_trait,
    body::Bytes,
    extract::{FromRequest, Request},
    http::header::CONTENT_TYPE,
    Form, Json,
};
use serde::de::DeserializeOwned;

use crate::error::ApiError;

/// Body extractor choosing the decoder from the `Content-Type` header.
#[derive(Debug, Clone)]
pub struct StudentBody<T>(pub T);

fn is_form(req: &Request) -> bool {
    req.headers()
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| value.starts_with("application/x-www-form-urlencoded"))
}

#[async_trait]
impl<S, T> FromRequest<S> for StudentBody<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        if !req.headers().contains_key(CONTENT_TYPE) {
            let body = Bytes::from_request(req, state)
                .await
                .map_err(|rejection| ApiError::Decode(rejection.body_text()))?;
            if !body.is_empty() {
                return Err(ApiError::Decode(
                    "Expected request with `Content-Type: application/json`".to_string(),
                ));
            }
            return serde_json::from_slice(b"{}")
                .map(Self)
                .map_err(|e| ApiError::Decode(e.to_string()));
        }

        if is_form(&req) {
            let Form(value) = Form::<T>::from_request(req, state)
                .await
                .map_err(|rejection| ApiError::Decode(rejection.body_text()))?;
            Ok(Self(value))
        } else {
            let Json(value) = Json::<T>::from_request(req, state)
                .await
                .map_err(|rejection| ApiError::Decode(rejection.body_text()))?;
            Ok(Self(value))
        }
    }
}
