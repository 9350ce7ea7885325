//! JSON extractor with API-friendly rejections.
//!
//! Malformed bodies reject with 400; bodies that parse but fail to
//! deserialize into the payload type (wrong field types) reject with
//! 422, matching how field-level validation failures are reported.

use axum::{
    async_trait,
    body::Body,
    extract::{rejection::JsonRejection, FromRequest, Request},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::de::DeserializeOwned;
use serde_json::json;

pub struct ApiJson<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for ApiJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiJsonRejection;

    async fn from_request(req: Request<Body>, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(ApiJson(value)),
            Err(JsonRejection::JsonDataError(err)) => {
                Err(ApiJsonRejection::Unprocessable(err.body_text()))
            }
            Err(JsonRejection::JsonSyntaxError(err)) => {
                Err(ApiJsonRejection::Malformed(err.body_text()))
            }
            Err(other) => Err(ApiJsonRejection::Malformed(other.body_text())),
        }
    }
}

#[derive(Debug)]
pub enum ApiJsonRejection {
    Unprocessable(String),
    Malformed(String),
}

impl IntoResponse for ApiJsonRejection {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiJsonRejection::Unprocessable(msg) => (StatusCode::UNPROCESSABLE_ENTITY, msg),
            ApiJsonRejection::Malformed(_) => (
                StatusCode::BAD_REQUEST,
                "Invalid JSON body".to_string(),
            ),
        };

        let body = Json(json!({
            "error": message,
            "status": status.as_u16(),
        }));

        (status, body).into_response()
    }
}
