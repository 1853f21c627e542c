//! Request extractors that reject with [`ServerError`]
//!
//! axum's own `Json` and `Path` rejections answer with plain text; these
//! wrappers turn every malformed request into the `{error, status}` body
//! the rest of the API uses.

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        FromRequest, FromRequestParts, Path, Request,
    },
    http::request::Parts,
    Json,
};
use grocery_core::CustomerId;
use serde::de::DeserializeOwned;

use crate::error::ServerError;

/// JSON request body
pub struct JsonBody<T>(pub T);

#[axum::async_trait]
impl<S, T> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ServerError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(body_rejection)?;

        Ok(Self(value))
    }
}

fn body_rejection(rejection: JsonRejection) -> ServerError {
    let message = match rejection {
        JsonRejection::MissingJsonContentType(_) => {
            "Expected 'Content-Type: application/json'".to_string()
        }
        JsonRejection::JsonSyntaxError(err) => format!("Malformed JSON body: {}", err.body_text()),
        JsonRejection::JsonDataError(err) => format!("Unexpected JSON body: {}", err.body_text()),
        other => other.body_text(),
    };

    tracing::debug!("Rejected request body: {}", message);
    ServerError::InvalidRequest(message)
}

/// Customer id taken from the `:id` path segment
pub struct CustomerIdPath(pub CustomerId);

#[axum::async_trait]
impl<S> FromRequestParts<S> for CustomerIdPath
where
    S: Send + Sync,
{
    type Rejection = ServerError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id) = Path::<CustomerId>::from_request_parts(parts, state)
            .await
            .map_err(|rejection: PathRejection| {
                ServerError::InvalidRequest(format!(
                    "Invalid customer id: {}",
                    rejection.body_text()
                ))
            })?;

        Ok(Self(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{body::Body, http::header};

    fn json_request(content_type: Option<&str>, body: &str) -> Request {
        let mut builder = axum::http::Request::builder().method("POST").uri("/");
        if let Some(content_type) = content_type {
            builder = builder.header(header::CONTENT_TYPE, content_type);
        }
        builder.body(Body::from(body.to_string())).unwrap()
    }

    #[tokio::test]
    async fn test_json_body_accepts_valid_json() {
        let request = json_request(Some("application/json"), "[1, 2, 3]");

        let JsonBody(values) = JsonBody::<Vec<i32>>::from_request(request, &())
            .await
            .unwrap();
        assert_eq!(values, vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn test_json_body_rejections_are_invalid_requests() {
        let cases = [
            (None, "[1]", "Content-Type"),
            (Some("application/json"), "[1,", "Malformed JSON body"),
            (Some("application/json"), r#"["a"]"#, "Unexpected JSON body"),
        ];

        for (content_type, body, expected) in cases {
            let request = json_request(content_type, body);
            let err = match JsonBody::<Vec<i32>>::from_request(request, &()).await {
                Ok(_) => panic!("{:?} should be rejected", body),
                Err(err) => err,
            };

            assert!(matches!(err, ServerError::InvalidRequest(_)));
            assert!(err.to_string().contains(expected), "{}", err);
        }
    }
}
