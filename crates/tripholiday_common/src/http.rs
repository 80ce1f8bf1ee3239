// --- File: crates/tripholiday_common/src/http.rs ---
use axum::{
    extract::{rejection::JsonRejection, FromRequest},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use serde_json::json;

use crate::error::{HttpStatusCode, TripError};

// Include the client module
pub mod client;

/// Extension trait for TripError to convert it to an Axum HTTP response.
pub trait IntoHttpResponse {
    /// Converts the error into an Axum HTTP response.
    fn into_http_response(self) -> Response;
}

impl IntoHttpResponse for TripError {
    fn into_http_response(self) -> Response {
        let status_code =
            StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        if status_code.is_server_error() {
            tracing::error!(status = status_code.as_u16(), "Request failed: {}", self);
        }

        // Same envelope the front end already understands
        let body = Json(json!({
            "success": false,
            "message": self.public_message(),
        }));

        (status_code, body).into_response()
    }
}

/// Implement IntoResponse for TripError to make it easier to use in Axum handlers.
impl IntoResponse for TripError {
    fn into_response(self) -> Response {
        self.into_http_response()
    }
}

/// A plain `{"success": true, "message": "..."}` body.
#[derive(Debug, Clone, Serialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ApiMessage {
    pub success: bool,
    pub message: String,
}

impl ApiMessage {
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }
}

/// A utility function to convert a Result<T, TripError> to a Result<T, Response>.
/// This is useful for Axum handlers that return a Result.
pub fn handle_result<T>(result: Result<T, TripError>) -> Result<T, Response>
where
    T: IntoResponse,
{
    result.map_err(|err| err.into_response())
}

/// Like [`handle_result`], but wraps the success value in `Json` with the given status.
pub fn json_with_status<T>(status: StatusCode, result: Result<T, TripError>) -> Response
where
    T: Serialize,
{
    match result {
        Ok(body) => (status, Json(body)).into_response(),
        Err(err) => err.into_response(),
    }
}

/// A utility function to convert a Result<T, E> to a Result<T, Response> using a custom error mapper.
pub fn map_error<T, E, F>(result: Result<T, E>, f: F) -> Result<T, Response>
where
    T: IntoResponse,
    F: FnOnce(E) -> TripError,
{
    result.map_err(|err| f(err).into_response())
}

/// `axum::Json` whose rejections use the `{"success": false, ...}` envelope
/// with status 400.
#[derive(Debug, Clone, Copy, Default, FromRequest)]
#[from_request(via(axum::Json), rejection(TripError))]
pub struct JsonBody<T>(pub T);

impl From<JsonRejection> for TripError {
    fn from(rejection: JsonRejection) -> Self {
        TripError::ValidationError(rejection.body_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{not_found, TripError};

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_error_envelope() {
        let response = not_found("Booking not found").into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body = body_json(response).await;
        assert_eq!(body, json!({"success": false, "message": "Booking not found"}));
    }

    #[tokio::test]
    async fn test_server_errors_are_generic() {
        let response = TripError::DatabaseError("disk I/O error".into()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_json(response).await;
        assert_eq!(body["message"], "Internal Server Error");
    }

    #[tokio::test]
    async fn test_json_with_status() {
        let response = json_with_status(StatusCode::CREATED, Ok(ApiMessage::ok("done")));
        assert_eq!(response.status(), StatusCode::CREATED);
        let body = body_json(response).await;
        assert_eq!(body, json!({"success": true, "message": "done"}));
    }

    #[tokio::test]
    async fn test_json_body_rejection_uses_envelope() {
        let request = axum::http::Request::builder()
            .method("POST")
            .header("content-type", "application/json")
            .body(axum::body::Body::from("{not json"))
            .unwrap();
        let rejection = JsonBody::<serde_json::Value>::from_request(request, &())
            .await
            .unwrap_err();
        let response = rejection.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response).await["success"], false);
    }
}
