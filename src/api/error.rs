use crate::utils::error::CouponError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

pub type ApiResult<T> = std::result::Result<T, CouponError>;

impl IntoResponse for CouponError {
    fn into_response(self) -> Response {
        match self {
            // 404 一律不帶 body
            CouponError::NotFound { id } => {
                tracing::warn!("Coupon {} not found", id);
                StatusCode::NOT_FOUND.into_response()
            }
            other => {
                tracing::error!(
                    "Request failed: {} (Category: {:?})",
                    other,
                    other.category()
                );
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": other.user_friendly_message() })),
                )
                    .into_response()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_not_found_has_empty_body() {
        let response = CouponError::NotFound { id: 5 }.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert!(body.is_empty());
    }

    #[tokio::test]
    async fn test_storage_error_is_internal() {
        let response = CouponError::storage("disk full").into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let value: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(value["error"], "Coupon storage is not available");
    }
}
