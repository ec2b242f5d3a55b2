use axum::{http::StatusCode, response::IntoResponse};

/// GET /api/hello
///
/// Returns the static greeting. The memory refresh hook has already run by
/// the time this handler executes.
pub async fn hello() -> impl IntoResponse {
    (StatusCode::OK, "Hello, EDP!")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_hello_returns_ok() {
        let response = hello().await.into_response();
        assert_eq!(response.status(), StatusCode::OK);
    }
}
