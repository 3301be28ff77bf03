use axum::{http::StatusCode, response::IntoResponse};

pub const GREETING: &str = "Hello! Welcome to the training!\n";

#[tracing::instrument(name = "Greeting a visitor")]
pub async fn greet() -> impl IntoResponse {
    (StatusCode::OK, GREETING)
}
