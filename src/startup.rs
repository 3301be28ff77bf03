use axum::{extract::MatchedPath, http::Request, routing::get, Router};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use uuid::Uuid;

use crate::routes::greet;

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    let app = router();

    axum::serve(listener, app).await
}

pub fn router() -> Router {
    Router::new().route("/", get(greet)).layer(
        // Refer to https://github.com/tokio-rs/axum/blob/main/examples/tracing-aka-logging/Cargo.toml
        TraceLayer::new_for_http().make_span_with(|request: &Request<_>| {
            let path = request
                .extensions()
                .get::<MatchedPath>()
                .map(MatchedPath::as_str);
            tracing::info_span!(
                "Starting HTTP request",
                method = ?request.method(),
                path,
                request_id = %Uuid::new_v4(),
            )
        }),
    )
}
