use axum::http::StatusCode;

pub async fn health() -> StatusCode {
    StatusCode::OK
}

pub async fn ready() -> StatusCode {
    // No downstream dependencies to probe; ready as soon as we serve.
    StatusCode::OK
}
