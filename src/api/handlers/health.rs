/// Greeting served at the root path
///
/// GET /
pub async fn home() -> &'static str {
    "Hello World!"
}

/// Health check endpoint
///
/// GET /health
pub async fn health_check() -> &'static str {
    "OK"
}
