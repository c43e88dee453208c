use crate::metrics::Metrics;
use axum::Router;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::routing::get;
use std::sync::Arc;
use tracing::{error, info};

const LANDING_PAGE: &str = r#"<html>
<head><title>Gardena Smart System Exporter</title></head>
<body>
<h1>Gardena Smart System Exporter</h1>
<p><a href="/metrics">Metrics</a></p>
</body>
</html>"#;

pub async fn serve(metrics: Arc<Metrics>, port: u16) -> Result<(), std::io::Error> {
    let app = Router::new()
        .route("/", get(index))
        .route("/metrics", get(render_metrics))
        .with_state(metrics);

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", port)).await?;
    info!("📡 Serving metrics on port {}", port);
    axum::serve(listener, app).await
}

async fn index() -> Html<&'static str> {
    Html(LANDING_PAGE)
}

async fn render_metrics(State(metrics): State<Arc<Metrics>>) -> Response {
    match metrics.render() {
        Ok(body) => (StatusCode::OK, body).into_response(),
        Err(e) => {
            error!("❌ Rendering metrics failed: {}", e);
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}
