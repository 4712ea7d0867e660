use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Json, Response};
use axum::routing::get;
use axum::Router;
use log::{error, info};
use tokio::net::TcpListener;

use super::App;
use crate::error::DashboardError;
use crate::utils::html_escape;

impl IntoResponse for DashboardError {
    fn into_response(self) -> Response {
        error!("Render failed: {}", self);
        let body = format!(
            "<!DOCTYPE html><html><body><h1>Dashboard error</h1><pre>{}</pre></body></html>",
            html_escape(&self.to_string())
        );
        (StatusCode::INTERNAL_SERVER_ERROR, Html(body)).into_response()
    }
}

async fn dashboard_home(State(app): State<App>) -> Result<Html<String>, DashboardError> {
    app.render().await.map(Html)
}

async fn dashboard_data(State(app): State<App>) -> Result<Json<serde_json::Value>, DashboardError> {
    let (_, aggregates) = app.aggregates().await?;
    Ok(Json(serde_json::to_value(aggregates.as_ref())?))
}

async fn health() -> &'static str {
    "ok"
}

pub fn router(app: App) -> Router {
    Router::new()
        .route("/", get(dashboard_home))
        .route("/data.json", get(dashboard_data))
        .route("/health", get(health))
        .with_state(app)
}

/// Serve the dashboard until the process is stopped.
pub async fn serve(app: App) -> std::io::Result<()> {
    let bind_addr = app.config.bind_addr.clone();
    let listener = TcpListener::bind(&bind_addr).await?;
    info!("Dashboard listening on http://{}", listener.local_addr()?);
    axum::serve(listener, router(app)).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DashboardConfig;
    use axum::body::{to_bytes, Body};
    use axum::http::Request;
    use std::fs;
    use tempfile::TempDir;
    use tower::ServiceExt;

    fn fixture_app() -> (TempDir, App) {
        let temp_dir = TempDir::new().unwrap();
        fs::write(
            temp_dir.path().join("episodes.csv"),
            "season,episode_overall,title,guest,finished\n1,1,Ep 1,Guest <A>,True\n1,2,Ep 2,Guest B,False\n",
        )
        .unwrap();
        fs::write(
            temp_dir.path().join("seasons.csv"),
            "season,episodes,original_release,last_release\n1,2,2015-08-27,2015-10-15\n",
        )
        .unwrap();
        fs::write(
            temp_dir.path().join("sauces.csv"),
            "season,sauce_number,sauce_name,scoville\n1,1,Sriracha,2200\n1,10,Last Dab,2200000\n",
        )
        .unwrap();
        let config = DashboardConfig {
            data_dir: temp_dir.path().to_path_buf(),
            ..DashboardConfig::default()
        };
        (temp_dir, App::new(config))
    }

    async fn get_body(app: App, uri: &str) -> (StatusCode, String) {
        let response = router(app)
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn test_health() {
        let (_dir, app) = fixture_app();
        let (status, body) = get_body(app, "/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "ok");
    }

    #[tokio::test]
    async fn test_dashboard_page() {
        let (_dir, app) = fixture_app();
        let (status, body) = get_body(app, "/").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("Hot Ones Fan Engagement Dashboard"));
        assert!(body.contains("Guest &lt;A&gt;"));
        assert!(!body.contains("Guest <A>"));
        assert!(body.contains("50.0%"));
    }

    #[tokio::test]
    async fn test_data_json() {
        let (_dir, app) = fixture_app();
        let (status, body) = get_body(app, "/data.json").await;
        assert_eq!(status, StatusCode::OK);
        let value: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(value["kpis"]["total_guests"], 2);
        assert_eq!(value["kpis"]["total_episodes"], 2);
    }

    #[tokio::test]
    async fn test_missing_data_is_server_error() {
        let temp_dir = TempDir::new().unwrap();
        let config = DashboardConfig {
            data_dir: temp_dir.path().join("nowhere"),
            ..DashboardConfig::default()
        };
        let (status, body) = get_body(App::new(config), "/").await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(body.contains("Dashboard error"));
    }
}
