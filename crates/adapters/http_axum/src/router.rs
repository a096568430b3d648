//! Axum router assembly.

use axum::Router;
use axum::extract::State;
use axum::http::{StatusCode, Uri, header};
use axum::response::{Html, IntoResponse, Response};
use axum::routing::get;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::spa;
use crate::state::AppState;

/// Build the top-level axum [`Router`].
///
/// Static files are served from the assets directory; anything not found
/// there falls through to the shell if it looks like a client route and to
/// `404` otherwise. Includes a [`TraceLayer`] that logs each HTTP
/// request/response at the `DEBUG` level.
pub fn build(state: AppState) -> Router {
    let assets = ServeDir::new(state.assets_dir())
        .append_index_html_on_directories(false)
        .fallback(get(client_route).with_state::<()>(state.clone()));

    Router::new()
        .route("/health", get(health_check))
        .route("/", get(shell))
        .route("/index.html", get(shell))
        .fallback_service(assets)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health_check() -> &'static str {
    "OK"
}

async fn shell(State(state): State<AppState>) -> Response {
    (
        [(header::CACHE_CONTROL, "no-cache")],
        Html(state.index_html().to_string()),
    )
        .into_response()
}

async fn client_route(state: State<AppState>, uri: Uri) -> Response {
    if spa::is_client_route(uri.path()) {
        return shell(state).await;
    }
    tracing::debug!(path = uri.path(), "asset not found");
    StatusCode::NOT_FOUND.into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;
    use http_body_util::BodyExt;
    use techblog_app::config::ClientConfig;
    use tower::ServiceExt;

    const INDEX: &str = "<html><head><title>TechBlog</title></head><body><div id=\"app\"></div></body></html>";

    fn test_state() -> AppState {
        let client = ClientConfig::new("https://api.example").unwrap();
        AppState::new(env!("CARGO_MANIFEST_DIR"), INDEX, &client)
    }

    async fn get_path(path: &str) -> (StatusCode, String) {
        let response = build(test_state())
            .oneshot(Request::builder().uri(path).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn should_return_ok_when_health_check_called() {
        let (status, body) = get_path("/health").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "OK");
    }

    #[tokio::test]
    async fn should_serve_shell_with_api_url_at_root() {
        let (status, body) = get_path("/").await;

        assert_eq!(status, StatusCode::OK);
        assert!(body.contains(r#"<meta name="techblog-api-url" content="https://api.example">"#));
        assert!(body.contains(r#"<div id="app">"#));
    }

    #[tokio::test]
    async fn should_serve_shell_for_every_client_route() {
        let (_, root) = get_path("/").await;
        for path in [
            "/index.html",
            "/post/3",
            "/post/v1.2",
            "/about",
            "/admin",
            "/unknown/page",
        ] {
            let (status, body) = get_path(path).await;

            assert_eq!(status, StatusCode::OK, "{path}");
            assert_eq!(body, root, "{path}");
        }
    }

    #[tokio::test]
    async fn should_serve_existing_static_file() {
        let (status, body) = get_path("/Cargo.toml").await;

        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("techblog-adapter-http-axum"));
    }

    #[tokio::test]
    async fn should_return_not_found_for_missing_asset() {
        let (status, _) = get_path("/techblog-web_bg.wasm").await;

        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
