//! Web router using Axum
//!
//! Serves the Trunk-built frontend from a `dist` directory. Any path that
//! is not a static asset falls back to `index.html` so the client router
//! can resolve deep links such as `/ecommerce/customers`.

use axum::{response::Html, routing::get, Json, Router};
use std::path::Path;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};
use tracing::{debug, warn};

/// Create the web router
pub fn create_router(dist: &Path) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let index = dist.join("index.html");
    let frontend_built = index.is_file();

    let router = Router::new().route(
        "/api/health",
        get(move || health_handler(frontend_built)),
    );

    let router = if frontend_built {
        debug!(dist = %dist.display(), "Serving built frontend");
        router.fallback_service(ServeDir::new(dist).fallback(ServeFile::new(index)))
    } else {
        warn!(dist = %dist.display(), "Frontend not built, serving setup page");
        router.fallback(build_required_handler)
    };

    router.layer(cors)
}

/// Health check endpoint
async fn health_handler(frontend_built: bool) -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "healthy",
        "frontend": if frontend_built { "built" } else { "missing" },
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

async fn build_required_handler() -> Html<&'static str> {
    Html(
        r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>navshell - Build Required</title>
    <style>
        * { margin: 0; padding: 0; box-sizing: border-box; }
        body {
            font-family: system-ui, -apple-system, sans-serif;
            background: #f5f5f5;
            display: flex;
            justify-content: center;
            align-items: center;
            height: 100vh;
        }
        .setup-message {
            max-width: 600px;
            background: white;
            padding: 2rem;
            border-radius: 8px;
            box-shadow: 0 2px 8px rgba(0,0,0,0.1);
        }
        h1 { font-size: 2rem; margin-bottom: 1rem; color: #1a1a1a; }
        p { margin-bottom: 1rem; color: #333; line-height: 1.6; }
        code {
            background: #f0f0f0;
            padding: 0.25rem 0.5rem;
            border-radius: 4px;
            font-family: monospace;
        }
        .step {
            margin: 1.5rem 0;
            padding: 1rem;
            background: #f8f8f8;
            border-left: 3px solid #333;
        }
    </style>
</head>
<body>
    <div class="setup-message">
        <h1>navshell - Build Required</h1>
        <p>The Leptos WASM frontend needs to be compiled before the sidebar can be displayed.</p>

        <div class="step">
            <strong>Setup Instructions:</strong>
            <ol style="margin-left: 1.5rem; margin-top: 0.5rem;">
                <li>Install Trunk: <code>cargo install trunk</code></li>
                <li>Add WASM target: <code>rustup target add wasm32-unknown-unknown</code></li>
                <li>Build frontend: <code>cd crates/navshell-web && trunk build --release</code></li>
                <li>Restart server: <code>cargo run -p navshell -- serve</code></li>
            </ol>
        </div>

        <p>Health check: <a href="/api/health">/api/health</a></p>
    </div>
</body>
</html>"#,
    )
}
