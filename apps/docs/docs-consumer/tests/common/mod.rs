//! Shared fixtures: a stand-in docs API served by axum on an ephemeral port.

#![allow(dead_code)]

use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::Router;
use serde_json::{json, Value};

pub const ARCHITECTURE_MD: &str = "# API Architecture\n\
\n\
## Overview\n\
The finance dashboard exposes its data through Nitro endpoints.\n\
\n\
## Endpoints\n\
### GET /api/transactions\n\
Supports query parameters: person, month, category.\n\
### POST /api/sync\n\
\n\
## Architecture Layers\n\
Data Fetching -> Transformation -> Processing -> Filtering\n\
\n\
## Example Requests\n\
curl \"http://localhost:3000/api/transactions?person=Ambos\"\n";

pub fn generated_json() -> Value {
    json!({
        "generatedAt": "2025-01-15T10:30:00.000Z",
        "endpoints": [
            {
                "method": "GET",
                "path": "/api/transactions",
                "file": "transactions.get.ts",
                "description": "Fetch financial transactions",
                "queryParams": ["person", "month", "category"]
            },
            { "method": "POST", "path": "/api/sync", "file": "sync.post.ts", "queryParams": [] }
        ],
        "utilities": [
            {
                "file": "googleSheets.ts",
                "path": "server/utils/googleSheets.ts",
                "functions": ["fetchSheetData", "getSheetsClient"]
            },
            {
                "file": "installmentProcessor.ts",
                "path": "server/utils/installmentProcessor.ts",
                "functions": ["expandInstallments"]
            }
        ],
        "types": {
            "interfaces": [
                {
                    "name": "Transaction",
                    "fields": [
                        "id: string", "data: string", "descricao: string", "valor: number",
                        "categoria: string", "pessoa?: string", "parcela?: string"
                    ]
                }
            ]
        },
        "markdown": "# API Architecture Documentation (Auto-Generated)\n\n## API Endpoints\n"
    })
}

/// Router answering both docs endpoints with the fixtures above.
pub fn docs_router() -> Router {
    docs_router_with(generated_json())
}

/// Same architecture document, with `generated` served by the generate endpoint.
pub fn docs_router_with(generated: Value) -> Router {
    architecture_router().route(
        "/api/docs/generate",
        get(move || {
            let generated = generated.clone();
            async move { axum::Json(generated) }
        }),
    )
}

/// Router serving only the architecture document; generate answers 404.
pub fn architecture_router() -> Router {
    Router::new().route(
        "/api/docs/architecture",
        get(|| async {
            (
                [(header::CONTENT_TYPE, "text/markdown; charset=utf-8")],
                ARCHITECTURE_MD,
            )
        }),
    )
}

/// Router whose generate endpoint returns `body` verbatim as JSON content.
pub fn generate_router(body: &'static str) -> Router {
    Router::new().route(
        "/api/docs/generate",
        get(move || async move { ([(header::CONTENT_TYPE, "application/json")], body) }),
    )
}

/// Router that fails every docs request with `status`.
pub fn failing_router(status: StatusCode) -> Router {
    Router::new()
        .route(
            "/api/docs/architecture",
            get(move || async move { (status, "Failed to read API documentation").into_response() }),
        )
        .route(
            "/api/docs/generate",
            get(move || async move { (status, "Failed to generate documentation").into_response() }),
        )
}

/// Serve `router` from inside the current tokio runtime.
pub async fn spawn_server(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind test listener");
    let addr = listener.local_addr().expect("listener address");

    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("serve test router");
    });

    format!("http://{addr}")
}

/// Serve `router` from a dedicated thread, for tests that block on a child process.
pub fn spawn_server_thread(router: Router) -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind test listener");
    listener
        .set_nonblocking(true)
        .expect("set listener non-blocking");
    let addr = listener.local_addr().expect("listener address");

    std::thread::spawn(move || {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .expect("build test runtime");

        runtime.block_on(async move {
            let listener = tokio::net::TcpListener::from_std(listener).expect("adopt listener");
            axum::serve(listener, router).await.expect("serve test router");
        });
    });

    format!("http://{addr}")
}

/// Base URL that refuses connections.
pub fn closed_base_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind probe listener");
    let addr = listener.local_addr().expect("listener address");
    drop(listener);
    format!("http://{addr}")
}
