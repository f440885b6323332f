//! Axum application setup.

use axum::{Router, routing::post};
use tower_http::cors::{Any, CorsLayer};

use super::handlers;

/// Create the Axum router with all routes.
pub fn create_router() -> Router {
    // Permissive CORS: the API is consumed by browser-based import UIs.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api_routes = Router::new()
        .route("/import/preview", post(handlers::import_preview))
        .route("/extract/rows", post(handlers::extract_rows));

    Router::new().nest("/api", api_routes).layer(cors)
}

/// Start the web server.
pub async fn run_server(port: u16) -> Result<(), Box<dyn std::error::Error>> {
    let app = create_router();
    let addr = std::net::SocketAddr::from(([127, 0, 0, 1], port));

    println!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use tower::util::ServiceExt;

    use super::create_router;

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_preview_endpoint_infers_schema() {
        let app = create_router();

        let request = Request::builder()
            .method("POST")
            .uri("/api/import/preview")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(
                r#"{"sourceType": "csv", "rows": [{"a": "1"}, {"a": "2"}]}"#,
            ))
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        assert_eq!(json["schema"][0]["name"], "a");
        assert_eq!(json["schema"][0]["type"], "integer");
        assert_eq!(json["sample"].as_array().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_preview_endpoint_rejects_non_mapping_rows() {
        let app = create_router();

        let request = Request::builder()
            .method("POST")
            .uri("/api/import/preview")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(r#"{"sourceType": "csv", "rows": ["not a mapping"]}"#))
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let json = body_json(response).await;
        assert_eq!(json["error"], "bad_request");
    }

    #[tokio::test]
    async fn test_extract_endpoint_returns_null_rows_for_prose() {
        let app = create_router();

        let request = Request::builder()
            .method("POST")
            .uri("/api/extract/rows")
            .header(header::CONTENT_TYPE, "text/plain")
            .body(Body::from("no table here\njust words"))
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        assert!(json["rows"].is_null());
    }

    #[tokio::test]
    async fn test_extract_endpoint_builds_positional_rows() {
        let app = create_router();

        let request = Request::builder()
            .method("POST")
            .uri("/api/extract/rows")
            .header(header::CONTENT_TYPE, "text/plain")
            .body(Body::from("Dupont\t12/03/2023\t418.50"))
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        let json = body_json(response).await;

        assert_eq!(json["rows"][0]["col1"], "Dupont");
        assert_eq!(json["rows"][0]["col3"], "418.50");
    }
}
