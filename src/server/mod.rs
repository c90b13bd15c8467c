use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use crate::config::ServerSettings;
use crate::schema::{build_schema, CatalogSchema};
use crate::storage::MemoryStore;

pub mod routes;

/// Server state
pub struct AppState {
    pub schema: CatalogSchema,
}

/// Build the application router.
///
/// `POST /graphql` executes operations, `GET /graphql` serves GraphiQL when
/// enabled, and every other path falls through to the static page client.
pub fn router(schema: CatalogSchema, settings: &ServerSettings) -> Router {
    let state = Arc::new(AppState { schema });

    let graphql = if settings.graphiql {
        get(routes::graphiql).post(routes::graphql_handler)
    } else {
        post(routes::graphql_handler)
    };

    Router::new()
        .route("/graphql", graphql)
        .fallback_service(ServeDir::new(&settings.client_dir))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn start_server(settings: ServerSettings, store: Arc<MemoryStore>) -> anyhow::Result<()> {
    let app = router(build_schema(store), &settings);

    let listener = tokio::net::TcpListener::bind(settings.address()).await?;
    let addr = listener.local_addr()?;
    tracing::info!("Starting server on {}", addr);
    println!("🌍 Server running at http://{}/graphql", addr);

    axum::serve(listener, app).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request, StatusCode};
    use tower::ServiceExt;

    fn app(settings: &ServerSettings) -> Router {
        router(build_schema(Arc::new(MemoryStore::seeded())), settings)
    }

    fn graphql_post(body: serde_json::Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/graphql")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn json_body(response: axum::response::Response) -> serde_json::Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_post_graphql_envelope() {
        let response = app(&ServerSettings::default())
            .oneshot(graphql_post(serde_json::json!({
                "query": "{ continents { code } }"
            })))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert_eq!(body["data"]["continents"].as_array().unwrap().len(), 7);
        assert!(body.get("errors").is_none());
    }

    #[tokio::test]
    async fn test_post_graphql_with_variables() {
        let response = app(&ServerSettings::default())
            .oneshot(graphql_post(serde_json::json!({
                "query": "query($id: Int!) { book(id: $id) { name } }",
                "variables": { "id": 7 }
            })))
            .await
            .unwrap();

        let body = json_body(response).await;
        assert_eq!(body["data"]["book"]["name"], "The Way of Shadows");
    }

    #[tokio::test]
    async fn test_invalid_document_returns_error_list() {
        let response = app(&ServerSettings::default())
            .oneshot(graphql_post(serde_json::json!({
                "query": "mutation { addBook(name: \"No author\") { id } }"
            })))
            .await
            .unwrap();

        let body = json_body(response).await;
        assert!(!body["errors"].as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_get_graphql_serves_graphiql() {
        let response = app(&ServerSettings::default())
            .oneshot(Request::get("/graphql").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let content_type = response.headers()[header::CONTENT_TYPE].to_str().unwrap();
        assert!(content_type.starts_with("text/html"));
    }

    #[tokio::test]
    async fn test_graphiql_disabled_serves_no_html() {
        let dir = tempfile::tempdir().unwrap();
        let settings = ServerSettings {
            graphiql: false,
            client_dir: dir.path().to_path_buf(),
            ..Default::default()
        };

        let response = app(&settings)
            .oneshot(Request::get("/graphql").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_ne!(response.status(), StatusCode::OK);
        let is_html = response
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .is_some_and(|v| v.starts_with("text/html"));
        assert!(!is_html);
    }

    #[tokio::test]
    async fn test_fallback_serves_client_dir() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("index.html"), "<h1>Continents</h1>").unwrap();
        let settings = ServerSettings {
            client_dir: dir.path().to_path_buf(),
            ..Default::default()
        };

        let response = app(&settings)
            .oneshot(Request::get("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&bytes[..], b"<h1>Continents</h1>");
    }
}
