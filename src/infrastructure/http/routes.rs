//! HTTP Routes
//!
//! API Endpoints:
//! - /api/ping                       GET              健康检查
//! - /api/notebooks                  GET / POST       列出 / 创建笔记本
//! - /api/notebooks/:id              GET / PUT / DELETE
//! - /api/notebooks/:id/restore      POST             恢复笔记本
//! - /api/sections                   GET / POST       ?notebook_id=&include_deleted=
//! - /api/sections/:id               GET / PUT / DELETE
//! - /api/sections/:id/reorder       PUT              调整顺序
//! - /api/sections/:id/restore       POST             恢复分区
//! - /api/pages                      GET / POST       ?section_id=&parent_page_id=&include_deleted=
//! - /api/pages/:id                  GET / PUT / DELETE
//! - /api/pages/:id/reorder          PUT              调整顺序
//! - /api/pages/:id/move             PUT              移动到新的父页面
//! - /api/pages/:id/restore          POST             恢复页面
//! - /api/search                     GET              ?q=&limit=

use axum::{
    routing::{get, post, put},
    Router,
};
use std::sync::Arc;

use super::handlers;
use super::state::AppState;

/// 创建所有路由
pub fn create_routes() -> Router<Arc<AppState>> {
    Router::new().nest("/api", api_routes())
}

/// API 路由
fn api_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/ping", get(handlers::ping))
        .nest("/notebooks", notebook_routes())
        .nest("/sections", section_routes())
        .nest("/pages", page_routes())
        .route("/search", get(handlers::search_pages))
}

/// Notebook 路由
fn notebook_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/",
            get(handlers::list_notebooks).post(handlers::create_notebook),
        )
        .route(
            "/:id",
            get(handlers::get_notebook)
                .put(handlers::update_notebook)
                .delete(handlers::delete_notebook),
        )
        .route("/:id/restore", post(handlers::restore_notebook))
}

/// Section 路由
fn section_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/",
            get(handlers::list_sections).post(handlers::create_section),
        )
        .route(
            "/:id",
            get(handlers::get_section)
                .put(handlers::update_section)
                .delete(handlers::delete_section),
        )
        .route("/:id/reorder", put(handlers::reorder_section))
        .route("/:id/restore", post(handlers::restore_section))
}

/// Page 路由
fn page_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(handlers::list_pages).post(handlers::create_page))
        .route(
            "/:id",
            get(handlers::get_page)
                .put(handlers::update_page)
                .delete(handlers::delete_page),
        )
        .route("/:id/reorder", put(handlers::reorder_page))
        .route("/:id/move", put(handlers::move_page))
        .route("/:id/restore", post(handlers::restore_page))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::{to_bytes, Body},
        http::{Method, Request, StatusCode},
    };
    use serde_json::{json, Value};
    use tower::util::ServiceExt;

    use crate::infrastructure::memory::{
        InMemoryNotebookRepository, InMemoryPageRepository, InMemorySectionRepository,
    };

    fn app() -> Router {
        let state = AppState::new(
            Arc::new(InMemoryNotebookRepository::new()),
            Arc::new(InMemorySectionRepository::new()),
            Arc::new(InMemoryPageRepository::new()),
        );
        create_routes().with_state(Arc::new(state))
    }

    async fn call(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let request = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(body) => request
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => request.body(Body::empty()).unwrap(),
        };

        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_ping() {
        let (status, body) = call(&app(), Method::GET, "/api/ping", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["errno"], 0);
        assert_eq!(body["data"]["service"], "folio");
    }

    #[tokio::test]
    async fn test_notebook_crud() {
        let app = app();
        let (status, body) = call(
            &app,
            Method::POST,
            "/api/notebooks",
            Some(json!({ "name": "Work" })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["data"]["color"], "#0078D4");
        assert_eq!(body["message"], "Notebook created successfully");
        let id = body["data"]["id"].as_str().unwrap().to_string();

        let (status, body) = call(
            &app,
            Method::PUT,
            &format!("/api/notebooks/{}", id),
            Some(json!({ "name": "Office" })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["name"], "Office");

        let (status, _) = call(&app, Method::DELETE, &format!("/api/notebooks/{}", id), None).await;
        assert_eq!(status, StatusCode::OK);

        let (_, body) = call(&app, Method::GET, "/api/notebooks", None).await;
        assert_eq!(body["data"].as_array().unwrap().len(), 0);
        let (_, body) = call(&app, Method::GET, "/api/notebooks?include_deleted=true", None).await;
        assert_eq!(body["data"].as_array().unwrap().len(), 1);

        let (status, body) = call(
            &app,
            Method::POST,
            &format!("/api/notebooks/{}/restore", id),
            Some(json!({})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert!(body["data"]["deleted_at"].is_null());
    }

    #[tokio::test]
    async fn test_error_status_mapping() {
        let app = app();

        let (status, body) = call(
            &app,
            Method::GET,
            "/api/notebooks/00000000-0000-4000-8000-000000000000",
            None,
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["errno"], 404);
        assert!(body["message"].as_str().unwrap().contains("not found"));

        let (status, body) = call(
            &app,
            Method::POST,
            "/api/notebooks",
            Some(json!({ "name": "   " })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "validation");
        assert_eq!(body["errors"][0]["field"], "name");
    }

    #[tokio::test]
    async fn test_section_cascade_and_search() {
        let app = app();
        let (_, body) = call(&app, Method::POST, "/api/notebooks", Some(json!({ "name": "Work" }))).await;
        let notebook_id = body["data"]["id"].as_str().unwrap().to_string();

        let (status, body) = call(
            &app,
            Method::POST,
            "/api/sections",
            Some(json!({ "notebook_id": notebook_id, "name": "Ideas" })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        let section_id = body["data"]["id"].as_str().unwrap().to_string();

        let (status, body) = call(
            &app,
            Method::POST,
            "/api/pages",
            Some(json!({
                "section_id": section_id,
                "title": "Roadmap",
                "content": "Ship **search** next",
            })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["data"]["content_plain"], "Ship search next");

        let (status, body) = call(&app, Method::DELETE, &format!("/api/sections/{}", section_id), None).await;
        assert_eq!(status, StatusCode::CONFLICT);
        assert!(body["message"].as_str().unwrap().contains("1 active page"));

        let (status, body) = call(&app, Method::GET, "/api/search?q=search", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"].as_array().unwrap().len(), 1);

        let (status, body) = call(
            &app,
            Method::PUT,
            &format!("/api/sections/{}/reorder", section_id),
            Some(json!({ "new_order": 4 })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["display_order"], 4);

        let (_, body) = call(
            &app,
            Method::GET,
            &format!("/api/pages?section_id={}", section_id),
            None,
        )
        .await;
        assert_eq!(body["data"].as_array().unwrap().len(), 1);
    }
}
