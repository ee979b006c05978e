//! Notebook HTTP Handlers

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::application::{
    CreateNotebook, DeleteNotebook, GetNotebookById, GetNotebooks, RestoreNotebook,
    UpdateNotebook,
};
use crate::domain::{NotebookId, DEFAULT_NOTEBOOK_COLOR};
use crate::infrastructure::http::dto::{
    ApiResponse, CreateNotebookRequest, Empty, ListNotebooksQuery, NotebookResponse,
    UpdateNotebookRequest,
};
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

/// 列出笔记本
pub async fn list_notebooks(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ListNotebooksQuery>,
) -> Result<Json<ApiResponse<Vec<NotebookResponse>>>, ApiError> {
    let result = state
        .get_notebooks_handler
        .handle(GetNotebooks {
            include_deleted: query.include_deleted,
        })
        .await?;

    Ok(Json(
        result
            .map(|notebooks| notebooks.into_iter().map(NotebookResponse::from).collect::<Vec<_>>())
            .into(),
    ))
}

/// 创建笔记本
pub async fn create_notebook(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CreateNotebookRequest>,
) -> Result<(StatusCode, Json<ApiResponse<NotebookResponse>>), ApiError> {
    let result = state
        .create_notebook_handler
        .handle(CreateNotebook {
            name: req.name,
            color: req
                .color
                .unwrap_or_else(|| DEFAULT_NOTEBOOK_COLOR.to_string()),
        })
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(result.map(NotebookResponse::from).into()),
    ))
}

/// 获取笔记本详情
pub async fn get_notebook(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<NotebookResponse>>, ApiError> {
    let result = state
        .get_notebook_handler
        .handle(GetNotebookById {
            id: NotebookId::from(id),
        })
        .await?;

    Ok(Json(result.map(NotebookResponse::from).into()))
}

/// 更新笔记本
pub async fn update_notebook(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateNotebookRequest>,
) -> Result<Json<ApiResponse<NotebookResponse>>, ApiError> {
    let result = state
        .update_notebook_handler
        .handle(UpdateNotebook {
            id: NotebookId::from(id),
            name: req.name,
            color: req.color,
        })
        .await?;

    Ok(Json(result.map(NotebookResponse::from).into()))
}

/// 删除笔记本（软删除）
pub async fn delete_notebook(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<Empty>>, ApiError> {
    let result = state
        .delete_notebook_handler
        .handle(DeleteNotebook {
            id: NotebookId::from(id),
        })
        .await?;

    Ok(Json(result.map(|_| Empty {}).into()))
}

/// 恢复笔记本
pub async fn restore_notebook(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<NotebookResponse>>, ApiError> {
    let result = state
        .restore_notebook_handler
        .handle(RestoreNotebook {
            id: NotebookId::from(id),
        })
        .await?;

    Ok(Json(result.map(NotebookResponse::from).into()))
}
