//! Page HTTP Handlers

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::application::{
    CreatePage, DeletePage, GetPageById, GetPages, MovePage, ReorderPage, RestorePage,
    UpdatePage,
};
use crate::domain::{PageId, SectionId};
use crate::infrastructure::http::dto::{
    ApiResponse, CreatePageRequest, Empty, ListPagesQuery, MovePageRequest, PageResponse,
    ReorderRequest, UpdatePageRequest,
};
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

/// 列出页面（section_id 优先，其次 parent_page_id）
pub async fn list_pages(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ListPagesQuery>,
) -> Result<Json<ApiResponse<Vec<PageResponse>>>, ApiError> {
    let result = state
        .get_pages_handler
        .handle(GetPages {
            section_id: query.section_id.map(SectionId::from),
            parent_page_id: query.parent_page_id.map(PageId::from),
            include_deleted: query.include_deleted,
        })
        .await?;

    Ok(Json(
        result
            .map(|pages| pages.into_iter().map(PageResponse::from).collect::<Vec<_>>())
            .into(),
    ))
}

/// 创建页面
pub async fn create_page(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CreatePageRequest>,
) -> Result<(StatusCode, Json<ApiResponse<PageResponse>>), ApiError> {
    let result = state
        .create_page_handler
        .handle(CreatePage {
            section_id: SectionId::from(req.section_id),
            title: req.title,
            content: req.content,
            parent_page_id: req.parent_page_id.map(PageId::from),
            display_order: req.display_order,
        })
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(result.map(PageResponse::from).into()),
    ))
}

/// 获取页面详情
pub async fn get_page(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<PageResponse>>, ApiError> {
    let result = state
        .get_page_handler
        .handle(GetPageById {
            id: PageId::from(id),
        })
        .await?;

    Ok(Json(result.map(PageResponse::from).into()))
}

/// 更新页面（内容变化时重新生成纯文本）
pub async fn update_page(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdatePageRequest>,
) -> Result<Json<ApiResponse<PageResponse>>, ApiError> {
    let result = state
        .update_page_handler
        .handle(UpdatePage {
            id: PageId::from(id),
            title: req.title,
            content: req.content,
            display_order: req.display_order,
        })
        .await?;

    Ok(Json(result.map(PageResponse::from).into()))
}

/// 删除页面（有未删除子页面时返回 409）
pub async fn delete_page(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<Empty>>, ApiError> {
    let result = state
        .delete_page_handler
        .handle(DeletePage {
            id: PageId::from(id),
        })
        .await?;

    Ok(Json(result.map(|_| Empty {}).into()))
}

/// 恢复页面
pub async fn restore_page(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<PageResponse>>, ApiError> {
    let result = state
        .restore_page_handler
        .handle(RestorePage {
            id: PageId::from(id),
        })
        .await?;

    Ok(Json(result.map(PageResponse::from).into()))
}

/// 调整页面顺序
pub async fn reorder_page(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
    Json(req): Json<ReorderRequest>,
) -> Result<Json<ApiResponse<PageResponse>>, ApiError> {
    let result = state
        .reorder_page_handler
        .handle(ReorderPage {
            page_id: PageId::from(id),
            new_order: req.new_order,
        })
        .await?;

    Ok(Json(result.map(PageResponse::from).into()))
}

/// 移动页面到新的父页面下
pub async fn move_page(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
    Json(req): Json<MovePageRequest>,
) -> Result<Json<ApiResponse<PageResponse>>, ApiError> {
    let result = state
        .move_page_handler
        .handle(MovePage {
            page_id: PageId::from(id),
            parent_page_id: req.parent_page_id.map(PageId::from),
        })
        .await?;

    Ok(Json(result.map(PageResponse::from).into()))
}
