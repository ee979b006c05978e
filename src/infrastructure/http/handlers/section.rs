//! Section HTTP Handlers

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::application::{
    CreateSection, DeleteSection, GetSectionById, GetSections, ReorderSection, RestoreSection,
    UpdateSection,
};
use crate::domain::{NotebookId, SectionId};
use crate::infrastructure::http::dto::{
    ApiResponse, CreateSectionRequest, Empty, ListSectionsQuery, ReorderRequest,
    SectionResponse, UpdateSectionRequest,
};
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

/// 列出分区（可按笔记本过滤）
pub async fn list_sections(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ListSectionsQuery>,
) -> Result<Json<ApiResponse<Vec<SectionResponse>>>, ApiError> {
    let result = state
        .get_sections_handler
        .handle(GetSections {
            notebook_id: query.notebook_id.map(NotebookId::from),
            include_deleted: query.include_deleted,
        })
        .await?;

    Ok(Json(
        result
            .map(|sections| sections.into_iter().map(SectionResponse::from).collect::<Vec<_>>())
            .into(),
    ))
}

/// 创建分区
pub async fn create_section(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CreateSectionRequest>,
) -> Result<(StatusCode, Json<ApiResponse<SectionResponse>>), ApiError> {
    let result = state
        .create_section_handler
        .handle(CreateSection {
            notebook_id: NotebookId::from(req.notebook_id),
            name: req.name,
            display_order: req.display_order,
        })
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(result.map(SectionResponse::from).into()),
    ))
}

/// 获取分区详情
pub async fn get_section(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<SectionResponse>>, ApiError> {
    let result = state
        .get_section_handler
        .handle(GetSectionById {
            id: SectionId::from(id),
        })
        .await?;

    Ok(Json(result.map(SectionResponse::from).into()))
}

/// 更新分区
pub async fn update_section(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateSectionRequest>,
) -> Result<Json<ApiResponse<SectionResponse>>, ApiError> {
    let result = state
        .update_section_handler
        .handle(UpdateSection {
            id: SectionId::from(id),
            name: req.name,
            display_order: req.display_order,
        })
        .await?;

    Ok(Json(result.map(SectionResponse::from).into()))
}

/// 删除分区（有未删除页面时返回 409）
pub async fn delete_section(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<Empty>>, ApiError> {
    let result = state
        .delete_section_handler
        .handle(DeleteSection {
            id: SectionId::from(id),
        })
        .await?;

    Ok(Json(result.map(|_| Empty {}).into()))
}

/// 恢复分区
pub async fn restore_section(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<SectionResponse>>, ApiError> {
    let result = state
        .restore_section_handler
        .handle(RestoreSection {
            id: SectionId::from(id),
        })
        .await?;

    Ok(Json(result.map(SectionResponse::from).into()))
}

/// 调整分区顺序
pub async fn reorder_section(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
    Json(req): Json<ReorderRequest>,
) -> Result<Json<ApiResponse<SectionResponse>>, ApiError> {
    let result = state
        .reorder_section_handler
        .handle(ReorderSection {
            section_id: SectionId::from(id),
            new_order: req.new_order,
        })
        .await?;

    Ok(Json(result.map(SectionResponse::from).into()))
}
