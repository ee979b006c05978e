//! Search HTTP Handler

use axum::{
    extract::{Query, State},
    Json,
};
use std::sync::Arc;

use crate::application::SearchPages;
use crate::infrastructure::http::dto::{ApiResponse, PageResponse, SearchQuery};
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

/// 全文搜索页面
pub async fn search_pages(
    State(state): State<Arc<AppState>>,
    Query(query): Query<SearchQuery>,
) -> Result<Json<ApiResponse<Vec<PageResponse>>>, ApiError> {
    let limit = query.limit.unwrap_or(state.search_limit);
    if limit == 0 {
        return Err(ApiError::bad_request("limit must be greater than 0"));
    }

    let result = state
        .search_pages_handler
        .handle(SearchPages {
            text: query.q,
            limit,
        })
        .await?;

    Ok(Json(
        result
            .map(|pages| pages.into_iter().map(PageResponse::from).collect::<Vec<_>>())
            .into(),
    ))
}
