//! Data Transfer Objects

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::application::Success;
use crate::domain::{Notebook, Page, Section};

// ============================================================================
// 统一响应结构
// ============================================================================

/// 统一 API 响应格式
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub errno: i32,
    pub error: String,
    pub message: String,
    pub data: Option<T>,
}

impl<T: Serialize> ApiResponse<T> {
    /// 成功响应
    pub fn success(data: T, message: impl Into<String>) -> Self {
        Self {
            errno: 0,
            error: String::new(),
            message: message.into(),
            data: Some(data),
        }
    }
}

impl<T: Serialize> From<Success<T>> for ApiResponse<T> {
    fn from(success: Success<T>) -> Self {
        ApiResponse::success(success.data, success.message)
    }
}

/// 空数据响应
#[derive(Debug, Serialize)]
pub struct Empty {}

// ============================================================================
// Query 参数
// ============================================================================

#[derive(Debug, Default, Deserialize)]
pub struct ListNotebooksQuery {
    #[serde(default)]
    pub include_deleted: bool,
}

#[derive(Debug, Default, Deserialize)]
pub struct ListSectionsQuery {
    pub notebook_id: Option<Uuid>,
    #[serde(default)]
    pub include_deleted: bool,
}

#[derive(Debug, Default, Deserialize)]
pub struct ListPagesQuery {
    pub section_id: Option<Uuid>,
    pub parent_page_id: Option<Uuid>,
    #[serde(default)]
    pub include_deleted: bool,
}

#[derive(Debug, Default, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub q: String,
    pub limit: Option<usize>,
}

// ============================================================================
// Notebook DTOs
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct CreateNotebookRequest {
    pub name: String,
    pub color: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateNotebookRequest {
    pub name: Option<String>,
    pub color: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct NotebookResponse {
    pub id: Uuid,
    pub name: String,
    pub color: String,
    pub created_at: String,
    pub updated_at: String,
    pub deleted_at: Option<String>,
}

impl From<Notebook> for NotebookResponse {
    fn from(notebook: Notebook) -> Self {
        Self {
            id: *notebook.id().as_uuid(),
            name: notebook.name().to_string(),
            color: notebook.color().to_string(),
            created_at: notebook.created_at().to_rfc3339(),
            updated_at: notebook.updated_at().to_rfc3339(),
            deleted_at: notebook.deleted_at().map(|t| t.to_rfc3339()),
        }
    }
}

// ============================================================================
// Section DTOs
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct CreateSectionRequest {
    pub notebook_id: Uuid,
    pub name: String,
    #[serde(default)]
    pub display_order: i32,
}

#[derive(Debug, Deserialize)]
pub struct UpdateSectionRequest {
    pub name: Option<String>,
    pub display_order: Option<i32>,
}

#[derive(Debug, Deserialize)]
pub struct ReorderRequest {
    pub new_order: i32,
}

#[derive(Debug, Serialize)]
pub struct SectionResponse {
    pub id: Uuid,
    pub notebook_id: Uuid,
    pub name: String,
    pub display_order: i32,
    pub created_at: String,
    pub updated_at: String,
    pub deleted_at: Option<String>,
}

impl From<Section> for SectionResponse {
    fn from(section: Section) -> Self {
        Self {
            id: *section.id().as_uuid(),
            notebook_id: *section.notebook_id().as_uuid(),
            name: section.name().to_string(),
            display_order: section.display_order(),
            created_at: section.created_at().to_rfc3339(),
            updated_at: section.updated_at().to_rfc3339(),
            deleted_at: section.deleted_at().map(|t| t.to_rfc3339()),
        }
    }
}

// ============================================================================
// Page DTOs
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct CreatePageRequest {
    pub section_id: Uuid,
    pub title: String,
    #[serde(default)]
    pub content: String,
    pub parent_page_id: Option<Uuid>,
    #[serde(default)]
    pub display_order: i32,
}

#[derive(Debug, Deserialize)]
pub struct UpdatePageRequest {
    pub title: Option<String>,
    pub content: Option<String>,
    pub display_order: Option<i32>,
}

/// parent_page_id 为 null 或缺省表示提升为顶层页面
#[derive(Debug, Deserialize)]
pub struct MovePageRequest {
    #[serde(default)]
    pub parent_page_id: Option<Uuid>,
}

#[derive(Debug, Serialize)]
pub struct PageResponse {
    pub id: Uuid,
    pub section_id: Uuid,
    pub parent_page_id: Option<Uuid>,
    pub title: String,
    pub content: String,
    pub content_plain: String,
    pub display_order: i32,
    pub created_at: String,
    pub updated_at: String,
    pub deleted_at: Option<String>,
}

impl From<Page> for PageResponse {
    fn from(page: Page) -> Self {
        Self {
            id: *page.id().as_uuid(),
            section_id: *page.section_id().as_uuid(),
            parent_page_id: page.parent_page_id().map(|p| *p.as_uuid()),
            title: page.title().to_string(),
            content: page.content().to_string(),
            content_plain: page.content_plain().to_string(),
            display_order: page.display_order(),
            created_at: page.created_at().to_rfc3339(),
            updated_at: page.updated_at().to_rfc3339(),
            deleted_at: page.deleted_at().map(|t| t.to_rfc3339()),
        }
    }
}
