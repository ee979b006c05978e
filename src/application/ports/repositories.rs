//! Repository Ports - 出站端口
//!
//! 定义数据持久化的抽象接口
//! 具体实现在 infrastructure 层（SQLite / 内存）
//!
//! 约定:
//! - `get_by_id` 找不到时返回 `Ok(None)`，包含已软删除的记录
//! - 列表默认排除已软删除的记录，除非 `include_deleted = true`
//! - 分区/页面列表按 display_order 升序；笔记本列表按创建时间倒序
//! - `update` / `reorder` 在 ID 不存在时返回 `RepositoryError::NotFound`
//! - `delete` / `restore` 在 ID 不存在时返回 `Ok(false)`

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{Notebook, NotebookId, Page, PageId, Section, SectionId};

/// Repository 错误
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Entity not found: {0}")]
    NotFound(String),

    #[error("Duplicate entity: {0}")]
    Duplicate(String),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

// ============================================================================
// Notebook Repository
// ============================================================================

/// Notebook Repository Port
#[async_trait]
pub trait NotebookRepositoryPort: Send + Sync {
    /// 创建笔记本
    async fn create(&self, notebook: &Notebook) -> Result<Notebook, RepositoryError>;

    /// 根据 ID 查找笔记本
    async fn get_by_id(&self, id: NotebookId) -> Result<Option<Notebook>, RepositoryError>;

    /// 获取所有笔记本（新建的在前）
    async fn get_all(&self, include_deleted: bool) -> Result<Vec<Notebook>, RepositoryError>;

    /// 更新笔记本
    async fn update(&self, notebook: &Notebook) -> Result<Notebook, RepositoryError>;

    /// 软删除笔记本
    async fn delete(&self, id: NotebookId) -> Result<bool, RepositoryError>;

    /// 恢复软删除的笔记本
    async fn restore(&self, id: NotebookId) -> Result<bool, RepositoryError>;
}

// ============================================================================
// Section Repository
// ============================================================================

/// Section Repository Port
#[async_trait]
pub trait SectionRepositoryPort: Send + Sync {
    /// 创建分区
    async fn create(&self, section: &Section) -> Result<Section, RepositoryError>;

    /// 根据 ID 查找分区
    async fn get_by_id(&self, id: SectionId) -> Result<Option<Section>, RepositoryError>;

    /// 获取笔记本下的分区
    async fn get_by_notebook_id(
        &self,
        notebook_id: NotebookId,
        include_deleted: bool,
    ) -> Result<Vec<Section>, RepositoryError>;

    /// 获取所有分区
    async fn get_all(&self, include_deleted: bool) -> Result<Vec<Section>, RepositoryError>;

    /// 更新分区
    async fn update(&self, section: &Section) -> Result<Section, RepositoryError>;

    /// 软删除分区
    async fn delete(&self, id: SectionId) -> Result<bool, RepositoryError>;

    /// 恢复软删除的分区
    async fn restore(&self, id: SectionId) -> Result<bool, RepositoryError>;

    /// 更新显示顺序
    async fn reorder(&self, id: SectionId, new_order: i32) -> Result<Section, RepositoryError>;
}

// ============================================================================
// Page Repository
// ============================================================================

/// Page Repository Port
#[async_trait]
pub trait PageRepositoryPort: Send + Sync {
    /// 创建页面
    async fn create(&self, page: &Page) -> Result<Page, RepositoryError>;

    /// 根据 ID 查找页面
    async fn get_by_id(&self, id: PageId) -> Result<Option<Page>, RepositoryError>;

    /// 获取分区下的页面（包括子页面）
    async fn get_by_section_id(
        &self,
        section_id: SectionId,
        include_deleted: bool,
    ) -> Result<Vec<Page>, RepositoryError>;

    /// 获取直接子页面
    async fn get_by_parent_id(
        &self,
        parent_page_id: PageId,
        include_deleted: bool,
    ) -> Result<Vec<Page>, RepositoryError>;

    /// 更新页面（标题、内容、父页面、显示顺序）
    async fn update(&self, page: &Page) -> Result<Page, RepositoryError>;

    /// 软删除页面
    async fn delete(&self, id: PageId) -> Result<bool, RepositoryError>;

    /// 恢复软删除的页面
    async fn restore(&self, id: PageId) -> Result<bool, RepositoryError>;

    /// 更新显示顺序
    async fn reorder(&self, id: PageId, new_order: i32) -> Result<Page, RepositoryError>;

    /// 在未删除页面的标题和 content_plain 中做不区分大小写的子串搜索
    async fn search(&self, text: &str, limit: usize) -> Result<Vec<Page>, RepositoryError>;
}
