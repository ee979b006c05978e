//! Page Context - Aggregate Root

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::PageId;
use crate::domain::content::extract_plain_text;
use crate::domain::errors::ValidationError;
use crate::domain::section::SectionId;

/// 页面标题最大字符数
pub const PAGE_TITLE_MAX_CHARS: usize = 255;

/// Page 聚合根
///
/// 不变量:
/// - 必须属于一个分区
/// - 标题非空，不超过 255 字符
/// - display_order >= 0
/// - content_plain 始终由 content 派生，不能单独设置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page {
    pub(crate) id: PageId,
    pub(crate) section_id: SectionId,
    pub(crate) parent_page_id: Option<PageId>,
    pub(crate) title: String,
    pub(crate) content: String,
    pub(crate) content_plain: String,
    pub(crate) display_order: i32,
    pub(crate) created_at: DateTime<Utc>,
    pub(crate) updated_at: DateTime<Utc>,
    pub(crate) deleted_at: Option<DateTime<Utc>>,
}

/// 页面部分更新
///
/// 提供 content 时会重新派生 content_plain
#[derive(Debug, Clone, Default)]
pub struct PageChanges {
    pub title: Option<String>,
    pub content: Option<String>,
    pub display_order: Option<i32>,
}

impl Page {
    pub fn new(
        section_id: SectionId,
        title: impl Into<String>,
        content: impl Into<String>,
        parent_page_id: Option<PageId>,
        display_order: i32,
    ) -> Self {
        let content = content.into();
        let now = Utc::now();
        Self {
            id: PageId::new(),
            section_id,
            parent_page_id,
            title: title.into(),
            content_plain: extract_plain_text(&content),
            content,
            display_order,
            created_at: now,
            updated_at: now,
            deleted_at: None,
        }
    }

    /// 派生应用了变更的新页面
    pub fn with_changes(&self, changes: PageChanges) -> Self {
        let mut next = self.clone();
        if let Some(title) = changes.title {
            next.title = title;
        }
        if let Some(content) = changes.content {
            next.content_plain = extract_plain_text(&content);
            next.content = content;
        }
        if let Some(display_order) = changes.display_order {
            next.display_order = display_order;
        }
        next.updated_at = Utc::now();
        next
    }

    /// 派生挂到新父页面下（None 表示提升为顶层页面）的新页面
    pub fn with_parent(&self, parent_page_id: Option<PageId>) -> Self {
        let mut next = self.clone();
        next.parent_page_id = parent_page_id;
        next.updated_at = Utc::now();
        next
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.title.trim().is_empty() {
            return Err(ValidationError::new("title", "Page title cannot be empty"));
        }
        if self.title.chars().count() > PAGE_TITLE_MAX_CHARS {
            return Err(ValidationError::new(
                "title",
                "Page title cannot exceed 255 characters",
            ));
        }
        if self.section_id.is_nil() {
            return Err(ValidationError::new(
                "section_id",
                "Page must belong to a section",
            ));
        }
        if self.display_order < 0 {
            return Err(ValidationError::new(
                "display_order",
                "Display order must be non-negative",
            ));
        }
        Ok(())
    }

    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }

    pub fn is_subpage(&self) -> bool {
        self.parent_page_id.is_some()
    }

    pub fn soft_delete(&mut self) {
        self.deleted_at = Some(Utc::now());
    }

    pub fn restore(&mut self) {
        self.deleted_at = None;
    }

    // Getters
    pub fn id(&self) -> PageId {
        self.id
    }

    pub fn section_id(&self) -> SectionId {
        self.section_id
    }

    pub fn parent_page_id(&self) -> Option<PageId> {
        self.parent_page_id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn content_plain(&self) -> &str {
        &self.content_plain
    }

    pub fn display_order(&self) -> i32 {
        self.display_order
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    pub fn deleted_at(&self) -> Option<DateTime<Utc>> {
        self.deleted_at
    }
}
