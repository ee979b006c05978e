//! Section Context - Aggregate Root

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::SectionId;
use crate::domain::errors::ValidationError;
use crate::domain::notebook::NotebookId;

/// 分区名称最大字符数
pub const SECTION_NAME_MAX_CHARS: usize = 100;

/// Section 聚合根
///
/// 不变量:
/// - 必须属于一个笔记本
/// - 名称非空，不超过 100 字符
/// - display_order >= 0
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    pub(crate) id: SectionId,
    pub(crate) notebook_id: NotebookId,
    pub(crate) name: String,
    pub(crate) display_order: i32,
    pub(crate) created_at: DateTime<Utc>,
    pub(crate) updated_at: DateTime<Utc>,
    pub(crate) deleted_at: Option<DateTime<Utc>>,
}

/// 分区部分更新
#[derive(Debug, Clone, Default)]
pub struct SectionChanges {
    pub name: Option<String>,
    pub display_order: Option<i32>,
}

impl Section {
    pub fn new(notebook_id: NotebookId, name: impl Into<String>, display_order: i32) -> Self {
        let now = Utc::now();
        Self {
            id: SectionId::new(),
            notebook_id,
            name: name.into(),
            display_order,
            created_at: now,
            updated_at: now,
            deleted_at: None,
        }
    }

    /// 派生应用了变更的新分区
    pub fn with_changes(&self, changes: SectionChanges) -> Self {
        let mut next = self.clone();
        if let Some(name) = changes.name {
            next.name = name;
        }
        if let Some(display_order) = changes.display_order {
            next.display_order = display_order;
        }
        next.updated_at = Utc::now();
        next
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::new("name", "Section name cannot be empty"));
        }
        if self.name.chars().count() > SECTION_NAME_MAX_CHARS {
            return Err(ValidationError::new(
                "name",
                "Section name cannot exceed 100 characters",
            ));
        }
        if self.display_order < 0 {
            return Err(ValidationError::new(
                "display_order",
                "Display order must be non-negative",
            ));
        }
        if self.notebook_id.is_nil() {
            return Err(ValidationError::new(
                "notebook_id",
                "Section must belong to a notebook",
            ));
        }
        Ok(())
    }

    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }

    pub fn soft_delete(&mut self) {
        self.deleted_at = Some(Utc::now());
    }

    pub fn restore(&mut self) {
        self.deleted_at = None;
    }

    // Getters
    pub fn id(&self) -> SectionId {
        self.id
    }

    pub fn notebook_id(&self) -> NotebookId {
        self.notebook_id
    }

    pub fn name(&self) -> &str {
        &self.name
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

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[test]
    fn test_section_creation() {
        let section = Section::new(NotebookId::new(), "Ideas", 0);
        assert!(section.validate().is_ok());
        assert_eq!(section.display_order(), 0);
    }

    #[test]
    fn test_rejects_negative_order() {
        let section = Section::new(NotebookId::new(), "Ideas", -1);
        let err = section.validate().unwrap_err();
        assert_eq!(err.field, "display_order");
        assert_eq!(err.message, "Display order must be non-negative");
    }

    #[test]
    fn test_rejects_blank_and_long_name() {
        let blank = Section::new(NotebookId::new(), "\t \n", 0);
        assert_eq!(blank.validate().unwrap_err().message, "Section name cannot be empty");

        let long = Section::new(NotebookId::new(), "s".repeat(101), 0);
        assert_eq!(
            long.validate().unwrap_err().message,
            "Section name cannot exceed 100 characters"
        );
    }

    #[test]
    fn test_requires_notebook() {
        let section = Section::new(NotebookId::from_uuid(Uuid::nil()), "Ideas", 0);
        assert_eq!(section.validate().unwrap_err().field, "notebook_id");
    }

    #[test]
    fn test_with_changes_partial() {
        let section = Section::new(NotebookId::new(), "Ideas", 2);
        let renamed = section.with_changes(SectionChanges {
            name: Some("Plans".to_string()),
            display_order: None,
        });
        assert_eq!(renamed.name(), "Plans");
        assert_eq!(renamed.display_order(), 2);
        assert_eq!(section.name(), "Ideas");
    }

    #[test]
    fn test_soft_delete_lifecycle() {
        let mut section = Section::new(NotebookId::new(), "Ideas", 0);
        section.soft_delete();
        section.soft_delete();
        assert!(section.is_deleted());
        section.restore();
        section.restore();
        assert!(section.deleted_at().is_none());
    }
}
