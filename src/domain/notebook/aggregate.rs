//! Notebook Context - Aggregate Root

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{is_hex_color, NotebookId};
use crate::domain::errors::ValidationError;

/// 默认笔记本颜色
pub const DEFAULT_NOTEBOOK_COLOR: &str = "#0078D4";

/// 笔记本名称最大字符数
pub const NOTEBOOK_NAME_MAX_CHARS: usize = 100;

/// Notebook 聚合根
///
/// 不变量:
/// - 名称非空（不能只有空白），不超过 100 字符
/// - 颜色（如果设置）必须是 `#RRGGBB`
/// - deleted_at 非空即视为已删除
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notebook {
    pub(crate) id: NotebookId,
    pub(crate) name: String,
    pub(crate) color: String,
    pub(crate) created_at: DateTime<Utc>,
    pub(crate) updated_at: DateTime<Utc>,
    pub(crate) deleted_at: Option<DateTime<Utc>>,
}

/// 笔记本部分更新：None 表示字段保持不变
#[derive(Debug, Clone, Default)]
pub struct NotebookChanges {
    pub name: Option<String>,
    pub color: Option<String>,
}

impl Notebook {
    /// 创建新笔记本（生成新 ID）
    pub fn new(name: impl Into<String>, color: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: NotebookId::new(),
            name: name.into(),
            color: color.into(),
            created_at: now,
            updated_at: now,
            deleted_at: None,
        }
    }

    /// 基于当前值派生一个应用了变更的新笔记本，原值不变
    pub fn with_changes(&self, changes: NotebookChanges) -> Self {
        let mut next = self.clone();
        if let Some(name) = changes.name {
            next.name = name;
        }
        if let Some(color) = changes.color {
            next.color = color;
        }
        next.updated_at = Utc::now();
        next
    }

    /// 校验不变量，返回第一个被违反的规则
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::new("name", "Notebook name cannot be empty"));
        }
        if self.name.chars().count() > NOTEBOOK_NAME_MAX_CHARS {
            return Err(ValidationError::new(
                "name",
                "Notebook name cannot exceed 100 characters",
            ));
        }
        if !self.color.is_empty() && !is_hex_color(&self.color) {
            return Err(ValidationError::new(
                "color",
                "Color must be a valid hex color (#RRGGBB)",
            ));
        }
        Ok(())
    }

    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }

    /// 软删除：记录删除时间
    pub fn soft_delete(&mut self) {
        self.deleted_at = Some(Utc::now());
    }

    /// 恢复软删除
    pub fn restore(&mut self) {
        self.deleted_at = None;
    }

    // Getters
    pub fn id(&self) -> NotebookId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn color(&self) -> &str {
        &self.color
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
