//! Notebook Commands

use crate::domain::{NotebookId, DEFAULT_NOTEBOOK_COLOR};

/// 创建笔记本命令
#[derive(Debug, Clone)]
pub struct CreateNotebook {
    pub name: String,
    pub color: String,
}

impl CreateNotebook {
    /// 使用默认颜色
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            color: DEFAULT_NOTEBOOK_COLOR.to_string(),
        }
    }
}

/// 更新笔记本命令（None 字段保持不变）
#[derive(Debug, Clone)]
pub struct UpdateNotebook {
    pub id: NotebookId,
    pub name: Option<String>,
    pub color: Option<String>,
}

/// 删除笔记本命令（软删除）
#[derive(Debug, Clone)]
pub struct DeleteNotebook {
    pub id: NotebookId,
}

/// 恢复笔记本命令
#[derive(Debug, Clone)]
pub struct RestoreNotebook {
    pub id: NotebookId,
}
