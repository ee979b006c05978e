//! Notebook Queries

use crate::domain::NotebookId;

/// 列出笔记本查询
#[derive(Debug, Clone, Default)]
pub struct GetNotebooks {
    pub include_deleted: bool,
}

/// 获取笔记本详情查询
#[derive(Debug, Clone)]
pub struct GetNotebookById {
    pub id: NotebookId,
}
