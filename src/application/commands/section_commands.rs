//! Section Commands

use crate::domain::{NotebookId, SectionId};

/// 创建分区命令
#[derive(Debug, Clone)]
pub struct CreateSection {
    pub notebook_id: NotebookId,
    pub name: String,
    pub display_order: i32,
}

/// 更新分区命令
#[derive(Debug, Clone)]
pub struct UpdateSection {
    pub id: SectionId,
    pub name: Option<String>,
    pub display_order: Option<i32>,
}

/// 删除分区命令（存在未删除页面时拒绝）
#[derive(Debug, Clone)]
pub struct DeleteSection {
    pub id: SectionId,
}

/// 恢复分区命令
#[derive(Debug, Clone)]
pub struct RestoreSection {
    pub id: SectionId,
}

/// 调整分区显示顺序命令
#[derive(Debug, Clone)]
pub struct ReorderSection {
    pub section_id: SectionId,
    pub new_order: i32,
}
