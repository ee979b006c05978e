//! Section Queries

use crate::domain::{NotebookId, SectionId};

/// 列出分区查询，未指定 notebook_id 时返回全部分区
#[derive(Debug, Clone, Default)]
pub struct GetSections {
    pub notebook_id: Option<NotebookId>,
    pub include_deleted: bool,
}

/// 获取分区详情查询
#[derive(Debug, Clone)]
pub struct GetSectionById {
    pub id: SectionId,
}
