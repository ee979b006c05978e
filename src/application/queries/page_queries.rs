//! Page Queries

use crate::domain::{PageId, SectionId};

/// 默认搜索结果数量
pub const DEFAULT_SEARCH_LIMIT: usize = 50;

/// 列出页面查询
///
/// section_id 优先于 parent_page_id；两者都未设置时返回空列表
#[derive(Debug, Clone, Default)]
pub struct GetPages {
    pub section_id: Option<SectionId>,
    pub parent_page_id: Option<PageId>,
    pub include_deleted: bool,
}

/// 获取页面详情查询
#[derive(Debug, Clone)]
pub struct GetPageById {
    pub id: PageId,
}

/// 纯文本搜索查询
#[derive(Debug, Clone)]
pub struct SearchPages {
    pub text: String,
    pub limit: usize,
}

impl SearchPages {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            limit: DEFAULT_SEARCH_LIMIT,
        }
    }
}
