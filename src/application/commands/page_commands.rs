//! Page Commands

use crate::domain::{PageId, SectionId};

/// 创建页面命令
#[derive(Debug, Clone)]
pub struct CreatePage {
    pub section_id: SectionId,
    pub title: String,
    pub content: String,
    pub parent_page_id: Option<PageId>,
    pub display_order: i32,
}

/// 更新页面命令
///
/// content 变化时 content_plain 会被重新派生
#[derive(Debug, Clone)]
pub struct UpdatePage {
    pub id: PageId,
    pub title: Option<String>,
    pub content: Option<String>,
    pub display_order: Option<i32>,
}

/// 删除页面命令（存在未删除子页面时拒绝）
#[derive(Debug, Clone)]
pub struct DeletePage {
    pub id: PageId,
}

/// 恢复页面命令
#[derive(Debug, Clone)]
pub struct RestorePage {
    pub id: PageId,
}

/// 调整页面显示顺序命令
#[derive(Debug, Clone)]
pub struct ReorderPage {
    pub page_id: PageId,
    pub new_order: i32,
}

/// 移动页面命令：挂到新的父页面下，None 表示提升为顶层页面
#[derive(Debug, Clone)]
pub struct MovePage {
    pub page_id: PageId,
    pub parent_page_id: Option<PageId>,
}
