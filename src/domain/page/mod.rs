//! Page Context - 页面上下文
//!
//! 职责:
//! - 页面实体与不变量（标题、所属分区、显示顺序）
//! - 子页面自引用关系
//! - content_plain 派生（见 domain::content）

mod aggregate;
mod value_objects;

pub use aggregate::{Page, PageChanges, PAGE_TITLE_MAX_CHARS};
pub use value_objects::PageId;
