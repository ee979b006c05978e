//! Section Context - 分区上下文
//!
//! 职责:
//! - 分区实体与不变量（名称、显示顺序、所属笔记本）
//! - 软删除生命周期

mod aggregate;
mod value_objects;

pub use aggregate::{Section, SectionChanges, SECTION_NAME_MAX_CHARS};
pub use value_objects::SectionId;
