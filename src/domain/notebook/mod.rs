//! Notebook Context - 笔记本上下文
//!
//! 职责:
//! - 笔记本实体与不变量（名称、颜色）
//! - 软删除生命周期

mod aggregate;
mod value_objects;

pub use aggregate::{Notebook, NotebookChanges, DEFAULT_NOTEBOOK_COLOR, NOTEBOOK_NAME_MAX_CHARS};
pub use value_objects::{is_hex_color, NotebookId};
