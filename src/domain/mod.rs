//! Domain Layer - 领域层
//!
//! 包含三个层级的上下文:
//! - Notebook Context: 笔记本（顶层容器）
//! - Section Context: 分区（隶属于笔记本）
//! - Page Context: 页面（隶属于分区，可嵌套子页面）
//!
//! 领域对象只负责自身不变量校验与软删除生命周期，
//! 持久化与跨实体检查由应用层负责。

mod identity;

pub mod content;
pub mod errors;
pub mod notebook;
pub mod page;
pub mod section;

pub use content::extract_plain_text;
pub use errors::ValidationError;
pub use notebook::{Notebook, NotebookChanges, NotebookId, DEFAULT_NOTEBOOK_COLOR};
pub use page::{Page, PageChanges, PageId};
pub use section::{Section, SectionChanges, SectionId};
