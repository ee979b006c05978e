//! 应用层 - 查询（读操作）
//!
//! CQRS 查询侧：处理所有读操作

mod notebook_queries;
mod page_queries;
mod section_queries;

pub mod handlers;

pub use notebook_queries::*;
pub use page_queries::*;
pub use section_queries::*;
