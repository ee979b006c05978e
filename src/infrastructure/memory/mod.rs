//! Memory Layer - 内存仓储实现
//!
//! 基于 DashMap 的仓储适配器，语义与 SQLite 实现一致，
//! 用于 `database.backend = "memory"` 以及测试

mod notebook_repo;
mod page_repo;
mod section_repo;

pub use notebook_repo::InMemoryNotebookRepository;
pub use page_repo::InMemoryPageRepository;
pub use section_repo::InMemorySectionRepository;
