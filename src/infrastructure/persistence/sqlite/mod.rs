//! SQLite Persistence - SQLite 数据库持久化实现

mod database;
mod notebook_repo;
mod page_repo;
mod section_repo;

pub use database::*;
pub use notebook_repo::*;
pub use page_repo::*;
pub use section_repo::*;
