//! 应用层 - 命令（写操作）
//!
//! CQRS 命令侧：处理所有写操作

mod notebook_commands;
mod page_commands;
mod section_commands;

pub mod handlers;

pub use notebook_commands::*;
pub use page_commands::*;
pub use section_commands::*;
