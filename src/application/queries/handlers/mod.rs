//! Query Handlers 实现

mod notebook_handlers;
mod page_handlers;
mod section_handlers;

pub use notebook_handlers::*;
pub use page_handlers::*;
pub use section_handlers::*;
