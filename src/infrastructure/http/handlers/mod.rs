//! HTTP Handlers

mod notebook;
mod page;
mod ping;
mod search;
mod section;

pub use notebook::*;
pub use page::*;
pub use ping::*;
pub use search::*;
pub use section::*;
