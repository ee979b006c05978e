//! 应用层 - 用例编排
//!
//! 包含：
//! - ports: 仓储端口定义（Notebook / Section / Page）
//! - commands: CQRS 命令及处理器
//! - queries: CQRS 查询及处理器
//! - error / result: 统一的处理器返回类型

pub mod commands;
pub mod error;
pub mod ports;
pub mod queries;
pub mod result;

mod lookup;

#[cfg(test)]
pub(crate) mod test_support;

// Re-exports
pub use commands::{
    // Notebook commands
    CreateNotebook,
    DeleteNotebook,
    RestoreNotebook,
    UpdateNotebook,
    // Section commands
    CreateSection,
    DeleteSection,
    ReorderSection,
    RestoreSection,
    UpdateSection,
    // Page commands
    CreatePage,
    DeletePage,
    MovePage,
    ReorderPage,
    RestorePage,
    UpdatePage,
    // Handlers
    handlers::{
        CreateNotebookHandler, CreatePageHandler, CreateSectionHandler, DeleteNotebookHandler,
        DeletePageHandler, DeleteSectionHandler, MovePageHandler, ReorderPageHandler,
        ReorderSectionHandler, RestoreNotebookHandler, RestorePageHandler, RestoreSectionHandler,
        UpdateNotebookHandler, UpdatePageHandler, UpdateSectionHandler,
    },
};

pub use error::{ApplicationError, ErrorKind, FieldError};

pub use ports::{NotebookRepositoryPort, PageRepositoryPort, RepositoryError, SectionRepositoryPort};

pub use queries::{
    GetNotebookById,
    GetNotebooks,
    GetPageById,
    GetPages,
    GetSectionById,
    GetSections,
    SearchPages,
    DEFAULT_SEARCH_LIMIT,
    // Handlers
    handlers::{
        GetNotebookByIdHandler, GetNotebooksHandler, GetPageByIdHandler, GetPagesHandler,
        GetSectionByIdHandler, GetSectionsHandler, SearchPagesHandler,
    },
};

pub use result::{ServiceResult, Success};
