//! Application State
//!
//! 包含所有 Command/Query Handlers 的应用状态

use std::sync::Arc;

use crate::application::{
    // Command handlers
    CreateNotebookHandler, CreatePageHandler, CreateSectionHandler, DeleteNotebookHandler,
    DeletePageHandler, DeleteSectionHandler, MovePageHandler, ReorderPageHandler,
    ReorderSectionHandler, RestoreNotebookHandler, RestorePageHandler, RestoreSectionHandler,
    UpdateNotebookHandler, UpdatePageHandler, UpdateSectionHandler,
    // Query handlers
    GetNotebookByIdHandler, GetNotebooksHandler, GetPageByIdHandler, GetPagesHandler,
    GetSectionByIdHandler, GetSectionsHandler, SearchPagesHandler,
    // Ports
    NotebookRepositoryPort, PageRepositoryPort, SectionRepositoryPort, DEFAULT_SEARCH_LIMIT,
};

/// 应用状态
pub struct AppState {
    /// 未指定 limit 时的搜索结果数量
    pub search_limit: usize,

    // ========== Notebook ==========
    pub create_notebook_handler: CreateNotebookHandler,
    pub update_notebook_handler: UpdateNotebookHandler,
    pub delete_notebook_handler: DeleteNotebookHandler,
    pub restore_notebook_handler: RestoreNotebookHandler,
    pub get_notebooks_handler: GetNotebooksHandler,
    pub get_notebook_handler: GetNotebookByIdHandler,

    // ========== Section ==========
    pub create_section_handler: CreateSectionHandler,
    pub update_section_handler: UpdateSectionHandler,
    pub delete_section_handler: DeleteSectionHandler,
    pub restore_section_handler: RestoreSectionHandler,
    pub reorder_section_handler: ReorderSectionHandler,
    pub get_sections_handler: GetSectionsHandler,
    pub get_section_handler: GetSectionByIdHandler,

    // ========== Page ==========
    pub create_page_handler: CreatePageHandler,
    pub update_page_handler: UpdatePageHandler,
    pub delete_page_handler: DeletePageHandler,
    pub restore_page_handler: RestorePageHandler,
    pub reorder_page_handler: ReorderPageHandler,
    pub move_page_handler: MovePageHandler,
    pub get_pages_handler: GetPagesHandler,
    pub get_page_handler: GetPageByIdHandler,
    pub search_pages_handler: SearchPagesHandler,
}

impl AppState {
    /// 创建应用状态
    pub fn new(
        notebook_repo: Arc<dyn NotebookRepositoryPort>,
        section_repo: Arc<dyn SectionRepositoryPort>,
        page_repo: Arc<dyn PageRepositoryPort>,
    ) -> Self {
        Self {
            search_limit: DEFAULT_SEARCH_LIMIT,

            // Notebook
            create_notebook_handler: CreateNotebookHandler::new(notebook_repo.clone()),
            update_notebook_handler: UpdateNotebookHandler::new(notebook_repo.clone()),
            delete_notebook_handler: DeleteNotebookHandler::new(notebook_repo.clone()),
            restore_notebook_handler: RestoreNotebookHandler::new(notebook_repo.clone()),
            get_notebooks_handler: GetNotebooksHandler::new(notebook_repo.clone()),
            get_notebook_handler: GetNotebookByIdHandler::new(notebook_repo.clone()),

            // Section
            create_section_handler: CreateSectionHandler::new(
                notebook_repo.clone(),
                section_repo.clone(),
            ),
            update_section_handler: UpdateSectionHandler::new(section_repo.clone()),
            delete_section_handler: DeleteSectionHandler::new(
                section_repo.clone(),
                page_repo.clone(),
            ),
            restore_section_handler: RestoreSectionHandler::new(
                notebook_repo.clone(),
                section_repo.clone(),
            ),
            reorder_section_handler: ReorderSectionHandler::new(section_repo.clone()),
            get_sections_handler: GetSectionsHandler::new(section_repo.clone()),
            get_section_handler: GetSectionByIdHandler::new(section_repo.clone()),

            // Page
            create_page_handler: CreatePageHandler::new(section_repo.clone(), page_repo.clone()),
            update_page_handler: UpdatePageHandler::new(page_repo.clone()),
            delete_page_handler: DeletePageHandler::new(page_repo.clone()),
            restore_page_handler: RestorePageHandler::new(section_repo, page_repo.clone()),
            reorder_page_handler: ReorderPageHandler::new(page_repo.clone()),
            move_page_handler: MovePageHandler::new(page_repo.clone()),
            get_pages_handler: GetPagesHandler::new(page_repo.clone()),
            get_page_handler: GetPageByIdHandler::new(page_repo.clone()),
            search_pages_handler: SearchPagesHandler::new(page_repo),
        }
    }

    /// 设置默认搜索数量
    pub fn with_search_limit(mut self, limit: usize) -> Self {
        self.search_limit = limit;
        self
    }
}
