//! Page Query Handlers

use std::sync::Arc;

use crate::application::error::ApplicationError;
use crate::application::lookup::load_page;
use crate::application::ports::PageRepositoryPort;
use crate::application::queries::{GetPageById, GetPages, SearchPages};
use crate::application::result::{ServiceResult, Success};
use crate::domain::Page;

/// GetPages Handler
///
/// section_id 优先，其次 parent_page_id，都没有时返回空列表
pub struct GetPagesHandler {
    page_repo: Arc<dyn PageRepositoryPort>,
}

impl GetPagesHandler {
    pub fn new(page_repo: Arc<dyn PageRepositoryPort>) -> Self {
        Self { page_repo }
    }

    pub async fn handle(&self, query: GetPages) -> ServiceResult<Vec<Page>> {
        let pages = match (query.section_id, query.parent_page_id) {
            (Some(section_id), _) => {
                self.page_repo
                    .get_by_section_id(section_id, query.include_deleted)
                    .await
            }
            (None, Some(parent_page_id)) => {
                self.page_repo
                    .get_by_parent_id(parent_page_id, query.include_deleted)
                    .await
            }
            (None, None) => Ok(Vec::new()),
        }
        .map_err(|e| ApplicationError::persistence("get pages", e))?;

        let message = format!("Retrieved {} pages", pages.len());
        Ok(Success::new(pages, message))
    }
}

/// GetPageById Handler
pub struct GetPageByIdHandler {
    page_repo: Arc<dyn PageRepositoryPort>,
}

impl GetPageByIdHandler {
    pub fn new(page_repo: Arc<dyn PageRepositoryPort>) -> Self {
        Self { page_repo }
    }

    pub async fn handle(&self, query: GetPageById) -> ServiceResult<Page> {
        let page = load_page(self.page_repo.as_ref(), query.id).await?;
        Ok(Success::new(page, "Page retrieved successfully"))
    }
}

/// SearchPages Handler
pub struct SearchPagesHandler {
    page_repo: Arc<dyn PageRepositoryPort>,
}

impl SearchPagesHandler {
    pub fn new(page_repo: Arc<dyn PageRepositoryPort>) -> Self {
        Self { page_repo }
    }

    pub async fn handle(&self, query: SearchPages) -> ServiceResult<Vec<Page>> {
        let text = query.text.trim();
        if text.is_empty() {
            return Ok(Success::new(Vec::new(), "Found 0 pages"));
        }

        let pages = self
            .page_repo
            .search(text, query.limit)
            .await
            .map_err(|e| ApplicationError::persistence("search pages", e))?;

        tracing::debug!(query = %text, hits = pages.len(), "Page search");

        let message = format!("Found {} pages", pages.len());
        Ok(Success::new(pages, message))
    }
}
