//! Notebook Query Handlers

use std::sync::Arc;

use crate::application::error::ApplicationError;
use crate::application::lookup::load_notebook;
use crate::application::ports::NotebookRepositoryPort;
use crate::application::queries::{GetNotebookById, GetNotebooks};
use crate::application::result::{ServiceResult, Success};
use crate::domain::Notebook;

/// GetNotebooks Handler
pub struct GetNotebooksHandler {
    notebook_repo: Arc<dyn NotebookRepositoryPort>,
}

impl GetNotebooksHandler {
    pub fn new(notebook_repo: Arc<dyn NotebookRepositoryPort>) -> Self {
        Self { notebook_repo }
    }

    pub async fn handle(&self, query: GetNotebooks) -> ServiceResult<Vec<Notebook>> {
        let notebooks = self
            .notebook_repo
            .get_all(query.include_deleted)
            .await
            .map_err(|e| ApplicationError::persistence("get notebooks", e))?;

        let message = format!("Retrieved {} notebooks", notebooks.len());
        Ok(Success::new(notebooks, message))
    }
}

/// GetNotebookById Handler
pub struct GetNotebookByIdHandler {
    notebook_repo: Arc<dyn NotebookRepositoryPort>,
}

impl GetNotebookByIdHandler {
    pub fn new(notebook_repo: Arc<dyn NotebookRepositoryPort>) -> Self {
        Self { notebook_repo }
    }

    pub async fn handle(&self, query: GetNotebookById) -> ServiceResult<Notebook> {
        let notebook = load_notebook(self.notebook_repo.as_ref(), query.id).await?;
        Ok(Success::new(notebook, "Notebook retrieved successfully"))
    }
}
