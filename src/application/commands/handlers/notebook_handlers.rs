//! Notebook Command Handlers

use std::sync::Arc;

use crate::application::commands::{CreateNotebook, DeleteNotebook, RestoreNotebook, UpdateNotebook};
use crate::application::error::ApplicationError;
use crate::application::lookup::load_notebook;
use crate::application::ports::NotebookRepositoryPort;
use crate::application::result::{ServiceResult, Success};
use crate::domain::{Notebook, NotebookChanges};

// ============================================================================
// CreateNotebook
// ============================================================================

/// CreateNotebook Handler
pub struct CreateNotebookHandler {
    notebook_repo: Arc<dyn NotebookRepositoryPort>,
}

impl CreateNotebookHandler {
    pub fn new(notebook_repo: Arc<dyn NotebookRepositoryPort>) -> Self {
        Self { notebook_repo }
    }

    pub async fn handle(&self, command: CreateNotebook) -> ServiceResult<Notebook> {
        let notebook = Notebook::new(command.name.trim(), command.color);

        if let Err(e) = notebook.validate() {
            tracing::warn!(field = e.field, error = %e, "Notebook rejected");
            return Err(e.into());
        }

        let created = self.notebook_repo.create(&notebook).await.map_err(|e| {
            tracing::error!(error = %e, "Failed to create notebook");
            ApplicationError::persistence("create notebook", e)
        })?;

        tracing::info!(
            notebook_id = %created.id(),
            name = %created.name(),
            "Notebook created"
        );

        Ok(Success::new(created, "Notebook created successfully"))
    }
}

// ============================================================================
// UpdateNotebook
// ============================================================================

/// UpdateNotebook Handler
pub struct UpdateNotebookHandler {
    notebook_repo: Arc<dyn NotebookRepositoryPort>,
}

impl UpdateNotebookHandler {
    pub fn new(notebook_repo: Arc<dyn NotebookRepositoryPort>) -> Self {
        Self { notebook_repo }
    }

    pub async fn handle(&self, command: UpdateNotebook) -> ServiceResult<Notebook> {
        let current = load_notebook(self.notebook_repo.as_ref(), command.id).await?;

        let next = current.with_changes(NotebookChanges {
            name: command.name.map(|n| n.trim().to_string()),
            color: command.color,
        });
        next.validate()?;

        let updated = self.notebook_repo.update(&next).await.map_err(|e| {
            tracing::error!(notebook_id = %command.id, error = %e, "Failed to update notebook");
            ApplicationError::persistence("update notebook", e)
        })?;

        tracing::info!(notebook_id = %command.id, "Notebook updated");

        Ok(Success::new(updated, "Notebook updated successfully"))
    }
}

// ============================================================================
// DeleteNotebook
// ============================================================================

/// DeleteNotebook Handler
///
/// 笔记本删除不做级联检查
pub struct DeleteNotebookHandler {
    notebook_repo: Arc<dyn NotebookRepositoryPort>,
}

impl DeleteNotebookHandler {
    pub fn new(notebook_repo: Arc<dyn NotebookRepositoryPort>) -> Self {
        Self { notebook_repo }
    }

    pub async fn handle(&self, command: DeleteNotebook) -> ServiceResult<()> {
        let notebook = load_notebook(self.notebook_repo.as_ref(), command.id).await?;

        self.notebook_repo
            .delete(command.id)
            .await
            .map_err(|e| ApplicationError::persistence("delete notebook", e))?;

        tracing::info!(
            notebook_id = %command.id,
            name = %notebook.name(),
            "Notebook deleted"
        );

        Ok(Success::new((), "Notebook deleted successfully"))
    }
}

// ============================================================================
// RestoreNotebook
// ============================================================================

/// RestoreNotebook Handler
pub struct RestoreNotebookHandler {
    notebook_repo: Arc<dyn NotebookRepositoryPort>,
}

impl RestoreNotebookHandler {
    pub fn new(notebook_repo: Arc<dyn NotebookRepositoryPort>) -> Self {
        Self { notebook_repo }
    }

    pub async fn handle(&self, command: RestoreNotebook) -> ServiceResult<Notebook> {
        let notebook = load_notebook(self.notebook_repo.as_ref(), command.id).await?;
        if !notebook.is_deleted() {
            return Ok(Success::new(notebook, "Notebook is not deleted"));
        }

        self.notebook_repo
            .restore(command.id)
            .await
            .map_err(|e| ApplicationError::persistence("restore notebook", e))?;

        let restored = load_notebook(self.notebook_repo.as_ref(), command.id).await?;
        tracing::info!(notebook_id = %command.id, "Notebook restored");

        Ok(Success::new(restored, "Notebook restored successfully"))
    }
}
