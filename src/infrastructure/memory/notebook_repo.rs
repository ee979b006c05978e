//! In-Memory Notebook Repository

use async_trait::async_trait;
use chrono::Utc;
use dashmap::DashMap;

use crate::application::ports::{NotebookRepositoryPort, RepositoryError};
use crate::domain::{Notebook, NotebookId};

/// 内存笔记本仓储
pub struct InMemoryNotebookRepository {
    notebooks: DashMap<NotebookId, Notebook>,
}

impl InMemoryNotebookRepository {
    pub fn new() -> Self {
        Self {
            notebooks: DashMap::new(),
        }
    }
}

impl Default for InMemoryNotebookRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl NotebookRepositoryPort for InMemoryNotebookRepository {
    async fn create(&self, notebook: &Notebook) -> Result<Notebook, RepositoryError> {
        if self.notebooks.contains_key(&notebook.id()) {
            return Err(RepositoryError::Duplicate(notebook.id().to_string()));
        }
        self.notebooks.insert(notebook.id(), notebook.clone());
        tracing::debug!(notebook_id = %notebook.id(), "Notebook stored");
        Ok(notebook.clone())
    }

    async fn get_by_id(&self, id: NotebookId) -> Result<Option<Notebook>, RepositoryError> {
        Ok(self.notebooks.get(&id).map(|n| n.clone()))
    }

    async fn get_all(&self, include_deleted: bool) -> Result<Vec<Notebook>, RepositoryError> {
        let mut notebooks: Vec<Notebook> = self
            .notebooks
            .iter()
            .filter(|n| include_deleted || !n.is_deleted())
            .map(|n| n.clone())
            .collect();
        notebooks.sort_by(|a, b| b.created_at().cmp(&a.created_at()));
        Ok(notebooks)
    }

    async fn update(&self, notebook: &Notebook) -> Result<Notebook, RepositoryError> {
        let mut stored = self
            .notebooks
            .get_mut(&notebook.id())
            .ok_or_else(|| RepositoryError::NotFound(format!("Notebook {}", notebook.id())))?;
        stored.name = notebook.name.clone();
        stored.color = notebook.color.clone();
        stored.updated_at = Utc::now();
        Ok(stored.clone())
    }

    async fn delete(&self, id: NotebookId) -> Result<bool, RepositoryError> {
        match self.notebooks.get_mut(&id) {
            Some(mut notebook) => {
                notebook.soft_delete();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn restore(&self, id: NotebookId) -> Result<bool, RepositoryError> {
        match self.notebooks.get_mut(&id) {
            Some(mut notebook) => {
                notebook.restore();
                Ok(true)
            }
            None => Ok(false),
        }
    }
}
