//! In-Memory Section Repository

use async_trait::async_trait;
use chrono::Utc;
use dashmap::DashMap;

use crate::application::ports::{RepositoryError, SectionRepositoryPort};
use crate::domain::{NotebookId, Section, SectionId};

/// 内存分区仓储
pub struct InMemorySectionRepository {
    sections: DashMap<SectionId, Section>,
}

impl InMemorySectionRepository {
    pub fn new() -> Self {
        Self {
            sections: DashMap::new(),
        }
    }

    fn collect_sorted(&self, filter: impl Fn(&Section) -> bool) -> Vec<Section> {
        let mut sections: Vec<Section> = self
            .sections
            .iter()
            .filter(|s| filter(s.value()))
            .map(|s| s.clone())
            .collect();
        sections.sort_by(|a, b| {
            a.display_order()
                .cmp(&b.display_order())
                .then(a.created_at().cmp(&b.created_at()))
        });
        sections
    }
}

impl Default for InMemorySectionRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SectionRepositoryPort for InMemorySectionRepository {
    async fn create(&self, section: &Section) -> Result<Section, RepositoryError> {
        if self.sections.contains_key(&section.id()) {
            return Err(RepositoryError::Duplicate(section.id().to_string()));
        }
        self.sections.insert(section.id(), section.clone());
        Ok(section.clone())
    }

    async fn get_by_id(&self, id: SectionId) -> Result<Option<Section>, RepositoryError> {
        Ok(self.sections.get(&id).map(|s| s.clone()))
    }

    async fn get_by_notebook_id(
        &self,
        notebook_id: NotebookId,
        include_deleted: bool,
    ) -> Result<Vec<Section>, RepositoryError> {
        Ok(self.collect_sorted(|s| {
            s.notebook_id() == notebook_id && (include_deleted || !s.is_deleted())
        }))
    }

    async fn get_all(&self, include_deleted: bool) -> Result<Vec<Section>, RepositoryError> {
        Ok(self.collect_sorted(|s| include_deleted || !s.is_deleted()))
    }

    async fn update(&self, section: &Section) -> Result<Section, RepositoryError> {
        let mut stored = self
            .sections
            .get_mut(&section.id())
            .ok_or_else(|| RepositoryError::NotFound(format!("Section {}", section.id())))?;
        stored.name = section.name.clone();
        stored.display_order = section.display_order;
        stored.updated_at = Utc::now();
        Ok(stored.clone())
    }

    async fn delete(&self, id: SectionId) -> Result<bool, RepositoryError> {
        match self.sections.get_mut(&id) {
            Some(mut section) => {
                section.soft_delete();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn restore(&self, id: SectionId) -> Result<bool, RepositoryError> {
        match self.sections.get_mut(&id) {
            Some(mut section) => {
                section.restore();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn reorder(&self, id: SectionId, new_order: i32) -> Result<Section, RepositoryError> {
        let mut stored = self
            .sections
            .get_mut(&id)
            .ok_or_else(|| RepositoryError::NotFound(format!("Section {}", id)))?;
        stored.display_order = new_order;
        stored.updated_at = Utc::now();
        Ok(stored.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_sections_ordered_by_display_order() {
        let repo = InMemorySectionRepository::new();
        let notebook_id = NotebookId::new();
        repo.create(&Section::new(notebook_id, "third", 3)).await.unwrap();
        repo.create(&Section::new(notebook_id, "first", 1)).await.unwrap();
        repo.create(&Section::new(NotebookId::new(), "other", 0)).await.unwrap();

        let sections = repo.get_by_notebook_id(notebook_id, false).await.unwrap();
        let names: Vec<&str> = sections.iter().map(|s| s.name()).collect();
        assert_eq!(names, vec!["first", "third"]);
        assert_eq!(repo.get_all(false).await.unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_reorder_missing_fails() {
        let repo = InMemorySectionRepository::new();
        let result = repo.reorder(SectionId::new(), 2).await;
        assert!(matches!(result, Err(RepositoryError::NotFound(_))));
    }
}
