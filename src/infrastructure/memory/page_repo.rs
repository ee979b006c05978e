//! In-Memory Page Repository

use async_trait::async_trait;
use chrono::Utc;
use dashmap::DashMap;

use crate::application::ports::{PageRepositoryPort, RepositoryError};
use crate::domain::{Page, PageId, SectionId};

/// 内存页面仓储
pub struct InMemoryPageRepository {
    pages: DashMap<PageId, Page>,
}

impl InMemoryPageRepository {
    pub fn new() -> Self {
        Self {
            pages: DashMap::new(),
        }
    }

    fn collect_sorted(&self, filter: impl Fn(&Page) -> bool) -> Vec<Page> {
        let mut pages: Vec<Page> = self
            .pages
            .iter()
            .filter(|p| filter(p.value()))
            .map(|p| p.clone())
            .collect();
        pages.sort_by(|a, b| {
            a.display_order()
                .cmp(&b.display_order())
                .then(a.created_at().cmp(&b.created_at()))
        });
        pages
    }
}

impl Default for InMemoryPageRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PageRepositoryPort for InMemoryPageRepository {
    async fn create(&self, page: &Page) -> Result<Page, RepositoryError> {
        if self.pages.contains_key(&page.id()) {
            return Err(RepositoryError::Duplicate(page.id().to_string()));
        }
        self.pages.insert(page.id(), page.clone());
        Ok(page.clone())
    }

    async fn get_by_id(&self, id: PageId) -> Result<Option<Page>, RepositoryError> {
        Ok(self.pages.get(&id).map(|p| p.clone()))
    }

    async fn get_by_section_id(
        &self,
        section_id: SectionId,
        include_deleted: bool,
    ) -> Result<Vec<Page>, RepositoryError> {
        Ok(self.collect_sorted(|p| {
            p.section_id() == section_id && (include_deleted || !p.is_deleted())
        }))
    }

    async fn get_by_parent_id(
        &self,
        parent_page_id: PageId,
        include_deleted: bool,
    ) -> Result<Vec<Page>, RepositoryError> {
        Ok(self.collect_sorted(|p| {
            p.parent_page_id() == Some(parent_page_id) && (include_deleted || !p.is_deleted())
        }))
    }

    async fn update(&self, page: &Page) -> Result<Page, RepositoryError> {
        let mut stored = self
            .pages
            .get_mut(&page.id())
            .ok_or_else(|| RepositoryError::NotFound(format!("Page {}", page.id())))?;
        stored.title = page.title.clone();
        stored.content = page.content.clone();
        stored.content_plain = page.content_plain.clone();
        stored.parent_page_id = page.parent_page_id;
        stored.display_order = page.display_order;
        stored.updated_at = Utc::now();
        Ok(stored.clone())
    }

    async fn delete(&self, id: PageId) -> Result<bool, RepositoryError> {
        match self.pages.get_mut(&id) {
            Some(mut page) => {
                page.soft_delete();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn restore(&self, id: PageId) -> Result<bool, RepositoryError> {
        match self.pages.get_mut(&id) {
            Some(mut page) => {
                page.restore();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn reorder(&self, id: PageId, new_order: i32) -> Result<Page, RepositoryError> {
        let mut stored = self
            .pages
            .get_mut(&id)
            .ok_or_else(|| RepositoryError::NotFound(format!("Page {}", id)))?;
        stored.display_order = new_order;
        stored.updated_at = Utc::now();
        Ok(stored.clone())
    }

    async fn search(&self, text: &str, limit: usize) -> Result<Vec<Page>, RepositoryError> {
        let needle = text.to_lowercase();
        let mut pages: Vec<Page> = self
            .pages
            .iter()
            .filter(|p| !p.is_deleted())
            .filter(|p| {
                p.title().to_lowercase().contains(&needle)
                    || p.content_plain().to_lowercase().contains(&needle)
            })
            .map(|p| p.clone())
            .collect();
        pages.sort_by(|a, b| b.updated_at().cmp(&a.updated_at()));
        pages.truncate(limit);
        Ok(pages)
    }
}
