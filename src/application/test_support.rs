//! 测试辅助：记录写调用次数、可注入故障的仓储包装

use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;

use crate::application::ports::{
    NotebookRepositoryPort, PageRepositoryPort, RepositoryError, SectionRepositoryPort,
};
use crate::domain::{Notebook, NotebookId, Page, PageId, Section, SectionId};
use crate::infrastructure::memory::{
    InMemoryNotebookRepository, InMemoryPageRepository, InMemorySectionRepository,
};

/// 写调用计数 + 故障开关
#[derive(Default)]
pub struct WriteLog {
    pub creates: AtomicUsize,
    pub updates: AtomicUsize,
    pub deletes: AtomicUsize,
    pub restores: AtomicUsize,
    pub reorders: AtomicUsize,
    fail_writes: AtomicBool,
}

impl WriteLog {
    pub fn fail_writes(&self) {
        self.fail_writes.store(true, Ordering::SeqCst);
    }

    pub fn writes(&self) -> usize {
        self.creates.load(Ordering::SeqCst)
            + self.updates.load(Ordering::SeqCst)
            + self.deletes.load(Ordering::SeqCst)
            + self.restores.load(Ordering::SeqCst)
            + self.reorders.load(Ordering::SeqCst)
    }

    fn record(&self, counter: &AtomicUsize) -> Result<(), RepositoryError> {
        counter.fetch_add(1, Ordering::SeqCst);
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(RepositoryError::DatabaseError("disk I/O error".to_string()));
        }
        Ok(())
    }
}

#[derive(Default)]
pub struct SpyNotebookRepository {
    inner: InMemoryNotebookRepository,
    pub log: WriteLog,
}

#[async_trait]
impl NotebookRepositoryPort for SpyNotebookRepository {
    async fn create(&self, notebook: &Notebook) -> Result<Notebook, RepositoryError> {
        self.log.record(&self.log.creates)?;
        self.inner.create(notebook).await
    }

    async fn get_by_id(&self, id: NotebookId) -> Result<Option<Notebook>, RepositoryError> {
        self.inner.get_by_id(id).await
    }

    async fn get_all(&self, include_deleted: bool) -> Result<Vec<Notebook>, RepositoryError> {
        self.inner.get_all(include_deleted).await
    }

    async fn update(&self, notebook: &Notebook) -> Result<Notebook, RepositoryError> {
        self.log.record(&self.log.updates)?;
        self.inner.update(notebook).await
    }

    async fn delete(&self, id: NotebookId) -> Result<bool, RepositoryError> {
        self.log.record(&self.log.deletes)?;
        self.inner.delete(id).await
    }

    async fn restore(&self, id: NotebookId) -> Result<bool, RepositoryError> {
        self.log.record(&self.log.restores)?;
        self.inner.restore(id).await
    }
}

#[derive(Default)]
pub struct SpySectionRepository {
    inner: InMemorySectionRepository,
    pub log: WriteLog,
}

#[async_trait]
impl SectionRepositoryPort for SpySectionRepository {
    async fn create(&self, section: &Section) -> Result<Section, RepositoryError> {
        self.log.record(&self.log.creates)?;
        self.inner.create(section).await
    }

    async fn get_by_id(&self, id: SectionId) -> Result<Option<Section>, RepositoryError> {
        self.inner.get_by_id(id).await
    }

    async fn get_by_notebook_id(
        &self,
        notebook_id: NotebookId,
        include_deleted: bool,
    ) -> Result<Vec<Section>, RepositoryError> {
        self.inner.get_by_notebook_id(notebook_id, include_deleted).await
    }

    async fn get_all(&self, include_deleted: bool) -> Result<Vec<Section>, RepositoryError> {
        self.inner.get_all(include_deleted).await
    }

    async fn update(&self, section: &Section) -> Result<Section, RepositoryError> {
        self.log.record(&self.log.updates)?;
        self.inner.update(section).await
    }

    async fn delete(&self, id: SectionId) -> Result<bool, RepositoryError> {
        self.log.record(&self.log.deletes)?;
        self.inner.delete(id).await
    }

    async fn restore(&self, id: SectionId) -> Result<bool, RepositoryError> {
        self.log.record(&self.log.restores)?;
        self.inner.restore(id).await
    }

    async fn reorder(&self, id: SectionId, new_order: i32) -> Result<Section, RepositoryError> {
        self.log.record(&self.log.reorders)?;
        self.inner.reorder(id, new_order).await
    }
}

#[derive(Default)]
pub struct SpyPageRepository {
    inner: InMemoryPageRepository,
    pub log: WriteLog,
}

#[async_trait]
impl PageRepositoryPort for SpyPageRepository {
    async fn create(&self, page: &Page) -> Result<Page, RepositoryError> {
        self.log.record(&self.log.creates)?;
        self.inner.create(page).await
    }

    async fn get_by_id(&self, id: PageId) -> Result<Option<Page>, RepositoryError> {
        self.inner.get_by_id(id).await
    }

    async fn get_by_section_id(
        &self,
        section_id: SectionId,
        include_deleted: bool,
    ) -> Result<Vec<Page>, RepositoryError> {
        self.inner.get_by_section_id(section_id, include_deleted).await
    }

    async fn get_by_parent_id(
        &self,
        parent_page_id: PageId,
        include_deleted: bool,
    ) -> Result<Vec<Page>, RepositoryError> {
        self.inner.get_by_parent_id(parent_page_id, include_deleted).await
    }

    async fn update(&self, page: &Page) -> Result<Page, RepositoryError> {
        self.log.record(&self.log.updates)?;
        self.inner.update(page).await
    }

    async fn delete(&self, id: PageId) -> Result<bool, RepositoryError> {
        self.log.record(&self.log.deletes)?;
        self.inner.delete(id).await
    }

    async fn restore(&self, id: PageId) -> Result<bool, RepositoryError> {
        self.log.record(&self.log.restores)?;
        self.inner.restore(id).await
    }

    async fn reorder(&self, id: PageId, new_order: i32) -> Result<Page, RepositoryError> {
        self.log.record(&self.log.reorders)?;
        self.inner.reorder(id, new_order).await
    }

    async fn search(&self, text: &str, limit: usize) -> Result<Vec<Page>, RepositoryError> {
        self.inner.search(text, limit).await
    }
}

/// 三个仓储的测试夹具
#[derive(Clone)]
pub struct Fixture {
    pub notebooks: Arc<SpyNotebookRepository>,
    pub sections: Arc<SpySectionRepository>,
    pub pages: Arc<SpyPageRepository>,
}

impl Fixture {
    pub fn new() -> Self {
        Self {
            notebooks: Arc::new(SpyNotebookRepository::default()),
            sections: Arc::new(SpySectionRepository::default()),
            pages: Arc::new(SpyPageRepository::default()),
        }
    }

    pub async fn notebook(&self, name: &str) -> Notebook {
        let notebook = Notebook::new(name, crate::domain::DEFAULT_NOTEBOOK_COLOR);
        self.notebooks.inner.create(&notebook).await.unwrap()
    }

    pub async fn section(&self, notebook_id: NotebookId, name: &str) -> Section {
        let section = Section::new(notebook_id, name, 0);
        self.sections.inner.create(&section).await.unwrap()
    }

    pub async fn page(&self, section_id: SectionId, title: &str, parent: Option<PageId>) -> Page {
        let page = Page::new(section_id, title, "", parent, 0);
        self.pages.inner.create(&page).await.unwrap()
    }

    /// 直接软删除，不计入写调用
    pub async fn soft_delete_page(&self, id: PageId) {
        self.pages.inner.delete(id).await.unwrap();
    }

    pub async fn soft_delete_section(&self, id: SectionId) {
        self.sections.inner.delete(id).await.unwrap();
    }

    pub async fn soft_delete_notebook(&self, id: NotebookId) {
        self.notebooks.inner.delete(id).await.unwrap();
    }
}
