//! 按 ID 加载实体，不存在时统一转换为 NotFound
//!
//! 已软删除的实体也会返回，由调用方决定如何处理

use crate::application::error::ApplicationError;
use crate::application::ports::{NotebookRepositoryPort, PageRepositoryPort, SectionRepositoryPort};
use crate::domain::{Notebook, NotebookId, Page, PageId, Section, SectionId};

pub(crate) async fn load_notebook(
    repo: &dyn NotebookRepositoryPort,
    id: NotebookId,
) -> Result<Notebook, ApplicationError> {
    repo.get_by_id(id)
        .await
        .map_err(|e| ApplicationError::persistence("get notebook", e))?
        .ok_or_else(|| ApplicationError::not_found("Notebook", id))
}

pub(crate) async fn load_section(
    repo: &dyn SectionRepositoryPort,
    id: SectionId,
) -> Result<Section, ApplicationError> {
    repo.get_by_id(id)
        .await
        .map_err(|e| ApplicationError::persistence("get section", e))?
        .ok_or_else(|| ApplicationError::not_found("Section", id))
}

pub(crate) async fn load_page(
    repo: &dyn PageRepositoryPort,
    id: PageId,
) -> Result<Page, ApplicationError> {
    repo.get_by_id(id)
        .await
        .map_err(|e| ApplicationError::persistence("get page", e))?
        .ok_or_else(|| ApplicationError::not_found("Page", id))
}
