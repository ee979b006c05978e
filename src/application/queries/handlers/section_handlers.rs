//! Section Query Handlers

use std::sync::Arc;

use crate::application::error::ApplicationError;
use crate::application::lookup::load_section;
use crate::application::ports::SectionRepositoryPort;
use crate::application::queries::{GetSectionById, GetSections};
use crate::application::result::{ServiceResult, Success};
use crate::domain::Section;

/// GetSections Handler
///
/// 未指定 notebook_id 时返回全部分区
pub struct GetSectionsHandler {
    section_repo: Arc<dyn SectionRepositoryPort>,
}

impl GetSectionsHandler {
    pub fn new(section_repo: Arc<dyn SectionRepositoryPort>) -> Self {
        Self { section_repo }
    }

    pub async fn handle(&self, query: GetSections) -> ServiceResult<Vec<Section>> {
        let sections = match query.notebook_id {
            Some(notebook_id) => {
                self.section_repo
                    .get_by_notebook_id(notebook_id, query.include_deleted)
                    .await
            }
            None => self.section_repo.get_all(query.include_deleted).await,
        }
        .map_err(|e| ApplicationError::persistence("get sections", e))?;

        let message = format!("Retrieved {} sections", sections.len());
        Ok(Success::new(sections, message))
    }
}

/// GetSectionById Handler
pub struct GetSectionByIdHandler {
    section_repo: Arc<dyn SectionRepositoryPort>,
}

impl GetSectionByIdHandler {
    pub fn new(section_repo: Arc<dyn SectionRepositoryPort>) -> Self {
        Self { section_repo }
    }

    pub async fn handle(&self, query: GetSectionById) -> ServiceResult<Section> {
        let section = load_section(self.section_repo.as_ref(), query.id).await?;
        Ok(Success::new(section, "Section retrieved successfully"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::error::ErrorKind;
    use crate::application::test_support::Fixture;
    use crate::domain::SectionId;

    #[tokio::test]
    async fn test_filter_by_notebook() {
        let fx = Fixture::new();
        let work = fx.notebook("Work").await;
        let home = fx.notebook("Home").await;
        fx.section(work.id(), "A").await;
        fx.section(work.id(), "B").await;
        fx.section(home.id(), "C").await;
        let handler = GetSectionsHandler::new(fx.sections.clone());

        let scoped = handler
            .handle(GetSections {
                notebook_id: Some(work.id()),
                include_deleted: false,
            })
            .await
            .unwrap();
        assert_eq!(scoped.data.len(), 2);

        let all = handler.handle(GetSections::default()).await.unwrap();
        assert_eq!(all.data.len(), 3);
        assert_eq!(all.message, "Retrieved 3 sections");
    }

    #[tokio::test]
    async fn test_get_by_id_missing() {
        let fx = Fixture::new();
        let err = GetSectionByIdHandler::new(fx.sections.clone())
            .handle(GetSectionById {
                id: SectionId::new(),
            })
            .await
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);
        assert!(err.to_string().starts_with("Section with id"));
    }
}
