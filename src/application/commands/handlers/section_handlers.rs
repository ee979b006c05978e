//! Section Command Handlers

use std::sync::Arc;

use crate::application::commands::{
    CreateSection, DeleteSection, ReorderSection, RestoreSection, UpdateSection,
};
use crate::application::error::ApplicationError;
use crate::application::lookup::{load_notebook, load_section};
use crate::application::ports::{NotebookRepositoryPort, PageRepositoryPort, SectionRepositoryPort};
use crate::application::result::{ServiceResult, Success};
use crate::domain::{Section, SectionChanges};

// ============================================================================
// CreateSection
// ============================================================================

/// CreateSection Handler
pub struct CreateSectionHandler {
    notebook_repo: Arc<dyn NotebookRepositoryPort>,
    section_repo: Arc<dyn SectionRepositoryPort>,
}

impl CreateSectionHandler {
    pub fn new(
        notebook_repo: Arc<dyn NotebookRepositoryPort>,
        section_repo: Arc<dyn SectionRepositoryPort>,
    ) -> Self {
        Self {
            notebook_repo,
            section_repo,
        }
    }

    pub async fn handle(&self, command: CreateSection) -> ServiceResult<Section> {
        let section = Section::new(command.notebook_id, command.name.trim(), command.display_order);

        if let Err(e) = section.validate() {
            tracing::warn!(field = e.field, error = %e, "Section rejected");
            return Err(e.into());
        }

        // 笔记本必须存在且未删除
        let notebook = load_notebook(self.notebook_repo.as_ref(), command.notebook_id).await?;
        if notebook.is_deleted() {
            return Err(ApplicationError::not_found("Notebook", command.notebook_id));
        }

        let created = self.section_repo.create(&section).await.map_err(|e| {
            tracing::error!(error = %e, "Failed to create section");
            ApplicationError::persistence("create section", e)
        })?;

        tracing::info!(
            section_id = %created.id(),
            notebook_id = %created.notebook_id(),
            name = %created.name(),
            "Section created"
        );

        Ok(Success::new(created, "Section created successfully"))
    }
}

// ============================================================================
// UpdateSection
// ============================================================================

/// UpdateSection Handler
pub struct UpdateSectionHandler {
    section_repo: Arc<dyn SectionRepositoryPort>,
}

impl UpdateSectionHandler {
    pub fn new(section_repo: Arc<dyn SectionRepositoryPort>) -> Self {
        Self { section_repo }
    }

    pub async fn handle(&self, command: UpdateSection) -> ServiceResult<Section> {
        let current = load_section(self.section_repo.as_ref(), command.id).await?;

        let next = current.with_changes(SectionChanges {
            name: command.name.map(|n| n.trim().to_string()),
            display_order: command.display_order,
        });
        next.validate()?;

        let updated = self.section_repo.update(&next).await.map_err(|e| {
            tracing::error!(section_id = %command.id, error = %e, "Failed to update section");
            ApplicationError::persistence("update section", e)
        })?;

        tracing::info!(section_id = %command.id, "Section updated");

        Ok(Success::new(updated, "Section updated successfully"))
    }
}

// ============================================================================
// DeleteSection
// ============================================================================

/// DeleteSection Handler
///
/// 分区下还有未删除页面时拒绝删除
pub struct DeleteSectionHandler {
    section_repo: Arc<dyn SectionRepositoryPort>,
    page_repo: Arc<dyn PageRepositoryPort>,
}

impl DeleteSectionHandler {
    pub fn new(
        section_repo: Arc<dyn SectionRepositoryPort>,
        page_repo: Arc<dyn PageRepositoryPort>,
    ) -> Self {
        Self {
            section_repo,
            page_repo,
        }
    }

    pub async fn handle(&self, command: DeleteSection) -> ServiceResult<()> {
        load_section(self.section_repo.as_ref(), command.id).await?;

        let active_pages = self
            .page_repo
            .get_by_section_id(command.id, false)
            .await
            .map_err(|e| ApplicationError::persistence("delete section", e))?;

        if !active_pages.is_empty() {
            tracing::warn!(
                section_id = %command.id,
                active_pages = active_pages.len(),
                "Section delete blocked"
            );
            return Err(ApplicationError::cascade_blocked(format!(
                "Cannot delete section: contains {} active page(s). Please delete or move the pages first.",
                active_pages.len()
            )));
        }

        self.section_repo
            .delete(command.id)
            .await
            .map_err(|e| ApplicationError::persistence("delete section", e))?;

        tracing::info!(section_id = %command.id, "Section deleted");

        Ok(Success::new((), "Section deleted successfully"))
    }
}

// ============================================================================
// RestoreSection
// ============================================================================

/// RestoreSection Handler
pub struct RestoreSectionHandler {
    notebook_repo: Arc<dyn NotebookRepositoryPort>,
    section_repo: Arc<dyn SectionRepositoryPort>,
}

impl RestoreSectionHandler {
    pub fn new(
        notebook_repo: Arc<dyn NotebookRepositoryPort>,
        section_repo: Arc<dyn SectionRepositoryPort>,
    ) -> Self {
        Self {
            notebook_repo,
            section_repo,
        }
    }

    pub async fn handle(&self, command: RestoreSection) -> ServiceResult<Section> {
        let section = load_section(self.section_repo.as_ref(), command.id).await?;
        if !section.is_deleted() {
            return Ok(Success::new(section, "Section is not deleted"));
        }

        let notebook_live = self
            .notebook_repo
            .get_by_id(section.notebook_id())
            .await
            .map_err(|e| ApplicationError::persistence("restore section", e))?
            .is_some_and(|n| !n.is_deleted());
        if !notebook_live {
            return Err(ApplicationError::invalid_field(
                "notebook_id",
                "Cannot restore section: its notebook is deleted",
            ));
        }

        self.section_repo
            .restore(command.id)
            .await
            .map_err(|e| ApplicationError::persistence("restore section", e))?;

        let restored = load_section(self.section_repo.as_ref(), command.id).await?;
        tracing::info!(section_id = %command.id, "Section restored");

        Ok(Success::new(restored, "Section restored successfully"))
    }
}

// ============================================================================
// ReorderSection
// ============================================================================

/// ReorderSection Handler
pub struct ReorderSectionHandler {
    section_repo: Arc<dyn SectionRepositoryPort>,
}

impl ReorderSectionHandler {
    pub fn new(section_repo: Arc<dyn SectionRepositoryPort>) -> Self {
        Self { section_repo }
    }

    pub async fn handle(&self, command: ReorderSection) -> ServiceResult<Section> {
        let current = load_section(self.section_repo.as_ref(), command.section_id).await?;

        if command.new_order < 0 {
            return Err(ApplicationError::invalid_field(
                "display_order",
                "Display order must be non-negative",
            ));
        }

        let next = current.with_changes(SectionChanges {
            display_order: Some(command.new_order),
            ..Default::default()
        });
        next.validate()?;

        let reordered = self
            .section_repo
            .reorder(command.section_id, command.new_order)
            .await
            .map_err(|e| {
                tracing::error!(section_id = %command.section_id, error = %e, "Failed to reorder section");
                ApplicationError::persistence("reorder section", e)
            })?;

        tracing::info!(
            section_id = %command.section_id,
            display_order = command.new_order,
            "Section reordered"
        );

        Ok(Success::new(reordered, "Section reordered successfully"))
    }
}
