//! Page Command Handlers

use std::collections::HashSet;
use std::sync::Arc;

use crate::application::commands::{
    CreatePage, DeletePage, MovePage, ReorderPage, RestorePage, UpdatePage,
};
use crate::application::error::ApplicationError;
use crate::application::lookup::{load_page, load_section};
use crate::application::ports::{PageRepositoryPort, SectionRepositoryPort};
use crate::application::result::{ServiceResult, Success};
use crate::domain::{Page, PageChanges, PageId, SectionId};

/// 校验候选父页面：存在、未删除、同一分区
async fn check_parent(
    repo: &dyn PageRepositoryPort,
    parent_id: PageId,
    section_id: SectionId,
) -> Result<Page, ApplicationError> {
    let parent = repo
        .get_by_id(parent_id)
        .await
        .map_err(|e| ApplicationError::persistence("get page", e))?
        .filter(|p| !p.is_deleted())
        .ok_or_else(|| {
            ApplicationError::invalid_field(
                "parent_page_id",
                format!("Parent page {} does not exist", parent_id),
            )
        })?;

    if parent.section_id() != section_id {
        return Err(ApplicationError::invalid_field(
            "parent_page_id",
            "Parent page must belong to the same section",
        ));
    }
    Ok(parent)
}

/// 从候选父页面沿祖先链向上走，遇到 page_id 或重复节点即视为成环
async fn would_create_cycle(
    repo: &dyn PageRepositoryPort,
    page_id: PageId,
    candidate_parent: PageId,
) -> Result<bool, ApplicationError> {
    let mut visited = HashSet::new();
    let mut cursor = Some(candidate_parent);

    while let Some(current) = cursor {
        if current == page_id || !visited.insert(current) {
            return Ok(true);
        }
        cursor = repo
            .get_by_id(current)
            .await
            .map_err(|e| ApplicationError::persistence("move page", e))?
            .and_then(|p| p.parent_page_id());
    }
    Ok(false)
}

// ============================================================================
// CreatePage
// ============================================================================

/// CreatePage Handler
pub struct CreatePageHandler {
    section_repo: Arc<dyn SectionRepositoryPort>,
    page_repo: Arc<dyn PageRepositoryPort>,
}

impl CreatePageHandler {
    pub fn new(
        section_repo: Arc<dyn SectionRepositoryPort>,
        page_repo: Arc<dyn PageRepositoryPort>,
    ) -> Self {
        Self {
            section_repo,
            page_repo,
        }
    }

    pub async fn handle(&self, command: CreatePage) -> ServiceResult<Page> {
        let page = Page::new(
            command.section_id,
            command.title.trim(),
            command.content,
            command.parent_page_id,
            command.display_order,
        );

        if let Err(e) = page.validate() {
            tracing::warn!(field = e.field, error = %e, "Page rejected");
            return Err(e.into());
        }

        let section = load_section(self.section_repo.as_ref(), command.section_id).await?;
        if section.is_deleted() {
            return Err(ApplicationError::not_found("Section", command.section_id));
        }

        if let Some(parent_id) = command.parent_page_id {
            check_parent(self.page_repo.as_ref(), parent_id, command.section_id).await?;
        }

        let created = self.page_repo.create(&page).await.map_err(|e| {
            tracing::error!(error = %e, "Failed to create page");
            ApplicationError::persistence("create page", e)
        })?;

        tracing::info!(
            page_id = %created.id(),
            section_id = %created.section_id(),
            title = %created.title(),
            "Page created"
        );

        Ok(Success::new(created, "Page created successfully"))
    }
}

// ============================================================================
// UpdatePage
// ============================================================================

/// UpdatePage Handler
pub struct UpdatePageHandler {
    page_repo: Arc<dyn PageRepositoryPort>,
}

impl UpdatePageHandler {
    pub fn new(page_repo: Arc<dyn PageRepositoryPort>) -> Self {
        Self { page_repo }
    }

    pub async fn handle(&self, command: UpdatePage) -> ServiceResult<Page> {
        let current = load_page(self.page_repo.as_ref(), command.id).await?;

        let next = current.with_changes(PageChanges {
            title: command.title.map(|t| t.trim().to_string()),
            content: command.content,
            display_order: command.display_order,
        });
        next.validate()?;

        let updated = self.page_repo.update(&next).await.map_err(|e| {
            tracing::error!(page_id = %command.id, error = %e, "Failed to update page");
            ApplicationError::persistence("update page", e)
        })?;

        tracing::info!(page_id = %command.id, "Page updated");

        Ok(Success::new(updated, "Page updated successfully"))
    }
}

// ============================================================================
// DeletePage
// ============================================================================

/// DeletePage Handler
///
/// 还有未删除子页面时拒绝删除
pub struct DeletePageHandler {
    page_repo: Arc<dyn PageRepositoryPort>,
}

impl DeletePageHandler {
    pub fn new(page_repo: Arc<dyn PageRepositoryPort>) -> Self {
        Self { page_repo }
    }

    pub async fn handle(&self, command: DeletePage) -> ServiceResult<()> {
        load_page(self.page_repo.as_ref(), command.id).await?;

        let subpages = self
            .page_repo
            .get_by_parent_id(command.id, false)
            .await
            .map_err(|e| ApplicationError::persistence("delete page", e))?;

        if !subpages.is_empty() {
            tracing::warn!(
                page_id = %command.id,
                subpages = subpages.len(),
                "Page delete blocked"
            );
            return Err(ApplicationError::cascade_blocked(format!(
                "Cannot delete page: contains {} subpage(s). Please delete or move the subpages first.",
                subpages.len()
            )));
        }

        self.page_repo
            .delete(command.id)
            .await
            .map_err(|e| ApplicationError::persistence("delete page", e))?;

        tracing::info!(page_id = %command.id, "Page deleted");

        Ok(Success::new((), "Page deleted successfully"))
    }
}

// ============================================================================
// RestorePage
// ============================================================================

/// RestorePage Handler
pub struct RestorePageHandler {
    section_repo: Arc<dyn SectionRepositoryPort>,
    page_repo: Arc<dyn PageRepositoryPort>,
}

impl RestorePageHandler {
    pub fn new(
        section_repo: Arc<dyn SectionRepositoryPort>,
        page_repo: Arc<dyn PageRepositoryPort>,
    ) -> Self {
        Self {
            section_repo,
            page_repo,
        }
    }

    pub async fn handle(&self, command: RestorePage) -> ServiceResult<Page> {
        let page = load_page(self.page_repo.as_ref(), command.id).await?;
        if !page.is_deleted() {
            return Ok(Success::new(page, "Page is not deleted"));
        }

        let section_live = self
            .section_repo
            .get_by_id(page.section_id())
            .await
            .map_err(|e| ApplicationError::persistence("restore page", e))?
            .is_some_and(|s| !s.is_deleted());
        if !section_live {
            return Err(ApplicationError::invalid_field(
                "section_id",
                "Cannot restore page: its section is deleted",
            ));
        }

        if let Some(parent_id) = page.parent_page_id() {
            let parent_live = self
                .page_repo
                .get_by_id(parent_id)
                .await
                .map_err(|e| ApplicationError::persistence("restore page", e))?
                .is_some_and(|p| !p.is_deleted());
            if !parent_live {
                return Err(ApplicationError::invalid_field(
                    "parent_page_id",
                    "Cannot restore page: its parent page is deleted",
                ));
            }
        }

        self.page_repo
            .restore(command.id)
            .await
            .map_err(|e| ApplicationError::persistence("restore page", e))?;

        let restored = load_page(self.page_repo.as_ref(), command.id).await?;
        tracing::info!(page_id = %command.id, "Page restored");

        Ok(Success::new(restored, "Page restored successfully"))
    }
}

// ============================================================================
// ReorderPage
// ============================================================================

/// ReorderPage Handler
pub struct ReorderPageHandler {
    page_repo: Arc<dyn PageRepositoryPort>,
}

impl ReorderPageHandler {
    pub fn new(page_repo: Arc<dyn PageRepositoryPort>) -> Self {
        Self { page_repo }
    }

    pub async fn handle(&self, command: ReorderPage) -> ServiceResult<Page> {
        let current = load_page(self.page_repo.as_ref(), command.page_id).await?;

        if command.new_order < 0 {
            return Err(ApplicationError::invalid_field(
                "display_order",
                "Display order must be non-negative",
            ));
        }

        let next = current.with_changes(PageChanges {
            display_order: Some(command.new_order),
            ..Default::default()
        });
        next.validate()?;

        let reordered = self
            .page_repo
            .reorder(command.page_id, command.new_order)
            .await
            .map_err(|e| {
                tracing::error!(page_id = %command.page_id, error = %e, "Failed to reorder page");
                ApplicationError::persistence("reorder page", e)
            })?;

        tracing::info!(
            page_id = %command.page_id,
            display_order = command.new_order,
            "Page reordered"
        );

        Ok(Success::new(reordered, "Page reordered successfully"))
    }
}

// ============================================================================
// MovePage
// ============================================================================

/// MovePage Handler
///
/// 新父页面不能是自身或自身的后代
pub struct MovePageHandler {
    page_repo: Arc<dyn PageRepositoryPort>,
}

impl MovePageHandler {
    pub fn new(page_repo: Arc<dyn PageRepositoryPort>) -> Self {
        Self { page_repo }
    }

    pub async fn handle(&self, command: MovePage) -> ServiceResult<Page> {
        let current = load_page(self.page_repo.as_ref(), command.page_id).await?;

        if let Some(parent_id) = command.parent_page_id {
            check_parent(self.page_repo.as_ref(), parent_id, current.section_id()).await?;

            if would_create_cycle(self.page_repo.as_ref(), command.page_id, parent_id).await? {
                tracing::warn!(
                    page_id = %command.page_id,
                    parent_page_id = %parent_id,
                    "Page move would create a cycle"
                );
                return Err(ApplicationError::invalid_field(
                    "parent_page_id",
                    "Cannot move a page under itself or one of its subpages",
                ));
            }
        }

        let next = current.with_parent(command.parent_page_id);
        next.validate()?;

        let moved = self.page_repo.update(&next).await.map_err(|e| {
            tracing::error!(page_id = %command.page_id, error = %e, "Failed to move page");
            ApplicationError::persistence("move page", e)
        })?;

        tracing::info!(
            page_id = %command.page_id,
            parent_page_id = ?command.parent_page_id,
            "Page moved"
        );

        Ok(Success::new(moved, "Page moved successfully"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::error::ErrorKind;
    use crate::application::test_support::Fixture;

    async fn fixture_with_section() -> (Fixture, SectionId) {
        let fx = Fixture::new();
        let notebook = fx.notebook("Work").await;
        let section = fx.section(notebook.id(), "Ideas").await;
        (fx, section.id())
    }

    #[tokio::test]
    async fn test_create_derives_plain_text() {
        let (fx, section_id) = fixture_with_section().await;
        let handler = CreatePageHandler::new(fx.sections.clone(), fx.pages.clone());

        let result = handler
            .handle(CreatePage {
                section_id,
                title: "Notes".to_string(),
                content: "# Title\n\nSome **bold** and `code` and [link](url)".to_string(),
                parent_page_id: None,
                display_order: 0,
            })
            .await
            .unwrap();
        assert!(!result.data.id().is_nil());
        assert_eq!(result.data.content_plain(), "Title\n\nSome bold and  and link");
    }

    #[tokio::test]
    async fn test_create_rejects_parent_from_other_section() {
        let (fx, section_id) = fixture_with_section().await;
        let notebook = fx.notebook("Other").await;
        let other = fx.section(notebook.id(), "Elsewhere").await;
        let foreign_parent = fx.page(other.id(), "Foreign", None).await;

        let err = CreatePageHandler::new(fx.sections.clone(), fx.pages.clone())
            .handle(CreatePage {
                section_id,
                title: "Child".to_string(),
                content: String::new(),
                parent_page_id: Some(foreign_parent.id()),
                display_order: 0,
            })
            .await
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Validation);
        assert_eq!(fx.pages.log.writes(), 0);
    }

    #[tokio::test]
    async fn test_update_title_only_keeps_content() {
        let (fx, section_id) = fixture_with_section().await;
        let created = CreatePageHandler::new(fx.sections.clone(), fx.pages.clone())
            .handle(CreatePage {
                section_id,
                title: "Old".to_string(),
                content: "**body**".to_string(),
                parent_page_id: None,
                display_order: 3,
            })
            .await
            .unwrap()
            .into_data();

        let updated = UpdatePageHandler::new(fx.pages.clone())
            .handle(UpdatePage {
                id: created.id(),
                title: Some("New".to_string()),
                content: None,
                display_order: None,
            })
            .await
            .unwrap()
            .into_data();
        assert_eq!(updated.title(), "New");
        assert_eq!(updated.content(), "**body**");
        assert_eq!(updated.content_plain(), "body");
        assert_eq!(updated.display_order(), 3);
    }

    #[tokio::test]
    async fn test_delete_blocked_by_subpage() {
        let (fx, section_id) = fixture_with_section().await;
        let parent = fx.page(section_id, "Parent", None).await;
        let child = fx.page(section_id, "Child", Some(parent.id())).await;
        let handler = DeletePageHandler::new(fx.pages.clone());

        let err = handler
            .handle(DeletePage { id: parent.id() })
            .await
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::CascadeBlocked);
        assert!(err.to_string().contains("1 subpage"));
        assert_eq!(fx.pages.log.writes(), 0);

        handler.handle(DeletePage { id: child.id() }).await.unwrap();
        handler.handle(DeletePage { id: parent.id() }).await.unwrap();
    }

    #[tokio::test]
    async fn test_reorder() {
        let (fx, section_id) = fixture_with_section().await;
        let page = fx.page(section_id, "Draft", None).await;
        let handler = ReorderPageHandler::new(fx.pages.clone());

        let err = handler
            .handle(ReorderPage {
                page_id: page.id(),
                new_order: -1,
            })
            .await
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Validation);
        assert_eq!(fx.pages.log.writes(), 0);

        let result = handler
            .handle(ReorderPage {
                page_id: page.id(),
                new_order: 5,
            })
            .await
            .unwrap();
        assert_eq!(result.data.display_order(), 5);
    }

    #[tokio::test]
    async fn test_move_rejects_cycles() {
        let (fx, section_id) = fixture_with_section().await;
        let root = fx.page(section_id, "Root", None).await;
        let child = fx.page(section_id, "Child", Some(root.id())).await;
        let grandchild = fx.page(section_id, "Grandchild", Some(child.id())).await;
        let handler = MovePageHandler::new(fx.pages.clone());

        for target in [root.id(), grandchild.id()] {
            let err = handler
                .handle(MovePage {
                    page_id: root.id(),
                    parent_page_id: Some(target),
                })
                .await
                .unwrap_err();
            assert_eq!(err.kind(), ErrorKind::Validation);
        }
        assert_eq!(fx.pages.log.writes(), 0);

        let moved = handler
            .handle(MovePage {
                page_id: grandchild.id(),
                parent_page_id: Some(root.id()),
            })
            .await
            .unwrap();
        assert_eq!(moved.data.parent_page_id(), Some(root.id()));

        let promoted = handler
            .handle(MovePage {
                page_id: child.id(),
                parent_page_id: None,
            })
            .await
            .unwrap();
        assert!(!promoted.data.is_subpage());
    }

    #[tokio::test]
    async fn test_restore_requires_live_parent() {
        let (fx, section_id) = fixture_with_section().await;
        let parent = fx.page(section_id, "Parent", None).await;
        let child = fx.page(section_id, "Child", Some(parent.id())).await;
        fx.soft_delete_page(child.id()).await;
        fx.soft_delete_page(parent.id()).await;
        let handler = RestorePageHandler::new(fx.sections.clone(), fx.pages.clone());

        let err = handler
            .handle(RestorePage { id: child.id() })
            .await
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Validation);

        handler.handle(RestorePage { id: parent.id() }).await.unwrap();
        let restored = handler.handle(RestorePage { id: child.id() }).await.unwrap();
        assert!(!restored.data.is_deleted());
    }

    #[tokio::test]
    async fn test_delete_persistence_fault() {
        let (fx, section_id) = fixture_with_section().await;
        let page = fx.page(section_id, "Draft", None).await;
        fx.pages.log.fail_writes();

        let err = DeletePageHandler::new(fx.pages.clone())
            .handle(DeletePage { id: page.id() })
            .await
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::PersistenceFault);
        assert!(err.to_string().starts_with("Failed to delete page"));
    }
}
