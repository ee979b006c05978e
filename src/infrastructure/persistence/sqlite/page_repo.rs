//! SQLite Page Repository

use async_trait::async_trait;
use chrono::Utc;
use sqlx::FromRow;

use super::{db_error, decode_optional_time, decode_time, decode_uuid, encode_time, DbPool};
use crate::application::ports::{PageRepositoryPort, RepositoryError};
use crate::domain::{Page, PageId, SectionId};

const PAGE_COLUMNS: &str = "id, section_id, parent_page_id, title, content, content_plain, \
     display_order, created_at, updated_at, deleted_at";

/// SQLite Page Repository
pub struct SqlitePageRepository {
    pool: DbPool,
}

impl SqlitePageRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    async fn fetch(&self, id: PageId) -> Result<Page, RepositoryError> {
        self.get_by_id(id)
            .await?
            .ok_or_else(|| RepositoryError::NotFound(format!("Page {}", id)))
    }

    async fn list_where(
        &self,
        column: &str,
        value: String,
        include_deleted: bool,
    ) -> Result<Vec<Page>, RepositoryError> {
        let filter = if include_deleted {
            ""
        } else {
            "AND deleted_at IS NULL"
        };
        let rows: Vec<PageRow> = sqlx::query_as(&format!(
            "SELECT {} FROM pages WHERE {} = ? {} ORDER BY display_order ASC, created_at ASC",
            PAGE_COLUMNS, column, filter
        ))
        .bind(value)
        .fetch_all(&self.pool)
        .await
        .map_err(db_error)?;

        rows.into_iter().map(Page::try_from).collect()
    }
}

/// 搜索用的小写投影
///
/// SQLite 的 LOWER 只处理 ASCII，统一在这里做 Unicode 小写
fn fold(text: &str) -> String {
    text.to_lowercase()
}

/// 转义 LIKE 通配符
fn like_pattern(text: &str) -> String {
    let escaped = fold(text)
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_");
    format!("%{}%", escaped)
}

#[derive(FromRow)]
struct PageRow {
    id: String,
    section_id: String,
    parent_page_id: Option<String>,
    title: String,
    content: String,
    content_plain: String,
    display_order: i64,
    created_at: String,
    updated_at: String,
    deleted_at: Option<String>,
}

impl TryFrom<PageRow> for Page {
    type Error = RepositoryError;

    fn try_from(row: PageRow) -> Result<Self, Self::Error> {
        Ok(Page {
            id: PageId::from_uuid(decode_uuid(&row.id)?),
            section_id: SectionId::from_uuid(decode_uuid(&row.section_id)?),
            parent_page_id: row
                .parent_page_id
                .as_deref()
                .map(decode_uuid)
                .transpose()?
                .map(PageId::from_uuid),
            title: row.title,
            content: row.content,
            content_plain: row.content_plain,
            display_order: i32::try_from(row.display_order)
                .map_err(|e| RepositoryError::SerializationError(e.to_string()))?,
            created_at: decode_time(&row.created_at)?,
            updated_at: decode_time(&row.updated_at)?,
            deleted_at: decode_optional_time(row.deleted_at)?,
        })
    }
}

#[async_trait]
impl PageRepositoryPort for SqlitePageRepository {
    async fn create(&self, page: &Page) -> Result<Page, RepositoryError> {
        sqlx::query(
            r#"
            INSERT INTO pages (id, section_id, parent_page_id, title, content, content_plain,
                               title_folded, content_folded,
                               display_order, created_at, updated_at, deleted_at)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(page.id.to_string())
        .bind(page.section_id.to_string())
        .bind(page.parent_page_id.map(|p| p.to_string()))
        .bind(&page.title)
        .bind(&page.content)
        .bind(&page.content_plain)
        .bind(fold(&page.title))
        .bind(fold(&page.content_plain))
        .bind(page.display_order)
        .bind(encode_time(page.created_at))
        .bind(encode_time(page.updated_at))
        .bind(page.deleted_at.map(encode_time))
        .execute(&self.pool)
        .await
        .map_err(db_error)?;

        self.fetch(page.id).await
    }

    async fn get_by_id(&self, id: PageId) -> Result<Option<Page>, RepositoryError> {
        let row: Option<PageRow> =
            sqlx::query_as(&format!("SELECT {} FROM pages WHERE id = ?", PAGE_COLUMNS))
                .bind(id.to_string())
                .fetch_optional(&self.pool)
                .await
                .map_err(db_error)?;

        row.map(Page::try_from).transpose()
    }

    async fn get_by_section_id(
        &self,
        section_id: SectionId,
        include_deleted: bool,
    ) -> Result<Vec<Page>, RepositoryError> {
        self.list_where("section_id", section_id.to_string(), include_deleted)
            .await
    }

    async fn get_by_parent_id(
        &self,
        parent_page_id: PageId,
        include_deleted: bool,
    ) -> Result<Vec<Page>, RepositoryError> {
        self.list_where("parent_page_id", parent_page_id.to_string(), include_deleted)
            .await
    }

    async fn update(&self, page: &Page) -> Result<Page, RepositoryError> {
        let result = sqlx::query(
            r#"
            UPDATE pages
            SET title = ?, content = ?, content_plain = ?, title_folded = ?,
                content_folded = ?, parent_page_id = ?, display_order = ?, updated_at = ?
            WHERE id = ?
            "#,
        )
        .bind(&page.title)
        .bind(&page.content)
        .bind(&page.content_plain)
        .bind(fold(&page.title))
        .bind(fold(&page.content_plain))
        .bind(page.parent_page_id.map(|p| p.to_string()))
        .bind(page.display_order)
        .bind(encode_time(Utc::now()))
        .bind(page.id.to_string())
        .execute(&self.pool)
        .await
        .map_err(db_error)?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound(format!("Page {}", page.id)));
        }
        self.fetch(page.id).await
    }

    async fn delete(&self, id: PageId) -> Result<bool, RepositoryError> {
        let result = sqlx::query("UPDATE pages SET deleted_at = ? WHERE id = ?")
            .bind(encode_time(Utc::now()))
            .bind(id.to_string())
            .execute(&self.pool)
            .await
            .map_err(db_error)?;

        Ok(result.rows_affected() > 0)
    }

    async fn restore(&self, id: PageId) -> Result<bool, RepositoryError> {
        let result = sqlx::query("UPDATE pages SET deleted_at = NULL WHERE id = ?")
            .bind(id.to_string())
            .execute(&self.pool)
            .await
            .map_err(db_error)?;

        Ok(result.rows_affected() > 0)
    }

    async fn reorder(&self, id: PageId, new_order: i32) -> Result<Page, RepositoryError> {
        let result = sqlx::query("UPDATE pages SET display_order = ?, updated_at = ? WHERE id = ?")
            .bind(new_order)
            .bind(encode_time(Utc::now()))
            .bind(id.to_string())
            .execute(&self.pool)
            .await
            .map_err(db_error)?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound(format!("Page {}", id)));
        }
        self.fetch(id).await
    }

    async fn search(&self, text: &str, limit: usize) -> Result<Vec<Page>, RepositoryError> {
        let pattern = like_pattern(text);
        let rows: Vec<PageRow> = sqlx::query_as(&format!(
            r#"
            SELECT {} FROM pages
            WHERE deleted_at IS NULL
              AND (title_folded LIKE ? ESCAPE '\' OR content_folded LIKE ? ESCAPE '\')
            ORDER BY updated_at DESC
            LIMIT ?
            "#,
            PAGE_COLUMNS
        ))
        .bind(&pattern)
        .bind(&pattern)
        .bind(i64::try_from(limit).unwrap_or(i64::MAX))
        .fetch_all(&self.pool)
        .await
        .map_err(db_error)?;

        rows.into_iter().map(Page::try_from).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::{NotebookRepositoryPort, SectionRepositoryPort};
    use crate::domain::{Notebook, Section, DEFAULT_NOTEBOOK_COLOR};
    use crate::infrastructure::persistence::sqlite::{
        create_pool, run_migrations, DatabaseConfig, SqliteNotebookRepository,
        SqliteSectionRepository,
    };

    /// 建库并创建一个笔记本和分区，返回仓储与分区 ID
    async fn setup() -> (SqlitePageRepository, SectionId) {
        let pool = create_pool(&DatabaseConfig::in_memory()).await.unwrap();
        run_migrations(&pool).await.unwrap();

        let notebook = SqliteNotebookRepository::new(pool.clone())
            .create(&Notebook::new("Work", DEFAULT_NOTEBOOK_COLOR))
            .await
            .unwrap();
        let section = SqliteSectionRepository::new(pool.clone())
            .create(&Section::new(notebook.id(), "Ideas", 0))
            .await
            .unwrap();

        (SqlitePageRepository::new(pool), section.id())
    }

    #[tokio::test]
    async fn test_round_trips_parent_and_plain_text() {
        let (repo, section_id) = setup().await;
        let parent = repo
            .create(&Page::new(section_id, "Parent", "# Heading", None, 0))
            .await
            .unwrap();
        let child = repo
            .create(&Page::new(section_id, "Child", "", Some(parent.id()), 1))
            .await
            .unwrap();

        assert_eq!(parent.content_plain(), "Heading");
        assert_eq!(child.parent_page_id(), Some(parent.id()));

        let children = repo.get_by_parent_id(parent.id(), false).await.unwrap();
        assert_eq!(children.len(), 1);
        assert_eq!(children[0].id(), child.id());

        let in_section = repo.get_by_section_id(section_id, false).await.unwrap();
        assert_eq!(in_section.len(), 2);
        assert_eq!(in_section[0].id(), parent.id());

        repo.delete(child.id()).await.unwrap();
        assert!(repo.get_by_parent_id(parent.id(), false).await.unwrap().is_empty());
        assert_eq!(repo.get_by_parent_id(parent.id(), true).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_update_moves_and_rewrites() {
        let (repo, section_id) = setup().await;
        let parent = repo
            .create(&Page::new(section_id, "Parent", "", None, 0))
            .await
            .unwrap();
        let page = repo
            .create(&Page::new(section_id, "Page", "old", None, 0))
            .await
            .unwrap();

        let mut next = page.with_parent(Some(parent.id()));
        next.content = "**new**".to_string();
        next.content_plain = "new".to_string();
        let updated = repo.update(&next).await.unwrap();
        assert_eq!(updated.parent_page_id(), Some(parent.id()));
        assert_eq!(updated.content_plain(), "new");

        let promoted = repo.update(&updated.with_parent(None)).await.unwrap();
        assert!(promoted.parent_page_id().is_none());

        // 更新后的内容可被搜索到
        assert_eq!(repo.search("NEW", 10).await.unwrap().len(), 1);
        assert!(repo.search("old", 10).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_reorder() {
        let (repo, section_id) = setup().await;
        let page = repo
            .create(&Page::new(section_id, "p", "", None, 0))
            .await
            .unwrap();

        assert_eq!(repo.reorder(page.id(), 3).await.unwrap().display_order(), 3);
        assert!(matches!(
            repo.reorder(PageId::new(), 1).await,
            Err(RepositoryError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_search_skips_deleted_and_escapes_wildcards() {
        let (repo, section_id) = setup().await;
        let hit = repo
            .create(&Page::new(section_id, "Budget", "100% done", None, 0))
            .await
            .unwrap();
        let gone = repo
            .create(&Page::new(section_id, "Budget draft", "", None, 0))
            .await
            .unwrap();
        repo.create(&Page::new(section_id, "Other", "100 items", None, 0))
            .await
            .unwrap();
        repo.delete(gone.id()).await.unwrap();

        let results = repo.search("BUDGET", 10).await.unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].id(), hit.id());

        let percent = repo.search("100%", 10).await.unwrap();
        assert_eq!(percent.len(), 1);
        assert_eq!(percent[0].id(), hit.id());
    }

    #[tokio::test]
    async fn test_search_folds_non_ascii_case() {
        let (repo, section_id) = setup().await;
        let summer = repo
            .create(&Page::new(section_id, "ÉTÉ plans", "", None, 0))
            .await
            .unwrap();
        repo.create(&Page::new(section_id, "Notes", "Straße ÜBER alles", None, 0))
            .await
            .unwrap();

        let results = repo.search("été", 10).await.unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].id(), summer.id());

        assert_eq!(repo.search("über", 10).await.unwrap().len(), 1);
        assert_eq!(repo.search("STRASSE", 10).await.unwrap().len(), 0);
    }
}
