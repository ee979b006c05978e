//! SQLite Section Repository

use async_trait::async_trait;
use chrono::Utc;
use sqlx::FromRow;

use super::{db_error, decode_optional_time, decode_time, decode_uuid, encode_time, DbPool};
use crate::application::ports::{RepositoryError, SectionRepositoryPort};
use crate::domain::{NotebookId, Section, SectionId};

const SECTION_COLUMNS: &str =
    "id, notebook_id, name, display_order, created_at, updated_at, deleted_at";

/// SQLite Section Repository
pub struct SqliteSectionRepository {
    pool: DbPool,
}

impl SqliteSectionRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    async fn fetch(&self, id: SectionId) -> Result<Section, RepositoryError> {
        self.get_by_id(id)
            .await?
            .ok_or_else(|| RepositoryError::NotFound(format!("Section {}", id)))
    }
}

#[derive(FromRow)]
struct SectionRow {
    id: String,
    notebook_id: String,
    name: String,
    display_order: i64,
    created_at: String,
    updated_at: String,
    deleted_at: Option<String>,
}

impl TryFrom<SectionRow> for Section {
    type Error = RepositoryError;

    fn try_from(row: SectionRow) -> Result<Self, Self::Error> {
        Ok(Section {
            id: SectionId::from_uuid(decode_uuid(&row.id)?),
            notebook_id: NotebookId::from_uuid(decode_uuid(&row.notebook_id)?),
            name: row.name,
            display_order: i32::try_from(row.display_order)
                .map_err(|e| RepositoryError::SerializationError(e.to_string()))?,
            created_at: decode_time(&row.created_at)?,
            updated_at: decode_time(&row.updated_at)?,
            deleted_at: decode_optional_time(row.deleted_at)?,
        })
    }
}

#[async_trait]
impl SectionRepositoryPort for SqliteSectionRepository {
    async fn create(&self, section: &Section) -> Result<Section, RepositoryError> {
        sqlx::query(
            r#"
            INSERT INTO sections (id, notebook_id, name, display_order, created_at, updated_at, deleted_at)
            VALUES (?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(section.id.to_string())
        .bind(section.notebook_id.to_string())
        .bind(&section.name)
        .bind(section.display_order)
        .bind(encode_time(section.created_at))
        .bind(encode_time(section.updated_at))
        .bind(section.deleted_at.map(encode_time))
        .execute(&self.pool)
        .await
        .map_err(db_error)?;

        self.fetch(section.id).await
    }

    async fn get_by_id(&self, id: SectionId) -> Result<Option<Section>, RepositoryError> {
        let row: Option<SectionRow> = sqlx::query_as(&format!(
            "SELECT {} FROM sections WHERE id = ?",
            SECTION_COLUMNS
        ))
        .bind(id.to_string())
        .fetch_optional(&self.pool)
        .await
        .map_err(db_error)?;

        row.map(Section::try_from).transpose()
    }

    async fn get_by_notebook_id(
        &self,
        notebook_id: NotebookId,
        include_deleted: bool,
    ) -> Result<Vec<Section>, RepositoryError> {
        let filter = if include_deleted {
            ""
        } else {
            "AND deleted_at IS NULL"
        };
        let rows: Vec<SectionRow> = sqlx::query_as(&format!(
            "SELECT {} FROM sections WHERE notebook_id = ? {} ORDER BY display_order ASC, created_at ASC",
            SECTION_COLUMNS, filter
        ))
        .bind(notebook_id.to_string())
        .fetch_all(&self.pool)
        .await
        .map_err(db_error)?;

        rows.into_iter().map(Section::try_from).collect()
    }

    async fn get_all(&self, include_deleted: bool) -> Result<Vec<Section>, RepositoryError> {
        let filter = if include_deleted {
            ""
        } else {
            "WHERE deleted_at IS NULL"
        };
        let rows: Vec<SectionRow> = sqlx::query_as(&format!(
            "SELECT {} FROM sections {} ORDER BY display_order ASC, created_at ASC",
            SECTION_COLUMNS, filter
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(db_error)?;

        rows.into_iter().map(Section::try_from).collect()
    }

    async fn update(&self, section: &Section) -> Result<Section, RepositoryError> {
        let result = sqlx::query(
            "UPDATE sections SET name = ?, display_order = ?, updated_at = ? WHERE id = ?",
        )
        .bind(&section.name)
        .bind(section.display_order)
        .bind(encode_time(Utc::now()))
        .bind(section.id.to_string())
        .execute(&self.pool)
        .await
        .map_err(db_error)?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound(format!("Section {}", section.id)));
        }
        self.fetch(section.id).await
    }

    async fn delete(&self, id: SectionId) -> Result<bool, RepositoryError> {
        let result = sqlx::query("UPDATE sections SET deleted_at = ? WHERE id = ?")
            .bind(encode_time(Utc::now()))
            .bind(id.to_string())
            .execute(&self.pool)
            .await
            .map_err(db_error)?;

        Ok(result.rows_affected() > 0)
    }

    async fn restore(&self, id: SectionId) -> Result<bool, RepositoryError> {
        let result = sqlx::query("UPDATE sections SET deleted_at = NULL WHERE id = ?")
            .bind(id.to_string())
            .execute(&self.pool)
            .await
            .map_err(db_error)?;

        Ok(result.rows_affected() > 0)
    }

    async fn reorder(&self, id: SectionId, new_order: i32) -> Result<Section, RepositoryError> {
        let result =
            sqlx::query("UPDATE sections SET display_order = ?, updated_at = ? WHERE id = ?")
                .bind(new_order)
                .bind(encode_time(Utc::now()))
                .bind(id.to_string())
                .execute(&self.pool)
                .await
                .map_err(db_error)?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound(format!("Section {}", id)));
        }
        self.fetch(id).await
    }
}
