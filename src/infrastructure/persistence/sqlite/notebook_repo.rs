//! SQLite Notebook Repository

use async_trait::async_trait;
use chrono::Utc;
use sqlx::FromRow;

use super::{db_error, decode_optional_time, decode_time, decode_uuid, encode_time, DbPool};
use crate::application::ports::{NotebookRepositoryPort, RepositoryError};
use crate::domain::{Notebook, NotebookId};

const NOTEBOOK_COLUMNS: &str = "id, name, color, created_at, updated_at, deleted_at";

/// SQLite Notebook Repository
pub struct SqliteNotebookRepository {
    pool: DbPool,
}

impl SqliteNotebookRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    async fn fetch(&self, id: NotebookId) -> Result<Notebook, RepositoryError> {
        self.get_by_id(id)
            .await?
            .ok_or_else(|| RepositoryError::NotFound(format!("Notebook {}", id)))
    }
}

#[derive(FromRow)]
struct NotebookRow {
    id: String,
    name: String,
    color: String,
    created_at: String,
    updated_at: String,
    deleted_at: Option<String>,
}

impl TryFrom<NotebookRow> for Notebook {
    type Error = RepositoryError;

    fn try_from(row: NotebookRow) -> Result<Self, Self::Error> {
        Ok(Notebook {
            id: NotebookId::from_uuid(decode_uuid(&row.id)?),
            name: row.name,
            color: row.color,
            created_at: decode_time(&row.created_at)?,
            updated_at: decode_time(&row.updated_at)?,
            deleted_at: decode_optional_time(row.deleted_at)?,
        })
    }
}

#[async_trait]
impl NotebookRepositoryPort for SqliteNotebookRepository {
    async fn create(&self, notebook: &Notebook) -> Result<Notebook, RepositoryError> {
        sqlx::query(
            r#"
            INSERT INTO notebooks (id, name, color, created_at, updated_at, deleted_at)
            VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(notebook.id.to_string())
        .bind(&notebook.name)
        .bind(&notebook.color)
        .bind(encode_time(notebook.created_at))
        .bind(encode_time(notebook.updated_at))
        .bind(notebook.deleted_at.map(encode_time))
        .execute(&self.pool)
        .await
        .map_err(db_error)?;

        self.fetch(notebook.id).await
    }

    async fn get_by_id(&self, id: NotebookId) -> Result<Option<Notebook>, RepositoryError> {
        let row: Option<NotebookRow> = sqlx::query_as(&format!(
            "SELECT {} FROM notebooks WHERE id = ?",
            NOTEBOOK_COLUMNS
        ))
        .bind(id.to_string())
        .fetch_optional(&self.pool)
        .await
        .map_err(db_error)?;

        row.map(Notebook::try_from).transpose()
    }

    async fn get_all(&self, include_deleted: bool) -> Result<Vec<Notebook>, RepositoryError> {
        let filter = if include_deleted {
            ""
        } else {
            "WHERE deleted_at IS NULL"
        };
        let rows: Vec<NotebookRow> = sqlx::query_as(&format!(
            "SELECT {} FROM notebooks {} ORDER BY created_at DESC",
            NOTEBOOK_COLUMNS, filter
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(db_error)?;

        rows.into_iter().map(Notebook::try_from).collect()
    }

    async fn update(&self, notebook: &Notebook) -> Result<Notebook, RepositoryError> {
        let result = sqlx::query(
            "UPDATE notebooks SET name = ?, color = ?, updated_at = ? WHERE id = ?",
        )
        .bind(&notebook.name)
        .bind(&notebook.color)
        .bind(encode_time(Utc::now()))
        .bind(notebook.id.to_string())
        .execute(&self.pool)
        .await
        .map_err(db_error)?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound(format!("Notebook {}", notebook.id)));
        }
        self.fetch(notebook.id).await
    }

    async fn delete(&self, id: NotebookId) -> Result<bool, RepositoryError> {
        let result = sqlx::query("UPDATE notebooks SET deleted_at = ? WHERE id = ?")
            .bind(encode_time(Utc::now()))
            .bind(id.to_string())
            .execute(&self.pool)
            .await
            .map_err(db_error)?;

        Ok(result.rows_affected() > 0)
    }

    async fn restore(&self, id: NotebookId) -> Result<bool, RepositoryError> {
        let result = sqlx::query("UPDATE notebooks SET deleted_at = NULL WHERE id = ?")
            .bind(id.to_string())
            .execute(&self.pool)
            .await
            .map_err(db_error)?;

        Ok(result.rows_affected() > 0)
    }
}
