//! 应用层错误定义
//!
//! 统一的命令/查询失败类型。所有预期内的业务失败（不存在、校验失败、
//! 级联阻止）以及仓储故障都以该类型返回，不会越过应用层边界。

use serde::Serialize;
use thiserror::Error;

use crate::application::ports::RepositoryError;
use crate::domain::ValidationError;

/// 失败类别，调用方按类别分派，而不是解析错误文本
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    NotFound,
    Validation,
    CascadeBlocked,
    PersistenceFault,
}

/// 字段级校验错误
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl From<ValidationError> for FieldError {
    fn from(err: ValidationError) -> Self {
        Self {
            field: err.field.to_string(),
            message: err.message,
        }
    }
}

/// 应用层错误
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// 资源未找到
    #[error("{resource_type} with id {id} not found")]
    NotFound {
        resource_type: &'static str,
        id: String,
    },

    /// 校验错误
    #[error("Validation failed: {message}")]
    Validation {
        message: String,
        errors: Vec<FieldError>,
    },

    /// 存在未删除的子项，拒绝删除
    #[error("{0}")]
    CascadeBlocked(String),

    /// 仓储故障
    #[error("Failed to {action}: {source}")]
    Persistence {
        action: &'static str,
        #[source]
        source: RepositoryError,
    },
}

impl ApplicationError {
    /// 创建 NotFound 错误
    pub fn not_found(resource_type: &'static str, id: impl ToString) -> Self {
        Self::NotFound {
            resource_type,
            id: id.to_string(),
        }
    }

    /// 创建字段级校验错误
    pub fn invalid_field(field: &'static str, message: impl Into<String>) -> Self {
        ValidationError::new(field, message).into()
    }

    /// 创建级联阻止错误
    pub fn cascade_blocked(message: impl Into<String>) -> Self {
        Self::CascadeBlocked(message.into())
    }

    /// 包装仓储故障，action 描述失败的操作（如 "update page"）
    pub fn persistence(action: &'static str, source: RepositoryError) -> Self {
        Self::Persistence { action, source }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::NotFound { .. } => ErrorKind::NotFound,
            Self::Validation { .. } => ErrorKind::Validation,
            Self::CascadeBlocked(_) => ErrorKind::CascadeBlocked,
            Self::Persistence { .. } => ErrorKind::PersistenceFault,
        }
    }

    /// 结构化的字段错误，只有校验失败时非空
    pub fn field_errors(&self) -> &[FieldError] {
        match self {
            Self::Validation { errors, .. } => errors,
            _ => &[],
        }
    }
}

impl From<ValidationError> for ApplicationError {
    fn from(err: ValidationError) -> Self {
        Self::Validation {
            message: err.message.clone(),
            errors: vec![err.into()],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message() {
        let err = ApplicationError::not_found("Section", "abc");
        assert_eq!(err.to_string(), "Section with id abc not found");
        assert_eq!(err.kind(), ErrorKind::NotFound);
    }

    #[test]
    fn test_validation_carries_field() {
        let err: ApplicationError = ValidationError::new("name", "Notebook name cannot be empty").into();
        assert_eq!(err.to_string(), "Validation failed: Notebook name cannot be empty");
        assert_eq!(err.kind(), ErrorKind::Validation);
        assert_eq!(err.field_errors().len(), 1);
        assert_eq!(err.field_errors()[0].field, "name");
    }

    #[test]
    fn test_persistence_wraps_source_text() {
        let err = ApplicationError::persistence(
            "update section",
            RepositoryError::DatabaseError("disk full".to_string()),
        );
        assert_eq!(err.kind(), ErrorKind::PersistenceFault);
        assert_eq!(
            err.to_string(),
            "Failed to update section: Database error: disk full"
        );
        assert!(err.field_errors().is_empty());
    }
}
