//! Domain Errors

use thiserror::Error;

/// 领域不变量校验失败
///
/// 只携带第一个被违反的规则：字段名 + 可读信息
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ValidationError {
    pub field: &'static str,
    pub message: String,
}

impl ValidationError {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}
