//! 服务结果封装
//!
//! 成功携带数据与提示信息，失败携带 [`ApplicationError`]

use crate::application::error::ApplicationError;

/// 成功结果
#[derive(Debug, Clone)]
pub struct Success<T> {
    pub data: T,
    pub message: String,
}

impl<T> Success<T> {
    pub fn new(data: T, message: impl Into<String>) -> Self {
        Self {
            data,
            message: message.into(),
        }
    }

    pub fn into_data(self) -> T {
        self.data
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Success<U> {
        Success {
            data: f(self.data),
            message: self.message,
        }
    }
}

/// 所有命令/查询处理器的返回类型
pub type ServiceResult<T> = Result<Success<T>, ApplicationError>;
