//! Folio - 分层笔记服务
//!
//! 架构设计: DDD + CQRS + Hexagonal Architecture
//!
//! 领域层 (domain/):
//! - Notebook / Section / Page 三级结构，页面可嵌套
//! - 软删除生命周期与字段校验
//!
//! 应用层 (application/):
//! - Ports: 仓储端口
//! - Commands: CQRS 命令处理器（含级联删除检查与环检测）
//! - Queries: CQRS 查询处理器（含全文搜索）
//!
//! 基础设施层 (infrastructure/):
//! - HTTP: RESTful API
//! - Persistence: SQLite 存储
//! - Memory: 内存仓储实现

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::{load_config, AppConfig};
