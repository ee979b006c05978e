//! Folio - 分层笔记服务
//!
//! 启动流程:
//! - 加载配置（环境变量 > 配置文件 > 默认值）
//! - 初始化日志
//! - 选择存储后端（SQLite / 内存）
//! - 启动 HTTP 服务器

use std::sync::Arc;

use folio::application::{NotebookRepositoryPort, PageRepositoryPort, SectionRepositoryPort};
use folio::config::{load_config, print_config, AppConfig, DatabaseBackend};
use folio::infrastructure::http::{AppState, HttpServer, ServerConfig};
use folio::infrastructure::memory::{
    InMemoryNotebookRepository, InMemoryPageRepository, InMemorySectionRepository,
};
use folio::infrastructure::persistence::sqlite::{
    create_pool, run_migrations, DatabaseConfig, SqliteNotebookRepository, SqlitePageRepository,
    SqliteSectionRepository,
};

type Repositories = (
    Arc<dyn NotebookRepositoryPort>,
    Arc<dyn SectionRepositoryPort>,
    Arc<dyn PageRepositoryPort>,
);

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = load_config().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;

    init_tracing(&config);

    tracing::info!("Folio - hierarchical notes service");
    print_config(&config);

    let (notebook_repo, section_repo, page_repo) = build_repositories(&config).await?;

    let server_config = ServerConfig::new(&config.server.host, config.server.port);
    let state = AppState::new(notebook_repo, section_repo, page_repo)
        .with_search_limit(config.search.default_limit);

    let server = HttpServer::new(server_config, state);

    tracing::info!("Starting HTTP server...");

    server
        .run_with_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::error!(error = %e, "Failed to listen for ctrl-c");
                return;
            }
            tracing::info!("Received shutdown signal");
        })
        .await?;

    tracing::info!("Server shutdown complete");

    Ok(())
}

/// 初始化日志，RUST_LOG 存在时优先
fn init_tracing(config: &AppConfig) {
    let log_filter = format!(
        "{},folio={},tower_http=debug",
        config.log.level, config.log.level
    );
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log_filter));

    if config.log.json {
        tracing_subscriber::fmt().json().with_env_filter(filter).init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

/// 按配置创建仓储适配器
async fn build_repositories(config: &AppConfig) -> anyhow::Result<Repositories> {
    match config.database.backend {
        DatabaseBackend::Sqlite => {
            // 确保数据目录存在
            if let Some(parent) = std::path::Path::new(&config.database.path).parent() {
                tokio::fs::create_dir_all(parent).await?;
            }

            let db_config = DatabaseConfig {
                database_url: config.database.database_url(),
                max_connections: config.database.max_connections,
            };
            let pool = create_pool(&db_config).await?;
            run_migrations(&pool).await?;

            Ok((
                Arc::new(SqliteNotebookRepository::new(pool.clone())),
                Arc::new(SqliteSectionRepository::new(pool.clone())),
                Arc::new(SqlitePageRepository::new(pool)),
            ))
        }
        DatabaseBackend::Memory => {
            tracing::warn!("Using in-memory storage, data is lost on shutdown");
            Ok((
                Arc::new(InMemoryNotebookRepository::new()),
                Arc::new(InMemorySectionRepository::new()),
                Arc::new(InMemoryPageRepository::new()),
            ))
        }
    }
}
