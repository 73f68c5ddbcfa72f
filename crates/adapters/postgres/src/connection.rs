//! PostgreSQL 连接管理

use std::time::Duration;

use config::DatabaseConfig;
use errors::{AppError, AppResult};
use secrecy::ExposeSecret;
use sqlx::postgres::{PgPool, PgPoolOptions};

const MIN_CONNECTIONS: u32 = 1;
const IDLE_TIMEOUT: Duration = Duration::from_secs(600);

/// 按数据库配置创建连接池
pub async fn create_pool(config: &DatabaseConfig) -> AppResult<PgPool> {
    PgPoolOptions::new()
        .min_connections(MIN_CONNECTIONS)
        .max_connections(config.max_connections)
        .acquire_timeout(Duration::from_secs(config.connect_timeout_secs))
        .idle_timeout(IDLE_TIMEOUT)
        .connect(config.url.expose_secret())
        .await
        .map_err(|e| AppError::database(format!("创建连接池失败: {}", e)))
}

/// 连通性检查
pub async fn check_connection(pool: &PgPool) -> AppResult<()> {
    sqlx::query("SELECT 1")
        .execute(pool)
        .await
        .map_err(|e| AppError::database(format!("数据库连通性检查失败: {}", e)))?;
    Ok(())
}
