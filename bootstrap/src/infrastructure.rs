//! 基础设施资源装配
//!
//! 启动期建立数据库连接池与下游服务通道，失败按策略重试。

use std::time::Duration;

use adapter_postgres::{check_connection, create_pool};
use config::AppConfig;
use errors::{AppError, AppResult};
use sqlx::PgPool;
use tonic::transport::{Channel, Endpoint};
use tracing::info;

use crate::retry::{RetryConfig, with_retry};

/// 基础设施资源容器
///
/// 服务自身的仓储、客户端在 main 中基于这些资源装配。
pub struct Infrastructure {
    config: AppConfig,
    postgres_pool: PgPool,
    products_channel: Channel,
}

impl Infrastructure {
    /// 建立全部启动期资源
    pub async fn from_config(config: AppConfig) -> AppResult<Self> {
        let retry = RetryConfig::default();

        // PostgreSQL 连接池
        let database = config.database.clone();
        let postgres_pool = with_retry(&retry, "PostgreSQL connection", || {
            let cfg = database.clone();
            async move { create_pool(&cfg).await }
        })
        .await?;
        check_connection(&postgres_pool).await?;
        info!(
            max_connections = config.database.max_connections,
            "PostgreSQL connection pool created"
        );

        // 商品服务 gRPC 通道
        let products_channel = connect_products(&config, &retry).await?;
        info!(
            endpoint = %config.products.endpoint(),
            "Products service channel established"
        );

        Ok(Self {
            config,
            postgres_pool,
            products_channel,
        })
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn postgres_pool(&self) -> PgPool {
        self.postgres_pool.clone()
    }

    pub fn products_channel(&self) -> Channel {
        self.products_channel.clone()
    }

    pub fn server_config(&self) -> &config::ServerConfig {
        &self.config.server
    }
}

async fn connect_products(config: &AppConfig, retry: &RetryConfig) -> AppResult<Channel> {
    let endpoint = Endpoint::from_shared(config.products.endpoint())
        .map_err(|e| AppError::external_service(format!("Invalid products endpoint: {}", e)))?
        .connect_timeout(Duration::from_millis(config.products.timeout_ms));

    with_retry(retry, "Products service connection", || {
        let endpoint = endpoint.clone();
        async move { endpoint.connect().await }
    })
    .await
    .map_err(|e| {
        AppError::external_service(format!("Failed to connect to products service: {}", e))
    })
}
