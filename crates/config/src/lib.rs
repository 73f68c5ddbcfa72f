//! mall-config - 分层配置加载
//!
//! 加载顺序：default.toml < {APP_ENV}.toml < 环境变量，后者覆盖前者。
//! 连接串等敏感字段用 Secret 包裹，Debug 输出自动脱敏。

use figment::{
    Figment,
    providers::{Env, Format, Toml},
};
use secrecy::Secret;
use serde::Deserialize;
use thiserror::Error;

const ENV_PRODUCTION: &str = "production";
const ENV_DEVELOPMENT: &str = "development";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load config: {0}")]
    Load(#[from] figment::Error),
}

/// 应用配置根节点
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub app_name: String,
    pub app_env: String,
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub products: ProductsConfig,
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    /// 从配置目录和环境变量加载
    ///
    /// 环境变量按 `_` 分段映射到配置树，如 DATABASE_URL 对应 database.url。
    pub fn load(config_dir: &str) -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let env = app_env();
        let config = Figment::new()
            .merge(Toml::file(format!("{config_dir}/default.toml")))
            .merge(Toml::file(format!("{config_dir}/{env}.toml")))
            .merge(Env::prefixed("").split("_"))
            .extract()?;

        Ok(config)
    }

    pub fn is_production(&self) -> bool {
        self.app_env == ENV_PRODUCTION
    }

    pub fn is_development(&self) -> bool {
        self.app_env == ENV_DEVELOPMENT
    }
}

fn app_env() -> String {
    std::env::var("APP_ENV").unwrap_or_else(|_| ENV_DEVELOPMENT.to_string())
}

/// gRPC 服务器监听配置
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    /// 监听地址，host:port 形式
    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// PostgreSQL 配置
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    pub url: Secret<String>,
    #[serde(default = "defaults::max_connections")]
    pub max_connections: u32,
    #[serde(default = "defaults::connect_timeout_secs")]
    pub connect_timeout_secs: u64,
}

/// 商品服务客户端配置
#[derive(Debug, Clone, Deserialize)]
pub struct ProductsConfig {
    pub host: String,
    pub port: u16,
    #[serde(default = "defaults::products_timeout_ms")]
    pub timeout_ms: u64,
    #[serde(default = "defaults::retry_max_attempts")]
    pub retry_max_attempts: u32,
    #[serde(default = "defaults::retry_initial_delay_ms")]
    pub retry_initial_delay_ms: u64,
    #[serde(default = "defaults::retry_max_delay_ms")]
    pub retry_max_delay_ms: u64,
}

impl ProductsConfig {
    /// 商品服务的 gRPC 端点
    pub fn endpoint(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}

/// 遥测配置
#[derive(Debug, Clone, Deserialize)]
pub struct TelemetryConfig {
    #[serde(default = "defaults::log_level")]
    pub log_level: String,
}

mod defaults {
    /// 生产环境默认更大的连接池
    pub fn max_connections() -> u32 {
        match std::env::var("APP_ENV").as_deref() {
            Ok(super::ENV_PRODUCTION) => 50,
            _ => 10,
        }
    }

    pub fn connect_timeout_secs() -> u64 {
        5
    }

    pub fn products_timeout_ms() -> u64 {
        5000
    }

    pub fn retry_max_attempts() -> u32 {
        3
    }

    pub fn retry_initial_delay_ms() -> u64 {
        200
    }

    pub fn retry_max_delay_ms() -> u64 {
        2000
    }

    pub fn log_level() -> String {
        "info".to_string()
    }
}

#[cfg(test)]
mod tests;
