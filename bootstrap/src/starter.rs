//! 服务启动器
//!
//! 所有微服务共用的启动入口：加载配置、初始化运行时、装配基础设施、
//! 拉起健康检查端点，最后交给业务闭包注册 gRPC 服务。

use std::future::Future;
use std::net::SocketAddr;

use config::AppConfig;
use errors::AppResult;
use tonic::transport::Server;
use tonic::transport::server::Router;
use tracing::{error, info};

use crate::health::HealthServer;
use crate::infrastructure::Infrastructure;
use crate::runtime::init_runtime;
use crate::shutdown::shutdown_signal;

/// 健康检查端口相对 gRPC 端口的偏移
const HEALTH_PORT_OFFSET: u16 = 1000;

/// 启动一个 gRPC 服务
///
/// 业务闭包在基础设施就绪后被调用，负责注册服务并返回路由，
/// 服务器随 Ctrl+C / SIGTERM 优雅退出。
///
/// # 示例
///
/// ```ignore
/// use bootstrap::run_server;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     run_server("config", |infra, mut server| async move {
///         let service = MyServiceImpl::new(infra.postgres_pool());
///         Ok(server.add_service(MyServiceServer::new(service)))
///     })
///     .await
/// }
/// ```
pub async fn run_server<F, Fut>(
    config_dir: &str,
    service_builder: F,
) -> Result<(), Box<dyn std::error::Error>>
where
    F: FnOnce(Infrastructure, Server) -> Fut,
    Fut: Future<Output = AppResult<Router>>,
{
    let config = AppConfig::load(config_dir)?;
    init_runtime(&config);
    info!("Starting {} service", config.app_name);

    let infra = Infrastructure::from_config(config.clone()).await?;

    // 健康检查端点在独立端口上与 gRPC 服务并行运行
    let health_port = config.server.port + HEALTH_PORT_OFFSET;
    let health = HealthServer::new(&config.app_name, infra.postgres_pool(), health_port);
    let health_handle = tokio::spawn(async move {
        if let Err(e) = health.serve().await {
            error!("Health server error: {}", e);
        }
    });

    let addr: SocketAddr = config.server.listen_addr().parse()?;
    let router = service_builder(infra, Server::builder()).await?;

    info!(%addr, "gRPC server starting");
    router.serve_with_shutdown(addr, shutdown_signal()).await?;

    health_handle.abort();
    info!("Service stopped");

    Ok(())
}
