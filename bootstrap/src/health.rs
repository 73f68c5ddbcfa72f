//! 健康检查 HTTP 端点
//!
//! /health 返回存活状态，/ready 探测下游依赖后返回就绪状态。

use std::net::SocketAddr;

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use serde::Serialize;
use sqlx::PgPool;
use tracing::info;

/// 健康报告
#[derive(Debug, Serialize)]
pub struct HealthReport {
    pub service: String,
    pub status: &'static str,
    pub components: Vec<ComponentReport>,
}

/// 单个依赖的探测结果
#[derive(Debug, Serialize)]
pub struct ComponentReport {
    pub name: &'static str,
    pub healthy: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl HealthReport {
    fn new(service: &str, components: Vec<ComponentReport>) -> Self {
        let status = if components.iter().all(|c| c.healthy) {
            "ok"
        } else {
            "degraded"
        };
        Self {
            service: service.to_string(),
            status,
            components,
        }
    }

    pub fn is_ok(&self) -> bool {
        self.status == "ok"
    }
}

/// 健康检查 HTTP 服务器
///
/// 与 gRPC 服务并行运行，监听独立端口。
#[derive(Clone)]
pub struct HealthServer {
    service_name: String,
    pool: PgPool,
    port: u16,
}

impl HealthServer {
    pub fn new(service_name: impl Into<String>, pool: PgPool, port: u16) -> Self {
        Self {
            service_name: service_name.into(),
            pool,
            port,
        }
    }

    /// 存活检查，不触达任何依赖
    fn liveness(&self) -> HealthReport {
        HealthReport::new(&self.service_name, Vec::new())
    }

    /// 就绪检查，逐个探测下游依赖
    async fn readiness(&self) -> HealthReport {
        let postgres = match sqlx::query("SELECT 1").execute(&self.pool).await {
            Ok(_) => ComponentReport {
                name: "postgres",
                healthy: true,
                detail: None,
            },
            Err(e) => ComponentReport {
                name: "postgres",
                healthy: false,
                detail: Some(e.to_string()),
            },
        };

        HealthReport::new(&self.service_name, vec![postgres])
    }

    /// 绑定端口并开始服务
    pub async fn serve(self) -> Result<(), std::io::Error> {
        let addr = SocketAddr::from(([0, 0, 0, 0], self.port));
        info!(%addr, "Health check HTTP server starting");

        let app = Router::new()
            .route("/health", get(health_handler))
            .route("/ready", get(ready_handler))
            .with_state(self);

        let listener = tokio::net::TcpListener::bind(addr).await?;
        axum::serve(listener, app).await
    }
}

async fn health_handler(State(server): State<HealthServer>) -> impl IntoResponse {
    (StatusCode::OK, Json(server.liveness()))
}

async fn ready_handler(State(server): State<HealthServer>) -> impl IntoResponse {
    let report = server.readiness().await;
    let code = if report.is_ok() {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };
    (code, Json(report))
}
