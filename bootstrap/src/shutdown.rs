//! 进程退出信号

use tracing::info;

/// 等待进程退出信号
///
/// 同时监听 Ctrl+C 与 SIGTERM（Unix），任一到达即返回。
pub async fn shutdown_signal() {
    tokio::select! {
        _ = ctrl_c() => info!("Ctrl+C received, shutting down"),
        _ = sigterm() => info!("SIGTERM received, shutting down"),
    }
}

async fn ctrl_c() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to listen for Ctrl+C");
}

#[cfg(unix)]
async fn sigterm() {
    tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
        .expect("Failed to listen for SIGTERM")
        .recv()
        .await;
}

#[cfg(not(unix))]
async fn sigterm() {
    std::future::pending::<()>().await;
}
