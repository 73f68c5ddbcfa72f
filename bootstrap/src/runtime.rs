//! 运行时初始化

use config::AppConfig;
use telemetry::{LogFormat, init_tracing};
use tracing::info;

/// 初始化日志与追踪
///
/// 生产环境输出 JSON 日志，其余环境输出可读文本。
pub fn init_runtime(config: &AppConfig) {
    let format = if config.is_production() {
        LogFormat::Json
    } else {
        LogFormat::Text
    };
    init_tracing(&config.telemetry.log_level, format);

    info!(
        app_name = %config.app_name,
        app_env = %config.app_env,
        "Runtime initialized"
    );
}
