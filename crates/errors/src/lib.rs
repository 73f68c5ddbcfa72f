//! mall-errors - 统一错误处理
//!
//! 服务共享的错误类型。面向调用方的类别（校验、未找到、上游不可用）
//! 原样携带消息；服务端内部类别（数据库、内部错误）在转换为 gRPC
//! 状态时只暴露概括性消息，细节进服务端日志。

use thiserror::Error;
use tracing::error;

/// 应用错误
#[derive(Debug, Error)]
pub enum AppError {
    /// 输入不合法，消息原样返回给调用方
    #[error("{0}")]
    Validation(String),

    /// 资源不存在，消息原样返回给调用方
    #[error("{0}")]
    NotFound(String),

    /// 上游服务不可用，消息已做过脱敏
    #[error("{0}")]
    ExternalService(String),

    /// 存储层失败，消息只进服务端日志
    #[error("Database error: {0}")]
    Database(String),

    /// 内部不变量被破坏，消息只进服务端日志
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn external_service(msg: impl Into<String>) -> Self {
        Self::ExternalService(msg.into())
    }

    pub fn database(msg: impl Into<String>) -> Self {
        Self::Database(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    /// 对应的 gRPC 状态码
    pub fn grpc_code(&self) -> tonic::Code {
        match self {
            Self::Validation(_) => tonic::Code::InvalidArgument,
            Self::NotFound(_) => tonic::Code::NotFound,
            Self::ExternalService(_) => tonic::Code::Unavailable,
            Self::Database(_) | Self::Internal(_) => tonic::Code::Internal,
        }
    }

    /// 消息是否可以原样返回给调用方
    fn message_is_public(&self) -> bool {
        matches!(
            self,
            Self::Validation(_) | Self::NotFound(_) | Self::ExternalService(_)
        )
    }
}

impl From<AppError> for tonic::Status {
    fn from(err: AppError) -> Self {
        let code = err.grpc_code();
        if err.message_is_public() {
            tonic::Status::new(code, err.to_string())
        } else {
            error!(error = %err, "Request failed");
            tonic::Status::new(code, "Internal server error")
        }
    }
}

/// Result 类型别名
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grpc_codes_match_error_kinds() {
        assert_eq!(
            AppError::validation("bad input").grpc_code(),
            tonic::Code::InvalidArgument
        );
        assert_eq!(
            AppError::not_found("no such order").grpc_code(),
            tonic::Code::NotFound
        );
        assert_eq!(
            AppError::external_service("upstream down").grpc_code(),
            tonic::Code::Unavailable
        );
        assert_eq!(
            AppError::database("query failed").grpc_code(),
            tonic::Code::Internal
        );
        assert_eq!(
            AppError::internal("invariant broken").grpc_code(),
            tonic::Code::Internal
        );
    }

    #[test]
    fn client_facing_kinds_keep_their_message() {
        let status: tonic::Status = AppError::not_found("Order with id 42 not found").into();
        assert_eq!(status.code(), tonic::Code::NotFound);
        assert_eq!(status.message(), "Order with id 42 not found");

        let status: tonic::Status = AppError::validation("Quantity must be at least 1").into();
        assert_eq!(status.message(), "Quantity must be at least 1");
    }

    #[test]
    fn server_side_kinds_hide_their_detail() {
        let status: tonic::Status =
            AppError::database("INSERT INTO orders failed: connection reset").into();
        assert_eq!(status.code(), tonic::Code::Internal);
        assert_eq!(status.message(), "Internal server error");

        let status: tonic::Status = AppError::internal("product p1 missing").into();
        assert_eq!(status.message(), "Internal server error");
    }
}
