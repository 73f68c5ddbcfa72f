//! API 层 - gRPC 服务实现

pub mod conversions;
mod grpc_service;
pub mod proto;

pub use grpc_service::OrdersServiceImpl;
