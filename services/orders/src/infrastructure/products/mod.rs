//! 外部商品服务接入

mod grpc_catalog;

pub use grpc_catalog::GrpcProductCatalog;
