//! 仓储与外部依赖接口

mod order_repository;
mod product_catalog;

pub use order_repository::*;
pub use product_catalog::*;
