//! 商品目录访问接口

use async_trait::async_trait;
use errors::AppResult;
use rust_decimal::Decimal;

/// 商品目录返回的商品视图，只读不落库
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogProduct {
    pub id: String,
    pub name: String,
    pub price: Decimal,
}

/// 商品目录接口
///
/// 存在性与价格以商品服务为准。目录中不存在的 id 不会出现在返回值里，
/// 调用方对比请求列表自行找出缺失项。
#[async_trait]
pub trait ProductCatalog: Send + Sync {
    /// 按 id 列表校验商品，返回目录中存在的商品
    async fn validate_products(&self, ids: &[String]) -> AppResult<Vec<CatalogProduct>>;
}
