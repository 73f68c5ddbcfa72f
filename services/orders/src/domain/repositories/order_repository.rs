//! 订单仓储接口

use async_trait::async_trait;
use common::types::{PagedResult, Pagination};
use errors::AppResult;

use crate::domain::entities::{Order, OrderWithItems};
use crate::domain::enums::OrderStatus;
use crate::domain::value_objects::OrderId;

/// 订单仓储接口
#[async_trait]
pub trait OrderRepository: Send + Sync {
    /// 保存订单及其行项目，要求同一事务内完成
    async fn create(&self, order: &OrderWithItems) -> AppResult<()>;

    /// 根据 ID 查找订单（含行项目）
    async fn find_by_id(&self, id: &OrderId) -> AppResult<Option<OrderWithItems>>;

    /// 分页查询订单头，可选按状态过滤，不加载行项目
    async fn list(
        &self,
        status: Option<OrderStatus>,
        pagination: Pagination,
    ) -> AppResult<PagedResult<Order>>;

    /// 更新订单状态，返回更新后的订单头
    async fn update_status(&self, id: &OrderId, status: OrderStatus) -> AppResult<Order>;
}
