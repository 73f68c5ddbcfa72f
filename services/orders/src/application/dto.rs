//! 应用层返回的数据传输对象

use rust_decimal::Decimal;

use crate::domain::entities::Order;

/// 标注了商品名称的订单行项目
///
/// price 仍是订单里的快照价格，只有 name 来自商品目录的当前值。
#[derive(Debug, Clone)]
pub struct OrderItemDetails {
    pub product_id: String,
    pub name: String,
    pub price: Decimal,
    pub quantity: i32,
}

/// 订单详情
#[derive(Debug, Clone)]
pub struct OrderDetails {
    pub order: Order,
    pub items: Vec<OrderItemDetails>,
}
