//! 订单聚合

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::enums::OrderStatus;
use crate::domain::value_objects::OrderId;

/// 订单头
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub total_amount: Decimal,
    pub total_items: i32,
    pub status: OrderStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// 订单行项目
///
/// price 是下单时刻的快照价格，之后不随商品目录变动。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderItem {
    pub product_id: String,
    pub price: Decimal,
    pub quantity: i32,
}

impl OrderItem {
    pub fn new(product_id: impl Into<String>, price: Decimal, quantity: i32) -> Self {
        Self {
            product_id: product_id.into(),
            price,
            quantity,
        }
    }

    /// 行小计 = 快照价格 × 数量
    pub fn line_total(&self) -> Decimal {
        self.price * Decimal::from(self.quantity)
    }
}

/// 订单聚合（订单头 + 行项目）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderWithItems {
    pub order: Order,
    pub items: Vec<OrderItem>,
}

impl OrderWithItems {
    /// 创建新订单
    ///
    /// 汇总金额与总件数只在这里计算一次，落库后不再重算。
    pub fn create(items: Vec<OrderItem>) -> Self {
        let total_amount: Decimal = items.iter().map(OrderItem::line_total).sum();
        let total_items: i32 = items.iter().map(|item| item.quantity).sum();
        let now = Utc::now();

        Self {
            order: Order {
                id: OrderId::new(),
                total_amount,
                total_items,
                status: OrderStatus::Pending,
                created_at: now,
                updated_at: now,
            },
            items,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_total_is_price_times_quantity() {
        let item = OrderItem::new("p1", Decimal::new(550, 2), 3);
        assert_eq!(item.line_total(), Decimal::new(1650, 2));
    }

    #[test]
    fn create_computes_totals_from_items() {
        let order = OrderWithItems::create(vec![
            OrderItem::new("p1", Decimal::from(10), 2),
            OrderItem::new("p2", Decimal::new(550, 2), 3),
        ]);

        assert_eq!(order.order.total_amount, Decimal::new(3650, 2));
        assert_eq!(order.order.total_items, 5);
        assert_eq!(order.order.status, OrderStatus::Pending);
        assert_eq!(order.order.created_at, order.order.updated_at);
        assert_eq!(order.items.len(), 2);
    }

    #[test]
    fn single_item_order_example() {
        let order = OrderWithItems::create(vec![OrderItem::new("p1", Decimal::from(10), 2)]);

        assert_eq!(order.order.total_amount, Decimal::from(20));
        assert_eq!(order.order.total_items, 2);
    }
}
