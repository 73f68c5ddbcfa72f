//! 订单命令

use std::collections::HashSet;

use errors::{AppError, AppResult};

use crate::domain::enums::OrderStatus;
use crate::domain::value_objects::OrderId;

/// 创建订单的行项目请求
#[derive(Debug, Clone)]
pub struct OrderItemRequest {
    pub product_id: String,
    pub quantity: i32,
}

/// 创建订单命令
#[derive(Debug, Clone)]
pub struct CreateOrderCommand {
    pub items: Vec<OrderItemRequest>,
}

impl CreateOrderCommand {
    pub fn validate(&self) -> AppResult<()> {
        if self.items.is_empty() {
            return Err(AppError::validation("Order must contain at least one item"));
        }

        for item in &self.items {
            if item.product_id.trim().is_empty() {
                return Err(AppError::validation("Product id must not be empty"));
            }
            if item.quantity < 1 {
                return Err(AppError::validation(format!(
                    "Quantity must be at least 1 for product {}",
                    item.product_id
                )));
            }
        }

        Ok(())
    }

    /// 去重后的商品 ID 列表，保持首次出现顺序
    pub fn distinct_product_ids(&self) -> Vec<String> {
        let mut seen = HashSet::new();
        self.items
            .iter()
            .filter(|item| seen.insert(item.product_id.clone()))
            .map(|item| item.product_id.clone())
            .collect()
    }
}

/// 更新订单状态命令
#[derive(Debug, Clone)]
pub struct ChangeOrderStatusCommand {
    pub order_id: OrderId,
    pub status: OrderStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(product_id: &str, quantity: i32) -> OrderItemRequest {
        OrderItemRequest {
            product_id: product_id.to_string(),
            quantity,
        }
    }

    #[test]
    fn validate_rejects_empty_order() {
        let cmd = CreateOrderCommand { items: vec![] };
        assert!(cmd.validate().is_err());
    }

    #[test]
    fn validate_rejects_empty_product_id() {
        let cmd = CreateOrderCommand {
            items: vec![item("", 1)],
        };
        assert!(cmd.validate().is_err());
    }

    #[test]
    fn validate_rejects_non_positive_quantity() {
        let cmd = CreateOrderCommand {
            items: vec![item("p1", 0)],
        };
        assert!(cmd.validate().is_err());

        let cmd = CreateOrderCommand {
            items: vec![item("p1", -3)],
        };
        assert!(cmd.validate().is_err());
    }

    #[test]
    fn validate_accepts_well_formed_command() {
        let cmd = CreateOrderCommand {
            items: vec![item("p1", 2), item("p2", 1)],
        };
        assert!(cmd.validate().is_ok());
    }

    #[test]
    fn distinct_product_ids_deduplicates_keeping_order() {
        let cmd = CreateOrderCommand {
            items: vec![item("p1", 1), item("p2", 1), item("p1", 3)],
        };
        assert_eq!(cmd.distinct_product_ids(), vec!["p1", "p2"]);
    }
}
