//! 订单状态枚举

use errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};

/// 订单状态
///
/// 状态之间不做迁移合法性约束，目标状态由调用方决定。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum OrderStatus {
    /// 待支付
    #[default]
    Pending,
    /// 已支付
    Paid,
    /// 已送达
    Delivered,
    /// 已取消
    Cancelled,
}

impl OrderStatus {
    /// 存储与线上传输使用的规范名称
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "PENDING",
            OrderStatus::Paid => "PAID",
            OrderStatus::Delivered => "DELIVERED",
            OrderStatus::Cancelled => "CANCELLED",
        }
    }

    /// 解析规范名称，区分大小写
    pub fn parse(value: &str) -> AppResult<Self> {
        match value {
            "PENDING" => Ok(OrderStatus::Pending),
            "PAID" => Ok(OrderStatus::Paid),
            "DELIVERED" => Ok(OrderStatus::Delivered),
            "CANCELLED" => Ok(OrderStatus::Cancelled),
            other => Err(AppError::validation(format!(
                "Invalid order status '{}', expected one of: PENDING, PAID, DELIVERED, CANCELLED",
                other
            ))),
        }
    }

    pub fn is_cancelled(&self) -> bool {
        matches!(self, OrderStatus::Cancelled)
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_canonical_names() {
        assert_eq!(OrderStatus::parse("PENDING").unwrap(), OrderStatus::Pending);
        assert_eq!(OrderStatus::parse("PAID").unwrap(), OrderStatus::Paid);
        assert_eq!(
            OrderStatus::parse("DELIVERED").unwrap(),
            OrderStatus::Delivered
        );
        assert_eq!(
            OrderStatus::parse("CANCELLED").unwrap(),
            OrderStatus::Cancelled
        );
    }

    #[test]
    fn parse_is_case_sensitive() {
        assert!(OrderStatus::parse("pending").is_err());
    }

    #[test]
    fn parse_rejects_unknown_names_listing_accepted_values() {
        let err = OrderStatus::parse("SHIPPED").unwrap_err();
        let message = err.to_string();
        assert!(message.contains("SHIPPED"));
        assert!(message.contains("PENDING"));
    }

    #[test]
    fn as_str_round_trips() {
        for status in [
            OrderStatus::Pending,
            OrderStatus::Paid,
            OrderStatus::Delivered,
            OrderStatus::Cancelled,
        ] {
            assert_eq!(OrderStatus::parse(status.as_str()).unwrap(), status);
        }
    }
}
