//! 订单查询

use common::types::Pagination;
use errors::{AppError, AppResult};

use crate::domain::enums::OrderStatus;
use crate::domain::value_objects::OrderId;

/// 分页查询订单
#[derive(Debug, Clone)]
pub struct FindAllOrdersQuery {
    pub status: Option<OrderStatus>,
    pub pagination: Pagination,
}

impl FindAllOrdersQuery {
    pub fn validate(&self) -> AppResult<()> {
        if self.pagination.page < 1 {
            return Err(AppError::validation("Page must be at least 1"));
        }
        if self.pagination.page_size < 1 {
            return Err(AppError::validation("Page size must be at least 1"));
        }
        Ok(())
    }
}

/// 获取单个订单
#[derive(Debug, Clone)]
pub struct FindOneOrderQuery {
    pub order_id: OrderId,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_rejects_zero_page() {
        let query = FindAllOrdersQuery {
            status: None,
            pagination: Pagination::new(0, 10),
        };
        assert!(query.validate().is_err());
    }

    #[test]
    fn validate_rejects_zero_page_size() {
        let query = FindAllOrdersQuery {
            status: None,
            pagination: Pagination::new(1, 0),
        };
        assert!(query.validate().is_err());
    }

    #[test]
    fn validate_accepts_defaults() {
        let query = FindAllOrdersQuery {
            status: Some(OrderStatus::Paid),
            pagination: Pagination::default(),
        };
        assert!(query.validate().is_ok());
    }
}
