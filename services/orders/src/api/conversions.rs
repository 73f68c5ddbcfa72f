//! 领域类型与线上消息的转换

use chrono::{DateTime, Utc};
use common::types::PagedResult;
use errors::{AppError, AppResult};
use rust_decimal::prelude::ToPrimitive;

use crate::application::commands::OrderItemRequest;
use crate::application::dto::{OrderDetails, OrderItemDetails};
use crate::domain::entities::Order;
use crate::domain::enums::OrderStatus;
use crate::domain::value_objects::OrderId;

use super::proto::orders::v1::{
    FindAllOrdersResponse, OrderItemInput, OrderItemView, OrderView, PaginationMeta,
};

/// 解析订单 ID
pub fn parse_order_id(value: &str) -> AppResult<OrderId> {
    value
        .parse::<OrderId>()
        .map_err(|_| AppError::validation(format!("Invalid order id: {}", value)))
}

/// 解析订单状态
pub fn parse_status(value: &str) -> AppResult<OrderStatus> {
    OrderStatus::parse(value)
}

/// 解析可选的状态过滤，空字符串表示不过滤
pub fn parse_status_filter(value: &str) -> AppResult<Option<OrderStatus>> {
    if value.is_empty() {
        Ok(None)
    } else {
        Ok(Some(OrderStatus::parse(value)?))
    }
}

pub fn item_input_to_request(input: OrderItemInput) -> OrderItemRequest {
    OrderItemRequest {
        product_id: input.product_id,
        quantity: input.quantity as i32,
    }
}

fn to_timestamp(dt: &DateTime<Utc>) -> prost_types::Timestamp {
    prost_types::Timestamp {
        seconds: dt.timestamp(),
        nanos: dt.timestamp_subsec_nanos() as i32,
    }
}

/// 订单头转视图，行项目由调用方提供（状态更新等场景为空）
pub fn order_to_proto(order: Order, items: Vec<OrderItemView>) -> OrderView {
    OrderView {
        id: order.id.to_string(),
        total_amount: order.total_amount.to_f64().unwrap_or_default(),
        total_items: order.total_items as u32,
        status: order.status.as_str().to_string(),
        created_at: Some(to_timestamp(&order.created_at)),
        updated_at: Some(to_timestamp(&order.updated_at)),
        items,
    }
}

fn item_details_to_proto(item: OrderItemDetails) -> OrderItemView {
    OrderItemView {
        product_id: item.product_id,
        price: item.price.to_f64().unwrap_or_default(),
        quantity: item.quantity as u32,
        name: item.name,
    }
}

pub fn order_details_to_proto(details: OrderDetails) -> OrderView {
    let items = details
        .items
        .into_iter()
        .map(item_details_to_proto)
        .collect();
    order_to_proto(details.order, items)
}

pub fn paged_orders_to_proto(result: PagedResult<Order>) -> FindAllOrdersResponse {
    let meta = PaginationMeta {
        total: result.total,
        page: result.page,
        last_page: result.total_pages(),
    };

    FindAllOrdersResponse {
        data: result
            .items
            .into_iter()
            .map(|order| order_to_proto(order, Vec::new()))
            .collect(),
        meta: Some(meta),
    }
}
