//! OrdersService gRPC 实现

use std::sync::Arc;

use common::types::Pagination;
use tonic::{Request, Response, Status};
use tracing::info;

use crate::application::ServiceHandler;
use crate::application::commands::{ChangeOrderStatusCommand, CreateOrderCommand};
use crate::application::queries::{FindAllOrdersQuery, FindOneOrderQuery};

use super::conversions;
use super::proto::orders::v1::{
    ChangeOrderStatusRequest, CreateOrderRequest, FindAllOrdersRequest, FindAllOrdersResponse,
    FindOneOrderRequest, OrderView, OrdersService,
};

/// OrdersService 实现
pub struct OrdersServiceImpl {
    handler: Arc<ServiceHandler>,
}

impl OrdersServiceImpl {
    pub fn new(handler: Arc<ServiceHandler>) -> Self {
        Self { handler }
    }
}

#[tonic::async_trait]
impl OrdersService for OrdersServiceImpl {
    /// 创建订单
    async fn create_order(
        &self,
        request: Request<CreateOrderRequest>,
    ) -> Result<Response<OrderView>, Status> {
        let req = request.into_inner();
        info!("CreateOrder request with {} items", req.items.len());

        let cmd = CreateOrderCommand {
            items: req
                .items
                .into_iter()
                .map(conversions::item_input_to_request)
                .collect(),
        };

        let details = self.handler.create_order(cmd).await?;

        Ok(Response::new(conversions::order_details_to_proto(details)))
    }

    /// 分页查询订单
    async fn find_all_orders(
        &self,
        request: Request<FindAllOrdersRequest>,
    ) -> Result<Response<FindAllOrdersResponse>, Status> {
        let req = request.into_inner();

        let query = FindAllOrdersQuery {
            status: conversions::parse_status_filter(&req.status)?,
            pagination: Pagination::new(req.page, req.limit),
        };

        let result = self.handler.find_all_orders(query).await?;

        Ok(Response::new(conversions::paged_orders_to_proto(result)))
    }

    /// 获取单个订单
    async fn find_one_order(
        &self,
        request: Request<FindOneOrderRequest>,
    ) -> Result<Response<OrderView>, Status> {
        let req = request.into_inner();

        let query = FindOneOrderQuery {
            order_id: conversions::parse_order_id(&req.id)?,
        };

        let details = self.handler.find_one_order(query).await?;

        Ok(Response::new(conversions::order_details_to_proto(details)))
    }

    /// 更新订单状态
    async fn change_order_status(
        &self,
        request: Request<ChangeOrderStatusRequest>,
    ) -> Result<Response<OrderView>, Status> {
        let req = request.into_inner();

        let cmd = ChangeOrderStatusCommand {
            order_id: conversions::parse_order_id(&req.id)?,
            status: conversions::parse_status(&req.status)?,
        };

        let order = self.handler.change_order_status(cmd).await?;

        Ok(Response::new(conversions::order_to_proto(order, Vec::new())))
    }
}
