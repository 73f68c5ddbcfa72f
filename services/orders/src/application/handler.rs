//! 业务逻辑处理器

use std::sync::Arc;

use common::types::PagedResult;
use errors::{AppError, AppResult};
use tracing::{info, warn};

use crate::application::commands::{ChangeOrderStatusCommand, CreateOrderCommand};
use crate::application::dto::{OrderDetails, OrderItemDetails};
use crate::application::queries::{FindAllOrdersQuery, FindOneOrderQuery};
use crate::domain::entities::{Order, OrderItem, OrderWithItems};
use crate::domain::repositories::{OrderRepository, ProductCatalog};

/// 订单服务处理器
pub struct ServiceHandler {
    order_repo: Arc<dyn OrderRepository>,
    product_catalog: Arc<dyn ProductCatalog>,
}

impl ServiceHandler {
    pub fn new(
        order_repo: Arc<dyn OrderRepository>,
        product_catalog: Arc<dyn ProductCatalog>,
    ) -> Self {
        Self {
            order_repo,
            product_catalog,
        }
    }

    /// 创建订单
    pub async fn create_order(&self, cmd: CreateOrderCommand) -> AppResult<OrderDetails> {
        info!("Creating order with {} items", cmd.items.len());

        // 1. 验证命令
        cmd.validate()?;

        // 2. 调用商品服务，一次校验全部去重后的商品 ID
        let product_ids = cmd.distinct_product_ids();
        let products = self.product_catalog.validate_products(&product_ids).await?;

        // 3. 逐项匹配商品，任一缺失则整单拒绝
        let mut items = Vec::with_capacity(cmd.items.len());
        let mut details = Vec::with_capacity(cmd.items.len());
        for requested in &cmd.items {
            let product = products
                .iter()
                .find(|p| p.id == requested.product_id)
                .ok_or_else(|| {
                    warn!(
                        "Order rejected: product {} not found in catalog",
                        requested.product_id
                    );
                    AppError::validation(format!(
                        "Product with id {} not found",
                        requested.product_id
                    ))
                })?;

            items.push(OrderItem::new(&product.id, product.price, requested.quantity));
            details.push(OrderItemDetails {
                product_id: product.id.clone(),
                name: product.name.clone(),
                price: product.price,
                quantity: requested.quantity,
            });
        }

        // 4. 构建聚合，汇总金额与总件数在此计算
        let order = OrderWithItems::create(items);

        // 5. 订单与行项目在单事务内落库
        self.order_repo.create(&order).await?;

        info!("Order created successfully: {}", order.order.id);
        Ok(OrderDetails {
            order: order.order,
            items: details,
        })
    }

    /// 分页查询订单
    pub async fn find_all_orders(&self, query: FindAllOrdersQuery) -> AppResult<PagedResult<Order>> {
        info!(
            "Listing orders, status: {:?}, page: {}, page_size: {}",
            query.status, query.pagination.page, query.pagination.page_size
        );

        // 1. 验证查询参数
        query.validate()?;

        // 2. 查询
        let result = self
            .order_repo
            .list(query.status, query.pagination)
            .await?;

        info!("Found {} orders", result.total);
        Ok(result)
    }

    /// 获取单个订单，行项目标注商品名称
    pub async fn find_one_order(&self, query: FindOneOrderQuery) -> AppResult<OrderDetails> {
        info!("Getting order: {}", query.order_id);

        // 1. 查找订单
        let OrderWithItems { order, items } = self
            .order_repo
            .find_by_id(&query.order_id)
            .await?
            .ok_or_else(|| {
                AppError::not_found(format!("Order with id {} not found", query.order_id))
            })?;

        // 2. 从商品目录取当前名称做标注，价格保持下单快照
        let details = self.annotate_items(&order, items).await?;

        Ok(OrderDetails {
            order,
            items: details,
        })
    }

    /// 更新订单状态
    pub async fn change_order_status(&self, cmd: ChangeOrderStatusCommand) -> AppResult<Order> {
        info!("Changing order {} status to {}", cmd.order_id, cmd.status);

        // 1. 先确认订单存在
        self.order_repo
            .find_by_id(&cmd.order_id)
            .await?
            .ok_or_else(|| {
                AppError::not_found(format!("Order with id {} not found", cmd.order_id))
            })?;

        // 2. 无条件写入目标状态
        let order = self
            .order_repo
            .update_status(&cmd.order_id, cmd.status)
            .await?;

        info!("Order {} status changed to {}", order.id, order.status);
        Ok(order)
    }

    /// 为行项目标注商品名称
    ///
    /// 已落库订单引用的商品在目录中解析失败视为数据不一致，按内部错误处理，
    /// 不允许静默返回缺名的行项目。
    async fn annotate_items(
        &self,
        order: &Order,
        items: Vec<OrderItem>,
    ) -> AppResult<Vec<OrderItemDetails>> {
        let mut product_ids: Vec<String> = Vec::with_capacity(items.len());
        for item in &items {
            if !product_ids.contains(&item.product_id) {
                product_ids.push(item.product_id.clone());
            }
        }

        let products = self.product_catalog.validate_products(&product_ids).await?;

        items
            .into_iter()
            .map(|item| {
                let product = products
                    .iter()
                    .find(|p| p.id == item.product_id)
                    .ok_or_else(|| {
                        AppError::internal(format!(
                            "Product {} referenced by order {} is missing from catalog",
                            item.product_id, order.id
                        ))
                    })?;

                Ok(OrderItemDetails {
                    product_id: item.product_id,
                    name: product.name.clone(),
                    price: item.price,
                    quantity: item.quantity,
                })
            })
            .collect()
    }
}
