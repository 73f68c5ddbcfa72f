//! Orders Service - 订单管理微服务
//!
//! 提供订单的创建、分页查询、详情获取与状态更新。
//! 商品存在性与价格由商品服务通过 gRPC 校验。

use std::sync::Arc;

use bootstrap::run_server;
use errors::AppError;
use tracing::info;

use mall_orders::api::OrdersServiceImpl;
use mall_orders::api::proto::orders::v1::OrdersServiceServer;
use mall_orders::application::ServiceHandler;
use mall_orders::infrastructure::persistence::PostgresOrderRepository;
use mall_orders::infrastructure::products::GrpcProductCatalog;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    run_server("config", |infra, mut server| async move {
        info!("Initializing Orders Service...");

        let pool = infra.postgres_pool();

        // 数据库结构迁移
        sqlx::migrate!("./migrations")
            .run(&pool)
            .await
            .map_err(|e| AppError::database(format!("数据库迁移失败: {}", e)))?;
        info!("Database migrations applied");

        // 依赖装配
        let order_repo = Arc::new(PostgresOrderRepository::new(pool));
        let product_catalog = Arc::new(GrpcProductCatalog::new(
            infra.products_channel(),
            &infra.config().products,
        ));
        let handler = Arc::new(ServiceHandler::new(order_repo, product_catalog));
        info!("Repositories initialized");

        let service = OrdersServiceImpl::new(handler);

        Ok(server.add_service(OrdersServiceServer::new(service)))
    })
    .await
}
