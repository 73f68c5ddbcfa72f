//! PostgreSQL 仓储实现

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use common::types::{PagedResult, Pagination};
use errors::{AppError, AppResult};
use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::entities::{Order, OrderItem, OrderWithItems};
use crate::domain::enums::OrderStatus;
use crate::domain::repositories::OrderRepository;
use crate::domain::value_objects::OrderId;

/// orders 表行
#[derive(Debug, sqlx::FromRow)]
struct OrderRow {
    id: Uuid,
    total_amount: Decimal,
    total_items: i32,
    status: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// order_items 表行
#[derive(Debug, sqlx::FromRow)]
struct OrderItemRow {
    product_id: String,
    price: Decimal,
    quantity: i32,
}

fn order_from_row(row: OrderRow) -> AppResult<Order> {
    let status = OrderStatus::parse(&row.status)
        .map_err(|_| AppError::database(format!("订单 {} 的状态值非法: {}", row.id, row.status)))?;

    Ok(Order {
        id: OrderId::from_uuid(row.id),
        total_amount: row.total_amount,
        total_items: row.total_items,
        status,
        created_at: row.created_at,
        updated_at: row.updated_at,
    })
}

fn item_from_row(row: OrderItemRow) -> OrderItem {
    OrderItem {
        product_id: row.product_id,
        price: row.price,
        quantity: row.quantity,
    }
}

/// PostgreSQL 订单仓储
pub struct PostgresOrderRepository {
    pool: PgPool,
}

impl PostgresOrderRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl OrderRepository for PostgresOrderRepository {
    async fn create(&self, order: &OrderWithItems) -> AppResult<()> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| AppError::database(format!("开启事务失败: {}", e)))?;

        sqlx::query(
            r#"
            INSERT INTO orders (id, total_amount, total_items, status, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(order.order.id.as_uuid())
        .bind(order.order.total_amount)
        .bind(order.order.total_items)
        .bind(order.order.status.as_str())
        .bind(order.order.created_at)
        .bind(order.order.updated_at)
        .execute(&mut *tx)
        .await
        .map_err(|e| AppError::database(format!("保存订单失败: {}", e)))?;

        for item in &order.items {
            sqlx::query(
                r#"
                INSERT INTO order_items (order_id, product_id, price, quantity)
                VALUES ($1, $2, $3, $4)
                "#,
            )
            .bind(order.order.id.as_uuid())
            .bind(&item.product_id)
            .bind(item.price)
            .bind(item.quantity)
            .execute(&mut *tx)
            .await
            .map_err(|e| AppError::database(format!("保存订单行项目失败: {}", e)))?;
        }

        tx.commit()
            .await
            .map_err(|e| AppError::database(format!("提交事务失败: {}", e)))?;

        Ok(())
    }

    async fn find_by_id(&self, id: &OrderId) -> AppResult<Option<OrderWithItems>> {
        let row = sqlx::query_as::<_, OrderRow>(
            r#"
            SELECT id, total_amount, total_items, status, created_at, updated_at
            FROM orders
            WHERE id = $1
            "#,
        )
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("查询订单失败: {}", e)))?;

        let Some(row) = row else {
            return Ok(None);
        };

        let order = order_from_row(row)?;

        let item_rows = sqlx::query_as::<_, OrderItemRow>(
            r#"
            SELECT product_id, price, quantity
            FROM order_items
            WHERE order_id = $1
            ORDER BY id
            "#,
        )
        .bind(id.as_uuid())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("查询订单行项目失败: {}", e)))?;

        Ok(Some(OrderWithItems {
            order,
            items: item_rows.into_iter().map(item_from_row).collect(),
        }))
    }

    async fn list(
        &self,
        status: Option<OrderStatus>,
        pagination: Pagination,
    ) -> AppResult<PagedResult<Order>> {
        let (total, rows) = match status {
            Some(status) => {
                let total: (i64,) =
                    sqlx::query_as("SELECT COUNT(*) FROM orders WHERE status = $1")
                        .bind(status.as_str())
                        .fetch_one(&self.pool)
                        .await
                        .map_err(|e| AppError::database(format!("统计订单失败: {}", e)))?;

                let rows = sqlx::query_as::<_, OrderRow>(
                    r#"
                    SELECT id, total_amount, total_items, status, created_at, updated_at
                    FROM orders
                    WHERE status = $1
                    ORDER BY created_at DESC, id DESC
                    LIMIT $2 OFFSET $3
                    "#,
                )
                .bind(status.as_str())
                .bind(pagination.page_size as i64)
                .bind(pagination.offset() as i64)
                .fetch_all(&self.pool)
                .await
                .map_err(|e| AppError::database(format!("查询订单列表失败: {}", e)))?;

                (total, rows)
            }
            None => {
                let total: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM orders")
                    .fetch_one(&self.pool)
                    .await
                    .map_err(|e| AppError::database(format!("统计订单失败: {}", e)))?;

                let rows = sqlx::query_as::<_, OrderRow>(
                    r#"
                    SELECT id, total_amount, total_items, status, created_at, updated_at
                    FROM orders
                    ORDER BY created_at DESC, id DESC
                    LIMIT $1 OFFSET $2
                    "#,
                )
                .bind(pagination.page_size as i64)
                .bind(pagination.offset() as i64)
                .fetch_all(&self.pool)
                .await
                .map_err(|e| AppError::database(format!("查询订单列表失败: {}", e)))?;

                (total, rows)
            }
        };

        let orders = rows
            .into_iter()
            .map(order_from_row)
            .collect::<AppResult<Vec<_>>>()?;

        Ok(PagedResult::new(orders, total.0 as u64, &pagination))
    }

    async fn update_status(&self, id: &OrderId, status: OrderStatus) -> AppResult<Order> {
        let row = sqlx::query_as::<_, OrderRow>(
            r#"
            UPDATE orders
            SET status = $1, updated_at = $2
            WHERE id = $3
            RETURNING id, total_amount, total_items, status, created_at, updated_at
            "#,
        )
        .bind(status.as_str())
        .bind(Utc::now())
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("更新订单状态失败: {}", e)))?;

        let row =
            row.ok_or_else(|| AppError::not_found(format!("Order with id {} not found", id)))?;

        order_from_row(row)
    }
}
