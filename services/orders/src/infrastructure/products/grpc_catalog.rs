//! 商品服务 gRPC 客户端适配器

use std::time::Duration;

use async_trait::async_trait;
use bootstrap::{RetryConfig, with_retry};
use config::ProductsConfig;
use errors::{AppError, AppResult};
use rust_decimal::Decimal;
use tonic::Request;
use tonic::transport::Channel;
use tracing::error;

use crate::api::proto::products::v1::{ProductsServiceClient, ValidateProductsRequest};
use crate::domain::repositories::{CatalogProduct, ProductCatalog};

/// 基于 gRPC 的商品目录实现
///
/// 每次调用带显式超时，失败按指数退避做有限次重试。
pub struct GrpcProductCatalog {
    client: ProductsServiceClient<Channel>,
    timeout: Duration,
    retry: RetryConfig,
}

impl GrpcProductCatalog {
    pub fn new(channel: Channel, config: &ProductsConfig) -> Self {
        Self {
            client: ProductsServiceClient::new(channel),
            timeout: Duration::from_millis(config.timeout_ms),
            retry: RetryConfig::new(
                config.retry_max_attempts,
                config.retry_initial_delay_ms,
                config.retry_max_delay_ms,
            ),
        }
    }
}

#[async_trait]
impl ProductCatalog for GrpcProductCatalog {
    async fn validate_products(&self, ids: &[String]) -> AppResult<Vec<CatalogProduct>> {
        let response = with_retry(&self.retry, "validate_products", || {
            let mut client = self.client.clone();
            let ids = ids.to_vec();
            let timeout = self.timeout;
            async move {
                let mut request = Request::new(ValidateProductsRequest { ids });
                request.set_timeout(timeout);
                client.validate_products(request).await
            }
        })
        .await
        .map_err(|status| {
            // 详细诊断只进服务端日志，调用方看到的消息不携带内部细节
            error!(
                code = %status.code(),
                message = status.message(),
                "Products service call failed after retries"
            );
            AppError::external_service("Products service is unavailable")
        })?;

        response
            .into_inner()
            .products
            .into_iter()
            .map(|product| {
                let price = Decimal::from_f64_retain(product.price).ok_or_else(|| {
                    AppError::external_service(format!(
                        "Products service returned an invalid price for {}",
                        product.id
                    ))
                })?;

                Ok(CatalogProduct {
                    id: product.id,
                    name: product.name,
                    price,
                })
            })
            .collect()
    }
}
