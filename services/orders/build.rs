//! 代码生成：基于手写 prost 消息构建 gRPC 服务桩
//!
//! 不依赖 protoc，消息类型定义在 src/api/proto.rs，
//! 这里只描述服务与方法的路由。

use tonic_build::manual::{Builder, Method, Service};

fn main() {
    let orders_service = Service::builder()
        .name("OrdersService")
        .package("mall.orders.v1")
        .method(
            Method::builder()
                .name("create_order")
                .route_name("CreateOrder")
                .input_type("crate::api::proto::orders::v1::CreateOrderRequest")
                .output_type("crate::api::proto::orders::v1::OrderView")
                .codec_path("tonic::codec::ProstCodec")
                .build(),
        )
        .method(
            Method::builder()
                .name("find_all_orders")
                .route_name("FindAllOrders")
                .input_type("crate::api::proto::orders::v1::FindAllOrdersRequest")
                .output_type("crate::api::proto::orders::v1::FindAllOrdersResponse")
                .codec_path("tonic::codec::ProstCodec")
                .build(),
        )
        .method(
            Method::builder()
                .name("find_one_order")
                .route_name("FindOneOrder")
                .input_type("crate::api::proto::orders::v1::FindOneOrderRequest")
                .output_type("crate::api::proto::orders::v1::OrderView")
                .codec_path("tonic::codec::ProstCodec")
                .build(),
        )
        .method(
            Method::builder()
                .name("change_order_status")
                .route_name("ChangeOrderStatus")
                .input_type("crate::api::proto::orders::v1::ChangeOrderStatusRequest")
                .output_type("crate::api::proto::orders::v1::OrderView")
                .codec_path("tonic::codec::ProstCodec")
                .build(),
        )
        .build();

    let products_service = Service::builder()
        .name("ProductsService")
        .package("mall.products.v1")
        .method(
            Method::builder()
                .name("validate_products")
                .route_name("ValidateProducts")
                .input_type("crate::api::proto::products::v1::ValidateProductsRequest")
                .output_type("crate::api::proto::products::v1::ValidateProductsResponse")
                .codec_path("tonic::codec::ProstCodec")
                .build(),
        )
        .build();

    Builder::new().compile(&[orders_service, products_service]);
}
