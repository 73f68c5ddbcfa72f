//! 线上消息类型与生成的服务桩
//!
//! 消息结构体手写 prost 派生，服务桩由 build.rs 生成后 include 进来。

pub mod orders {
    pub mod v1 {
        /// 创建订单的单个行项目
        #[derive(Clone, PartialEq, prost::Message)]
        pub struct OrderItemInput {
            #[prost(string, tag = "1")]
            pub product_id: String,
            #[prost(uint32, tag = "2")]
            pub quantity: u32,
        }

        #[derive(Clone, PartialEq, prost::Message)]
        pub struct CreateOrderRequest {
            #[prost(message, repeated, tag = "1")]
            pub items: Vec<OrderItemInput>,
        }

        /// 订单行项目视图，name 为调用时从商品服务取回的名称
        #[derive(Clone, PartialEq, prost::Message)]
        pub struct OrderItemView {
            #[prost(string, tag = "1")]
            pub product_id: String,
            #[prost(double, tag = "2")]
            pub price: f64,
            #[prost(uint32, tag = "3")]
            pub quantity: u32,
            #[prost(string, tag = "4")]
            pub name: String,
        }

        #[derive(Clone, PartialEq, prost::Message)]
        pub struct OrderView {
            #[prost(string, tag = "1")]
            pub id: String,
            #[prost(double, tag = "2")]
            pub total_amount: f64,
            #[prost(uint32, tag = "3")]
            pub total_items: u32,
            #[prost(string, tag = "4")]
            pub status: String,
            #[prost(message, optional, tag = "5")]
            pub created_at: Option<prost_types::Timestamp>,
            #[prost(message, optional, tag = "6")]
            pub updated_at: Option<prost_types::Timestamp>,
            #[prost(message, repeated, tag = "7")]
            pub items: Vec<OrderItemView>,
        }

        /// 分页查询请求，status 为空字符串表示不过滤
        #[derive(Clone, PartialEq, prost::Message)]
        pub struct FindAllOrdersRequest {
            #[prost(string, tag = "1")]
            pub status: String,
            #[prost(uint32, tag = "2")]
            pub page: u32,
            #[prost(uint32, tag = "3")]
            pub limit: u32,
        }

        #[derive(Clone, PartialEq, prost::Message)]
        pub struct PaginationMeta {
            #[prost(uint64, tag = "1")]
            pub total: u64,
            #[prost(uint32, tag = "2")]
            pub page: u32,
            #[prost(uint32, tag = "3")]
            pub last_page: u32,
        }

        #[derive(Clone, PartialEq, prost::Message)]
        pub struct FindAllOrdersResponse {
            #[prost(message, repeated, tag = "1")]
            pub data: Vec<OrderView>,
            #[prost(message, optional, tag = "2")]
            pub meta: Option<PaginationMeta>,
        }

        #[derive(Clone, PartialEq, prost::Message)]
        pub struct FindOneOrderRequest {
            #[prost(string, tag = "1")]
            pub id: String,
        }

        #[derive(Clone, PartialEq, prost::Message)]
        pub struct ChangeOrderStatusRequest {
            #[prost(string, tag = "1")]
            pub id: String,
            #[prost(string, tag = "2")]
            pub status: String,
        }

        include!(concat!(env!("OUT_DIR"), "/mall.orders.v1.OrdersService.rs"));

        pub use orders_service_client::OrdersServiceClient;
        pub use orders_service_server::{OrdersService, OrdersServiceServer};
    }
}

pub mod products {
    pub mod v1 {
        #[derive(Clone, PartialEq, prost::Message)]
        pub struct ValidateProductsRequest {
            #[prost(string, repeated, tag = "1")]
            pub ids: Vec<String>,
        }

        #[derive(Clone, PartialEq, prost::Message)]
        pub struct Product {
            #[prost(string, tag = "1")]
            pub id: String,
            #[prost(string, tag = "2")]
            pub name: String,
            #[prost(double, tag = "3")]
            pub price: f64,
        }

        /// 校验响应只包含目录中存在的商品，缺失的 id 直接省略
        #[derive(Clone, PartialEq, prost::Message)]
        pub struct ValidateProductsResponse {
            #[prost(message, repeated, tag = "1")]
            pub products: Vec<Product>,
        }

        include!(concat!(env!("OUT_DIR"), "/mall.products.v1.ProductsService.rs"));

        pub use products_service_client::ProductsServiceClient;
    }
}
