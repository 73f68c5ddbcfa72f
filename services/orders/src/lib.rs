//! Orders Service - 订单管理微服务

pub mod api;
pub mod application;
pub mod domain;
pub mod infrastructure;
