//! 应用层

pub mod commands;
pub mod dto;
pub mod handler;
pub mod queries;

pub use handler::ServiceHandler;
