//! 持久化实现

mod postgres;

pub use postgres::PostgresOrderRepository;
