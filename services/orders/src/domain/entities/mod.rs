//! 领域实体

mod order;

pub use order::*;
