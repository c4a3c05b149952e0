//! 应用层 - 查询（只读操作）
//!
//! 全部基于静态数据，无副作用

mod catalog_queries;

pub mod handlers;

pub use catalog_queries::*;
