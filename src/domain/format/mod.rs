//! Format Context - 内容格式
//!
//! 职责:
//! - 封闭的格式枚举（不支持动态注册）
//! - 格式到结构说明的静态映射

mod catalog;
mod content_format;

pub use catalog::{FormatCatalog, FormatEntry};
pub use content_format::ContentFormat;
