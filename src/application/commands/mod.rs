//! 应用层 - 命令
//!
//! 生成内容（可能触发一次外部调用）

mod generate_commands;

pub mod handlers;

pub use generate_commands::*;
