//! Command Line Interface
//!
//! - args: clap 参数定义
//! - runner: 非交互流程与错误/退出码
//! - interactive: 交互式问答流程
//! - output: 结果输出（标准输出或文件）

mod args;
mod interactive;
mod output;
mod runner;

pub use args::{Cli, FormatArg};
pub use runner::{run, CliContext, CliError};
