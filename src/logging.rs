//! Logging
//!
//! 两个可执行文件共用的 tracing 初始化

use tracing_subscriber::EnvFilter;

use crate::config::LogConfig;

/// 日志输出位置
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogTarget {
    Stdout,
    /// 命令行使用，stdout 只输出生成内容
    Stderr,
}

/// 默认过滤规则，`RUST_LOG` 存在时以其为准
pub fn default_filter(level: &str) -> String {
    format!("{},shaya_content={},tower_http=debug", level, level)
}

/// 初始化全局 subscriber，进程内只能调用一次
pub fn init_logging(config: &LogConfig, target: LogTarget) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(&config.level)));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    match (config.json, target) {
        (true, LogTarget::Stdout) => builder.json().init(),
        (true, LogTarget::Stderr) => builder.json().with_writer(std::io::stderr).init(),
        (false, LogTarget::Stdout) => builder.init(),
        (false, LogTarget::Stderr) => builder.with_writer(std::io::stderr).init(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filter() {
        assert_eq!(
            default_filter("warn"),
            "warn,shaya_content=warn,tower_http=debug"
        );
    }
}
