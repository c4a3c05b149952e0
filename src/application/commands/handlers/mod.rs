//! Command Handlers 实现

mod generate_handlers;

pub use generate_handlers::*;
