//! HTTP Handlers

mod catalog;
mod generate;
mod system;

pub use catalog::*;
pub use generate::*;
pub use system::*;
