//! 应用层 - 命令
//!
//! 每个请求一次性执行，不保留状态

mod synthesize_commands;

pub mod handlers;

pub use synthesize_commands::*;
