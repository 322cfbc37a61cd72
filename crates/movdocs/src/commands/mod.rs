//! CLI command implementations.

pub mod code;
pub mod init;
pub mod list;
pub mod resolve;
pub mod serve;
