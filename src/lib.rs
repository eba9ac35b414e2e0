//! Workbench adapters: thin boundaries between local calls and remote services
//! 工作台适配器：本地调用与远程服务之间的轻量边界
//!
//! - [`encoding`]: base64 delegated to a named facade / 委托给命名外观的Base64
//! - [`generate`]: code-generation HTTP client / 代码生成HTTP客户端
//! - [`perspective`]: IDE navigation descriptor / IDE导航描述

// Shared modules / 共享模块
pub mod config;

// Adapters / 适配器
pub mod encoding;
pub mod generate;
pub mod perspective;

// Re-exports / 重新导出
pub use encoding::{Base64Adapter, EncodingError, Payload};
pub use generate::{Envelope, GenerateClient, GenerateConfig, GenerateError, GenerateResult};
pub use perspective::{Perspective, REPOSITORY_PERSPECTIVE};

#[cfg(feature = "perspective")]
pub use perspective::get_perspective;
