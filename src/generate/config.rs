//! Generation client configuration / 生成客户端配置

use serde::{Deserialize, Serialize};

/// Default service path of the generation endpoint / 生成端点的默认服务路径
pub const DEFAULT_SERVICE_PATH: &str = "/services/v4/ide/generate";

/// Default host the generation endpoint is served from / 生成端点的默认主机
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8080";

/// Generation client configuration / 生成客户端配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerateConfig {
    /// Scheme and authority of the IDE server / IDE服务器的协议与地址
    pub base_url: String,
    /// Path of the generation service under `base_url` / 生成服务路径
    pub service_path: String,
}

impl Default for GenerateConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            service_path: DEFAULT_SERVICE_PATH.to_string(),
        }
    }
}

impl GenerateConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    pub fn with_service_path(mut self, service_path: impl Into<String>) -> Self {
        self.service_path = service_path.into();
        self
    }
}
