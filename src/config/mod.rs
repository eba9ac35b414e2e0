//! Configuration management for the workbench adapters
//! 工作台适配器的配置管理
//!
//! Configuration is layered with figment:
//! - Default values / 默认值
//! - Configuration files (TOML) / 配置文件（TOML）
//! - Environment variables / 环境变量
//! - Command line arguments / 命令行参数
//!
//! The adapters themselves never read files or the environment; they receive
//! their settings explicitly. Only the command line tool goes through this
//! loader. 适配器本身不读取文件或环境变量，只有命令行工具使用此加载器。

use anyhow::{Context, Result};
use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

/// Base configuration shared by all applications / 所有应用程序共享的基础配置
pub mod base;
/// Workbench tool configuration / 工作台工具配置
pub mod workbench;

pub use base::*;
pub use workbench::*;

/// Base configuration trait / 基础配置特征
/// All application configurations should implement this trait
/// 所有应用程序配置都应该实现此特征
pub trait AppConfig: for<'de> Deserialize<'de> + Serialize + Clone + std::fmt::Debug {
    /// Environment variable prefix, nested keys are separated by `__`
    /// 环境变量前缀，嵌套键使用 `__` 分隔
    const ENV_PREFIX: &'static str;

    /// Configuration file looked up in the working directory
    /// 在工作目录中查找的配置文件
    const DEFAULT_FILE: &'static str;

    /// Load configuration from multiple sources with proper precedence
    /// 从多个源加载配置，具有适当的优先级
    ///
    /// Precedence order (highest to lowest):
    /// 优先级顺序（从高到低）：
    /// 1. Command line arguments / 命令行参数
    /// 2. Environment variables / 环境变量
    /// 3. Configuration file / 配置文件
    /// 4. Default values / 默认值
    fn load<O: Serialize>(overrides: &O) -> Result<Self> {
        Self::load_from_file(Path::new(Self::DEFAULT_FILE), overrides)
    }

    /// Load configuration from a specific file
    /// 从特定文件加载配置
    fn load_from_file<O: Serialize>(path: &Path, overrides: &O) -> Result<Self> {
        let config: Self = Figment::new()
            .merge(Serialized::defaults(Self::default_config()))
            .merge(Toml::file(path))
            .merge(Env::prefixed(Self::ENV_PREFIX).split("__"))
            .merge(Serialized::defaults(overrides))
            .extract()
            .with_context(|| format!("Failed to load configuration from {}", path.display()))?;

        config.validate()?;
        Ok(config)
    }

    /// Get default configuration values
    /// 获取默认配置值
    fn default_config() -> Self;

    /// Validate the configuration
    /// 验证配置
    fn validate(&self) -> Result<()> {
        Ok(())
    }
}

/// Common logging configuration / 通用日志配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error) / 日志级别
    pub level: String,
    /// Log format (json, compact, pretty) / 日志格式
    pub format: String,
    /// Enable file logging / 启用文件日志
    pub file_enabled: bool,
    /// Log file path / 日志文件路径
    pub file_path: Option<PathBuf>,
}

static FILE_LOG_GUARD: OnceLock<tracing_appender::non_blocking::WorkerGuard> = OnceLock::new();

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
            file_enabled: false,
            file_path: None,
        }
    }
}

/// Initialize tracing based on logging configuration
/// 基于日志配置初始化跟踪
///
/// `RUST_LOG` takes precedence over the configured level.
pub fn init_tracing(config: &LoggingConfig) -> Result<()> {
    use tracing_subscriber::fmt::time::uptime;
    use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if config.level.trim().is_empty() {
            EnvFilter::new("info")
        } else {
            EnvFilter::new(config.level.clone())
        }
    });

    let file_writer = match (config.file_enabled, config.file_path.as_ref()) {
        (true, Some(path)) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("create log dir: {}", parent.display()))?;
            }
            let file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("open log file: {}", path.display()))?;
            let (file_writer, guard) = tracing_appender::non_blocking(file);
            let _ = FILE_LOG_GUARD.set(guard);
            Some(file_writer)
        }
        _ => None,
    };

    let format = config.format.as_str();
    let json_stdout = (format == "json").then(|| {
        fmt::layer()
            .json()
            .with_target(true)
            .with_timer(uptime())
            .with_level(true)
    });
    let compact_stdout = (format == "compact").then(|| {
        fmt::layer()
            .compact()
            .with_target(true)
            .with_timer(uptime())
            .with_level(true)
    });
    let pretty_stdout = (format != "json" && format != "compact").then(|| {
        fmt::layer()
            .pretty()
            .with_target(true)
            .with_timer(uptime())
            .with_level(true)
    });

    // Files get json when stdout is json, compact otherwise / 文件输出：json或compact
    let (json_file, compact_file) = match file_writer {
        Some(writer) if format == "json" => (
            Some(
                fmt::layer()
                    .json()
                    .with_target(true)
                    .with_timer(uptime())
                    .with_writer(writer),
            ),
            None,
        ),
        Some(writer) => (
            None,
            Some(
                fmt::layer()
                    .compact()
                    .with_ansi(false)
                    .with_target(true)
                    .with_timer(uptime())
                    .with_writer(writer),
            ),
        ),
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(json_stdout)
        .with(compact_stdout)
        .with(pretty_stdout)
        .with(json_file)
        .with(compact_file)
        .try_init()
        .context("Failed to install tracing subscriber")?;

    Ok(())
}
