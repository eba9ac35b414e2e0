//! Workbench tool configuration / 工作台工具配置

use anyhow::{bail, Result};
use clap::{Args, Parser, Subcommand};
use serde::{Deserialize, Serialize};

use crate::config::base::LogConfig;
use crate::config::AppConfig;
use crate::generate::GenerateConfig;

/// Workbench command line arguments / 工作台命令行参数
#[derive(Parser, Debug, Clone)]
#[command(
    name = "workbench",
    version = "0.1.0",
    about = "Workbench adapters - encoding, generation and perspective shims\n工作台适配器 - 编码、生成与视图适配"
)]
pub struct CliArgs {
    /// Configuration file path / 配置文件路径
    #[arg(
        short,
        long,
        value_name = "FILE",
        help = "Configuration file path / 配置文件路径"
    )]
    pub config: Option<String>,

    /// Log level / 日志级别
    #[arg(
        long,
        value_name = "LEVEL",
        help = "Log level (trace, debug, info, warn, error) / 日志级别"
    )]
    pub log_level: Option<String>,

    /// Generation service base URL / 生成服务基础URL
    #[arg(
        long,
        value_name = "URL",
        help = "Generation service base URL (e.g., http://127.0.0.1:8080) / 生成服务基础URL"
    )]
    pub base_url: Option<String>,

    /// Generation service path / 生成服务路径
    #[arg(long, value_name = "PATH")]
    pub service_path: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

/// Workbench subcommands / 工作台子命令
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Base64-encode a text / 将文本进行Base64编码
    Encode { text: String },
    /// Decode base64 text into bytes / 将Base64文本解码为字节
    Decode { input: String },
    /// Generate a file from a template / 从模板生成文件
    GenerateTemplate(GenerateArgs),
    /// Generate a file from a model / 从模型生成文件
    GenerateModel(GenerateArgs),
    /// Print the repository perspective descriptor / 打印仓库视图描述
    Perspective,
}

/// Arguments shared by both generate subcommands / 生成子命令的共享参数
#[derive(Args, Debug, Clone)]
pub struct GenerateArgs {
    pub workspace: String,
    pub project: String,
    /// Target file, `/`-separated / 目标文件，以 `/` 分隔
    pub file: String,
    pub template: String,
    /// Template parameter as a JSON value, repeatable / 模板参数（JSON），可重复
    #[arg(long = "param", value_name = "JSON", value_parser = parse_json_value)]
    pub parameters: Vec<serde_json::Value>,
}

fn parse_json_value(s: &str) -> Result<serde_json::Value, serde_json::Error> {
    serde_json::from_str(s)
}

/// Workbench application configuration / 工作台应用配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct WorkbenchConfig {
    /// Logging configuration / 日志配置
    pub logging: LogConfig,
    /// Generation client configuration / 生成客户端配置
    pub generate: GenerateConfig,
}

impl AppConfig for WorkbenchConfig {
    const ENV_PREFIX: &'static str = "WORKBENCH_";
    const DEFAULT_FILE: &'static str = "workbench.toml";

    fn default_config() -> Self {
        Self::default()
    }

    fn validate(&self) -> Result<()> {
        if self.generate.base_url.trim().is_empty() {
            bail!("generate.base_url must not be empty");
        }
        if !self.generate.service_path.starts_with('/') {
            bail!(
                "generate.service_path must start with '/': {}",
                self.generate.service_path
            );
        }
        Ok(())
    }
}

impl WorkbenchConfig {
    /// Load configuration with CLI arguments / 使用CLI参数加载配置
    pub fn load_with_cli(args: &CliArgs) -> Result<Self> {
        let overrides = ConfigOverrides::from(args);
        match args.config.as_deref() {
            Some(path) => Self::load_from_file(std::path::Path::new(path), &overrides),
            None => Self::load(&overrides),
        }
    }
}

/// Values supplied on the command line; unset fields leave lower layers intact
/// 命令行提供的值；未设置的字段保留较低层的值
#[derive(Debug, Clone, Default, Serialize)]
pub struct ConfigOverrides {
    pub logging: LoggingOverrides,
    pub generate: GenerateOverrides,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct LoggingOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct GenerateOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_path: Option<String>,
}

impl From<&CliArgs> for ConfigOverrides {
    fn from(args: &CliArgs) -> Self {
        Self {
            logging: LoggingOverrides {
                level: args.log_level.clone(),
            },
            generate: GenerateOverrides {
                base_url: args.base_url.clone(),
                service_path: args.service_path.clone(),
            },
        }
    }
}
