//! Generation client / 生成客户端
//!
//! Asynchronous client for the IDE code-generation endpoint. Every operation
//! builds its own URL and JSON body, POSTs it, and resolves to a
//! [`GenerateResult`]. Failures keep their cause; [`Envelope`] offers the
//! status-only view for callers that only need `{status, data?}`.
//! IDE代码生成端点的异步客户端。失败保留原因，[`Envelope`] 提供仅含状态的视图。
//!
//! Endpoints / 端点:
//! - `POST {base}/file/{workspace}/{project}/{file...}` with `{template, parameters}`
//! - `POST {base}/model/{workspace}/{project}/{file...}` with `{template, parameters, model}`

pub mod config;
pub mod uri;

pub use config::{GenerateConfig, DEFAULT_BASE_URL, DEFAULT_SERVICE_PATH};
pub use uri::{UriBuilder, UriError};

use serde::{Deserialize, Serialize};
use serde_json::Value;
use url::Url;

/// Status reported when no HTTP response was received / 未收到HTTP响应时报告的状态
pub const NO_STATUS: u16 = 0;

/// Path segment of template-based generation / 基于模板生成的路径段
pub const FILE_SEGMENT: &str = "file";
/// Path segment of model-based generation / 基于模型生成的路径段
pub const MODEL_SEGMENT: &str = "model";

/// Outcome of a generation call / 生成调用的结果
pub type GenerateResult = Result<GenerateResponse, GenerateError>;

/// Successful generation response / 成功的生成响应
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerateResponse {
    /// HTTP status code / HTTP状态码
    pub status: u16,
    /// Parsed response body / 解析后的响应体
    pub data: Value,
}

/// Generation errors / 生成错误
#[derive(Debug, thiserror::Error)]
pub enum GenerateError {
    #[error("Invalid generation URL: {0}")]
    InvalidUrl(#[from] UriError),

    #[error("Generation request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Generation service returned status {status}: {body}")]
    Status { status: u16, body: String },
}

impl GenerateError {
    /// Status code of the failure, [`NO_STATUS`] when no response arrived
    /// 失败的状态码，未收到响应时为 [`NO_STATUS`]
    pub fn status(&self) -> u16 {
        match self {
            GenerateError::Status { status, .. } => *status,
            GenerateError::Transport(e) => e.status().map_or(NO_STATUS, |s| s.as_u16()),
            GenerateError::InvalidUrl(_) => NO_STATUS,
        }
    }
}

/// Status-only result shape: `data` is present only on success
/// 仅含状态的结果形态：只有成功时才有 `data`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope {
    pub status: u16,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

impl Envelope {
    pub fn is_success(&self) -> bool {
        self.data.is_some()
    }
}

impl From<GenerateResult> for Envelope {
    fn from(result: GenerateResult) -> Self {
        match result {
            Ok(resp) => Envelope {
                status: resp.status,
                data: Some(resp.data),
            },
            Err(e) => Envelope {
                status: e.status(),
                data: None,
            },
        }
    }
}

#[derive(Debug, Serialize)]
struct TemplateRequest<'a> {
    template: &'a str,
    parameters: &'a [Value],
}

#[derive(Debug, Serialize)]
struct ModelRequest<'a> {
    template: &'a str,
    parameters: &'a [Value],
    model: &'a str,
}

/// Client for the generation endpoint / 生成端点客户端
///
/// Holds no per-call state; clone it freely to issue concurrent calls.
#[derive(Debug, Clone)]
pub struct GenerateClient {
    http: reqwest::Client,
    base_url: Url,
    service_path: String,
}

impl GenerateClient {
    pub fn new(config: &GenerateConfig) -> Result<Self, GenerateError> {
        let http = reqwest::Client::builder().build()?;
        Self::with_http_client(config, http)
    }

    /// Use a caller-configured HTTP client / 使用调用方配置的HTTP客户端
    pub fn with_http_client(
        config: &GenerateConfig,
        http: reqwest::Client,
    ) -> Result<Self, GenerateError> {
        let base_url = Url::parse(config.base_url.trim()).map_err(UriError::from)?;
        Ok(Self {
            http,
            base_url,
            service_path: config.service_path.clone(),
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn service_path(&self) -> &str {
        &self.service_path
    }

    fn endpoint_url(
        &self,
        kind: &str,
        workspace: &str,
        project: &str,
        file: &str,
    ) -> Result<Url, GenerateError> {
        Ok(UriBuilder::new()
            .path(&self.service_path)
            .segment(kind)
            .segment(workspace)
            .segment(project)
            .path(file)
            .build(&self.base_url)?)
    }

    /// URL used by [`generate_from_template`](Self::generate_from_template)
    pub fn template_url(
        &self,
        workspace: &str,
        project: &str,
        file: &str,
    ) -> Result<Url, GenerateError> {
        self.endpoint_url(FILE_SEGMENT, workspace, project, file)
    }

    /// URL used by [`generate_from_model`](Self::generate_from_model)
    pub fn model_url(&self, workspace: &str, project: &str, file: &str) -> Result<Url, GenerateError> {
        self.endpoint_url(MODEL_SEGMENT, workspace, project, file)
    }

    /// Generate `file` from `template` / 从模板生成文件
    pub async fn generate_from_template(
        &self,
        workspace: &str,
        project: &str,
        file: &str,
        template: &str,
        parameters: &[Value],
    ) -> GenerateResult {
        let body = TemplateRequest {
            template,
            parameters,
        };
        self.dispatch(self.template_url(workspace, project, file), &body)
            .await
    }

    /// Generate from the model stored in `file` / 从文件中的模型生成
    pub async fn generate_from_model(
        &self,
        workspace: &str,
        project: &str,
        file: &str,
        template: &str,
        parameters: &[Value],
    ) -> GenerateResult {
        let body = ModelRequest {
            template,
            parameters,
            model: file,
        };
        self.dispatch(self.model_url(workspace, project, file), &body)
            .await
    }

    async fn dispatch<B: Serialize>(
        &self,
        url: Result<Url, GenerateError>,
        body: &B,
    ) -> GenerateResult {
        let result = match url {
            Ok(url) => {
                tracing::debug!(url = %url, "posting generation request");
                self.send(url, body).await
            }
            Err(e) => Err(e),
        };
        if let Err(e) = &result {
            tracing::error!(status = e.status(), error = %e, "Generate service request failed");
        }
        result
    }

    async fn send<B: Serialize>(&self, url: Url, body: &B) -> GenerateResult {
        let resp = self.http.post(url).json(body).send().await?;
        let status = resp.status();
        if !status.is_success() {
            // Keep the status even if the body is lost / 响应体丢失时仍保留状态
            let body = match resp.bytes().await {
                Ok(bytes) => String::from_utf8_lossy(&bytes).into_owned(),
                Err(e) => {
                    tracing::debug!(status = status.as_u16(), error = %e, "failed to read error body");
                    String::new()
                }
            };
            return Err(GenerateError::Status {
                status: status.as_u16(),
                body,
            });
        }
        let bytes = resp.bytes().await?;
        Ok(GenerateResponse {
            status: status.as_u16(),
            data: parse_body(&bytes),
        })
    }
}

/// JSON bodies are parsed, anything else is kept as text, empty becomes `null`
/// JSON响应体被解析，其他内容保留为文本，空响应体为 `null`
fn parse_body(bytes: &[u8]) -> Value {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Value::Null;
    }
    serde_json::from_slice(bytes)
        .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(bytes).into_owned()))
}
