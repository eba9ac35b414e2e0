//! Remote facade invocation / 远程外观调用
//!
//! A facade is an external callable surface identified by a fixed name. Calls
//! are described by a [`RemoteCall`] and carried out by a [`RemoteInvoker`];
//! arguments and results travel as JSON text.
//! 外观是由固定名称标识的外部可调用接口，参数和结果以JSON文本传递。

use base64::{engine::general_purpose, Engine as _};
use serde::Serialize;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;

use super::byte_from_int;

/// Name under which the base64 facade is reachable / Base64外观的注册名称
pub const BASE64_FACADE: &str = "api.utils.Base64Facade";

pub mod method {
    pub const ENCODE: &str = "encode";
    pub const DECODE: &str = "decode";
}

/// Facade invocation errors / 外观调用错误
#[derive(Debug, thiserror::Error)]
pub enum FacadeError {
    #[error("Unknown facade: {name}")]
    UnknownFacade { name: String },

    #[error("Unknown method {method} on facade {facade}")]
    UnknownMethod { facade: String, method: String },

    #[error("Invalid argument for {method}: {message}")]
    InvalidArgument { method: String, message: String },

    #[error("Facade unavailable: {0}")]
    Unavailable(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Base64 decode error: {0}")]
    Base64(#[from] base64::DecodeError),
}

/// Descriptor of a single remote call, built fresh for every invocation
/// 单次远程调用的描述符，每次调用重新构建
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RemoteCall {
    target: String,
    method: String,
    args: Vec<Value>,
}

impl RemoteCall {
    pub fn new(target: impl Into<String>, method: impl Into<String>, args: Vec<Value>) -> Self {
        Self {
            target: target.into(),
            method: method.into(),
            args,
        }
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    pub fn method(&self) -> &str {
        &self.method
    }

    pub fn args(&self) -> &[Value] {
        &self.args
    }

    /// First argument as text; `None` when absent or JSON `null`
    /// 第一个参数的文本；缺失或为 `null` 时返回 `None`
    fn text_arg(&self) -> Result<Option<&str>, FacadeError> {
        match self.args.first() {
            None | Some(Value::Null) => Ok(None),
            Some(Value::String(s)) => Ok(Some(s.as_str())),
            Some(other) => Err(FacadeError::InvalidArgument {
                method: self.method.clone(),
                message: format!("expected string argument, got {}", other),
            }),
        }
    }
}

/// Carries a remote call to a facade and returns its textual result.
/// 将远程调用传递给外观并返回其文本结果
///
/// The call is synchronous from the caller's point of view.
pub trait RemoteInvoker: Send + Sync {
    fn invoke(&self, call: &RemoteCall) -> Result<Option<String>, FacadeError>;
}

impl<F> RemoteInvoker for F
where
    F: Fn(&RemoteCall) -> Result<Option<String>, FacadeError> + Send + Sync,
{
    fn invoke(&self, call: &RemoteCall) -> Result<Option<String>, FacadeError> {
        self(call)
    }
}

/// In-process base64 facade (standard alphabet, padded)
/// 进程内Base64外观（标准字母表，带填充）
///
/// `encode` takes the JSON array-of-integers text of the bytes and returns the
/// base64 text. `decode` takes base64 text and returns the JSON array text.
#[derive(Debug, Default, Clone, Copy)]
pub struct Base64Facade;

impl Base64Facade {
    fn encode(call: &RemoteCall) -> Result<Option<String>, FacadeError> {
        let Some(json) = call.text_arg()? else {
            return Ok(None);
        };
        let ints: Vec<i64> = serde_json::from_str(json)?;
        let bytes = ints
            .into_iter()
            .map(|v| {
                byte_from_int(v).ok_or_else(|| FacadeError::InvalidArgument {
                    method: method::ENCODE.to_string(),
                    message: format!("value {} is not a byte", v),
                })
            })
            .collect::<Result<Vec<u8>, _>>()?;
        Ok(Some(general_purpose::STANDARD.encode(bytes)))
    }

    fn decode(call: &RemoteCall) -> Result<Option<String>, FacadeError> {
        let Some(text) = call.text_arg()? else {
            return Ok(None);
        };
        let bytes = general_purpose::STANDARD.decode(text.trim())?;
        Ok(Some(serde_json::to_string(&bytes)?))
    }
}

impl RemoteInvoker for Base64Facade {
    fn invoke(&self, call: &RemoteCall) -> Result<Option<String>, FacadeError> {
        match call.method() {
            method::ENCODE => Self::encode(call),
            method::DECODE => Self::decode(call),
            other => Err(FacadeError::UnknownMethod {
                facade: call.target().to_string(),
                method: other.to_string(),
            }),
        }
    }
}

/// Routes calls to the invoker registered under the call's target name
/// 将调用路由到按目标名称注册的调用器
#[derive(Clone, Default)]
pub struct FacadeRegistry {
    facades: HashMap<String, Arc<dyn RemoteInvoker>>,
}

impl FacadeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with the built-in facades / 包含内置外观的注册表
    pub fn with_defaults() -> Self {
        Self::new().register(BASE64_FACADE, Arc::new(Base64Facade))
    }

    pub fn register(mut self, name: impl Into<String>, invoker: Arc<dyn RemoteInvoker>) -> Self {
        self.facades.insert(name.into(), invoker);
        self
    }

    pub fn contains(&self, name: &str) -> bool {
        self.facades.contains_key(name)
    }
}

impl std::fmt::Debug for FacadeRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut names: Vec<&str> = self.facades.keys().map(|k| k.as_str()).collect();
        names.sort_unstable();
        f.debug_struct("FacadeRegistry")
            .field("facades", &names)
            .finish()
    }
}

impl RemoteInvoker for FacadeRegistry {
    fn invoke(&self, call: &RemoteCall) -> Result<Option<String>, FacadeError> {
        let facade = self
            .facades
            .get(call.target())
            .ok_or_else(|| FacadeError::UnknownFacade {
                name: call.target().to_string(),
            })?;
        tracing::debug!(facade = %call.target(), method = %call.method(), "invoking facade");
        facade.invoke(call)
    }
}
