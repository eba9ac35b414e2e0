//! Encoding adapter / 编码适配器
//!
//! Base64 encode and decode delegated to a named remote facade. The adapter
//! only normalizes the payload and unmarshals the facade's reply; the encoding
//! itself happens on the other side of the [`RemoteInvoker`].
//! Base64编解码委托给命名的远程外观，适配器只负责规范化载荷与解析回复。

pub mod buffer;
pub mod facade;

pub use buffer::ByteBuffer;
pub use facade::{
    Base64Facade, FacadeError, FacadeRegistry, RemoteCall, RemoteInvoker, BASE64_FACADE,
};

use serde_json::Value;
use std::sync::Arc;

/// Encoding result type / 编码结果类型
pub type EncodingResult<T> = Result<T, EncodingError>;

/// Encoding adapter errors / 编码适配器错误
#[derive(Debug, thiserror::Error)]
pub enum EncodingError {
    #[error("Facade call failed: {0}")]
    Facade(#[from] FacadeError),

    #[error("Malformed facade response: {0}")]
    MalformedResponse(#[from] serde_json::Error),

    #[error("Facade returned {0}, which is not a byte")]
    ByteOutOfRange(i64),
}

/// Input accepted by [`Base64Adapter::encode`] / 编码输入
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Payload {
    Text(String),
    Bytes(Vec<u8>),
}

impl Payload {
    /// Normalize to bytes; text goes through a scoped [`ByteBuffer`]
    /// 规范化为字节；文本通过作用域内的缓冲区转换
    pub fn into_bytes(self) -> Vec<u8> {
        match self {
            Payload::Bytes(bytes) => bytes,
            Payload::Text(text) => {
                let mut buffer = ByteBuffer::new();
                buffer.write_text(&text);
                buffer.into_bytes()
            }
        }
    }
}

impl From<&str> for Payload {
    fn from(s: &str) -> Self {
        Payload::Text(s.to_string())
    }
}

impl From<String> for Payload {
    fn from(s: String) -> Self {
        Payload::Text(s)
    }
}

impl From<&[u8]> for Payload {
    fn from(b: &[u8]) -> Self {
        Payload::Bytes(b.to_vec())
    }
}

impl From<Vec<u8>> for Payload {
    fn from(b: Vec<u8>) -> Self {
        Payload::Bytes(b)
    }
}

/// Byte value from a JSON integer; signed bytes map to their unsigned value
/// 从JSON整数得到字节；有符号字节映射为无符号值
pub(crate) fn byte_from_int(v: i64) -> Option<u8> {
    match v {
        0..=255 => Some(v as u8),
        -128..=-1 => Some((v as i8) as u8),
        _ => None,
    }
}

/// Base64 adapter over a remote facade / 基于远程外观的Base64适配器
#[derive(Clone)]
pub struct Base64Adapter {
    invoker: Arc<dyn RemoteInvoker>,
    facade: String,
}

impl Base64Adapter {
    /// Adapter calling [`BASE64_FACADE`] through `invoker`
    pub fn new(invoker: Arc<dyn RemoteInvoker>) -> Self {
        Self::with_facade(invoker, BASE64_FACADE)
    }

    pub fn with_facade(invoker: Arc<dyn RemoteInvoker>, facade: impl Into<String>) -> Self {
        Self {
            invoker,
            facade: facade.into(),
        }
    }

    /// Adapter backed by the in-process facades / 使用进程内外观的适配器
    pub fn in_process() -> Self {
        Self::new(Arc::new(FacadeRegistry::with_defaults()))
    }

    pub fn facade(&self) -> &str {
        &self.facade
    }

    /// Encode text or bytes; returns the facade's reply unmodified
    /// 编码文本或字节；原样返回外观的回复
    pub fn encode(&self, input: impl Into<Payload>) -> EncodingResult<Option<String>> {
        let bytes = input.into().into_bytes();
        let call = RemoteCall::new(
            self.facade.as_str(),
            facade::method::ENCODE,
            vec![Value::String(serde_json::to_string(&bytes)?)],
        );
        Ok(self.invoker.invoke(&call)?)
    }

    /// Decode base64 text into bytes; an absent reply stays absent
    /// 将Base64文本解码为字节；无回复时返回 `None`
    pub fn decode(&self, input: Option<&str>) -> EncodingResult<Option<Vec<u8>>> {
        let arg = input.map_or(Value::Null, |s| Value::String(s.to_string()));
        let call = RemoteCall::new(self.facade.as_str(), facade::method::DECODE, vec![arg]);
        let Some(output) = self.invoker.invoke(&call)? else {
            return Ok(None);
        };
        let ints: Vec<i64> = serde_json::from_str(&output)?;
        let bytes = ints
            .into_iter()
            .map(|v| byte_from_int(v).ok_or(EncodingError::ByteOutOfRange(v)))
            .collect::<EncodingResult<Vec<u8>>>()?;
        Ok(Some(bytes))
    }
}

impl std::fmt::Debug for Base64Adapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Base64Adapter")
            .field("facade", &self.facade)
            .finish_non_exhaustive()
    }
}
