//! URL path builder / URL路径构建器

use url::Url;

/// URL construction errors / URL构建错误
#[derive(Debug, thiserror::Error)]
pub enum UriError {
    #[error("Invalid URL: {0}")]
    Parse(#[from] url::ParseError),

    #[error("Base URL cannot carry path segments: {0}")]
    CannotBeABase(String),

    /// `.` and `..` would be collapsed by URL normalization / `.` 与 `..` 会被URL规范化折叠
    #[error("Dot segment {segment:?} is not allowed in a path")]
    DotSegment { segment: String },
}

/// Accumulates path segments and resolves them against a base URL.
/// 累积路径段并基于基础URL解析
///
/// Empty segments are dropped, so `"/a//b/"` contributes `a` and `b`. Each
/// segment is percent-encoded on build. `.` and `..` are rejected on build:
/// URL normalization removes them even when percent-encoded, which would
/// shift the remaining segments into another resource.
#[derive(Debug, Clone, Default)]
pub struct UriBuilder {
    segments: Vec<String>,
}

impl UriBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a single segment / 追加单个路径段
    pub fn segment(mut self, segment: &str) -> Self {
        if !segment.is_empty() {
            self.segments.push(segment.to_string());
        }
        self
    }

    /// Append every `/`-separated part of `path` / 追加以 `/` 分隔的每一段
    pub fn path(self, path: &str) -> Self {
        path.split('/').fold(self, |b, s| b.segment(s))
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Append the collected segments to the path of `base`
    /// 将收集的路径段追加到基础URL的路径之后
    pub fn build(&self, base: &Url) -> Result<Url, UriError> {
        if let Some(dot) = self.segments.iter().find(|s| is_dot_segment(s)) {
            return Err(UriError::DotSegment {
                segment: dot.clone(),
            });
        }
        let mut url = base.clone();
        url.set_query(None);
        url.set_fragment(None);
        url.path_segments_mut()
            .map_err(|_| UriError::CannotBeABase(base.to_string()))?
            .pop_if_empty()
            .extend(self.segments.iter());
        Ok(url)
    }
}

fn is_dot_segment(segment: &str) -> bool {
    segment == "." || segment == ".."
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> Url {
        Url::parse("http://localhost:8080").unwrap()
    }

    #[test]
    fn test_path_drops_empty_segments() {
        let b = UriBuilder::new().path("/services/v4//ide/").segment("");
        assert_eq!(b.segments(), &["services", "v4", "ide"]);
    }

    #[test]
    fn test_build_joins_segments() {
        let url = UriBuilder::new()
            .path("/services/v4/ide/generate")
            .segment("file")
            .segment("ws")
            .path("a/b.txt")
            .build(&base())
            .unwrap();
        assert_eq!(
            url.as_str(),
            "http://localhost:8080/services/v4/ide/generate/file/ws/a/b.txt"
        );
    }

    #[test]
    fn test_build_percent_encodes_segments() {
        let url = UriBuilder::new()
            .segment("my project")
            .segment("50%?")
            .build(&base())
            .unwrap();
        assert_eq!(url.path(), "/my%20project/50%25%3F");
    }

    #[test]
    fn test_build_keeps_base_path_and_drops_query() {
        let base = Url::parse("http://localhost:8080/ide/?x=1#frag").unwrap();
        let url = UriBuilder::new().segment("a").build(&base).unwrap();
        assert_eq!(url.as_str(), "http://localhost:8080/ide/a");
    }

    #[test]
    fn test_build_rejects_cannot_be_a_base() {
        let base = Url::parse("mailto:someone@example.com").unwrap();
        let err = UriBuilder::new().segment("a").build(&base).unwrap_err();
        assert!(matches!(err, UriError::CannotBeABase(_)));
    }

    #[test]
    fn test_build_rejects_dot_workspace() {
        let err = UriBuilder::new()
            .segment("file")
            .segment("..")
            .segment("p")
            .build(&base())
            .unwrap_err();
        assert!(matches!(err, UriError::DotSegment { segment } if segment == ".."));
    }

    #[test]
    fn test_build_rejects_dot_segments_in_file_path() {
        let b = UriBuilder::new().segment("file").path("a/./../b.txt");
        assert_eq!(b.segments(), &["file", "a", ".", "..", "b.txt"]);
        let err = b.build(&base()).unwrap_err();
        assert!(matches!(err, UriError::DotSegment { segment } if segment == "."));
    }

    #[test]
    fn test_dots_inside_names_are_kept() {
        let url = UriBuilder::new()
            .path("...hidden/.env/a..b")
            .build(&base())
            .unwrap();
        assert_eq!(url.path(), "/...hidden/.env/a..b");
    }
}
