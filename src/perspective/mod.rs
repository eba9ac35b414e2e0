//! Perspective descriptor / 视图描述
//!
//! Static navigation entry the IDE shell's perspective registry enumerates.
//! The accessor is compiled in with the `perspective` feature; without it the
//! record is still defined but nothing is registered.
//! IDE外壳视图注册表枚举的静态导航项。访问器仅在启用 `perspective` 特性时编译。

use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// Navigation entry of the IDE shell / IDE外壳的导航项
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Perspective {
    pub id: Cow<'static, str>,
    pub name: Cow<'static, str>,
    /// Page opened by the entry / 导航项打开的页面
    pub link: Cow<'static, str>,
    /// Sort key, compared as text by the registry / 排序键，注册表按文本比较
    pub order: Cow<'static, str>,
    /// Icon font name, deprecated in favour of `icon` / 图标字体名称，已弃用，请使用 `icon`
    pub image: Cow<'static, str>,
    pub icon: Cow<'static, str>,
}

/// The repository perspective / 仓库视图
pub const REPOSITORY_PERSPECTIVE: Perspective = Perspective {
    id: Cow::Borrowed("repository"),
    name: Cow::Borrowed("Repository"),
    link: Cow::Borrowed("../ide-repository/index.html"),
    order: Cow::Borrowed("120"),
    image: Cow::Borrowed("sitemap"),
    icon: Cow::Borrowed("../ide-repository/images/repository.svg"),
};

/// The perspective record; every call returns an independent copy
/// 视图记录；每次调用返回独立副本
#[cfg(feature = "perspective")]
pub fn get_perspective() -> Perspective {
    REPOSITORY_PERSPECTIVE
}
