// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use async_trait::async_trait;
use std::time::Duration;
use thiserror::Error;

/// 会话启动错误
#[derive(Error, Debug)]
pub enum SessionError {
    /// 启动本地浏览器失败
    #[error("Failed to launch browser: {0}")]
    Launch(String),
    /// 连接远程浏览器失败
    #[error("Failed to connect to browser at {url}: {reason}")]
    Connect { url: String, reason: String },
}

/// 页面导航错误
#[derive(Error, Debug)]
pub enum NavigationError {
    /// 会话尚未启动
    #[error("No active browser session")]
    NoSession,
    /// 导航失败
    #[error("Navigation to {url} failed: {reason}")]
    Failed { url: String, reason: String },
    /// 页面加载超时
    #[error("Navigation to {url} timed out after {timeout:?}")]
    Timeout { url: String, timeout: Duration },
}

/// 页面交互错误
#[derive(Error, Debug)]
pub enum EngineError {
    /// 会话尚未启动
    #[error("No active browser session")]
    NoSession,
    /// 选择器没有匹配到元素
    #[error("Element not found: {0}")]
    ElementNotFound(String),
    /// 点击或滚动失败
    #[error("Interaction failed: {0}")]
    Interaction(String),
    /// 其他错误
    #[error("Other error: {0}")]
    Other(String),
}

/// 字段提取方式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtractMode {
    /// 元素的完整文本
    Text,
    /// 元素文本的第一行
    FirstLine,
    /// 元素的链接目标（href）
    Link,
}

/// 单个字段的选择器
///
/// `tag` 只用于日志，标明正在提取的字段
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSelector {
    pub tag: &'static str,
    pub css: &'static str,
    pub mode: ExtractMode,
}

impl FieldSelector {
    pub const fn text(tag: &'static str, css: &'static str) -> Self {
        Self {
            tag,
            css,
            mode: ExtractMode::Text,
        }
    }

    pub const fn first_line(tag: &'static str, css: &'static str) -> Self {
        Self {
            tag,
            css,
            mode: ExtractMode::FirstLine,
        }
    }

    pub const fn link(tag: &'static str, css: &'static str) -> Self {
        Self {
            tag,
            css,
            mode: ExtractMode::Link,
        }
    }
}

/// 页面访问会话
///
/// 一个会话同一时间只持有一个页面。`start_session` 可重复调用，
/// 会话已启动时直接返回。`extract_field` 不会失败，找不到元素或会话未就绪
/// 都表现为 `None`。
#[async_trait]
pub trait PageSession: Send + Sync {
    /// 启动会话
    async fn start_session(&mut self) -> Result<(), SessionError>;

    /// 会话是否处于活动状态
    fn is_active(&self) -> bool;

    /// 打开URL，并在加载完成后等待固定的渲染时间
    ///
    /// # 参数
    ///
    /// * `url` - 目标地址
    /// * `timeout` - 页面加载超时
    async fn open_url(&mut self, url: &str, timeout: Duration) -> Result<(), NavigationError>;

    /// 提取单个字段
    async fn extract_field(&self, selector: &FieldSelector) -> Option<String>;

    /// 当前页面的完整HTML
    async fn page_source(&self) -> Result<String, EngineError>;

    /// 点击第一个匹配的元素
    async fn click(&self, css: &str) -> Result<(), EngineError>;

    /// 点击第一个去掉首尾空白后文本等于 `text` 的匹配元素，返回是否找到
    async fn click_matching(&self, css: &str, text: &str) -> Result<bool, EngineError>;

    /// 点击文本包含 `text` 的 `<label>` 之后紧邻的兄弟元素，返回是否找到
    async fn click_after_label(&self, text: &str) -> Result<bool, EngineError>;

    /// 滚动到页面底部
    async fn scroll_to_bottom(&self) -> Result<(), EngineError>;

    /// 关闭会话，未启动时为空操作
    async fn close_session(&mut self);
}
