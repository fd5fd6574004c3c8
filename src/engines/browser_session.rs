// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::config::settings::BrowserSettings;
use crate::engines::dom;
use crate::engines::traits::{
    EngineError, ExtractMode, FieldSelector, NavigationError, PageSession, SessionError,
};
use async_trait::async_trait;
use chromiumoxide::{Browser, BrowserConfig, Page};
use futures::StreamExt;
use std::time::Duration;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

const SCROLL_TO_BOTTOM: &str = "window.scrollTo(0, document.body.scrollHeight);";
const LABEL_TARGET: &str = "[data-presale-target]";
/// 标记文本匹配的 `<label>` 之后的兄弟元素，`__LABEL__` 替换为JSON编码的文本
const MARK_AFTER_LABEL: &str = r#"(() => {
    document.querySelectorAll('[data-presale-target]').forEach((el) => el.removeAttribute('data-presale-target'));
    const label = Array.from(document.querySelectorAll('label')).find((el) => el.textContent.includes(__LABEL__));
    const target = label ? label.nextElementSibling : null;
    if (!target) return false;
    target.setAttribute('data-presale-target', '1');
    return true;
})()"#;

enum SessionState {
    Idle,
    Active {
        browser: Browser,
        page: Page,
        handler: JoinHandle<()>,
        remote: bool,
    },
}

/// 基于 chromiumoxide 的浏览器会话
///
/// 配置了 `remote_debugging_url` 时连接已有的 Chrome，否则启动本地进程。
/// 会话持有单个标签页，所有导航都在该标签页中进行。
pub struct BrowserSession {
    settings: BrowserSettings,
    settle_delay: Duration,
    state: SessionState,
}

impl BrowserSession {
    /// 创建新的浏览器会话（尚未启动）
    ///
    /// # 参数
    ///
    /// * `settings` - 浏览器配置
    /// * `settle_delay` - 导航完成后的固定等待时间
    pub fn new(settings: BrowserSettings, settle_delay: Duration) -> Self {
        Self {
            settings,
            settle_delay,
            state: SessionState::Idle,
        }
    }

    fn page(&self) -> Option<&Page> {
        match &self.state {
            SessionState::Active { page, .. } => Some(page),
            SessionState::Idle => None,
        }
    }

    async fn launch(&self) -> Result<(Browser, chromiumoxide::Handler, bool), SessionError> {
        if let Some(url) = &self.settings.remote_debugging_url {
            info!("Connecting to remote Chrome instance at: {}", url);
            let (browser, handler) =
                Browser::connect(url.clone())
                    .await
                    .map_err(|e| SessionError::Connect {
                        url: url.clone(),
                        reason: e.to_string(),
                    })?;
            return Ok((browser, handler, true));
        }

        let mut builder = BrowserConfig::builder()
            .no_sandbox()
            .request_timeout(self.settings.request_timeout())
            .window_size(self.settings.window_width, self.settings.window_height)
            .arg("--disable-gpu")
            .arg("--disable-dev-shm-usage");
        if !self.settings.headless {
            builder = builder.with_head();
        }
        let config = builder.build().map_err(SessionError::Launch)?;

        let (browser, handler) = Browser::launch(config)
            .await
            .map_err(|e| SessionError::Launch(e.to_string()))?;
        Ok((browser, handler, false))
    }
}

#[async_trait]
impl PageSession for BrowserSession {
    async fn start_session(&mut self) -> Result<(), SessionError> {
        if self.is_active() {
            debug!("Browser session already active");
            return Ok(());
        }

        let (browser, mut handler, remote) = self.launch().await?;

        // Spawn a handler to process browser events
        let handler = tokio::spawn(async move {
            while let Some(event) = handler.next().await {
                if event.is_err() {
                    break;
                }
            }
        });

        let page = match browser.new_page("about:blank").await {
            Ok(page) => page,
            Err(e) => {
                handler.abort();
                return Err(SessionError::Launch(format!("failed to open page: {}", e)));
            }
        };

        self.state = SessionState::Active {
            browser,
            page,
            handler,
            remote,
        };
        info!(remote, "Browser session started");
        Ok(())
    }

    fn is_active(&self) -> bool {
        matches!(self.state, SessionState::Active { .. })
    }

    async fn open_url(&mut self, url: &str, timeout: Duration) -> Result<(), NavigationError> {
        let page = self.page().ok_or(NavigationError::NoSession)?;

        match tokio::time::timeout(timeout, page.goto(url)).await {
            Ok(Ok(_)) => {}
            Ok(Err(e)) => {
                return Err(NavigationError::Failed {
                    url: url.to_string(),
                    reason: e.to_string(),
                })
            }
            Err(_) => {
                return Err(NavigationError::Timeout {
                    url: url.to_string(),
                    timeout,
                })
            }
        }

        debug!(url, delay = ?self.settle_delay, "Page loaded, waiting for content to settle");
        tokio::time::sleep(self.settle_delay).await;
        Ok(())
    }

    async fn extract_field(&self, selector: &FieldSelector) -> Option<String> {
        let Some(page) = self.page() else {
            debug!(field = selector.tag, "No active session, field unavailable");
            return None;
        };

        let element = match page.find_element(selector.css).await {
            Ok(element) => element,
            Err(e) => {
                debug!(field = selector.tag, selector = selector.css, error = %e, "Element not found");
                return None;
            }
        };

        let value = match selector.mode {
            ExtractMode::Link => element
                .attribute("href")
                .await
                .ok()
                .flatten()
                .map(|href| href.trim().to_string())
                .filter(|href| !href.is_empty()),
            mode => element
                .inner_text()
                .await
                .ok()
                .flatten()
                .and_then(|text| dom::render_lines(&dom::clean_lines([text.as_str()]), mode)),
        };

        if value.is_none() {
            debug!(field = selector.tag, selector = selector.css, "Element has no value");
        }
        value
    }

    async fn page_source(&self) -> Result<String, EngineError> {
        let page = self.page().ok_or(EngineError::NoSession)?;
        page.content()
            .await
            .map_err(|e| EngineError::Other(format!("failed to read page source: {}", e)))
    }

    async fn click(&self, css: &str) -> Result<(), EngineError> {
        let page = self.page().ok_or(EngineError::NoSession)?;
        page.find_element(css)
            .await
            .map_err(|e| EngineError::ElementNotFound(format!("{}: {}", css, e)))?
            .click()
            .await
            .map_err(|e| EngineError::Interaction(format!("Click failed: {}", e)))?;
        Ok(())
    }

    async fn click_matching(&self, css: &str, text: &str) -> Result<bool, EngineError> {
        let page = self.page().ok_or(EngineError::NoSession)?;
        let elements = page
            .find_elements(css)
            .await
            .map_err(|e| EngineError::ElementNotFound(format!("{}: {}", css, e)))?;

        for element in elements {
            let Ok(Some(label)) = element.inner_text().await else {
                continue;
            };
            if label.trim() == text {
                element
                    .click()
                    .await
                    .map_err(|e| EngineError::Interaction(format!("Click failed: {}", e)))?;
                return Ok(true);
            }
        }
        Ok(false)
    }

    async fn click_after_label(&self, text: &str) -> Result<bool, EngineError> {
        let page = self.page().ok_or(EngineError::NoSession)?;
        let needle = serde_json::to_string(text)
            .map_err(|e| EngineError::Other(format!("failed to encode label text: {}", e)))?;
        let found = page
            .evaluate(MARK_AFTER_LABEL.replace("__LABEL__", &needle))
            .await
            .map_err(|e| EngineError::Interaction(format!("Label lookup failed: {}", e)))?
            .into_value::<bool>()
            .map_err(|e| EngineError::Other(format!("unexpected label lookup result: {}", e)))?;
        if !found {
            return Ok(false);
        }

        // Native click on the marked element
        page.find_element(LABEL_TARGET)
            .await
            .map_err(|e| EngineError::ElementNotFound(format!("{}: {}", LABEL_TARGET, e)))?
            .click()
            .await
            .map_err(|e| EngineError::Interaction(format!("Click failed: {}", e)))?;
        Ok(true)
    }

    async fn scroll_to_bottom(&self) -> Result<(), EngineError> {
        let page = self.page().ok_or(EngineError::NoSession)?;
        page.evaluate(SCROLL_TO_BOTTOM)
            .await
            .map_err(|e| EngineError::Interaction(format!("Scroll failed: {}", e)))?;
        Ok(())
    }

    async fn close_session(&mut self) {
        let SessionState::Active {
            mut browser,
            page,
            handler,
            remote,
        } = std::mem::replace(&mut self.state, SessionState::Idle)
        else {
            return;
        };

        if let Err(e) = page.close().await {
            warn!("Failed to close page: {}", e);
        }

        // A remote browser is shared, only our tab is ours to close
        if !remote {
            if let Err(e) = browser.close().await {
                warn!("Failed to close browser: {}", e);
            }
            if let Err(e) = browser.wait().await {
                warn!("Failed to wait for browser exit: {}", e);
            }
        }

        handler.abort();
        info!("Browser session closed");
    }
}

impl Drop for BrowserSession {
    fn drop(&mut self) {
        if let SessionState::Active { handler, .. } = &self.state {
            handler.abort();
        }
    }
}
