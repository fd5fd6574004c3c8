// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::config::settings::ScraperSettings;
use crate::domain::models::discovered_link::DiscoveredLink;
use crate::domain::models::raw_field_bag::{labels, RawFieldBag, LIVE_STATUS};
use crate::domain::models::sale_source::SaleSource;
use crate::domain::services::chain_resolver::{normalize_alias, resolve_chain};
use crate::engines::traits::{FieldSelector, PageSession};
use crate::extractors::{pairing, ExtractError, SourceExtractor};
use async_trait::async_trait;
use scraper::Html;
use std::time::Duration;
use tracing::{debug, info, warn};
use url::Url;

/// 站点描述
///
/// 每个站点只提供数据：地址、列表页操作、选择器表与社交链接容器。
/// 遍历与分类逻辑由 [`ProfiledExtractor`] 统一实现。
#[derive(Debug)]
pub struct SourceProfile {
    pub source: SaleSource,
    /// 列表页地址
    pub index_url: &'static str,
    /// 解析相对链接的基础地址
    pub base_url: &'static str,
    /// 解析列表前需要的页面操作
    pub preparation: IndexPreparation,
    /// 是否需要滚动加载更多内容
    pub scrolls: bool,
    pub listing: ListingRule,
    /// 社交链接所在的容器
    pub social_containers: &'static [&'static str],
    /// 详情页布局，按顺序尝试
    pub layouts: &'static [DetailLayout],
    /// 详情页状态字段的来源
    pub status: StatusPolicy,
}

/// 详情页状态的确定方式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusPolicy {
    /// 列表已按进行中筛选，直接写入进行中状态
    Stamped,
    /// 页面上的状态徽标，含 "live" 时规范为进行中状态，否则保留原文
    Badge,
}

/// 列表页准备操作
#[derive(Debug, Clone, Copy)]
pub enum IndexPreparation {
    None,
    /// 展开标签文本为 `label` 的下拉框，并选择文本等于 `text` 的选项
    ///
    /// 找不到下拉框或选项时列表不可信，发现阶段失败
    SelectOption {
        label: &'static str,
        option: &'static str,
        text: &'static str,
    },
    /// 点击一个标签页
    ClickTab { css: &'static str },
}

/// 列表卡片规则
#[derive(Debug, Clone, Copy)]
pub struct ListingRule {
    /// 卡片元素
    pub card: &'static str,
    /// 卡片内的链接；为空时取卡片内所有链接（卡片本身是链接时取其 href）
    pub link: Option<&'static str>,
    /// 卡片内的状态徽标，设置后只保留徽标文本含 "live" 的卡片
    pub live_badge: Option<&'static str>,
    /// 卡片上的项目名
    pub name: Option<&'static str>,
    /// 详情页路径前缀；为空时只要求同站
    pub link_prefix: Option<&'static str>,
}

/// 单个字段的位置规则
#[derive(Debug, Clone, Copy)]
pub struct FieldRule {
    pub label: &'static str,
    pub selector: FieldSelector,
}

/// 标签/值对规则
#[derive(Debug, Clone, Copy)]
pub enum PairRule {
    /// 每行内第一个单元为标签，第二个为值
    Rows { row: &'static str, cell: &'static str },
    /// 每个元素的文本为 "标签\n值"
    Lines { row: &'static str },
    /// 文本等于指定标签的元素之后的第一个值元素
    Labelled {
        labels: &'static [&'static str],
        label: &'static str,
        value: &'static str,
    },
}

/// 一种详情页布局
#[derive(Debug)]
pub struct DetailLayout {
    pub name: &'static str,
    pub fields: &'static [FieldRule],
    pub pairs: &'static [PairRule],
}

/// 列表页节奏参数
#[derive(Debug, Clone, Copy)]
pub struct DiscoveryTuning {
    pub page_load_timeout: Duration,
    pub scroll_downs: u32,
    pub scroll_pause: Duration,
    pub filter_settle: Duration,
}

impl From<&ScraperSettings> for DiscoveryTuning {
    fn from(settings: &ScraperSettings) -> Self {
        Self {
            page_load_timeout: settings.page_load_timeout(),
            scroll_downs: settings.scroll_downs,
            scroll_pause: settings.scroll_pause(),
            filter_settle: settings.filter_settle(),
        }
    }
}

/// 由站点描述驱动的提取器
pub struct ProfiledExtractor {
    profile: &'static SourceProfile,
    tuning: DiscoveryTuning,
}

impl ProfiledExtractor {
    pub fn new(profile: &'static SourceProfile, tuning: DiscoveryTuning) -> Self {
        Self { profile, tuning }
    }

    pub fn profile(&self) -> &'static SourceProfile {
        self.profile
    }

    async fn try_discover(
        &self,
        session: &mut dyn PageSession,
    ) -> Result<Vec<DiscoveredLink>, ExtractError> {
        let profile = self.profile;
        let base = Url::parse(profile.base_url)
            .map_err(|e| ExtractError::InvalidBaseUrl(format!("{}: {}", profile.base_url, e)))?;

        session
            .open_url(profile.index_url, self.tuning.page_load_timeout)
            .await?;

        match profile.preparation {
            IndexPreparation::None => {}
            IndexPreparation::SelectOption {
                label,
                option,
                text,
            } => {
                if !session.click_after_label(label).await? {
                    return Err(ExtractError::FilterUnavailable(format!(
                        "no control labelled '{}'",
                        label
                    )));
                }
                tokio::time::sleep(self.tuning.filter_settle).await;
                if !session.click_matching(option, text).await? {
                    return Err(ExtractError::FilterUnavailable(format!(
                        "no '{}' option under '{}'",
                        text, label
                    )));
                }
                tokio::time::sleep(self.tuning.filter_settle).await;
            }
            IndexPreparation::ClickTab { css } => {
                session.click(css).await?;
                tokio::time::sleep(self.tuning.filter_settle).await;
            }
        }

        if profile.scrolls {
            for i in 0..self.tuning.scroll_downs {
                session.scroll_to_bottom().await?;
                debug!("Scrolling down ({}/{})", i + 1, self.tuning.scroll_downs);
                tokio::time::sleep(self.tuning.scroll_pause).await;
            }
        }

        let source = session.page_source().await?;
        let links = {
            let html = Html::parse_document(&source);
            pairing::collect_card_links(&html, &base, &profile.listing)
        };
        Ok(links)
    }

    async fn apply_layout(
        &self,
        session: &dyn PageSession,
        layout: &DetailLayout,
        source: &str,
    ) -> RawFieldBag {
        let mut bag = RawFieldBag::default();
        for rule in layout.fields {
            if let Some(value) = session.extract_field(&rule.selector).await {
                bag.insert(rule.label, value);
            }
        }
        if !layout.pairs.is_empty() {
            let html = Html::parse_document(source);
            for rule in layout.pairs {
                pairing::collect_pairs(&html, rule, &mut bag);
            }
        }
        bag
    }

    /// 依次尝试各布局，返回第一个非空结果
    pub async fn extract_first_populated(
        &self,
        session: &dyn PageSession,
        url: &str,
        source: &str,
    ) -> Result<RawFieldBag, ExtractError> {
        for layout in self.profile.layouts {
            let bag = self.apply_layout(session, layout, source).await;
            if !bag.is_empty() {
                debug!(layout = layout.name, fields = bag.len(), "Layout matched");
                let mut populated = RawFieldBag::new(url);
                populated.merge(bag);
                return Ok(populated);
            }
            debug!(layout = layout.name, "Layout yielded no fields, trying next");
        }
        Err(ExtractError::NoLayoutMatched {
            url: url.to_string(),
        })
    }

    fn finish(&self, bag: &mut RawFieldBag, link: &DiscoveredLink, source: &str) {
        let socials = {
            let html = Html::parse_document(source);
            pairing::collect_social_links(&html, self.profile.social_containers)
        };
        for (label, value) in [
            (labels::TWITTER, socials.twitter),
            (labels::TELEGRAM, socials.telegram),
            (labels::WEBSITE, socials.website),
        ] {
            match value {
                Some(href) => {
                    bag.insert(label, href);
                }
                None => warn!(url = %link.url, "{} link not found", label),
            }
        }

        match self.profile.status {
            StatusPolicy::Stamped => {
                bag.insert(labels::STATUS, LIVE_STATUS);
            }
            StatusPolicy::Badge => {
                if bag.get(labels::STATUS).is_some_and(pairing::is_live_badge) {
                    bag.insert(labels::STATUS, LIVE_STATUS);
                }
            }
        }

        if let Some(name) = &link.name {
            bag.insert_if_absent(labels::NAME, name);
        }

        let chain = match bag.get(labels::CHAIN) {
            Some(chain) => Some(normalize_alias(chain)),
            None => bag.iter().find_map(|(label, value)| resolve_chain(label, value)),
        };
        if let Some(chain) = chain {
            bag.insert(labels::CHAIN, chain.as_str());
        }
    }
}

#[async_trait]
impl SourceExtractor for ProfiledExtractor {
    fn source(&self) -> SaleSource {
        self.profile.source
    }

    async fn discover_live_links(&self, session: &mut dyn PageSession) -> Vec<DiscoveredLink> {
        match self.try_discover(session).await {
            Ok(links) => {
                info!(
                    index = self.profile.index_url,
                    count = links.len(),
                    "Discovered live links"
                );
                links
            }
            Err(e) => {
                warn!(index = self.profile.index_url, error = %e, "Discovery failed, no links");
                Vec::new()
            }
        }
    }

    async fn extract_detail(
        &self,
        session: &dyn PageSession,
        link: &DiscoveredLink,
    ) -> Result<RawFieldBag, ExtractError> {
        let source = session.page_source().await?;
        let mut bag = self
            .extract_first_populated(session, &link.url, &source)
            .await?;
        self.finish(&mut bag, link, &source);
        Ok(bag)
    }
}
