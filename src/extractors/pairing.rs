// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

//! 各站点共用的HTML遍历逻辑
//!
//! 全部为同步函数，`Html` 不能跨越 await 持有。

use crate::domain::models::discovered_link::DiscoveredLink;
use crate::domain::models::raw_field_bag::RawFieldBag;
use crate::domain::services::social_links::{classify_links, SocialLinks};
use crate::engines::dom;
use crate::extractors::profile::{ListingRule, PairRule};
use once_cell::sync::Lazy;
use regex::Regex;
use scraper::{ElementRef, Html, Selector};
use std::collections::HashSet;
use tracing::debug;
use url::Url;

static LIVE_BADGE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\blive\b").expect("Failed to compile live badge regex"));

/// 状态徽标文本是否表示正在进行
pub fn is_live_badge(text: &str) -> bool {
    LIVE_BADGE.is_match(text)
}

/// 标签与值之间最多向上追溯的层数
const MAX_ANCESTOR_HOPS: usize = 4;

/// 按规则收集标签/值对，返回写入的数量
pub fn collect_pairs(html: &Html, rule: &PairRule, bag: &mut RawFieldBag) -> usize {
    match rule {
        PairRule::Rows { row, cell } => {
            let (Some(row), Some(cell)) = (dom::parse_selector(row), dom::parse_selector(cell))
            else {
                return 0;
            };
            let mut written = 0;
            for element in html.select(&row) {
                let cells: Vec<String> = element
                    .select(&cell)
                    .map(dom::element_text)
                    .filter(|text| !text.is_empty())
                    .collect();
                if let [label, value, ..] = cells.as_slice() {
                    if bag.insert(label.as_str(), value) {
                        written += 1;
                    }
                }
            }
            written
        }
        PairRule::Lines { row } => {
            let Some(row) = dom::parse_selector(row) else {
                return 0;
            };
            let mut written = 0;
            for element in html.select(&row) {
                let lines = dom::element_lines(element);
                if let [label, value, ..] = lines.as_slice() {
                    if bag.insert(label.as_str(), value) {
                        written += 1;
                    }
                }
            }
            written
        }
        PairRule::Labelled {
            labels,
            label,
            value,
        } => {
            let (Some(label_sel), Some(value_sel)) =
                (dom::parse_selector(label), dom::parse_selector(value))
            else {
                return 0;
            };
            let mut written = 0;
            for wanted in labels.iter() {
                let found = html
                    .select(&label_sel)
                    .filter(|element| dom::element_text(*element) == *wanted)
                    .find_map(|element| following_value(element, &value_sel));
                match found {
                    Some(text) => {
                        if bag.insert(*wanted, text) {
                            written += 1;
                        }
                    }
                    None => debug!(label = *wanted, "Labelled value not found"),
                }
            }
            written
        }
    }
}

/// 查找标签之后的第一个值元素
///
/// 依次检查标签的后续兄弟节点，再检查各级祖先的后续兄弟节点
fn following_value(label: ElementRef<'_>, value: &Selector) -> Option<String> {
    let mut current = Some(label);
    for _ in 0..=MAX_ANCESTOR_HOPS {
        let node = current?;
        for sibling in node.next_siblings().filter_map(ElementRef::wrap) {
            let candidate = if value.matches(&sibling) {
                Some(sibling)
            } else {
                sibling.select(value).next()
            };
            if let Some(text) = candidate.map(dom::element_text).filter(|t| !t.is_empty()) {
                return Some(text);
            }
        }
        current = node.parent().and_then(ElementRef::wrap);
    }
    None
}

/// 从列表页收集正在进行的预售详情链接
///
/// 相对链接以 `base` 解析；只保留同站且符合路径前缀的链接；按出现顺序去重
pub fn collect_card_links(html: &Html, base: &Url, listing: &ListingRule) -> Vec<DiscoveredLink> {
    let Some(card_sel) = dom::parse_selector(listing.card) else {
        return Vec::new();
    };
    let anchor_sel = listing.link.and_then(dom::parse_selector);
    let badge_sel = listing.live_badge.and_then(dom::parse_selector);
    let name_sel = listing.name.and_then(dom::parse_selector);
    let Some(fallback_anchor) = dom::parse_selector("a[href]") else {
        return Vec::new();
    };

    let mut seen = HashSet::new();
    let mut links = Vec::new();

    for card in html.select(&card_sel) {
        if let Some(badge) = &badge_sel {
            let live = card
                .select(badge)
                .any(|element| is_live_badge(&dom::element_text(element)));
            if !live {
                continue;
            }
        }

        let name = name_sel
            .as_ref()
            .and_then(|selector| card.select(selector).next())
            .map(dom::element_text);

        let hrefs: Vec<&str> = if card.value().name() == "a" {
            card.value().attr("href").into_iter().collect()
        } else {
            card.select(anchor_sel.as_ref().unwrap_or(&fallback_anchor))
                .filter_map(|anchor| anchor.value().attr("href"))
                .collect()
        };

        for href in hrefs {
            let Some(url) = resolve_link(base, href, listing.link_prefix) else {
                continue;
            };
            if seen.insert(url.clone()) {
                let mut link = DiscoveredLink::new(url);
                if let Some(name) = &name {
                    link = link.with_name(name.as_str());
                }
                links.push(link);
            }
        }
    }

    links
}

fn resolve_link(base: &Url, href: &str, prefix: Option<&str>) -> Option<String> {
    let href = href.trim();
    if href.is_empty() || href.starts_with('#') {
        return None;
    }
    let mut url = base.join(href).ok()?;
    if url.host_str() != base.host_str() {
        return None;
    }
    if let Some(prefix) = prefix {
        if !url.path().starts_with(prefix) || url.path() == prefix {
            return None;
        }
    }
    url.set_fragment(None);
    Some(url.to_string())
}

/// 收集社交链接容器中的锚点并分类
pub fn collect_social_links(html: &Html, containers: &[&str]) -> SocialLinks {
    let Some(anchor) = dom::parse_selector("a[href]") else {
        return SocialLinks::default();
    };
    let mut hrefs = Vec::new();
    for container in containers.iter().filter_map(|css| dom::parse_selector(css)) {
        for element in html.select(&container) {
            hrefs.extend(
                element
                    .select(&anchor)
                    .filter_map(|a| a.value().attr("href")),
            );
        }
    }
    classify_links(hrefs)
}

#[cfg(test)]
#[path = "pairing_test.rs"]
mod tests;
