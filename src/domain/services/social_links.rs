// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 与项目无关、不作为官网的平台
const DENYLIST: [&str; 9] = [
    "discord",
    "facebook.com",
    "github.com",
    "reddit.com",
    "medium.com",
    "youtube.com",
    "instagram.com",
    "whatsapp.com",
    "linkedin.com",
];

/// 社交链接类别
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SocialKind {
    Twitter,
    Telegram,
    Website,
}

/// 分类后的社交链接
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SocialLinks {
    pub twitter: Option<String>,
    pub telegram: Option<String>,
    pub website: Option<String>,
}

impl SocialLinks {
    pub fn is_empty(&self) -> bool {
        self.twitter.is_none() && self.telegram.is_none() && self.website.is_none()
    }
}

fn is_x_domain(href: &str) -> bool {
    href.match_indices("x.com").any(|(idx, _)| {
        idx == 0 || matches!(href.as_bytes().get(idx - 1), Some(b'/') | Some(b'.'))
    })
}

/// 对单个链接分类
///
/// 分享/意图类链接、黑名单平台、站内相对链接与空链接返回 `None`
pub fn classify_link(href: &str) -> Option<SocialKind> {
    let href = href.trim();
    if href.is_empty() || href.starts_with('/') || href.starts_with('#') {
        return None;
    }
    let lower = href.to_ascii_lowercase();
    if lower.starts_with("javascript:") || lower.starts_with("mailto:") {
        return None;
    }

    if lower.contains("twitter.com") || is_x_domain(&lower) {
        if lower.contains("intent/") {
            return None;
        }
        return Some(SocialKind::Twitter);
    }

    if lower.contains("t.me") || lower.contains("telegram.me") {
        if lower.contains("share/") {
            return None;
        }
        return Some(SocialKind::Telegram);
    }

    if DENYLIST.iter().any(|denied| lower.contains(denied)) {
        return None;
    }

    Some(SocialKind::Website)
}

/// 对一组链接分类，每个类别以最后出现的链接为准
pub fn classify_links<'a, I>(hrefs: I) -> SocialLinks
where
    I: IntoIterator<Item = &'a str>,
{
    let mut links = SocialLinks::default();
    for href in hrefs {
        let slot = match classify_link(href) {
            Some(SocialKind::Twitter) => &mut links.twitter,
            Some(SocialKind::Telegram) => &mut links.telegram,
            Some(SocialKind::Website) => &mut links.website,
            None => continue,
        };
        *slot = Some(href.trim().to_string());
    }
    links
}
