// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::collections::BTreeMap;

/// 所有数据源共用的标签
pub mod labels {
    pub const NAME: &str = "Name";
    pub const STATUS: &str = "Status";
    pub const CHAIN: &str = "Chain";
    pub const TWITTER: &str = "Twitter";
    pub const TELEGRAM: &str = "Telegram";
    pub const WEBSITE: &str = "Website";
}

/// 表示正在进行中的预售的状态文本
pub const LIVE_STATUS: &str = "Sale live";

/// 原始字段集合
///
/// 单次详情提取得到的 标签 -> 原始文本 映射。只在一次提取调用内存在，
/// 交给规范化器后即丢弃，从不持久化。
///
/// 写入时会去除首尾空白，空值被视为缺失；同一标签重复写入时以最后一次为准。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawFieldBag {
    source_url: String,
    fields: BTreeMap<String, String>,
}

impl RawFieldBag {
    pub fn new(source_url: impl Into<String>) -> Self {
        Self {
            source_url: source_url.into(),
            fields: BTreeMap::new(),
        }
    }

    pub fn source_url(&self) -> &str {
        &self.source_url
    }

    /// 写入一个字段，返回是否实际写入
    pub fn insert(&mut self, label: impl Into<String>, value: impl AsRef<str>) -> bool {
        let label = label.into();
        let label = label.trim();
        let value = value.as_ref().trim();
        if label.is_empty() || value.is_empty() {
            return false;
        }
        self.fields.insert(label.to_string(), value.to_string());
        true
    }

    /// 仅当标签尚不存在时写入
    pub fn insert_if_absent(&mut self, label: &str, value: impl AsRef<str>) -> bool {
        if self.contains(label) {
            return false;
        }
        self.insert(label, value)
    }

    pub fn get(&self, label: &str) -> Option<&str> {
        self.fields.get(label).map(String::as_str)
    }

    pub fn contains(&self, label: &str) -> bool {
        self.fields.contains_key(label)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// 合并另一个集合，另一个集合中的值覆盖当前值
    pub fn merge(&mut self, other: RawFieldBag) {
        self.fields.extend(other.fields);
    }
}

impl<L: Into<String>, V: AsRef<str>> Extend<(L, V)> for RawFieldBag {
    fn extend<T: IntoIterator<Item = (L, V)>>(&mut self, iter: T) {
        for (label, value) in iter {
            self.insert(label, value);
        }
    }
}
