// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};

/// 缺失字段的占位值
pub const NOT_AVAILABLE: &str = "Not Available";

/// 规范化的预售记录
///
/// 唯一被持久化的实体。四个数据源的原始字段都会被映射到这一结构，
/// 页面上找不到的字段统一填充为 [`NOT_AVAILABLE`]，不会留空。
///
/// 只有 `is_live && fetch_succeeded` 的记录才会写入存储，
/// 并且以 `source_url` 为唯一键最多写入一次。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CanonicalSaleRecord {
    /// 详情页地址，全局唯一
    pub source_url: String,
    /// 数据源名称
    pub source: String,
    pub name: String,
    pub symbol: String,
    pub website: String,
    pub twitter: String,
    pub telegram: String,
    pub token_address: String,
    pub total_supply: String,
    pub pool_address: String,
    pub soft_cap: String,
    pub start_time: String,
    pub end_time: String,
    pub lockup_time: String,
    pub current_rate: String,
    pub amount_raised: String,
    pub chain: String,
    /// 预售是否正在进行
    pub is_live: bool,
    /// 原始字段映射是否顺利完成
    pub fetch_succeeded: bool,
}

impl CanonicalSaleRecord {
    /// 创建所有字段都为占位值的记录
    ///
    /// `is_live` 与 `fetch_succeeded` 均为 false
    pub fn unavailable(source: impl Into<String>, source_url: impl Into<String>) -> Self {
        let na = || NOT_AVAILABLE.to_string();
        Self {
            source_url: source_url.into(),
            source: source.into(),
            name: na(),
            symbol: na(),
            website: na(),
            twitter: na(),
            telegram: na(),
            token_address: na(),
            total_supply: na(),
            pool_address: na(),
            soft_cap: na(),
            start_time: na(),
            end_time: na(),
            lockup_time: na(),
            current_rate: na(),
            amount_raised: na(),
            chain: na(),
            is_live: false,
            fetch_succeeded: false,
        }
    }

    /// 是否允许写入存储
    pub fn is_persistable(&self) -> bool {
        self.is_live && self.fetch_succeeded
    }

    pub fn field(&self, field: CanonicalField) -> &str {
        match field {
            CanonicalField::Name => &self.name,
            CanonicalField::Symbol => &self.symbol,
            CanonicalField::Website => &self.website,
            CanonicalField::Twitter => &self.twitter,
            CanonicalField::Telegram => &self.telegram,
            CanonicalField::TokenAddress => &self.token_address,
            CanonicalField::TotalSupply => &self.total_supply,
            CanonicalField::PoolAddress => &self.pool_address,
            CanonicalField::SoftCap => &self.soft_cap,
            CanonicalField::StartTime => &self.start_time,
            CanonicalField::EndTime => &self.end_time,
            CanonicalField::LockupTime => &self.lockup_time,
            CanonicalField::CurrentRate => &self.current_rate,
            CanonicalField::AmountRaised => &self.amount_raised,
            CanonicalField::Chain => &self.chain,
        }
    }

    pub fn field_mut(&mut self, field: CanonicalField) -> &mut String {
        match field {
            CanonicalField::Name => &mut self.name,
            CanonicalField::Symbol => &mut self.symbol,
            CanonicalField::Website => &mut self.website,
            CanonicalField::Twitter => &mut self.twitter,
            CanonicalField::Telegram => &mut self.telegram,
            CanonicalField::TokenAddress => &mut self.token_address,
            CanonicalField::TotalSupply => &mut self.total_supply,
            CanonicalField::PoolAddress => &mut self.pool_address,
            CanonicalField::SoftCap => &mut self.soft_cap,
            CanonicalField::StartTime => &mut self.start_time,
            CanonicalField::EndTime => &mut self.end_time,
            CanonicalField::LockupTime => &mut self.lockup_time,
            CanonicalField::CurrentRate => &mut self.current_rate,
            CanonicalField::AmountRaised => &mut self.amount_raised,
            CanonicalField::Chain => &mut self.chain,
        }
    }
}

/// 记录中的可选文本字段
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CanonicalField {
    Name,
    Symbol,
    Website,
    Twitter,
    Telegram,
    TokenAddress,
    TotalSupply,
    PoolAddress,
    SoftCap,
    StartTime,
    EndTime,
    LockupTime,
    CurrentRate,
    AmountRaised,
    Chain,
}

impl CanonicalField {
    pub const ALL: [CanonicalField; 15] = [
        CanonicalField::Name,
        CanonicalField::Symbol,
        CanonicalField::Website,
        CanonicalField::Twitter,
        CanonicalField::Telegram,
        CanonicalField::TokenAddress,
        CanonicalField::TotalSupply,
        CanonicalField::PoolAddress,
        CanonicalField::SoftCap,
        CanonicalField::StartTime,
        CanonicalField::EndTime,
        CanonicalField::LockupTime,
        CanonicalField::CurrentRate,
        CanonicalField::AmountRaised,
        CanonicalField::Chain,
    ];

    /// 存储列名
    pub fn column(&self) -> &'static str {
        match self {
            CanonicalField::Name => "name",
            CanonicalField::Symbol => "symbol",
            CanonicalField::Website => "website",
            CanonicalField::Twitter => "twitter",
            CanonicalField::Telegram => "telegram",
            CanonicalField::TokenAddress => "token_address",
            CanonicalField::TotalSupply => "total_supply",
            CanonicalField::PoolAddress => "pool_address",
            CanonicalField::SoftCap => "soft_cap",
            CanonicalField::StartTime => "start_time",
            CanonicalField::EndTime => "end_time",
            CanonicalField::LockupTime => "lockup_time",
            CanonicalField::CurrentRate => "current_rate",
            CanonicalField::AmountRaised => "amount_raised",
            CanonicalField::Chain => "chain",
        }
    }
}
