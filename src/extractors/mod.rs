// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::config::settings::ScraperSettings;
use crate::domain::models::discovered_link::DiscoveredLink;
use crate::domain::models::raw_field_bag::RawFieldBag;
use crate::domain::models::sale_source::SaleSource;
use crate::engines::traits::{EngineError, NavigationError, PageSession};
use async_trait::async_trait;
use profile::{DiscoveryTuning, ProfiledExtractor, SourceProfile};
use thiserror::Error;

pub mod dxsale;
pub mod pairing;
pub mod pinksale;
pub mod profile;
pub mod solanapad;
pub mod solanium;

/// 提取错误
#[derive(Error, Debug)]
pub enum ExtractError {
    #[error("Navigation error: {0}")]
    Navigation(#[from] NavigationError),

    #[error("Engine error: {0}")]
    Engine(#[from] EngineError),

    #[error("Invalid base url: {0}")]
    InvalidBaseUrl(String),

    #[error("No detail layout matched {url}")]
    NoLayoutMatched { url: String },

    #[error("Listing filter unavailable: {0}")]
    FilterUnavailable(String),
}

/// 数据源提取器
///
/// 每个站点一个实现，分为两个阶段：
/// 在列表页发现正在进行的预售链接，以及从已打开的详情页提取原始字段。
#[async_trait]
pub trait SourceExtractor: Send + Sync {
    /// 对应的数据源
    fn source(&self) -> SaleSource;

    /// 发现正在进行的预售详情链接
    ///
    /// 任何失败都视为没有链接，返回空列表
    async fn discover_live_links(&self, session: &mut dyn PageSession) -> Vec<DiscoveredLink>;

    /// 从当前已打开的详情页提取原始字段
    async fn extract_detail(
        &self,
        session: &dyn PageSession,
        link: &DiscoveredLink,
    ) -> Result<RawFieldBag, ExtractError>;
}

/// 数据源对应的站点描述
pub fn profile_for(source: SaleSource) -> &'static SourceProfile {
    match source {
        SaleSource::PinkSale => &pinksale::PROFILE,
        SaleSource::DxSale => &dxsale::PROFILE,
        SaleSource::Solanium => &solanium::PROFILE,
        SaleSource::SolanaPad => &solanapad::PROFILE,
    }
}

/// 按给定顺序构建提取器
pub fn build_extractors(
    settings: &ScraperSettings,
    sources: &[SaleSource],
) -> Vec<Box<dyn SourceExtractor>> {
    let tuning = DiscoveryTuning::from(settings);
    sources
        .iter()
        .map(|source| {
            Box::new(ProfiledExtractor::new(profile_for(*source), tuning)) as Box<dyn SourceExtractor>
        })
        .collect()
}
