// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

//! Solanium 发射台
//!
//! 项目名只出现在列表卡片上，通过 [`DiscoveredLink::name`] 传给详情提取。
//!
//! [`DiscoveredLink::name`]: crate::domain::models::discovered_link::DiscoveredLink

use crate::domain::models::sale_source::SaleSource;
use crate::extractors::profile::{
    DetailLayout, IndexPreparation, ListingRule, PairRule, SourceProfile, StatusPolicy,
};

static ATTRIBUTE_ROWS: [PairRule; 1] = [PairRule::Rows {
    row: "div.flex.flex-col div.flex.justify-between.w-full",
    cell: "span",
}];

static LAYOUTS: [DetailLayout; 1] = [DetailLayout {
    name: "attribute rows",
    fields: &[],
    pairs: &ATTRIBUTE_ROWS,
}];

pub static PROFILE: SourceProfile = SourceProfile {
    source: SaleSource::Solanium,
    index_url: "https://www.solanium.io/#live-projects",
    base_url: "https://www.solanium.io",
    preparation: IndexPreparation::None,
    scrolls: true,
    listing: ListingRule {
        card: "div.rounded-solaniumDefault.bg-white",
        link: None,
        live_badge: None,
        name: Some("div.content span"),
        link_prefix: Some("/project/"),
    },
    social_containers: &["div.flex.flex-col.justify-center.mb-10"],
    layouts: &LAYOUTS,
    status: StatusPolicy::Stamped,
};
