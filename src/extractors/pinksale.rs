// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

//! PinkSale（Solana）发射台
//!
//! 详情页没有标签文本可供匹配，字段按位置定位。桌面与移动端布局的
//! 根节点不同，先尝试桌面布局，再尝试移动端布局。

use crate::domain::models::raw_field_bag::labels;
use crate::domain::models::sale_source::SaleSource;
use crate::engines::traits::FieldSelector;
use crate::extractors::profile::{
    DetailLayout, FieldRule, IndexPreparation, ListingRule, SourceProfile, StatusPolicy,
};

macro_rules! desktop {
    ($tail:literal) => {
        concat!(
            "body > div > div > div:nth-of-type(3) > main > div > div > div:nth-of-type(2) > ",
            $tail
        )
    };
}

macro_rules! mobile {
    ($tail:literal) => {
        concat!(
            "body > div > div > div:nth-of-type(3) > main > div > div > div:nth-of-type(1) > ",
            $tail
        )
    };
}

const fn text(label: &'static str, css: &'static str) -> FieldRule {
    FieldRule {
        label,
        selector: FieldSelector::text(label, css),
    }
}

const fn first_line(label: &'static str, css: &'static str) -> FieldRule {
    FieldRule {
        label,
        selector: FieldSelector::first_line(label, css),
    }
}

static DESKTOP_FIELDS: [FieldRule; 12] = [
    text(labels::STATUS, desktop!("div:nth-of-type(2) > div:nth-of-type(1) > div:nth-of-type(3) > div:nth-of-type(2) > div:nth-of-type(2)")),
    text("Current Rate", desktop!("div:nth-of-type(2) > div:nth-of-type(1) > div:nth-of-type(3) > div:nth-of-type(4) > div:nth-of-type(2)")),
    text("Current raised", desktop!("div:nth-of-type(2) > div:nth-of-type(1) > div:nth-of-type(3) > div:nth-of-type(5) > div:nth-of-type(2)")),
    first_line("Address", desktop!("div:nth-of-type(1) > div:nth-of-type(1) > div:nth-of-type(2) > div > div:nth-of-type(2) > div:nth-of-type(2)")),
    text(labels::NAME, desktop!("div:nth-of-type(1) > div:nth-of-type(1) > div:nth-of-type(2) > div > div:nth-of-type(3) > div:nth-of-type(2)")),
    text("Symbol", desktop!("div:nth-of-type(1) > div:nth-of-type(1) > div:nth-of-type(2) > div > div:nth-of-type(4) > div:nth-of-type(2)")),
    text("Total supply", desktop!("div:nth-of-type(1) > div:nth-of-type(1) > div:nth-of-type(2) > div > div:nth-of-type(6) > div:nth-of-type(2)")),
    first_line("Pool address", desktop!("div:nth-of-type(1) > div:nth-of-type(1) > div:nth-of-type(3) > div:nth-of-type(2) > div:nth-of-type(2)")),
    text("SoftCap", desktop!("div:nth-of-type(1) > div:nth-of-type(1) > div:nth-of-type(3) > div:nth-of-type(5) > div:nth-of-type(2)")),
    text("Start time", desktop!("div:nth-of-type(1) > div:nth-of-type(1) > div:nth-of-type(3) > div:nth-of-type(6) > div:nth-of-type(2)")),
    text("End time", desktop!("div:nth-of-type(1) > div:nth-of-type(1) > div:nth-of-type(3) > div:nth-of-type(7) > div:nth-of-type(2)")),
    text("Liquidity Lockup Time", desktop!("div:nth-of-type(1) > div:nth-of-type(1) > div:nth-of-type(3) > div:nth-of-type(10) > div:nth-of-type(2)")),
];

static MOBILE_FIELDS: [FieldRule; 12] = [
    text(labels::STATUS, mobile!("div:nth-of-type(2) > div:nth-of-type(3) > div:nth-of-type(2) > div:nth-of-type(2) > div")),
    text("Current Rate", mobile!("div:nth-of-type(2) > div:nth-of-type(3) > div:nth-of-type(5) > div:nth-of-type(2) > div")),
    text("Current raised", mobile!("div:nth-of-type(2) > div:nth-of-type(3) > div:nth-of-type(6) > div:nth-of-type(2) > div")),
    first_line("Address", mobile!("div:nth-of-type(1) > div:nth-of-type(1) > div:nth-of-type(2) > div > div:nth-of-type(2) > div:nth-of-type(2) > div > div > div:nth-of-type(1)")),
    text(labels::NAME, mobile!("div:nth-of-type(1) > div:nth-of-type(1) > div:nth-of-type(2) > div > div:nth-of-type(3) > div:nth-of-type(2) > div")),
    text("Symbol", mobile!("div:nth-of-type(1) > div:nth-of-type(1) > div:nth-of-type(2) > div > div:nth-of-type(4) > div:nth-of-type(2)")),
    text("Total supply", mobile!("div:nth-of-type(1) > div:nth-of-type(1) > div:nth-of-type(2) > div > div:nth-of-type(6) > div:nth-of-type(2) > div")),
    first_line("Pool address", mobile!("div:nth-of-type(1) > div:nth-of-type(1) > div:nth-of-type(3) > div:nth-of-type(2) > div:nth-of-type(2)")),
    text("SoftCap", mobile!("div:nth-of-type(1) > div:nth-of-type(1) > div:nth-of-type(3) > div:nth-of-type(6) > div:nth-of-type(2)")),
    text("Start time", mobile!("div:nth-of-type(1) > div:nth-of-type(1) > div:nth-of-type(3) > div:nth-of-type(7) > div:nth-of-type(2)")),
    text("End time", mobile!("div:nth-of-type(1) > div:nth-of-type(1) > div:nth-of-type(3) > div:nth-of-type(8) > div:nth-of-type(2)")),
    text("Liquidity Lockup Time", mobile!("div:nth-of-type(1) > div:nth-of-type(1) > div:nth-of-type(3) > div:nth-of-type(12) > div:nth-of-type(2)")),
];

static LAYOUTS: [DetailLayout; 2] = [
    DetailLayout {
        name: "desktop",
        fields: &DESKTOP_FIELDS,
        pairs: &[],
    },
    DetailLayout {
        name: "mobile",
        fields: &MOBILE_FIELDS,
        pairs: &[],
    },
];

pub static PROFILE: SourceProfile = SourceProfile {
    source: SaleSource::PinkSale,
    index_url: "https://www.pinksale.finance/solana/launchpad",
    base_url: "https://www.pinksale.finance",
    preparation: IndexPreparation::None,
    scrolls: false,
    listing: ListingRule {
        card: "div.flex-1.overflow-x-auto tr",
        link: None,
        live_badge: Some("td span"),
        name: None,
        link_prefix: Some("/solana/launchpad/"),
    },
    social_containers: &[
        desktop!("div:nth-of-type(1) > div:nth-of-type(1) > div:nth-of-type(1) > div:nth-of-type(1) > div:nth-of-type(2) > div:nth-of-type(3)"),
        mobile!("div:nth-of-type(1) > div:nth-of-type(1) > div:nth-of-type(1) > div:nth-of-type(1) > div:nth-of-type(2) > div:nth-of-type(3)"),
    ],
    layouts: &LAYOUTS,
    status: StatusPolicy::Badge,
};
