// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

//! SolanaPad 发射台

use crate::domain::models::raw_field_bag::labels;
use crate::domain::models::sale_source::SaleSource;
use crate::engines::traits::FieldSelector;
use crate::extractors::profile::{
    DetailLayout, FieldRule, IndexPreparation, ListingRule, PairRule, SourceProfile, StatusPolicy,
};

macro_rules! content {
    ($tail:expr) => {
        concat!(
            "body > div > div:nth-of-type(1) > div:nth-of-type(2) > main > div > div:nth-of-type(2) > ",
            $tail
        )
    };
}

macro_rules! header {
    ($tail:expr) => {
        content!(concat!(
            "div:nth-of-type(2) > div:nth-of-type(1) > div:nth-of-type(1) > div:nth-of-type(1) > div:nth-of-type(2) > ",
            $tail
        ))
    };
}

static HEADER_FIELDS: [FieldRule; 3] = [
    FieldRule {
        label: "Symbol",
        selector: FieldSelector::text("symbol", header!("div:nth-of-type(1) > div:nth-of-type(1) > h3")),
    },
    FieldRule {
        label: labels::STATUS,
        selector: FieldSelector::text("status", header!("div:nth-of-type(2) > div:nth-of-type(2) > span")),
    },
    FieldRule {
        label: "Current raised",
        selector: FieldSelector::first_line(
            "raised",
            content!("div:nth-of-type(2) > div:nth-of-type(2) > div > div:nth-of-type(2) > div:nth-of-type(3) > div > div > span:nth-of-type(1)"),
        ),
    },
];

static SALE_LIST: [PairRule; 1] = [PairRule::Lines {
    row: content!("div:nth-of-type(2) > div:nth-of-type(1) > div:nth-of-type(2) > ul > li"),
}];

static LAYOUTS: [DetailLayout; 1] = [DetailLayout {
    name: "sale list",
    fields: &HEADER_FIELDS,
    pairs: &SALE_LIST,
}];

pub static PROFILE: SourceProfile = SourceProfile {
    source: SaleSource::SolanaPad,
    index_url: "https://solanapad.io/launchpad-list",
    base_url: "https://solanapad.io",
    preparation: IndexPreparation::ClickTab {
        css: content!("div:nth-of-type(2) > div > ul > li:nth-of-type(3) > span > span"),
    },
    scrolls: false,
    listing: ListingRule {
        card: "main > div > div:nth-of-type(2) > div:nth-of-type(2) > div, main > div > div:nth-of-type(2) > div:nth-of-type(3) > div",
        link: Some("div:nth-of-type(7) > div:nth-of-type(2) > a"),
        live_badge: None,
        name: None,
        link_prefix: None,
    },
    social_containers: &[header!("div:nth-of-type(1) > div:nth-of-type(2) > div")],
    layouts: &LAYOUTS,
    status: StatusPolicy::Badge,
};
