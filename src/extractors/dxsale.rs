// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

//! DxSale 发射台
//!
//! 列表页通过 "Filter by" 下拉框筛选 "Running"，因此列表中的项目都视为进行中。

use crate::domain::models::raw_field_bag::labels;
use crate::domain::models::sale_source::SaleSource;
use crate::engines::traits::FieldSelector;
use crate::extractors::profile::{
    DetailLayout, FieldRule, IndexPreparation, ListingRule, PairRule, SourceProfile, StatusPolicy,
};

static HEADLINE_FIELDS: [FieldRule; 3] = [
    FieldRule {
        label: labels::NAME,
        selector: FieldSelector::text("name", ".MuiTypography-h3.css-vwfc3z"),
    },
    FieldRule {
        label: "Symbol",
        selector: FieldSelector::text("symbol", ".MuiTypography-h6.css-eezjbm"),
    },
    FieldRule {
        label: "Raised",
        selector: FieldSelector::text("raised", "p.MuiTypography-h5.css-oh7pm8"),
    },
];

static LABELLED_SPANS: [PairRule; 1] = [PairRule::Labelled {
    labels: &["Presale address", "Token address", "Soft Cap", "Total Supply"],
    label: "span",
    value: "span.MuiTypography-subtitle2",
}];

static GENERIC_ROWS: [PairRule; 1] = [PairRule::Rows {
    row: "div.MuiStack-root",
    cell: "span, p",
}];

static LAYOUTS: [DetailLayout; 2] = [
    DetailLayout {
        name: "labelled",
        fields: &HEADLINE_FIELDS,
        pairs: &LABELLED_SPANS,
    },
    DetailLayout {
        name: "rows",
        fields: &[],
        pairs: &GENERIC_ROWS,
    },
];

pub static PROFILE: SourceProfile = SourceProfile {
    source: SaleSource::DxSale,
    index_url: "https://www.dx.app/dxsale",
    base_url: "https://www.dx.app",
    preparation: IndexPreparation::SelectOption {
        label: "Filter by",
        option: "ul[role='listbox'] li[role='option']",
        text: "Running",
    },
    scrolls: true,
    listing: ListingRule {
        card: "div.MuiCard-root",
        link: None,
        live_badge: None,
        name: None,
        link_prefix: Some("/dxsale/"),
    },
    social_containers: &["div.MuiBox-root.css-qokrjo"],
    layouts: &LAYOUTS,
    status: StatusPolicy::Stamped,
};
