// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::raw_field_bag::{labels, RawFieldBag, LIVE_STATUS};
use crate::domain::models::sale_record::{CanonicalField, CanonicalSaleRecord};
use crate::domain::models::sale_source::SaleSource;
use thiserror::Error;
use tracing::warn;

/// 字段映射错误
///
/// 只在规范化器内部出现，对外表现为 `fetch_succeeded = false`
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MappingError {
    #[error("unknown source: {0}")]
    UnknownSource(String),

    #[error("value of '{label}' cannot be stored as text")]
    InvalidValue { label: String },
}

type LabelTable = &'static [(CanonicalField, &'static [&'static str])];

const PINKSALE_LABELS: LabelTable = &[
    (CanonicalField::Name, &[labels::NAME]),
    (CanonicalField::Symbol, &["Symbol"]),
    (CanonicalField::TokenAddress, &["Address"]),
    (CanonicalField::TotalSupply, &["Total supply"]),
    (CanonicalField::SoftCap, &["SoftCap"]),
    (CanonicalField::StartTime, &["Start time"]),
    (CanonicalField::EndTime, &["End time"]),
    (CanonicalField::LockupTime, &["Liquidity Lockup Time"]),
    (CanonicalField::CurrentRate, &["Current Rate"]),
    (CanonicalField::AmountRaised, &["Current raised"]),
    (CanonicalField::Chain, &[labels::CHAIN]),
    (CanonicalField::PoolAddress, &["Pool address"]),
];

const DXSALE_LABELS: LabelTable = &[
    (CanonicalField::Name, &[labels::NAME]),
    (CanonicalField::Symbol, &["Symbol"]),
    (CanonicalField::TokenAddress, &["Token address"]),
    (CanonicalField::TotalSupply, &["Total Supply"]),
    (CanonicalField::SoftCap, &["Soft Cap"]),
    (CanonicalField::PoolAddress, &["Presale address"]),
    (CanonicalField::AmountRaised, &["Raised"]),
    (CanonicalField::StartTime, &["Start Time"]),
    (CanonicalField::EndTime, &["End Time"]),
    (CanonicalField::CurrentRate, &["Rate"]),
    (CanonicalField::Chain, &[labels::CHAIN]),
];

const SOLANIUM_LABELS: LabelTable = &[
    (CanonicalField::Name, &[labels::NAME]),
    (CanonicalField::Symbol, &["Symbol"]),
    (CanonicalField::TokenAddress, &["Token Address"]),
    (CanonicalField::TotalSupply, &["Total Supply"]),
    (CanonicalField::SoftCap, &["Soft Cap"]),
    (CanonicalField::StartTime, &["Start Time"]),
    (CanonicalField::EndTime, &["End Time"]),
    (CanonicalField::LockupTime, &["Vesting"]),
    (CanonicalField::CurrentRate, &["Price"]),
    (CanonicalField::AmountRaised, &["Raised"]),
    (CanonicalField::Chain, &[labels::CHAIN]),
];

const SOLANAPAD_LABELS: LabelTable = &[
    (CanonicalField::Name, &[labels::NAME]),
    (CanonicalField::Symbol, &["Symbol"]),
    (CanonicalField::TokenAddress, &["Token Address"]),
    (CanonicalField::TotalSupply, &["Total supply"]),
    (CanonicalField::SoftCap, &["Soft Cap"]),
    (CanonicalField::StartTime, &["Start Time"]),
    (CanonicalField::EndTime, &["End Time"]),
    (CanonicalField::LockupTime, &["Liquidity Lockup Time"]),
    (CanonicalField::CurrentRate, &["Current Rate"]),
    (CanonicalField::AmountRaised, &["Current raised"]),
    (CanonicalField::Chain, &[labels::CHAIN]),
    (CanonicalField::PoolAddress, &["Pool Address"]),
];

const SOCIAL_LABELS: LabelTable = &[
    (CanonicalField::Twitter, &[labels::TWITTER]),
    (CanonicalField::Telegram, &[labels::TELEGRAM]),
    (CanonicalField::Website, &[labels::WEBSITE]),
];

fn label_table(source: SaleSource) -> LabelTable {
    match source {
        SaleSource::PinkSale => PINKSALE_LABELS,
        SaleSource::DxSale => DXSALE_LABELS,
        SaleSource::Solanium => SOLANIUM_LABELS,
        SaleSource::SolanaPad => SOLANAPAD_LABELS,
    }
}

/// 将原始字段集合映射为规范化记录
///
/// 不会失败：映射出错时返回 `fetch_succeeded = false` 且全部为占位值的记录
pub fn adapt(source_name: &str, bag: &RawFieldBag) -> CanonicalSaleRecord {
    match try_adapt(source_name, bag) {
        Ok(record) => record,
        Err(e) => {
            warn!(
                source = source_name,
                url = bag.source_url(),
                error = %e,
                "Failed to map raw fields"
            );
            CanonicalSaleRecord::unavailable(source_name, bag.source_url())
        }
    }
}

/// 映射的可失败版本
pub fn try_adapt(
    source_name: &str,
    bag: &RawFieldBag,
) -> Result<CanonicalSaleRecord, MappingError> {
    let source: SaleSource = source_name
        .parse()
        .map_err(|_| MappingError::UnknownSource(source_name.to_string()))?;

    if let Some((label, _)) = bag.iter().find(|(_, value)| value.contains('\0')) {
        return Err(MappingError::InvalidValue {
            label: label.to_string(),
        });
    }

    let mut record = CanonicalSaleRecord::unavailable(source.as_str(), bag.source_url());
    for (field, candidates) in label_table(source).iter().chain(SOCIAL_LABELS) {
        if let Some(value) = candidates.iter().find_map(|label| bag.get(label)) {
            *record.field_mut(*field) = value.to_string();
        }
    }

    record.is_live = bag
        .get(labels::STATUS)
        .map(|status| status.contains(LIVE_STATUS))
        .unwrap_or(false);
    record.fetch_succeeded = true;

    Ok(record)
}

#[cfg(test)]
#[path = "normalizer_test.rs"]
mod tests;
