// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// 预售数据源
///
/// 每个变体对应一个发射台站点，拥有自己的选择器表和字段标签表
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SaleSource {
    /// PinkSale 发射台
    PinkSale,
    /// DxSale 发射台
    DxSale,
    /// Solanium 发射台
    Solanium,
    /// SolanaPad 发射台
    SolanaPad,
}

impl SaleSource {
    /// 默认执行顺序
    pub const RUN_ORDER: [SaleSource; 4] = [
        SaleSource::DxSale,
        SaleSource::Solanium,
        SaleSource::SolanaPad,
        SaleSource::PinkSale,
    ];

    /// 稳定的小写名称，用于配置、日志标签与存储
    pub fn as_str(&self) -> &'static str {
        match self {
            SaleSource::PinkSale => "pinksale",
            SaleSource::DxSale => "dxsale",
            SaleSource::Solanium => "solanium",
            SaleSource::SolanaPad => "solanapad",
        }
    }
}

impl fmt::Display for SaleSource {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SaleSource {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pinksale" => Ok(SaleSource::PinkSale),
            "dxsale" => Ok(SaleSource::DxSale),
            "solanium" => Ok(SaleSource::Solanium),
            "solanapad" => Ok(SaleSource::SolanaPad),
            other => Err(format!("unknown sale source: {}", other)),
        }
    }
}
