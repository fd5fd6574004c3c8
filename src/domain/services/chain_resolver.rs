// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::fmt;
use tracing::{debug, warn};

/// 已知的规范链名
pub const KNOWN_CHAINS: [&str; 15] = [
    "BNB", "ETH", "SOL", "MATIC", "AVAX", "ARB", "BASE", "FTM", "CRO", "CORE", "DOGE", "TRX",
    "TON", "SUI", "BLAST",
];

/// 别名表，比较时忽略大小写
const CHAIN_ALIASES: [(&str, &str); 13] = [
    ("BSC", "BNB"),
    ("Binance Smart Chain", "BNB"),
    ("BNB Chain", "BNB"),
    ("Ethereum", "ETH"),
    ("Solana", "SOL"),
    ("Polygon", "MATIC"),
    ("Avalanche", "AVAX"),
    ("Arbitrum", "ARB"),
    ("Fantom", "FTM"),
    ("Cronos", "CRO"),
    ("Core DAO", "CORE"),
    ("Dogechain", "DOGE"),
    ("Tron", "TRX"),
];

/// 链名
///
/// 已知链名使用规范拼写；无法识别的名称原样保留
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChainName {
    Known(&'static str),
    Unrecognised(String),
}

impl ChainName {
    pub fn as_str(&self) -> &str {
        match self {
            ChainName::Known(name) => name,
            ChainName::Unrecognised(name) => name,
        }
    }

    pub fn is_known(&self) -> bool {
        matches!(self, ChainName::Known(_))
    }
}

impl fmt::Display for ChainName {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn canonical(token: &str) -> Option<&'static str> {
    KNOWN_CHAINS
        .iter()
        .copied()
        .find(|chain| chain.eq_ignore_ascii_case(token))
}

/// 从汇率类字段推断链名
///
/// 仅处理标签中包含 "rate" 的字段（忽略大小写）。值按空白切分，
/// 与已知链名完全一致的片段视为候选；恰好一个候选时返回该链，
/// 没有候选或出现多个不同候选时返回 `None`。
///
/// ```
/// use presale_crawler::domain::services::chain_resolver::resolve_chain;
///
/// assert_eq!(resolve_chain("Current Rate", "1 BNB = 1000 TOKEN").unwrap().as_str(), "BNB");
/// assert!(resolve_chain("Current Rate", "BNB ETH mix").is_none());
/// assert!(resolve_chain("Other Label", "BNB").is_none());
/// ```
pub fn resolve_chain(label: &str, value: &str) -> Option<ChainName> {
    if !label.to_ascii_lowercase().contains("rate") {
        return None;
    }

    let mut found: Vec<&'static str> = Vec::new();
    for token in value.split_whitespace() {
        let token = token.trim_matches(|c: char| !c.is_ascii_alphanumeric());
        if let Some(chain) = KNOWN_CHAINS.iter().copied().find(|chain| *chain == token) {
            if !found.contains(&chain) {
                found.push(chain);
            }
        }
    }

    match found.as_slice() {
        [chain] => {
            debug!(label, value, chain, "Resolved chain from rate");
            Some(ChainName::Known(chain))
        }
        [] => None,
        many => {
            debug!(label, value, candidates = ?many, "Ambiguous chain in rate, leaving unset");
            None
        }
    }
}

/// 将链名的不同写法归一为规范名称
///
/// 先在规范链名中忽略大小写查找，再查别名表；都未命中时原样返回
pub fn normalize_alias(name: &str) -> ChainName {
    let trimmed = name.trim();
    if let Some(chain) = canonical(trimmed) {
        return ChainName::Known(chain);
    }

    if let Some((_, chain)) = CHAIN_ALIASES
        .iter()
        .find(|(alias, _)| alias.eq_ignore_ascii_case(trimmed))
    {
        return ChainName::Known(chain);
    }

    warn!(chain = trimmed, "Unrecognised chain name, keeping as is");
    ChainName::Unrecognised(trimmed.to_string())
}
