// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::sale_record::CanonicalSaleRecord;
use crate::utils::errors::RepositoryError;
use async_trait::async_trait;

/// 预售记录仓库特质
///
/// 以 `source_url` 为唯一键
#[async_trait]
pub trait SaleRecordRepository: Send + Sync {
    /// 检查URL是否已存储
    async fn exists(&self, url: &str) -> Result<bool, RepositoryError>;
    /// 根据URL查找记录
    async fn find_by_url(&self, url: &str) -> Result<Option<CanonicalSaleRecord>, RepositoryError>;
    /// 写入一条可持久化的记录，失败时整体回滚
    async fn insert(&self, record: &CanonicalSaleRecord) -> Result<(), RepositoryError>;
}
