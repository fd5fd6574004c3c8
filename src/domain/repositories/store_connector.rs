// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::repositories::sale_record_repository::SaleRecordRepository;
use crate::utils::errors::RepositoryError;
use async_trait::async_trait;

/// 存储连接器
///
/// 每次抓取打开一次存储，结束时无论成功与否都关闭
#[async_trait]
pub trait StoreConnector: Send + Sync {
    type Store: SaleRecordRepository;

    /// 打开存储连接
    async fn connect(&self) -> Result<Self::Store, RepositoryError>;

    /// 关闭存储连接
    async fn close(&self, store: Self::Store);
}
