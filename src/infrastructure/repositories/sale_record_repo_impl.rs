// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::sale_record::CanonicalSaleRecord;
use crate::domain::repositories::sale_record_repository::SaleRecordRepository;
use crate::infrastructure::database::entities::project;
use crate::utils::errors::RepositoryError;
use async_trait::async_trait;
use sea_orm::*;
use tracing::warn;

/// 查询时读取的列，不包含由数据库填写的 `recorded_at`
#[derive(Debug, FromQueryResult)]
struct ProjectRow {
    url: String,
    source: String,
    name: String,
    symbol: String,
    website: String,
    twitter: String,
    telegram: String,
    token_address: String,
    total_supply: String,
    pool_address: String,
    soft_cap: String,
    start_time: String,
    end_time: String,
    lockup_time: String,
    current_rate: String,
    amount_raised: String,
    chain: String,
}

impl From<ProjectRow> for CanonicalSaleRecord {
    fn from(row: ProjectRow) -> Self {
        Self {
            source_url: row.url,
            source: row.source,
            name: row.name,
            symbol: row.symbol,
            website: row.website,
            twitter: row.twitter,
            telegram: row.telegram,
            token_address: row.token_address,
            total_supply: row.total_supply,
            pool_address: row.pool_address,
            soft_cap: row.soft_cap,
            start_time: row.start_time,
            end_time: row.end_time,
            lockup_time: row.lockup_time,
            current_rate: row.current_rate,
            amount_raised: row.amount_raised,
            chain: row.chain,
            // only live, fully mapped records are ever stored
            is_live: true,
            fetch_succeeded: true,
        }
    }
}

/// 预售记录仓库实现
pub struct SaleRecordRepositoryImpl {
    /// 数据库连接
    db: DatabaseConnection,
}

impl SaleRecordRepositoryImpl {
    /// 创建新的预售记录仓库实例
    ///
    /// # 参数
    ///
    /// * `db` - 数据库连接
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// 取回底层连接，用于关闭连接池
    pub fn into_inner(self) -> DatabaseConnection {
        self.db
    }

    fn to_active_model(record: &CanonicalSaleRecord) -> project::ActiveModel {
        project::ActiveModel {
            url: Set(record.source_url.clone()),
            source: Set(record.source.clone()),
            name: Set(record.name.clone()),
            symbol: Set(record.symbol.clone()),
            website: Set(record.website.clone()),
            twitter: Set(record.twitter.clone()),
            telegram: Set(record.telegram.clone()),
            token_address: Set(record.token_address.clone()),
            total_supply: Set(record.total_supply.clone()),
            pool_address: Set(record.pool_address.clone()),
            soft_cap: Set(record.soft_cap.clone()),
            start_time: Set(record.start_time.clone()),
            end_time: Set(record.end_time.clone()),
            lockup_time: Set(record.lockup_time.clone()),
            current_rate: Set(record.current_rate.clone()),
            amount_raised: Set(record.amount_raised.clone()),
            chain: Set(record.chain.clone()),
            ..Default::default()
        }
    }
}

#[async_trait]
impl SaleRecordRepository for SaleRecordRepositoryImpl {
    async fn exists(&self, url: &str) -> Result<bool, RepositoryError> {
        let count = project::Entity::find()
            .filter(project::Column::Url.eq(url))
            .count(&self.db)
            .await?;
        Ok(count > 0)
    }

    async fn find_by_url(&self, url: &str) -> Result<Option<CanonicalSaleRecord>, RepositoryError> {
        let row = project::Entity::find()
            .select_only()
            .columns([
                project::Column::Url,
                project::Column::Source,
                project::Column::Name,
                project::Column::Symbol,
                project::Column::Website,
                project::Column::Twitter,
                project::Column::Telegram,
                project::Column::TokenAddress,
                project::Column::TotalSupply,
                project::Column::PoolAddress,
                project::Column::SoftCap,
                project::Column::StartTime,
                project::Column::EndTime,
                project::Column::LockupTime,
                project::Column::CurrentRate,
                project::Column::AmountRaised,
                project::Column::Chain,
            ])
            .filter(project::Column::Url.eq(url))
            .into_model::<ProjectRow>()
            .one(&self.db)
            .await?;

        Ok(row.map(CanonicalSaleRecord::from))
    }

    async fn insert(&self, record: &CanonicalSaleRecord) -> Result<(), RepositoryError> {
        if !record.is_persistable() {
            return Err(RepositoryError::InvalidParameter(format!(
                "记录不是进行中的有效预售: {}",
                record.source_url
            )));
        }

        let txn = self.db.begin().await?;
        match project::Entity::insert(Self::to_active_model(record))
            .exec(&txn)
            .await
        {
            Ok(_) => {
                txn.commit().await?;
                Ok(())
            }
            Err(e) => {
                if let Err(rollback) = txn.rollback().await {
                    warn!(url = %record.source_url, "Rollback failed: {}", rollback);
                }
                Err(e.into())
            }
        }
    }
}
