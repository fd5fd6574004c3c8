// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::config::settings::DatabaseSettings;
use crate::domain::repositories::store_connector::StoreConnector;
use crate::infrastructure::database::connection::create_pool;
use crate::infrastructure::repositories::sale_record_repo_impl::SaleRecordRepositoryImpl;
use crate::utils::errors::RepositoryError;
use async_trait::async_trait;
use tracing::{debug, warn};

/// 基于 SeaORM 连接池的存储连接器
pub struct SeaOrmConnector {
    settings: DatabaseSettings,
}

impl SeaOrmConnector {
    pub fn new(settings: DatabaseSettings) -> Self {
        Self { settings }
    }
}

#[async_trait]
impl StoreConnector for SeaOrmConnector {
    type Store = SaleRecordRepositoryImpl;

    async fn connect(&self) -> Result<Self::Store, RepositoryError> {
        let db = create_pool(&self.settings)
            .await
            .map_err(|e| RepositoryError::ConnectionError(e.to_string()))?;
        debug!("Database connection opened");
        Ok(SaleRecordRepositoryImpl::new(db))
    }

    async fn close(&self, store: Self::Store) {
        match store.into_inner().close().await {
            Ok(()) => debug!("Database connection closed"),
            Err(e) => warn!("Failed to close database connection: {}", e),
        }
    }
}
