// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::engines::traits::NavigationError;
use crate::extractors::ExtractError;
use thiserror::Error;

/// 仓库层错误类型
#[derive(Error, Debug)]
pub enum RepositoryError {
    #[error("数据库错误: {0}")]
    DatabaseError(String),

    #[error("数据已存在: {0}")]
    AlreadyExists(String),

    #[error("无效参数: {0}")]
    InvalidParameter(String),

    #[error("连接错误: {0}")]
    ConnectionError(String),
}

impl From<sea_orm::DbErr> for RepositoryError {
    fn from(err: sea_orm::DbErr) -> Self {
        match err.sql_err() {
            Some(sea_orm::SqlErr::UniqueConstraintViolation(detail)) => {
                RepositoryError::AlreadyExists(detail)
            }
            _ => RepositoryError::DatabaseError(err.to_string()),
        }
    }
}

/// 单个链接处理错误
///
/// 永远不会越过单个链接的处理边界，由编排器记录后跳过该链接
#[derive(Error, Debug)]
pub enum JobError {
    #[error("导航错误: {0}")]
    Navigation(#[from] NavigationError),

    #[error("提取错误: {0}")]
    Extract(#[from] ExtractError),

    #[error("仓库错误: {0}")]
    Repository(#[from] RepositoryError),
}
