// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "projects")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique, column_type = "Text")]
    pub url: String,
    #[sea_orm(column_type = "Text")]
    pub source: String,
    #[sea_orm(column_type = "Text")]
    pub name: String,
    #[sea_orm(column_type = "Text")]
    pub symbol: String,
    #[sea_orm(column_type = "Text")]
    pub website: String,
    #[sea_orm(column_type = "Text")]
    pub twitter: String,
    #[sea_orm(column_type = "Text")]
    pub telegram: String,
    #[sea_orm(column_type = "Text")]
    pub token_address: String,
    #[sea_orm(column_type = "Text")]
    pub total_supply: String,
    #[sea_orm(column_type = "Text")]
    pub pool_address: String,
    #[sea_orm(column_type = "Text")]
    pub soft_cap: String,
    #[sea_orm(column_type = "Text")]
    pub start_time: String,
    #[sea_orm(column_type = "Text")]
    pub end_time: String,
    #[sea_orm(column_type = "Text")]
    pub lockup_time: String,
    #[sea_orm(column_type = "Text")]
    pub current_rate: String,
    #[sea_orm(column_type = "Text")]
    pub amount_raised: String,
    #[sea_orm(column_type = "Text")]
    pub chain: String,
    pub recorded_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
