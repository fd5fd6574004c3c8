// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Every sale attribute is text and sentinel-filled, never null
        let text_columns = [
            Projects::Source,
            Projects::Name,
            Projects::Symbol,
            Projects::Website,
            Projects::Twitter,
            Projects::Telegram,
            Projects::TokenAddress,
            Projects::TotalSupply,
            Projects::PoolAddress,
            Projects::SoftCap,
            Projects::StartTime,
            Projects::EndTime,
            Projects::LockupTime,
            Projects::CurrentRate,
            Projects::AmountRaised,
            Projects::Chain,
        ];

        let mut table = Table::create();
        table
            .table(Projects::Table)
            .if_not_exists()
            .col(
                ColumnDef::new(Projects::Id)
                    .integer()
                    .not_null()
                    .auto_increment()
                    .primary_key(),
            )
            .col(ColumnDef::new(Projects::Url).text().not_null().unique_key());
        for column in text_columns {
            table.col(ColumnDef::new(column).text().not_null());
        }
        table.col(
            ColumnDef::new(Projects::RecordedAt)
                .timestamp_with_time_zone()
                .not_null()
                .default(Expr::current_timestamp()),
        );

        manager.create_table(table.to_owned()).await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Projects::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Projects {
    Table,
    Id,
    Url,
    Source,
    Name,
    Symbol,
    Website,
    Twitter,
    Telegram,
    TokenAddress,
    TotalSupply,
    PoolAddress,
    SoftCap,
    StartTime,
    EndTime,
    LockupTime,
    CurrentRate,
    AmountRaised,
    Chain,
    RecordedAt,
}
