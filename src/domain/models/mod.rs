// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域模型模块
///
/// - 数据源（sale_source）：四个发射台站点
/// - 原始字段集合（raw_field_bag）：单个详情页提取出的标签与值
/// - 预售记录（sale_record）：唯一会被持久化的规范化实体
/// - 发现的链接（discovered_link）：列表页上找到的详情页链接
pub mod discovered_link;
pub mod raw_field_bag;
pub mod sale_record;
pub mod sale_source;
