// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域层模块
///
/// 该模块包含系统的核心业务逻辑，包括：
/// - 领域模型（models）：规范化的预售记录、原始字段集合与数据源
/// - 仓库接口（repositories）：预售记录持久化的抽象接口
/// - 服务（services）：链名解析、社交链接分类与字段规范化
///
/// 领域层不依赖浏览器或数据库实现。
pub mod models;
pub mod repositories;
pub mod services;
