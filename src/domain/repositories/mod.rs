// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 仓库接口模块
///
/// 定义预售记录持久化的抽象契约，具体实现由基础设施层提供
/// - 预售记录仓库（sale_record_repository）：去重检查、查询与写入
/// - 存储连接器（store_connector）：每次抓取的连接打开与关闭
pub mod sale_record_repository;
pub mod store_connector;
