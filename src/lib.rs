// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 配置模块
///
/// 处理应用程序的配置设置和环境变量
pub mod config;

/// 领域模块
///
/// 包含核心实体、仓库接口和纯函数服务
pub mod domain;

/// 引擎模块
///
/// 页面访问层：浏览器会话与 DOM 辅助函数
pub mod engines;

/// 提取器模块
///
/// 各预售站点的列表发现与详情提取
pub mod extractors;

/// 基础设施模块
///
/// 提供数据库与指标导出
pub mod infrastructure;

/// 工具模块
///
/// 错误类型与日志初始化
pub mod utils;

/// 工作器模块
///
/// 抓取编排与周期触发
pub mod workers;
