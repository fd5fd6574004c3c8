// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域服务模块
///
/// 均为纯函数，不访问页面或存储
pub mod chain_resolver;
pub mod normalizer;
pub mod social_links;
