// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 页面访问层
///
/// - traits：会话契约、选择器与错误类型
/// - browser_session：基于 chromiumoxide 的实现
/// - dom：基于 scraper 的HTML查询辅助函数
pub mod browser_session;
pub mod dom;
pub mod traits;
