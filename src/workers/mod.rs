// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 工作器模块
///
/// 单数据源任务、整轮抓取编排与周期触发
pub mod pass_runner;
pub mod scheduler;
pub mod source_job;

pub use pass_runner::PassRunner;
pub use scheduler::ScrapeScheduler;
