// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::repositories::store_connector::StoreConnector;
use crate::workers::pass_runner::PassRunner;
use std::future::Future;
use std::time::Duration;
use tokio::time::{interval, MissedTickBehavior};
use tracing::info;

/// 周期触发器
///
/// 按固定间隔执行抓取，上一次未结束时不会开始下一次
pub struct ScrapeScheduler<C: StoreConnector> {
    runner: PassRunner<C>,
    interval: Duration,
    run_on_startup: bool,
}

impl<C: StoreConnector> ScrapeScheduler<C> {
    pub fn new(runner: PassRunner<C>, interval: Duration, run_on_startup: bool) -> Self {
        Self {
            runner,
            interval,
            run_on_startup,
        }
    }

    /// 运行直到 `shutdown` 完成，返回执行的抓取次数
    ///
    /// 正在进行的抓取不会被打断，关闭信号在其结束后生效
    pub async fn run_until<F>(mut self, shutdown: F) -> usize
    where
        F: Future<Output = ()>,
    {
        tokio::pin!(shutdown);

        let mut ticker = interval(self.interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        if !self.run_on_startup {
            // first tick completes immediately
            ticker.tick().await;
        }

        info!(interval_secs = self.interval.as_secs(), "Scheduler started");
        let mut passes = 0;
        loop {
            tokio::select! {
                biased;
                _ = &mut shutdown => {
                    info!(passes, "Shutdown requested, scheduler stopping");
                    break;
                }
                _ = ticker.tick() => {
                    self.runner.run_all().await;
                    passes += 1;
                }
            }
        }
        passes
    }
}

