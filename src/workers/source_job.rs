// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::discovered_link::DiscoveredLink;
use crate::domain::repositories::sale_record_repository::SaleRecordRepository;
use crate::domain::services::normalizer::adapt;
use crate::engines::traits::PageSession;
use crate::extractors::SourceExtractor;
use crate::infrastructure::metrics::{
    LINKS_DISCOVERED, LINKS_FAILED, LINKS_SKIPPED, RECORDS_PERSISTED, SOURCE_PASS_SECONDS,
};
use crate::utils::errors::{JobError, RepositoryError};
use futures::FutureExt;
use std::fmt;
use std::panic::AssertUnwindSafe;
use std::time::{Duration, Instant};
use tracing::{debug, error, info, info_span, Instrument};

/// 单个数据源任务的阶段
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JobPhase {
    SessionStarting,
    Discovering,
    Dedup,
    Fetching,
    Normalizing,
    Persisting,
    SessionClosing,
}

impl fmt::Display for JobPhase {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            JobPhase::SessionStarting => write!(f, "session_starting"),
            JobPhase::Discovering => write!(f, "discovering"),
            JobPhase::Dedup => write!(f, "dedup"),
            JobPhase::Fetching => write!(f, "fetching"),
            JobPhase::Normalizing => write!(f, "normalizing"),
            JobPhase::Persisting => write!(f, "persisting"),
            JobPhase::SessionClosing => write!(f, "session_closing"),
        }
    }
}

/// 单个链接的处理结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkOutcome {
    /// 已存储，跳过
    AlreadyStored,
    /// 预售不在进行中
    NotLive,
    /// 字段映射失败
    Unmapped,
    /// 已写入
    Persisted,
}

impl LinkOutcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            LinkOutcome::AlreadyStored => "already stored",
            LinkOutcome::NotLive => "not live",
            LinkOutcome::Unmapped => "unmapped",
            LinkOutcome::Persisted => "persisted",
        }
    }
}

impl fmt::Display for LinkOutcome {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 单个数据源任务的统计
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JobReport {
    pub session_started: bool,
    /// 任务内部发生了 panic，剩余链接未处理
    pub aborted: bool,
    pub discovered: usize,
    pub already_stored: usize,
    pub not_live: usize,
    pub unmapped: usize,
    pub persisted: usize,
    pub failed: usize,
}

impl JobReport {
    fn record(&mut self, outcome: LinkOutcome) {
        match outcome {
            LinkOutcome::AlreadyStored => self.already_stored += 1,
            LinkOutcome::NotLive => self.not_live += 1,
            LinkOutcome::Unmapped => self.unmapped += 1,
            LinkOutcome::Persisted => self.persisted += 1,
        }
    }
}

/// 单个数据源的抓取任务
///
/// 启动会话 → 发现链接 → 逐个链接（去重 → 抓取 → 规范化 → 写入）→ 关闭会话。
/// 单个链接的错误只影响该链接；会话一旦启动，结束时一定会关闭。
pub struct SourceJob<'a> {
    extractor: &'a dyn SourceExtractor,
    store: &'a dyn SaleRecordRepository,
    page_load_timeout: Duration,
}

impl<'a> SourceJob<'a> {
    pub fn new(
        extractor: &'a dyn SourceExtractor,
        store: &'a dyn SaleRecordRepository,
        page_load_timeout: Duration,
    ) -> Self {
        Self {
            extractor,
            store,
            page_load_timeout,
        }
    }

    fn enter(&self, phase: JobPhase) {
        debug!(%phase, "Entering phase");
    }

    /// 执行任务
    pub async fn run(&self, session: &mut dyn PageSession) -> JobReport {
        let source = self.extractor.source();
        let span = info_span!("source_job", source = %source);

        async move {
            let started = Instant::now();
            let mut report = JobReport::default();

            self.enter(JobPhase::SessionStarting);
            if let Err(e) = session.start_session().await {
                error!("Failed to start page session: {}", e);
                return report;
            }
            report.session_started = true;

            let result = AssertUnwindSafe(self.discover_and_process(session, &mut report))
                .catch_unwind()
                .await;
            if result.is_err() {
                error!("Source job panicked, remaining links skipped");
                report.aborted = true;
            }

            self.enter(JobPhase::SessionClosing);
            session.close_session().await;

            metrics::histogram!(SOURCE_PASS_SECONDS, "source" => source.as_str())
                .record(started.elapsed().as_secs_f64());
            info!(
                discovered = report.discovered,
                persisted = report.persisted,
                already_stored = report.already_stored,
                not_live = report.not_live,
                failed = report.failed,
                "Source job finished"
            );
            report
        }
        .instrument(span)
        .await
    }

    async fn discover_and_process(&self, session: &mut dyn PageSession, report: &mut JobReport) {
        let source = self.extractor.source().as_str();

        self.enter(JobPhase::Discovering);
        let links = self.extractor.discover_live_links(session).await;
        report.discovered = links.len();
        metrics::counter!(LINKS_DISCOVERED, "source" => source).increment(links.len() as u64);

        for link in &links {
            let result = AssertUnwindSafe(self.process_link(session, link))
                .catch_unwind()
                .await;
            match result {
                Ok(Ok(outcome)) => {
                    info!(url = %link.url, outcome = %outcome, "Link processed");
                    if outcome != LinkOutcome::Persisted {
                        metrics::counter!(LINKS_SKIPPED, "source" => source, "reason" => outcome.as_str())
                            .increment(1);
                    } else {
                        metrics::counter!(RECORDS_PERSISTED, "source" => source).increment(1);
                    }
                    report.record(outcome);
                }
                Ok(Err(e)) => {
                    error!(url = %link.url, outcome = "failed", "Link failed: {}", e);
                    metrics::counter!(LINKS_FAILED, "source" => source).increment(1);
                    report.failed += 1;
                }
                Err(_) => {
                    error!(url = %link.url, outcome = "failed", "Link processing panicked");
                    metrics::counter!(LINKS_FAILED, "source" => source).increment(1);
                    report.failed += 1;
                }
            }
        }
    }

    /// 处理单个链接
    async fn process_link(
        &self,
        session: &mut dyn PageSession,
        link: &DiscoveredLink,
    ) -> Result<LinkOutcome, JobError> {
        self.enter(JobPhase::Dedup);
        if self.store.exists(&link.url).await? {
            return Ok(LinkOutcome::AlreadyStored);
        }

        self.enter(JobPhase::Fetching);
        session.open_url(&link.url, self.page_load_timeout).await?;
        let bag = self.extractor.extract_detail(&*session, link).await?;

        self.enter(JobPhase::Normalizing);
        let record = adapt(self.extractor.source().as_str(), &bag);
        if !record.fetch_succeeded {
            return Ok(LinkOutcome::Unmapped);
        }
        if !record.is_live {
            return Ok(LinkOutcome::NotLive);
        }

        self.enter(JobPhase::Persisting);
        match self.store.insert(&record).await {
            Ok(()) => Ok(LinkOutcome::Persisted),
            // stored by a concurrent run between dedup and insert
            Err(RepositoryError::AlreadyExists(_)) => Ok(LinkOutcome::AlreadyStored),
            Err(e) => Err(e.into()),
        }
    }
}
