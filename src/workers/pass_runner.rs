// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::sale_source::SaleSource;
use crate::domain::repositories::store_connector::StoreConnector;
use crate::engines::traits::PageSession;
use crate::extractors::SourceExtractor;
use crate::workers::source_job::{JobReport, SourceJob};
use futures::FutureExt;
use std::panic::AssertUnwindSafe;
use std::time::Duration;
use tracing::{error, info, info_span, Instrument};
use uuid::Uuid;

/// 一次完整抓取的统计
#[derive(Debug, Clone)]
pub struct PassReport {
    pub run_id: Uuid,
    pub store_connected: bool,
    pub jobs: Vec<(SaleSource, JobReport)>,
}

impl PassReport {
    /// 本次写入的记录总数
    pub fn persisted(&self) -> usize {
        self.jobs.iter().map(|(_, job)| job.persisted).sum()
    }

    /// 本次失败的链接总数
    pub fn failed(&self) -> usize {
        self.jobs.iter().map(|(_, job)| job.failed).sum()
    }
}

/// 按顺序对所有数据源执行一次抓取
///
/// 整个过程共用一个存储连接和一个页面会话，数据源之间严格串行。
pub struct PassRunner<C: StoreConnector> {
    connector: C,
    session: Box<dyn PageSession>,
    extractors: Vec<Box<dyn SourceExtractor>>,
    page_load_timeout: Duration,
}

impl<C: StoreConnector> PassRunner<C> {
    pub fn new(
        connector: C,
        session: Box<dyn PageSession>,
        extractors: Vec<Box<dyn SourceExtractor>>,
        page_load_timeout: Duration,
    ) -> Self {
        Self {
            connector,
            session,
            extractors,
            page_load_timeout,
        }
    }

    /// 执行一次完整抓取
    pub async fn run_all(&mut self) {
        self.run_pass().await;
    }

    /// 执行一次完整抓取并返回统计
    pub async fn run_pass(&mut self) -> PassReport {
        let run_id = Uuid::new_v4();
        let span = info_span!("scrape_pass", %run_id);

        async move {
            let mut report = PassReport {
                run_id,
                store_connected: false,
                jobs: Vec::with_capacity(self.extractors.len()),
            };

            let store = match self.connector.connect().await {
                Ok(store) => store,
                Err(e) => {
                    error!("Failed to connect to store, skipping pass: {}", e);
                    return report;
                }
            };
            report.store_connected = true;
            info!(sources = self.extractors.len(), "Scrape pass started");

            for extractor in &self.extractors {
                let source = extractor.source();
                let job = SourceJob::new(&**extractor, &store, self.page_load_timeout);
                let result = AssertUnwindSafe(job.run(self.session.as_mut()))
                    .catch_unwind()
                    .await;

                match result {
                    Ok(job_report) => report.jobs.push((source, job_report)),
                    Err(_) => {
                        error!(source = %source, "Source job panicked");
                        if self.session.is_active() {
                            self.session.close_session().await;
                        }
                        report.jobs.push((
                            source,
                            JobReport {
                                aborted: true,
                                ..JobReport::default()
                            },
                        ));
                    }
                }
            }

            self.connector.close(store).await;
            info!(
                persisted = report.persisted(),
                failed = report.failed(),
                "Scrape pass finished"
            );
            report
        }
        .instrument(span)
        .await
    }
}
