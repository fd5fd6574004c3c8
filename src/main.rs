// Copyright 2025 Kirky.X
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use presale_crawler::config::settings::Settings;
use presale_crawler::engines::browser_session::BrowserSession;
use presale_crawler::extractors::build_extractors;
use presale_crawler::infrastructure::database::connector::SeaOrmConnector;
use presale_crawler::infrastructure::metrics;
use presale_crawler::utils::telemetry;
use presale_crawler::workers::{PassRunner, ScrapeScheduler};
use tracing::{info, warn};

/// 主函数
///
/// 加载配置、初始化日志与指标，然后按周期执行抓取直到收到 Ctrl-C
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Load configuration
    dotenvy::dotenv().ok();
    let settings = Settings::new()?;

    // 2. Initialize logging
    telemetry::init_telemetry(&settings.telemetry);
    info!("Starting presale-crawler...");

    if settings.telemetry.metrics_enabled {
        metrics::init_metrics(&settings.telemetry.metrics_addr);
    }

    // 3. Resolve sources
    let sources = settings.sources.resolve()?;
    info!(?sources, "Sources enabled");
    let extractors = build_extractors(&settings.scraper, &sources);

    // 4. Wire the pipeline
    let connector = SeaOrmConnector::new(settings.database.clone());
    let session = BrowserSession::new(settings.browser.clone(), settings.scraper.settle_delay());
    let runner = PassRunner::new(
        connector,
        Box::new(session),
        extractors,
        settings.scraper.page_load_timeout(),
    );

    // 5. Run until Ctrl-C
    let scheduler = ScrapeScheduler::new(
        runner,
        settings.scheduler.interval(),
        settings.scheduler.run_on_startup,
    );
    let passes = scheduler
        .run_until(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                warn!("Failed to listen for shutdown signal: {}", e);
                std::future::pending::<()>().await;
            }
        })
        .await;

    info!(passes, "presale-crawler stopped");
    Ok(())
}
