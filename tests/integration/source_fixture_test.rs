// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::helpers::{InMemoryConnector, SnapshotSession};
use presale_crawler::config::settings::ScraperSettings;
use presale_crawler::domain::models::sale_source::SaleSource;
use presale_crawler::extractors::{build_extractors, profile_for};
use presale_crawler::workers::PassRunner;
use std::time::Duration;

const DETAIL: &str = "https://www.solanium.io/project/moonshot";

fn fast_settings() -> ScraperSettings {
    ScraperSettings {
        settle_delay_secs: 0,
        page_load_timeout_secs: 1,
        scroll_downs: 2,
        scroll_pause_secs: 0,
        filter_settle_secs: 0,
    }
}

const INDEX_HTML: &str = r#"
<html><body>
  <div class="rounded-solaniumDefault bg-white">
    <div class="content"><span>Moonshot</span></div>
    <a href="/project/moonshot">View</a>
  </div>
  <div class="rounded-solaniumDefault bg-white">
    <div class="content"><span>Elsewhere</span></div>
    <a href="https://evil.test/project/elsewhere">View</a>
  </div>
</body></html>
"#;

const DETAIL_HTML: &str = r#"
<html><body>
  <div class="flex flex-col justify-center mb-10">
    <a href="https://twitter.com/moonshot">Twitter</a>
    <a href="https://t.me/moonshot">Telegram</a>
    <a href="https://moonshot.io">Website</a>
  </div>
  <div class="flex flex-col">
    <div class="flex justify-between w-full"><span>Start Time</span><span>2025-03-01 12:00</span></div>
    <div class="flex justify-between w-full"><span>End Time</span><span>2025-03-08 12:00</span></div>
    <div class="flex justify-between w-full"><span>Price</span><span>1 SOL = 5000 MOON</span></div>
    <div class="flex justify-between w-full"><span>Raised</span><span>120 SOL</span></div>
    <div class="flex justify-between w-full"><span>Chain</span><span>Solana</span></div>
  </div>
</body></html>
"#;

/// 从列表页到数据库记录的完整流程
#[tokio::test]
async fn test_solanium_listing_to_stored_record() {
    let index_url = profile_for(SaleSource::Solanium).index_url;
    let session = SnapshotSession::new()
        .with_page(index_url, INDEX_HTML)
        .with_page(DETAIL, DETAIL_HTML);
    let connector = InMemoryConnector::default();
    let settings = fast_settings();

    let mut runner = PassRunner::new(
        connector.clone(),
        Box::new(session),
        build_extractors(&settings, &[SaleSource::Solanium]),
        Duration::from_secs(1),
    );
    let report = runner.run_pass().await;

    let (_, job) = &report.jobs[0];
    assert_eq!(job.discovered, 1);
    assert_eq!(job.persisted, 1);

    let records = connector.store.records();
    assert_eq!(records.len(), 1);
    let record = &records[0];
    assert_eq!(record.source_url, DETAIL);
    assert_eq!(record.source, "solanium");
    assert_eq!(record.name, "Moonshot");
    assert_eq!(record.current_rate, "1 SOL = 5000 MOON");
    assert_eq!(record.amount_raised, "120 SOL");
    assert_eq!(record.chain, "SOL");
    assert_eq!(record.twitter, "https://twitter.com/moonshot");
    assert_eq!(record.telegram, "https://t.me/moonshot");
    assert_eq!(record.website, "https://moonshot.io");
    assert_eq!(record.symbol, "Not Available");
}
