// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::helpers::{PageBuilder, SnapshotSession};
use presale_crawler::domain::models::discovered_link::DiscoveredLink;
use presale_crawler::domain::models::raw_field_bag::{labels, LIVE_STATUS};
use presale_crawler::domain::models::sale_record::NOT_AVAILABLE;
use presale_crawler::domain::models::sale_source::SaleSource;
use presale_crawler::domain::services::normalizer::adapt;
use presale_crawler::engines::traits::{FieldSelector, PageSession};
use presale_crawler::extractors::profile::{
    DetailLayout, DiscoveryTuning, FieldRule, IndexPreparation, ListingRule, PairRule,
    ProfiledExtractor, SourceProfile, StatusPolicy,
};
use presale_crawler::extractors::{dxsale, pinksale, solanapad, ExtractError, SourceExtractor};
use std::time::Duration;

const INDEX: &str = "https://launchpad.test/list";
const DETAIL: &str = "https://launchpad.test/project/moon";

static PRIMARY_FIELDS: [FieldRule; 1] = [FieldRule {
    label: labels::NAME,
    selector: FieldSelector::text("name", "h1.desktop"),
}];

static FALLBACK_ROWS: [PairRule; 1] = [PairRule::Rows {
    row: "div.row",
    cell: "span",
}];

static LAYOUTS: [DetailLayout; 2] = [
    DetailLayout {
        name: "primary",
        fields: &PRIMARY_FIELDS,
        pairs: &[],
    },
    DetailLayout {
        name: "fallback",
        fields: &[],
        pairs: &FALLBACK_ROWS,
    },
];

static TEST_PROFILE: SourceProfile = SourceProfile {
    source: SaleSource::Solanium,
    index_url: INDEX,
    base_url: "https://launchpad.test",
    preparation: IndexPreparation::ClickTab {
        css: "button.live",
    },
    scrolls: true,
    listing: ListingRule {
        card: "div.card",
        link: None,
        live_badge: None,
        name: Some("h2"),
        link_prefix: Some("/project/"),
    },
    social_containers: &["div.socials"],
    layouts: &LAYOUTS,
    status: StatusPolicy::Badge,
};

fn tuning() -> DiscoveryTuning {
    DiscoveryTuning {
        page_load_timeout: Duration::from_secs(1),
        scroll_downs: 3,
        scroll_pause: Duration::ZERO,
        filter_settle: Duration::ZERO,
    }
}

async fn opened_at(url: &str, html: &str) -> SnapshotSession {
    let mut session = SnapshotSession::new().with_page(url, html);
    session.start_session().await.unwrap();
    session.open_url(url, Duration::from_secs(1)).await.unwrap();
    session
}

async fn opened(html: &str) -> SnapshotSession {
    opened_at(DETAIL, html).await
}

#[tokio::test]
async fn test_primary_layout_wins_when_populated() {
    let session = opened(
        r#"<h1 class="desktop">Moon</h1>
           <div class="row"><span>Soft Cap</span><span>50 SOL</span></div>"#,
    )
    .await;
    let extractor = ProfiledExtractor::new(&TEST_PROFILE, tuning());
    let bag = extractor
        .extract_detail(&session, &DiscoveredLink::new(DETAIL))
        .await
        .unwrap();
    assert_eq!(bag.get(labels::NAME), Some("Moon"));
    assert!(!bag.contains("Soft Cap"));
    assert_eq!(bag.source_url(), DETAIL);
}

#[tokio::test]
async fn test_fallback_layout_used_when_primary_empty() {
    let session = opened(
        r#"<h1 class="mobile">Moon</h1>
           <div class="row"><span>Soft Cap</span><span>50 SOL</span></div>
           <div class="row"><span>Current Rate</span><span>1 SOL = 100 MOON</span></div>
           <div class="socials"><a href="https://x.com/moon">x</a><a href="/faq">faq</a></div>"#,
    )
    .await;
    let extractor = ProfiledExtractor::new(&TEST_PROFILE, tuning());
    let link = DiscoveredLink::new(DETAIL).with_name("Moon From Card");
    let bag = extractor.extract_detail(&session, &link).await.unwrap();

    assert_eq!(bag.get("Soft Cap"), Some("50 SOL"));
    assert_eq!(bag.get(labels::NAME), Some("Moon From Card"));
    assert_eq!(bag.get(labels::CHAIN), Some("SOL"));
    assert_eq!(bag.get(labels::TWITTER), Some("https://x.com/moon"));
    assert!(!bag.contains(labels::WEBSITE));
    assert!(!bag.contains(labels::STATUS));
}

#[tokio::test]
async fn test_no_layout_matched() {
    let session = opened("<p>maintenance</p>").await;
    let extractor = ProfiledExtractor::new(&TEST_PROFILE, tuning());
    let result = extractor
        .extract_detail(&session, &DiscoveredLink::new(DETAIL))
        .await;
    assert!(matches!(result, Err(ExtractError::NoLayoutMatched { .. })));
}

#[tokio::test]
async fn test_chain_label_is_normalised() {
    let session = opened(
        r#"<div class="row"><span>Chain</span><span>Solana</span></div>
           <div class="row"><span>Rate</span><span>1 BNB = 5 X</span></div>"#,
    )
    .await;
    let extractor = ProfiledExtractor::new(&TEST_PROFILE, tuning());
    let bag = extractor
        .extract_detail(&session, &DiscoveredLink::new(DETAIL))
        .await
        .unwrap();
    assert_eq!(bag.get(labels::CHAIN), Some("SOL"));
}

#[tokio::test]
async fn test_discovery_prepares_scrolls_and_collects() {
    let mut session = SnapshotSession::new().with_page(
        INDEX,
        r#"<button class="live">Live</button>
           <div class="card"><h2>Moon</h2><a href="/project/moon">open</a></div>
           <div class="card"><h2>Star</h2><a href="/project/star">open</a></div>"#,
    );
    session.start_session().await.unwrap();
    let extractor = ProfiledExtractor::new(&TEST_PROFILE, tuning());

    let links = extractor.discover_live_links(&mut session).await;
    assert_eq!(
        links,
        vec![
            DiscoveredLink::new(DETAIL).with_name("Moon"),
            DiscoveredLink::new("https://launchpad.test/project/star").with_name("Star"),
        ]
    );
    let log = session.log();
    assert_eq!(log.clicks, vec!["button.live".to_string()]);
    assert_eq!(log.scrolls, 3);
}

#[tokio::test]
async fn test_discovery_failure_is_empty() {
    let mut session = SnapshotSession::new();
    session.start_session().await.unwrap();
    let extractor = ProfiledExtractor::new(&TEST_PROFILE, tuning());
    assert!(extractor.discover_live_links(&mut session).await.is_empty());
}

fn dxsale_index(options: &[&str]) -> String {
    let options: String = options
        .iter()
        .map(|option| format!(r#"<li role="option">{}</li>"#, option))
        .collect();
    format!(
        r#"<html><body>
             <label>Search</label><div class="search"><input type="text"></div>
             <label>Filter by</label><div class="MuiSelect-select">All</div>
             <ul role="listbox">{}</ul>
             <div class="MuiCard-root"><a href="/dxsale/moon">Moon</a></div>
             <div class="MuiCard-root"><a href="/dxsale/star">Star</a></div>
           </body></html>"#,
        options
    )
}

#[tokio::test]
async fn test_dxsale_discovery_filters_running_sales() {
    let mut session = SnapshotSession::new().with_page(
        dxsale::PROFILE.index_url,
        dxsale_index(&["All", "Not Running", "Running", "Ended"]),
    );
    session.start_session().await.unwrap();
    let extractor = ProfiledExtractor::new(&dxsale::PROFILE, tuning());

    let links = extractor.discover_live_links(&mut session).await;
    assert_eq!(
        links,
        vec![
            DiscoveredLink::new("https://www.dx.app/dxsale/moon"),
            DiscoveredLink::new("https://www.dx.app/dxsale/star"),
        ]
    );
    let log = session.log();
    assert_eq!(
        log.clicks,
        vec![
            "label [Filter by] + sibling".to_string(),
            "ul[role='listbox'] li[role='option'] [Running]".to_string(),
        ]
    );
    assert_eq!(log.scrolls, 3);
}

/// 没有 "Running" 选项时列表未经筛选，不能当作进行中的预售
#[tokio::test]
async fn test_dxsale_discovery_without_running_option_is_empty() {
    let mut session = SnapshotSession::new().with_page(
        dxsale::PROFILE.index_url,
        dxsale_index(&["Ended", "Not Running"]),
    );
    session.start_session().await.unwrap();
    let extractor = ProfiledExtractor::new(&dxsale::PROFILE, tuning());

    assert!(extractor.discover_live_links(&mut session).await.is_empty());
    let log = session.log();
    assert_eq!(log.clicks, vec!["label [Filter by] + sibling".to_string()]);
    assert_eq!(log.scrolls, 0);
}

#[tokio::test]
async fn test_dxsale_discovery_without_filter_control_is_empty() {
    let mut session = SnapshotSession::new().with_page(
        dxsale::PROFILE.index_url,
        r#"<html><body>
             <label>Search</label><div class="search"><input type="text"></div>
             <ul role="listbox"><li role="option">Running</li></ul>
             <div class="MuiCard-root"><a href="/dxsale/moon">Moon</a></div>
           </body></html>"#,
    );
    session.start_session().await.unwrap();
    let extractor = ProfiledExtractor::new(&dxsale::PROFILE, tuning());

    assert!(extractor.discover_live_links(&mut session).await.is_empty());
    assert!(session.log().clicks.is_empty());
}

#[tokio::test]
async fn test_dxsale_detail_is_stamped_live() {
    let session = opened(
        r#"<h3 class="MuiTypography-root MuiTypography-h3 css-vwfc3z">Moon Token</h3>
           <h6 class="MuiTypography-root MuiTypography-h6 css-eezjbm">MOON</h6>
           <p class="MuiTypography-root MuiTypography-h5 css-oh7pm8">12.5 BNB</p>
           <div><span>Token address</span><span class="MuiTypography-subtitle2">0xToken</span></div>
           <div class="MuiBox-root css-qokrjo">
             <a href="https://t.me/moon">tg</a>
             <a href="https://github.com/moon">code</a>
           </div>"#,
    )
    .await;
    let extractor = ProfiledExtractor::new(&dxsale::PROFILE, tuning());
    let bag = extractor
        .extract_detail(&session, &DiscoveredLink::new(DETAIL))
        .await
        .unwrap();

    let record = adapt("dxsale", &bag);
    assert!(record.is_persistable());
    assert_eq!(record.name, "Moon Token");
    assert_eq!(record.symbol, "MOON");
    assert_eq!(record.amount_raised, "12.5 BNB");
    assert_eq!(record.token_address, "0xToken");
    assert_eq!(record.telegram, "https://t.me/moon");
    assert_eq!(record.website, "Not Available");
}

const PINKSALE_DETAIL: &str = "https://www.pinksale.finance/solana/launchpad/pinky";
const PINKSALE_DESKTOP: &str =
    "body > div > div > div:nth-of-type(3) > main > div > div > div:nth-of-type(2)";
const PINKSALE_MOBILE: &str =
    "body > div > div > div:nth-of-type(3) > main > div > div > div:nth-of-type(1)";

fn pinksale_mobile_page(status: &str) -> String {
    let at = |tail: &str| format!("{} > {}", PINKSALE_MOBILE, tail);
    let token = |tail: &str| {
        at(&format!(
            "div:nth-of-type(1) > div:nth-of-type(1) > div:nth-of-type(2) > div > {}",
            tail
        ))
    };
    let pool = |row: usize| {
        at(&format!(
            "div:nth-of-type(1) > div:nth-of-type(1) > div:nth-of-type(3) > div:nth-of-type({}) > div:nth-of-type(2)",
            row
        ))
    };
    let sale = |row: usize| {
        at(&format!(
            "div:nth-of-type(2) > div:nth-of-type(3) > div:nth-of-type({}) > div:nth-of-type(2) > div",
            row
        ))
    };
    let socials = at(
        "div:nth-of-type(1) > div:nth-of-type(1) > div:nth-of-type(1) > div:nth-of-type(1) > div:nth-of-type(2) > div:nth-of-type(3)",
    );

    PageBuilder::new()
        .text(&sale(2), status)
        .text(&sale(5), "1 SOL = 2500 PINKY")
        .text(&sale(6), "42 SOL")
        .text(
            &token("div:nth-of-type(2) > div:nth-of-type(2) > div > div > div:nth-of-type(1)"),
            "PinkyMint111\nCopy address",
        )
        .text(&token("div:nth-of-type(3) > div:nth-of-type(2) > div"), "Pinky Token")
        .text(&token("div:nth-of-type(4) > div:nth-of-type(2)"), "PINKY")
        .text(&token("div:nth-of-type(6) > div:nth-of-type(2) > div"), "1,000,000,000")
        .text(&pool(2), "PinkyPool222\nCopy")
        .text(&pool(6), "50 SOL")
        .text(&pool(7), "2025-03-01 12:00")
        .text(&pool(8), "2025-03-08 12:00")
        .text(&pool(12), "365 days")
        .link(&socials, "https://twitter.com/pinky")
        .link(&socials, "https://t.me/pinky")
        .link(&socials, "https://pinky.io")
        .html()
}

/// 移动端布局的页面在桌面布局落空后由第二套选择器读取
#[tokio::test]
async fn test_pinksale_mobile_page_falls_back_and_maps() {
    let session = opened_at(PINKSALE_DETAIL, &pinksale_mobile_page("Live")).await;
    let extractor = ProfiledExtractor::new(&pinksale::PROFILE, tuning());
    let bag = extractor
        .extract_detail(&session, &DiscoveredLink::new(PINKSALE_DETAIL))
        .await
        .unwrap();
    assert_eq!(bag.get(labels::STATUS), Some(LIVE_STATUS));

    let record = adapt("pinksale", &bag);
    assert!(record.is_persistable());
    assert_eq!(record.source_url, PINKSALE_DETAIL);
    assert_eq!(record.name, "Pinky Token");
    assert_eq!(record.symbol, "PINKY");
    assert_eq!(record.token_address, "PinkyMint111");
    assert_eq!(record.pool_address, "PinkyPool222");
    assert_eq!(record.total_supply, "1,000,000,000");
    assert_eq!(record.soft_cap, "50 SOL");
    assert_eq!(record.start_time, "2025-03-01 12:00");
    assert_eq!(record.end_time, "2025-03-08 12:00");
    assert_eq!(record.lockup_time, "365 days");
    assert_eq!(record.current_rate, "1 SOL = 2500 PINKY");
    assert_eq!(record.amount_raised, "42 SOL");
    assert_eq!(record.chain, "SOL");
    assert_eq!(record.twitter, "https://twitter.com/pinky");
    assert_eq!(record.telegram, "https://t.me/pinky");
    assert_eq!(record.website, "https://pinky.io");
}

#[tokio::test]
async fn test_pinksale_badge_variants_are_live() {
    let extractor = ProfiledExtractor::new(&pinksale::PROFILE, tuning());
    for badge in ["Sale Live", "Live", "LIVE", "Sale live"] {
        let session = opened_at(PINKSALE_DETAIL, &pinksale_mobile_page(badge)).await;
        let bag = extractor
            .extract_detail(&session, &DiscoveredLink::new(PINKSALE_DETAIL))
            .await
            .unwrap();
        assert!(adapt("pinksale", &bag).is_persistable(), "{}", badge);
    }
}

#[tokio::test]
async fn test_pinksale_desktop_ended_badge_is_kept_and_not_live() {
    let at = |tail: &str| format!("{} > {}", PINKSALE_DESKTOP, tail);
    let page = PageBuilder::new()
        .text(
            &at("div:nth-of-type(2) > div:nth-of-type(1) > div:nth-of-type(3) > div:nth-of-type(2) > div:nth-of-type(2)"),
            "Sale Ended",
        )
        .text(
            &at("div:nth-of-type(1) > div:nth-of-type(1) > div:nth-of-type(2) > div > div:nth-of-type(3) > div:nth-of-type(2)"),
            "Old Token",
        )
        .html();
    let session = opened_at(PINKSALE_DETAIL, &page).await;
    let extractor = ProfiledExtractor::new(&pinksale::PROFILE, tuning());
    let bag = extractor
        .extract_detail(&session, &DiscoveredLink::new(PINKSALE_DETAIL))
        .await
        .unwrap();

    assert_eq!(bag.get(labels::STATUS), Some("Sale Ended"));
    let record = adapt("pinksale", &bag);
    assert_eq!(record.name, "Old Token");
    assert!(!record.is_live);
    assert!(!record.is_persistable());
}

const SOLANAPAD_DETAIL: &str = "https://solanapad.io/launchpad/pad";
const SOLANAPAD_CONTENT: &str =
    "body > div > div:nth-of-type(1) > div:nth-of-type(2) > main > div > div:nth-of-type(2)";

fn solanapad_page(status: &str) -> String {
    let content = |tail: &str| format!("{} > {}", SOLANAPAD_CONTENT, tail);
    let header = |tail: &str| {
        content(&format!(
            "div:nth-of-type(2) > div:nth-of-type(1) > div:nth-of-type(1) > div:nth-of-type(1) > div:nth-of-type(2) > {}",
            tail
        ))
    };
    let row = |n: usize| {
        content(&format!(
            "div:nth-of-type(2) > div:nth-of-type(1) > div:nth-of-type(2) > ul > li:nth-of-type({})",
            n
        ))
    };
    let socials = header("div:nth-of-type(1) > div:nth-of-type(2) > div");

    PageBuilder::new()
        .text(&header("div:nth-of-type(1) > div:nth-of-type(1) > h3"), "PAD")
        .text(&header("div:nth-of-type(2) > div:nth-of-type(2) > span"), status)
        .text(
            &content("div:nth-of-type(2) > div:nth-of-type(2) > div > div:nth-of-type(2) > div:nth-of-type(3) > div > div > span:nth-of-type(1)"),
            "88 SOL\n(88%)",
        )
        .text(&row(1), "Current Rate\n1 SOL = 100 PAD")
        .text(&row(2), "Soft Cap\n50 SOL")
        .text(&row(3), "Start Time\n2025-04-01 10:00")
        .text(&row(4), "End Time\n2025-04-03 10:00")
        .text(&row(5), "Total supply\n10,000,000")
        .text(&row(6), "Token Address\nPadMint333")
        .text(&row(7), "Pool Address\nPadPool444")
        .link(&socials, "https://x.com/solanapad_pad")
        .link(&socials, "https://t.me/solanapad_pad")
        .html()
}

#[tokio::test]
async fn test_solanapad_detail_reads_header_and_sale_list() {
    let session = opened_at(SOLANAPAD_DETAIL, &solanapad_page("Live")).await;
    let extractor = ProfiledExtractor::new(&solanapad::PROFILE, tuning());
    let bag = extractor
        .extract_detail(&session, &DiscoveredLink::new(SOLANAPAD_DETAIL))
        .await
        .unwrap();

    let record = adapt("solanapad", &bag);
    assert!(record.is_persistable());
    assert_eq!(record.name, NOT_AVAILABLE);
    assert_eq!(record.symbol, "PAD");
    assert_eq!(record.amount_raised, "88 SOL");
    assert_eq!(record.current_rate, "1 SOL = 100 PAD");
    assert_eq!(record.soft_cap, "50 SOL");
    assert_eq!(record.start_time, "2025-04-01 10:00");
    assert_eq!(record.end_time, "2025-04-03 10:00");
    assert_eq!(record.total_supply, "10,000,000");
    assert_eq!(record.token_address, "PadMint333");
    assert_eq!(record.pool_address, "PadPool444");
    assert_eq!(record.chain, "SOL");
    assert_eq!(record.twitter, "https://x.com/solanapad_pad");
    assert_eq!(record.telegram, "https://t.me/solanapad_pad");
    assert_eq!(record.website, NOT_AVAILABLE);
}

#[tokio::test]
async fn test_solanapad_upcoming_sale_is_not_live() {
    let session = opened_at(SOLANAPAD_DETAIL, &solanapad_page("Upcoming")).await;
    let extractor = ProfiledExtractor::new(&solanapad::PROFILE, tuning());
    let bag = extractor
        .extract_detail(&session, &DiscoveredLink::new(SOLANAPAD_DETAIL))
        .await
        .unwrap();

    assert_eq!(bag.get(labels::STATUS), Some("Upcoming"));
    assert!(!adapt("solanapad", &bag).is_persistable());
}
