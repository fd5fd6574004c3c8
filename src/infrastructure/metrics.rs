// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use metrics::{describe_counter, describe_histogram, Unit};
use metrics_exporter_prometheus::PrometheusBuilder;
use std::net::SocketAddr;
use tracing::{info, warn};

pub const LINKS_DISCOVERED: &str = "presale_links_discovered_total";
pub const LINKS_SKIPPED: &str = "presale_links_skipped_total";
pub const LINKS_FAILED: &str = "presale_links_failed_total";
pub const RECORDS_PERSISTED: &str = "presale_records_persisted_total";
pub const SOURCE_PASS_SECONDS: &str = "presale_source_pass_seconds";

/// 启动 Prometheus 指标导出
pub fn init_metrics(addr: &str) {
    let addr: SocketAddr = match addr.parse() {
        Ok(addr) => addr,
        Err(e) => {
            warn!("Invalid metrics address {}: {}", addr, e);
            return;
        }
    };

    // Ignore error if address is already in use (for development/testing)
    if let Err(e) = PrometheusBuilder::new().with_http_listener(addr).install() {
        warn!("Failed to install Prometheus recorder: {}. This might happen if the port is already in use.", e);
        return;
    }

    describe_counter!(LINKS_DISCOVERED, "Live sale links found on listing pages");
    describe_counter!(LINKS_SKIPPED, "Links skipped because already stored or not live");
    describe_counter!(LINKS_FAILED, "Links whose detail fetch or storage failed");
    describe_counter!(RECORDS_PERSISTED, "Sale records written to the store");
    describe_histogram!(SOURCE_PASS_SECONDS, Unit::Seconds, "Duration of one source job");

    info!("Metrics exporter listening on {}", addr);
}
