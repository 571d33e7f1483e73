mod config;
mod crawler;

use anyhow::Result;
use log2::*;
use std::sync::Arc;
use std::time::Instant;

#[tokio::main]
async fn main() -> Result<()> {
    let cfg = config::Config::new();
    cfg.validate()?;
    let _log2 = stdout()
        .module(true)
        .module_with_line(true)
        .module_filter(|module| module.starts_with("linkscore"))
        .level(cfg.log_level.to_string())
        .start();

    let crawler_config = Arc::new(
        crawler::CrawlerConfig::new(cfg.seed_url.clone())
            .with_max_depth(cfg.max_depth)
            .with_worker_count(cfg.workers)
            .with_request_timeout(cfg.timeout),
    );

    // session is cloned because the final score is read after the crawl
    let session = Arc::new(crawler::CrawlSession::new());
    let started = Instant::now();

    match crawler::crawl(session.clone(), crawler_config).await {
        Ok(()) => {
            info!(
                "Crawl completed in {:?}. Final score: {}",
                started.elapsed(),
                session.score()
            );
        }
        Err(e) => {
            error!("Crawl failed: {}", e);
        }
    }

    Ok(())
}
