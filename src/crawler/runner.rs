use std::sync::Arc;
use anyhow::Result;
use log2::*;
use reqwest::Client;
use tokio::task::JoinHandle;
use tokio::time::{Duration, sleep};

use super::config::{CrawlerConfig, CrawlerConfigRef};
use super::scrape::{fetch_page, resolve_link};
use super::session::{CrawlSession, CrawlSessionRef};

/// How long an out-of-work worker naps before re-checking the queue
const IDLE_BACKOFF_MS: u64 = 10;

/// Crawls from the configured seed URL until every reachable job has been
/// processed. Workers pull (url, depth) jobs from the shared queue and exit
/// once the session's pending-job tracker reaches zero; joining them here is
/// what makes the top-level call block until the whole traversal is done.
pub async fn crawl(session: CrawlSessionRef, config: CrawlerConfigRef) -> Result<()> {
    session
        .enqueue(config.seed_url.clone(), config.max_depth)
        .await;

    let mut handles: Vec<JoinHandle<()>> = Vec::new();

    for worker_id in 0..config.worker_count {
        let session = Arc::clone(&session);
        let config = Arc::clone(&config);

        let handle = tokio::spawn(async move {
            let client = Client::new();
            debug!("Worker {} started", worker_id);

            loop {
                match session.next_job().await {
                    Some((url, depth)) => {
                        visit(&session, &config, &client, &url, depth).await;
                        session.job_finished();
                    }
                    None => {
                        // An empty queue is not the end: an in-flight job
                        // may still enqueue children. Only a zero pending
                        // count means there is nothing left to do.
                        if session.is_idle() {
                            break;
                        }
                        sleep(Duration::from_millis(IDLE_BACKOFF_MS)).await;
                    }
                }
            }

            debug!("Worker {} finished", worker_id);
        });

        handles.push(handle);
    }

    for handle in handles {
        handle.await?;
    }

    Ok(())
}

/// One traversal step: claim the URL, fetch and parse it, bump the score,
/// queue every resolvable outbound link one level deeper. Fetch and parse
/// failures are logged and swallowed so sibling jobs are unaffected.
async fn visit(
    session: &CrawlSession,
    config: &CrawlerConfig,
    client: &Client,
    url: &str,
    depth: usize,
) {
    if depth == 0 {
        return;
    }

    if !session.try_claim(url).await {
        debug!("Skipping already visited {}", url);
        return;
    }

    let page = match fetch_page(url, client, config).await {
        Ok(page) => page,
        Err(e) => {
            warn!("Failed to visit {}: {}", url, e);
            return;
        }
    };

    info!("Visited: {} (title: {})", url, page.title);
    // add_score must run unconditionally; log macros skip their arguments
    // when the log level is disabled, so the call cannot live inside info!
    let score = session.add_score();
    info!("Score: {}", score);

    for href in &page.links {
        match resolve_link(url, href) {
            Some(next) => session.enqueue(next, depth - 1).await,
            None => debug!("Skipping unresolvable link {:?} on {}", href, url),
        }
    }
}
