use std::sync::Arc;

/// Default timeout for page requests in seconds
pub const REQUEST_TIMEOUT_SEC: u64 = 10;

/// Configuration for a single crawl run
pub struct CrawlerConfig {
    pub seed_url: String,
    pub max_depth: usize,
    pub worker_count: usize,
    pub request_timeout_sec: u64,
}

impl CrawlerConfig {
    pub fn new(seed_url: String) -> Self {
        Self {
            seed_url,
            max_depth: 2,
            worker_count: 8,
            request_timeout_sec: REQUEST_TIMEOUT_SEC,
        }
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn with_worker_count(mut self, worker_count: usize) -> Self {
        self.worker_count = worker_count;
        self
    }

    pub fn with_request_timeout(mut self, secs: u64) -> Self {
        self.request_timeout_sec = secs;
        self
    }
}

pub type CrawlerConfigRef = Arc<CrawlerConfig>;
