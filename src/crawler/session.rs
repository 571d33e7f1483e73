use std::collections::{HashSet, VecDeque};
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use tokio::sync::{Mutex, RwLock};

/// Points awarded for every page that is fetched and parsed
pub const SCORE_PER_PAGE: u64 = 10;

/// One unit of pending work: a URL and the depth budget left for it
pub type Job = (String, usize);

/// Shared state of a single crawl run
pub struct CrawlSession {
    /// URLs already claimed by some job; only grows during a run
    visited: Mutex<HashSet<String>>,
    /// Running visit score
    score: AtomicU64,
    /// Jobs waiting for a worker
    jobs: RwLock<VecDeque<Job>>,
    /// Jobs enqueued but not yet fully processed
    pending: AtomicUsize,
}

impl CrawlSession {
    pub fn new() -> Self {
        Self {
            visited: Mutex::new(HashSet::new()),
            score: AtomicU64::new(0),
            jobs: RwLock::new(VecDeque::new()),
            pending: AtomicUsize::new(0),
        }
    }

    /// Atomically claims `url` for processing. Returns false if another job
    /// already claimed it. Check and insert happen under one lock, so two
    /// jobs can never both win the same URL.
    pub async fn try_claim(&self, url: &str) -> bool {
        let mut visited = self.visited.lock().await;
        if visited.contains(url) {
            return false;
        }
        visited.insert(url.to_string());
        true
    }

    pub async fn was_claimed(&self, url: &str) -> bool {
        self.visited.lock().await.contains(url)
    }

    pub async fn claimed_count(&self) -> usize {
        self.visited.lock().await.len()
    }

    /// Adds the per-page increment and returns the updated total
    pub fn add_score(&self) -> u64 {
        self.score.fetch_add(SCORE_PER_PAGE, Ordering::SeqCst) + SCORE_PER_PAGE
    }

    pub fn score(&self) -> u64 {
        self.score.load(Ordering::SeqCst)
    }

    /// Registers a job with the completion tracker and queues it. The
    /// pending count is bumped before the job becomes visible, so the
    /// tracker cannot read zero while this job is still schedulable.
    pub async fn enqueue(&self, url: String, depth: usize) {
        self.pending.fetch_add(1, Ordering::SeqCst);
        self.jobs.write().await.push_back((url, depth));
    }

    pub async fn next_job(&self) -> Option<Job> {
        self.jobs.write().await.pop_front()
    }

    /// Marks one dequeued job as fully processed. Must be called exactly
    /// once per dequeued job, after any children have been enqueued.
    pub fn job_finished(&self) {
        self.pending.fetch_sub(1, Ordering::SeqCst);
    }

    /// True once every enqueued job has been processed to completion
    pub fn is_idle(&self) -> bool {
        self.pending.load(Ordering::SeqCst) == 0
    }
}

impl Default for CrawlSession {
    fn default() -> Self {
        Self::new()
    }
}

pub type CrawlSessionRef = Arc<CrawlSession>;
