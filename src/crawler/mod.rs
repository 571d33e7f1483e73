pub mod config;
pub mod error;
pub mod runner;
pub mod scrape;
pub mod session;


pub use config::{CrawlerConfig, CrawlerConfigRef, REQUEST_TIMEOUT_SEC};
pub use error::FetchError;
pub use runner::crawl;
pub use scrape::{Page, fetch_page, resolve_link};
pub use session::{CrawlSession, CrawlSessionRef, SCORE_PER_PAGE};
