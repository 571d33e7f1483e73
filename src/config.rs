use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};
use url::Url;

/// Log levels as defined in log2 crate
#[derive(Debug, Serialize, Deserialize, Clone, ValueEnum)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

/// Program arguments. CrawlerConfig describes only the crawler itself,
/// this struct receives everything the user can set on the command line.
#[derive(Parser, Debug, Serialize, Deserialize)]
#[command(author, version, about, long_about = None)]
pub struct Config {
    /// URL the crawl starts from
    #[arg(short, long, default_value = "https://go.dev")]
    pub seed_url: String,
    /// Maximum link depth to follow from the seed
    #[arg(long, default_value = "2")]
    pub max_depth: usize,
    /// Number of concurrent worker tasks
    #[arg(short, long, default_value = "8")]
    pub workers: usize,
    /// Per-request timeout in seconds
    #[arg(long, default_value = "10")]
    pub timeout: u64,
    /// Logging level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info", value_enum)]
    pub log_level: LogLevel,
}

impl Config {
    pub fn new() -> Self {
        Self::parse()
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        if self.max_depth == 0 {
            anyhow::bail!("max_depth must be greater than 0");
        }
        if self.workers == 0 {
            anyhow::bail!("workers must be greater than 0");
        }
        let seed = Url::parse(&self.seed_url)?;
        if seed.scheme() != "http" && seed.scheme() != "https" {
            anyhow::bail!("seed_url must be an http(s) URL: {}", self.seed_url);
        }
        Ok(())
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        };
        write!(f, "{}", s)
    }
}
