#![deny(missing_docs)]

//! # HTTP Fetcher
//!
//! Blocking `ureq` transport behind the core's [`PageSource`] seam.

use help2oas_core::{AppError, AppResult, PageSource};
use std::time::Duration;
use tracing::debug;
use ureq::tls::TlsConfig;
use ureq::Agent;

/// Browser-like user agent; some help pages refuse unknown clients.
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";

/// Transport settings.
#[derive(clap::Args, Debug, Clone)]
pub struct FetchArgs {
    /// Disable TLS certificate verification (self-signed servers).
    #[clap(long, env = "HELP2OAS_NO_VERIFY_SSL")]
    pub no_verify_ssl: bool,

    /// Per-request timeout in seconds.
    #[clap(long, default_value_t = 30, env = "HELP2OAS_TIMEOUT")]
    pub timeout: u64,

    /// User-Agent header sent with every request.
    #[clap(long, default_value = DEFAULT_USER_AGENT, env = "HELP2OAS_USER_AGENT")]
    pub user_agent: String,
}

/// Fetches pages over HTTP(S).
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    agent: Agent,
}

impl HttpFetcher {
    /// Builds the agent from the transport settings.
    pub fn new(args: &FetchArgs) -> Self {
        let config = Agent::config_builder()
            .timeout_global(Some(Duration::from_secs(args.timeout)))
            .user_agent(args.user_agent.as_str())
            .tls_config(
                TlsConfig::builder()
                    .disable_verification(args.no_verify_ssl)
                    .build(),
            )
            .build();
        Self {
            agent: Agent::new_with_config(config),
        }
    }
}

impl PageSource for HttpFetcher {
    fn fetch(&self, url: &str) -> AppResult<String> {
        debug!(url, "GET");
        let mut response = self
            .agent
            .get(url)
            .call()
            .map_err(|e| AppError::Fetch(format!("{}: {}", url, e)))?;
        response
            .body_mut()
            .read_to_string()
            .map_err(|e| AppError::Fetch(format!("{}: unreadable body: {}", url, e)))
    }
}
