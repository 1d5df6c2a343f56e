//! Per-run HTTP session with User-Agent rotation and connection limits.
//!
//! A [`Session`] wraps a configured [`reqwest::Client`] together with two
//! layers of semaphores: one bounding simultaneous connections overall and
//! one per remote host. A session is owned by exactly one pipeline run;
//! dropping it releases every pooled connection.

use crate::config::SearchConfig;
use crate::error::SearchError;
use rand::seq::SliceRandom;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::sync::{AcquireError, OwnedSemaphorePermit, Semaphore};
use url::Url;

/// Realistic browser User-Agent strings, rotated per session.
const USER_AGENTS: &[&str] = &[
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/131.0.0.0 Safari/537.36",
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/131.0.0.0 Safari/537.36",
    "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/131.0.0.0 Safari/537.36",
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64; rv:133.0) Gecko/20100101 Firefox/133.0",
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10.15; rv:133.0) Gecko/20100101 Firefox/133.0",
];

/// Connection context shared by every engine during one pipeline run.
#[derive(Debug)]
pub struct Session {
    client: reqwest::Client,
    total: Arc<Semaphore>,
    per_host_limit: usize,
    per_host: Mutex<HashMap<String, Arc<Semaphore>>>,
}

/// Proof that a request may be in flight. Releases both slots on drop.
#[derive(Debug)]
pub struct ConnectionPermit {
    _host: OwnedSemaphorePermit,
    _total: OwnedSemaphorePermit,
}

impl Session {
    /// Build a session configured for search engine scraping.
    ///
    /// The client has:
    /// - Cookie store enabled
    /// - Timeout from config, applied to every request
    /// - Random User-Agent from built-in rotation list (or custom if configured)
    /// - Idle pool capped at `max_connections_per_host`
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Http`] if the client cannot be constructed.
    pub fn new(config: &SearchConfig) -> Result<Self, SearchError> {
        let ua = match config.user_agent {
            Some(ref custom) => custom.clone(),
            None => random_user_agent().to_owned(),
        };

        let client = reqwest::Client::builder()
            .cookie_store(true)
            .timeout(Duration::from_secs(config.timeout_seconds))
            .user_agent(ua)
            .redirect(reqwest::redirect::Policy::limited(10))
            .pool_max_idle_per_host(config.max_connections_per_host)
            .build()
            .map_err(|e| SearchError::Http(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            total: Arc::new(Semaphore::new(config.max_connections)),
            per_host_limit: config.max_connections_per_host,
            per_host: Mutex::new(HashMap::new()),
        })
    }

    /// The underlying HTTP client.
    pub fn client(&self) -> &reqwest::Client {
        &self.client
    }

    /// Number of connection slots not currently held.
    pub fn available_connections(&self) -> usize {
        self.total.available_permits()
    }

    /// Wait for a free connection slot towards `endpoint`.
    ///
    /// The per-host slot is taken first so that a request queued behind a
    /// busy host does not hold one of the global slots while it waits.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Config`] if `endpoint` is not an absolute URL.
    pub async fn acquire(&self, endpoint: &str) -> Result<ConnectionPermit, SearchError> {
        let host = host_key(endpoint)?;
        let host_sem = {
            let mut map = self
                .per_host
                .lock()
                .unwrap_or_else(|poisoned| poisoned.into_inner());
            Arc::clone(
                map.entry(host.clone())
                    .or_insert_with(|| Arc::new(Semaphore::new(self.per_host_limit))),
            )
        };

        let closed = |_: AcquireError| SearchError::Http("connection pool closed".into());
        let host_permit = host_sem.acquire_owned().await.map_err(closed)?;
        let total_permit = Arc::clone(&self.total)
            .acquire_owned()
            .await
            .map_err(closed)?;

        tracing::trace!(%host, "connection slot acquired");
        Ok(ConnectionPermit {
            _host: host_permit,
            _total: total_permit,
        })
    }
}

/// `host[:port]` used to group connections.
fn host_key(endpoint: &str) -> Result<String, SearchError> {
    let parsed = Url::parse(endpoint)
        .map_err(|e| SearchError::Config(format!("invalid endpoint `{endpoint}`: {e}")))?;
    let host = parsed
        .host_str()
        .ok_or_else(|| SearchError::Config(format!("endpoint `{endpoint}` has no host")))?;
    Ok(match parsed.port_or_known_default() {
        Some(port) => format!("{host}:{port}"),
        None => host.to_owned(),
    })
}

/// Select a random User-Agent string from the rotation list.
pub fn random_user_agent() -> &'static str {
    let mut rng = rand::thread_rng();
    USER_AGENTS
        .choose(&mut rng)
        .copied()
        // USER_AGENTS is a non-empty const array, choose only returns None on empty slices
        .unwrap_or(USER_AGENTS[0])
}
