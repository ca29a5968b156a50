use crate::config::Config;
use crate::error::AppError;
use governor::{
    clock::{Clock, DefaultClock},
    state::{InMemoryState, NotKeyed},
    Quota, RateLimiter,
};
use indicatif::ProgressBar;
use std::num::NonZeroU32;
use std::thread;
use std::time::Duration;
use tracing::{debug, info};

use super::endpoints;
use super::models::*;
use super::DocumentSource;

const REQUESTS_PER_SECOND: NonZeroU32 = match NonZeroU32::new(10) {
    Some(n) => n,
    None => unreachable!(),
};
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
const USER_AGENT: &str = concat!("fight_metrics/", env!("CARGO_PKG_VERSION"));

/// Read-only client for the Firestore REST API.
pub struct FirestoreClient {
    config: Config,
    project_id: String,
    agent: ureq::Agent,
    rate_limiter: RateLimiter<NotKeyed, InMemoryState, DefaultClock>,
}

impl FirestoreClient {
    pub fn new(config: Config) -> Result<Self, AppError> {
        let project_id = config.require_project_id()?.to_string();
        let agent = ureq::AgentBuilder::new()
            .timeout(REQUEST_TIMEOUT)
            .user_agent(USER_AGENT)
            .build();

        Ok(FirestoreClient {
            config,
            project_id,
            agent,
            rate_limiter: RateLimiter::direct(Quota::per_second(REQUESTS_PER_SECOND)),
        })
    }

    fn throttle(&self) {
        let clock = DefaultClock::default();
        while let Err(not_until) = self.rate_limiter.check() {
            thread::sleep(not_until.wait_time_from(clock.now()));
        }
    }

    fn execute_request(&self, url: &str, page_token: Option<&str>) -> Result<String, AppError> {
        self.throttle();

        let mut request = self
            .agent
            .get(url)
            .query("pageSize", &self.config.page_size.to_string());
        if let Some(token) = page_token {
            request = request.query("pageToken", token);
        }
        if let Some(key) = &self.config.api_key {
            request = request.query("key", key);
        }

        match request.call() {
            Ok(resp) => resp
                .into_string()
                .map_err(|e| AppError::HttpError(e.to_string())),
            Err(ureq::Error::Status(429, _)) => Err(AppError::RateLimited),
            Err(ureq::Error::Status(status, resp)) => {
                let body = resp.into_string().unwrap_or_default();
                Err(AppError::ApiError {
                    status,
                    message: error_message(&body),
                })
            }
            Err(e) => Err(AppError::HttpError(e.to_string())),
        }
    }

    fn get_page(&self, url: &str, page_token: Option<&str>) -> Result<ListDocumentsResponse, AppError> {
        let body = self.execute_request(url, page_token)?;
        decode_page(&body)
    }
}

impl DocumentSource for FirestoreClient {
    fn fetch_all(&self, collection: &str) -> Result<Vec<Document>, AppError> {
        let url = endpoints::documents_url(&self.project_id, collection);
        let spinner = ProgressBar::new_spinner();
        spinner.enable_steady_tick(Duration::from_millis(120));
        spinner.set_message(format!("Fetching {}", collection));

        let mut documents = Vec::new();
        let mut page_token: Option<String> = None;
        let mut pages = 0usize;

        let result = loop {
            let page = match self.get_page(&url, page_token.as_deref()) {
                Ok(page) => page,
                Err(e) => break Err(e),
            };
            pages += 1;
            documents.extend(page.documents.into_iter().map(FirestoreDocument::into_document));
            spinner.set_message(format!("Fetching {} ({} documents)", collection, documents.len()));
            debug!(collection, pages, documents = documents.len(), "fetched page");

            match page.next_page_token {
                Some(token) if !token.is_empty() => page_token = Some(token),
                _ => break Ok(()),
            }
        };

        spinner.finish_and_clear();
        result?;

        info!(collection, pages, documents = documents.len(), "collection fetched");
        Ok(documents)
    }
}

/// A page that does not decode means the fetch itself went wrong, so it is
/// reported as an HTTP failure rather than a local JSON error.
fn decode_page(body: &str) -> Result<ListDocumentsResponse, AppError> {
    serde_json::from_str(body)
        .map_err(|e| AppError::HttpError(format!("Malformed documents page: {}", e)))
}

/// Pull `error.message` out of a Firestore error body, falling back to the raw text.
fn error_message(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| v["error"]["message"].as_str().map(str::to_string))
        .unwrap_or_else(|| body.trim().to_string())
}
