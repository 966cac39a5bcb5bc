//! HTTP helpers for fixture retrieval and form submission.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Native builds: stubs that report failure, since fixtures are only
//! reachable from a page.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Option`/outcome values instead of panics. A failed or timed
//! out GET is logged and collapses to `None`, which pages turn into
//! `LoadState::Failed`; a failed POST becomes [`SubmitOutcome::Rejected`]
//! with a message for the form.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use std::collections::BTreeMap;
use std::time::Duration;

use records::Language;
use records::contact::{NETWORK_ERROR_MESSAGE, STATUS_SUCCESS};
use serde::de::DeserializeOwned;

pub const TIPS_URL: &str = "./data/tips.json";
pub const EVENTS_URL: &str = "./data/events.json";
pub const THREADS_URL: &str = "./data/threads.json";
pub const GROUPS_URL: &str = "./data/groups.json";

/// Path of the string table for `language`.
#[must_use]
pub fn language_file_url(language: Language) -> String {
    format!("./data/lang/{}.json", language.code())
}

#[cfg(any(test, feature = "hydrate"))]
fn fetch_failed_message(status: u16) -> String {
    format!("HTTP error! status: {status}")
}

/// Limits applied to every fixture fetch.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FetchConfig {
    /// A request still pending after this long counts as failed.
    pub timeout: Duration,
}

impl FetchConfig {
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self { timeout: Self::DEFAULT_TIMEOUT }
    }
}

/// GET `url` and parse the body as JSON, with the default timeout.
/// Returns `None` on any failure.
pub async fn fetch_json<T: DeserializeOwned>(url: &str) -> Option<T> {
    fetch_json_with(url, &FetchConfig::default()).await
}

/// GET `url` and parse the body as JSON. Transport errors, non-2xx statuses,
/// parse errors, and timeouts are logged and return `None`.
pub async fn fetch_json_with<T: DeserializeOwned>(url: &str, config: &FetchConfig) -> Option<T> {
    #[cfg(feature = "hydrate")]
    {
        use futures::future::{Either, select};

        let request = std::pin::pin!(get_json::<T>(url));
        let deadline = std::pin::pin!(gloo_timers::future::sleep(config.timeout));
        match select(request, deadline).await {
            Either::Left((Ok(value), _)) => Some(value),
            Either::Left((Err(err), _)) => {
                log::warn!("error fetching {url}: {err}");
                None
            }
            Either::Right(_) => {
                log::warn!("timed out fetching {url} after {:?}", config.timeout);
                None
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (url, config);
        None
    }
}

#[cfg(feature = "hydrate")]
async fn get_json<T: DeserializeOwned>(url: &str) -> Result<T, String> {
    let resp = gloo_net::http::Request::get(url)
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if !resp.ok() {
        return Err(fetch_failed_message(resp.status()));
    }
    resp.json::<T>().await.map_err(|e| e.to_string())
}

/// What happened to a form POST.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// HTTP success and `status: "success"` in the body.
    Accepted { message: Option<String> },
    /// Anything else, with the server's message or a default.
    Rejected { message: String },
}

impl SubmitOutcome {
    fn network_error() -> Self {
        Self::Rejected { message: NETWORK_ERROR_MESSAGE.to_owned() }
    }
}

/// Decide the outcome of a POST from the HTTP `ok` flag and the parsed body
/// (`None` when the body was not JSON).
#[must_use]
pub fn interpret_submit_reply(http_ok: bool, body: Option<&serde_json::Value>) -> SubmitOutcome {
    let field = |name: &str| body.and_then(|b| b.get(name)).and_then(serde_json::Value::as_str);
    let message = field("message").map(str::to_owned);
    if http_ok && field("status") == Some(STATUS_SUCCESS) {
        return SubmitOutcome::Accepted { message };
    }
    SubmitOutcome::Rejected { message: message.unwrap_or_else(|| NETWORK_ERROR_MESSAGE.to_owned()) }
}

/// POST `fields` as a JSON object to `endpoint`.
pub async fn post_form(endpoint: &str, fields: &BTreeMap<String, String>) -> SubmitOutcome {
    #[cfg(feature = "hydrate")]
    {
        let request = match gloo_net::http::Request::post(endpoint).json(fields) {
            Ok(request) => request,
            Err(err) => {
                log::warn!("failed to encode form for {endpoint}: {err}");
                return SubmitOutcome::network_error();
            }
        };
        let resp = match request.send().await {
            Ok(resp) => resp,
            Err(err) => {
                log::warn!("form POST to {endpoint} failed: {err}");
                return SubmitOutcome::network_error();
            }
        };
        let http_ok = resp.ok();
        if !http_ok {
            log::warn!("form POST to {endpoint}: {}", fetch_failed_message(resp.status()));
        }
        let body = resp.json::<serde_json::Value>().await.ok();
        interpret_submit_reply(http_ok, body.as_ref())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (endpoint, fields);
        SubmitOutcome::network_error()
    }
}
