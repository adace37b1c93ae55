//! Read-only client for the job feed stored in a Supabase project.
//!
//! Talks to the project's PostgREST endpoint with the public (anon) key and
//! returns jobs joined with their company, newest first, one page window at a
//! time.
//!
//! # Example
//!
//! ```rust,ignore
//! use jobs_client::{JobsClient, PageWindow};
//!
//! let client = JobsClient::new("https://xyz.supabase.co", "public-anon-key");
//!
//! let jobs = client.fetch_jobs(PageWindow::for_page(0, 10)).await?;
//! for job in &jobs {
//!     println!("{} at {}", job.job.title, job.company_name().unwrap_or("?"));
//! }
//! ```

pub mod error;
pub mod query;
pub mod source;
pub mod types;

pub use error::{ClientError, Result};
pub use query::PageWindow;
pub use source::JobSource;
pub use types::{Company, Job, JobWithCompany, ServiceError};

use async_trait::async_trait;
use reqwest::header::ACCEPT;

const REST_PATH: &str = "/rest/v1";
const JOBS_TABLE: &str = "jobs";

#[derive(Debug, Clone)]
pub struct JobsClient {
    client: reqwest::Client,
    project_url: String,
    anon_key: String,
}

impl JobsClient {
    pub fn new(project_url: impl Into<String>, anon_key: impl Into<String>) -> Self {
        Self::with_client(project_url, anon_key, reqwest::Client::new())
    }

    /// Use a preconfigured HTTP client (timeouts, proxies, ...).
    pub fn with_client(
        project_url: impl Into<String>,
        anon_key: impl Into<String>,
        client: reqwest::Client,
    ) -> Self {
        let project_url = project_url.into();
        Self {
            client,
            project_url: project_url.trim_end_matches('/').to_string(),
            anon_key: anon_key.into(),
        }
    }

    pub fn jobs_endpoint(&self) -> String {
        format!("{}{}/{}", self.project_url, REST_PATH, JOBS_TABLE)
    }

    /// Fetch one window of jobs ordered by posted date, newest first.
    pub async fn fetch_jobs(&self, window: PageWindow) -> Result<Vec<JobWithCompany>> {
        tracing::debug!(
            offset = window.offset,
            last = window.last(),
            "Fetching jobs page"
        );

        let resp = self
            .client
            .get(self.jobs_endpoint())
            .query(&query::jobs_query(window))
            .header("apikey", &self.anon_key)
            .bearer_auth(&self.anon_key)
            .header(ACCEPT, "application/json")
            .send()
            .await?;

        let status = resp.status();
        let body = resp.text().await?;

        if !status.is_success() {
            let err = api_error(status.as_u16(), status.canonical_reason(), &body);
            tracing::warn!(status = status.as_u16(), error = %err, "Jobs query rejected");
            return Err(err);
        }

        let jobs = decode_jobs(&body)?;
        tracing::debug!(count = jobs.len(), "Jobs page decoded");
        Ok(jobs)
    }
}

#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
impl JobSource for JobsClient {
    async fn fetch_page(&self, window: PageWindow) -> Result<Vec<JobWithCompany>> {
        self.fetch_jobs(window).await
    }
}

/// Decode a successful response body.
///
/// `null` or an empty body is a missing result, not an empty page.
pub fn decode_jobs(body: &str) -> Result<Vec<JobWithCompany>> {
    if body.trim().is_empty() {
        return Err(ClientError::NoData);
    }
    let jobs: Option<Vec<JobWithCompany>> = serde_json::from_str(body)?;
    jobs.ok_or(ClientError::NoData)
}

/// Build the error for a non-success response.
pub fn api_error(status: u16, reason: Option<&str>, body: &str) -> ClientError {
    let body = body.trim();
    let message = match serde_json::from_str::<ServiceError>(body) {
        Ok(service) => {
            tracing::debug!(
                status,
                code = service.code.as_deref(),
                details = service.details.as_deref(),
                hint = service.hint.as_deref(),
                "Data service error"
            );
            service.message
        }
        Err(_) if !body.is_empty() => body.to_string(),
        Err(_) => reason
            .map(str::to_string)
            .unwrap_or_else(|| format!("Request failed with status {status}")),
    };
    ClientError::api(status, message)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_ignores_trailing_slash() {
        let client = JobsClient::new("https://abc.supabase.co/", "anon");
        assert_eq!(client.jobs_endpoint(), "https://abc.supabase.co/rest/v1/jobs");
    }

    #[test]
    fn decodes_page_in_server_order() {
        let body = r#"[
            {"id":"b","job_id":"2","title":"Second","company_id":"c","application_url":"u","posted_date":"2024-03-06"},
            {"id":"a","job_id":"1","title":"First","company_id":"c","application_url":"u","posted_date":"2024-03-05"}
        ]"#;

        let jobs = decode_jobs(body).unwrap();
        let ids: Vec<_> = jobs.iter().map(|j| j.id()).collect();
        assert_eq!(ids, vec!["b", "a"]);
    }

    #[test]
    fn empty_array_is_an_empty_page() {
        assert!(decode_jobs("[]").unwrap().is_empty());
    }

    #[test]
    fn null_or_empty_body_is_no_data() {
        assert!(matches!(decode_jobs("null"), Err(ClientError::NoData)));
        assert!(matches!(decode_jobs("  "), Err(ClientError::NoData)));
        assert_eq!(decode_jobs("null").unwrap_err().to_string(), "No data received");
    }

    #[test]
    fn non_array_body_is_malformed() {
        assert!(matches!(decode_jobs(r#"{"id":"1"}"#), Err(ClientError::Malformed(_))));
        assert!(matches!(decode_jobs("<html>"), Err(ClientError::Malformed(_))));
    }

    #[test]
    fn service_error_message_is_surfaced() {
        let body = r#"{"code":"42P01","details":null,"hint":null,"message":"relation \"public.jobs\" does not exist"}"#;
        let err = api_error(404, Some("Not Found"), body);

        assert!(matches!(err, ClientError::Api { status: 404, .. }));
        assert_eq!(err.to_string(), "relation \"public.jobs\" does not exist");
    }

    #[test]
    fn api_error_falls_back_to_body_then_reason() {
        let err = api_error(502, Some("Bad Gateway"), "upstream timed out");
        assert_eq!(err.to_string(), "upstream timed out");

        let err = api_error(503, Some("Service Unavailable"), "");
        assert_eq!(err.to_string(), "Service Unavailable");

        let err = api_error(599, None, "");
        assert_eq!(err.to_string(), "Request failed with status 599");
    }
}
