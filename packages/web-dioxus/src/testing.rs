//! Test doubles shared by the state and component tests.

use std::sync::Mutex;

use async_trait::async_trait;
use jobs_client::{ClientError, Job, JobSource, JobWithCompany, PageWindow};

pub fn job(id: &str) -> JobWithCompany {
    JobWithCompany {
        job: Job {
            id: id.to_string(),
            job_id: format!("ext-{id}"),
            title: format!("Job {id}"),
            company_id: "c".to_string(),
            location: None,
            work_type: None,
            application_url: "https://example.com/apply".to_string(),
            posted_date: None,
            required_qualification: None,
            preferred_qualification: None,
            job_description: None,
        },
        company: None,
    }
}

pub fn jobs(range: std::ops::Range<usize>) -> Vec<JobWithCompany> {
    range.map(|i| job(&i.to_string())).collect()
}

/// Returns scripted pages in order and records every requested window.
///
/// Once the script runs out every further page is empty.
pub struct ScriptedSource {
    responses: Mutex<Vec<Result<Vec<JobWithCompany>, ClientError>>>,
    calls: Mutex<Vec<PageWindow>>,
}

impl ScriptedSource {
    pub fn new(mut responses: Vec<Result<Vec<JobWithCompany>, ClientError>>) -> Self {
        responses.reverse();
        Self {
            responses: Mutex::new(responses),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<PageWindow> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl JobSource for ScriptedSource {
    async fn fetch_page(&self, window: PageWindow) -> jobs_client::Result<Vec<JobWithCompany>> {
        self.calls.lock().unwrap().push(window);
        self.responses
            .lock()
            .unwrap()
            .pop()
            .unwrap_or_else(|| Ok(Vec::new()))
    }
}

/// Records the request and never answers.
#[derive(Default)]
pub struct HangingSource {
    calls: Mutex<Vec<PageWindow>>,
}

impl HangingSource {
    pub fn calls(&self) -> Vec<PageWindow> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl JobSource for HangingSource {
    async fn fetch_page(&self, window: PageWindow) -> jobs_client::Result<Vec<JobWithCompany>> {
        self.calls.lock().unwrap().push(window);
        futures::future::pending().await
    }
}
