use serde::{Deserialize, Serialize};

/// A row of the `companies` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Company {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub logo_url: Option<String>,
}

/// A row of the `jobs` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Job {
    pub id: String,
    pub job_id: String,
    pub title: String,
    pub company_id: String,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub work_type: Option<String>,
    pub application_url: String,
    #[serde(default)]
    pub posted_date: Option<String>,
    /// Newline-delimited list.
    #[serde(default)]
    pub required_qualification: Option<String>,
    /// Newline-delimited list.
    #[serde(default)]
    pub preferred_qualification: Option<String>,
    #[serde(default)]
    pub job_description: Option<String>,
}

/// A job with its company embedded, as returned by the joined select.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobWithCompany {
    #[serde(flatten)]
    pub job: Job,
    #[serde(default)]
    pub company: Option<Company>,
}

impl JobWithCompany {
    pub fn id(&self) -> &str {
        &self.job.id
    }

    pub fn company_name(&self) -> Option<&str> {
        self.company
            .as_ref()
            .map(|c| c.name.as_str())
            .filter(|name| !name.is_empty())
    }

    pub fn logo_url(&self) -> Option<&str> {
        self.company
            .as_ref()
            .and_then(|c| c.logo_url.as_deref())
            .filter(|url| !url.trim().is_empty())
    }
}

/// Error document returned by PostgREST on failure.
#[derive(Debug, Clone, Deserialize)]
pub struct ServiceError {
    pub message: String,
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub details: Option<String>,
    #[serde(default)]
    pub hint: Option<String>,
}
