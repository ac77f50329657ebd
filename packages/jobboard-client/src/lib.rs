//! Job board API client.
//!
//! Wraps the REST API with one method per user action. Signup and login store
//! the returned session; every other call sends its token as a bearer
//! credential.
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use jobboard_client::{FileSessionStore, JobBoardClient};
//!
//! let sessions = Arc::new(FileSessionStore::new(FileSessionStore::default_path()));
//! let client = JobBoardClient::new("http://localhost:4000", sessions);
//!
//! client.login("jane@example.com", "SecurePass123").await?;
//! for job in client.list_jobs(Some(3)).await? {
//!     println!("{} ({})", job.title, job.location);
//! }
//! ```

pub mod error;
pub mod notify;
pub mod session;
pub mod types;

pub use error::{ClientError, Result};
pub use notify::{report, Notification, Notifier, RecordingNotifier, TerminalNotifier};
pub use session::{FileSessionStore, MemorySessionStore, SessionStore};
pub use types::{Company, Job, NewJob, Session, SignupRequest};

use std::sync::Arc;

use reqwest::{Method, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use types::{ErrorBody, LoginRequest};

pub const DEFAULT_API_URL: &str = "http://localhost:4000";

pub struct JobBoardClient {
    client: reqwest::Client,
    base_url: String,
    sessions: Arc<dyn SessionStore>,
}

impl JobBoardClient {
    pub fn new(base_url: impl Into<String>, sessions: Arc<dyn SessionStore>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            sessions,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    // =========================================================================
    // Session
    // =========================================================================

    /// The stored session, if any
    pub fn session(&self) -> Result<Option<Session>> {
        self.sessions.load()
    }

    /// Route guard: the stored session, or `Unauthenticated`
    pub fn require_session(&self) -> Result<Session> {
        self.sessions.load()?.ok_or(ClientError::Unauthenticated)
    }

    pub async fn signup(&self, request: &SignupRequest) -> Result<Session> {
        let resp = self
            .client
            .post(self.url("/api/users/signup"))
            .json(request)
            .send()
            .await?;

        let session: Session = parse(resp).await?;
        self.sessions.save(&session)?;
        tracing::info!(email = %session.email, "Signed up");
        Ok(session)
    }

    pub async fn login(&self, email: &str, password: &str) -> Result<Session> {
        let resp = self
            .client
            .post(self.url("/api/users/login"))
            .json(&LoginRequest { email, password })
            .send()
            .await?;

        let session: Session = parse(resp).await?;
        self.sessions.save(&session)?;
        tracing::info!(email = %session.email, "Logged in");
        Ok(session)
    }

    /// Forget the stored session. The token itself stays valid until it expires.
    pub fn logout(&self) -> Result<()> {
        self.sessions.clear()
    }

    // =========================================================================
    // Jobs
    // =========================================================================

    fn authed(&self, method: Method, path: &str) -> Result<RequestBuilder> {
        let session = self.require_session()?;
        Ok(self
            .client
            .request(method, self.url(path))
            .bearer_auth(session.token))
    }

    /// All jobs, or the `limit` newest ones newest-first
    pub async fn list_jobs(&self, limit: Option<u32>) -> Result<Vec<Job>> {
        let mut request = self.authed(Method::GET, "/api/jobs")?;
        if let Some(limit) = limit {
            request = request.query(&[("_limit", limit)]);
        }
        parse(request.send().await?).await
    }

    pub async fn get_job(&self, id: &str) -> Result<Job> {
        let request = self.authed(Method::GET, &format!("/api/jobs/{id}"))?;
        parse(request.send().await?).await
    }

    pub async fn create_job(&self, job: &NewJob) -> Result<Job> {
        let request = self.authed(Method::POST, "/api/jobs/create")?;
        parse(request.json(job).send().await?).await
    }

    /// Send `changes` as a partial update and return the stored result
    pub async fn update_job<T: Serialize + ?Sized>(&self, id: &str, changes: &T) -> Result<Job> {
        let request = self.authed(Method::PUT, &format!("/api/jobs/{id}"))?;
        parse(request.json(changes).send().await?).await
    }

    pub async fn delete_job(&self, id: &str) -> Result<()> {
        let request = self.authed(Method::DELETE, &format!("/api/jobs/{id}"))?;
        let resp = request.send().await?;
        check(resp).await.map(|_| ())
    }
}

/// Turn a non-success response into `ClientError::Api` with the server's message
async fn check(resp: Response) -> Result<Response> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }

    let body = resp.text().await.unwrap_or_default();
    Err(ClientError::Api {
        status: status.as_u16(),
        message: error_message(status, &body),
    })
}

async fn parse<T: DeserializeOwned>(resp: Response) -> Result<T> {
    let bytes = check(resp).await?.bytes().await?;
    Ok(serde_json::from_slice(&bytes)?)
}

fn error_message(status: StatusCode, body: &str) -> String {
    let parsed: ErrorBody = serde_json::from_str(body).unwrap_or_default();
    parsed
        .error
        .or(parsed.message)
        .filter(|message| !message.is_empty())
        .unwrap_or_else(|| {
            status
                .canonical_reason()
                .unwrap_or("Request failed")
                .to_string()
        })
}
