//! End-to-end tests: the client against an in-process server.
//!
//! The server runs on an ephemeral port with the in-memory stores, so no
//! database is needed.

use std::sync::Arc;

use jobboard_client::{
    report, ClientError, Company, FileSessionStore, JobBoardClient, MemorySessionStore, NewJob,
    Notification, RecordingNotifier, SessionStore, SignupRequest,
};
use jobboard_core::kernel::TestDependencies;
use jobboard_core::server::{build_app, AppOptions};
use serde_json::json;
use tempfile::TempDir;

// ============================================================================
// Test Helpers
// ============================================================================

/// Start a server and return its base URL. The store handles stay with the caller.
async fn spawn_server() -> (String, TestDependencies) {
    let deps = TestDependencies::new();
    let app = build_app(deps.server_deps(), AppOptions::default());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (format!("http://{addr}"), deps)
}

fn signup_request(email: &str) -> SignupRequest {
    SignupRequest {
        name: "Jane Doe".into(),
        email: email.into(),
        password: "SecurePass123".into(),
        phone_number: "+358401234567".into(),
        gender: "female".into(),
        date_of_birth: "1990-01-01".into(),
        membership_status: "gold".into(),
    }
}

fn new_job(contact_email: &str) -> NewJob {
    NewJob {
        title: "Senior React Developer".into(),
        job_type: "Full-Time".into(),
        location: "Boston, MA".into(),
        description: "We are seeking a talented Front-End Developer".into(),
        salary: "$70K - $80K".into(),
        company: Company {
            name: "NewTek Solutions".into(),
            description: "NewTek is a leading technology company".into(),
            contact_email: contact_email.into(),
            contact_phone: "555-555-5555".into(),
        },
    }
}

async fn logged_in_client() -> (JobBoardClient, TestDependencies) {
    let (url, deps) = spawn_server().await;
    let client = JobBoardClient::new(url, Arc::new(MemorySessionStore::new()));
    client.signup(&signup_request("jane@example.com")).await.unwrap();
    (client, deps)
}

// ============================================================================
// Session handling
// ============================================================================

#[tokio::test]
async fn signup_persists_session_to_file() {
    let (url, _deps) = spawn_server().await;
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("session.json");
    let client = JobBoardClient::new(url.clone(), Arc::new(FileSessionStore::new(&path)));

    let session = client.signup(&signup_request("jane@example.com")).await.unwrap();

    assert_eq!(session.email, "jane@example.com");
    // A fresh client reading the same file is logged in
    let reopened = JobBoardClient::new(url, Arc::new(FileSessionStore::new(&path)));
    assert_eq!(reopened.session().unwrap(), Some(session));
    assert!(reopened.list_jobs(None).await.unwrap().is_empty());
}

#[tokio::test]
async fn login_replaces_session_and_logout_clears_it() {
    let (url, _deps) = spawn_server().await;
    let sessions = Arc::new(MemorySessionStore::new());
    let client = JobBoardClient::new(url, sessions.clone());
    client.signup(&signup_request("jane@example.com")).await.unwrap();
    client.logout().unwrap();
    assert!(sessions.load().unwrap().is_none());

    let session = client.login("jane@example.com", "SecurePass123").await.unwrap();

    assert_eq!(sessions.load().unwrap(), Some(session));
}

#[tokio::test]
async fn failed_login_surfaces_server_message_and_keeps_no_session() {
    let (url, _deps) = spawn_server().await;
    let sessions = Arc::new(MemorySessionStore::new());
    let client = JobBoardClient::new(url, sessions.clone());
    let notifier = RecordingNotifier::new();

    let result = client.login("nobody@example.com", "SecurePass123").await;
    let session = report(&notifier, result, "Login Successful");

    assert!(session.is_none());
    assert_eq!(
        notifier.notifications(),
        vec![Notification::Error("Incorrect email or password".into())]
    );
    assert!(sessions.load().unwrap().is_none());
}

#[tokio::test]
async fn job_calls_without_session_never_reach_server() {
    let (url, deps) = spawn_server().await;
    let client = JobBoardClient::new(url, Arc::new(MemorySessionStore::new()));

    let err = client.create_job(&new_job("a@acme.test")).await.unwrap_err();

    assert!(matches!(err, ClientError::Unauthenticated));
    assert!(deps.jobs.is_empty());
}

#[tokio::test]
async fn stale_token_is_reported_as_unauthorized() {
    let (url, _deps) = spawn_server().await;
    let sessions = Arc::new(MemorySessionStore::with_session(jobboard_client::Session {
        email: "jane@example.com".into(),
        token: "expired.or.forged".into(),
    }));
    let client = JobBoardClient::new(url, sessions);

    let err = client.list_jobs(None).await.unwrap_err();

    assert!(err.is_unauthorized());
    assert_eq!(err.to_string(), "Request is not authorized");
}

// ============================================================================
// Job actions
// ============================================================================

#[tokio::test]
async fn create_show_edit_delete() {
    let (client, deps) = logged_in_client().await;

    let created = client.create_job(&new_job("a@acme.test")).await.unwrap();
    assert_eq!(deps.jobs.len(), 1);

    let fetched = client.get_job(&created.id).await.unwrap();
    assert_eq!(fetched, created);

    let mut changes = NewJob::from(fetched);
    changes.salary = "$95K".into();
    let updated = client.update_job(&created.id, &changes).await.unwrap();
    assert_eq!(updated.salary, "$95K");
    assert_eq!(updated.id, created.id);

    let partial = client
        .update_job(&created.id, &json!({ "location": "Remote" }))
        .await
        .unwrap();
    assert_eq!(partial.location, "Remote");
    assert_eq!(partial.salary, "$95K");

    client.delete_job(&created.id).await.unwrap();
    assert!(deps.jobs.is_empty());

    let err = client.get_job(&created.id).await.unwrap_err();
    assert!(matches!(err, ClientError::Api { status: 404, .. }));
}

#[tokio::test]
async fn duplicate_contact_email_message_reaches_notifier() {
    let (client, _deps) = logged_in_client().await;
    client.create_job(&new_job("a@acme.test")).await.unwrap();
    let notifier = RecordingNotifier::new();

    let result = client.create_job(&new_job("a@acme.test")).await;
    report(&notifier, result, "Job Added Successfully");

    assert_eq!(
        notifier.notifications(),
        vec![Notification::Error("Email already in use".into())]
    );
}

#[tokio::test]
async fn list_with_limit_is_newest_first() {
    let (client, _deps) = logged_in_client().await;
    for i in 0..4 {
        client
            .create_job(&new_job(&format!("hr{i}@acme.test")))
            .await
            .unwrap();
    }

    let recent = client.list_jobs(Some(3)).await.unwrap();
    let all = client.list_jobs(None).await.unwrap();

    let emails: Vec<&str> = recent
        .iter()
        .map(|job| job.company.contact_email.as_str())
        .collect();
    assert_eq!(emails, vec!["hr3@acme.test", "hr2@acme.test", "hr1@acme.test"]);
    assert_eq!(all.len(), 4);
    assert_eq!(all[0].company.contact_email, "hr0@acme.test");
}

#[tokio::test]
async fn delete_unknown_job_reports_id() {
    let (client, _deps) = logged_in_client().await;
    let id = jobboard_core::common::JobId::new().to_string();

    let err = client.delete_job(&id).await.unwrap_err();

    assert_eq!(err.to_string(), format!("No job found with id {id}"));
}
