//! Jobs domain actions - business logic functions
//!
//! Actions are async functions called directly from the HTTP handlers.
//! Auth checks are done at the route layer.

mod create_job;
mod delete_job;
mod queries;
mod update_job;

pub use create_job::create_job;
pub use delete_job::delete_job;
pub use queries::{get_job, list_jobs};
pub use update_job::update_job;

#[cfg(test)]
pub(crate) mod fixtures {
    use crate::domains::jobs::data::{CompanyInput, JobInput};

    pub fn job_input(email: &str) -> JobInput {
        JobInput {
            title: Some("Senior React Developer".into()),
            job_type: Some("Full-Time".into()),
            location: Some("Boston, MA".into()),
            description: Some("We are seeking a talented Front-End Developer".into()),
            salary: Some("$70K - $80K".into()),
            company: Some(CompanyInput {
                name: Some("NewTek Solutions".into()),
                description: Some("NewTek is a leading technology company".into()),
                contact_email: Some(email.into()),
                contact_phone: Some("555-555-5555".into()),
            }),
        }
    }
}
