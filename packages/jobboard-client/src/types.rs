use serde::{Deserialize, Serialize};

/// Stored proof of a signup or login
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub email: String,
    pub token: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Company {
    pub name: String,
    pub description: String,
    pub contact_email: String,
    pub contact_phone: String,
}

/// Job as the API returns it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    pub id: String,
    pub title: String,
    #[serde(rename = "type")]
    pub job_type: String,
    pub location: String,
    pub description: String,
    pub salary: String,
    pub company: Company,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

/// Body for creating a job
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewJob {
    pub title: String,
    #[serde(rename = "type")]
    pub job_type: String,
    pub location: String,
    pub description: String,
    pub salary: String,
    pub company: Company,
}

impl From<Job> for NewJob {
    fn from(job: Job) -> Self {
        Self {
            title: job.title,
            job_type: job.job_type,
            location: job.location,
            description: job.description,
            salary: job.salary,
            company: job.company,
        }
    }
}

/// Body for `POST /api/users/signup`
#[derive(Debug, Clone, Default, Serialize)]
pub struct SignupRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub phone_number: String,
    pub gender: String,
    pub date_of_birth: String,
    pub membership_status: String,
}

#[derive(Debug, Clone, Serialize)]
pub(crate) struct LoginRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

/// Error body: job endpoints use `error`, account endpoints use `message`
#[derive(Debug, Default, Deserialize)]
pub(crate) struct ErrorBody {
    pub error: Option<String>,
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_job_parses_api_shape() {
        let job: Job = serde_json::from_value(json!({
            "id": "0190f5c2-0000-7000-8000-000000000000",
            "title": "Engineer",
            "type": "Full-Time",
            "location": "Helsinki",
            "description": "Build things",
            "salary": "50k",
            "company": {
                "name": "Acme",
                "description": "Widgets",
                "contactEmail": "hr@acme.test",
                "contactPhone": "+358"
            },
            "createdAt": "2024-06-01T00:00:00Z",
            "updatedAt": "2024-06-01T00:00:00Z"
        }))
        .unwrap();

        assert_eq!(job.job_type, "Full-Time");
        assert_eq!(job.company.contact_email, "hr@acme.test");
    }

    #[test]
    fn test_new_job_serializes_type_key() {
        let new_job = NewJob {
            title: "Engineer".into(),
            job_type: "Part-Time".into(),
            location: "Remote".into(),
            description: "d".into(),
            salary: "s".into(),
            company: Company {
                name: "Acme".into(),
                description: "Widgets".into(),
                contact_email: "hr@acme.test".into(),
                contact_phone: "+358".into(),
            },
        };

        let value = serde_json::to_value(new_job).unwrap();
        assert_eq!(value["type"], "Part-Time");
        assert_eq!(value["company"]["contactPhone"], "+358");
    }
}
