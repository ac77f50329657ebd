//! Request shapes for the job endpoints.
//!
//! Every field is optional at this layer so that a missing field can be
//! reported with the fixed "All fields must be filled" message instead of a
//! deserializer error.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::domains::jobs::models::{Company, Job};

/// Body of `POST /api/jobs/create`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobInput {
    #[serde(default, deserialize_with = "text")]
    pub title: Option<String>,
    #[serde(rename = "type", default, deserialize_with = "text")]
    pub job_type: Option<String>,
    #[serde(default, deserialize_with = "text")]
    pub location: Option<String>,
    #[serde(default, deserialize_with = "text")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "text")]
    pub salary: Option<String>,
    pub company: Option<CompanyInput>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyInput {
    #[serde(default, deserialize_with = "text")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "text")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "text")]
    pub contact_email: Option<String>,
    #[serde(default, deserialize_with = "text")]
    pub contact_phone: Option<String>,
}

/// Body of `PUT /api/jobs/:id` - only the supplied fields are written.
///
/// Unknown keys (`id`, `createdAt`, ...) are ignored so a client can send back
/// the whole record it received.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobPatch {
    #[serde(default, deserialize_with = "text")]
    pub title: Option<String>,
    #[serde(rename = "type", default, deserialize_with = "text")]
    pub job_type: Option<String>,
    #[serde(default, deserialize_with = "text")]
    pub location: Option<String>,
    #[serde(default, deserialize_with = "text")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "text")]
    pub salary: Option<String>,
    pub company: Option<CompanyPatch>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyPatch {
    #[serde(default, deserialize_with = "text")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "text")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "text")]
    pub contact_email: Option<String>,
    #[serde(default, deserialize_with = "text")]
    pub contact_phone: Option<String>,
}

impl JobPatch {
    /// Merge the supplied fields into `job`
    pub fn apply_to(&self, job: &mut Job) {
        overwrite(&mut job.title, &self.title);
        overwrite(&mut job.job_type, &self.job_type);
        overwrite(&mut job.location, &self.location);
        overwrite(&mut job.description, &self.description);
        overwrite(&mut job.salary, &self.salary);
        if let Some(company) = &self.company {
            company.apply_to(&mut job.company);
        }
    }

    /// Contact email this patch would write, if any
    pub fn contact_email(&self) -> Option<&str> {
        self.company.as_ref()?.contact_email.as_deref()
    }
}

impl CompanyPatch {
    pub fn apply_to(&self, company: &mut Company) {
        overwrite(&mut company.name, &self.name);
        overwrite(&mut company.description, &self.description);
        overwrite(&mut company.contact_email, &self.contact_email);
        overwrite(&mut company.contact_phone, &self.contact_phone);
    }
}

/// Text fields also take JSON numbers and booleans, stored in their string
/// form. `null` counts as absent.
fn text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(text)) => Ok(Some(text)),
        Some(Value::Number(number)) => Ok(Some(number.to_string())),
        Some(Value::Bool(flag)) => Ok(Some(flag.to_string())),
        Some(_) => Err(serde::de::Error::custom("expected a text value")),
    }
}

fn overwrite(field: &mut String, value: &Option<String>) {
    if let Some(value) = value {
        field.clone_from(value);
    }
}

/// Query string of `GET /api/jobs`. `_limit` wins when both names are sent.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListJobsQuery {
    #[serde(rename = "_limit")]
    pub underscored_limit: Option<String>,
    pub limit: Option<String>,
}

impl ListJobsQuery {
    /// The requested cap, if it is a positive integer. Anything else means
    /// "no limit".
    pub fn limit(&self) -> Option<i64> {
        self.underscored_limit
            .as_deref()
            .or(self.limit.as_deref())
            .and_then(|raw| raw.trim().parse::<i64>().ok())
            .filter(|limit| *limit > 0)
    }
}
