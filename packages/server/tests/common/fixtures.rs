//! Test fixtures for creating test data.

use serde_json::{json, Value};

/// A complete job payload as the frontend sends it
pub fn job_payload(contact_email: &str) -> Value {
    json!({
        "title": "Senior React Developer",
        "type": "Full-Time",
        "location": "Boston, MA",
        "description": "We are seeking a talented Front-End Developer to join our team in Boston, MA.",
        "salary": "$70K - $80K",
        "company": {
            "name": "NewTek Solutions",
            "description": "NewTek Solutions is a leading technology company specializing in web development and digital solutions.",
            "contactEmail": contact_email,
            "contactPhone": "555-555-5555"
        }
    })
}

/// A complete signup payload as the frontend sends it
pub fn signup_payload(email: &str, password: &str) -> Value {
    json!({
        "name": "Jane Doe",
        "email": email,
        "password": password,
        "phone_number": "+358401234567",
        "gender": "female",
        "date_of_birth": "1990-01-01",
        "membership_status": "active"
    })
}
