//! Contact-form leads.

use serde::{Deserialize, Serialize};

use crate::errors::LeadSubmitError;

/// What the visitor typed into the contact form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LeadForm {
    pub name: String,
    pub email: String,
    pub company: String,
    pub message: String,
}

/// Row inserted into the `leads` collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewLeadRecord {
    pub name: String,
    pub email: String,
    pub company: Option<String>,
    pub message: String,
}

impl LeadForm {
    pub fn validate(&self) -> Result<NewLeadRecord, LeadSubmitError> {
        let name = required("name", &self.name)?;
        let email = required("email", &self.email)?;
        let message = required("message", &self.message)?;

        match email.split_once('@') {
            Some((local, domain)) if !local.is_empty() && !domain.is_empty() => {}
            _ => return Err(LeadSubmitError::InvalidEmail(email)),
        }

        let company = match self.company.trim() {
            "" => None,
            company => Some(company.to_string()),
        };

        Ok(NewLeadRecord {
            name,
            email,
            company,
            message,
        })
    }
}

fn required(field: &'static str, value: &str) -> Result<String, LeadSubmitError> {
    match value.trim() {
        "" => Err(LeadSubmitError::MissingField { field }),
        v => Ok(v.to_string()),
    }
}
