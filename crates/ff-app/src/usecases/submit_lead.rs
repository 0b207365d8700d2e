use std::sync::Arc;

use ff_core::errors::LeadSubmitError;
use ff_core::lead::LeadForm;
use ff_core::ports::LeadRepositoryPort;
use tracing::info;

/// Records a contact-form submission. No identity is needed.
pub struct SubmitLead {
    leads: Arc<dyn LeadRepositoryPort>,
}

impl SubmitLead {
    pub fn from_ports(leads: Arc<dyn LeadRepositoryPort>) -> Self {
        Self { leads }
    }

    #[tracing::instrument(name = "usecase.submit_lead.execute", skip(self, form))]
    pub async fn execute(&self, form: &LeadForm) -> Result<(), LeadSubmitError> {
        let record = form.validate()?;
        self.leads.insert_lead(&record).await?;
        info!(has_company = record.company.is_some(), "lead submitted");
        Ok(())
    }
}
