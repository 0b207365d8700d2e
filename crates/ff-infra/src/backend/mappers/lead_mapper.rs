use anyhow::Result;
use ff_core::lead::NewLeadRecord;

use crate::backend::models::NewLeadRow;
use crate::backend::ports::InsertMapper;

pub struct LeadRowMapper;

impl InsertMapper<NewLeadRecord, NewLeadRow> for LeadRowMapper {
    fn to_row(&self, domain: &NewLeadRecord) -> Result<NewLeadRow> {
        Ok(NewLeadRow {
            name: domain.name.clone(),
            email: domain.email.clone(),
            company: domain.company.clone(),
            message: domain.message.clone(),
        })
    }
}
