use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct NewLeadRow {
    pub name: String,
    pub email: String,
    pub company: Option<String>,
    pub message: String,
}
