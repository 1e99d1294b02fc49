use serde::{Deserialize, Serialize};

/// Operations the caller may offer on a legal document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentAction {
    Preview,
    Download,
    Send,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LegalDocument {
    pub id: String,
    pub title: String,
    pub purpose: String,
    pub actions: Vec<DocumentAction>,
}
