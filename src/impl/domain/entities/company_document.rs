use std::fmt;

use super::{period_data::PeriodData, view_mode::ViewMode};

/// Store-assigned document identifier. Stable for the lifetime of the
/// document.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DocumentId(pub String);

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for DocumentId {
    fn from(s: &str) -> Self {
        DocumentId(s.to_string())
    }
}

#[derive(Debug, Clone, Default, PartialEq, serde_derive::Serialize, serde_derive::Deserialize)]
pub struct Company {
    #[serde(rename = "Company Common Name")]
    pub common_name: String,
    #[serde(rename = "Actual")]
    pub actual: PeriodData,
    #[serde(rename = "Previous")]
    pub previous: PeriodData,
}

/// The `data` field of a stored document. Also the root shape of import files.
#[derive(Debug, Clone, Default, PartialEq, serde_derive::Serialize, serde_derive::Deserialize)]
pub struct CompanyRootData {
    #[serde(rename = "Company")]
    pub company: Company,
}

impl CompanyRootData {
    pub fn period(&self, mode: ViewMode) -> &PeriodData {
        match mode {
            ViewMode::Actual => &self.company.actual,
            ViewMode::Previous => &self.company.previous,
        }
    }
}

/// Everything a create or update sends to the store, i.e. a document without
/// its id.
#[derive(Debug, Clone, Default, PartialEq, serde_derive::Serialize)]
pub struct CompanyPayload {
    pub data: CompanyRootData,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CompanyDocument {
    pub id: DocumentId,
    pub data: CompanyRootData,
}

impl CompanyDocument {
    pub fn display_name(&self) -> &str {
        &self.data.company.common_name
    }
}
