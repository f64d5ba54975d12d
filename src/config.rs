use fractic_server_error::ServerError;

use crate::errors::MissingConfig;

pub const DEFAULT_COLLECTION: &str = "companyData";
pub const DEFAULT_DATABASE: &str = "(default)";
pub const DEFAULT_FIRESTORE_BASE_URL: &str = "https://firestore.googleapis.com/v1";

/// Connection settings for the remote document store.
#[derive(Clone, Debug)]
pub struct DashboardConfig {
    pub project_id: String,
    pub database: String,
    pub collection: String,
    /// Sent as the `key` query parameter when present.
    pub api_key: Option<String>,
    pub base_url: String,
}

impl DashboardConfig {
    pub fn new(project_id: impl Into<String>) -> Self {
        Self {
            project_id: project_id.into(),
            database: DEFAULT_DATABASE.to_string(),
            collection: DEFAULT_COLLECTION.to_string(),
            api_key: None,
            base_url: DEFAULT_FIRESTORE_BASE_URL.to_string(),
        }
    }

    pub fn from_env() -> Result<Self, ServerError> {
        let project_id = std::env::var("FIRESTORE_PROJECT_ID")
            .map_err(|_| MissingConfig::new("FIRESTORE_PROJECT_ID"))?;

        let api_key = std::env::var("FIRESTORE_API_KEY")
            .ok()
            .filter(|k| !k.is_empty());

        let database =
            std::env::var("FIRESTORE_DATABASE").unwrap_or_else(|_| DEFAULT_DATABASE.to_string());

        let collection = std::env::var("DASHBOARD_COLLECTION")
            .unwrap_or_else(|_| DEFAULT_COLLECTION.to_string());

        let base_url = std::env::var("FIRESTORE_BASE_URL")
            .unwrap_or_else(|_| DEFAULT_FIRESTORE_BASE_URL.to_string());

        Ok(Self {
            project_id,
            database,
            collection,
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Root of the collection, e.g.
    /// `https://firestore.googleapis.com/v1/projects/p/databases/(default)/documents/companyData`.
    pub fn collection_url(&self) -> String {
        format!(
            "{}/projects/{}/databases/{}/documents/{}",
            self.base_url, self.project_id, self.database, self.collection
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collection_url_uses_defaults() {
        let config = DashboardConfig::new("esg-dashboard");
        assert_eq!(
            config.collection_url(),
            "https://firestore.googleapis.com/v1/projects/esg-dashboard/databases/(default)/documents/companyData"
        );
        assert!(config.api_key.is_none());
    }
}
