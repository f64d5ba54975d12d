use std::collections::BTreeMap;

use super::{
    firestore_value_model::{decode_fields, FirestoreValueModel},
    raw_document_model::RawDocument,
};

#[derive(Debug, serde_derive::Serialize, serde_derive::Deserialize)]
pub(crate) struct FirestoreDocumentModel {
    /// Full resource name, `projects/{p}/databases/{d}/documents/{collection}/{id}`.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(default)]
    pub fields: BTreeMap<String, FirestoreValueModel>,
}

impl From<FirestoreDocumentModel> for RawDocument {
    fn from(doc: FirestoreDocumentModel) -> Self {
        let id = doc.name.rsplit('/').next().unwrap_or_default().to_string();
        RawDocument {
            id,
            fields: decode_fields(doc.fields),
        }
    }
}

#[derive(Debug, Default, serde_derive::Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ListDocumentsResponseModel {
    #[serde(default)]
    pub documents: Vec<FirestoreDocumentModel>,
    #[serde(default)]
    pub next_page_token: Option<String>,
}

/// Google API error envelope, `{ "error": { "code", "message", "status" } }`.
#[derive(Debug, Default, serde_derive::Deserialize)]
pub(crate) struct FirestoreErrorResponseModel {
    #[serde(default)]
    pub error: FirestoreErrorModel,
}

#[derive(Debug, Default, serde_derive::Deserialize)]
pub(crate) struct FirestoreErrorModel {
    #[serde(default)]
    pub code: u16,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub status: String,
}
