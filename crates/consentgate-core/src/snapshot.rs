//! Consent snapshot handed to the payment step

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ulid::Ulid;

use crate::error::ConsentResult;
use crate::flags::{Agreements, SignedDocuments};

/// Immutable record of the flags at the moment the gate opened.
///
/// The payment step receives this alongside its back callback. It is never
/// written anywhere by this crate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsentSnapshot {
    /// Unique id for this acceptance
    pub id: Ulid,
    /// When the proceed action succeeded
    pub accepted_at: DateTime<Utc>,
    pub agreements: Agreements,
    pub signed_documents: SignedDocuments,
}

impl ConsentSnapshot {
    pub(crate) fn capture(agreements: Agreements, signed_documents: SignedDocuments) -> Self {
        Self {
            id: Ulid::new(),
            accepted_at: Utc::now(),
            agreements,
            signed_documents,
        }
    }

    /// Whether the snapshot records full consent
    pub fn is_complete(&self) -> bool {
        self.agreements.all() && self.signed_documents.all()
    }

    /// Serialize to pretty JSON
    pub fn to_json(&self) -> ConsentResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parse from JSON
    pub fn from_json(json: &str) -> ConsentResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ConsentError;
    use crate::keys::{AgreementKey, DocumentKey};

    fn full() -> (Agreements, SignedDocuments) {
        let mut agreements = Agreements::default();
        let mut docs = SignedDocuments::default();
        for key in AgreementKey::ALL {
            agreements.toggle(key);
        }
        for key in DocumentKey::ALL {
            docs.sign(key);
        }
        (agreements, docs)
    }

    #[test]
    fn test_capture_copies_flags() {
        let (agreements, docs) = full();
        let snapshot = ConsentSnapshot::capture(agreements, docs);
        assert_eq!(snapshot.agreements, agreements);
        assert_eq!(snapshot.signed_documents, docs);
        assert!(snapshot.is_complete());
    }

    #[test]
    fn test_snapshots_have_distinct_ids() {
        let (agreements, docs) = full();
        let a = ConsentSnapshot::capture(agreements, docs);
        let b = ConsentSnapshot::capture(agreements, docs);
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_json_uses_camel_case() {
        let (agreements, docs) = full();
        let snapshot = ConsentSnapshot::capture(agreements, docs);
        let json = snapshot.to_json().unwrap();
        assert!(json.contains("\"acceptedAt\""));
        assert!(json.contains("\"signedDocuments\""));
        assert!(json.contains("\"form2848\": true"));

        let parsed = ConsentSnapshot::from_json(&json).unwrap();
        assert_eq!(parsed, snapshot);
    }

    #[test]
    fn test_from_json_rejects_garbage() {
        let err = ConsentSnapshot::from_json("{").unwrap_err();
        assert!(matches!(err, ConsentError::Serialization(_)));
    }
}
