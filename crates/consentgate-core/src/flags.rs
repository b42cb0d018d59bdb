//! Flag maps for agreements and signed documents
//!
//! Each map is a flat struct with one `bool` per key. Agreements flip both
//! ways; documents only ever go from unsigned to signed.

use serde::{Deserialize, Serialize};

use crate::keys::{AgreementKey, DocumentKey};

/// Checkbox agreements the client has acknowledged.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Agreements {
    pub no_direct_payments: bool,
    pub retainer_credit: bool,
    #[serde(rename = "phase2Understanding")]
    pub phase2_understanding: bool,
}

impl Agreements {
    /// Current value for a key
    pub fn get(&self, key: AgreementKey) -> bool {
        match key {
            AgreementKey::NoDirectPayments => self.no_direct_payments,
            AgreementKey::RetainerCredit => self.retainer_credit,
            AgreementKey::Phase2Understanding => self.phase2_understanding,
        }
    }

    fn slot(&mut self, key: AgreementKey) -> &mut bool {
        match key {
            AgreementKey::NoDirectPayments => &mut self.no_direct_payments,
            AgreementKey::RetainerCredit => &mut self.retainer_credit,
            AgreementKey::Phase2Understanding => &mut self.phase2_understanding,
        }
    }

    /// Flip a flag and return its new value
    pub fn toggle(&mut self, key: AgreementKey) -> bool {
        let slot = self.slot(key);
        *slot = !*slot;
        *slot
    }

    /// Pairs of key and value in display order
    pub fn iter(&self) -> impl Iterator<Item = (AgreementKey, bool)> + '_ {
        AgreementKey::ALL.into_iter().map(move |key| (key, self.get(key)))
    }

    /// True when every agreement is checked
    pub fn all(&self) -> bool {
        self.iter().all(|(_, checked)| checked)
    }
}

/// Documents the client has signed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignedDocuments {
    pub service_agreement: bool,
    #[serde(rename = "form8821")]
    pub form_8821: bool,
    #[serde(rename = "form2848")]
    pub form_2848: bool,
}

impl SignedDocuments {
    /// Current value for a key
    pub fn get(&self, key: DocumentKey) -> bool {
        match key {
            DocumentKey::ServiceAgreement => self.service_agreement,
            DocumentKey::Form8821 => self.form_8821,
            DocumentKey::Form2848 => self.form_2848,
        }
    }

    /// Mark a document signed. Returns true if it was previously unsigned.
    pub fn sign(&mut self, key: DocumentKey) -> bool {
        let slot = match key {
            DocumentKey::ServiceAgreement => &mut self.service_agreement,
            DocumentKey::Form8821 => &mut self.form_8821,
            DocumentKey::Form2848 => &mut self.form_2848,
        };
        let changed = !*slot;
        *slot = true;
        changed
    }

    /// Pairs of key and value in display order
    pub fn iter(&self) -> impl Iterator<Item = (DocumentKey, bool)> + '_ {
        DocumentKey::ALL.into_iter().map(move |key| (key, self.get(key)))
    }

    /// True when every document is signed
    pub fn all(&self) -> bool {
        self.iter().all(|(_, signed)| signed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_false() {
        assert!(Agreements::default().iter().all(|(_, v)| !v));
        assert!(SignedDocuments::default().iter().all(|(_, v)| !v));
    }

    #[test]
    fn test_toggle_flips_only_its_key() {
        let mut agreements = Agreements::default();
        assert!(agreements.toggle(AgreementKey::RetainerCredit));
        assert!(agreements.retainer_credit);
        assert!(!agreements.no_direct_payments);
        assert!(!agreements.phase2_understanding);

        assert!(!agreements.toggle(AgreementKey::RetainerCredit));
        assert_eq!(agreements, Agreements::default());
    }

    #[test]
    fn test_sign_reports_change_once() {
        let mut docs = SignedDocuments::default();
        assert!(docs.sign(DocumentKey::Form8821));
        assert!(!docs.sign(DocumentKey::Form8821));
        assert!(docs.get(DocumentKey::Form8821));
        assert!(!docs.get(DocumentKey::Form2848));
    }

    #[test]
    fn test_all_requires_every_key() {
        let mut docs = SignedDocuments::default();
        docs.sign(DocumentKey::ServiceAgreement);
        docs.sign(DocumentKey::Form8821);
        assert!(!docs.all());
        docs.sign(DocumentKey::Form2848);
        assert!(docs.all());
    }

    #[test]
    fn test_serde_field_names() {
        let docs = SignedDocuments {
            service_agreement: true,
            form_8821: false,
            form_2848: true,
        };
        let json = serde_json::to_value(docs).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "serviceAgreement": true,
                "form8821": false,
                "form2848": true,
            })
        );

        let agreements: Agreements = serde_json::from_str(
            r#"{"noDirectPayments":true,"retainerCredit":false,"phase2Understanding":true}"#,
        )
        .unwrap();
        assert!(agreements.get(AgreementKey::NoDirectPayments));
        assert!(agreements.get(AgreementKey::Phase2Understanding));
    }
}
