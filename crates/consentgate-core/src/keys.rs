//! Requirement keys for the terms screen
//!
//! Two fixed key sets drive the gate: documents the client signs and
//! statements the client acknowledges. Key names serialize to the camelCase
//! identifiers used by the intake form.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ConsentError;

/// A statement the client must acknowledge by checking a box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AgreementKey {
    /// No payments are made to the IRS through this agreement
    NoDirectPayments,
    /// The retainer is credited toward the resolution cost
    RetainerCredit,
    /// Phase 2 waits for the retainer to be paid in full
    #[serde(rename = "phase2Understanding")]
    Phase2Understanding,
}

impl AgreementKey {
    /// All agreements in display order
    pub const ALL: [AgreementKey; 3] = [
        AgreementKey::NoDirectPayments,
        AgreementKey::RetainerCredit,
        AgreementKey::Phase2Understanding,
    ];

    /// Wire name of the key
    pub fn as_str(&self) -> &'static str {
        match self {
            AgreementKey::NoDirectPayments => "noDirectPayments",
            AgreementKey::RetainerCredit => "retainerCredit",
            AgreementKey::Phase2Understanding => "phase2Understanding",
        }
    }

    /// The statement shown next to the checkbox
    pub fn statement(&self) -> &'static str {
        match self {
            AgreementKey::NoDirectPayments => {
                "I understand that I am not making direct payments to the IRS through this agreement."
            }
            AgreementKey::RetainerCredit => {
                "I understand that the retainer paid will be credited toward the overall resolution cost."
            }
            AgreementKey::Phase2Understanding => {
                "I understand that Phase 2 will not commence until the retainer is paid in full."
            }
        }
    }
}

impl fmt::Display for AgreementKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AgreementKey {
    type Err = ConsentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AgreementKey::ALL
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| ConsentError::UnknownAgreement(s.to_string()))
    }
}

/// A document the client executes with a one-way sign action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum DocumentKey {
    #[serde(rename = "serviceAgreement")]
    ServiceAgreement,
    /// IRS Form 8821, Tax Information Authorization
    #[serde(rename = "form8821")]
    Form8821,
    /// IRS Form 2848, Power of Attorney
    #[serde(rename = "form2848")]
    Form2848,
}

impl DocumentKey {
    /// All documents in display order
    pub const ALL: [DocumentKey; 3] = [
        DocumentKey::ServiceAgreement,
        DocumentKey::Form8821,
        DocumentKey::Form2848,
    ];

    /// Wire name of the key
    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentKey::ServiceAgreement => "serviceAgreement",
            DocumentKey::Form8821 => "form8821",
            DocumentKey::Form2848 => "form2848",
        }
    }

    /// Card title
    pub fn title(&self) -> &'static str {
        match self {
            DocumentKey::ServiceAgreement => "Service Agreement",
            DocumentKey::Form8821 => "Form 8821: Tax Information Authorization",
            DocumentKey::Form2848 => {
                "Form 2848: Power of Attorney and Declaration of Representative"
            }
        }
    }

    /// Card description
    pub fn description(&self) -> &'static str {
        match self {
            DocumentKey::ServiceAgreement => "Terms and conditions of our service",
            DocumentKey::Form8821 => "Allows us to retrieve the necessary documents from the IRS",
            DocumentKey::Form2848 => "Allow us to represent you",
        }
    }
}

impl fmt::Display for DocumentKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DocumentKey {
    type Err = ConsentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DocumentKey::ALL
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| ConsentError::UnknownDocument(s.to_string()))
    }
}

/// Either kind of condition the gate waits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "key", rename_all = "camelCase")]
pub enum Requirement {
    Document(DocumentKey),
    Agreement(AgreementKey),
}

impl Requirement {
    /// Every requirement, documents first, in display order
    pub fn all() -> impl Iterator<Item = Requirement> {
        DocumentKey::ALL
            .into_iter()
            .map(Requirement::Document)
            .chain(AgreementKey::ALL.into_iter().map(Requirement::Agreement))
    }

    /// Wire name of the underlying key
    pub fn as_str(&self) -> &'static str {
        match self {
            Requirement::Document(key) => key.as_str(),
            Requirement::Agreement(key) => key.as_str(),
        }
    }

    /// Short human label: the document title or the agreement statement
    pub fn label(&self) -> &'static str {
        match self {
            Requirement::Document(key) => key.title(),
            Requirement::Agreement(key) => key.statement(),
        }
    }
}

impl fmt::Display for Requirement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Requirement::Document(key) => write!(f, "sign {}", key),
            Requirement::Agreement(key) => write!(f, "agree {}", key),
        }
    }
}

impl FromStr for Requirement {
    type Err = ConsentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Ok(key) = s.parse::<DocumentKey>() {
            return Ok(Requirement::Document(key));
        }
        if let Ok(key) = s.parse::<AgreementKey>() {
            return Ok(Requirement::Agreement(key));
        }
        Err(ConsentError::UnknownRequirement(s.to_string()))
    }
}

impl From<DocumentKey> for Requirement {
    fn from(key: DocumentKey) -> Self {
        Requirement::Document(key)
    }
}

impl From<AgreementKey> for Requirement {
    fn from(key: AgreementKey) -> Self {
        Requirement::Agreement(key)
    }
}
