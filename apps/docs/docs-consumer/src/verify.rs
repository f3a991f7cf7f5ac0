//! Documented-vs-generated endpoint coverage.
//!
//! An endpoint counts as documented when the literal `"{method} {path}"`
//! appears anywhere in the architecture text. This is a plain substring
//! test: reformatted docs produce misses and unrelated text can produce hits.

use serde::Serialize;

use crate::models::GeneratedDoc;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EndpointCoverage {
    pub signature: String,
    pub documented: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VerificationReport {
    /// One entry per generated endpoint, in generated order
    pub endpoints: Vec<EndpointCoverage>,
}

impl VerificationReport {
    /// True iff every generated endpoint was found (vacuously true when empty)
    pub fn all_documented(&self) -> bool {
        self.endpoints.iter().all(|e| e.documented)
    }

    pub fn missing(&self) -> impl Iterator<Item = &EndpointCoverage> {
        self.endpoints.iter().filter(|e| !e.documented)
    }
}

pub fn verify(markdown: &str, generated: &GeneratedDoc) -> VerificationReport {
    VerificationReport {
        endpoints: generated
            .endpoints
            .iter()
            .map(|endpoint| {
                let signature = endpoint.signature();
                EndpointCoverage {
                    documented: markdown.contains(&signature),
                    signature,
                }
            })
            .collect(),
    }
}
