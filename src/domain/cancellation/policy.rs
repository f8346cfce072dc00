//! Policy value object.

use serde::{Deserialize, Serialize};

use super::errors::PreconditionError;

/// The insurance policy being cancelled.
///
/// Dates are kept as the ISO strings the UI supplies; the pipeline never
/// interprets them.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Policy {
    pub policy_number: String,
    pub product_name: String,
    pub start_date: String,
    pub end_date: String,
    pub insurance_company: String,
}

impl Policy {
    /// Creates a policy from its five fields.
    pub fn new(
        policy_number: impl Into<String>,
        product_name: impl Into<String>,
        start_date: impl Into<String>,
        end_date: impl Into<String>,
        insurance_company: impl Into<String>,
    ) -> Self {
        Self {
            policy_number: policy_number.into(),
            product_name: product_name.into(),
            start_date: start_date.into(),
            end_date: end_date.into(),
            insurance_company: insurance_company.into(),
        }
    }

    /// Returns a copy with every field trimmed.
    pub fn trimmed(&self) -> Self {
        Self::new(
            self.policy_number.trim(),
            self.product_name.trim(),
            self.start_date.trim(),
            self.end_date.trim(),
            self.insurance_company.trim(),
        )
    }

    /// Checks that every field is non-blank.
    ///
    /// # Errors
    ///
    /// Returns `PreconditionError::EmptyField` naming the first blank field.
    pub fn validate(&self) -> Result<(), PreconditionError> {
        let fields = [
            ("policyNumber", &self.policy_number),
            ("productName", &self.product_name),
            ("startDate", &self.start_date),
            ("endDate", &self.end_date),
            ("insuranceCompany", &self.insurance_company),
        ];
        match fields.iter().find(|(_, value)| value.trim().is_empty()) {
            Some((field, _)) => Err(PreconditionError::empty_field("policy", *field)),
            None => Ok(()),
        }
    }

    /// Filename of the document part sent to the XML mapper.
    pub fn document_filename(&self) -> String {
        let stem = if self.policy_number.is_empty() {
            "cancellation"
        } else {
            self.policy_number.as_str()
        };
        format!("cancellation_{}.pdf", stem)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hausrat() -> Policy {
        Policy::new("P-001", "Hausrat", "2020-01-01", "2025-01-01", "AllSure")
    }

    #[test]
    fn complete_policy_validates() {
        assert!(hausrat().validate().is_ok());
    }

    #[test]
    fn all_empty_policy_reports_policy_number() {
        let err = Policy::default().validate().unwrap_err();
        assert_eq!(err, PreconditionError::empty_field("policy", "policyNumber"));
    }

    #[test]
    fn document_filename_uses_policy_number() {
        assert_eq!(hausrat().document_filename(), "cancellation_P-001.pdf");
    }

    #[test]
    fn document_filename_falls_back_without_policy_number() {
        let policy = Policy::new("", "Hausrat", "2020-01-01", "2025-01-01", "AllSure");
        assert_eq!(policy.document_filename(), "cancellation_cancellation.pdf");
    }

    #[test]
    fn deserializes_from_camel_case_json() {
        let json = r#"{"policyNumber":"P-001","productName":"Hausrat","startDate":"2020-01-01","endDate":"2025-01-01","insuranceCompany":"AllSure"}"#;
        let policy: Policy = serde_json::from_str(json).unwrap();
        assert_eq!(policy, hausrat());
    }
}
