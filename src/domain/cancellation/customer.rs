//! Customer value object.

use serde::{Deserialize, Serialize};

use super::errors::PreconditionError;

/// Personal and address data of the customer whose policy is cancelled.
///
/// Serialized with camelCase keys; this is the shape the data-entry UI sends
/// and the shape of the `customer` part sent to the XML mapper.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub first_name: String,
    pub last_name: String,
    pub street: String,
    pub house_number: String,
    pub postal_code: String,
    pub city: String,
}

impl Customer {
    /// Creates a customer from its six fields.
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        street: impl Into<String>,
        house_number: impl Into<String>,
        postal_code: impl Into<String>,
        city: impl Into<String>,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            street: street.into(),
            house_number: house_number.into(),
            postal_code: postal_code.into(),
            city: city.into(),
        }
    }

    /// Returns a copy with every field trimmed.
    pub fn trimmed(&self) -> Self {
        Self::new(
            self.first_name.trim(),
            self.last_name.trim(),
            self.street.trim(),
            self.house_number.trim(),
            self.postal_code.trim(),
            self.city.trim(),
        )
    }

    /// Field names paired with their values, in form order.
    fn fields(&self) -> [(&'static str, &str); 6] {
        [
            ("firstName", self.first_name.as_str()),
            ("lastName", self.last_name.as_str()),
            ("street", self.street.as_str()),
            ("houseNumber", self.house_number.as_str()),
            ("postalCode", self.postal_code.as_str()),
            ("city", self.city.as_str()),
        ]
    }

    /// True when every field is non-blank.
    pub fn is_complete(&self) -> bool {
        self.validate().is_ok()
    }

    /// Checks that every field is non-blank.
    ///
    /// # Errors
    ///
    /// Returns `PreconditionError::EmptyField` naming the first blank field.
    pub fn validate(&self) -> Result<(), PreconditionError> {
        match self.fields().iter().find(|(_, value)| value.trim().is_empty()) {
            Some((field, _)) => Err(PreconditionError::empty_field("customer", *field)),
            None => Ok(()),
        }
    }

    /// "First Last", as printed on the cancellation letter.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// "Street No, PostalCode City".
    pub fn postal_address(&self) -> String {
        format!(
            "{} {}, {} {}",
            self.street, self.house_number, self.postal_code, self.city
        )
    }
}
