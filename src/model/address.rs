use serde::{Deserialize, Serialize};

/// A postal address as stored internally.
///
/// Fields are raw and unvalidated. Use [`ToDto`](crate::mapper::ToDto) or
/// `AddressDto::from(&record)` to obtain the display-ready form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressRecord {
    id: i32,
    street: String,
    city: String,
    state: String,
    zip_code: String,
}

impl AddressRecord {
    /// Creates a new AddressRecord instance.
    ///
    /// # Arguments
    /// * `id` - Address identifier
    /// * `street` - Street line, e.g. "Rue de la Paix"
    /// * `city` - City name
    /// * `state` - State or country
    /// * `zip_code` - Postal code, kept as text
    pub fn new(
        id: i32,
        street: impl Into<String>,
        city: impl Into<String>,
        state: impl Into<String>,
        zip_code: impl Into<String>,
    ) -> Self {
        Self {
            id,
            street: street.into(),
            city: city.into(),
            state: state.into(),
            zip_code: zip_code.into(),
        }
    }

    pub fn id(&self) -> i32 {
        self.id
    }

    pub fn street(&self) -> &str {
        &self.street
    }

    pub fn city(&self) -> &str {
        &self.city
    }

    pub fn state(&self) -> &str {
        &self.state
    }

    pub fn zip_code(&self) -> &str {
        &self.zip_code
    }
}

/// Display-ready address handed to external consumers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddressDto {
    id: i32,
    full_address: String,
}

impl AddressDto {
    pub fn new(id: i32, full_address: impl Into<String>) -> Self {
        Self {
            id,
            full_address: full_address.into(),
        }
    }

    pub fn id(&self) -> i32 {
        self.id
    }

    /// `"{street}, {city}, {state} {zip_code}"`
    pub fn full_address(&self) -> &str {
        &self.full_address
    }
}
