use serde::{Deserialize, Serialize};

use super::{AddressDto, AddressRecord};

/// A user as stored internally, with its addresses in insertion order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    id: i32,
    first_name: String,
    last_name: String,
    addresses: Vec<AddressRecord>,
}

impl UserRecord {
    /// Creates a new UserRecord instance.
    ///
    /// # Arguments
    /// * `id` - User identifier
    /// * `first_name` - Given name
    /// * `last_name` - Family name
    /// * `addresses` - Addresses, order is preserved through mapping
    pub fn new(
        id: i32,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        addresses: Vec<AddressRecord>,
    ) -> Self {
        Self {
            id,
            first_name: first_name.into(),
            last_name: last_name.into(),
            addresses,
        }
    }

    pub fn id(&self) -> i32 {
        self.id
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn addresses(&self) -> &[AddressRecord] {
        &self.addresses
    }
}

/// Public-facing view of a user.
///
/// Owns its data; holds no reference back to the [`UserRecord`] it came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDto {
    id: i32,
    full_name: String,
    addresses: Vec<AddressDto>,
}

impl UserDto {
    pub fn new(id: i32, full_name: impl Into<String>, addresses: Vec<AddressDto>) -> Self {
        Self {
            id,
            full_name: full_name.into(),
            addresses,
        }
    }

    pub fn id(&self) -> i32 {
        self.id
    }

    pub fn full_name(&self) -> &str {
        &self.full_name
    }

    pub fn addresses(&self) -> &[AddressDto] {
        &self.addresses
    }
}
