//! UserRecord → UserDto.

use tracing::trace;

use super::{ToDto, ToDtos};
use crate::model::{UserDto, UserRecord};

impl From<&UserRecord> for UserDto {
    /// Joins first and last name with a single space and maps every address
    /// in order through [`AddressDto::from`](crate::model::AddressDto).
    fn from(record: &UserRecord) -> Self {
        trace!(
            user_id = record.id(),
            addresses = record.addresses().len(),
            "Mapping user record"
        );
        Self::new(
            record.id(),
            format!("{} {}", record.first_name(), record.last_name()),
            record.addresses().iter().to_dtos().collect(),
        )
    }
}

impl From<UserRecord> for UserDto {
    fn from(record: UserRecord) -> Self {
        Self::from(&record)
    }
}

impl ToDto for UserRecord {
    type Dto = UserDto;

    fn to_dto(&self) -> UserDto {
        UserDto::from(self)
    }
}
