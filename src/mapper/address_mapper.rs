//! AddressRecord → AddressDto.

use super::ToDto;
use crate::model::{AddressDto, AddressRecord};

impl From<&AddressRecord> for AddressDto {
    /// Copies the id and joins the address parts as
    /// `"{street}, {city}, {state} {zip_code}"`.
    ///
    /// Empty parts are joined as-is, so an empty zip code leaves a trailing space.
    fn from(record: &AddressRecord) -> Self {
        Self::new(
            record.id(),
            format!(
                "{}, {}, {} {}",
                record.street(),
                record.city(),
                record.state(),
                record.zip_code()
            ),
        )
    }
}

impl From<AddressRecord> for AddressDto {
    fn from(record: AddressRecord) -> Self {
        Self::from(&record)
    }
}

impl ToDto for AddressRecord {
    type Dto = AddressDto;

    fn to_dto(&self) -> AddressDto {
        AddressDto::from(self)
    }
}
