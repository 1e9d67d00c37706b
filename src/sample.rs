//! Hard-coded records printed by the binary.

use crate::model::{AddressRecord, UserRecord};

pub fn addresses() -> Vec<AddressRecord> {
    vec![
        AddressRecord::new(1, "Rue de la Paix", "Paris", "France", "95000"),
        AddressRecord::new(2, "Avenue des Champs-Élysées", "Paris", "France", "95000"),
    ]
}

pub fn user() -> UserRecord {
    UserRecord::new(1, "Alex", "Terrieur", addresses())
}
