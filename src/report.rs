//! Console rendering of a [`UserDto`].
//!
//! Two line formats, written in order:
//!
//! ```text
//! User ID: 1, Full Name: Alex Terrieur
//! Adress Id: 1 , Full: Rue de la Paix, Paris, France 95000
//! ```
//!
//! The address line spelling (`Adress`, space before the comma) is part of the
//! output format and must not be "fixed".

use std::io::Write;

use tracing::debug;

use crate::error::ReportError;
use crate::model::{AddressDto, UserDto};

/// Header line for a user.
pub fn user_line(user: &UserDto) -> String {
    format!("User ID: {}, Full Name: {}", user.id(), user.full_name())
}

/// One line per address.
pub fn address_line(address: &AddressDto) -> String {
    format!(
        "Adress Id: {} , Full: {}",
        address.id(),
        address.full_address()
    )
}

/// Writes the user header followed by every address line, then flushes.
pub fn write_report<W: Write>(out: &mut W, user: &UserDto) -> Result<(), ReportError> {
    debug!(user_id = user.id(), addresses = user.addresses().len(), "Writing report");

    writeln!(out, "{}", user_line(user))?;
    for address in user.addresses() {
        writeln!(out, "{}", address_line(address))?;
    }
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    /// Sink that fails every write.
    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_line_formats() {
        let user = UserDto::new(1, "Alex Terrieur", Vec::new());
        assert_eq!(user_line(&user), "User ID: 1, Full Name: Alex Terrieur");

        let address = AddressDto::new(2, "Avenue des Champs-Élysées, Paris, France 95000");
        assert_eq!(
            address_line(&address),
            "Adress Id: 2 , Full: Avenue des Champs-Élysées, Paris, France 95000"
        );
    }

    #[test]
    fn test_user_without_addresses_writes_header_only() {
        let user = UserDto::new(3, "No Where", Vec::new());
        let mut buf = Vec::new();

        write_report(&mut buf, &user).unwrap();

        assert_eq!(String::from_utf8(buf).unwrap(), "User ID: 3, Full Name: No Where\n");
    }

    #[test]
    fn test_write_failure_is_reported() {
        let user = UserDto::new(1, "Alex Terrieur", Vec::new());

        let err = write_report(&mut BrokenPipe, &user).unwrap_err();

        match err {
            ReportError::Write(e) => assert_eq!(e.kind(), io::ErrorKind::BrokenPipe),
        }
    }
}
