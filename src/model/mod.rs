//! Pure data structures: internal records and the DTOs derived from them.

pub mod address;
pub mod user;

pub use address::*;
pub use user::*;
