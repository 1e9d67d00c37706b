//! # Record Mapper
//!
//! > **Explicit record → DTO mapping in Rust.**
//!
//! Internal records ([`AddressRecord`](model::AddressRecord),
//! [`UserRecord`](model::UserRecord)) are converted into public-facing transfer
//! objects ([`AddressDto`](model::AddressDto), [`UserDto`](model::UserDto))
//! through plain `From` impls. There are no implicit conversions: every call
//! site names the conversion it performs.
//!
//! ## 🗺️ Module Tour
//!
//! ### 1. The Data ([`model`])
//! Immutable records and DTOs. Fields are private, constructors take
//! `impl Into<String>` for text.
//!
//! ### 2. The Conversions ([`mapper`])
//! - `From<&AddressRecord> for AddressDto`: `"{street}, {city}, {state} {zip_code}"`
//! - `From<&UserRecord> for UserDto`: `"{first_name} {last_name}"`, addresses mapped in order
//! - [`ToDto`](mapper::ToDto) / [`ToDtos`](mapper::ToDtos): named call and lazy sequence projection
//!
//! ### 3. The Output ([`report`])
//! Renders a `UserDto` as console lines into any `std::io::Write`.
//!
//! ### 4. The Plumbing ([`runtime`], [`error`], [`sample`])
//! Tracing setup, the write error type, and the records printed by the binary.
//!
//! ## 🚀 Quick Start
//!
//! ```rust
//! use record_mapper::mapper::ToDto;
//! use record_mapper::model::{AddressRecord, UserRecord};
//!
//! let user = UserRecord::new(
//!     1,
//!     "Alex",
//!     "Terrieur",
//!     vec![AddressRecord::new(1, "Rue de la Paix", "Paris", "France", "95000")],
//! );
//! let dto = user.to_dto();
//!
//! assert_eq!(dto.full_name(), "Alex Terrieur");
//! assert_eq!(dto.addresses()[0].full_address(), "Rue de la Paix, Paris, France 95000");
//! ```
//!
//! ### Running the Demo
//!
//! ```bash
//! RUST_LOG=info cargo run
//! ```

pub mod error;
pub mod mapper;
pub mod model;
pub mod report;
pub mod runtime;
pub mod sample;
