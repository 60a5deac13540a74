//! Generated object model for FHIR R5 resources.
//!
//! Every resource and datatype is an immutable value object constructed
//! through its builder; `build()` runs the type's structural validation and
//! returns `Result`, `build_unchecked()` skips it. Built values are deeply
//! immutable and traversable through the visitor protocol in
//! [`lumen_fhir_support::visitor`], which serializers and other generic
//! consumers use to walk an object graph in schema declaration order.
//!
//! ```
//! use lumen_fhir_lib::r5::codes::AccountStatusValue;
//! use lumen_fhir_lib::r5::resources::Account;
//!
//! let account = Account::builder()
//!     .status(AccountStatusValue::Active)
//!     .name("Dr. Odin's expense ledger")
//!     .build()
//!     .unwrap();
//! assert_eq!(account.status().and_then(|s| s.as_str()), Some("active"));
//! ```

pub mod date_time;

#[macro_use]
mod macros;

#[cfg(feature = "R5")]
pub mod r5;

pub use lumen_fhir_support as support;
