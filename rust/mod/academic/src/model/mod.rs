//! Entities exchanged with the academic REST API.
//!
//! JSON field names are camelCase and enum values SCREAMING_SNAKE_CASE.
//! Every struct decodes with missing fields set to their defaults, so a
//! sparse server object is accepted. Entity IDs may be JSON strings or
//! numbers and are always held as `String`. An enum value this client
//! does not know decodes to the `Unknown` variant. Any other value of the
//! wrong JSON type is a decode failure.

mod assignment;
mod course;
mod id;
mod quiz;

pub use assignment::*;
pub use course::*;
pub use quiz::*;
