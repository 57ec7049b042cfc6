//! Request payloads, one per operation. Each `PATH` is both the router
//! path the request is emitted on and the operation key its sequence
//! numbers are tracked under.

pub mod assignments;
pub mod courses;
pub mod quiz;

pub use assignments::*;
pub use courses::*;
pub use quiz::*;
