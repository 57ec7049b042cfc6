//! Slice state records and their reducers.
//!
//! Each slice lives at a fixed store path and changes only through its
//! action enum. Network-backed actions carry a [`Signal`](campus_flux::Signal);
//! the rest are synchronous local mutators.

pub mod assignments;
pub mod courses;
pub mod quiz;

pub use assignments::{AssignmentsAction, AssignmentsState};
pub use courses::{CoursesAction, CoursesState};
pub use quiz::{QuizAction, QuizState};
