//! Academic slices: assignments, courses and quizzes.
//!
//! Each slice is fed by request handlers that wrap one API call into
//! `Started` and a terminal signal. Wiring is explicit: build a [`Flux`],
//! then [`init`] installs the empty slices and registers the handlers.
//!
//! ```ignore
//! let flux = Flux::new();
//! let ctx = Arc::new(AcademicContext::new(transport, StalePolicy::KeepAll, "fr"));
//! campus_academic::init(&flux, ctx);
//! flux.emit(FetchCoursesReq::PATH, FetchCoursesReq).await;
//! let courses = flux.slice::<CoursesState>();
//! ```

pub mod api;
pub mod context;
pub mod handlers;
pub mod messages;
pub mod model;
pub mod prefs;
pub mod request;
pub mod session;
pub mod sheet;
pub mod state;
pub mod timer;

use std::sync::Arc;

use campus_flux::{Flux, StateStore};
use tracing::debug;

pub use context::AcademicContext;
pub use prefs::Preferences;
pub use session::{Session, SessionConfig};
pub use sheet::AnswerSheet;
pub use state::{
    AssignmentsAction, AssignmentsState, CoursesAction, CoursesState, QuizAction, QuizState,
};
pub use timer::{Countdown, format_remaining};

/// Install every slice with its empty state.
pub fn install_slices(store: &StateStore) {
    store.install(AssignmentsState::default());
    store.install(CoursesState::default());
    store.install(QuizState::default());
}

/// Initialize `flux` for the academic slices.
pub fn init(flux: &Flux, ctx: Arc<AcademicContext>) {
    install_slices(flux.store());
    handlers::register_handlers(flux, ctx);
    debug!(paths = ?flux.store().paths(), "academic slices installed");
}
