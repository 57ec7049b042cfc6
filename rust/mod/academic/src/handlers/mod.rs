//! Request handlers and Flux wiring.
//!
//! `register_handlers` downcasts each typed payload and hands it, with
//! the store and the shared context, to the matching `handle_*` function.

pub mod assignments;
pub mod courses;
pub mod quiz;

use std::sync::Arc;

use campus_flux::{Flux, Payload, StateStore};
use tracing::warn;

use crate::context::AcademicContext;
use crate::request::*;

/// Register one request type: downcast, then call `handle`.
macro_rules! route {
    ($flux:expr, $ctx:expr, $req:ty, $handle:path) => {{
        let ctx = Arc::clone(&$ctx);
        $flux.on(<$req>::PATH, move |path: String, payload: Payload, store: Arc<StateStore>| {
            let ctx = Arc::clone(&ctx);
            async move {
                let Some(req) = payload.downcast_ref::<$req>() else {
                    warn!(%path, "unexpected payload type");
                    return;
                };
                $handle(req, &store, &ctx).await;
            }
        });
    }};
}

/// Register all academic handlers with a Flux instance.
pub fn register_handlers(flux: &Flux, ctx: Arc<AcademicContext>) {
    // assignments/*
    route!(flux, ctx, FetchAssignmentsReq, assignments::handle_fetch);
    route!(flux, ctx, FetchAssignmentReq, assignments::handle_fetch_one);
    route!(flux, ctx, SubmitAssignmentReq, assignments::handle_submit);
    route!(flux, ctx, GradeSubmissionReq, assignments::handle_grade);

    // courses/*
    route!(flux, ctx, FetchCoursesReq, courses::handle_fetch);
    route!(flux, ctx, FetchCourseReq, courses::handle_fetch_one);
    route!(flux, ctx, EnrollReq, courses::handle_enroll);
    route!(flux, ctx, UpdateProgressReq, courses::handle_update_progress);

    // quiz/*
    route!(flux, ctx, FetchQuizzesReq, quiz::handle_fetch);
    route!(flux, ctx, FetchQuizReq, quiz::handle_fetch_one);
    route!(flux, ctx, CreateQuizReq, quiz::handle_create);
    route!(flux, ctx, StartAttemptReq, quiz::handle_start_attempt);
    route!(flux, ctx, SubmitAttemptReq, quiz::handle_submit_attempt);
    route!(flux, ctx, FetchStatisticsReq, quiz::handle_fetch_statistics);
}
