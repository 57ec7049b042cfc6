//! Course handler implementations.

use campus_flux::{Outcome, StateStore};

use crate::context::AcademicContext;
use crate::request::*;
use crate::state::{CoursesAction, CoursesState};

/// Handle `courses/fetch`.
pub async fn handle_fetch(
    _req: &FetchCoursesReq,
    store: &StateStore,
    ctx: &AcademicContext,
) -> Outcome {
    ctx.run::<CoursesState, _, _, _>(
        store,
        FetchCoursesReq::PATH,
        CoursesAction::Fetch,
        ctx.api.list_courses(),
    )
    .await
}

/// Handle `courses/fetch_one`.
pub async fn handle_fetch_one(
    req: &FetchCourseReq,
    store: &StateStore,
    ctx: &AcademicContext,
) -> Outcome {
    ctx.run::<CoursesState, _, _, _>(
        store,
        FetchCourseReq::PATH,
        CoursesAction::FetchOne,
        ctx.api.get_course(&req.course_id),
    )
    .await
}

/// Handle `courses/enroll`.
pub async fn handle_enroll(req: &EnrollReq, store: &StateStore, ctx: &AcademicContext) -> Outcome {
    ctx.run::<CoursesState, _, _, _>(
        store,
        EnrollReq::PATH,
        CoursesAction::Enroll,
        ctx.api.enroll(&req.course_id),
    )
    .await
}

/// Handle `courses/update_progress`.
pub async fn handle_update_progress(
    req: &UpdateProgressReq,
    store: &StateStore,
    ctx: &AcademicContext,
) -> Outcome {
    ctx.run::<CoursesState, _, _, _>(
        store,
        UpdateProgressReq::PATH,
        CoursesAction::UpdateProgress,
        ctx.api.update_progress(&req.progress),
    )
    .await
}
