//! Assignment handler implementations.

use campus_flux::{Outcome, StateStore};

use crate::context::AcademicContext;
use crate::request::*;
use crate::state::{AssignmentsAction, AssignmentsState};

/// Handle `assignments/fetch`.
pub async fn handle_fetch(
    req: &FetchAssignmentsReq,
    store: &StateStore,
    ctx: &AcademicContext,
) -> Outcome {
    ctx.run::<AssignmentsState, _, _, _>(
        store,
        FetchAssignmentsReq::PATH,
        AssignmentsAction::Fetch,
        ctx.api.list_assignments(req.course_id.as_deref()),
    )
    .await
}

/// Handle `assignments/fetch_one`.
pub async fn handle_fetch_one(
    req: &FetchAssignmentReq,
    store: &StateStore,
    ctx: &AcademicContext,
) -> Outcome {
    ctx.run::<AssignmentsState, _, _, _>(
        store,
        FetchAssignmentReq::PATH,
        AssignmentsAction::FetchOne,
        ctx.api.get_assignment(&req.assignment_id),
    )
    .await
}

/// Handle `assignments/submit`.
pub async fn handle_submit(
    req: &SubmitAssignmentReq,
    store: &StateStore,
    ctx: &AcademicContext,
) -> Outcome {
    ctx.run::<AssignmentsState, _, _, _>(
        store,
        SubmitAssignmentReq::PATH,
        AssignmentsAction::Submit,
        ctx.api.submit_assignment(&req.assignment_id, &req.files, req.comment.as_deref()),
    )
    .await
}

/// Handle `assignments/grade`.
pub async fn handle_grade(
    req: &GradeSubmissionReq,
    store: &StateStore,
    ctx: &AcademicContext,
) -> Outcome {
    ctx.run::<AssignmentsState, _, _, _>(
        store,
        GradeSubmissionReq::PATH,
        AssignmentsAction::Grade,
        ctx.api.grade_submission(&req.submission_id, req.grade, &req.feedback),
    )
    .await
}
