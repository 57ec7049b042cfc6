//! Quiz handler implementations.

use campus_flux::{Outcome, StateStore};

use crate::context::AcademicContext;
use crate::request::*;
use crate::state::{QuizAction, QuizState};

/// Handle `quiz/fetch`.
pub async fn handle_fetch(
    req: &FetchQuizzesReq,
    store: &StateStore,
    ctx: &AcademicContext,
) -> Outcome {
    ctx.run::<QuizState, _, _, _>(
        store,
        FetchQuizzesReq::PATH,
        QuizAction::Fetch,
        ctx.api.list_quizzes(req.course_id.as_deref()),
    )
    .await
}

/// Handle `quiz/fetch_one`.
pub async fn handle_fetch_one(
    req: &FetchQuizReq,
    store: &StateStore,
    ctx: &AcademicContext,
) -> Outcome {
    ctx.run::<QuizState, _, _, _>(
        store,
        FetchQuizReq::PATH,
        QuizAction::FetchOne,
        ctx.api.get_quiz(&req.quiz_id),
    )
    .await
}

/// Handle `quiz/create`.
pub async fn handle_create(
    req: &CreateQuizReq,
    store: &StateStore,
    ctx: &AcademicContext,
) -> Outcome {
    ctx.run::<QuizState, _, _, _>(
        store,
        CreateQuizReq::PATH,
        QuizAction::Create,
        ctx.api.create_quiz(&req.draft),
    )
    .await
}

/// Handle `quiz/start_attempt`.
pub async fn handle_start_attempt(
    req: &StartAttemptReq,
    store: &StateStore,
    ctx: &AcademicContext,
) -> Outcome {
    ctx.run::<QuizState, _, _, _>(
        store,
        StartAttemptReq::PATH,
        QuizAction::StartAttempt,
        ctx.api.start_attempt(&req.quiz_id),
    )
    .await
}

/// Handle `quiz/submit_attempt`.
pub async fn handle_submit_attempt(
    req: &SubmitAttemptReq,
    store: &StateStore,
    ctx: &AcademicContext,
) -> Outcome {
    ctx.run::<QuizState, _, _, _>(
        store,
        SubmitAttemptReq::PATH,
        QuizAction::SubmitAttempt,
        ctx.api.submit_attempt(&req.quiz_id, &req.attempt_id, &req.answers),
    )
    .await
}

/// Handle `quiz/fetch_statistics`.
pub async fn handle_fetch_statistics(
    req: &FetchStatisticsReq,
    store: &StateStore,
    ctx: &AcademicContext,
) -> Outcome {
    ctx.run::<QuizState, _, _, _>(
        store,
        FetchStatisticsReq::PATH,
        QuizAction::FetchStatistics,
        ctx.api.quiz_statistics(&req.quiz_id),
    )
    .await
}
