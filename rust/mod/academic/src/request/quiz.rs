//! Quiz requests.

use crate::model::{QuizAnswer, QuizDraft};

/// Load quizzes, optionally only those of one course.
#[derive(Debug, Clone, Default)]
pub struct FetchQuizzesReq {
    pub course_id: Option<String>,
}

impl FetchQuizzesReq {
    pub const PATH: &'static str = "quiz/fetch";
}

/// Load one quiz into `current_quiz`.
#[derive(Debug, Clone)]
pub struct FetchQuizReq {
    pub quiz_id: String,
}

impl FetchQuizReq {
    pub const PATH: &'static str = "quiz/fetch_one";
}

#[derive(Debug, Clone)]
pub struct CreateQuizReq {
    pub draft: QuizDraft,
}

impl CreateQuizReq {
    pub const PATH: &'static str = "quiz/create";
}

#[derive(Debug, Clone)]
pub struct StartAttemptReq {
    pub quiz_id: String,
}

impl StartAttemptReq {
    pub const PATH: &'static str = "quiz/start_attempt";
}

#[derive(Debug, Clone)]
pub struct SubmitAttemptReq {
    pub quiz_id: String,
    pub attempt_id: String,
    pub answers: Vec<QuizAnswer>,
}

impl SubmitAttemptReq {
    pub const PATH: &'static str = "quiz/submit_attempt";
}

#[derive(Debug, Clone)]
pub struct FetchStatisticsReq {
    pub quiz_id: String,
}

impl FetchStatisticsReq {
    pub const PATH: &'static str = "quiz/fetch_statistics";
}
