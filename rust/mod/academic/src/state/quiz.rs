//! Quiz state, stored at `quiz/state`.

use campus_flux::{Signal, Slice, Status, upsert_by};
use serde::Serialize;

use crate::model::{AttemptPatch, Quiz, QuizAttempt, QuizStatistics};

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct QuizState {
    pub quizzes: Vec<Quiz>,
    pub current_quiz: Option<Quiz>,
    pub attempts: Vec<QuizAttempt>,
    pub current_attempt: Option<QuizAttempt>,
    pub statistics: Option<QuizStatistics>,
    #[serde(flatten)]
    pub status: Status,
}

#[derive(Debug, Clone)]
pub enum QuizAction {
    Fetch(Signal<Vec<Quiz>>),
    FetchOne(Signal<Quiz>),
    Create(Signal<Quiz>),
    StartAttempt(Signal<QuizAttempt>),
    SubmitAttempt(Signal<QuizAttempt>),
    FetchStatistics(Signal<QuizStatistics>),
    SetCurrent(Option<Quiz>),
    /// Merge the given fields into the current attempt. No-op without one.
    UpdateCurrentAttempt(AttemptPatch),
    ClearError,
}

impl Slice for QuizState {
    const PATH: &'static str = "quiz/state";
    type Action = QuizAction;

    fn reduce(&mut self, action: QuizAction) {
        match action {
            QuizAction::Fetch(signal) => {
                if let Some(quizzes) = self.status.apply(signal) {
                    self.quizzes = quizzes;
                }
            }
            QuizAction::FetchOne(signal) => {
                if let Some(quiz) = self.status.apply(signal) {
                    self.current_quiz = Some(quiz);
                }
            }
            QuizAction::Create(signal) => {
                if let Some(quiz) = self.status.apply(signal) {
                    self.quizzes.push(quiz);
                }
            }
            QuizAction::StartAttempt(signal) => {
                if let Some(attempt) = self.status.apply(signal) {
                    self.current_attempt = Some(attempt.clone());
                    self.attempts.push(attempt);
                }
            }
            QuizAction::SubmitAttempt(signal) => {
                if let Some(attempt) = self.status.apply(signal) {
                    self.current_attempt = Some(attempt.clone());
                    upsert_by(&mut self.attempts, attempt, |a| a.id.clone());
                }
            }
            QuizAction::FetchStatistics(signal) => {
                if let Some(statistics) = self.status.apply(signal) {
                    self.statistics = Some(statistics);
                }
            }
            QuizAction::SetCurrent(quiz) => self.current_quiz = quiz,
            QuizAction::UpdateCurrentAttempt(patch) => {
                if let Some(attempt) = self.current_attempt.as_mut() {
                    patch.apply(attempt);
                }
            }
            QuizAction::ClearError => self.status.clear_error(),
        }
    }
}
