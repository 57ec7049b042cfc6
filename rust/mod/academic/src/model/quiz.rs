use serde::{Deserialize, Serialize};

use super::id;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum QuestionType {
    MultipleChoice,
    #[default]
    SingleChoice,
    TrueFalse,
    ShortAnswer,
    Matching,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum QuizStatus {
    #[default]
    Draft,
    Scheduled,
    Active,
    Closed,
    Archived,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AttemptStatus {
    #[default]
    InProgress,
    Submitted,
    TimedOut,
    Graded,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct QuestionOption {
    #[serde(deserialize_with = "id::string")]
    pub id: String,
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_correct: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct QuizQuestion {
    #[serde(deserialize_with = "id::string")]
    pub id: String,
    #[serde(deserialize_with = "id::string")]
    pub quiz_id: String,
    #[serde(rename = "type")]
    pub kind: QuestionType,
    pub question: String,
    pub points: f64,
    pub options: Vec<QuestionOption>,
    #[serde(deserialize_with = "id::list")]
    pub correct_answers: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
    pub order: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Quiz {
    #[serde(deserialize_with = "id::string")]
    pub id: String,
    #[serde(deserialize_with = "id::string")]
    pub course_id: String,
    pub title: String,
    pub description: String,
    /// Minutes. Zero means untimed.
    pub time_limit: u32,
    pub start_date: String,
    pub end_date: String,
    pub total_points: f64,
    pub passing_score: f64,
    pub shuffle_questions: bool,
    pub show_results: bool,
    pub allow_review: bool,
    pub max_attempts: u32,
    pub questions: Vec<QuizQuestion>,
    pub status: QuizStatus,
    pub created_at: String,
    pub updated_at: String,
    #[serde(deserialize_with = "id::string")]
    pub created_by: String,
}

/// Partial quiz sent to `POST /api/quizzes`. Absent fields are left out
/// of the body.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizDraft {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub course_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_points: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub passing_score: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shuffle_questions: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_results: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_review: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_attempts: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub questions: Option<Vec<QuizQuestion>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<QuizStatus>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct QuizAnswer {
    #[serde(deserialize_with = "id::string")]
    pub question_id: String,
    #[serde(deserialize_with = "id::list")]
    pub selected_options: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_correct: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub points: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct QuizAttempt {
    #[serde(deserialize_with = "id::string")]
    pub id: String,
    #[serde(deserialize_with = "id::string")]
    pub quiz_id: String,
    #[serde(deserialize_with = "id::string")]
    pub student_id: String,
    pub start_time: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
    pub status: AttemptStatus,
    pub answers: Vec<QuizAnswer>,
    /// Seconds.
    pub time_spent: u64,
    pub is_completed: bool,
}

/// Field-wise update of an in-progress attempt. Only `Some` fields are
/// applied.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AttemptPatch {
    pub end_time: Option<String>,
    pub score: Option<f64>,
    pub status: Option<AttemptStatus>,
    pub answers: Option<Vec<QuizAnswer>>,
    pub time_spent: Option<u64>,
    pub is_completed: Option<bool>,
}

impl AttemptPatch {
    pub fn apply(self, attempt: &mut QuizAttempt) {
        if let Some(end_time) = self.end_time {
            attempt.end_time = Some(end_time);
        }
        if let Some(score) = self.score {
            attempt.score = Some(score);
        }
        if let Some(status) = self.status {
            attempt.status = status;
        }
        if let Some(answers) = self.answers {
            attempt.answers = answers;
        }
        if let Some(time_spent) = self.time_spent {
            attempt.time_spent = time_spent;
        }
        if let Some(is_completed) = self.is_completed {
            attempt.is_completed = is_completed;
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct QuestionStatistics {
    #[serde(deserialize_with = "id::string")]
    pub question_id: String,
    pub correct_answer_rate: f64,
    pub average_points: f64,
    #[serde(deserialize_with = "id::list")]
    pub most_chosen_options: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct QuizStatistics {
    #[serde(deserialize_with = "id::string")]
    pub quiz_id: String,
    pub total_attempts: u32,
    pub average_score: f64,
    pub highest_score: f64,
    pub lowest_score: f64,
    pub median_score: f64,
    pub passing_rate: f64,
    pub average_time_spent: f64,
    pub question_stats: Vec<QuestionStatistics>,
}
