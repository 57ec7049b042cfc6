//! Assignment requests.

use crate::model::UploadFile;

/// Load assignments, optionally only those of one course.
#[derive(Debug, Clone, Default)]
pub struct FetchAssignmentsReq {
    pub course_id: Option<String>,
}

impl FetchAssignmentsReq {
    pub const PATH: &'static str = "assignments/fetch";
}

/// Load one assignment into `current_assignment`.
#[derive(Debug, Clone)]
pub struct FetchAssignmentReq {
    pub assignment_id: String,
}

impl FetchAssignmentReq {
    pub const PATH: &'static str = "assignments/fetch_one";
}

/// Upload files (and an optional comment) as a submission.
#[derive(Debug, Clone)]
pub struct SubmitAssignmentReq {
    pub assignment_id: String,
    pub files: Vec<UploadFile>,
    pub comment: Option<String>,
}

impl SubmitAssignmentReq {
    pub const PATH: &'static str = "assignments/submit";
}

/// Grade a submission.
#[derive(Debug, Clone)]
pub struct GradeSubmissionReq {
    pub submission_id: String,
    pub grade: f64,
    pub feedback: String,
}

impl GradeSubmissionReq {
    pub const PATH: &'static str = "assignments/grade";
}
