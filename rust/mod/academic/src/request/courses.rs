//! Course requests.

use crate::model::ProgressPatch;

/// Load every course.
#[derive(Debug, Clone, Default)]
pub struct FetchCoursesReq;

impl FetchCoursesReq {
    pub const PATH: &'static str = "courses/fetch";
}

/// Load one course into `current_course`.
#[derive(Debug, Clone)]
pub struct FetchCourseReq {
    pub course_id: String,
}

impl FetchCourseReq {
    pub const PATH: &'static str = "courses/fetch_one";
}

/// Enroll the current user in a course.
#[derive(Debug, Clone)]
pub struct EnrollReq {
    pub course_id: String,
}

impl EnrollReq {
    pub const PATH: &'static str = "courses/enroll";
}

/// Report course progress.
#[derive(Debug, Clone)]
pub struct UpdateProgressReq {
    pub progress: ProgressPatch,
}

impl UpdateProgressReq {
    pub const PATH: &'static str = "courses/update_progress";
}
