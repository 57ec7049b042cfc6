use serde::{Deserialize, Serialize};

use super::id;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CourseStatus {
    #[default]
    Active,
    Inactive,
    Archived,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EnrollmentStatus {
    #[default]
    Enrolled,
    Completed,
    Dropped,
    #[serde(other)]
    Unknown,
}

/// The teacher responsible for a course, as embedded in it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TeacherRef {
    #[serde(deserialize_with = "id::string")]
    pub id: String,
    pub first_name: String,
    pub last_name: String,
}

impl TeacherRef {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name).trim().to_string()
    }
}

/// One weekly slot. `day_of_week` is 0 (Sunday) to 6.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CourseSchedule {
    #[serde(deserialize_with = "id::string")]
    pub id: String,
    pub day_of_week: u8,
    pub start_time: String,
    pub end_time: String,
    pub room: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Course {
    #[serde(deserialize_with = "id::string")]
    pub id: String,
    pub title: String,
    pub code: String,
    pub description: String,
    pub teacher: TeacherRef,
    pub credits: u32,
    pub level: String,
    pub language: String,
    pub max_students: u32,
    pub enrolled_students: u32,
    pub start_date: String,
    pub end_date: String,
    pub schedule: Vec<CourseSchedule>,
    #[serde(deserialize_with = "id::list")]
    pub prerequisites: Vec<String>,
    pub status: CourseStatus,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CourseEnrollment {
    #[serde(deserialize_with = "id::string")]
    pub course_id: String,
    #[serde(deserialize_with = "id::string")]
    pub user_id: String,
    pub enrollment_date: String,
    pub status: EnrollmentStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grade: Option<f64>,
}

/// Progress of one user in one course, keyed by (`course_id`, `user_id`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CourseProgress {
    #[serde(deserialize_with = "id::string")]
    pub course_id: String,
    #[serde(deserialize_with = "id::string")]
    pub user_id: String,
    pub progress: f64,
    pub last_accessed: String,
    #[serde(deserialize_with = "id::list")]
    pub completed_modules: Vec<String>,
    #[serde(deserialize_with = "id::list")]
    pub completed_content: Vec<String>,
}

impl CourseProgress {
    pub fn key(&self) -> (String, String) {
        (self.course_id.clone(), self.user_id.clone())
    }
}

/// Partial progress sent to `POST /api/courses/progress`. Absent fields
/// are left out of the body.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub course_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub progress: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_accessed: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed_modules: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed_content: Option<Vec<String>>,
}
