use serde::{Deserialize, Serialize};

use super::id;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AssignmentType {
    #[default]
    Homework,
    Quiz,
    Exam,
    Project,
    Presentation,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AssignmentStatus {
    #[default]
    Draft,
    Published,
    Closed,
    Grading,
    Graded,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SubmissionType {
    #[default]
    File,
    Text,
    Link,
    Code,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SubmissionStatus {
    #[default]
    Draft,
    Submitted,
    Late,
    Resubmitted,
    Graded,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GradeStatus {
    #[default]
    Pending,
    Graded,
    Disputed,
    Revised,
    #[serde(other)]
    Unknown,
}

/// A file attached to an assignment or a submission.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Attachment {
    #[serde(deserialize_with = "id::string")]
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(deserialize_with = "id::option")]
    pub submission_id: Option<String>,
    pub file_name: String,
    pub file_url: String,
    pub file_type: String,
    pub file_size: u64,
    pub uploaded_at: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Assignment {
    #[serde(deserialize_with = "id::string")]
    pub id: String,
    #[serde(deserialize_with = "id::string")]
    pub course_id: String,
    pub title: String,
    pub description: String,
    #[serde(rename = "type")]
    pub kind: AssignmentType,
    pub due_date: String,
    pub total_points: f64,
    pub weight: f64,
    pub status: AssignmentStatus,
    pub attachments: Vec<Attachment>,
    pub submission_type: Vec<SubmissionType>,
    pub created_at: String,
    pub updated_at: String,
    #[serde(deserialize_with = "id::string")]
    pub created_by: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Submission {
    #[serde(deserialize_with = "id::string")]
    pub id: String,
    #[serde(deserialize_with = "id::string")]
    pub assignment_id: String,
    #[serde(deserialize_with = "id::string")]
    pub student_id: String,
    pub submitted_at: String,
    pub status: SubmissionStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grade: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub feedback: Option<String>,
    pub attachments: Vec<Attachment>,
    pub attempts: u32,
    pub last_modified: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Grade {
    #[serde(deserialize_with = "id::string")]
    pub id: String,
    #[serde(deserialize_with = "id::string")]
    pub assignment_id: String,
    #[serde(deserialize_with = "id::string")]
    pub student_id: String,
    pub grade: f64,
    pub feedback: String,
    #[serde(deserialize_with = "id::string")]
    pub graded_by: String,
    pub graded_at: String,
    pub status: GradeStatus,
}

/// A local file to upload with a submission.
#[derive(Debug, Clone, PartialEq)]
pub struct UploadFile {
    pub file_name: String,
    pub mime: Option<String>,
    pub bytes: Vec<u8>,
}

impl UploadFile {
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            mime: None,
            bytes,
        }
    }

    pub fn with_mime(mut self, mime: impl Into<String>) -> Self {
        self.mime = Some(mime.into());
        self
    }
}
