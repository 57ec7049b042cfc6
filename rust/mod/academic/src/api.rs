//! Typed endpoints of the academic REST API.
//!
//! Blank IDs are rejected with `ApiError::MissingArgument` before any
//! request is sent.

use campus_client::{ApiClient, ApiError, ApiRequest, Part, segment};
use serde_json::json;

use crate::model::*;

fn required<'a>(name: &'static str, value: &'a str) -> Result<&'a str, ApiError> {
    if value.trim().is_empty() {
        return Err(ApiError::MissingArgument(name));
    }
    Ok(value)
}

/// Client for `/api/assignments`, `/api/courses` and `/api/quizzes`.
#[derive(Clone)]
pub struct AcademicApi {
    client: ApiClient,
}

impl AcademicApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    // ── Assignments ─────────────────────────────────────────────────

    pub async fn list_assignments(
        &self,
        course_id: Option<&str>,
    ) -> Result<Vec<Assignment>, ApiError> {
        let req = ApiRequest::get("/api/assignments").query_opt("courseId", course_id);
        self.client.call(req).await
    }

    pub async fn get_assignment(&self, assignment_id: &str) -> Result<Assignment, ApiError> {
        let id = required("assignment_id", assignment_id)?;
        self.client
            .call(ApiRequest::get(format!("/api/assignments/{}", segment(id))))
            .await
    }

    /// Multipart upload: one `files` part per file, plus `comment` when
    /// it is not blank.
    pub async fn submit_assignment(
        &self,
        assignment_id: &str,
        files: &[UploadFile],
        comment: Option<&str>,
    ) -> Result<Submission, ApiError> {
        let id = required("assignment_id", assignment_id)?;
        let mut parts: Vec<Part> = files
            .iter()
            .map(|f| Part::File {
                name: "files".to_string(),
                file_name: f.file_name.clone(),
                mime: f.mime.clone(),
                bytes: f.bytes.clone(),
            })
            .collect();
        if let Some(comment) = comment.filter(|c| !c.is_empty()) {
            parts.push(Part::Text {
                name: "comment".to_string(),
                value: comment.to_string(),
            });
        }
        let req =
            ApiRequest::post(format!("/api/assignments/{}/submit", segment(id))).multipart(parts);
        self.client.call(req).await
    }

    pub async fn grade_submission(
        &self,
        submission_id: &str,
        grade: f64,
        feedback: &str,
    ) -> Result<Grade, ApiError> {
        let id = required("submission_id", submission_id)?;
        let req = ApiRequest::post(format!("/api/submissions/{}/grade", segment(id)))
            .json(&json!({ "grade": grade, "feedback": feedback }))?;
        self.client.call(req).await
    }

    // ── Courses ─────────────────────────────────────────────────────

    pub async fn list_courses(&self) -> Result<Vec<Course>, ApiError> {
        self.client.call(ApiRequest::get("/api/courses")).await
    }

    pub async fn get_course(&self, course_id: &str) -> Result<Course, ApiError> {
        let id = required("course_id", course_id)?;
        self.client
            .call(ApiRequest::get(format!("/api/courses/{}", segment(id))))
            .await
    }

    pub async fn enroll(&self, course_id: &str) -> Result<CourseEnrollment, ApiError> {
        let id = required("course_id", course_id)?;
        self.client
            .call(ApiRequest::post(format!("/api/courses/{}/enroll", segment(id))))
            .await
    }

    pub async fn update_progress(
        &self,
        progress: &ProgressPatch,
    ) -> Result<CourseProgress, ApiError> {
        let req = ApiRequest::post("/api/courses/progress").json(progress)?;
        self.client.call(req).await
    }

    // ── Quizzes ─────────────────────────────────────────────────────

    pub async fn list_quizzes(&self, course_id: Option<&str>) -> Result<Vec<Quiz>, ApiError> {
        let req = ApiRequest::get("/api/quizzes").query_opt("courseId", course_id);
        self.client.call(req).await
    }

    pub async fn get_quiz(&self, quiz_id: &str) -> Result<Quiz, ApiError> {
        let id = required("quiz_id", quiz_id)?;
        self.client
            .call(ApiRequest::get(format!("/api/quizzes/{}", segment(id))))
            .await
    }

    pub async fn create_quiz(&self, draft: &QuizDraft) -> Result<Quiz, ApiError> {
        let req = ApiRequest::post("/api/quizzes").json(draft)?;
        self.client.call(req).await
    }

    pub async fn start_attempt(&self, quiz_id: &str) -> Result<QuizAttempt, ApiError> {
        let id = required("quiz_id", quiz_id)?;
        self.client
            .call(ApiRequest::post(format!("/api/quizzes/{}/attempts", segment(id))))
            .await
    }

    pub async fn submit_attempt(
        &self,
        quiz_id: &str,
        attempt_id: &str,
        answers: &[QuizAnswer],
    ) -> Result<QuizAttempt, ApiError> {
        let quiz_id = required("quiz_id", quiz_id)?;
        let attempt_id = required("attempt_id", attempt_id)?;
        let path = format!(
            "/api/quizzes/{}/attempts/{}/submit",
            segment(quiz_id),
            segment(attempt_id)
        );
        let req = ApiRequest::post(path).json(&json!({ "answers": answers }))?;
        self.client.call(req).await
    }

    pub async fn quiz_statistics(&self, quiz_id: &str) -> Result<QuizStatistics, ApiError> {
        let id = required("quiz_id", quiz_id)?;
        self.client
            .call(ApiRequest::get(format!("/api/quizzes/{}/statistics", segment(id))))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use campus_client::{Body, Method, Transport};
    use std::sync::{Arc, Mutex};

    /// Records every request and answers with a fixed value.
    struct Recorder {
        seen: Mutex<Vec<ApiRequest>>,
        reply: serde_json::Value,
    }

    #[async_trait::async_trait]
    impl Transport for Recorder {
        async fn send(&self, request: ApiRequest) -> Result<serde_json::Value, ApiError> {
            self.seen.lock().unwrap().push(request);
            Ok(self.reply.clone())
        }
    }

    fn api(reply: serde_json::Value) -> (Arc<Recorder>, AcademicApi) {
        let rec = Arc::new(Recorder {
            seen: Mutex::new(Vec::new()),
            reply,
        });
        (rec.clone(), AcademicApi::new(ApiClient::new(rec)))
    }

    fn last(rec: &Recorder) -> ApiRequest {
        rec.seen.lock().unwrap().last().cloned().unwrap()
    }

    #[tokio::test]
    async fn list_filters_by_course() {
        let (rec, api) = api(json!([]));
        api.list_assignments(Some("CS101")).await.unwrap();
        assert_eq!(last(&rec).path_and_query(), "/api/assignments?courseId=CS101");

        api.list_quizzes(None).await.unwrap();
        assert_eq!(last(&rec).path_and_query(), "/api/quizzes");
    }

    #[tokio::test]
    async fn ids_are_path_encoded() {
        let (rec, api) = api(json!({"id": "x"}));
        api.get_course("a/b").await.unwrap();
        assert_eq!(last(&rec).path, "/api/courses/a%2Fb");
    }

    #[tokio::test]
    async fn blank_id_sends_nothing() {
        let (rec, api) = api(json!({}));
        let err = api.get_quiz("  ").await.unwrap_err();
        assert_eq!(err, ApiError::MissingArgument("quiz_id"));
        let err = api.submit_attempt("q1", "", &[]).await.unwrap_err();
        assert_eq!(err, ApiError::MissingArgument("attempt_id"));
        assert!(rec.seen.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn submit_assignment_builds_multipart() {
        let (rec, api) = api(json!({"id": "s1"}));
        let files = vec![
            UploadFile::new("rapport.pdf", vec![1, 2]).with_mime("application/pdf"),
            UploadFile::new("annexe.txt", b"hello".to_vec()),
        ];
        let submission = api.submit_assignment("a1", &files, Some("voir annexe")).await.unwrap();
        assert_eq!(submission.id, "s1");

        let req = last(&rec);
        assert_eq!(req.method, Method::Post);
        assert_eq!(req.path, "/api/assignments/a1/submit");
        let Body::Multipart(parts) = req.body else {
            panic!("expected multipart body");
        };
        let names: Vec<&str> = parts.iter().map(Part::name).collect();
        assert_eq!(names, vec!["files", "files", "comment"]);
    }

    #[tokio::test]
    async fn empty_comment_is_not_sent() {
        let (rec, api) = api(json!({"id": "s1"}));
        api.submit_assignment("a1", &[], Some("")).await.unwrap();
        assert_eq!(last(&rec).body, Body::Multipart(Vec::new()));
    }

    #[tokio::test]
    async fn grade_and_submit_attempt_bodies() {
        let (rec, api) = api(json!({"id": "g1"}));
        api.grade_submission("s1", 16.0, "Très bien").await.unwrap();
        let req = last(&rec);
        assert_eq!(req.path, "/api/submissions/s1/grade");
        assert_eq!(req.body, Body::Json(json!({"grade": 16.0, "feedback": "Très bien"})));

        let answers = vec![QuizAnswer {
            question_id: "1".into(),
            selected_options: vec!["2".into()],
            ..Default::default()
        }];
        api.submit_attempt("q1", "t1", &answers).await.unwrap();
        let req = last(&rec);
        assert_eq!(req.path, "/api/quizzes/q1/attempts/t1/submit");
        assert_eq!(
            req.body,
            Body::Json(json!({"answers": [{"questionId": "1", "selectedOptions": ["2"]}]}))
        );
    }

    #[tokio::test]
    async fn enroll_and_start_attempt_have_no_body() {
        let (rec, api) = api(json!({}));
        api.enroll("c1").await.unwrap();
        assert_eq!(last(&rec).path, "/api/courses/c1/enroll");
        assert_eq!(last(&rec).body, Body::Empty);

        api.start_attempt("q1").await.unwrap();
        assert_eq!(last(&rec).path, "/api/quizzes/q1/attempts");
        assert_eq!(last(&rec).method, Method::Post);
    }
}
