//! Courses state, stored at `courses/state`.

use campus_flux::{Signal, Slice, Status, upsert_by};
use serde::Serialize;

use crate::model::{Course, CourseEnrollment, CourseProgress};

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CoursesState {
    pub courses: Vec<Course>,
    pub current_course: Option<Course>,
    pub enrollments: Vec<CourseEnrollment>,
    pub progress: Vec<CourseProgress>,
    #[serde(flatten)]
    pub status: Status,
}

#[derive(Debug, Clone)]
pub enum CoursesAction {
    Fetch(Signal<Vec<Course>>),
    FetchOne(Signal<Course>),
    Enroll(Signal<CourseEnrollment>),
    UpdateProgress(Signal<CourseProgress>),
    SetCurrent(Option<Course>),
    ClearError,
}

impl Slice for CoursesState {
    const PATH: &'static str = "courses/state";
    type Action = CoursesAction;

    fn reduce(&mut self, action: CoursesAction) {
        match action {
            CoursesAction::Fetch(signal) => {
                if let Some(courses) = self.status.apply(signal) {
                    self.courses = courses;
                }
            }
            CoursesAction::FetchOne(signal) => {
                if let Some(course) = self.status.apply(signal) {
                    self.current_course = Some(course);
                }
            }
            CoursesAction::Enroll(signal) => {
                if let Some(enrollment) = self.status.apply(signal) {
                    self.enrollments.push(enrollment);
                }
            }
            CoursesAction::UpdateProgress(signal) => {
                if let Some(progress) = self.status.apply(signal) {
                    upsert_by(&mut self.progress, progress, CourseProgress::key);
                }
            }
            CoursesAction::SetCurrent(course) => self.current_course = course,
            CoursesAction::ClearError => self.status.clear_error(),
        }
    }
}
