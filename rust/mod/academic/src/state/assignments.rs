//! Assignments state, stored at `assignments/state`.

use campus_flux::{Signal, Slice, Status};
use serde::Serialize;

use crate::model::{Assignment, Grade, Submission};

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AssignmentsState {
    pub assignments: Vec<Assignment>,
    pub current_assignment: Option<Assignment>,
    pub submissions: Vec<Submission>,
    pub grades: Vec<Grade>,
    #[serde(flatten)]
    pub status: Status,
}

#[derive(Debug, Clone)]
pub enum AssignmentsAction {
    Fetch(Signal<Vec<Assignment>>),
    FetchOne(Signal<Assignment>),
    Submit(Signal<Submission>),
    Grade(Signal<Grade>),
    SetCurrent(Option<Assignment>),
    ClearError,
}

impl Slice for AssignmentsState {
    const PATH: &'static str = "assignments/state";
    type Action = AssignmentsAction;

    fn reduce(&mut self, action: AssignmentsAction) {
        match action {
            AssignmentsAction::Fetch(signal) => {
                if let Some(assignments) = self.status.apply(signal) {
                    self.assignments = assignments;
                }
            }
            AssignmentsAction::FetchOne(signal) => {
                if let Some(assignment) = self.status.apply(signal) {
                    self.current_assignment = Some(assignment);
                }
            }
            AssignmentsAction::Submit(signal) => {
                if let Some(submission) = self.status.apply(signal) {
                    self.submissions.push(submission);
                }
            }
            AssignmentsAction::Grade(signal) => {
                if let Some(grade) = self.status.apply(signal) {
                    self.grades.push(grade);
                }
            }
            AssignmentsAction::SetCurrent(assignment) => self.current_assignment = assignment,
            AssignmentsAction::ClearError => self.status.clear_error(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assignment(id: &str) -> Assignment {
        Assignment {
            id: id.into(),
            ..Default::default()
        }
    }

    fn submission(id: &str) -> Submission {
        Submission {
            id: id.into(),
            assignment_id: "a1".into(),
            ..Default::default()
        }
    }

    #[test]
    fn pending_then_terminal_always_ends_idle() {
        let terminals = vec![
            AssignmentsAction::Fetch(Signal::Succeeded(vec![assignment("a1")])),
            AssignmentsAction::Fetch(Signal::Failed("boom".into())),
        ];
        for terminal in terminals {
            let failed = matches!(terminal, AssignmentsAction::Fetch(Signal::Failed(_)));
            let mut state = AssignmentsState::default();
            state.reduce(AssignmentsAction::Fetch(Signal::Started));
            state.reduce(terminal);
            assert!(!state.status.loading);
            assert_eq!(state.status.error.is_some(), failed);
        }
    }

    #[test]
    fn fetch_one_failure_keeps_current() {
        let mut state = AssignmentsState::default();
        state.reduce(AssignmentsAction::FetchOne(Signal::Succeeded(assignment("a1"))));
        state.reduce(AssignmentsAction::FetchOne(Signal::Started));
        state.reduce(AssignmentsAction::FetchOne(Signal::Failed("introuvable".into())));

        assert_eq!(state.current_assignment, Some(assignment("a1")));
        assert_eq!(state.status.error.as_deref(), Some("introuvable"));
    }

    #[test]
    fn submit_appends_and_preserves_order() {
        let mut state = AssignmentsState::default();
        for id in ["s1", "s2", "s3"] {
            state.reduce(AssignmentsAction::Submit(Signal::Started));
            state.reduce(AssignmentsAction::Submit(Signal::Succeeded(submission(id))));
        }
        let ids: Vec<&str> = state.submissions.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["s1", "s2", "s3"]);
        assert_eq!(
            state.submissions.iter().find(|s| s.id == "s2"),
            Some(&submission("s2"))
        );
    }

    #[test]
    fn failed_submit_leaves_collection() {
        let mut state = AssignmentsState::default();
        state.reduce(AssignmentsAction::Submit(Signal::Succeeded(submission("s1"))));
        state.reduce(AssignmentsAction::Submit(Signal::Failed("HTTP 413".into())));
        assert_eq!(state.submissions.len(), 1);
    }

    #[test]
    fn grade_appends() {
        let grade = Grade {
            id: "g1".into(),
            grade: 14.0,
            feedback: "Bon travail".into(),
            ..Default::default()
        };
        let mut state = AssignmentsState::default();
        state.reduce(AssignmentsAction::Grade(Signal::Succeeded(grade.clone())));
        state.reduce(AssignmentsAction::Grade(Signal::Succeeded(grade.clone())));
        assert_eq!(state.grades, vec![grade.clone(), grade]);
    }

    #[test]
    fn set_current_and_clear_error() {
        let mut state = AssignmentsState::default();
        state.reduce(AssignmentsAction::Fetch(Signal::Failed("x".into())));
        state.reduce(AssignmentsAction::SetCurrent(Some(assignment("a9"))));
        state.reduce(AssignmentsAction::ClearError);

        assert_eq!(state.current_assignment, Some(assignment("a9")));
        assert_eq!(state.status.error, None);
        assert!(!state.status.loading);
    }
}
