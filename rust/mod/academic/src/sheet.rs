//! Answer sheet for an attempt in progress.

use std::collections::BTreeMap;

use crate::model::QuizAnswer;

/// Selected options per question, keyed by question ID.
///
/// A question counts as answered once it has an entry, even if a
/// multiple-choice selection was later emptied.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AnswerSheet {
    answers: BTreeMap<String, Vec<String>>,
}

impl AnswerSheet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the selection for a question.
    pub fn set(&mut self, question_id: &str, selected: Vec<String>) {
        self.answers.insert(question_id.to_string(), selected);
    }

    /// Single choice and true/false: exactly one option.
    pub fn choose(&mut self, question_id: &str, option_id: &str) {
        self.set(question_id, vec![option_id.to_string()]);
    }

    /// Multiple choice: add or remove one option, keeping pick order.
    pub fn toggle(&mut self, question_id: &str, option_id: &str, checked: bool) {
        let selected = self.answers.entry(question_id.to_string()).or_default();
        selected.retain(|id| id != option_id);
        if checked {
            selected.push(option_id.to_string());
        }
    }

    /// Short answer: the text is stored as the only selection.
    pub fn write(&mut self, question_id: &str, text: &str) {
        self.set(question_id, vec![text.to_string()]);
    }

    pub fn selected(&self, question_id: &str) -> &[String] {
        self.answers.get(question_id).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn answered(&self) -> usize {
        self.answers.len()
    }

    /// Answered share of `total` questions, in percent.
    pub fn progress(&self, total: usize) -> f64 {
        if total == 0 {
            return 0.0;
        }
        self.answered() as f64 / total as f64 * 100.0
    }

    /// The `answers` payload for submitting the attempt.
    pub fn to_answers(&self) -> Vec<QuizAnswer> {
        self.answers
            .iter()
            .map(|(question_id, selected)| QuizAnswer {
                question_id: question_id.clone(),
                selected_options: selected.clone(),
                ..Default::default()
            })
            .collect()
    }
}
