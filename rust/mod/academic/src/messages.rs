//! Default rejection messages, shown when a failure carries no text of
//! its own. Registered under `error/<operation key>`.

use std::collections::HashMap;
use std::sync::Arc;

use campus_flux::{I18nHandler, I18nStore};

/// Register all error strings.
pub fn register_all(i18n: &I18nStore) {
    i18n.handle("error/#", Arc::new(ErrorStrings::new()));
}

/// The localized default message for operation `key`.
pub fn fallback(i18n: &I18nStore, key: &str) -> String {
    i18n.lookup(&format!("error/{}", key))
        .or_else(|| i18n.lookup("error/generic"))
        .unwrap_or_else(|| "error".to_string())
}

struct ErrorStrings {
    data: HashMap<&'static str, [&'static str; 2]>, // [fr, en]
}

const FR: usize = 0;
const EN: usize = 1;

fn locale_index(locale: &str) -> usize {
    match locale {
        "en" | "en-US" | "en-GB" => EN,
        _ => FR,
    }
}

impl ErrorStrings {
    fn new() -> Self {
        let mut m = HashMap::new();

        m.insert("error/generic", [
            "Une erreur est survenue.",
            "An error occurred.",
        ]);

        // Assignments
        m.insert("error/assignments/fetch", [
            "Une erreur est survenue lors du chargement des devoirs.",
            "An error occurred while loading the assignments.",
        ]);
        m.insert("error/assignments/fetch_one", [
            "Une erreur est survenue lors du chargement du devoir.",
            "An error occurred while loading the assignment.",
        ]);
        m.insert("error/assignments/submit", [
            "Une erreur est survenue lors de la soumission du devoir.",
            "An error occurred while submitting the assignment.",
        ]);
        m.insert("error/assignments/grade", [
            "Une erreur est survenue lors de la notation du devoir.",
            "An error occurred while grading the assignment.",
        ]);

        // Courses
        m.insert("error/courses/fetch", [
            "Une erreur est survenue lors du chargement des cours.",
            "An error occurred while loading the courses.",
        ]);
        m.insert("error/courses/fetch_one", [
            "Une erreur est survenue lors du chargement du cours.",
            "An error occurred while loading the course.",
        ]);
        m.insert("error/courses/enroll", [
            "Une erreur est survenue lors de l'inscription au cours.",
            "An error occurred while enrolling in the course.",
        ]);
        m.insert("error/courses/update_progress", [
            "Une erreur est survenue lors de la mise à jour de la progression.",
            "An error occurred while updating the progress.",
        ]);

        // Quiz
        m.insert("error/quiz/fetch", [
            "Une erreur est survenue lors du chargement des quiz.",
            "An error occurred while loading the quizzes.",
        ]);
        m.insert("error/quiz/fetch_one", [
            "Une erreur est survenue lors du chargement du quiz.",
            "An error occurred while loading the quiz.",
        ]);
        m.insert("error/quiz/create", [
            "Une erreur est survenue lors de la création du quiz.",
            "An error occurred while creating the quiz.",
        ]);
        m.insert("error/quiz/start_attempt", [
            "Une erreur est survenue lors du démarrage du quiz.",
            "An error occurred while starting the quiz.",
        ]);
        m.insert("error/quiz/submit_attempt", [
            "Une erreur est survenue lors de la soumission du quiz.",
            "An error occurred while submitting the quiz.",
        ]);
        m.insert("error/quiz/fetch_statistics", [
            "Une erreur est survenue lors du chargement des statistiques.",
            "An error occurred while loading the statistics.",
        ]);

        Self { data: m }
    }
}

impl I18nHandler for ErrorStrings {
    fn translate(&self, path: &str, locale: &str) -> Option<String> {
        self.data
            .get(path)
            .map(|texts| texts[locale_index(locale)].to_string())
    }
}
