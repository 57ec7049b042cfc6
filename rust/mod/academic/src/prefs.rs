//! Client preferences kept outside slice state: the dark-mode flag and
//! the questions a student flagged for review, per quiz.

use std::collections::BTreeSet;
use std::sync::Arc;

use campus_kv::{KVError, KVStore};
use serde::Serialize;
use serde::de::DeserializeOwned;

const DARK_MODE_KEY: &str = "prefs:dark_mode";
const FLAGGED_PREFIX: &str = "prefs:flagged:";

fn flagged_key(quiz_id: &str) -> String {
    format!("{}{}", FLAGGED_PREFIX, quiz_id)
}

/// Preferences backed by an injected [`KVStore`]. Values are stored as
/// JSON.
#[derive(Clone)]
pub struct Preferences {
    kv: Arc<dyn KVStore>,
}

impl Preferences {
    pub fn new(kv: Arc<dyn KVStore>) -> Self {
        Self { kv }
    }

    fn read<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, KVError> {
        match self.kv.get(key)? {
            Some(bytes) => serde_json::from_slice(&bytes)
                .map(Some)
                .map_err(|e| KVError::Serialization(format!("{}: {}", key, e))),
            None => Ok(None),
        }
    }

    fn write<T: Serialize>(&self, key: &str, value: &T) -> Result<(), KVError> {
        let bytes = serde_json::to_vec(value)
            .map_err(|e| KVError::Serialization(format!("{}: {}", key, e)))?;
        self.kv.set(key, &bytes)
    }

    // ── Theme ───────────────────────────────────────────────────────

    pub fn dark_mode(&self) -> Result<bool, KVError> {
        Ok(self.read::<bool>(DARK_MODE_KEY)?.unwrap_or(false))
    }

    pub fn set_dark_mode(&self, on: bool) -> Result<(), KVError> {
        self.write(DARK_MODE_KEY, &on)
    }

    /// Flip the flag and return the new value.
    pub fn toggle_dark_mode(&self) -> Result<bool, KVError> {
        let on = !self.dark_mode()?;
        self.set_dark_mode(on)?;
        Ok(on)
    }

    // ── Flagged questions ───────────────────────────────────────────

    /// Question indexes flagged in `quiz_id`.
    pub fn flagged(&self, quiz_id: &str) -> Result<BTreeSet<usize>, KVError> {
        Ok(self.read(&flagged_key(quiz_id))?.unwrap_or_default())
    }

    /// Flag or unflag question `index`. Returns whether it is now flagged.
    pub fn toggle_flag(&self, quiz_id: &str, index: usize) -> Result<bool, KVError> {
        let mut flagged = self.flagged(quiz_id)?;
        let now_flagged = if flagged.remove(&index) {
            false
        } else {
            flagged.insert(index);
            true
        };
        if flagged.is_empty() {
            self.kv.delete(&flagged_key(quiz_id))?;
        } else {
            self.write(&flagged_key(quiz_id), &flagged)?;
        }
        Ok(now_flagged)
    }

    pub fn clear_flags(&self, quiz_id: &str) -> Result<(), KVError> {
        self.kv.delete(&flagged_key(quiz_id))
    }

    /// Quiz IDs with at least one flagged question.
    pub fn flagged_quizzes(&self) -> Result<Vec<String>, KVError> {
        Ok(self
            .kv
            .scan(FLAGGED_PREFIX)?
            .into_iter()
            .map(|(key, _)| key[FLAGGED_PREFIX.len()..].to_string())
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use campus_kv::{MemoryKV, RedbStore};

    fn prefs() -> Preferences {
        Preferences::new(Arc::new(MemoryKV::new()))
    }

    #[test]
    fn dark_mode_defaults_off_and_toggles() {
        let p = prefs();
        assert!(!p.dark_mode().unwrap());
        assert!(p.toggle_dark_mode().unwrap());
        assert!(p.dark_mode().unwrap());
        p.set_dark_mode(false).unwrap();
        assert!(!p.dark_mode().unwrap());
    }

    #[test]
    fn flags_are_per_quiz() {
        let p = prefs();
        assert!(p.toggle_flag("q1", 3).unwrap());
        assert!(p.toggle_flag("q1", 0).unwrap());
        assert!(p.toggle_flag("q2", 3).unwrap());

        assert_eq!(p.flagged("q1").unwrap().into_iter().collect::<Vec<_>>(), vec![0, 3]);
        assert_eq!(p.flagged_quizzes().unwrap(), vec!["q1", "q2"]);

        assert!(!p.toggle_flag("q1", 3).unwrap());
        assert_eq!(p.flagged("q1").unwrap().len(), 1);
    }

    #[test]
    fn unflagging_last_question_removes_key() {
        let p = prefs();
        p.toggle_flag("q1", 1).unwrap();
        p.toggle_flag("q1", 1).unwrap();
        assert!(p.flagged_quizzes().unwrap().is_empty());

        p.toggle_flag("q2", 1).unwrap();
        p.clear_flags("q2").unwrap();
        assert!(p.flagged("q2").unwrap().is_empty());
    }

    #[test]
    fn corrupt_value_is_serialization_error() {
        let kv = Arc::new(MemoryKV::new());
        kv.set(DARK_MODE_KEY, b"not json").unwrap();
        let p = Preferences::new(kv);
        assert!(matches!(p.dark_mode(), Err(KVError::Serialization(_))));
    }

    #[test]
    fn persisted_across_instances() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.redb");
        {
            let p = Preferences::new(Arc::new(RedbStore::open(&path).unwrap()));
            p.set_dark_mode(true).unwrap();
            p.toggle_flag("q1", 2).unwrap();
        }
        let p = Preferences::new(Arc::new(RedbStore::open(&path).unwrap()));
        assert!(p.dark_mode().unwrap());
        assert!(p.flagged("q1").unwrap().contains(&2));
    }
}
