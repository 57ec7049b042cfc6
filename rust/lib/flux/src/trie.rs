use std::collections::HashMap;
use std::sync::RwLock;

/// Thread-safe pattern trie with MQTT-style wildcards.
///
/// - `+` matches exactly one level
/// - `#` matches the remaining levels, including none; only valid last
///
/// Levels are separated by `/`. Used for both subscription routing
/// (`courses/state`, `+/state`, `#`) and request routing.
pub struct Trie<T> {
    root: RwLock<Node<T>>,
}

struct Node<T> {
    children: HashMap<String, Node<T>>,
    plus: Option<Box<Node<T>>>,
    /// Values registered under `<prefix>/#`.
    hash: Vec<T>,
    /// Values whose pattern ends exactly at this node.
    values: Vec<T>,
}

impl<T> Node<T> {
    fn empty() -> Self {
        Self {
            children: HashMap::new(),
            plus: None,
            hash: Vec::new(),
            values: Vec::new(),
        }
    }
}

impl<T: Clone> Trie<T> {
    pub fn new() -> Self {
        Self {
            root: RwLock::new(Node::empty()),
        }
    }

    /// Register `value` under `pattern`.
    pub fn insert(&self, pattern: &str, value: T) {
        let mut root = self.root.write().unwrap_or_else(|e| e.into_inner());
        let mut node = &mut *root;
        for level in levels(pattern) {
            node = match level {
                "#" => {
                    node.hash.push(value);
                    return;
                }
                "+" => &mut **node.plus.get_or_insert_with(|| Box::new(Node::empty())),
                exact => node
                    .children
                    .entry(exact.to_string())
                    .or_insert_with(Node::empty),
            };
        }
        node.values.push(value);
    }

    /// All values whose pattern matches the concrete `topic`.
    ///
    /// Order: deeper `#` matches come after shallower ones; exact and `+`
    /// matches at the same depth follow registration order per pattern.
    pub fn match_topic(&self, topic: &str) -> Vec<T> {
        let root = self.root.read().unwrap_or_else(|e| e.into_inner());
        let topic_levels: Vec<&str> = levels(topic).collect();
        let mut out = Vec::new();
        collect(&root, &topic_levels, &mut out);
        out
    }

    /// Remove values under the exact `pattern` that satisfy `predicate`.
    ///
    /// Returns `true` if anything was removed.
    pub fn remove<F>(&self, pattern: &str, predicate: F) -> bool
    where
        F: Fn(&T) -> bool,
    {
        let mut root = self.root.write().unwrap_or_else(|e| e.into_inner());
        let mut node = &mut *root;
        for level in levels(pattern) {
            node = match level {
                "#" => return retain_not(&mut node.hash, &predicate),
                "+" => match node.plus.as_deref_mut() {
                    Some(child) => child,
                    None => return false,
                },
                exact => match node.children.get_mut(exact) {
                    Some(child) => child,
                    None => return false,
                },
            };
        }
        retain_not(&mut node.values, &predicate)
    }

    /// Whether anything is registered under the exact `pattern`.
    pub fn has_pattern(&self, pattern: &str) -> bool {
        let root = self.root.read().unwrap_or_else(|e| e.into_inner());
        let mut node = &*root;
        for level in levels(pattern) {
            node = match level {
                "#" => return !node.hash.is_empty(),
                "+" => match node.plus.as_deref() {
                    Some(child) => child,
                    None => return false,
                },
                exact => match node.children.get(exact) {
                    Some(child) => child,
                    None => return false,
                },
            };
        }
        !node.values.is_empty()
    }
}

impl<T: Clone> Default for Trie<T> {
    fn default() -> Self {
        Self::new()
    }
}

fn collect<T: Clone>(node: &Node<T>, rest: &[&str], out: &mut Vec<T>) {
    out.extend(node.hash.iter().cloned());
    match rest.split_first() {
        None => out.extend(node.values.iter().cloned()),
        Some((level, tail)) => {
            if let Some(child) = node.children.get(*level) {
                collect(child, tail, out);
            }
            if let Some(child) = node.plus.as_deref() {
                collect(child, tail, out);
            }
        }
    }
}

fn retain_not<T, F: Fn(&T) -> bool>(values: &mut Vec<T>, predicate: &F) -> bool {
    let before = values.len();
    values.retain(|v| !predicate(v));
    values.len() < before
}

/// Non-empty levels of a path. `""` has no levels and addresses the root.
fn levels(path: &str) -> impl Iterator<Item = &str> {
    path.split('/').filter(|l| !l.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sorted(mut v: Vec<u32>) -> Vec<u32> {
        v.sort_unstable();
        v
    }

    #[test]
    fn exact_levels() {
        let trie = Trie::new();
        trie.insert("courses/state", 1);
        trie.insert("quiz/state", 2);

        assert_eq!(trie.match_topic("courses/state"), vec![1]);
        assert_eq!(trie.match_topic("quiz/state"), vec![2]);
        assert!(trie.match_topic("courses").is_empty());
        assert!(trie.match_topic("courses/state/extra").is_empty());
    }

    #[test]
    fn plus_matches_one_level() {
        let trie = Trie::new();
        trie.insert("+/state", 1);

        assert_eq!(trie.match_topic("courses/state"), vec![1]);
        assert_eq!(trie.match_topic("assignments/state"), vec![1]);
        assert!(trie.match_topic("state").is_empty());
        assert!(trie.match_topic("a/b/state").is_empty());
    }

    #[test]
    fn hash_matches_remaining_levels() {
        let trie = Trie::new();
        trie.insert("quiz/#", 1);

        assert_eq!(trie.match_topic("quiz"), vec![1]);
        assert_eq!(trie.match_topic("quiz/state"), vec![1]);
        assert_eq!(trie.match_topic("quiz/attempts/a1/submit"), vec![1]);
        assert!(trie.match_topic("courses/state").is_empty());
    }

    #[test]
    fn root_hash_matches_everything() {
        let trie = Trie::new();
        trie.insert("#", 9);

        assert_eq!(trie.match_topic("courses/state"), vec![9]);
        assert_eq!(trie.match_topic("x"), vec![9]);
    }

    #[test]
    fn overlapping_patterns_all_match() {
        let trie = Trie::new();
        trie.insert("courses/state", 1);
        trie.insert("courses/+", 2);
        trie.insert("+/state", 3);
        trie.insert("courses/#", 4);
        trie.insert("#", 5);

        assert_eq!(sorted(trie.match_topic("courses/state")), vec![1, 2, 3, 4, 5]);
        assert_eq!(sorted(trie.match_topic("quiz/state")), vec![3, 5]);
    }

    #[test]
    fn same_pattern_keeps_registration_order() {
        let trie = Trie::new();
        trie.insert("courses/fetch", 1);
        trie.insert("courses/fetch", 2);
        trie.insert("courses/fetch", 3);

        assert_eq!(trie.match_topic("courses/fetch"), vec![1, 2, 3]);
    }

    #[test]
    fn remove_by_predicate() {
        let trie = Trie::new();
        trie.insert("courses/state", 1);
        trie.insert("courses/state", 2);
        trie.insert("+/state", 3);
        trie.insert("#", 4);

        assert!(trie.remove("courses/state", |v| *v == 1));
        assert!(trie.remove("+/state", |v| *v == 3));
        assert!(trie.remove("#", |v| *v == 4));
        assert!(!trie.remove("courses/state", |v| *v == 1));
        assert!(!trie.remove("missing/path", |_| true));

        assert_eq!(trie.match_topic("courses/state"), vec![2]);
    }

    #[test]
    fn has_pattern_is_exact() {
        let trie = Trie::new();
        trie.insert("courses/+", 1);
        trie.insert("quiz/#", 2);

        assert!(trie.has_pattern("courses/+"));
        assert!(trie.has_pattern("quiz/#"));
        assert!(!trie.has_pattern("courses/state"));
        assert!(!trie.has_pattern("quiz"));
    }

    #[test]
    fn empty_trie_matches_nothing() {
        let trie: Trie<u32> = Trie::default();
        assert!(trie.match_topic("anything").is_empty());
        assert!(!trie.has_pattern("anything"));
    }

    #[test]
    fn concurrent_insert_and_match() {
        use std::sync::Arc;
        use std::thread;

        let trie = Arc::new(Trie::new());
        let handles: Vec<_> = (0..4u32)
            .map(|t| {
                let trie = Arc::clone(&trie);
                thread::spawn(move || {
                    for i in 0..50u32 {
                        trie.insert(&format!("t{}/{}", t, i), t * 100 + i);
                        let _ = trie.match_topic("t0/0");
                    }
                })
            })
            .collect();
        for h in handles {
            h.join().unwrap();
        }

        assert_eq!(trie.match_topic("t3/49"), vec![349]);
    }
}
