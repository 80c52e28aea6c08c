//! Key-sequence detection for the easter-egg unlock.

use std::collections::VecDeque;

/// Detects a fixed key sequence inside an arbitrary key stream.
///
/// Keys are compared case-insensitively. The detector keeps a sliding
/// window of the most recent keys and fires exactly when the window equals
/// the configured sequence, so stray or repeated keys before a complete
/// run never prevent a match (`up up up down down ...` still completes the
/// classic code).
#[derive(Debug, Clone)]
pub struct SequenceDetector {
    sequence: Vec<String>,
    recent: VecDeque<String>,
}

impl SequenceDetector {
    /// Build a detector for the given key sequence.
    pub fn new<I, S>(sequence: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            sequence: sequence
                .into_iter()
                .map(|key| key.into().to_lowercase())
                .collect(),
            recent: VecDeque::new(),
        }
    }

    /// The classic code: `up up down down left right left right b a`.
    pub fn konami() -> Self {
        Self::new([
            "up", "up", "down", "down", "left", "right", "left", "right", "b", "a",
        ])
    }

    /// Feed one key.
    ///
    /// Returns `true` exactly when this key completes the sequence; the
    /// detector then resets so another full entry is needed to fire again.
    pub fn push(&mut self, key: &str) -> bool {
        if self.sequence.is_empty() {
            return false;
        }
        if self.recent.len() == self.sequence.len() {
            self.recent.pop_front();
        }
        self.recent.push_back(key.to_lowercase());
        if self.recent.len() == self.sequence.len() && self.recent.iter().eq(self.sequence.iter()) {
            self.recent.clear();
            return true;
        }
        false
    }

    /// Forget all fed keys.
    pub fn reset(&mut self) {
        self.recent.clear();
    }

    /// Number of keys currently matched, i.e. the longest suffix of the
    /// fed keys that is a prefix of the sequence.
    pub fn progress(&self) -> usize {
        let max = self.recent.len().min(self.sequence.len());
        (0..=max)
            .rev()
            .find(|&count| {
                self.recent
                    .iter()
                    .skip(self.recent.len() - count)
                    .eq(self.sequence.iter().take(count))
            })
            .unwrap_or(0)
    }

    /// Length of the configured sequence.
    pub fn len(&self) -> usize {
        self.sequence.len()
    }

    /// True when the configured sequence is empty (such a detector never fires).
    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::SequenceDetector;

    const CODE: [&str; 10] = [
        "up", "up", "down", "down", "left", "right", "left", "right", "b", "a",
    ];

    #[test]
    fn test_full_sequence_fires_on_last_key() {
        let mut detector = SequenceDetector::konami();
        let (last, head) = CODE.split_last().unwrap();
        for key in head {
            assert!(!detector.push(key));
        }
        assert!(detector.push(last));
    }

    #[test]
    fn test_matching_ignores_case() {
        let mut detector = SequenceDetector::konami();
        let fired = CODE
            .iter()
            .map(|key| detector.push(&key.to_uppercase()))
            .any(|done| done);
        assert!(fired);
    }

    #[test]
    fn test_mismatch_resets_progress() {
        let mut detector = SequenceDetector::konami();
        detector.push("up");
        detector.push("up");
        assert_eq!(detector.progress(), 2);

        detector.push("select");
        assert_eq!(detector.progress(), 0);
    }

    #[test]
    fn test_extra_leading_key_still_completes() {
        // A third "up" keeps the last two as valid progress.
        let mut detector = SequenceDetector::konami();
        detector.push("up");
        let fired = CODE.iter().map(|key| detector.push(key)).any(|done| done);
        assert!(fired);
    }

    #[test]
    fn test_fires_once_then_requires_full_reentry() {
        let mut detector = SequenceDetector::konami();
        for key in CODE {
            detector.push(key);
        }
        assert!(!detector.push("a"));
        assert_eq!(detector.progress(), 0);
    }

    #[test]
    fn test_reset_clears_progress() {
        let mut detector = SequenceDetector::new(["b", "a"]);
        detector.push("b");
        assert_eq!(detector.progress(), 1);
        detector.reset();
        assert_eq!(detector.progress(), 0);
    }

    #[test]
    fn test_empty_sequence_never_fires() {
        let mut detector = SequenceDetector::new(Vec::<String>::new());
        assert!(detector.is_empty());
        assert!(!detector.push("a"));
    }
}
