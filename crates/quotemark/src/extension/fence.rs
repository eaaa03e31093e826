//! Verbatim block tracking.
//!
//! Tracks whether we're inside a listing (`----`) or literal (`....`) block
//! so extension syntax appearing in verbatim content is left untouched.

/// Tracks verbatim block state during line-by-line processing.
///
/// The closing delimiter must match the opening delimiter exactly (same
/// character, same length).
#[derive(Debug, Default)]
pub(crate) struct FenceTracker {
    /// The exact opening delimiter token, when inside a verbatim block.
    open: Option<String>,
}

impl FenceTracker {
    /// Create a new fence tracker.
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Check if currently inside a verbatim block.
    pub(crate) fn in_fence(&self) -> bool {
        self.open.is_some()
    }

    /// Update fence state based on a line.
    ///
    /// Call this for each line to track fence state. Returns `true` if the
    /// line is a delimiter (opening or closing).
    pub(crate) fn update(&mut self, line: &str) -> bool {
        let trimmed = line.trim();

        if let Some(open) = &self.open {
            if trimmed == open {
                self.open = None;
                return true;
            }
            false
        } else if let Some(token) = detect_fence(trimmed) {
            self.open = Some(token.to_owned());
            true
        } else {
            false
        }
    }
}

/// Detect a verbatim delimiter line: four or more `-` or `.` characters.
fn detect_fence(trimmed: &str) -> Option<&str> {
    let first = trimmed.chars().next()?;
    if first != '-' && first != '.' {
        return None;
    }

    if trimmed.len() >= 4 && trimmed.chars().all(|c| c == first) {
        Some(trimmed)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_in_fence_initially() {
        let tracker = FenceTracker::new();
        assert!(!tracker.in_fence());
    }

    #[test]
    fn test_listing_fence() {
        let mut tracker = FenceTracker::new();
        assert!(tracker.update("----"));
        assert!(tracker.in_fence());
        assert!(!tracker.update("q:[inside]"));
        assert!(tracker.in_fence());
        assert!(tracker.update("----"));
        assert!(!tracker.in_fence());
    }

    #[test]
    fn test_literal_fence() {
        let mut tracker = FenceTracker::new();
        assert!(tracker.update("...."));
        assert!(tracker.in_fence());
        assert!(tracker.update("...."));
        assert!(!tracker.in_fence());
    }

    #[test]
    fn test_close_requires_exact_token() {
        let mut tracker = FenceTracker::new();
        tracker.update("-----");
        assert!(!tracker.update("----"));
        assert!(tracker.in_fence());
        assert!(tracker.update("-----"));
        assert!(!tracker.in_fence());
    }

    #[test]
    fn test_mismatched_char_does_not_close() {
        let mut tracker = FenceTracker::new();
        tracker.update("----");
        assert!(!tracker.update("...."));
        assert!(tracker.in_fence());
    }

    #[test]
    fn test_short_runs_are_not_fences() {
        let mut tracker = FenceTracker::new();
        assert!(!tracker.update("--"));
        assert!(!tracker.update("..."));
        assert!(!tracker.in_fence());
    }

    #[test]
    fn test_open_block_delimiter_is_not_a_fence() {
        let mut tracker = FenceTracker::new();
        assert!(!tracker.update("--"));
        assert!(!tracker.in_fence());
    }
}
