//! Checker warnings with colored terminal output.
//!
//! Provides deduplication to avoid spamming the same warning multiple times.
//! The CLI reports parser recoveries through it in verbose mode.

use std::collections::HashSet;
use std::sync::{Mutex, PoisonError};

use owo_colors::OwoColorize;

/// Global set of warnings we've already printed (to deduplicate)
static WARNED: Mutex<Option<HashSet<String>>> = Mutex::new(None);

/// Render the line printed for a warning, without color.
#[must_use]
pub fn format_warning(component: &str, message: &str) -> String {
    format!("[adacheck {component}] ⚠ {message}")
}

/// Warn about a recoverable condition (prints once per unique message)
///
/// # Example
/// ```ignore
/// warn_once("html", "unexpected token in attribute name");
/// ```
pub fn warn_once(component: &str, message: &str) {
    if record(component, message) {
        eprintln!("{}", format_warning(component, message).yellow());
    }
}

/// Remember a warning; returns `true` the first time a message is seen.
fn record(component: &str, message: &str) -> bool {
    let key = format!("[{component}] {message}");
    WARNED
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .get_or_insert_with(HashSet::new)
        .insert(key)
}

/// Clear all recorded warnings (call when checking a new document)
pub fn clear_warnings() {
    let mut guard = WARNED.lock().unwrap_or_else(PoisonError::into_inner);
    if let Some(set) = guard.as_mut() {
        set.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_warning_includes_component() {
        assert_eq!(
            format_warning("html", "bad attribute"),
            "[adacheck html] ⚠ bad attribute"
        );
    }

    #[test]
    fn test_record_deduplicates_until_cleared() {
        let message = "record-dedup-probe";
        assert!(record("test", message));
        assert!(!record("test", message));
        assert!(record("other", message));

        clear_warnings();
        assert!(record("test", message));
    }
}
