//! Builder warnings with colored terminal output.
//!
//! Provides deduplication to avoid spamming the same warning multiple times.
//! Used by the selector builder to report input it accepts verbatim but
//! does not recognize.

use std::collections::HashSet;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

use owo_colors::OwoColorize;

/// Global set of warnings we've already printed (to deduplicate)
static WARNED: Mutex<Option<HashSet<String>>> = Mutex::new(None);

/// Whether warnings are printed with ANSI colors.
static COLOR: AtomicBool = AtomicBool::new(true);

/// Warn about accepted-but-unrecognized input (prints once per unique message)
///
/// # Example
/// ```ignore
/// warn_once("Selector", "unrecognized combinator '>>'");
/// ```
pub fn warn_once(component: &str, message: &str) {
    let key = format!("[{component}] {message}");
    let should_print = WARNED
        .lock()
        .unwrap_or_else(std::sync::PoisonError::into_inner)
        .get_or_insert_with(HashSet::new)
        .insert(key);

    if should_print {
        let line = format!("[Cassia {component}] ⚠ {message}");
        if COLOR.load(Ordering::Relaxed) {
            eprintln!("{}", line.yellow());
        } else {
            eprintln!("{line}");
        }
    }
}

/// Whether `warn_once` has already printed this warning.
#[must_use]
pub fn has_warned(component: &str, message: &str) -> bool {
    let key = format!("[{component}] {message}");
    WARNED
        .lock()
        .unwrap_or_else(std::sync::PoisonError::into_inner)
        .as_ref()
        .is_some_and(|set| set.contains(&key))
}

/// Clear all recorded warnings
pub fn clear_warnings() {
    let mut guard = WARNED
        .lock()
        .unwrap_or_else(std::sync::PoisonError::into_inner);
    if let Some(set) = guard.as_mut() {
        set.clear();
    }
}

/// Enable or disable colored warning output (the CLI's `--no-color`).
pub fn set_color_enabled(enabled: bool) {
    COLOR.store(enabled, Ordering::Relaxed);
}
